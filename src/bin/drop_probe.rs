use std::env;
use std::time::Instant;

use egg_drop::{CoverageMaximizer, DropPlan, Problem, SolverBuilder, Strategy, WorstCaseMinimizer};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const FLOOR_COUNTS: &[i64] = &[100, 1_000, 10_000, 100_000, 1_000_000];
const EGG_COUNTS: &[i64] = &[1, 2, 3, 5, 10, 64];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("drop_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!(
        "drop_probe: eggs <= {}, linear-scan check up to {} floors, solver strategy {}",
        options.max_eggs,
        options.verify_limit,
        options.strategy.label()
    );

    let mut sys = System::new();
    let mut measurements = Vec::new();

    let eggs: Vec<i64> = EGG_COUNTS
        .iter()
        .copied()
        .filter(|&e| e <= options.max_eggs)
        .collect();

    eprintln!("[1/2] worst-case table vs floor coverage vs configured solver");
    measurements.extend(run_solvers(&options, &eggs, &mut sys));
    eprintln!();

    eprintln!("[2/2] drop plans");
    measurements.extend(run_plans(&options, &eggs, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("drop_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: i64,
    max_eggs: i64,
    strategy: Strategy,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 1_000i64;
        let mut max_eggs = 10i64;
        let mut strategy = Strategy::Auto;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_count(value, "verify limit")?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_count(&value, "verify limit")?;
            } else if let Some(value) = arg.strip_prefix("--max-eggs=") {
                max_eggs = parse_count(value, "max eggs")?;
            } else if arg == "--max-eggs" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-eggs".to_string())?
                    .into();
                max_eggs = parse_count(&value, "max eggs")?;
            } else if let Some(value) = arg.strip_prefix("--strategy=") {
                strategy = parse_strategy(value)?;
            } else if arg == "--strategy" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --strategy".to_string())?
                    .into();
                strategy = parse_strategy(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
            max_eggs,
            strategy,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin drop_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest floor count checked against a linear-scan table (default: 1000)
  --max-eggs <N>                Largest egg count to probe (default: 10)
  --strategy <worst_case|coverage|auto>
                                Strategy for the configured-solver run (default: auto)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin drop_probe
  cargo run --release --bin drop_probe -- --format table --max-eggs 64
"
        );
    }
}

fn parse_strategy(value: &str) -> Result<Strategy, String> {
    Strategy::from_label(value).ok_or_else(|| format!("unknown strategy '{value}'"))
}

fn parse_count(value: &str, what: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .ok()
        .filter(|v| *v >= 0)
        .ok_or_else(|| format!("{what} must be a non-negative integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    drops: u64,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_solvers(options: &Options, eggs: &[i64], sys: &mut System) -> Vec<Measurement> {
    let configs: Vec<(i64, i64)> = eggs
        .iter()
        .flat_map(|&e| FLOOR_COUNTS.iter().map(move |&f| (e, f)))
        .collect();
    let total = configs.len();
    let mut out = Vec::with_capacity(total * 3);
    let solver = SolverBuilder::new().strategy(options.strategy).build();

    for (idx, &(e, f)) in configs.iter().enumerate() {
        eprint!("      [{}/{}] eggs={}, floors={}... ", idx + 1, total, e, f);
        let problem = match Problem::new(e, f) {
            Ok(p) => p,
            Err(err) => {
                eprintln!("✗ {err}");
                continue;
            }
        };
        let size_desc = format!("eggs={e},floors={f}");

        let mut coverage = 0u64;
        let cov = measure("coverage", size_desc.clone(), sys, || {
            coverage = CoverageMaximizer::min_drops(&problem);
            (coverage, verify_against_scan(options, e, f, coverage))
        });

        let table = measure("worst_case", size_desc.clone(), sys, || {
            match WorstCaseMinimizer::min_drops(&problem) {
                Ok(drops) if drops == coverage => (drops, (VerificationStatus::Passed, None)),
                Ok(drops) => (
                    drops,
                    (
                        VerificationStatus::Failed,
                        Some(format!("coverage={coverage}, table={drops}")),
                    ),
                ),
                Err(err) => (0, (VerificationStatus::Failed, Some(err.to_string()))),
            }
        });

        let configured = measure("solver", size_desc, sys, || match solver.solve(&problem) {
            Ok(sol) if sol.drops == coverage => (sol.drops, (VerificationStatus::Passed, None)),
            Ok(sol) => (
                sol.drops,
                (
                    VerificationStatus::Failed,
                    Some(format!(
                        "coverage={coverage}, {}={}",
                        sol.strategy.label(),
                        sol.drops
                    )),
                ),
            ),
            Err(err) => (0, (VerificationStatus::Failed, Some(err.to_string()))),
        });

        eprintln!(
            "{} drops={}, coverage={:.3}s, table={:.3}s, solver={:.3}s",
            table.verification_status.icon(),
            table.drops,
            cov.wall_s,
            table.wall_s,
            configured.wall_s
        );
        out.push(cov);
        out.push(table);
        out.push(configured);
    }
    out
}

fn run_plans(options: &Options, eggs: &[i64], sys: &mut System) -> Vec<Measurement> {
    let configs: Vec<(i64, i64)> = eggs
        .iter()
        .filter(|&&e| e > 1)
        .flat_map(|&e| FLOOR_COUNTS.iter().map(move |&f| (e, f)))
        .collect();
    let total = configs.len();

    configs
        .iter()
        .enumerate()
        .filter_map(|(idx, &(e, f))| {
            eprint!("      [{}/{}] eggs={}, floors={}... ", idx + 1, total, e, f);
            let problem = Problem::new(e, f).ok()?;
            let m = measure("drop_plan", format!("eggs={e},floors={f}"), sys, || {
                let plan = DropPlan::new(&problem);
                let status = if f <= options.verify_limit {
                    let worst = plan.worst_case_trials() as u64;
                    if worst == plan.min_drops() {
                        (VerificationStatus::Passed, None)
                    } else {
                        (
                            VerificationStatus::Failed,
                            Some(format!("plan used {worst}, budget {}", plan.min_drops())),
                        )
                    }
                } else {
                    (VerificationStatus::NotChecked, None)
                };
                (plan.min_drops(), status)
            });
            eprintln!(
                "{} drops={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                m.drops,
                m.wall_s,
                m.verification_status.label()
            );
            Some(m)
        })
        .collect()
}

fn verify_against_scan(
    options: &Options,
    eggs: i64,
    floors: i64,
    drops: u64,
) -> (VerificationStatus, Option<String>) {
    if floors > options.verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    let baseline = linear_scan_drops(eggs as usize, floors as usize);
    if baseline == drops {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {baseline}, got {drops}")),
        )
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("summary");
    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1);
    let pct = |n: usize| 100.0 * n as f64 / total as f64;
    eprintln!(
        "  runs={} passed={} ({:.1}%) failed={} ({:.1}%) unchecked(floors > {})={}",
        measurements.len(),
        passed,
        pct(passed),
        failed,
        pct(failed),
        options.verify_limit,
        not_checked
    );

    for m in measurements {
        if matches!(m.verification_status, VerificationStatus::Failed) {
            eprintln!(
                "  ✗ {} ({}): {}",
                m.scenario,
                m.size_desc,
                m.verification_detail.as_deref().unwrap_or("mismatch")
            );
        }
    }

    for scenario in ["coverage", "worst_case", "solver", "drop_plan"] {
        let times: Vec<f64> = measurements
            .iter()
            .filter(|m| m.scenario == scenario)
            .map(|m| m.wall_s)
            .collect();
        if times.is_empty() {
            continue;
        }
        let max_time = times.iter().copied().fold(0.0, f64::max);
        let avg_time = times.iter().sum::<f64>() / times.len() as f64;
        eprintln!(
            "  {scenario}: runs={}, max={max_time:.3}s, avg={avg_time:.3}s",
            times.len()
        );
    }
}

fn measure<F>(scenario: &'static str, size_desc: String, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (u64, (VerificationStatus, Option<String>)),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (drops, (status, detail)) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        drops,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,drops,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},\"{}\",{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.drops,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>8}  {:>12}  {:>14}  {:>12}  {}",
        "scenario", "size", "drops", "wall_s", "rss_delta_kib", "status", "detail",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<8}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>8}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.drops,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"drops\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.drops,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Full `T[i][j]` table with a linear scan over the first-drop floor.
fn linear_scan_drops(eggs: usize, floors: usize) -> u64 {
    let mut dp = vec![vec![0u64; floors + 1]; eggs + 1];
    for j in 0..=floors {
        dp[1][j] = j as u64;
    }
    for i in 2..=eggs {
        for j in 1..=floors {
            dp[i][j] = (1..=j)
                .map(|m| 1 + dp[i - 1][m - 1].max(dp[i][j - m]))
                .min()
                .unwrap_or(0);
        }
    }
    dp[eggs][floors]
}
