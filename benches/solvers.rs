use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use egg_drop::{CoverageMaximizer, Problem, WorstCaseMinimizer};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_worst_case_vs_coverage(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_drops");
    for &(eggs, floors) in &[(2i64, 1_000i64), (3, 10_000), (5, 100_000)] {
        let problem = Problem::new(eggs, floors).unwrap();
        let label = format!("e{eggs}_f{floors}");

        let before = rss_kib();
        let drops = WorstCaseMinimizer::min_drops(&problem).unwrap();
        // record memory delta to stderr to avoid criterion noise
        eprintln!(
            "RSS KiB delta (worst_case {label}, drops={drops}): {}",
            rss_kib().saturating_sub(before)
        );

        group.bench_with_input(BenchmarkId::new("worst_case", &label), &problem, |b, p| {
            b.iter(|| black_box(WorstCaseMinimizer::min_drops(black_box(p)).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("coverage", &label), &problem, |b, p| {
            b.iter(|| black_box(CoverageMaximizer::min_drops(black_box(p))))
        });
    }
    group.finish();
}

fn bench_coverage_tall_buildings(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage_tall");
    for &floors in &[1_000_000i64, 1_000_000_000, i64::MAX] {
        let problem = Problem::new(3, floors).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(floors), &problem, |b, p| {
            b.iter(|| black_box(CoverageMaximizer::min_drops(black_box(p))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_worst_case_vs_coverage, bench_coverage_tall_buildings);
criterion_main!(benches);
