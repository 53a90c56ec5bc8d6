//! Error types for input validation.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EggDropError>;

/// Rejected inputs. Every valid query has a total, deterministic answer, so
/// these are the only failure modes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggDropError {
    #[error("egg count must be at least 1, got {0}")]
    InvalidEggCount(i64),

    #[error("floor count must be non-negative, got {0}")]
    InvalidFloorCount(i64),

    #[error("worst-case table for {floors} floors does not fit in memory on this target")]
    TableTooLarge { floors: u64 },

    #[error("critical floor {critical} is above the top floor {floors}")]
    CriticalFloorOutOfRange { critical: u64, floors: u64 },
}

#[cfg(test)]
mod tests {
    use super::EggDropError;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            EggDropError::InvalidEggCount(0).to_string(),
            "egg count must be at least 1, got 0"
        );
        assert_eq!(
            EggDropError::InvalidFloorCount(-3).to_string(),
            "floor count must be non-negative, got -3"
        );
        let err = EggDropError::CriticalFloorOutOfRange {
            critical: 12,
            floors: 10,
        };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("10"));
    }
}
