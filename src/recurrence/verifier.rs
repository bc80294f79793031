//! Known-value verification

use super::engine::evaluate;
use super::types::RecurrenceError;
use crate::consts::cli_consts::KNOWN_VALUES;
use log::debug;

/// Checks the evaluator against the reference table.
pub struct KnownValues;

impl KnownValues {
    /// Evaluate every n in the reference table and compare.
    pub fn check() -> Result<(), RecurrenceError> {
        for (n, expected) in KNOWN_VALUES {
            Self::check_one(n, expected, evaluate(n)?)?;
        }
        Ok(())
    }

    fn check_one(n: i64, expected: u64, actual: u64) -> Result<(), RecurrenceError> {
        if actual != expected {
            return Err(RecurrenceError::Mismatch {
                n,
                expected,
                actual,
            });
        }
        debug!("G({}) = {} matches the reference table", n, actual);
        Ok(())
    }
}
