//! Iterative evaluation of G(n)
//!
//! G(n) = n for n <= 3, and G(n) = G(n - 1) + 2 * G(n - 2) + 3 * G(n - 3)
//! otherwise. Evaluation runs in O(n) time with a three-term window.

use super::types::RecurrenceError;
use crate::consts::cli_consts::SEED_LIMIT;
use log::{debug, trace};

/// Sliding window over the three most recent terms.
#[derive(Debug, Default)]
struct Accumulators {
    /// Most recent term.
    total: u64,
    /// Value of `total` before the last update.
    z: u64,
    /// Value of `z` before the last update.
    y: u64,
}

impl Accumulators {
    fn shift(&mut self, term: u64) {
        self.y = self.z;
        self.z = self.total;
        self.total = term;
    }

    /// Next term of the recurrence, or `None` if it does not fit in a u64.
    fn next_term(&self) -> Option<u64> {
        let two_back = self.z.checked_mul(2)?;
        let three_back = self.y.checked_mul(3)?;
        self.total.checked_add(two_back)?.checked_add(three_back)
    }
}

/// Runs the recurrence up to `n`, handing every term G(i), i >= 1, to `on_term`.
fn run(n: i64, mut on_term: impl FnMut(i64, u64)) -> Result<u64, RecurrenceError> {
    if n < 1 {
        return Err(RecurrenceError::InvalidArgument { n });
    }

    let mut acc = Accumulators {
        total: 1,
        ..Default::default()
    };
    let mut i: i64 = 0;

    while i <= n {
        while i <= SEED_LIMIT && i <= n {
            acc.shift(i as u64);
            if i >= 1 {
                on_term(i, acc.total);
            }
            i += 1;
        }

        // Completion step: runs once each time the seeding loop above is exhausted.
        if i <= n {
            let next = acc.next_term().ok_or(RecurrenceError::Overflow { n: i })?;
            acc.shift(next);
            trace!("G({}) = {} (z = {})", i, acc.total, acc.z);
            on_term(i, acc.total);
        }
        i += 1;
    }

    Ok(acc.total)
}

/// Returns G(n).
///
/// # Errors
/// * `InvalidArgument` if `n < 1`.
/// * `Overflow` if G(n) does not fit in a `u64`.
pub fn evaluate(n: i64) -> Result<u64, RecurrenceError> {
    debug!("Evaluating G({})", n);
    let total = run(n, |_, _| {})?;
    debug!("G({}) = {}", n, total);
    Ok(total)
}

/// Returns G(1), G(2), ..., G(n) computed in a single pass.
pub fn sequence(n: i64) -> Result<Vec<u64>, RecurrenceError> {
    debug!("Evaluating G(1..={})", n);
    let mut terms = Vec::new();
    run(n, |_, term| terms.push(term))?;
    Ok(terms)
}

/// Largest n for which [`evaluate`] succeeds.
pub fn max_supported_n() -> i64 {
    let mut last = 0;
    match run(i64::MAX, |i, _| last = i) {
        Err(RecurrenceError::Overflow { .. }) => last,
        _ => i64::MAX,
    }
}
