//! Constraint evaluation.
//!
//! Pairs a reading with its configured limit and decides whether the limit
//! is violated. Size strings on either side are normalized through the unit
//! parser before comparison.

use crate::core::config::Constraint;
use crate::core::probe::Reading;
use crate::core::units::parse_size;

/// Outcome of comparing one reading against its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Reading strictly exceeds the limit
    Violated,
    /// Reading is at or below the limit
    Within,
    /// Reading and limit could not be compared; must count as no violation
    Incomparable,
}

/// Compare a reading against its configured limit.
///
/// Violation requires strict inequality: a reading equal to its limit is
/// `Within`. An unparseable size string on either side, or a kind mismatch
/// between reading and limit, yields `Incomparable` so a parse failure can
/// never trigger a false alert.
pub fn evaluate(reading: &Reading, limit: &Constraint) -> Verdict {
    match (reading, limit) {
        (Reading::Number(r), Constraint::Number(l)) => {
            if r > l {
                Verdict::Violated
            } else {
                Verdict::Within
            }
        }
        (Reading::Size(r), Constraint::Size(l)) => match (parse_size(r), parse_size(l)) {
            (Some(r), Some(l)) => {
                if r > l {
                    Verdict::Violated
                } else {
                    Verdict::Within
                }
            }
            _ => Verdict::Incomparable,
        },
        _ => Verdict::Incomparable,
    }
}
