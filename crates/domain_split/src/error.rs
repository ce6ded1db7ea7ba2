//! Split domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{Money, MoneyError};

/// Errors reported by the split validator
///
/// These represent user-correctable input problems (wrong totals, missing
/// selections). The split functions themselves never produce them.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Equal policy with no members selected
    #[error("At least one member is required for an equal split")]
    NoMembers,

    /// Exact policy amounts do not reach the charge total
    #[error("Split amounts must sum to the charge amount: expected {expected}, got {actual}")]
    AmountMismatch {
        expected: Money,
        actual: Money,
    },

    /// Percent policy percentages do not sum to 100
    #[error("Percentages must sum to 100, got {0}")]
    PercentTotal(Decimal),

    /// Shares policy with no positive weight
    #[error("Total share weight must be greater than zero")]
    NoShareWeight,

    /// Mixed currencies in the instruction data
    #[error(transparent)]
    Money(#[from] MoneyError),
}
