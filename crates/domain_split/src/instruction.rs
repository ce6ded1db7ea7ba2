//! Split instructions
//!
//! An instruction names the policy and carries its data as an ordered
//! sequence. Order matters: the last participating entry absorbs the
//! rounding remainder, so the same members in a different order can
//! produce a differently distributed odd cent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{MemberId, Money};

/// How a charge should be divided among members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SplitInstruction {
    /// Divide the amount evenly among the members
    Equal {
        /// Participating members, in order
        members: Vec<MemberId>,
    },
    /// The caller supplies each member's amount directly
    Exact {
        /// Per-member amounts, in order
        amounts: Vec<(MemberId, Money)>,
    },
    /// Each member owes a percentage of the amount
    Percent {
        /// Per-member percentages (0-100), in order
        percents: Vec<(MemberId, Decimal)>,
    },
    /// Members split proportionally to share weights
    Shares {
        /// Per-member share weights, in order
        weights: Vec<(MemberId, Decimal)>,
    },
}

impl SplitInstruction {
    /// Returns the policy name for display and logging
    pub fn policy_name(&self) -> &'static str {
        match self {
            SplitInstruction::Equal { .. } => "equal",
            SplitInstruction::Exact { .. } => "exact",
            SplitInstruction::Percent { .. } => "percent",
            SplitInstruction::Shares { .. } => "shares",
        }
    }
}
