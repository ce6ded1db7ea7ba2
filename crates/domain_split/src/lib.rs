//! Split Domain - Charge Division Policies
//!
//! This crate computes each participant's owed amount for a single charge
//! under one of four splitting policies:
//!
//! - **Equal**: the amount is divided evenly among the selected members
//! - **Exact**: the caller supplies each member's amount directly
//! - **Percent**: each member owes a percentage of the amount
//! - **Shares**: members split proportionally to integer-like share weights
//!
//! # Sum conservation
//!
//! Every policy except Exact guarantees that the produced shares sum to the
//! charge amount: each share is rounded to the currency's minor unit and the
//! cumulative rounding remainder is assigned to the last participating entry.
//! The rule is iteration-order dependent, so instructions carry ordered
//! vectors rather than maps and callers own the order.
//!
//! # Failure policy
//!
//! The split functions never fail; degenerate input (no members, all-zero
//! weights, no positive amounts) yields an empty split. User-correctable
//! problems are reported only by the explicit [`validate`] entry point.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_split::{compute, validate, SplitInstruction};
//!
//! let instruction = SplitInstruction::Equal { members };
//! validate(dinner_total, &instruction)?;
//! let shares = compute(dinner_total, &instruction);
//! ```

pub mod calculator;
pub mod error;
pub mod instruction;
pub mod share;

pub use calculator::{compute, equal_split, exact_split, percent_split, shares_split, validate};
pub use error::SplitError;
pub use instruction::SplitInstruction;
pub use share::SplitShare;
