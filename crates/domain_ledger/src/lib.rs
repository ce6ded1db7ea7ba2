//! Ledger Domain - Balances and Debt Simplification
//!
//! This crate derives each member's net financial position from a history
//! of charges and direct payments, and reduces the resulting many-party
//! debt graph to a short list of settlement suggestions.
//!
//! # Trust model
//!
//! Aggregation trusts its inputs: no member deduplication, no check that a
//! charge's splits sum to its amount, no rejection of negative amounts.
//! Filtering belongs to the caller; the split domain's validator is the
//! place where user-correctable problems are caught. A payment larger than
//! the debt it settles is not rejected either - it legitimately flips the
//! sign of the relationship, leaving the receiver owing the excess.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{compute_balances_with_payments, simplify};
//!
//! let balances = compute_balances_with_payments(&charges, &payments, &members, currency);
//! for suggestion in simplify(&balances) {
//!     println!("{} pays {} {}", suggestion.from_id, suggestion.to_id, suggestion.amount);
//! }
//! ```

pub mod balance;
pub mod charge;
pub mod payment;
pub mod simplify;

pub use balance::{compute_balances, compute_balances_with_payments, Balances};
pub use charge::Charge;
pub use payment::{Payment, PaymentMethod};
pub use simplify::{simplify, Settlement};
