//! Receipt Domain - Itemized Claims and Proration
//!
//! The second way balances come to exist in this system: members claim
//! fractional ownership of individual line items on a scanned receipt,
//! and the receipt's aggregate charges (tax, tip, service fee, discount)
//! are prorated across claimants in proportion to their claimed subtotal.
//!
//! # Pipeline
//!
//! 1. Upstream OCR extraction supplies [`ReceiptItem`]s and a read-only
//!    [`ReceiptCharges`] aggregate.
//! 2. Members assert [`ItemClaim`]s; [`check_claim`] gates what a member
//!    may still claim.
//! 3. [`compute_member_totals`] turns claims into per-member totals,
//!    including each member's proportional share of the aggregate charges
//!    and a final reconciliation pass against the receipt's declared
//!    total.
//! 4. [`generate_summary`] packages counts, aggregate figures, and the
//!    member totals for display.
//!
//! All computations are pure and deterministic; empty inputs produce
//! empty or zero outputs rather than errors.

pub mod charges;
pub mod claim;
pub mod error;
pub mod item;
pub mod prorate;
pub mod summary;

pub use charges::ReceiptCharges;
pub use claim::{
    check_claim, claimed_amount, claimed_fraction, is_fully_claimed, remaining_fraction,
    ClaimOpening, ItemClaim, CLAIM_EPSILON,
};
pub use error::ClaimDenied;
pub use item::{ItemRole, ReceiptItem};
pub use prorate::{
    compute_member_totals, ClaimedItemShare, MemberReceiptTotal, RECONCILIATION_CAP,
};
pub use summary::{generate_summary, ReceiptSummary, SUMMARY_CLAIMED_THRESHOLD};
