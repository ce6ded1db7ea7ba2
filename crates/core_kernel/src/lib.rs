//! Core Kernel - Foundational types for the expense-sharing engine
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and allocation primitives
//! - Strongly-typed identifiers for members, charges, receipts, and claims
//! - Common error types

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{
    ChargeId, ClaimId, GroupId, ItemId, MemberId, PaymentId, ReceiptId,
};
pub use money::{Currency, Money, MoneyError, Rate};
