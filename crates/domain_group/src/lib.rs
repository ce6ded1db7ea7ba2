//! Group Domain - Member Rosters
//!
//! A group is the boundary inside which charges, payments, and receipts are
//! shared. The engine never creates or deletes members on its own; member
//! identity is assigned by the host application and handed in as part of a
//! snapshot. This crate only keeps the roster consistent (no duplicate
//! members, removals must reference a member that exists) and exposes the
//! ordered member-id list the computation crates consume.

pub mod error;
pub mod group;
pub mod member;

pub use error::GroupError;
pub use group::Group;
pub use member::Member;
