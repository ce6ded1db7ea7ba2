//! Receipt domain errors

use thiserror::Error;

use crate::item::ItemRole;

/// Why a member may not place a claim on an item
///
/// These surface to the user as-is when a claim is rejected, so the
/// messages are written for display.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimDenied {
    /// The row is tax, tip, a discount, or another non-claimable role
    #[error("{0} rows cannot be claimed")]
    SpecialItem(ItemRole),

    /// The row is a zero-quantity placeholder left by quantity expansion
    #[error("This line was expanded into per-unit rows; claim those instead")]
    ExpansionPlaceholder,

    /// The member already holds the whole item
    #[error("You already claim this item in full")]
    AlreadyClaimedInFull,

    /// Other members' claims leave nothing to take
    #[error("This item is already fully claimed")]
    FullyClaimed,
}
