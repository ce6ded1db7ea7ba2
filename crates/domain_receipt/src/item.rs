//! Receipt line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ItemId, Money};

/// The role a line on a receipt plays
///
/// Only `Regular` lines can be claimed; everything else is either an
/// aggregate row the prorater distributes (tax, tip, service charge,
/// discount), a structural row (subtotal, total), or an attachment to
/// another line (modifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRole {
    /// An ordinary claimable line
    Regular,
    /// Tax row
    Tax,
    /// Tip/gratuity row
    Tip,
    /// Discount row (negative price)
    Discount,
    /// Subtotal row
    Subtotal,
    /// Grand-total row
    Total,
    /// Service charge row
    ServiceCharge,
    /// Modifier attached to a parent item ("extra cheese")
    Modifier,
}

impl ItemRole {
    /// Returns true for every role other than `Regular`
    pub fn is_special(&self) -> bool {
        !matches!(self, ItemRole::Regular)
    }
}

impl fmt::Display for ItemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemRole::Regular => "regular",
            ItemRole::Tax => "tax",
            ItemRole::Tip => "tip",
            ItemRole::Discount => "discount",
            ItemRole::Subtotal => "subtotal",
            ItemRole::Total => "total",
            ItemRole::ServiceCharge => "service charge",
            ItemRole::Modifier => "modifier",
        };
        write!(f, "{}", name)
    }
}

/// A single line item extracted from a receipt
///
/// Multi-quantity lines may be expanded upstream into per-unit rows; the
/// original line is kept as a zero-quantity placeholder with the expanded
/// rows pointing back at it via `parent_id`. Placeholders are not
/// claimable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    /// Unique identifier
    pub id: ItemId,
    /// Line description as printed
    pub description: String,
    /// Total price for the line
    pub price: Money,
    /// What the line represents
    pub role: ItemRole,
    /// Quantity; zero marks an expansion placeholder
    pub quantity: Decimal,
    /// Parent line for expanded rows and modifiers
    pub parent_id: Option<ItemId>,
}

impl ReceiptItem {
    /// Creates a regular, quantity-one line
    pub fn new(description: impl Into<String>, price: Money) -> Self {
        Self {
            id: ItemId::new_v7(),
            description: description.into(),
            price,
            role: ItemRole::Regular,
            quantity: Decimal::ONE,
            parent_id: None,
        }
    }

    /// Sets the role
    pub fn with_role(mut self, role: ItemRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    /// Links to a parent line
    pub fn with_parent(mut self, parent_id: ItemId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Returns true if members may claim fractions of this line
    ///
    /// Claimable means a `Regular` role and a nonzero quantity;
    /// zero-quantity placeholders left behind by multi-quantity expansion
    /// are excluded.
    pub fn is_claimable(&self) -> bool {
        self.role == ItemRole::Regular && self.quantity > Decimal::ZERO
    }
}
