//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::{Currency, ItemId, MemberId, Money};
use domain_ledger::{Charge, Payment, PaymentMethod};
use domain_receipt::{ItemClaim, ItemRole, ReceiptCharges, ReceiptItem};
use domain_split::SplitShare;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for constructing test charges
pub struct ChargeBuilder {
    payer_id: MemberId,
    description: String,
    amount: Money,
    splits: Vec<SplitShare>,
    charge_date: DateTime<Utc>,
}

impl ChargeBuilder {
    /// Creates a new builder with default values
    pub fn new(payer_id: MemberId) -> Self {
        Self {
            payer_id,
            description: "Groceries".to_string(),
            amount: MoneyFixtures::usd_100(),
            splits: Vec::new(),
            charge_date: TemporalFixtures::dinner_night(),
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the charge amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Adds a split row for a member
    pub fn owed_by(mut self, member_id: MemberId, amount: Money) -> Self {
        self.splits.push(SplitShare { member_id, amount });
        self
    }

    /// Splits the charge amount evenly across the given members
    pub fn split_evenly(mut self, members: &[MemberId]) -> Self {
        self.splits = self
            .amount
            .split_even(members.len())
            .into_iter()
            .zip(members)
            .map(|(amount, member_id)| SplitShare {
                member_id: *member_id,
                amount,
            })
            .collect();
        self
    }

    /// Sets the expense date
    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.charge_date = date;
        self
    }

    /// Builds the charge
    pub fn build(self) -> Charge {
        Charge::new(self.payer_id, self.description, self.amount, self.splits)
            .dated(self.charge_date)
    }
}

/// Builder for constructing test payments
pub struct PaymentBuilder {
    from_id: MemberId,
    to_id: MemberId,
    amount: Money,
    method: PaymentMethod,
    note: Option<String>,
}

impl PaymentBuilder {
    /// Creates a new builder with default values
    pub fn new(from_id: MemberId, to_id: MemberId) -> Self {
        Self {
            from_id,
            to_id,
            amount: Money::new(dec!(10.00), Currency::USD),
            method: PaymentMethod::Cash,
            note: None,
        }
    }

    /// Sets the payment amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the payment method
    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    /// Attaches a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Builds the payment
    pub fn build(self) -> Payment {
        let payment = Payment::new(self.from_id, self.to_id, self.amount, self.method);
        match self.note {
            Some(note) => payment.with_note(note),
            None => payment,
        }
    }
}

/// Builder for constructing test receipt items
pub struct ReceiptItemBuilder {
    description: String,
    price: Money,
    role: ItemRole,
    quantity: Decimal,
}

impl ReceiptItemBuilder {
    /// Creates a new builder with default values
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            price: Money::new(dec!(10.00), Currency::USD),
            role: ItemRole::Regular,
            quantity: Decimal::ONE,
        }
    }

    /// Sets the price
    pub fn priced(mut self, price: Money) -> Self {
        self.price = price;
        self
    }

    /// Sets the role
    pub fn with_role(mut self, role: ItemRole) -> Self {
        self.role = role;
        self
    }

    /// Marks the item as an expansion placeholder
    pub fn as_placeholder(mut self) -> Self {
        self.quantity = Decimal::ZERO;
        self
    }

    /// Builds the item
    pub fn build(self) -> ReceiptItem {
        ReceiptItem::new(self.description, self.price)
            .with_role(self.role)
            .with_quantity(self.quantity)
    }
}

/// Builder for constructing receipt aggregate charges
pub struct ReceiptChargesBuilder {
    charges: ReceiptCharges,
}

impl ReceiptChargesBuilder {
    /// Creates a new builder with all rows zero
    pub fn new(currency: Currency) -> Self {
        Self {
            charges: ReceiptCharges::new(currency),
        }
    }

    /// Sets the tax row
    pub fn tax(mut self, amount: Money) -> Self {
        self.charges = self.charges.with_tax(amount);
        self
    }

    /// Sets the tip row
    pub fn tip(mut self, amount: Money) -> Self {
        self.charges = self.charges.with_tip(amount);
        self
    }

    /// Sets the service charge row
    pub fn service_charge(mut self, amount: Money) -> Self {
        self.charges = self.charges.with_service_charge(amount);
        self
    }

    /// Sets the discount row
    pub fn discount(mut self, amount: Money) -> Self {
        self.charges = self.charges.with_discount(amount);
        self
    }

    /// Sets the declared total
    pub fn declared_total(mut self, amount: Money) -> Self {
        self.charges = self.charges.with_declared_total(amount);
        self
    }

    /// Builds the aggregate
    pub fn build(self) -> ReceiptCharges {
        self.charges
    }
}

/// Shorthand for a full claim on an item
pub fn full_claim(item_id: ItemId, member_id: MemberId) -> ItemClaim {
    ItemClaim::new(item_id, member_id, Decimal::ONE)
}

/// Shorthand for a half claim on an item
pub fn half_claim(item_id: ItemId, member_id: MemberId) -> ItemClaim {
    ItemClaim::new(item_id, member_id, dec!(0.5))
}
