//! Receipt aggregate charges
//!
//! Produced once by the upstream OCR/extraction pipeline and consumed
//! read-only here. The engine never recomputes these from the line items;
//! the declared total, when present, is treated as the authoritative
//! figure the prorater reconciles against.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// The aggregate rows of a receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptCharges {
    /// Currency every amount on the receipt uses
    pub currency: Currency,
    /// Tax amount
    pub tax: Money,
    /// Tip amount
    pub tip: Money,
    /// Service charge amount
    pub service_charge: Money,
    /// Discount, stored as a negative amount
    pub discount: Money,
    /// The total printed on the receipt, if extraction found one
    pub declared_total: Option<Money>,
}

impl ReceiptCharges {
    /// Creates an all-zero aggregate
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            tax: Money::zero(currency),
            tip: Money::zero(currency),
            service_charge: Money::zero(currency),
            discount: Money::zero(currency),
            declared_total: None,
        }
    }

    /// Sets the tax amount
    pub fn with_tax(mut self, tax: Money) -> Self {
        self.tax = tax;
        self
    }

    /// Sets the tip amount
    pub fn with_tip(mut self, tip: Money) -> Self {
        self.tip = tip;
        self
    }

    /// Sets the service charge amount
    pub fn with_service_charge(mut self, service_charge: Money) -> Self {
        self.service_charge = service_charge;
        self
    }

    /// Sets the discount; expected to be negative
    pub fn with_discount(mut self, discount: Money) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the declared total
    pub fn with_declared_total(mut self, total: Money) -> Self {
        self.declared_total = Some(total);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_defaults_to_zero() {
        let charges = ReceiptCharges::new(Currency::USD);
        assert!(charges.tax.is_zero());
        assert!(charges.tip.is_zero());
        assert!(charges.service_charge.is_zero());
        assert!(charges.discount.is_zero());
        assert!(charges.declared_total.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let charges = ReceiptCharges::new(Currency::USD)
            .with_tax(Money::new(dec!(2), Currency::USD))
            .with_tip(Money::new(dec!(4), Currency::USD))
            .with_discount(Money::new(dec!(-3), Currency::USD))
            .with_declared_total(Money::new(dec!(33), Currency::USD));

        assert_eq!(charges.tax.amount(), dec!(2));
        assert_eq!(charges.tip.amount(), dec!(4));
        assert_eq!(charges.discount.amount(), dec!(-3));
        assert_eq!(charges.declared_total.unwrap().amount(), dec!(33));
    }
}
