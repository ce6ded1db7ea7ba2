//! Direct payments between members
//!
//! A payment records money actually transferred from one member to
//! another, reducing (or, when it exceeds the existing debt, reversing)
//! their net relationship.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{MemberId, Money, PaymentId};

/// How a payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash handed over in person
    Cash,
    /// Bank transfer
    BankTransfer,
    /// Digital wallet or P2P app
    DigitalWallet,
    /// Anything else
    Other,
}

/// A recorded transfer of money between two members
///
/// The amount is expected to be positive; the engine trusts the host to
/// have validated that before recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// The member who paid
    pub from_id: MemberId,
    /// The member who received
    pub to_id: MemberId,
    /// Transferred amount (positive)
    pub amount: Money,
    /// Payment method
    pub method: PaymentMethod,
    /// Optional free-form note
    pub note: Option<String>,
    /// When the transfer happened
    pub payment_date: DateTime<Utc>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new payment dated now
    pub fn new(from_id: MemberId, to_id: MemberId, amount: Money, method: PaymentMethod) -> Self {
        let now = Utc::now();
        Self {
            id: PaymentId::new_v7(),
            from_id,
            to_id,
            amount,
            method,
            note: None,
            payment_date: now,
            created_at: now,
        }
    }

    /// Attaches a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Sets the transfer date
    pub fn dated(mut self, date: DateTime<Utc>) -> Self {
        self.payment_date = date;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_builder() {
        let from = MemberId::new_v7();
        let to = MemberId::new_v7();
        let payment = Payment::new(
            from,
            to,
            Money::new(dec!(15), Currency::USD),
            PaymentMethod::Cash,
        )
        .with_note("settling dinner");

        assert_eq!(payment.from_id, from);
        assert_eq!(payment.to_id, to);
        assert_eq!(payment.note.as_deref(), Some("settling dinner"));
    }
}
