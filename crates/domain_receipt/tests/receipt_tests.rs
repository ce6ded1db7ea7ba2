//! Integration tests for the receipt domain public API

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, MemberId, Money};
use domain_receipt::{
    check_claim, compute_member_totals, generate_summary, ClaimDenied, ItemClaim, ItemRole,
    ReceiptCharges, ReceiptItem,
};

fn usd(amount: Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

fn roster(n: usize) -> Vec<MemberId> {
    (0..n).map(|_| MemberId::new_v7()).collect()
}

#[test]
fn claim_flow_from_open_item_to_denial() {
    let members = roster(2);
    let nachos = ReceiptItem::new("Nachos", usd(dec!(12.50)));
    let mut claims = Vec::new();

    let opening =
        check_claim(&nachos, &claims, &members[0]).expect("fresh item is fully open");
    assert_eq!(opening.remaining_fraction, dec!(1));
    claims.push(ItemClaim::new(nachos.id, members[0], dec!(1)));

    assert!(matches!(
        check_claim(&nachos, &claims, &members[0]),
        Err(ClaimDenied::AlreadyClaimedInFull)
    ));
    assert!(matches!(
        check_claim(&nachos, &claims, &members[1]),
        Err(ClaimDenied::FullyClaimed)
    ));
}

#[test]
fn special_rows_cannot_be_claimed() {
    let member = MemberId::new_v7();
    let tip_row = ReceiptItem::new("Tip", usd(dec!(5))).with_role(ItemRole::Tip);

    assert!(matches!(
        check_claim(&tip_row, &[], &member),
        Err(ClaimDenied::SpecialItem(ItemRole::Tip))
    ));
}

#[test]
fn prorated_totals_cover_the_whole_receipt() {
    let members = roster(3);
    let items = vec![
        ReceiptItem::new("Steak", usd(dec!(32))),
        ReceiptItem::new("Pasta", usd(dec!(18))),
        ReceiptItem::new("Salad", usd(dec!(10))),
    ];
    let charges = ReceiptCharges::new(Currency::USD)
        .with_tax(usd(dec!(5.40)))
        .with_tip(usd(dec!(12)))
        .with_declared_total(usd(dec!(77.40)));
    let claims: Vec<ItemClaim> = items
        .iter()
        .zip(&members)
        .map(|(item, member)| ItemClaim::new(item.id, *member, dec!(1)))
        .collect();

    let totals = compute_member_totals(&charges, &items, &claims, &members);

    assert_eq!(totals.len(), 3);
    // Reconciliation pins the grand totals to the declared total exactly
    let sum: Decimal = totals.iter().map(|t| t.grand_total.amount()).sum();
    assert_eq!(sum, dec!(77.40));
    // Output follows the member roster order
    let order: Vec<MemberId> = totals.iter().map(|t| t.member_id).collect();
    assert_eq!(order, members);
}

#[test]
fn shared_item_prorates_by_fraction() {
    let members = roster(2);
    let platter = ReceiptItem::new("Seafood platter", usd(dec!(45)));
    let charges = ReceiptCharges::new(Currency::USD).with_tip(usd(dec!(9)));
    let claims = vec![
        ItemClaim::new(platter.id, members[0], dec!(0.6)),
        ItemClaim::new(platter.id, members[1], dec!(0.4)),
    ];

    let totals = compute_member_totals(&charges, &[platter], &claims, &members);

    assert_eq!(totals[0].items_subtotal.amount(), dec!(27.00));
    assert_eq!(totals[1].items_subtotal.amount(), dec!(18.00));
    assert_eq!(totals[0].tip_share.amount(), dec!(5.40));
    assert_eq!(totals[1].tip_share.amount(), dec!(3.60));
}

#[test]
fn summary_reflects_claim_progress_and_totals() {
    let members = roster(2);
    let burger = ReceiptItem::new("Burger", usd(dec!(11)));
    let fries = ReceiptItem::new("Fries", usd(dec!(4)));
    let charges = ReceiptCharges::new(Currency::USD).with_tax(usd(dec!(1.20)));
    let claims = vec![ItemClaim::new(burger.id, members[0], dec!(1))];

    let summary = generate_summary(&charges, &[burger, fries], &claims, &members);

    assert_eq!(summary.claimed_item_count, 1);
    assert_eq!(summary.unclaimed_item_count, 1);
    assert_eq!(summary.items_subtotal.amount(), dec!(15));
    assert_eq!(summary.total.amount(), dec!(16.20));
    assert_eq!(summary.member_totals.len(), 1);
}

#[test]
fn summary_round_trips_through_json() {
    let members = roster(1);
    let item = ReceiptItem::new("Bento", usd(dec!(13.75)));
    let charges = ReceiptCharges::new(Currency::USD).with_tip(usd(dec!(2)));
    let claims = vec![ItemClaim::new(item.id, members[0], dec!(1))];

    let summary = generate_summary(&charges, &[item], &claims, &members);
    let json = serde_json::to_string(&summary).expect("summary serializes");
    let back: domain_receipt::ReceiptSummary =
        serde_json::from_str(&json).expect("summary deserializes");
    assert_eq!(summary, back);
}
