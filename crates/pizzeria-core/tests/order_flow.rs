//! End-to-end order flows through the public API.

use std::sync::Arc;

use pizzeria_core::pricing;
use pizzeria_core::{
    Cart, Catalog, Money, OrderSession, OrderSummary, PizzaSize, PricingResult, Product,
    ProductId, Stage, ValidationError, MAX_LINE_QUANTITY,
};
use proptest::prelude::*;

fn ham_only_catalog() -> Catalog {
    Catalog::new(vec![Product::new(1, "Ham", Money::from_cents(100))])
}

#[test]
fn ham_times_three_large_for_ana() {
    let mut session = OrderSession::new(ham_only_catalog());

    for _ in 0..3 {
        session.add_product_by_name("Ham").unwrap();
    }
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().lines()[0].quantity(), 3);
    assert_eq!(session.pricing().subtotal.cents(), 300);

    session.set_size(Some(PizzaSize::Large));
    assert_eq!(session.pricing().size_surcharge.cents(), 1500);
    assert_eq!(session.pricing().total_with_tax.cents(), 2178);

    session.set_customer_name("Ana");
    let order = session.submit().unwrap();

    assert_eq!(order.customer_name, "Ana");
    assert_eq!(order.size_label(), "Large");
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].product().name, "Ham");
    assert_eq!(order.lines[0].quantity(), 3);

    // the summary stage prices independently and agrees with the form
    let summary = OrderSummary::from_order(&order);
    assert_eq!(summary.pricing, session.pricing());
    assert!(matches!(session.stage(), Stage::Summary(o) if o.id == order.id));
}

#[test]
fn empty_cart_is_rejected() {
    let mut session = OrderSession::new(Catalog::extras());
    session.set_customer_name("Ana");

    assert_eq!(session.submit(), Err(ValidationError::EmptyCart));
    assert_eq!(session.current_error(), Some(ValidationError::EmptyCart));
    assert!(session.cart().is_empty());
}

#[test]
fn blank_name_reported_before_empty_cart() {
    let mut session = OrderSession::new(Catalog::extras());
    session.set_customer_name("   ");

    assert_eq!(session.submit(), Err(ValidationError::EmptyName));
    assert_eq!(session.current_error(), Some(ValidationError::EmptyName));
}

#[test]
fn medium_with_ten_euros_of_extras() {
    let total = pricing::total_with_tax(
        Money::from_cents(1000),
        pricing::size_surcharge(Some(PizzaSize::Medium)),
    );
    assert_eq!(total, Money::from_cents(2420));
}

#[test]
fn modify_order_keeps_cart_and_resubmits() {
    let mut session = OrderSession::new(Catalog::extras());
    session.set_customer_name("Luis");
    session.add_product_by_id(ProductId(2)).unwrap();
    let first = session.submit().unwrap();

    session.return_to_entry();
    session.add_product_by_id(ProductId(4)).unwrap();
    let second = session.submit().unwrap();

    assert_eq!(first.lines.len(), 1);
    assert_eq!(second.lines.len(), 2);
    assert_ne!(first.id, second.id);
}

fn product_id() -> impl Strategy<Value = u32> {
    1u32..6
}

proptest! {
    /// Any sequence of adds leaves one line per distinct id, with the add count as quantity.
    #[test]
    fn adds_merge_by_product_id(ids in prop::collection::vec(product_id(), 0..40)) {
        let mut cart = Cart::new();
        for &id in &ids {
            // a fresh Arc every time: merging must not rely on pointer identity
            cart.add_product(Arc::new(Product::new(id, "x", Money::from_cents(100))));
        }

        let mut distinct = ids.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(cart.len(), distinct.len());

        for id in distinct {
            let expected = ids.iter().filter(|&&i| i == id).count() as i64;
            prop_assert_eq!(cart.line(ProductId(id)).unwrap().quantity(), expected);
        }
        prop_assert_eq!(cart.total_units(), ids.len() as i64);
    }

    /// Any delta, however large, keeps every line within 1..=MAX and the
    /// cart priceable.
    #[test]
    fn quantities_stay_in_range(
        ops in prop::collection::vec((product_id(), any::<i64>()), 0..60),
        cents in 0i64..100_000,
    ) {
        let mut cart = Cart::new();
        for (id, delta) in ops {
            match cart.line(ProductId(id)).cloned() {
                Some(line) => {
                    cart.adjust_quantity(&line, delta);
                }
                None => {
                    cart.add_product(Arc::new(Product::new(id, "x", Money::from_cents(cents))));
                }
            }
            prop_assert!(cart
                .lines()
                .iter()
                .all(|l| l.quantity() > 0 && l.quantity() <= MAX_LINE_QUANTITY));

            let pricing = PricingResult::compute(cart.lines(), Some(PizzaSize::Large));
            prop_assert!(pricing.total_with_tax >= pricing.subtotal);
            prop_assert!(cart.total_units() <= cart.len() as i64 * MAX_LINE_QUANTITY);
        }
    }

    /// Pricing twice without a mutation in between returns the same result.
    #[test]
    fn pricing_reads_are_idempotent(
        ids in prop::collection::vec(product_id(), 0..20),
        cents in 0i64..10_000,
        size in prop::option::of(prop::sample::select(PizzaSize::ALL.to_vec())),
    ) {
        let mut cart = Cart::new();
        for id in ids {
            cart.add_product(Arc::new(Product::new(id, "x", Money::from_cents(cents))));
        }
        let snapshot = cart.clone();

        let first = PricingResult::compute(cart.lines(), size);
        let second = PricingResult::compute(cart.lines(), size);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&cart, &snapshot);
        prop_assert_eq!(
            first.subtotal + first.size_surcharge + first.tax,
            first.total_with_tax
        );
    }
}
