//! Property-based tests for order totals and discount bounds.

use promo_strategy::{
    Amount, Customer, LineItem, Order, Percent, bulk_item_promo, fidelity_promo,
    large_order_promo,
};
use proptest::prelude::*;

fn raw_cart() -> impl Strategy<Value = Vec<(u8, u32, i64)>> {
    prop::collection::vec((0u8..16, 1u32..50, 0i64..100_000), 0..24)
}

fn build(raw: &[(u8, u32, i64)]) -> Vec<LineItem> {
    raw.iter()
        .map(|&(product, quantity, price)| {
            LineItem::new(format!("p{product}"), quantity, Amount::from_scaled(price)).unwrap()
        })
        .collect()
}

fn percent() -> impl Strategy<Value = Percent> {
    (0.0f64..=100.0).prop_map(|value| Percent::new(value).unwrap())
}

fn customer() -> impl Strategy<Value = Customer> {
    (0u32..2000).prop_map(|fidelity| Customer::new("customer", fidelity))
}

proptest! {
    #[test]
    fn prop_total_is_sum_of_lines(
        customer in customer(),
        raw in raw_cart(),
        percent in percent()
    ) {
        let expected: i64 = raw
            .iter()
            .map(|&(_, quantity, price)| price * i64::from(quantity))
            .sum();
        let order = Order::new(customer, build(&raw)).with_promotion(fidelity_promo(percent));
        prop_assert_eq!(order.total(), Amount::from_scaled(expected));
    }

    #[test]
    fn prop_no_promotion_due_equals_total(customer in customer(), raw in raw_cart()) {
        let order = Order::new(customer, build(&raw));
        prop_assert_eq!(order.due(), order.total());
    }

    #[test]
    fn prop_discount_within_total(
        customer in customer(),
        raw in raw_cart(),
        percent in percent(),
        which in 0usize..3
    ) {
        let order = Order::new(customer, build(&raw));
        let order = match which {
            0 => order.with_promotion(fidelity_promo(percent)),
            1 => order.with_promotion(bulk_item_promo(percent)),
            _ => order.with_promotion(large_order_promo(percent)),
        };
        let discount = order.discount();
        prop_assert!(discount >= Amount::ZERO);
        prop_assert!(discount <= order.total());
        prop_assert!(order.due() <= order.total());
    }

    #[test]
    fn prop_queries_are_idempotent(
        customer in customer(),
        raw in raw_cart(),
        percent in percent()
    ) {
        let order = Order::new(customer, build(&raw)).with_promotion(bulk_item_promo(percent));
        prop_assert_eq!(order.total(), order.total());
        prop_assert_eq!(order.due(), order.due());
        prop_assert_eq!(order.to_string(), order.to_string());
    }
}
