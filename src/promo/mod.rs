//! Discount strategies.
//!
//! Each factory takes a percentage and returns a plain function of the order,
//! usable wherever a promotion is expected (see [`Order::with_promotion`]).
//! Every strategy returns a discount between zero and the order total.

use std::collections::HashSet;

use tracing::trace;

use crate::order::{Order, Promotion};
use crate::{Amount, Percent};

mod error;
pub use error::PromoError;

mod kind;
pub use kind::PromotionKind;

/// Loyalty points needed for [`fidelity_promo`].
pub const FIDELITY_THRESHOLD: u32 = 1000;

/// Units of a single line needed for [`bulk_item_promo`].
pub const BULK_ITEM_THRESHOLD: u32 = 20;

/// Distinct products needed for [`large_order_promo`].
pub const LARGE_ORDER_THRESHOLD: usize = 10;

/// Discount on the whole order for customers with at least
/// [`FIDELITY_THRESHOLD`] loyalty points.
pub fn fidelity_promo(percent: Percent) -> impl Fn(&Order) -> Amount {
    move |order: &Order| {
        let fidelity = order.customer().fidelity();
        if fidelity >= FIDELITY_THRESHOLD {
            order.total().percent(percent)
        } else {
            trace!(fidelity, "customer below fidelity threshold");
            Amount::ZERO
        }
    }
}

/// Discount on each line item with at least [`BULK_ITEM_THRESHOLD`] units.
pub fn bulk_item_promo(percent: Percent) -> impl Fn(&Order) -> Amount {
    move |order: &Order| {
        order
            .cart()
            .iter()
            .filter(|item| item.quantity() >= BULK_ITEM_THRESHOLD)
            .map(|item| item.total().percent(percent))
            .sum()
    }
}

/// Discount on the whole order when it holds at least
/// [`LARGE_ORDER_THRESHOLD`] distinct products.
pub fn large_order_promo(percent: Percent) -> impl Fn(&Order) -> Amount {
    move |order: &Order| {
        let distinct = order
            .cart()
            .iter()
            .map(|item| item.product())
            .collect::<HashSet<_>>()
            .len();
        if distinct >= LARGE_ORDER_THRESHOLD {
            order.total().percent(percent)
        } else {
            trace!(distinct, "order below distinct product threshold");
            Amount::ZERO
        }
    }
}

/// The largest discount offered by any of `promotions`, zero if empty.
pub fn best_promo(promotions: Vec<Promotion>) -> impl Fn(&Order) -> Amount {
    move |order: &Order| {
        promotions
            .iter()
            .map(|promotion| promotion(order))
            .max()
            .unwrap_or(Amount::ZERO)
    }
}
