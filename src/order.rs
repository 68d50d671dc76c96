//! The order: a customer, a cart and an optional promotion.

use std::cell::OnceCell;
use std::fmt;

use tracing::debug;

use crate::Amount;
use crate::model::{Customer, LineItem};

/// A boxed discount strategy. Any `Fn(&Order) -> Amount` can be used as a
/// promotion; this alias is the form stored by [`Order`].
pub type Promotion = Box<dyn Fn(&Order) -> Amount>;

/// A customer's order.
///
/// The cart is owned by the order, so the caller's collection can change
/// afterwards without affecting it. The total is computed on first access
/// and cached for the lifetime of the order.
pub struct Order {
    customer: Customer,
    cart: Vec<LineItem>,
    promotion: Option<Promotion>,
    total: OnceCell<Amount>,
}

impl Order {
    /// Create an order without a promotion.
    pub fn new(customer: Customer, cart: impl IntoIterator<Item = LineItem>) -> Self {
        Self {
            customer,
            cart: cart.into_iter().collect(),
            promotion: None,
            total: OnceCell::new(),
        }
    }

    /// Attach a promotion, replacing any previous one.
    pub fn with_promotion(mut self, promotion: impl Fn(&Order) -> Amount + 'static) -> Self {
        self.promotion = Some(Box::new(promotion));
        self
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn cart(&self) -> &[LineItem] {
        &self.cart
    }

    pub fn has_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Sum of all line item totals.
    pub fn total(&self) -> Amount {
        *self
            .total
            .get_or_init(|| self.cart.iter().map(LineItem::total).sum())
    }

    /// Discount granted by the promotion, zero without one.
    pub fn discount(&self) -> Amount {
        match &self.promotion {
            Some(promotion) => {
                let discount = promotion(self);
                debug!(
                    customer = self.customer.name(),
                    total = %self.total(),
                    discount = %discount,
                    "promotion evaluated"
                );
                discount
            }
            None => Amount::ZERO,
        }
    }

    /// Amount payable: total minus discount.
    pub fn due(&self) -> Amount {
        self.total() - self.discount()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Order total: {:.2} due: {:.2}>", self.total(), self.due())
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("customer", &self.customer)
            .field("cart", &self.cart)
            .field("promotion", &self.promotion.is_some())
            .finish()
    }
}
