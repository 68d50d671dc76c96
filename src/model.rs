//! Core domain types: customers and the line items of a cart.

use thiserror::Error;

use crate::Amount;

/// Validation errors raised while building domain values.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("line item '{product}' has zero quantity")]
    ZeroQuantity { product: String },

    #[error("line item '{product}' has negative price {price}")]
    NegativePrice { product: String, price: Amount },

    #[error("line item '{product}' total exceeds {}", Amount::MAX)]
    TotalOutOfRange { product: String },

    #[error("amount {0} is not a finite value within range")]
    InvalidAmount(f64),

    #[error("percent {0} is outside 0..=100")]
    InvalidPercent(f64),
}

/// A customer and their loyalty score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    fidelity: u32,
}

impl Customer {
    pub fn new(name: impl Into<String>, fidelity: u32) -> Self {
        Self {
            name: name.into(),
            fidelity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loyalty points accumulated by the customer.
    pub fn fidelity(&self) -> u32 {
        self.fidelity
    }
}

/// One product entry of a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    product: String,
    quantity: u32,
    price: Amount,
}

impl LineItem {
    /// Create a line item. Quantity must be positive, price non-negative, and
    /// `price * quantity` no larger than [`Amount::MAX`].
    pub fn new(
        product: impl Into<String>,
        quantity: u32,
        price: Amount,
    ) -> Result<Self, ModelError> {
        let product = product.into();
        if quantity == 0 {
            return Err(ModelError::ZeroQuantity { product });
        }
        if price.is_negative() {
            return Err(ModelError::NegativePrice { product, price });
        }
        match price.checked_mul(quantity) {
            Some(total) if total <= Amount::MAX => {}
            _ => return Err(ModelError::TotalOutOfRange { product }),
        }
        Ok(Self {
            product,
            quantity,
            price,
        })
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price.
    pub fn price(&self) -> Amount {
        self.price
    }

    /// Subtotal of this line: `price * quantity`.
    pub fn total(&self) -> Amount {
        self.price * self.quantity
    }
}
