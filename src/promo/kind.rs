//! Promotion selection by name, as given on the command line.

use std::fmt;
use std::str::FromStr;

use super::{PromoError, bulk_item_promo, fidelity_promo, large_order_promo};
use crate::Percent;
use crate::order::Promotion;

/// A promotion chosen by name, written `name:percent` (e.g. `fidelity:10`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromotionKind {
    Fidelity(Percent),
    BulkItem(Percent),
    LargeOrder(Percent),
}

impl PromotionKind {
    /// Build the strategy this kind names.
    pub fn into_promotion(self) -> Promotion {
        match self {
            PromotionKind::Fidelity(percent) => Box::new(fidelity_promo(percent)),
            PromotionKind::BulkItem(percent) => Box::new(bulk_item_promo(percent)),
            PromotionKind::LargeOrder(percent) => Box::new(large_order_promo(percent)),
        }
    }
}

impl FromStr for PromotionKind {
    type Err = PromoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once(':')
            .ok_or_else(|| PromoError::MissingPercent(s.to_string()))?;
        let kind: fn(Percent) -> PromotionKind = match name.trim() {
            "fidelity" => PromotionKind::Fidelity,
            "bulk" | "bulk_item" => PromotionKind::BulkItem,
            "large" | "large_order" => PromotionKind::LargeOrder,
            other => return Err(PromoError::UnknownKind(other.to_string())),
        };

        let value = value.trim();
        let percent = value
            .parse::<f64>()
            .map_err(|source| PromoError::ParsePercent {
                value: value.to_string(),
                source,
            })?;
        Ok(kind(Percent::new(percent)?))
    }
}

impl fmt::Display for PromotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionKind::Fidelity(percent) => write!(f, "fidelity:{percent}"),
            PromotionKind::BulkItem(percent) => write!(f, "bulk:{percent}"),
            PromotionKind::LargeOrder(percent) => write!(f, "large:{percent}"),
        }
    }
}
