pub mod amount;
pub mod csv;
pub mod model;
pub mod order;
pub mod promo;

pub use amount::{Amount, Percent};
pub use model::{Customer, LineItem, ModelError};
pub use order::{Order, Promotion};
pub use promo::{PromotionKind, best_promo, bulk_item_promo, fidelity_promo, large_order_promo};
