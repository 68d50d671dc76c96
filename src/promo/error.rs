//! Error types for promotion selection.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::model::ModelError;

/// Error returned when parsing a [`PromotionKind`](super::PromotionKind).
#[derive(Debug, Error)]
pub enum PromoError {
    #[error("promotion '{0}' is missing ':<percent>'")]
    MissingPercent(String),

    #[error("unknown promotion '{0}', expected fidelity, bulk or large")]
    UnknownKind(String),

    #[error("promotion percent '{value}' is not a number: {source}")]
    ParsePercent {
        value: String,
        source: ParseFloatError,
    },

    #[error(transparent)]
    Percent(#[from] ModelError),
}
