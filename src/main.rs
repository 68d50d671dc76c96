use std::env;
use std::num::ParseIntError;
use std::process::ExitCode;

use promo_strategy::csv::{CsvError, read_cart};
use promo_strategy::promo::PromoError;
use promo_strategy::{Customer, Order, Promotion, PromotionKind, best_promo};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: promo-strategy <cart.csv> <customer> <fidelity> [promotion ...]";

#[derive(Debug, Error)]
enum AppError {
    #[error("invalid fidelity '{value}': {source}")]
    InvalidFidelity {
        value: String,
        source: ParseIntError,
    },

    #[error(transparent)]
    Promotion(#[from] PromoError),

    #[error(transparent)]
    Csv(#[from] CsvError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [path, name, fidelity, promotions @ ..] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    match build_order(path, name, fidelity, promotions) {
        Ok(order) => {
            println!("{order}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn build_order(
    path: &str,
    name: &str,
    fidelity: &str,
    promotions: &[String],
) -> Result<Order, AppError> {
    let fidelity = fidelity
        .parse::<u32>()
        .map_err(|source| AppError::InvalidFidelity {
            value: fidelity.to_string(),
            source,
        })?;
    let kinds = promotions
        .iter()
        .map(|arg| arg.parse::<PromotionKind>())
        .collect::<Result<Vec<_>, _>>()?;

    // bad rows are reported but do not stop the order
    let cart = read_cart(path)?.filter_map(|result| match result {
        Ok(item) => Some(item),
        Err(e) => {
            warn!("{e}");
            None
        }
    });
    let order = Order::new(Customer::new(name, fidelity), cart);

    let order = match kinds.len() {
        0 => order,
        1 => {
            let kind = kinds[0];
            info!(promotion = %kind, "applying promotion");
            order.with_promotion(kind.into_promotion())
        }
        count => {
            info!(count, "applying best of promotions");
            let promotions: Vec<Promotion> = kinds
                .into_iter()
                .map(PromotionKind::into_promotion)
                .collect();
            order.with_promotion(best_promo(promotions))
        }
    };

    Ok(order)
}
