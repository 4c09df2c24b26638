use rand::Rng;
use rust_decimal::Decimal;

use super::SeedError;

pub const MIN_ITEM_PRICE: i64 = 50_000;
pub const MAX_ITEM_PRICE: i64 = 100_000;

/// Uniform price in `[min, max)` with one decimal place.
///
/// The draw is made over whole tenths, so the result is always an exact
/// one-decimal value and never reaches `max`.
pub fn random_price<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<Decimal, SeedError> {
    if min >= max {
        return Err(SeedError::InvalidPriceRange { min, max });
    }
    let (low, high) = match (min.checked_mul(10), max.checked_mul(10)) {
        (Some(low), Some(high)) => (low, high),
        _ => return Err(SeedError::InvalidPriceRange { min, max }),
    };

    let tenths = rng.random_range(low..high);
    Ok(Decimal::new(tenths, 1))
}
