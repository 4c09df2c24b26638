use pizza_storefront::seed::{
    SeedError,
    price::{MAX_ITEM_PRICE, MIN_ITEM_PRICE, random_price},
};
use rand::{SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;

#[test]
fn prices_stay_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let min = Decimal::from(MIN_ITEM_PRICE);
    let max = Decimal::from(MAX_ITEM_PRICE);

    for _ in 0..1_000 {
        let price = random_price(&mut rng, MIN_ITEM_PRICE, MAX_ITEM_PRICE).unwrap();
        assert!(price >= min && price < max, "{price} outside [{min}, {max})");
        assert!(price.scale() <= 1);
    }
}

#[test]
fn narrow_range_yields_tenths() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let price = random_price(&mut rng, 10, 11).unwrap();
        assert!(price >= Decimal::new(100, 1) && price <= Decimal::new(109, 1));
        assert_eq!(price, price.round_dp(1));
    }
}

#[test]
fn rejects_empty_or_inverted_ranges() {
    let mut rng = StdRng::seed_from_u64(1);

    assert!(matches!(
        random_price(&mut rng, 5, 5),
        Err(SeedError::InvalidPriceRange { min: 5, max: 5 })
    ));
    assert!(matches!(
        random_price(&mut rng, 10, 1),
        Err(SeedError::InvalidPriceRange { .. })
    ));
    assert!(matches!(
        random_price(&mut rng, 0, i64::MAX),
        Err(SeedError::InvalidPriceRange { .. })
    ));
}
