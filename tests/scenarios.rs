//! End-to-end usage scenarios through the public API.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randomness::{ConfigError, Generator, GeneratorConfig, LogSink, MAX_SENTINEL_CEILING};

#[test]
fn plain_generator_stays_in_range() {
    let mut generator = Generator::new(1, 5, 0, false).expect("valid range");

    for _ in 0..1_000 {
        let n = generator.generate().expect("plain mode never fails");
        assert!((1..=5).contains(&n), "{} outside [1, 5]", n);
    }
}

#[test]
fn narrow_collision_free_range_saturates() {
    let mut generator = Generator::new(1, 3, 0, true).expect("valid range");

    let results: Vec<_> = (0..10).map(|_| generator.generate()).collect();

    let produced: HashSet<i64> = results[..3]
        .iter()
        .map(|r| *r.as_ref().expect("first three calls succeed"))
        .collect();
    assert_eq!(produced, HashSet::from([1, 2, 3]));

    for result in &results[3..] {
        let err = result.as_ref().expect_err("range is exhausted");
        assert!(err.is_range_saturated(), "unexpected error: {}", err);
    }
}

#[test]
fn budgeted_generator_fills_whole_range() {
    let mut generator = Generator::new(1, 10, 100, true)
        .expect("valid range")
        .with_source(ChaCha20Rng::seed_from_u64(2021))
        .with_sink(LogSink);

    let values = generator.generate_many(10).expect("ten calls fit a range of ten");
    let distinct: HashSet<i64> = values.iter().copied().collect();

    assert_eq!(distinct.len(), 10);
    assert!(values.iter().all(|n| (1..=10).contains(n)));
    assert!(generator.remaining_retries().expect("budget is active") <= 100);
}

#[test]
fn zero_max_uses_signed_32_bit_ceiling() {
    let mut generator = Generator::new(1, 0, 0, false).expect("sentinel is valid");
    assert_eq!(generator.max(), 2_147_483_647);

    for _ in 0..1_000 {
        let n = generator.must_generate();
        assert!((1..=MAX_SENTINEL_CEILING).contains(&n));
    }
}

#[test]
fn must_generate_over_wide_range() {
    let mut generator = Generator::new(18_000, 50_000, 0, false).expect("valid range");
    assert!((0..100_000)
        .map(|_| generator.must_generate())
        .all(|n| (18_000..=50_000).contains(&n)));
}

#[test]
fn config_document_builds_generator() {
    let config: GeneratorConfig = serde_json::from_str(
        r#"{ "min": 18000, "max": 50000, "max_retry": 100, "collision_free": true }"#,
    )
    .expect("valid json");

    let mut generator = config.build().expect("valid range");
    assert_eq!(generator.must_generate_many(10).len(), 10);
    assert_eq!(generator.produced(), 10);
}

#[test]
fn invalid_construction_is_rejected() {
    assert!(matches!(
        Generator::new(0, 10, 0, false),
        Err(ConfigError::InvalidMin { min: 0 })
    ));
    assert!(matches!(
        Generator::new(1, -10, 0, false),
        Err(ConfigError::InvalidMax { max: -10 })
    ));
    assert!(matches!(
        Generator::new(11, 10, 0, false),
        Err(ConfigError::MinExceedsMax { min: 11, max: 10 })
    ));
}
