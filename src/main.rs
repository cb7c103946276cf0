use randomness::{GenerationError, Generator, LogSink};

/// Runs `calls` generations and reports how they failed, if at all.
///
/// # Returns
/// `(saturated, reached_max_retry)`: whether any call failed with each kind.
fn tally(generator: &mut Generator<rand::rngs::OsRng, LogSink>, calls: usize) -> (bool, bool) {
    let mut saturated = false;
    let mut reached_max_retry = false;

    for _ in 0..calls {
        match generator.generate() {
            Ok(_) => {}
            Err(GenerationError::RangeSaturated { .. }) => saturated = true,
            Err(GenerationError::MaxRetryReached) => reached_max_retry = true,
            Err(err) => log::error!("entropy failure: {}", err),
        }
    }

    (saturated, reached_max_retry)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    colog::init();

    let mut dice = Generator::new(1, 5, 0, false)?;
    println!("1-5: {}, {}, {}", dice.generate()?, dice.generate()?, dice.generate()?);

    let mut narrow = Generator::new(1, 3, 0, true)?.with_sink(LogSink);
    let (saturated, _) = tally(&mut narrow, 10);
    println!("collision-free [1, 3], 10 calls -> saturated: {}", saturated);

    let mut budgeted = Generator::new(1, 10, 100, true)?.with_sink(LogSink);
    let (saturated, reached_max_retry) = tally(&mut budgeted, 10);
    println!(
        "collision-free [1, 10], budget 100, 10 calls -> saturated: {}, max retry: {}, budget left: {:?}",
        saturated,
        reached_max_retry,
        budgeted.remaining_retries(),
    );

    let mut ports = Generator::new(18_000, 50_000, 100, true)?;
    println!("10 unique ports: {:?}", ports.must_generate_many(10));

    println!("use 'cargo test' to run tests.");
    Ok(())
}
