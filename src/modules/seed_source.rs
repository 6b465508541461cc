use crate::types::seed::Seed;

/// Supplies the initial seed for a generator.
///
/// Keeps wall-clock seeding out of the generator itself so that it stays
/// reproducible under test.
pub trait SeedSource {
    fn seed(&mut self) -> Seed;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub Seed);

impl SeedSource for FixedSeed {
    fn seed(&mut self) -> Seed {
        return self.0;
    }
}

impl<F: FnMut() -> Seed> SeedSource for F {
    fn seed(&mut self) -> Seed {
        return self();
    }
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockSeed;

#[cfg(not(target_arch = "wasm32"))]
impl SeedSource for ClockSeed {
    fn seed(&mut self) -> Seed {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos() as Seed,
            Err(err) => {
                log::warn!("system clock is before the unix epoch: {}", err);
                0
            }
        };

        log::debug!("clock seed {:#x}", seed);
        return seed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_repeats() {
        let mut source = FixedSeed(67890);
        assert_eq!(source.seed(), 67890);
        assert_eq!(source.seed(), 67890);
    }

    #[test]
    fn closure_is_a_source() {
        let mut counter: Seed = 0;
        let mut source = || {
            counter += 1;
            counter
        };
        assert_eq!(source.seed(), 1);
        assert_eq!(source.seed(), 2);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn clock_seed_is_nonzero() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_ne!(ClockSeed.seed(), 0);
    }
}
