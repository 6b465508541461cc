mod constants;
mod error;
mod modules;
mod types;

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use crate::constants::lcg_params::{INCREMENT, MODULUS, MULTIPLIER};
pub use crate::error::{PrngError, PrngResult};
pub use crate::modules::rand_analyzer::{ModuloBias, RandAnalyzer};
pub use crate::modules::rng_lc::RngLC;
#[cfg(not(target_arch = "wasm32"))]
pub use crate::modules::seed_source::ClockSeed;
pub use crate::modules::seed_source::{FixedSeed, SeedSource};
pub use crate::types::params::SampleParams;
pub use crate::types::seed::*;
pub use crate::types::snapshot::Snapshot;

#[wasm_bindgen]
pub fn next_values(seed: Seed, count: u32) -> Vec<State> {
    let mut rng = RngLC::new(seed);
    return rng.values().take(count as usize).collect();
}

#[wasm_bindgen]
pub fn range_values(params: JsValue) -> Result<Vec<Bound>, JsValue> {
    let params: SampleParams = serde_wasm_bindgen::from_value(params)?;
    return Ok(sample_range(&params));
}

/// State of a generator seeded with `seed` after `advances` calls to `next`.
#[wasm_bindgen]
pub fn snapshot_after(seed: Seed, advances: u32) -> Result<JsValue, JsValue> {
    // an unadvanced seed may exceed 2^53
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_large_number_types_as_bigints(true);
    return Ok(advanced_snapshot(seed, advances).serialize(&serializer)?);
}

pub fn advanced_snapshot(seed: Seed, advances: u32) -> Snapshot {
    let mut rng = RngLC::new(seed);
    rng.values().take(advances as usize).for_each(drop);
    return rng.snapshot();
}

fn sample_range(params: &SampleParams) -> Vec<Bound> {
    let mut rng = RngLC::new(params.seed);

    return (0..params.count)
        .map(|_| {
            if params.unbiased {
                rng.range_unbiased(params.min, params.max)
            } else {
                rng.range(params.min, params.max)
            }
        })
        .collect();
}
