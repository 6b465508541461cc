pub mod rand_analyzer;
pub mod rng_lc;
pub mod seed_source;
