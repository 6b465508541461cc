pub mod params;
pub mod seed;
pub mod snapshot;
