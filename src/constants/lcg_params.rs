use crate::types::seed::State;

pub const MULTIPLIER: State = 1_103_515_245; // a
pub const INCREMENT: State = 12_345; // c
pub const MODULUS: State = 2_147_483_648; // m = 2^31
