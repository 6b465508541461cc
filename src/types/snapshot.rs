use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::constants::lcg_params::*;
use crate::error::{PrngError, PrngResult};
use crate::types::seed::State;

/// Point-in-time copy of a generator.
///
/// The parameters travel with the state so that a snapshot taken from a
/// differently parameterized LCG is rejected on restore instead of silently
/// producing another sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Snapshot {
    pub state: State,
    pub multiplier: State,
    pub increment: State,
    pub modulus: State,
}

impl Snapshot {
    pub fn new(state: State) -> Self {
        Self {
            state,
            multiplier: MULTIPLIER,
            increment: INCREMENT,
            modulus: MODULUS,
        }
    }

    pub fn check_parameters(&self) -> PrngResult<()> {
        if self.multiplier != MULTIPLIER || self.increment != INCREMENT || self.modulus != MODULUS {
            return Err(PrngError::ParameterMismatch {
                multiplier: self.multiplier,
                increment: self.increment,
                modulus: self.modulus,
            });
        }

        return Ok(());
    }

    pub fn to_json(&self) -> PrngResult<String> {
        return Ok(serde_json::to_string(self)?);
    }

    pub fn from_json(json: &str) -> PrngResult<Self> {
        return Ok(serde_json::from_str(json)?);
    }

    pub fn to_bytes(&self) -> PrngResult<Vec<u8>> {
        return Ok(bincode::encode_to_vec(self, bincode::config::standard())?);
    }

    pub fn from_bytes(bytes: &[u8]) -> PrngResult<Self> {
        let (snapshot, _) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
        return Ok(snapshot);
    }
}
