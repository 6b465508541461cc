use thiserror::Error;

use crate::types::seed::State;

pub type PrngResult<T> = Result<T, PrngError>;

/// Errors produced while persisting or restoring generator snapshots.
///
/// Drawing numbers never fails; only the serialization boundary does.
#[derive(Debug, Error)]
pub enum PrngError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("bincode decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error(
        "snapshot parameters (a={multiplier}, c={increment}, m={modulus}) do not match this generator"
    )]
    ParameterMismatch {
        multiplier: State,
        increment: State,
        modulus: State,
    },
}
