//! Raw compressed-point (de)serialization helpers, following the `CtOption`-unwrapping pattern
//! used throughout `aptos-dkg`'s PVSS `TryFrom<&[u8]>` impls.

use crate::constants::G1_PROJ_NUM_BYTES;
use crate::error::BtdError;
use blstrs::{G1Affine, G1Projective};
use group::Curve;

pub(crate) fn g1_proj_to_bytes(p: &G1Projective) -> Vec<u8> {
    p.to_affine().to_compressed().to_vec()
}

pub(crate) fn g1_proj_from_bytes(bytes: &[u8]) -> Result<G1Projective, BtdError> {
    let arr: &[u8; G1_PROJ_NUM_BYTES] = bytes
        .try_into()
        .map_err(|_| BtdError::Serialization("wrong length for a G1 point".to_string()))?;
    Option::from(G1Affine::from_compressed(arr))
        .map(G1Projective::from)
        .ok_or_else(|| BtdError::Serialization("invalid compressed G1 point".to_string()))
}
