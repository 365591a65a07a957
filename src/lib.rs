//! Batched threshold decryption (BTD) over a Type-3 bilinear group.
//!
//! A committee of `n` parties, any `t` of whom cooperate, jointly decrypts up to `B` ciphertexts
//! produced for one public key, at a per-decryptor cost sub-linear in `B`. The core building block
//! is a puncturable PRF over the bilinear group (`pprf`) whose evaluations combine homomorphically
//! with a sum of additively-homomorphic ElGamal ciphertexts (`elgamal`), letting one threshold
//! decryption of a ciphertext *sum* recover a master value from which every individual message is
//! recovered via pairings (`btd`).

pub use constants::{
    G1_PROJ_NUM_BYTES, G2_PROJ_NUM_BYTES, GT_PROJ_NUM_BYTES, SCALAR_NUM_BYTES,
};
pub(crate) use constants::SCALAR_FIELD_ORDER;
pub use error::{BtdError, Result};

pub use btd::{
    batch_combine, batch_combine_hybrid, batch_combine_opt, batch_dec, batch_dec_opt, enc,
    enc_hybrid, sqrt_partition_combine, BatchedCiphertext, Ciphertext, HybridCiphertext, Proof,
};

pub mod btd;
pub mod constants;
pub mod elgamal;
pub mod error;
pub mod lagrange;
pub mod player;
pub mod pprf;
pub mod suite;
pub mod threshold_config;
pub mod utils;
