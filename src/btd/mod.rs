//! Batched threshold decryption: encryption, the Sigma proof, threshold partial decryption, and
//! the two combiners (naive and logarithmic-cascade), over either message encoding.
//!
//! Grounded directly on `be/btd.go`: `Enc`, `VerifyCT`, `BatchDec`, `BatchDecOpt`, `BatchCombine`,
//! and `BatchCombineOpt`.

mod ciphertext;
mod combine;
mod decrypt;
mod encrypt;
mod hybrid;
mod proof;

pub use ciphertext::{BatchedCiphertext, Ciphertext};
pub use combine::{batch_combine, batch_combine_hybrid, batch_combine_opt, sqrt_partition_combine};
pub use decrypt::{batch_dec, batch_dec_opt};
pub use encrypt::{enc, enc_hybrid};
pub use hybrid::HybridCiphertext;
pub use proof::Proof;
