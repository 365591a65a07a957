//! The batched ciphertext type, in its GT-native encoding, and the `BatchedCiphertext` accessor
//! trait shared with the hybrid encoding in [`crate::btd::hybrid`].

use crate::btd::proof::{self, Proof, ProofStatement};
use crate::elgamal;
use crate::error::Result;
use blstrs::{G1Projective, Gt};
use serde::{Deserialize, Serialize};

/// Everything the combiner and the Sigma-proof verifier need from a batched ciphertext, regardless
/// of whether its message is carried GT-natively or via the hybrid XOF encoding.
pub trait BatchedCiphertext {
    /// The slot `i \in [0, B)` this ciphertext was encrypted at.
    fn slot(&self) -> u32;
    /// `gamma`, the PRF-pad-masked value (the message itself for the GT-native encoding, or the
    /// symmetric-key pad `MPad` for the hybrid encoding).
    fn gamma(&self) -> &Gt;
    /// `kp`, the PRF key punctured at this ciphertext's slot.
    fn kp(&self) -> &G1Projective;
    /// The ElGamal encryption of `K = k . G1_base` under the committee's public key.
    fn elgamal_ct(&self) -> &elgamal::Ciphertext;
    /// The Sigma proof of consistency between `elgamal_ct`, `kp`, and `gamma`.
    fn proof(&self) -> &Proof;

    /// Verifies the Sigma proof against the committee public key `pk` and this ciphertext's
    /// punctured-slot CRS base point `g1_xi = X1_i`.
    fn verify(&self, pk: &G1Projective, g1_xi: &G1Projective) -> Result<()> {
        let st = ProofStatement {
            pk,
            slot: self.slot(),
            gamma: self.gamma(),
            kp: self.kp(),
            c: self.elgamal_ct(),
        };
        proof::verify(&st, self.proof(), g1_xi)
    }
}

/// A batched ciphertext using the GT-native message encoding: the message `m` is a `GT` point and
/// `gamma = Eval(k, i) + m`.
///
/// The plaintext witness `m` is compiled in only under the `testing-asserts` feature: a release
/// build never carries the plaintext alongside its own ciphertext.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ciphertext {
    pub slot: u32,
    pub gamma: Gt,
    pub kp: G1Projective,
    pub c: elgamal::Ciphertext,
    pub proof: Proof,
    #[cfg(feature = "testing-asserts")]
    pub m: Gt,
}

impl BatchedCiphertext for Ciphertext {
    fn slot(&self) -> u32 {
        self.slot
    }

    fn gamma(&self) -> &Gt {
        &self.gamma
    }

    fn kp(&self) -> &G1Projective {
        &self.kp
    }

    fn elgamal_ct(&self) -> &elgamal::Ciphertext {
        &self.c
    }

    fn proof(&self) -> &Proof {
        &self.proof
    }
}
