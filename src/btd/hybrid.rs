//! The XOF-symmetric hybrid message encoding.
//!
//! Grounded on the hybrid construction sketched in `main.go` and the §9 design-note resolution of
//! the `suite.Hash().Sum(payload)` ambiguity in the original sources: rather than feeding the
//! payload into a running digest's internal state (which the source's host ecosystem happens to do
//! for `Hash().Sum`), the XOF seed here is a fresh, domain-separated SHA3-256 of the GT pad
//! `MPad`. The plaintext-equality assertion the source uses to check decryption is replaced by an
//! HMAC-SHA3-256 tag, keyed by a key independent of, but derived from the same seed as, the
//! keystream.

use crate::btd::ciphertext::BatchedCiphertext;
use crate::btd::proof::{self, Proof, ProofStatement};
use crate::constants::{BTD_MAC_KEY_DST, BTD_XOF_SEED_DST};
use crate::elgamal;
use crate::error::{BtdError, Result};
use blstrs::{G1Projective, Gt};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Shake256};

type HmacSha3_256 = Hmac<Sha3_256>;

/// A batched ciphertext using the hybrid encoding: `m` is an arbitrary byte string, masked by a
/// keystream derived from a GT pad `MPad` rather than carried as a GT point directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HybridCiphertext {
    pub slot: u32,
    /// `Eval(k, i) + MPad`, the same PRF-pad masking scheme as the GT-native encoding.
    pub gamma: Gt,
    pub kp: G1Projective,
    pub c: elgamal::Ciphertext,
    pub proof: Proof,
    /// `m XOR keystream(seed)`, length equal to `m`'s.
    pub cm: Vec<u8>,
    /// `HMAC-SHA3-256(mac_key(seed), cm)`.
    pub mac: [u8; 32],
}

impl BatchedCiphertext for HybridCiphertext {
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

/// Derives the fresh, domain-separated XOF seed for `mpad`.
fn derive_seed(mpad: &Gt) -> [u8; 32] {
    let mpad_bytes = bcs::to_bytes(mpad).expect("Gt always serializes");
    let mut hasher = Sha3_256::new();
    hasher.update(BTD_XOF_SEED_DST);
    hasher.update(&mpad_bytes);
    hasher.finalize().into()
}

/// Derives the HMAC key from the seed, domain-separated from the keystream it authenticates.
fn derive_mac_key(seed: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(BTD_MAC_KEY_DST);
    hasher.update(seed);
    hasher.finalize().into()
}

fn keystream(seed: &[u8; 32], len: usize) -> Vec<u8> {
    let mut xof = Shake256::default();
    xof.update(seed);
    let mut reader = xof.finalize_xof();
    let mut out = vec![0u8; len];
    reader.read(&mut out);
    out
}

fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

fn compute_mac(mac_key: &[u8; 32], cm: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha3_256::new_from_slice(mac_key).expect("HMAC accepts any key length");
    mac.update(cm);
    mac.finalize().into_bytes().into()
}

/// Encrypts `m` (arbitrary bytes) at `slot`, proving consistency against `pk` and `g1_xi = X1_i`.
#[allow(non_snake_case)]
#[allow(clippy::too_many_arguments)]
pub(crate) fn build<R: rand_core::RngCore + rand_core::CryptoRng>(
    slot: u32,
    pk: &G1Projective,
    g1_xi: &G1Projective,
    k: &blstrs::Scalar,
    u: &blstrs::Scalar,
    pad: &Gt,
    c: elgamal::Ciphertext,
    kp: G1Projective,
    m: &[u8],
    rng: &mut R,
) -> HybridCiphertext {
    let r = crate::utils::random::random_scalar(rng);
    let mpad = crate::suite::gt_base() * r;

    let gamma = *pad + mpad;
    let seed = derive_seed(&mpad);
    let mac_key = derive_mac_key(&seed);
    let ks = keystream(&seed, m.len());
    let cm = xor(m, &ks);
    let mac = compute_mac(&mac_key, &cm);

    let st = ProofStatement {
        pk,
        slot,
        gamma: &gamma,
        kp: &kp,
        c: &c,
    };
    let proof = proof::prove(&st, g1_xi, k, u, rng);

    HybridCiphertext {
        slot,
        gamma,
        kp,
        c,
        proof,
        cm,
        mac,
    }
}

/// Recovers `m` from a `HybridCiphertext` given the `MPad` value the combiner recovered (i.e. the
/// raw GT value produced by the same combination equation used by the GT-native encoding), and
/// checks the HMAC tag.
pub fn open(mpad: &Gt, ct: &HybridCiphertext) -> Result<Vec<u8>> {
    let seed = derive_seed(mpad);
    let mac_key = derive_mac_key(&seed);
    let expected_mac = compute_mac(&mac_key, &ct.cm);

    if expected_mac != ct.mac {
        return Err(BtdError::DecryptionMismatch { slot: ct.slot });
    }

    let ks = keystream(&seed, ct.cm.len());
    Ok(xor(&ct.cm, &ks))
}
