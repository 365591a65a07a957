//! The Sigma protocol attesting that a batched ciphertext's ElGamal encryption and its punctured
//! PRF key were built from the same `(k, u)`, and the domain-separated Fiat-Shamir transcript that
//! makes it non-interactive.
//!
//! Grounded on `VerifyCT`/`Enc`/`SHash` in the original `be/btd.go`, transcribed onto a
//! `merlin::Transcript` in the idiom of `aptos-dkg::pvss::scrape::fiat_shamir`.

use crate::constants::{BTD_HASH_TO_SCALAR_DST, BTD_SIGMA_DOM_SEP};
use crate::elgamal;
use crate::error::{BtdError, Result};
use crate::suite;
use crate::utils::fiat_shamir;
use crate::utils::hash_to_scalar;
use blstrs::{G1Projective, Gt, Scalar};
use serde::{Deserialize, Serialize};

/// The non-interactive Sigma proof `(Ap, Bp, yp, k_hat, u_hat)` attached to every batched
/// ciphertext.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct Proof {
    pub ap: G1Projective,
    pub bp: G1Projective,
    pub yp: G1Projective,
    pub k_hat: Scalar,
    pub u_hat: Scalar,
}

/// The fields of a batched ciphertext that the proof binds to, independent of its message
/// encoding (GT-native vs hybrid both supply the same shape here).
#[allow(non_snake_case)]
pub(crate) struct ProofStatement<'a> {
    pub pk: &'a G1Projective,
    pub slot: u32,
    pub gamma: &'a Gt,
    pub kp: &'a G1Projective,
    pub c: &'a elgamal::Ciphertext,
}

fn append_statement(t: &mut merlin::Transcript, st: &ProofStatement) {
    t.append_message(b"dom-sep", BTD_SIGMA_DOM_SEP);
    fiat_shamir::append_g1_point(t, b"pk", st.pk);
    t.append_u64(b"slot", st.slot as u64);
    fiat_shamir::append_gt_point(t, b"gamma", st.gamma);
    fiat_shamir::append_g1_point(t, b"kp", st.kp);
    fiat_shamir::append_g1_point(t, b"A", &st.c.a);
    fiat_shamir::append_g1_point(t, b"B", &st.c.b);
}

/// Computes the Fiat-Shamir challenge `h = SHash(pk, CT_no_proof, Ap, Bp, yp)`.
fn challenge(st: &ProofStatement, ap: &G1Projective, bp: &G1Projective, yp: &G1Projective) -> Scalar {
    let mut t = merlin::Transcript::new(b"BTD");
    append_statement(&mut t, st);
    fiat_shamir::append_g1_point(&mut t, b"Ap", ap);
    fiat_shamir::append_g1_point(&mut t, b"Bp", bp);
    fiat_shamir::append_g1_point(&mut t, b"yp", yp);

    let mut buf = [0u8; 64];
    t.challenge_bytes(b"challenge_h", &mut buf);
    hash_to_scalar(buf.as_slice(), BTD_HASH_TO_SCALAR_DST)
}

/// Produces a proof that `c` encrypts `K = k . G1_base` under `pk` using ephemeral `u`, and that
/// `kp = k . X1_i` for the same `k`, for the statement `st`.
#[allow(non_snake_case)]
pub(crate) fn prove<R: rand_core::RngCore + rand_core::CryptoRng>(
    st: &ProofStatement,
    g1_xi: &G1Projective,
    k: &Scalar,
    u: &Scalar,
    rng: &mut R,
) -> Proof {
    let u_n = crate::utils::random::random_scalar(rng);
    let k_n = crate::utils::random::random_scalar(rng);

    let ap = suite::g1_base() * u_n;
    let bp = (*st.pk * u_n) + suite::g1_base() * k_n;
    let yp = *g1_xi * k_n;

    let h = challenge(st, &ap, &bp, &yp);

    Proof {
        ap,
        bp,
        yp,
        k_hat: k_n + *k * h,
        u_hat: u_n + *u * h,
    }
}

/// Verifies the three Sigma-protocol equalities. `g1_xi` is `X1_i`, the CRS's `i`-th G1 base point
/// for the ciphertext's slot.
#[allow(non_snake_case)]
pub(crate) fn verify(st: &ProofStatement, proof: &Proof, g1_xi: &G1Projective) -> Result<()> {
    let h = challenge(st, &proof.ap, &proof.bp, &proof.yp);

    let al = suite::g1_base() * proof.u_hat;
    let ar = proof.ap + st.c.a * h;
    if al != ar {
        return Err(BtdError::ProofFailed { slot: st.slot });
    }

    let bl = (*st.pk * proof.u_hat) + suite::g1_base() * proof.k_hat;
    let br = proof.bp + st.c.b * h;
    if bl != br {
        return Err(BtdError::ProofFailed { slot: st.slot });
    }

    let yl = *g1_xi * proof.k_hat;
    let yr = proof.yp + *st.kp * h;
    if yl != yr {
        return Err(BtdError::ProofFailed { slot: st.slot });
    }

    Ok(())
}
