//! Additively-homomorphic ElGamal over `G1`, plain (single key) and `(t, n)`-threshold variants.
//!
//! Grounded on the original `elgamal/elgamal.go`: `Enc` blinds a message point with `u . pk` for a
//! fresh ephemeral `u`; `Dec` recovers it by subtracting `sk . A`; ciphertext addition is
//! componentwise, preserving the invariant that the sum encrypts the sum of the messages under the
//! sum of the ephemerals.

pub mod threshold;

use crate::error::Result;
use crate::utils::random::random_scalar;
use crate::utils::serialization;
use blstrs::{G1Projective, Scalar};
use group::Group;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// An ElGamal ciphertext `(A, B_)` over `G1`, optionally retaining the plaintext witness `m` for
/// testing.
///
/// The `m` field only exists under the `testing-asserts` feature: a production build never ships
/// the plaintext inside its own ciphertext (see `btd::ciphertext::Ciphertext` for the corresponding
/// hardened batched-ciphertext type).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ciphertext {
    pub a: G1Projective,
    pub b: G1Projective,
    #[cfg(feature = "testing-asserts")]
    pub m: G1Projective,
}

/// Samples `sk` uniformly and returns `(sk, pk = sk . G1_base)`.
pub fn key_gen<R: RngCore + CryptoRng>(rng: &mut R) -> (Scalar, G1Projective) {
    let sk = random_scalar(rng);
    let pk = G1Projective::generator() * sk;
    (sk, pk)
}

/// Encrypts `m` under `pk`, sampling a fresh ephemeral `u`. Returns the ciphertext and `u`, since
/// the BTD Sigma proof needs to prove knowledge of the same `u` used here.
pub fn enc<R: RngCore + CryptoRng>(
    pk: &G1Projective,
    m: &G1Projective,
    rng: &mut R,
) -> (Ciphertext, Scalar) {
    let u = random_scalar(rng);
    let a = G1Projective::generator() * u;
    let b = (*pk * u) + m;

    let ct = Ciphertext {
        a,
        b,
        #[cfg(feature = "testing-asserts")]
        m: *m,
    };
    (ct, u)
}

/// Serializes a committee public key to its canonical compressed-point encoding.
pub fn pk_to_bytes(pk: &G1Projective) -> Vec<u8> {
    serialization::g1_proj_to_bytes(pk)
}

/// Parses a committee public key from its canonical compressed-point encoding.
pub fn pk_from_bytes(bytes: &[u8]) -> Result<G1Projective> {
    serialization::g1_proj_from_bytes(bytes)
}

/// Recovers the message point `B_ - sk . A`.
pub fn dec(sk: &Scalar, ct: &Ciphertext) -> G1Projective {
    ct.b - ct.a * sk
}

/// The all-identity ciphertext, the additive identity for [`add_ct`].
pub fn null_ct() -> Ciphertext {
    Ciphertext {
        a: G1Projective::identity(),
        b: G1Projective::identity(),
        #[cfg(feature = "testing-asserts")]
        m: G1Projective::identity(),
    }
}

/// Componentwise ciphertext addition: if `a` encrypts `m_a` under ephemeral `u_a` and `b` encrypts
/// `m_b` under `u_b`, `add_ct(a, b)` encrypts `m_a + m_b` under `u_a + u_b`.
pub fn add_ct(a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
    Ciphertext {
        a: a.a + b.a,
        b: a.b + b.b,
        #[cfg(feature = "testing-asserts")]
        m: a.m + b.m,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn pk_bytes_roundtrip() {
        let mut rng = thread_rng();
        let (_sk, pk) = key_gen(&mut rng);
        let bytes = pk_to_bytes(&pk);
        assert_eq!(pk_from_bytes(&bytes).unwrap(), pk);
    }

    #[test]
    fn enc_dec_roundtrip() {
        let mut rng = thread_rng();
        let (sk, pk) = key_gen(&mut rng);
        let m = G1Projective::generator() * random_scalar(&mut rng);

        let (ct, _u) = enc(&pk, &m, &mut rng);
        assert_eq!(dec(&sk, &ct), m);
    }

    #[test]
    fn homomorphic_addition() {
        let mut rng = thread_rng();
        let (sk, pk) = key_gen(&mut rng);
        let m_a = G1Projective::generator() * random_scalar(&mut rng);
        let m_b = G1Projective::generator() * random_scalar(&mut rng);

        let (ct_a, _) = enc(&pk, &m_a, &mut rng);
        let (ct_b, _) = enc(&pk, &m_b, &mut rng);
        let sum = add_ct(&ct_a, &ct_b);

        assert_eq!(dec(&sk, &sum), m_a + m_b);
    }

    #[test]
    fn null_ct_is_additive_identity() {
        let mut rng = thread_rng();
        let (_sk, pk) = key_gen(&mut rng);
        let m = G1Projective::generator() * random_scalar(&mut rng);
        let (ct, _u) = enc(&pk, &m, &mut rng);

        assert_eq!(add_ct(&ct, &null_ct()), ct);
    }
}
