//! `(t, n)`-Shamir-threshold ElGamal: the secret key is shared among `n` parties so that any `t`
//! can jointly decrypt, following `share.PriShare`/`PubShare` in the original sources' threshold
//! test (`elgamal_test.go`): shares are indexed `1, ..., n`, partial decryptions are points, and
//! `Combine` interpolates at zero.

use crate::elgamal::Ciphertext;
use crate::error::{BtdError, Result};
use crate::lagrange::lagrange_coefficients_at_zero;
use crate::threshold_config::ThresholdConfig;
use crate::utils::random::random_scalars;
use blstrs::{G1Projective, Scalar};
use group::Group;
use rand_core::{CryptoRng, RngCore};

/// A private share `(index, value)` of the shared secret key `sk`, held by one party. `index`
/// ranges over `1, ..., n`, never `0` (the secret itself sits at `x = 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriShare {
    pub index: u64,
    pub value: Scalar,
}

/// A partial decryption `(index, value)` produced by [`p_dec`] from one party's [`PriShare`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PubShare {
    pub index: u64,
    pub value: G1Projective,
}

/// Samples a degree-`t-1` polynomial with a uniform constant term `sk`, publishes `pk = sk .
/// G1_base`, and returns the `n` private shares `sk_i` evaluated at `x = 1, ..., n`.
pub fn key_gen<R: RngCore + CryptoRng>(
    tc: &ThresholdConfig,
    rng: &mut R,
) -> (Vec<PriShare>, G1Projective) {
    let coeffs = random_scalars(tc.get_threshold(), rng);
    let pk = G1Projective::generator() * coeffs[0];

    let shares = (1..=tc.get_total_num_players() as u64)
        .map(|x| {
            let xs = Scalar::from(x);
            let mut acc = Scalar::from(0u64);
            let mut xp = Scalar::from(1u64);
            for c in &coeffs {
                acc += *c * xp;
                xp *= xs;
            }
            PriShare { index: x, value: acc }
        })
        .collect();

    (shares, pk)
}

/// Computes party `share`'s partial decryption of `ct`: `(index, sk_index . A)`.
pub fn p_dec(share: &PriShare, ct: &Ciphertext) -> PubShare {
    PubShare {
        index: share.index,
        value: ct.a * share.value,
    }
}

/// Combines `>= t` partial decryptions into the plaintext, interpolating `sk . A` at `0` via
/// Lagrange coefficients and subtracting it from `B_`. Fails with [`BtdError::ShareShortage`] if
/// fewer than `t` shares are supplied, or [`BtdError::InvalidShareIndex`] if the shares used
/// contain a zero or duplicate index.
pub fn combine(tc: &ThresholdConfig, ct: &Ciphertext, shares: &[PubShare]) -> Result<G1Projective> {
    let t = tc.get_threshold();
    if shares.len() < t {
        return Err(BtdError::ShareShortage {
            have: shares.len(),
            need: t,
        });
    }

    let used = &shares[..t];
    let points: Vec<u64> = used.iter().map(|s| s.index).collect();
    let lambdas = lagrange_coefficients_at_zero(&points)?;

    let sk_a: G1Projective = used
        .iter()
        .zip(lambdas.iter())
        .map(|(s, l)| s.value * l)
        .fold(G1Projective::identity(), |acc, p| acc + p);

    Ok(ct.b - sk_a)
}
