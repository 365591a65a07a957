use blstrs::{G1Projective, G2Projective, Gt, Scalar};
use ff::Field;
use group::Group;
use rand_core::{CryptoRng, RngCore};

/// Returns a uniform random `blstrs::Scalar`.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    Scalar::random(rng)
}

/// Returns a uniform random `blstrs::G1Projective`.
pub fn random_g1_point<R: RngCore + CryptoRng>(rng: &mut R) -> G1Projective {
    G1Projective::random(rng)
}

/// Returns a uniform random `blstrs::G2Projective`.
pub fn random_g2_point<R: RngCore + CryptoRng>(rng: &mut R) -> G2Projective {
    G2Projective::random(rng)
}

/// Returns a uniform random `blstrs::Gt`.
///
/// NOTE: This is "insecure" in the sense that the caller learns the discrete log of the random
/// GT point w.r.t. the generator (it is sampled as `s * generator` for a known random `s`). Many
/// applications cannot accept this; used here only for test-vector generation.
pub fn random_gt_point_insecure<R: RngCore + CryptoRng>(rng: &mut R) -> Gt {
    let s = random_scalar(rng);
    Gt::generator() * s
}

/// Returns a vector of `n` uniform random `blstrs::Scalar`s.
pub fn random_scalars<R: RngCore + CryptoRng>(n: usize, rng: &mut R) -> Vec<Scalar> {
    (0..n).map(|_| random_scalar(rng)).collect()
}

/// Returns a vector of `n` uniform random `blstrs::G1Projective` points.
pub fn random_g1_points<R: RngCore + CryptoRng>(n: usize, rng: &mut R) -> Vec<G1Projective> {
    (0..n).map(|_| random_g1_point(rng)).collect()
}

/// Returns a vector of `n` uniform random `blstrs::G2Projective` points.
pub fn random_g2_points<R: RngCore + CryptoRng>(n: usize, rng: &mut R) -> Vec<G2Projective> {
    (0..n).map(|_| random_g2_point(rng)).collect()
}
