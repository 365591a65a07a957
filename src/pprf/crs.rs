//! The puncturable PRF's common reference string, and the PPRF operations defined over it.
//!
//! Grounded directly on the Boneh-Waters-style construction in the original `prf/prf.go`: `Eval(k,
//! i) = k * z_i * GT_base`; puncturing at `i` yields `kp = k * X1_i`; and the cross table lets a
//! holder of a key punctured at `pi` recover `Eval(k, i)` for any `i != pi` via one pairing against
//! `Q[i][pi] = (z_i / x_pi) * G2_base`, without ever learning `k`.

use crate::constants::SMALL_BATCH_SIZES;
use crate::error::{BtdError, Result};
use crate::suite;
use crate::utils::random::{random_scalar, random_scalars};
use blstrs::{G1Projective, G2Projective, Gt, Scalar};
use ff::Field;
use group::Group;
use rand_core::{CryptoRng, RngCore};
use rayon::prelude::*;

/// The CRS for a PPRF with domain `[0, B)`. Immutable after [`Crs::setup`]; all of `x`, `z`, and
/// the derived tables are read-only for the lifetime of the CRS.
#[allow(non_snake_case)]
#[derive(Clone)]
pub struct Crs {
    /// The batch bound `B`: the PPRF's domain is `[0, B)`.
    b: usize,
    /// `x_i`, kept only to satisfy the invariant `x_j != 0`; never serialized or exposed.
    #[allow(dead_code)]
    xi: Vec<Scalar>,
    /// `X1_i = x_i . G1_base`, used to puncture a key at `i`.
    g1_xi: Vec<G1Projective>,
    /// `Z2_i = z_i . G2_base`, used by `ExpEval`.
    g2_zi: Vec<G2Projective>,
    /// `ZT_i = z_i . GT_base`, used by `Eval`.
    gt_zi: Vec<Gt>,
    /// The `B * B` cross table, flattened row-major: `cross[i * b + pi] = Q[i][pi] = (z_i / x_pi) .
    /// G2_base`. The first index is the *evaluation* slot, the second is the *punctured* slot —
    /// this is the canonical (non-broken) axis convention from the original Go sources, fixed here
    /// once and for all rather than re-derived at each call site.
    cross: Vec<G2Projective>,
}

impl Crs {
    /// Generates a fresh CRS for batch bound `b`. The `b^2`-sized cross table is filled in
    /// parallel across disjoint row ranges via `rayon`, mirroring the Go `sync.WaitGroup`-based
    /// concurrent fill.
    #[allow(non_snake_case)]
    pub fn setup<R: RngCore + CryptoRng>(b: usize, rng: &mut R) -> Self {
        more_asserts::assert_gt!(b, 0);

        let xi = random_scalars(b, rng);
        let zi = random_scalars(b, rng);

        let g1_base = suite::g1_base();
        let g2_base = suite::g2_base();
        let gt_base = suite::gt_base();

        let g1_xi: Vec<G1Projective> = xi.iter().map(|x| g1_base * x).collect();
        let g2_zi: Vec<G2Projective> = zi.iter().map(|z| g2_base * z).collect();
        let gt_zi: Vec<Gt> = zi.iter().map(|z| gt_base * z).collect();

        let xi_inv: Vec<Scalar> = xi
            .iter()
            .map(|x| x.invert().expect("x_j must be non-zero"))
            .collect();

        let mut cross = vec![G2Projective::identity(); b * b];
        cross
            .par_chunks_mut(b)
            .enumerate()
            .for_each(|(i, row)| {
                for (pi, slot) in row.iter_mut().enumerate() {
                    *slot = g2_base * (zi[i] * xi_inv[pi]);
                }
            });

        Crs {
            b,
            xi,
            g1_xi,
            g2_zi,
            gt_zi,
            cross,
        }
    }

    /// The batch bound `B` this CRS was generated for.
    pub fn batch_bound(&self) -> usize {
        self.b
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.b {
            Err(BtdError::IndexOutOfDomain {
                index: i,
                bound: self.b,
            })
        } else {
            Ok(())
        }
    }

    fn cross_entry(&self, eval_index: usize, punctured_index: usize) -> G2Projective {
        self.cross[eval_index * self.b + punctured_index]
    }

    /// `KeyGen() -> k`: samples a uniform random PRF key.
    pub fn key_gen<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Scalar {
        random_scalar(rng)
    }

    /// `X1_i = x_i . G1_base`: the CRS base point a key is punctured against at slot `i`. The
    /// Sigma proof needs this directly (not just through `puncture`) to bind its third equation.
    pub fn g1_base_at(&self, i: usize) -> Result<G1Projective> {
        self.check_index(i)?;
        Ok(self.g1_xi[i])
    }

    /// `Puncture(k, i) -> k . X1_i`: restricts `k` to a key that is useless at slot `i` but, via
    /// [`Crs::p_eval`], still evaluates everywhere else.
    pub fn puncture(&self, k: &Scalar, i: usize) -> Result<G1Projective> {
        self.check_index(i)?;
        Ok(self.g1_xi[i] * k)
    }

    /// `Eval(k, i) -> k . ZT_i`: the direct PRF evaluation, requiring the unpunctured key `k`.
    pub fn eval(&self, k: &Scalar, i: usize) -> Result<Gt> {
        self.check_index(i)?;
        Ok(self.gt_zi[i] * k)
    }

    /// `PEval(kp, pi, i) -> e(kp, Q[i][pi])`, equal to `Eval(k, i)` for the (unknown) key `k` whose
    /// puncturing at `pi` produced `kp`. Requires `pi != i`.
    pub fn p_eval(&self, kp: &G1Projective, pi: usize, i: usize) -> Result<Gt> {
        self.check_index(i)?;
        self.check_index(pi)?;
        if pi == i {
            return Err(BtdError::PunctureConflict { index: i });
        }
        Ok(suite::pairing(kp, &self.cross_entry(i, pi)))
    }

    /// `ExpEval(K, i) -> e(K, Z2_i)`, reconstructing `Eval(k, i)` from a published commitment
    /// `K = k . G1_base` to the key (rather than from the key itself).
    pub fn exp_eval(&self, k_commitment: &G1Projective, i: usize) -> Result<Gt> {
        self.check_index(i)?;
        Ok(suite::pairing(k_commitment, &self.g2_zi[i]))
    }

    /// `SumKeys({k_l}) = sum_l k_l`. Additive homomorphism used by the log-cascade combiner to
    /// synthesize a single key for a suffix sub-batch from the individual slot keys.
    pub fn sum_keys(keys: &[Scalar]) -> Scalar {
        keys.iter().sum()
    }
}

/// Small batch sizes exercised by `tests/pprf.rs`; exposed here so both the crate's own tests and a
/// downstream caller's test suite can iterate over the same canonical set.
pub fn small_batch_sizes() -> &'static [usize] {
    &SMALL_BATCH_SIZES
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn p_eval_matches_eval() {
        let mut rng = thread_rng();
        let crs = Crs::setup(8, &mut rng);
        let k = crs.key_gen(&mut rng);

        for pi in 0..crs.batch_bound() {
            let kp = crs.puncture(&k, pi).unwrap();
            for i in 0..crs.batch_bound() {
                if i == pi {
                    continue;
                }
                let direct = crs.eval(&k, i).unwrap();
                let via_puncture = crs.p_eval(&kp, pi, i).unwrap();
                assert_eq!(direct, via_puncture);
            }
        }
    }

    #[test]
    fn exp_eval_matches_eval() {
        let mut rng = thread_rng();
        let crs = Crs::setup(4, &mut rng);
        let k = crs.key_gen(&mut rng);
        let commitment = suite::g1_base() * k;

        for i in 0..crs.batch_bound() {
            assert_eq!(crs.eval(&k, i).unwrap(), crs.exp_eval(&commitment, i).unwrap());
        }
    }

    #[test]
    fn puncture_rejects_out_of_domain_index() {
        let mut rng = thread_rng();
        let crs = Crs::setup(4, &mut rng);
        let k = crs.key_gen(&mut rng);
        assert_eq!(
            crs.puncture(&k, 4).unwrap_err(),
            BtdError::IndexOutOfDomain { index: 4, bound: 4 }
        );
    }

    #[test]
    fn p_eval_rejects_matching_indices() {
        let mut rng = thread_rng();
        let crs = Crs::setup(4, &mut rng);
        let k = crs.key_gen(&mut rng);
        let kp = crs.puncture(&k, 1).unwrap();
        assert_eq!(
            crs.p_eval(&kp, 1, 1).unwrap_err(),
            BtdError::PunctureConflict { index: 1 }
        );
    }

    #[test]
    fn sum_keys_is_additive_in_eval() {
        let mut rng = thread_rng();
        let crs = Crs::setup(4, &mut rng);
        let ks: Vec<Scalar> = (0..5).map(|_| crs.key_gen(&mut rng)).collect();
        let k_sum = Crs::sum_keys(&ks);

        let lhs = crs.eval(&k_sum, 2).unwrap();
        let rhs: Gt = ks
            .iter()
            .map(|k| crs.eval(k, 2).unwrap())
            .fold(Gt::identity(), |acc, g| acc + g);
        assert_eq!(lhs, rhs);
    }
}
