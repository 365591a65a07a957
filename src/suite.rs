//! The one curve-specific surface the rest of the crate depends on.
//!
//! `pprf`, `elgamal`, and `btd` are written directly against concrete `blstrs` types, the same
//! pragmatic choice `aptos-dkg` makes for its PVSS modules rather than hiding the curve behind a
//! generic trait parameter. This module is still where every pairing, base point, and GT sample is
//! obtained from, so that swapping the pairing-friendly curve underneath is a change localized here.

use blstrs::{Bls12, G1Affine, G1Projective, G2Affine, G2Projective, Gt};
use group::{Curve, Group};
use pairing::{MillerLoopResult, MultiMillerLoop};

/// The distinguished generator of `G1`.
#[inline]
pub fn g1_base() -> G1Projective {
    G1Projective::generator()
}

/// The distinguished generator of `G2`.
#[inline]
pub fn g2_base() -> G2Projective {
    G2Projective::generator()
}

/// The distinguished generator of `GT`, computed as `e(G1_base, G2_base)`.
#[inline]
pub fn gt_base() -> Gt {
    pairing(&g1_base(), &g2_base())
}

/// The additive identity of `GT`.
#[inline]
pub fn gt_identity() -> Gt {
    Gt::identity()
}

/// Computes the Type-3 pairing `e(p, q) \in GT`.
pub fn pairing(p: &G1Projective, q: &G2Projective) -> Gt {
    let p = p.to_affine();
    let q = q.to_affine();
    multi_pairing(std::iter::once(&p), std::iter::once(&q))
}

/// Computes `\prod_l e(p_l, q_l) \in GT` via a single multi-Miller-loop, following the
/// `<Bls12 as MultiMillerLoop>::multi_miller_loop` pattern used throughout `aptos-dkg`'s SCRAPE
/// transcript verification.
pub fn multi_pairing<'a>(
    g1s: impl Iterator<Item = &'a G1Affine>,
    g2s: impl Iterator<Item = &'a G2Affine>,
) -> Gt {
    let prepared: Vec<_> = g2s.map(blstrs::G2Prepared::from).collect();
    let pairs: Vec<_> = g1s.zip(prepared.iter()).collect();
    let res = <Bls12 as MultiMillerLoop>::multi_miller_loop(pairs.as_slice());
    res.final_exponentiation()
}
