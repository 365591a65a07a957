//! `BTD.Enc`: produces a batched ciphertext with its Sigma proof, for either message encoding.
//!
//! Grounded directly on `Enc` in the original `be/btd.go`.

use crate::btd::ciphertext::Ciphertext;
use crate::btd::hybrid;
use crate::btd::proof::{self, ProofStatement};
use crate::elgamal;
use crate::error::{BtdError, Result};
use crate::pprf::Crs;
use crate::suite;
use blstrs::{G1Projective, Gt};
use rand_core::{CryptoRng, RngCore};

/// Encrypts the GT-native message `m` at `slot`, under the committee public key `pk`.
pub fn enc<R: RngCore + CryptoRng>(
    crs: &Crs,
    pk: &G1Projective,
    slot: u32,
    m: &Gt,
    rng: &mut R,
) -> Result<Ciphertext> {
    let i = slot as usize;
    if i >= crs.batch_bound() {
        return Err(BtdError::IndexOutOfDomain {
            index: i,
            bound: crs.batch_bound(),
        });
    }

    let k = crs.key_gen(rng);
    let kp = crs.puncture(&k, i)?;
    let k_commitment = suite::g1_base() * k;
    let (c, u) = elgamal::enc(pk, &k_commitment, rng);
    let pad = crs.eval(&k, i)?;
    let gamma = pad + m;
    let g1_xi_base = crs.g1_base_at(i)?;

    let st = ProofStatement {
        pk,
        slot,
        gamma: &gamma,
        kp: &kp,
        c: &c,
    };
    let proof = proof::prove(&st, &g1_xi_base, &k, &u, rng);

    Ok(Ciphertext {
        slot,
        gamma,
        kp,
        c,
        proof,
        #[cfg(feature = "testing-asserts")]
        m: *m,
    })
}

/// Encrypts arbitrary-length bytes `m` at `slot` using the hybrid encoding.
pub fn enc_hybrid<R: RngCore + CryptoRng>(
    crs: &Crs,
    pk: &G1Projective,
    slot: u32,
    m: &[u8],
    rng: &mut R,
) -> Result<hybrid::HybridCiphertext> {
    let i = slot as usize;
    if i >= crs.batch_bound() {
        return Err(BtdError::IndexOutOfDomain {
            index: i,
            bound: crs.batch_bound(),
        });
    }

    let k = crs.key_gen(rng);
    let kp = crs.puncture(&k, i)?;
    let k_commitment = suite::g1_base() * k;
    let (c, u) = elgamal::enc(pk, &k_commitment, rng);
    let pad = crs.eval(&k, i)?;
    let g1_xi_base = crs.g1_base_at(i)?;

    Ok(hybrid::build(
        slot,
        pk,
        &g1_xi_base,
        &k,
        &u,
        &pad,
        c,
        kp,
        m,
        rng,
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::random::random_gt_point_insecure;
    use rand::thread_rng;

    #[test]
    fn enc_rejects_out_of_domain_slot() {
        let mut rng = thread_rng();
        let crs = Crs::setup(4, &mut rng);
        let (_sk, pk) = elgamal::key_gen(&mut rng);
        let m = random_gt_point_insecure(&mut rng);

        assert_eq!(
            enc(&crs, &pk, 4, &m, &mut rng).unwrap_err(),
            BtdError::IndexOutOfDomain { index: 4, bound: 4 }
        );
    }
}
