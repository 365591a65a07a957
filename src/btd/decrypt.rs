//! `BTD.BatchDec` and `BatchDecOpt`: threshold partial decryption of a sub-batch's summed ElGamal
//! ciphertext, directly or at every log-cascade checkpoint.
//!
//! Grounded on `BatchDec`/`BatchDecOpt`/`SumEGCt` in the original `be/btd.go`.

use crate::btd::ciphertext::BatchedCiphertext;
use crate::btd::combine::{checkpoint_start, lg_batches};
use crate::elgamal;
use crate::elgamal::threshold::{p_dec, PriShare, PubShare};
use crate::error::{BtdError, Result};
use crate::pprf::Crs;
use blstrs::G1Projective;

/// Sums the ElGamal components of `cts` componentwise, optionally verifying each ciphertext's
/// Sigma proof first (aborting with the offending slot on the first failure).
pub(crate) fn sum_ciphertexts<C: BatchedCiphertext>(
    crs: &Crs,
    pk: &G1Projective,
    cts: &[C],
    verify: bool,
) -> Result<elgamal::Ciphertext> {
    let mut sum = elgamal::null_ct();
    for ct in cts {
        if verify {
            let g1_xi = crs.g1_base_at(ct.slot() as usize)?;
            ct.verify(pk, &g1_xi)?;
        }
        sum = elgamal::add_ct(&sum, ct.elgamal_ct());
    }
    Ok(sum)
}

fn check_batch_size<C>(crs: &Crs, cts: &[C]) -> Result<()> {
    if cts.len() > crs.batch_bound() {
        Err(BtdError::BatchTooLarge {
            len: cts.len(),
            bound: crs.batch_bound(),
        })
    } else {
        Ok(())
    }
}

/// Computes one decryptor's partial share of `K* = sum_l k_l` for the sub-batch `cts`.
pub fn batch_dec<C: BatchedCiphertext>(
    crs: &Crs,
    pk: &G1Projective,
    cts: &[C],
    share: &PriShare,
    verify: bool,
) -> Result<PubShare> {
    check_batch_size(crs, cts)?;
    let c_sum = sum_ciphertexts(crs, pk, cts, verify)?;
    Ok(p_dec(share, &c_sum))
}

/// Computes one decryptor's partial shares of `K*_0, ..., K*_{lgL-1}`, one per log-cascade
/// checkpoint suffix `cts[start_l:]`.
pub fn batch_dec_opt<C: BatchedCiphertext>(
    crs: &Crs,
    pk: &G1Projective,
    cts: &[C],
    share: &PriShare,
    verify: bool,
) -> Result<Vec<PubShare>> {
    check_batch_size(crs, cts)?;
    if verify {
        for ct in cts {
            let g1_xi = crs.g1_base_at(ct.slot() as usize)?;
            ct.verify(pk, &g1_xi)?;
        }
    }

    let lg_l = lg_batches(cts.len());
    (0..lg_l)
        .map(|l| {
            let start = checkpoint_start(cts.len(), l);
            batch_dec(crs, pk, &cts[start..], share, false)
        })
        .collect()
}
