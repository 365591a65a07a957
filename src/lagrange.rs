//! Lagrange interpolation at zero over an arbitrary set of evaluation points.
//!
//! `aptos-dkg`'s own `algebra::lagrange` module is specialized to an FFT-friendly evaluation domain
//! of roots of unity. Threshold ElGamal here shares secrets at the points `{1, ..., n}` instead (as
//! does the `share.PriShare`/`PubShare` pair in the Go sources this crate is built from), so this
//! module generalizes the same barycentric idea to any set of distinct non-zero points.

use crate::error::{BtdError, Result};
use blstrs::Scalar;
use ff::Field;

/// Given the `x`-coordinates of a set of shares, returns the Lagrange coefficients `\lambda_i` such
/// that `\sum_i \lambda_i \cdot f(x_i) = f(0)` for any polynomial `f` of degree `< points.len()`
/// that the shares lie on.
///
/// Fails with [`BtdError::InvalidShareIndex`] if `points` contains a zero or a duplicate, since
/// these arrive from caller-supplied share indices and must never panic the process.
pub fn lagrange_coefficients_at_zero(points: &[u64]) -> Result<Vec<Scalar>> {
    let xs: Vec<Scalar> = points.iter().map(|&x| Scalar::from(x)).collect();

    xs.iter()
        .enumerate()
        .map(|(i, &xi)| {
            if xi == Scalar::ZERO {
                return Err(BtdError::InvalidShareIndex { index: points[i] });
            }

            let mut num = Scalar::ONE;
            let mut den = Scalar::ONE;
            for (j, &xj) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                if xi == xj {
                    return Err(BtdError::InvalidShareIndex { index: points[i] });
                }
                num *= xj;
                den *= xj - xi;
            }

            Ok(num * den.invert().expect("distinct non-zero points give a non-zero denominator"))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::random::random_scalar;
    use rand::thread_rng;

    /// Builds a random degree `< t` polynomial, evaluates it at `points`, and checks that the
    /// Lagrange coefficients recover `f(0)` from any `t`-subset of those evaluations.
    #[test]
    fn recovers_constant_term() {
        let mut rng = thread_rng();
        let t = 4;
        let secret = random_scalar(&mut rng);
        let mut coeffs = vec![secret];
        coeffs.extend((1..t).map(|_| random_scalar(&mut rng)));

        let eval = |x: u64| -> Scalar {
            let x = Scalar::from(x);
            let mut acc = Scalar::ZERO;
            let mut xp = Scalar::ONE;
            for c in &coeffs {
                acc += *c * xp;
                xp *= x;
            }
            acc
        };

        let points: Vec<u64> = vec![1, 2, 3, 4];
        let shares: Vec<Scalar> = points.iter().map(|&x| eval(x)).collect();
        let lambdas = lagrange_coefficients_at_zero(&points).unwrap();

        let recovered: Scalar = lambdas
            .iter()
            .zip(shares.iter())
            .map(|(l, s)| *l * *s)
            .sum();

        assert_eq!(recovered, secret);
    }

    #[test]
    fn single_point_coefficient_is_one() {
        let lambdas = lagrange_coefficients_at_zero(&[7]).unwrap();
        assert_eq!(lambdas, vec![Scalar::ONE]);
    }

    #[test]
    fn zero_point_is_rejected() {
        assert_eq!(
            lagrange_coefficients_at_zero(&[1, 0, 2]).unwrap_err(),
            BtdError::InvalidShareIndex { index: 0 }
        );
    }

    #[test]
    fn duplicate_point_is_rejected() {
        assert_eq!(
            lagrange_coefficients_at_zero(&[1, 3, 3]).unwrap_err(),
            BtdError::InvalidShareIndex { index: 3 }
        );
    }
}
