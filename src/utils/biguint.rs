//! Conversions between `num_bigint::BigUint` and `blstrs::Scalar`, used to reduce wide hash
//! outputs modulo the scalar field order (see [`crate::utils::hash_to_scalar`]).

use blstrs::Scalar;
use ff::{Field, PrimeField};
use num_bigint::BigUint;

/// Returns the order of the BLS12-381 scalar field as a `BigUint`, computed once from `-1`'s
/// representative, i.e. `MODULUS - 1`.
pub(crate) fn scalar_field_order_as_biguint() -> BigUint {
    let max = -Scalar::ONE;
    biguint_from_scalar(&max) + BigUint::from(1u8)
}

fn biguint_from_scalar(s: &Scalar) -> BigUint {
    BigUint::from_bytes_le(s.to_repr().as_ref())
}

/// Converts a `BigUint` known to be less than the scalar field order into a `Scalar`.
pub(crate) fn biguint_to_scalar(n: &BigUint) -> Scalar {
    let mut bytes = n.to_bytes_le();
    bytes.resize(32, 0);
    let mut repr = <Scalar as PrimeField>::Repr::default();
    repr.as_mut().copy_from_slice(&bytes);
    Option::from(Scalar::from_repr(repr))
        .expect("reduced BigUint must be a valid scalar representative")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::random::random_scalar;
    use rand::thread_rng;

    #[test]
    fn roundtrip() {
        let mut rng = thread_rng();
        for _ in 0..32 {
            let s = random_scalar(&mut rng);
            let n = biguint_from_scalar(&s);
            assert_eq!(biguint_to_scalar(&n), s);
        }
    }
}
