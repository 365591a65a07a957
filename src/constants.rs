use num_bigint::BigUint;
use once_cell::sync::Lazy;

//
// DSTs and protocol tags
//

/// Protocol tag mixed into every Sigma-proof Fiat-Shamir transcript, preventing cross-protocol
/// collisions with any other Merlin-based protocol a caller might also run.
pub const BTD_SIGMA_DOM_SEP: &[u8; 15] = b"BTD_SIGMA_PROOF";

/// Domain-separator for reducing the squeezed Sigma-proof challenge bytes into a scalar.
pub const BTD_HASH_TO_SCALAR_DST: &[u8; 28] = b"BTD_SIGMA_HASH_TO_SCALAR_DST";

/// Domain-separator for deriving the hybrid-encoding XOF seed from the GT pad `MPad`.
pub const BTD_XOF_SEED_DST: &[u8; 16] = b"BTD_XOF_SEED_DST";

/// Domain-separator for deriving the hybrid-encoding HMAC authentication key.
pub const BTD_MAC_KEY_DST: &[u8; 15] = b"BTD_MAC_KEY_DST";

//
// Batch sizes used by tests
//

/// Small batch sizes exercised by the combiner test suite.
pub const SMALL_BATCH_SIZES: [usize; 7] = [1, 2, 3, 4, 8, 16, 32];

//
// Sizes
//

/// The size in bytes of a compressed G1 point (efficiently deserializable into projective coordinates).
pub const G1_PROJ_NUM_BYTES: usize = 48;

/// The size in bytes of a compressed G2 point (efficiently deserializable into projective coordinates).
pub const G2_PROJ_NUM_BYTES: usize = 96;

/// The size in bytes of a compressed GT (`Fp12`, torus-compressed) element.
pub const GT_PROJ_NUM_BYTES: usize = 288;

/// The size in bytes of a scalar.
pub const SCALAR_NUM_BYTES: usize = 32;

/// The size in bytes of the HMAC authentication tag appended to hybrid-encoded ciphertexts.
pub const MAC_TAG_NUM_BYTES: usize = 32;

pub(crate) static SCALAR_FIELD_ORDER: Lazy<BigUint> =
    Lazy::new(crate::utils::biguint::scalar_field_order_as_biguint);
