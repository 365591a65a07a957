//! The puncturable PRF over a bilinear group: CRS generation, key generation, evaluation,
//! puncturing, punctured evaluation, and exponent evaluation.

mod crs;

pub use crs::{small_batch_sizes, Crs};
