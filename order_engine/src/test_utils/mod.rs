//! Helpers for tests in this crate and in downstream crates (enable the `test_utils` feature).
mod fixed_normalizer;

#[cfg(feature = "sqlite")]
pub mod prepare_env;

pub use fixed_normalizer::FixedNormalizer;
