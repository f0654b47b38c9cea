//! Password generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::charset::{self, PasswordSpec};
use crate::types::{with_metadata, ComputationOutput};
use crate::PageToolsResult;

/// Generated password plus the pool it was drawn from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordOutput {
    pub password: String,
    pub length: usize,
    pub pool_size: usize,
    /// `length * log2(pool_size)`, the entropy of a uniform draw.
    pub entropy_bits: f64,
}

/// Draw a password using the thread-local RNG.
///
/// Not cryptographically hardened; see the module docs.
pub fn generate(spec: &PasswordSpec) -> String {
    generate_with_rng(spec, &mut rand::thread_rng())
}

/// Draw `spec.length` characters independently and uniformly from the pool,
/// with replacement.
pub fn generate_with_rng<R: Rng>(spec: &PasswordSpec, rng: &mut R) -> String {
    let length = spec.effective_length();
    if length == 0 {
        return String::new();
    }

    let pool = charset::build(spec);
    let password: String = (0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    tracing::debug!(length, pool_size = pool.len(), "generated password");
    password
}

/// Generate a password wrapped in the standard output envelope.
pub fn generate_password<R: Rng>(
    spec: &PasswordSpec,
    rng: &mut R,
) -> PageToolsResult<ComputationOutput<PasswordOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    if spec.length <= 0 {
        warnings.push(format!(
            "Length {} is not positive; password is empty",
            spec.length
        ));
    } else if spec.length as u64 > charset::MAX_LENGTH as u64 {
        warnings.push(format!(
            "Length {} exceeds the maximum of {}; password truncated",
            spec.length,
            charset::MAX_LENGTH
        ));
    }

    let password = generate_with_rng(spec, rng);
    let length = password.chars().count();
    let pool_size = charset::size(spec);
    let entropy_bits = length as f64 * (pool_size as f64).log2();

    if length > 0 && entropy_bits < 60.0 {
        warnings.push(format!(
            "Estimated entropy {:.1} bits is low; consider a longer password",
            entropy_bits
        ));
    }

    let output = PasswordOutput {
        password,
        length,
        pool_size,
        entropy_bits,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Uniform sampling with replacement (non-cryptographic PRNG)",
        spec,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_matches_request() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [1, 8, 16, 64] {
            let pw = generate_with_rng(&PasswordSpec::new(len, true, true), &mut rng);
            assert_eq!(pw.chars().count(), len as usize);
        }
    }

    #[test]
    fn test_zero_and_negative_length_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_with_rng(&PasswordSpec::new(0, true, true), &mut rng).is_empty());
        assert!(generate_with_rng(&PasswordSpec::new(-5, false, false), &mut rng).is_empty());
    }

    #[test]
    fn test_chars_drawn_from_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let spec = PasswordSpec::new(500, false, true);
        let pool = charset::build(&spec);
        let pw = generate_with_rng(&spec, &mut rng);
        assert!(pw.chars().all(|c| pool.contains(&c)));
        assert!(!pw.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let spec = PasswordSpec::new(24, true, false);
        let a = generate_with_rng(&spec, &mut StdRng::seed_from_u64(42));
        let b = generate_with_rng(&spec, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_huge_length_truncated_to_max() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = generate_password(&PasswordSpec::new(i64::MAX, true, false), &mut rng).unwrap();
        assert_eq!(out.result.length, charset::MAX_LENGTH);
        assert_eq!(out.result.password.len(), charset::MAX_LENGTH);
        assert!(out.warnings.iter().any(|w| w.contains("truncated")));
    }

    #[test]
    fn test_envelope_reports_entropy() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = generate_password(&PasswordSpec::new(12, true, true), &mut rng).unwrap();
        let r = &out.result;
        assert_eq!(r.length, 12);
        assert_eq!(r.pool_size, 78);
        let expected = 12.0 * 78f64.log2();
        assert!((r.entropy_bits - expected).abs() < 1e-9);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_envelope_warns_on_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = generate_password(&PasswordSpec::new(0, false, false), &mut rng).unwrap();
        assert_eq!(out.result.password, "");
        assert_eq!(out.result.entropy_bits, 0.0);
        assert_eq!(out.warnings.len(), 1);
    }
}
