use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::value::Value;

/// Checks that a node holds `expected` within `tolerance`.
/// Panics with the node's debug representation otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let data = actual.data();
    let diff = (data - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Draws `count` input vectors of length `arity` uniformly from `[low, high)`
/// with a fixed seed, for gradient checks over "random" inputs that stay
/// reproducible.
pub fn random_inputs(seed: u64, count: usize, arity: usize, low: f64, high: f64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..arity).map(|_| rng.gen_range(low..high)).collect())
        .collect()
}
