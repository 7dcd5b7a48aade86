use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::error::ScalarGradError;
use crate::nn::Parameter;

/// Default range for freshly constructed weights and biases.
pub const DEFAULT_INIT_RANGE: (f64, f64) = (-1.0, 1.0);

/// Draws one value from U[`DEFAULT_INIT_RANGE`].
pub(crate) fn default_uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let (low, high) = DEFAULT_INIT_RANGE;
    Uniform::new_inclusive(low, high).sample(rng)
}

/// Fills every parameter with an independent draw from U[`low`, `high`].
///
/// # Arguments
/// * `params`: The parameters to overwrite, typically `module.parameters()`.
/// * `low`, `high`: Inclusive bounds, both finite with `low <= high`.
/// * `rng`: Source of randomness; pass a seeded RNG for reproducible runs.
///
/// # Errors
/// `ScalarGradError::InvalidArgument` for non-finite or inverted bounds.
pub fn uniform_<R: Rng + ?Sized>(
    params: &[&Parameter],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), ScalarGradError> {
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(ScalarGradError::InvalidArgument(format!(
            "uniform_ needs finite bounds with low <= high, got [{}, {}]",
            low, high
        )));
    }
    let dist = Uniform::new_inclusive(low, high);
    for param in params {
        param.set_data(dist.sample(rng));
    }
    Ok(())
}

/// Fills every parameter with an independent draw from N(`mean`, `std`²).
///
/// # Errors
/// `ScalarGradError::InvalidArgument` if `std` is negative or not finite.
pub fn normal_<R: Rng + ?Sized>(
    params: &[&Parameter],
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<(), ScalarGradError> {
    let dist = Normal::new(mean, std).map_err(|e| {
        ScalarGradError::InvalidArgument(format!("normal_(mean={}, std={}): {}", mean, std, e))
    })?;
    for param in params {
        param.set_data(dist.sample(rng));
    }
    Ok(())
}

/// Sets every parameter to `value`.
pub fn constant_(params: &[&Parameter], value: f64) {
    for param in params {
        param.set_data(value);
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
