// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;

/// Raises a node to a constant real power.
///
/// The exponent is a plain `f64`: differentiating with respect to the
/// exponent is not supported, so a node can never be passed here.
///
/// # Errors
/// Returns `ScalarGradError::InvalidExponent` if `exponent` is NaN or infinite.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidExponent { exponent });
    }
    Ok(pow_unchecked(base, exponent))
}

/// `pow_op` for exponents known to be finite.
pub(crate) fn pow_unchecked(base: &Value, exponent: f64) -> Value {
    let data = base.data().powf(exponent);
    Value::from_op(
        data,
        BackwardOp::Pow {
            base: base.clone(),
            exponent,
        },
    )
}

impl Value {
    /// `self ** exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
