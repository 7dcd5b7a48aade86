use thiserror::Error;

use crate::error::ScalarGradError;
use crate::value::Value;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Invalid gradient check parameters: {0}")]
    InvalidParameters(String),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against centered finite differences.
///
/// `func` builds a scalar graph from one leaf per entry of `inputs`. The
/// analytical gradient comes from a single backward sweep on fresh leaves;
/// the numerical one is `(f(x + eps) - f(x - eps)) / (2 * eps)`, evaluated on
/// freshly built graphs so the sweep never sees perturbed values.
///
/// Gradients match when they are within `tolerance` either absolutely or
/// relative to the larger magnitude.
///
/// # Errors
/// Returns the first failing input as `GradCheckError::GradientMismatch`,
/// or the forward error if `func` fails.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    if epsilon.is_nan() || epsilon <= 0.0 || tolerance.is_nan() || tolerance <= 0.0 {
        return Err(GradCheckError::InvalidParameters(format!(
            "epsilon ({}) and tolerance ({}) must be positive",
            epsilon, tolerance
        )));
    }

    // --- Analytical gradients ---
    let leaves = Value::from_slice(inputs);
    let output = func(&leaves)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- Numerical gradients ---
    let eval_at = |index: usize, delta: f64| -> Result<f64, GradCheckError> {
        let mut perturbed = inputs.to_vec();
        perturbed[index] += delta;
        Ok(func(&Value::from_slice(&perturbed))?.data())
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = eval_at(i, epsilon)?;
        let loss_minus = eval_at(i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    log::debug!("check_grad: {} input(s) within tolerance {}", inputs.len(), tolerance);
    Ok(())
}
