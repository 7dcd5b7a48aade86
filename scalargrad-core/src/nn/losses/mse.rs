use std::str::FromStr;

use crate::error::ScalarGradError;
use crate::ops::arithmetic::pow::pow_unchecked;
use crate::ops::arithmetic::sub_op;
use crate::value::Value;

/// How the per-sample squared errors are combined: `'mean' | 'sum'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean squared error between predicted nodes and constant targets.
///
/// The loss is an ordinary `Value` graph (`sub`, `pow(2)`, `add`, and a
/// division for `Mean`), so no dedicated backward rule exists: calling
/// `backward` on the result reaches every prediction and, through them,
/// every parameter.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    /// Parses `"mean"` or `"sum"` (case-insensitive).
    pub fn from_reduction_str(reduction: &str) -> Result<Self, ScalarGradError> {
        Ok(MSELoss::new(reduction.parse()?))
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// # Errors
    /// `DimensionMismatch` when the batch sizes differ, `InvalidArgument` for
    /// an empty batch.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MSELoss calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::InvalidArgument(
                "MSELoss needs at least one prediction".to_string(),
            ));
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(prediction, &target)| {
                let diff = sub_op(prediction, &Value::new(target));
                pow_unchecked(&diff, 2.0)
            })
            .sum();

        let loss = match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => &total / predictions.len() as f64,
        };
        log::trace!("MSELoss({:?}) over {} sample(s): {}", self.reduction, targets.len(), loss.data());
        Ok(loss)
    }
}

/// `Σ (prediction - target)²`, the loss used to train the small MLP demo.
pub fn sum_squared_error(predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
    MSELoss::new(Reduction::Sum).calculate(predictions, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
