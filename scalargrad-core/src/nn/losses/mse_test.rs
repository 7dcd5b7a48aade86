use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_reduction_from_str() {
    assert_eq!("mean".parse::<Reduction>(), Ok(Reduction::Mean));
    assert_eq!("SUM".parse::<Reduction>(), Ok(Reduction::Sum));
    assert!(matches!(
        "none".parse::<Reduction>(),
        Err(ScalarGradError::UnsupportedOperation(_))
    ));
    assert!(MSELoss::from_reduction_str("max").is_err());
}

#[test]
fn test_mse_loss_forward_basic() -> Result<(), ScalarGradError> {
    let predictions = Value::from_slice(&[1.0, 2.0]);
    let targets = [1.5, 1.0];

    let mean = MSELoss::new(Reduction::Mean).calculate(&predictions, &targets)?;
    assert_relative_eq!(mean.data(), 0.625, epsilon = 1e-12);

    let sum = MSELoss::new(Reduction::Sum).calculate(&predictions, &targets)?;
    assert_relative_eq!(sum.data(), 1.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_mismatched_lengths() {
    let predictions = Value::from_slice(&[1.0, 2.0]);
    let result = MSELoss::default().calculate(&predictions, &[1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(ScalarGradError::DimensionMismatch { expected: 3, actual: 2, .. })
    ));
}

#[test]
fn test_mse_loss_empty_batch() {
    let result = MSELoss::default().calculate(&[], &[]);
    assert!(matches!(result, Err(ScalarGradError::InvalidArgument(_))));
}

#[test]
fn test_mse_loss_backward() -> Result<(), ScalarGradError> {
    let predictions = Value::from_slice(&[1.0, 2.0]);
    let loss = MSELoss::new(Reduction::Mean).calculate(&predictions, &[1.5, 1.0])?;
    loss.backward();
    // d/dp mean((p - t)^2) = 2 (p - t) / n
    assert_relative_eq!(predictions[0].grad(), -0.5, epsilon = 1e-12);
    assert_relative_eq!(predictions[1].grad(), 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sum_squared_error_grad_check() {
    let targets = [0.3, -1.0, 2.0];
    let func = |x: &[Value]| sum_squared_error(x, &targets);
    assert_eq!(check_grad(func, &[1.0, 0.5, -0.25], 1e-6, 1e-4), Ok(()));
}
