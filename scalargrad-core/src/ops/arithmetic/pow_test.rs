use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::{check_value_near, random_inputs};
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), ScalarGradError> {
    let a = Value::new(3.0);
    let b = pow_op(&a, 2.0)?;
    check_value_near(&b, 9.0, 1e-12);
    assert_eq!(b.op_tag(), "**2");
    assert_eq!(b.operands(), vec![a]);
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<(), ScalarGradError> {
    let a = Value::new(3.0);
    let b = a.pow(3.0)?;
    b.backward();
    assert_relative_eq!(b.data(), 27.0);
    assert_relative_eq!(a.grad(), 27.0); // 3 * 3^2
    Ok(())
}

#[test]
fn test_pow_negative_and_fractional_exponents() -> Result<(), ScalarGradError> {
    let a = Value::new(4.0);
    let inv = a.pow(-1.0)?;
    let root = a.pow(0.5)?;
    inv.backward();
    assert_relative_eq!(inv.data(), 0.25);
    assert_relative_eq!(a.grad(), -1.0 / 16.0);

    a.zero_grad();
    root.backward();
    assert_relative_eq!(root.data(), 2.0);
    assert_relative_eq!(a.grad(), 0.25);
    Ok(())
}

#[test]
fn test_pow_zero_exponent() -> Result<(), ScalarGradError> {
    let a = Value::new(5.0);
    let b = a.pow(0.0)?;
    b.backward();
    assert_eq!(b.data(), 1.0);
    assert_eq!(a.grad(), 0.0);
    Ok(())
}

#[test]
fn test_pow_rejects_non_finite_exponent() {
    let a = Value::new(2.0);
    assert!(matches!(
        pow_op(&a, f64::NAN),
        Err(ScalarGradError::InvalidExponent { .. })
    ));
    assert_eq!(
        pow_op(&a, f64::INFINITY).unwrap_err(),
        ScalarGradError::InvalidExponent {
            exponent: f64::INFINITY
        }
    );
}

#[test]
fn test_pow_grad_check() -> Result<(), GradCheckError> {
    // Positive bases so that fractional exponents stay real.
    for inputs in random_inputs(51, 10, 1, 0.5, 3.0) {
        for exponent in [2.0, 3.0, -1.0, 0.5, -2.5] {
            check_grad(|x| pow_op(&x[0], exponent), &inputs, 1e-6, 1e-4)?;
        }
    }
    Ok(())
}
