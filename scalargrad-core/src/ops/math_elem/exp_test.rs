use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::{check_value_near, random_inputs};
use approx::assert_relative_eq;

#[test]
fn test_exp_forward_backward() {
    let a = Value::new(1.0);
    let b = exp_op(&a);
    b.backward();
    check_value_near(&b, std::f64::consts::E, 1e-12);
    assert_relative_eq!(a.grad(), std::f64::consts::E);
    assert_eq!(b.op_tag(), "exp");
}

#[test]
fn test_exp_overflow_propagates() {
    let a = Value::new(1000.0);
    let b = a.exp();
    assert!(b.data().is_infinite());
    b.backward();
    assert!(a.grad().is_infinite());
}

#[test]
fn test_exp_composed_with_mul() {
    // d/dx e^(2x) = 2 e^(2x)
    let x = Value::new(0.3);
    let y = (&x * 2.0).exp();
    y.backward();
    assert_relative_eq!(x.grad(), 2.0 * (0.6_f64).exp(), epsilon = 1e-12);
}

#[test]
fn test_exp_grad_check() -> Result<(), GradCheckError> {
    for inputs in random_inputs(71, 10, 1, -3.0, 3.0) {
        check_grad(|x| Ok(exp_op(&x[0])), &inputs, 1e-6, 1e-4)?;
    }
    Ok(())
}
