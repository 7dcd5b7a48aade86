use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::{check_value_near, random_inputs};
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = mul_op(&a, &b);
    check_value_near(&c, -6.0, 1e-12);
    assert_eq!(c.op_tag(), "*");
}

#[test]
fn test_mul_backward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = mul_op(&a, &b);
    c.backward();
    assert_relative_eq!(a.grad(), -3.0);
    assert_relative_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_square_through_reuse() {
    // a * a has derivative 2a
    let a = Value::new(-1.5);
    let c = mul_op(&a, &a);
    c.backward();
    assert_relative_eq!(c.data(), 2.25);
    assert_relative_eq!(a.grad(), -3.0);
}

#[test]
fn test_mul_scalar_on_either_side() {
    let a = Value::new(4.0);
    let left = 2.0 * &a;
    let right = &a * 2.0;
    left.backward();
    right.backward();
    assert_eq!(left.data(), 8.0);
    assert_eq!(right.data(), 8.0);
    assert_relative_eq!(a.grad(), 4.0);
}

#[test]
fn test_mul_grad_check() -> Result<(), GradCheckError> {
    for inputs in random_inputs(21, 10, 2, -5.0, 5.0) {
        check_grad(|x| Ok(mul_op(&x[0], &x[1])), &inputs, 1e-6, 1e-4)?;
    }
    Ok(())
}
