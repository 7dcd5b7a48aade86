use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::{check_value_near, random_inputs};

#[test]
fn test_sub_forward_backward() {
    let a = Value::new(5.0);
    let b = Value::new(3.5);
    let c = sub_op(&a, &b);
    c.backward();
    check_value_near(&c, 1.5, 1e-12);
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero_with_zero_grad() {
    let a = Value::new(4.2);
    let c = &a - &a;
    c.backward();
    assert_eq!(c.data(), 0.0);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_sub_scalar_on_either_side() {
    let a = Value::new(1.0);
    assert_eq!((&a - 3.0).data(), -2.0);
    assert_eq!((3.0 - &a).data(), 2.0);
}

#[test]
fn test_sub_grad_check() -> Result<(), GradCheckError> {
    for inputs in random_inputs(41, 10, 2, -5.0, 5.0) {
        check_grad(|x| Ok(sub_op(&x[0], &x[1])), &inputs, 1e-6, 1e-4)?;
    }
    Ok(())
}
