use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::{check_value_near, random_inputs};
use approx::assert_relative_eq;

#[test]
fn test_div_forward_backward() {
    let a = Value::new(3.0);
    let b = Value::new(4.0);
    let c = div_op(&a, &b);
    c.backward();
    check_value_near(&c, 0.75, 1e-12);
    assert_relative_eq!(a.grad(), 0.25);
    assert_relative_eq!(b.grad(), -3.0 / 16.0);
}

#[test]
fn test_div_structure() {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let c = &a / &b;
    assert_eq!(c.op_tag(), "*");
    let operands = c.operands();
    assert_eq!(operands[0], a);
    assert_eq!(operands[1].op_tag(), "**-1");
}

#[test]
fn test_div_by_zero_is_not_an_error() {
    let a = Value::new(1.0);
    let c = &a / 0.0;
    assert!(c.data().is_infinite());
}

#[test]
fn test_div_scalar_numerator() {
    let b = Value::new(8.0);
    let c = 2.0 / &b;
    c.backward();
    assert_relative_eq!(c.data(), 0.25);
    assert_relative_eq!(b.grad(), -2.0 / 64.0);
}

#[test]
fn test_div_grad_check() -> Result<(), GradCheckError> {
    for inputs in random_inputs(61, 10, 2, 0.5, 4.0) {
        check_grad(|x| Ok(div_op(&x[0], &x[1])), &inputs, 1e-6, 1e-4)?;
        check_grad(|x| Ok(div_op(&(-&x[0]), &x[1])), &inputs, 1e-6, 1e-4)?;
    }
    Ok(())
}
