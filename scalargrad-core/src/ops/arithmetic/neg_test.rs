use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::random_inputs;

#[test]
fn test_neg_forward_backward() {
    let a = Value::new(2.5);
    let b = neg_op(&a);
    b.backward();
    assert_eq!(b.data(), -2.5);
    assert_eq!(a.grad(), -1.0);
    // Built from a multiplication
    assert_eq!(b.op_tag(), "*");
    assert_eq!(b.operands()[1].data(), -1.0);
}

#[test]
fn test_neg_operator() {
    let a = Value::new(-7.0);
    assert_eq!((-&a).data(), 7.0);
    assert_eq!((-a).data(), 7.0);
}

#[test]
fn test_neg_grad_check() -> Result<(), GradCheckError> {
    for inputs in random_inputs(31, 10, 1, -5.0, 5.0) {
        check_grad(|x| Ok(neg_op(&x[0])), &inputs, 1e-6, 1e-4)?;
    }
    Ok(())
}
