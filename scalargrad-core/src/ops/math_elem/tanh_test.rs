use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::random_inputs;
use approx::assert_relative_eq;

#[test]
fn test_tanh_matches_exponential_form() {
    for x in [-2.0_f64, -0.5, 0.0, 0.25, 1.7] {
        let t = tanh_op(&Value::new(x)).data();
        let e2x = (2.0 * x).exp();
        assert_relative_eq!(t, (e2x - 1.0) / (e2x + 1.0), epsilon = 1e-12);
    }
}

#[test]
fn test_tanh_backward() {
    let a = Value::new(0.5);
    let t = a.tanh();
    t.backward();
    let expected = 1.0 - 0.5_f64.tanh().powi(2);
    assert_relative_eq!(a.grad(), expected, epsilon = 1e-12);
    assert_eq!(t.op_tag(), "tanh");
}

#[test]
fn test_tanh_saturates_without_nan() {
    let a = Value::new(500.0);
    let t = a.tanh();
    t.backward();
    assert_eq!(t.data(), 1.0);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_tanh_grad_check() -> Result<(), GradCheckError> {
    for inputs in random_inputs(81, 10, 1, -3.0, 3.0) {
        check_grad(|x| Ok(tanh_op(&x[0])), &inputs, 1e-6, 1e-4)?;
    }
    Ok(())
}
