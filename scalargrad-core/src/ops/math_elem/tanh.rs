// scalargrad-core/src/ops/math_elem/tanh.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Hyperbolic tangent, \\( \frac{e^{2a} - 1}{e^{2a} + 1} \\).
///
/// Evaluated with `f64::tanh`, which saturates to `±1` where the quotient
/// form would produce `inf / inf`. The rule sends \\( (1 - t^2) g \\) back,
/// with `t` the stored output.
pub fn tanh_op(a: &Value) -> Value {
    let data = a.data().tanh();
    Value::from_op(data, BackwardOp::Tanh { input: a.clone() })
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
