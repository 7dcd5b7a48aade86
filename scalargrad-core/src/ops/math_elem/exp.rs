// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes \\( e^{a} \\).
///
/// The derivative is the output itself, so the rule reuses the stored result
/// instead of recomputing the exponential. Large inputs overflow to `inf`
/// as `f64::exp` does.
pub fn exp_op(a: &Value) -> Value {
    let data = a.data().exp();
    Value::from_op(data, BackwardOp::Exp { input: a.clone() })
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
