// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Adds two nodes.
///
/// The result's rule passes the upstream gradient unchanged to both operands:
/// \\( \frac{\partial (a + b)}{\partial a} = \frac{\partial (a + b)}{\partial b} = 1 \\).
/// `a` and `b` may be the same node, in which case it receives the gradient twice.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_op(
        data,
        BackwardOp::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
