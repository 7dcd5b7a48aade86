// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Multiplies two nodes.
///
/// The rule sends `b * g` to `a` and `a * g` to `b`, reading the operand
/// values at sweep time.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_op(
        data,
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
