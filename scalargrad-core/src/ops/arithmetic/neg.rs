// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negates a node, as a multiplication by a `-1.0` leaf.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
