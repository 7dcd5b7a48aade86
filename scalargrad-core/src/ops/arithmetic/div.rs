// scalargrad-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::mul_op;
use crate::ops::arithmetic::pow::pow_unchecked;
use crate::value::Value;

/// Computes `a / b` as `a * b**-1`.
///
/// Division by a zero-valued node follows IEEE-754 (infinite or NaN data);
/// it is not reported as an error.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_unchecked(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
