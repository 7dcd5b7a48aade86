use std::fmt;

use crate::value::Value;

/// Local derivative rule attached to every non-leaf node.
///
/// Each variant stores the operands of the forward operation (shared
/// handles, so a node stays alive while any consumer does) plus whatever
/// constant the rule needs. Subtraction, negation and division are built
/// from these primitives and therefore have no variant of their own.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    Add { lhs: Value, rhs: Value },
    Mul { lhs: Value, rhs: Value },
    Pow { base: Value, exponent: f64 },
    Exp { input: Value },
    Tanh { input: Value },
}

impl BackwardOp {
    /// Operands of the forward operation, in the order used by
    /// [`backward`](BackwardOp::backward).
    pub fn inputs(&self) -> Vec<&Value> {
        match self {
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Exp { input } | BackwardOp::Tanh { input } => vec![input],
        }
    }

    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Exp { input } | BackwardOp::Tanh { input } => vec![input],
        }
    }

    /// Applies the chain rule for this operation.
    ///
    /// Given `grad_output = d(root)/d(output)` and the output's own value,
    /// returns `d(root)/d(input_i)` contributed through this node, one entry
    /// per element of [`inputs`](BackwardOp::inputs). The caller adds them
    /// into the operands' gradients.
    pub fn backward(&self, grad_output: f64, output: f64) -> Vec<f64> {
        match self {
            BackwardOp::Add { .. } => vec![grad_output, grad_output],
            BackwardOp::Mul { lhs, rhs } => {
                vec![rhs.data() * grad_output, lhs.data() * grad_output]
            }
            BackwardOp::Pow { base, exponent } => {
                vec![exponent * base.data().powf(exponent - 1.0) * grad_output]
            }
            // d/dx e^x = e^x, which is the output already computed
            BackwardOp::Exp { .. } => vec![output * grad_output],
            BackwardOp::Tanh { .. } => vec![(1.0 - output * output) * grad_output],
        }
    }
}

impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Add { .. } => write!(f, "+"),
            BackwardOp::Mul { .. } => write!(f, "*"),
            BackwardOp::Pow { exponent, .. } => write!(f, "**{}", exponent),
            BackwardOp::Exp { .. } => write!(f, "exp"),
            BackwardOp::Tanh { .. } => write!(f, "tanh"),
        }
    }
}
