// scalargrad-core/src/value_data.rs
use std::rc::Rc;

use crate::autograd::BackwardOp;

/// Internal storage for a graph node.
///
/// Wrapped in `Rc<RefCell<ValueData>>` by [`Value`](crate::Value) so that a
/// node can be shared by every consumer that reads it while its gradient is
/// still mutable during a backward sweep.
#[derive(Debug)]
pub struct ValueData {
    /// Result of the producing operation, or the literal for a leaf.
    pub(crate) data: f64,
    /// Accumulated `d(root)/d(self)`. Starts at zero.
    pub(crate) grad: f64,
    /// The operation that produced this node together with its operands.
    /// Leaves have `grad_fn = None`.
    pub(crate) grad_fn: Option<BackwardOp>,
    /// Diagnostic name, only used when tracing or printing a graph.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates leaf storage holding `data` with a zero gradient.
    pub fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: None,
            label: None,
        }
    }

    /// Creates storage for a node produced by `grad_fn`.
    pub(crate) fn from_op(data: f64, grad_fn: BackwardOp) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: Some(grad_fn),
            label: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

// Dropping the last handle on a long operand chain would otherwise recurse
// once per node. Operands we own exclusively are unlinked onto a work stack.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending: Vec<BackwardOp> = self.grad_fn.take().into_iter().collect();
        while let Some(op) = pending.pop() {
            for input in op.into_inputs() {
                if let Ok(cell) = Rc::try_unwrap(input.data) {
                    let mut inner = cell.into_inner();
                    if let Some(next) = inner.grad_fn.take() {
                        pending.push(next);
                    }
                }
            }
        }
    }
}
