// scalargrad-core/src/value/mod.rs
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use num_traits::AsPrimitive;

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::value_data::ValueData;

pub mod accessors;
pub mod autograd;
pub mod traits;

/// A scalar node in a dynamically built computation graph.
///
/// `Value` is a cheap handle: cloning it clones the `Rc`, so every clone
/// refers to the same node. Two values compare equal only when they are the
/// same node, whatever their data.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(data))),
        }
    }

    /// Promotes any primitive number to a leaf node.
    pub fn scalar<T: AsPrimitive<f64>>(data: T) -> Self {
        Value::new(data.as_())
    }

    /// Wraps each element of `data` in its own leaf node.
    pub fn from_slice(data: &[f64]) -> Vec<Value> {
        data.iter().map(|&x| Value::new(x)).collect()
    }

    /// Creates the output node of an operation.
    pub(crate) fn from_op(data: f64, grad_fn: BackwardOp) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(data, grad_fn))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Identity of this node, stable for as long as any handle keeps it alive.
    pub fn node_id(&self) -> NodeId {
        NodeId::of(&self.data)
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}
