// scalargrad-core/src/value/accessors.rs

use crate::value::Value;

impl Value {
    /// Returns the scalar held by this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the scalar held by this node.
    ///
    /// Meant for parameter leaves during an optimizer step. Nodes already
    /// computed from this one keep their old value; rebuild the graph with a
    /// new forward pass.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the gradient accumulated by backward sweeps so far.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Adds `grad` into this node's accumulated gradient.
    pub(crate) fn acc_grad(&self, grad: f64) {
        self.write_data().grad += grad;
    }

    /// Resets the accumulated gradient to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: &str) {
        self.write_data().label = Some(label.to_string());
    }

    /// Sets the label and returns the same node, for use in expressions.
    pub fn with_label(self, label: &str) -> Self {
        self.set_label(label);
        self
    }

    /// True when the node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Short tag of the producing operation: `""` for leaves, otherwise
    /// `"+"`, `"*"`, `"**k"`, `"exp"` or `"tanh"`.
    pub fn op_tag(&self) -> String {
        match self.read_data().grad_fn.as_ref() {
            Some(op) => op.to_string(),
            None => String::new(),
        }
    }

    /// Returns handles to the operands this node was computed from, in
    /// operation order.
    pub fn operands(&self) -> Vec<Value> {
        match self.read_data().grad_fn.as_ref() {
            Some(op) => op.inputs().into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }
}
