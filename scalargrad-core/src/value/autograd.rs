// scalargrad-core/src/value/autograd.rs

use crate::autograd::graph::{self, BackwardOptions};
use crate::error::ScalarGradError;
use crate::value::Value;

impl Value {
    /// Backpropagates from this node to every node it was computed from.
    ///
    /// Seeds this node with a gradient of `1.0` and adds each ancestor's
    /// contribution into its accumulated gradient. Nothing is reset first:
    /// calling this twice without zeroing doubles every gradient.
    pub fn backward(&self) {
        if self.is_leaf() {
            log::debug!("backward() called on a leaf value; only its own gradient is seeded.");
        }
        graph::backward_unchecked(self);
    }

    /// Same as [`backward`](Value::backward), with the stale-gradient policy
    /// taken from `options`.
    ///
    /// # Errors
    /// Returns `ScalarGradError::StaleGradient` when the policy is `Error` and
    /// any reachable node holds a non-zero gradient before the sweep.
    pub fn backward_with(&self, options: &BackwardOptions) -> Result<(), ScalarGradError> {
        graph::backward(self, options)
    }
}
