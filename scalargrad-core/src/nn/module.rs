use std::fmt::Debug;

use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all network components (`Neuron`, `Layer`, `Mlp`).
pub trait Module: Debug {
    /// Performs a forward pass, building a fresh graph on every call.
    ///
    /// # Errors
    /// `ScalarGradError::DimensionMismatch` if `input` does not have the
    /// module's input width.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// All learnable parameters, in a fixed order that an optimizer can rely
    /// on between steps.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Same parameters and order as [`parameters`](Module::parameters), with
    /// dotted hierarchical names (`"layers.0.neurons.1.bias"`).
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Resets every parameter's gradient to zero. Must be called before each
    /// backward sweep that reuses the parameters.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
