use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::init::default_uniform;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;

/// A single unit computing `tanh(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `in_features` weights and a bias, each an
    /// independent draw from U[-1, 1].
    pub fn new<R: Rng + ?Sized>(in_features: usize, rng: &mut R) -> Self {
        let weights = (0..in_features)
            .map(|_| Parameter::from(default_uniform(rng)))
            .collect();
        let bias = Parameter::from(default_uniform(rng));
        Neuron { weights, bias }
    }

    /// Creates a neuron with the given weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Parameter::from(w)).collect(),
            bias: Parameter::from(bias),
        }
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Computes the activation for one input vector.
    ///
    /// The pre-activation is accumulated left to right starting from the
    /// bias, `((b + w_0 x_0) + w_1 x_1) + ...`, and a new graph is built on
    /// every call.
    ///
    /// # Errors
    /// `ScalarGradError::DimensionMismatch` if `input.len() != in_features`.
    pub fn activate(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "Neuron forward".to_string(),
            });
        }
        let act = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.value().clone(), |acc, (w, x)| &acc + &(w.value() * x));
        Ok(act.tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(input)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w))
            .chain(std::iter::once(("bias".to_string(), &self.bias)))
            .collect()
    }
}
