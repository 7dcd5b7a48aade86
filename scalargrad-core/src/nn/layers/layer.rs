use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;

/// `out_features` independent neurons reading the same input vector.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    /// Creates a layer of freshly initialized neurons.
    ///
    /// # Arguments
    /// * `in_features` - Size of each input vector.
    /// * `out_features` - Number of neurons, i.e. size of the output.
    /// * `rng` - Source for the U[-1, 1] initialization.
    pub fn new<R: Rng + ?Sized>(in_features: usize, out_features: usize, rng: &mut R) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, rng))
            .collect();
        Layer {
            neurons,
            in_features,
        }
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `InvalidArchitecture` when `neurons` is empty, `DimensionMismatch`
    /// when the neurons do not share one input width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let in_features = match neurons.first() {
            Some(first) => first.in_features(),
            None => {
                return Err(ScalarGradError::InvalidArchitecture(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.in_features() != in_features) {
            return Err(ScalarGradError::DimensionMismatch {
                expected: in_features,
                actual: odd.in_features(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer {
            neurons,
            in_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if input.len() != self.in_features {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.in_features,
                actual: input.len(),
                operation: "Layer forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }
}
