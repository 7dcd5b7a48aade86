use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ScalarGradError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;

/// Multi-layer perceptron: layers applied in sequence, each layer's output
/// width equal to the next layer's input width.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP taking `in_features` inputs, with one layer per entry
    /// of `layer_sizes` (`Mlp::new(3, &[4, 4, 1], rng)` has two hidden layers
    /// of 4 and a single output).
    ///
    /// # Errors
    /// `ScalarGradError::InvalidArchitecture` if `in_features` is zero,
    /// `layer_sizes` is empty, or any layer size is zero.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if in_features == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one input".to_string(),
            ));
        }
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if let Some(i) = layer_sizes.iter().position(|&n| n == 0) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "layer {} has zero neurons",
                i
            )));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut width = in_features;
        for &out in layer_sizes {
            layers.push(Layer::new(width, out, rng));
            width = out;
        }
        let mlp = Mlp { layers };
        log::debug!(
            "Mlp created: {} -> {:?} ({} parameters)",
            in_features,
            layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Same as [`Mlp::new`] with a `StdRng` seeded from `seed`.
    pub fn with_seed(in_features: usize, layer_sizes: &[usize], seed: u64) -> Result<Self, ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Mlp::new(in_features, layer_sizes, &mut rng)
    }

    /// Builds an MLP from existing layers.
    ///
    /// # Errors
    /// `InvalidArchitecture` for an empty list, `DimensionMismatch` when a
    /// layer's input width differs from the previous layer's output width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[0].out_features() != pair[1].in_features() {
                return Err(ScalarGradError::DimensionMismatch {
                    expected: pair[0].out_features(),
                    actual: pair[1].in_features(),
                    operation: "Mlp::from_layers".to_string(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn in_features(&self) -> usize {
        self.layers.first().map_or(0, Layer::in_features)
    }

    pub fn out_features(&self) -> usize {
        self.layers.last().map_or(0, Layer::out_features)
    }

    /// Forward pass for a model with a single output.
    ///
    /// # Errors
    /// `DimensionMismatch` if the model has more than one output, or if the
    /// input width is wrong.
    pub fn forward_scalar(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        let mut outputs = self.forward(input)?;
        if outputs.len() != 1 {
            return Err(ScalarGradError::DimensionMismatch {
                expected: 1,
                actual: outputs.len(),
                operation: "Mlp::forward_scalar".to_string(),
            });
        }
        Ok(outputs.remove(0))
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
