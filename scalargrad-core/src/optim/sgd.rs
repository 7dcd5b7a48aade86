use std::collections::HashMap;

use crate::autograd::NodeId;
use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Stochastic gradient descent with optional momentum and weight decay.
///
/// For each parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// buf = momentum * buf + d      (only when momentum != 0)
/// p = p - lr * (buf or d)
/// ```
///
/// With `momentum = 0` and `weight_decay = 0` this is the plain
/// `p.data -= lr * p.grad` update.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    momentum_buffers: HashMap<NodeId, f64>,
}

impl SgdOptimizer {
    /// Creates an optimizer over `params`. Parameters are shared handles, so
    /// pass clones of the module's parameters
    /// (`model.parameters().into_iter().cloned()`).
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64, momentum: f64, weight_decay: f64) -> Self {
        let params: Vec<Parameter> = params.into_iter().collect();
        log::debug!(
            "SgdOptimizer over {} parameter(s): lr={}, momentum={}, weight_decay={}",
            params.len(),
            lr,
            momentum,
            weight_decay
        );
        SgdOptimizer {
            params,
            lr,
            momentum,
            weight_decay,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        if let Some((index, grad)) = self
            .params
            .iter()
            .map(|p| p.grad())
            .enumerate()
            .find(|(_, grad)| !grad.is_finite())
        {
            return Err(ScalarGradError::NonFiniteGradient { index, grad });
        }

        for param in &self.params {
            let value = param.data();
            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * value;
            }
            if self.momentum != 0.0 {
                let buffer = self.momentum_buffers.entry(param.node_id()).or_insert(0.0);
                *buffer = self.momentum * *buffer + d_p;
                d_p = *buffer;
            }
            param.set_data(value - self.lr * d_p);
        }
        log::trace!("SgdOptimizer step over {} parameter(s)", self.params.len());
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
