//! Optimizers that update [`Parameter`](crate::nn::Parameter) values from the
//! gradients accumulated by a backward sweep.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
