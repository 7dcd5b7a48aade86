// scalargrad-core/src/nn/mod.rs
// Neural network building blocks made only of `Value` operations.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

// Re-export common items
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{sum_squared_error, MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
