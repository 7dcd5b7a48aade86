//! # scalargrad-core
//!
//! A reverse-mode automatic differentiation engine over scalar values, plus a
//! small feed-forward network (`Neuron`, `Layer`, `Mlp`) built only from the
//! engine's operations.
//!
//! Every operation on a [`Value`] eagerly computes its result and records how
//! it was produced. Calling [`Value::backward`] on a root walks the recorded
//! graph in reverse topological order and accumulates `d(root)/d(node)` into
//! each node's gradient.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = Value::new(10.0);
//! let d = &a * &b + &c;
//! d.backward();
//!
//! assert_eq!(d.data(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! assert_eq!(c.grad(), 1.0);
//! ```
//!
//! Gradients are never reset by the engine. Callers that reuse leaves across
//! sweeps (parameters in a training loop) must zero them first, see
//! [`nn::Module::zero_grad`] and [`optim::Optimizer::zero_grad`].

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub mod value_data;

pub use error::ScalarGradError;
pub use value::Value;

pub use nn::{Layer, Mlp, Module, Neuron, Parameter};
pub use optim::{Optimizer, SgdOptimizer};
