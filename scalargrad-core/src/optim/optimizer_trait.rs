use crate::error::ScalarGradError;

/// Common interface for optimizers.
///
/// A training iteration is `zero_grad`, forward, `backward` on the loss,
/// then `step`.
pub trait Optimizer {
    /// Updates every managed parameter from its current gradient.
    ///
    /// # Errors
    /// Implementations refuse to step on non-finite gradients and leave all
    /// parameters untouched in that case.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all managed parameters.
    fn zero_grad(&mut self);
}
