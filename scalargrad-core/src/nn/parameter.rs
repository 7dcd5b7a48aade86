use std::fmt;
use std::ops::Deref;

use crate::value::Value;

/// A leaf `Value` marked as learnable by the module that owns it.
///
/// Cloning a parameter clones the handle, so the optimizer and the module
/// update and read the same node.
#[derive(Clone, PartialEq, Eq)]
pub struct Parameter(Value);

impl Parameter {
    /// Wraps a leaf value. Non-leaf values would be overwritten by the
    /// optimizer without affecting anything upstream, so they are rejected
    /// in debug builds.
    pub fn new(value: Value) -> Self {
        debug_assert!(value.is_leaf(), "parameters must be leaf values");
        Parameter(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the Parameter and returns the underlying node.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<f64> for Parameter {
    fn from(data: f64) -> Self {
        Parameter::new(Value::new(data))
    }
}

// Allow calling `Value` methods (`data`, `grad`, `zero_grad`, ...) directly.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}
