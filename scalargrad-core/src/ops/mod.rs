//! # Scalar Operations Module (`ops`)
//!
//! Every operation here takes one or two [`Value`](crate::Value) nodes, computes
//! its result eagerly and returns a new node whose
//! [`BackwardOp`](crate::autograd::BackwardOp) records the operands.
//!
//! ## Structure:
//!
//! - **`_op` functions:** one per operation (`add_op`, `mul_op`, `pow_op`, ...).
//!   The `std::ops` overloads and the `Value` methods (`exp`, `tanh`, `pow`)
//!   are thin wrappers around them.
//! - **Primitives vs. compositions:** `add`, `mul`, `pow`, `exp` and `tanh`
//!   attach their own derivative rule. `neg`, `sub` and `div` are built from
//!   the primitives, so their nodes show up in a trace as `*`, `+` and `**-1`.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp, tanh.

pub mod arithmetic;
pub mod math_elem;

pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, tanh_op};
