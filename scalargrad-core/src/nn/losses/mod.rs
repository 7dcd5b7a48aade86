pub mod mse;

pub use mse::{sum_squared_error, MSELoss, Reduction};
