//! Trains a 3-input MLP with hidden layers of 4 and 4 neurons on a
//! four-sample toy dataset and prints the loss as it goes.
//!
//! Run with `RUST_LOG=debug cargo run --example train_mlp` to see the
//! engine's own log output.

use scalargrad_core::nn::sum_squared_error;
use scalargrad_core::{Mlp, Module, Optimizer, ScalarGradError, SgdOptimizer, Value};

const INPUTS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];
const TARGETS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let model = Mlp::with_seed(3, &[4, 4, 1], 42)?;
    println!("model: {} parameters", model.num_parameters());

    let mut optimizer = SgdOptimizer::new(model.parameters().into_iter().cloned(), 0.05, 0.0, 0.0);

    for step in 0..1000 {
        let predictions = INPUTS
            .iter()
            .map(|row| model.forward_scalar(&Value::from_slice(row)))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = sum_squared_error(&predictions, &TARGETS)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if step % 100 == 0 || step == 999 {
            println!("step {:4}  loss {:.6}", step, loss.data());
        }
    }

    for (row, target) in INPUTS.iter().zip(TARGETS) {
        let prediction = model.forward_scalar(&Value::from_slice(row))?;
        println!("{:?} -> {:+.4} (target {:+})", row, prediction.data(), target);
    }
    Ok(())
}
