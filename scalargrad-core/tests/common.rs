use scalargrad_core::{Mlp, Module, Value};

/// Four three-feature samples with targets of ±1.
#[allow(dead_code)]
pub(crate) const INPUTS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];

#[allow(dead_code)]
pub(crate) const TARGETS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs the model over every sample of the dataset.
#[allow(dead_code)]
pub(crate) fn predict_all(model: &Mlp) -> Vec<Value> {
    INPUTS
        .iter()
        .map(|row| {
            model
                .forward_scalar(&Value::from_slice(row))
                .expect("model input width must be 3")
        })
        .collect()
}

#[allow(dead_code)]
pub(crate) fn parameter_snapshot(model: &Mlp) -> Vec<f64> {
    model.parameters().iter().map(|p| p.data()).collect()
}
