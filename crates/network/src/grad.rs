//! Backward pass: chain-rule gradients from one forward evaluation.

use crate::error::NetworkError;
use crate::net::{sigmoid_prime, ForwardPass, Layer, Network};

/// Gradients of the loss with respect to every parameter and
/// pre-activation, one entry per layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BackwardPass {
    /// ∂L/∂z per layer (the error terms), `deltas[l][unit]`
    pub deltas: Vec<Vec<f64>>,
    /// ∂L/∂W per layer, `weight_grads[l][out][in]`
    pub weight_grads: Vec<Vec<Vec<f64>>>,
    /// ∂L/∂b per layer, `bias_grads[l][unit]`
    pub bias_grads: Vec<Vec<f64>>,
}

impl Network {
    /// Compute gradients for the evaluation captured in `pass`.
    ///
    /// Output error: (a_out - target)·σ'(z_out). Each earlier layer's error
    /// is the next layer's error pushed back through its weights, scaled by
    /// σ' at the local pre-activation. Weight gradients are the outer
    /// product of the error with the upstream activations.
    pub fn backward(&self, pass: &ForwardPass) -> BackwardPass {
        let depth = self.layers.len();
        let mut deltas: Vec<Vec<f64>> = vec![Vec::new(); depth];

        let output = pass.activations[depth][0];
        let z_out = pass.pre_activations[depth - 1][0];
        deltas[depth - 1] = vec![(output - self.target) * sigmoid_prime(z_out)];

        for l in (0..depth - 1).rev() {
            let next_layer = &self.layers[l + 1];
            let next_deltas = deltas[l + 1].clone();
            deltas[l] = pass.pre_activations[l]
                .iter()
                .enumerate()
                .map(|(j, &z)| {
                    let pushed_back: f64 = next_deltas
                        .iter()
                        .enumerate()
                        .map(|(k, delta)| delta * next_layer.weights[k][j])
                        .sum();
                    pushed_back * sigmoid_prime(z)
                })
                .collect();
        }

        let weight_grads = deltas
            .iter()
            .enumerate()
            .map(|(l, layer_deltas)| {
                let upstream = &pass.activations[l];
                layer_deltas
                    .iter()
                    .map(|delta| upstream.iter().map(|a| delta * a).collect())
                    .collect()
            })
            .collect();

        // ∂L/∂b is the error term itself (z depends on b with coefficient 1)
        let bias_grads = deltas.clone();

        BackwardPass {
            deltas,
            weight_grads,
            bias_grads,
        }
    }

    /// The presentational weight-update preview: every parameter moved one
    /// step against its gradient, `w - rate·∂L/∂w`.
    ///
    /// The returned layers are display output only; the network itself is
    /// never mutated, so later forward passes still use the original
    /// constants.
    pub fn descended_layers(&self, grads: &BackwardPass, rate: f64) -> Vec<Layer> {
        self.layers
            .iter()
            .enumerate()
            .map(|(l, layer)| Layer {
                weights: layer
                    .weights
                    .iter()
                    .zip(grads.weight_grads[l].iter())
                    .map(|(row, grad_row)| {
                        row.iter()
                            .zip(grad_row.iter())
                            .map(|(w, g)| w - rate * g)
                            .collect()
                    })
                    .collect(),
                biases: layer
                    .biases
                    .iter()
                    .zip(grads.bias_grads[l].iter())
                    .map(|(b, g)| b - rate * g)
                    .collect(),
            })
            .collect()
    }
}

/// Central-difference loss gradient for one weight: (L(w+h) - L(w-h)) / 2h.
///
/// Used to cross-check the analytic backward pass.
pub fn numerical_weight_gradient(
    network: &Network,
    input: &[f64],
    layer: usize,
    row: usize,
    col: usize,
    h: f64,
) -> Result<f64, NetworkError> {
    let mut plus = network.clone();
    plus.layers[layer].weights[row][col] += h;
    let mut minus = network.clone();
    minus.layers[layer].weights[row][col] -= h;

    let loss_plus = plus.forward(input)?.loss;
    let loss_minus = minus.forward(input)?.loss;
    Ok((loss_plus - loss_minus) / (2.0 * h))
}
