//! The fixed demonstration network and its forward pass.
//!
//! The network never trains: it exists to show one forward evaluation and
//! one gradient computation for a hard-coded input/target pair. Weights are
//! constants after construction.

use crate::error::NetworkError;

/// The demonstration input, fed to the two input units.
pub const DEMO_INPUT: [f64; 2] = [0.5, 0.8];

/// The demonstration target for the single output unit.
pub const DEMO_TARGET: f64 = 1.0;

/// Logistic sigmoid: 1/(1 + e^{-z}).
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Sigmoid derivative σ(z)·(1-σ(z)), evaluated at the pre-activation.
pub fn sigmoid_prime(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}

/// One dense layer: a weight matrix (one row per output unit) and a bias
/// per output unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Row-major weights, `weights[out][in]`
    pub weights: Vec<Vec<f64>>,
    /// One bias per output unit
    pub biases: Vec<f64>,
}

/// Everything one forward evaluation produces.
///
/// `activations[0]` is the input itself; `pre_activations[l]` and
/// `activations[l + 1]` belong to layer l. Pure function of the network
/// constants — recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    /// Per-layer z = W·a + b, excluding the input layer
    pub pre_activations: Vec<Vec<f64>>,
    /// Per-layer activations, including the input layer at index 0
    pub activations: Vec<Vec<f64>>,
    /// Squared-error loss 0.5·(a_out - target)²
    pub loss: f64,
}

impl ForwardPass {
    /// The scalar output activation.
    pub fn output(&self) -> f64 {
        self.activations[self.activations.len() - 1][0]
    }
}

/// A feed-forward sigmoid network with a scalar squared-error loss.
///
/// # Example
///
/// ```rust
/// use vizmath_network::{Network, DEMO_INPUT};
///
/// let net = Network::demo();
/// let pass = net.forward(&DEMO_INPUT).unwrap();
/// assert!(pass.loss > 0.0);
/// assert_eq!(pass.activations.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    /// Unit counts per layer, input first
    pub sizes: Vec<usize>,
    /// One dense layer between each pair of adjacent sizes
    pub layers: Vec<Layer>,
    /// Fixed target for the scalar output
    pub target: f64,
}

impl Network {
    /// Build a network, validating every weight matrix and bias vector
    /// against the declared layer sizes.
    ///
    /// # Errors
    ///
    /// Returns an error when the layer count, any matrix shape, or the
    /// output width disagrees with `sizes`.
    pub fn new(sizes: Vec<usize>, layers: Vec<Layer>, target: f64) -> Result<Self, NetworkError> {
        if layers.len() + 1 != sizes.len() {
            return Err(NetworkError::LayerCountMismatch {
                sizes: sizes.len(),
                expected: sizes.len().saturating_sub(1),
                got: layers.len(),
            });
        }
        match sizes.last() {
            Some(&1) => {}
            Some(&other) => return Err(NetworkError::OutputNotScalar { got: other }),
            None => return Err(NetworkError::OutputNotScalar { got: 0 }),
        }

        for (l, layer) in layers.iter().enumerate() {
            let fan_in = sizes[l];
            let fan_out = sizes[l + 1];
            if layer.weights.len() != fan_out {
                return Err(NetworkError::ShapeMismatch {
                    layer: l,
                    expected: fan_out,
                    got: layer.weights.len(),
                });
            }
            if layer.biases.len() != fan_out {
                return Err(NetworkError::ShapeMismatch {
                    layer: l,
                    expected: fan_out,
                    got: layer.biases.len(),
                });
            }
            for (row, weights) in layer.weights.iter().enumerate() {
                if weights.len() != fan_in {
                    return Err(NetworkError::RaggedWeights {
                        layer: l,
                        row,
                        expected: fan_in,
                        got: weights.len(),
                    });
                }
            }
        }

        Ok(Self {
            sizes,
            layers,
            target,
        })
    }

    /// The one hard-coded 2-2-1 demonstration instance.
    pub fn demo() -> Self {
        Self {
            sizes: vec![2, 2, 1],
            layers: vec![
                Layer {
                    weights: vec![vec![0.5, -0.6], vec![0.3, 0.8]],
                    biases: vec![0.1, -0.1],
                },
                Layer {
                    weights: vec![vec![0.7, -0.4]],
                    biases: vec![0.2],
                },
            ],
            target: DEMO_TARGET,
        }
    }

    /// Evaluate the network on one input.
    ///
    /// For each layer: z = W·a + b, a = σ(z) elementwise. The loss is
    /// 0.5·(a_out - target)² against the fixed target.
    ///
    /// # Errors
    ///
    /// Returns an error if the input length disagrees with the input layer.
    pub fn forward(&self, input: &[f64]) -> Result<ForwardPass, NetworkError> {
        if input.len() != self.sizes[0] {
            return Err(NetworkError::InputLength {
                expected: self.sizes[0],
                got: input.len(),
            });
        }

        let mut current = input.to_vec();
        let mut activations = vec![current.clone()];
        let mut pre_activations = Vec::with_capacity(self.layers.len());

        for layer in &self.layers {
            let z: Vec<f64> = layer
                .weights
                .iter()
                .zip(layer.biases.iter())
                .map(|(row, bias)| {
                    row.iter()
                        .zip(current.iter())
                        .map(|(w, a)| w * a)
                        .sum::<f64>()
                        + bias
                })
                .collect();
            let a: Vec<f64> = z.iter().map(|&v| sigmoid(v)).collect();
            pre_activations.push(z);
            activations.push(a.clone());
            current = a;
        }

        let output = current[0];
        let diff = output - self.target;
        Ok(ForwardPass {
            pre_activations,
            activations,
            loss: 0.5 * diff * diff,
        })
    }
}
