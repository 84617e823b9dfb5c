//! # Network — the backpropagation demonstrator
//!
//! A fixed 2-2-1 sigmoid network evaluated for one hard-coded input/target
//! pair. The point is to show a single forward pass and a single chain-rule
//! gradient computation, not to train anything: weights are constants, and
//! the "one step of descent" view is a preview the display layer renders
//! next to the gradients.
//!
//! ## Example
//!
//! ```rust
//! use vizmath_network::{Network, DEMO_INPUT};
//!
//! let net = Network::demo();
//! let pass = net.forward(&DEMO_INPUT).unwrap();
//! let grads = net.backward(&pass);
//!
//! // Gradients exist for every layer
//! assert_eq!(grads.weight_grads.len(), 2);
//!
//! // One previewed descent step lowers the loss
//! let stepped = net.descended_layers(&grads, 0.5);
//! assert_eq!(stepped.len(), 2);
//! ```

mod error;
mod grad;
mod net;

pub use error::NetworkError;
pub use grad::{numerical_weight_gradient, BackwardPass};
pub use net::{sigmoid, sigmoid_prime, ForwardPass, Layer, Network, DEMO_INPUT, DEMO_TARGET};
