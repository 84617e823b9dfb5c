//! Print the forward and backward pass of the demonstration network, the
//! same numbers the visualization annotates on each edge.

use vizmath_network::{Network, DEMO_INPUT, DEMO_TARGET};

fn main() {
    let net = Network::demo();
    let pass = net.forward(&DEMO_INPUT).expect("demo input fits the demo network");

    println!("=== Forward Pass ===");
    println!("input:  {:?}", DEMO_INPUT);
    for (l, (z, a)) in pass
        .pre_activations
        .iter()
        .zip(pass.activations.iter().skip(1))
        .enumerate()
    {
        println!("layer {l}: z = {z:?}");
        println!("         a = {a:?}");
    }
    println!("output: {:.6} (target {DEMO_TARGET})", pass.output());
    println!("loss:   {:.6}\n", pass.loss);

    let grads = net.backward(&pass);

    println!("=== Backward Pass ===");
    for (l, (dw, db)) in grads
        .weight_grads
        .iter()
        .zip(grads.bias_grads.iter())
        .enumerate()
    {
        println!("layer {l}: dL/dW = {dw:?}");
        println!("         dL/db = {db:?}");
    }

    println!("\n=== One Previewed Step (rate 0.5) ===");
    for (l, layer) in net.descended_layers(&grads, 0.5).iter().enumerate() {
        println!("layer {l}: W' = {:?}", layer.weights);
        println!("         b' = {:?}", layer.biases);
    }
}
