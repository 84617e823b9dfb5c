//! End-to-end test of the demonstration flow the display layer drives:
//! forward, backward, then the previewed update.

use vizmath_network::{Network, DEMO_INPUT, DEMO_TARGET};

#[test]
fn demo_walkthrough_produces_the_anchored_numbers() {
    let net = Network::demo();

    let pass = net.forward(&DEMO_INPUT).unwrap();
    // The literal regression value from the fixed constants, to 4 places
    assert!((pass.loss - 0.0947).abs() < 5e-5);
    assert!(pass.output() < DEMO_TARGET);

    let grads = net.backward(&pass);
    // Output undershoots the target, so the output-layer gradients push
    // both hidden weights upward (negative gradient, positive update)
    assert!(grads.weight_grads[1][0][0] < 0.0);
    assert!(grads.weight_grads[1][0][1] < 0.0);

    // Repeated previews at increasing rates keep lowering the previewed loss
    let mut last_loss = pass.loss;
    for rate in [0.5, 1.0, 2.0] {
        let stepped = Network::new(
            net.sizes.clone(),
            net.descended_layers(&grads, rate),
            net.target,
        )
        .unwrap();
        let stepped_loss = stepped.forward(&DEMO_INPUT).unwrap().loss;
        assert!(stepped_loss < last_loss);
        last_loss = stepped_loss;
    }

    // The preview never feeds back: the original evaluation is unchanged
    assert_eq!(net.forward(&DEMO_INPUT).unwrap(), pass);
}
