use approx::assert_abs_diff_eq;
use mathviz::layout::{NetworkLayout, neuron_positions};

#[test]
fn test_layers_centered_horizontally() {
    let net = NetworkLayout::new(&[3, 5, 2], 3.0, 1.0);
    let xs: Vec<f64> = net.layers().iter().map(|l| l[0][0]).collect();
    assert_eq!(xs, vec![-3.0, 0.0, 3.0]);
    assert_eq!(net.node_count(), 10);
}

#[test]
fn test_each_layer_matches_neuron_layout() {
    let net = NetworkLayout::new(&[4, 1], 2.0, 0.5);
    assert_eq!(net.layers()[0], neuron_positions(4, -1.0, 0.5));
    assert_eq!(net.layers()[1], neuron_positions(1, 1.0, 0.5));
}

#[test]
fn test_edges_fully_connect_adjacent_layers() {
    let net = NetworkLayout::new(&[2, 3, 1], 1.0, 1.0);
    let edges = net.edges();
    assert_eq!(edges.len(), 2 * 3 + 3 * 1);

    // Source-major ordering.
    let l = net.layers();
    assert_eq!(edges[0], (l[0][0], l[1][0]));
    assert_eq!(edges[1], (l[0][0], l[1][1]));
    assert_eq!(edges[3], (l[0][1], l[1][0]));
    assert_eq!(edges[6], (l[1][0], l[2][0]));
}

#[test]
fn test_empty_layer_breaks_connections() {
    let net = NetworkLayout::new(&[2, 0, 2], 1.0, 1.0);
    assert!(net.layers()[1].is_empty());
    assert!(net.edges().is_empty());
    assert_abs_diff_eq!(net.layers()[2][0][0], 1.0);
}

#[test]
fn test_single_layer_has_no_edges() {
    let net = NetworkLayout::new(&[5], 4.0, 1.2);
    assert_eq!(net.layers()[0][0][0], 0.0);
    assert!(net.edges().is_empty());
}

#[test]
fn test_no_layers() {
    let net = NetworkLayout::new(&[], 1.0, 1.0);
    assert!(net.layers().is_empty());
    assert_eq!(net.node_count(), 0);
}
