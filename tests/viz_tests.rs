use approx::assert_relative_eq;
use mathviz::anim::{Keyframe, Timeline, Track};
use mathviz::layout::{EllipseSpec, NeuronLayerSpec, RiemannSpec};
use mathviz::mesh::MeshOptions;
use mathviz::sample::SampleFn;
use mathviz::viz::{VizLayout, VizRequest};

fn riemann(function: SampleFn, partitions: i64) -> VizRequest {
    VizRequest::Riemann {
        spec: RiemannSpec::new(0.0, 4.0, partitions),
        function,
    }
}

// ============================================================================
// Layouts
// ============================================================================

#[test]
fn test_riemann_layout_reports_sum() {
    let VizLayout::Riemann {
        boxes,
        sum,
        function,
    } = riemann(SampleFn::Constant(1.0), 4).layout()
    else {
        panic!("expected riemann layout");
    };
    assert_eq!(boxes.len(), 4);
    assert_relative_eq!(sum, 4.0, epsilon = 1e-12);
    assert_eq!(function, "const:1");
}

#[test]
fn test_layout_json_shape() {
    let req = VizRequest::Neurons(NeuronLayerSpec::new(1, 5.0));
    let json = mathviz::layout_json(&req, false).unwrap();
    assert_eq!(json, r#"{"kind":"neurons","positions":[[5.0,0.0,0.0]]}"#);
}

#[test]
fn test_layout_json_riemann_boxes() {
    let req = VizRequest::Riemann {
        spec: RiemannSpec::new(0.0, 2.0, 2),
        function: SampleFn::Identity,
    };
    let json = mathviz::layout_json(&req, false).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["kind"], "riemann");
    assert_eq!(v["boxes"][1]["position"][0], 1.5);
    assert_eq!(v["boxes"][1]["position"][1], 0.75);
    assert_eq!(v["boxes"][0]["scale"][2], 0.5);
}

// ============================================================================
// Parameter Overrides
// ============================================================================

#[test]
fn test_with_params_overrides_known_names() {
    let mut tl = Timeline::new();
    tl.add_track(Track::new("partitions").with_keyframes(vec![Keyframe::at(0.0, 12.4)]));
    tl.add_track(Track::new("radius_x").with_keyframes(vec![Keyframe::at(0.0, 9.0)]));
    let params = tl.sample(0.0);

    let updated = riemann(SampleFn::Sin, 4).with_params(&params);
    assert_eq!(
        updated,
        VizRequest::Riemann {
            spec: RiemannSpec::new(0.0, 4.0, 12),
            function: SampleFn::Sin,
        }
    );

    let ellipse = VizRequest::Ellipse(EllipseSpec::new(1.0, 2.0, 8)).with_params(&params);
    assert_eq!(ellipse, VizRequest::Ellipse(EllipseSpec::new(9.0, 2.0, 8)));
}

// ============================================================================
// Scenes
// ============================================================================

#[test]
fn test_riemann_scene_splits_signed_area() {
    let scene = riemann(SampleFn::Sin, 16)
        .build_scene(&MeshOptions::default())
        .unwrap();
    let pos = scene.get("area_positive").unwrap().mesh.as_ref().unwrap();
    let neg = scene.get("area_negative").unwrap().mesh.as_ref().unwrap();
    // sin is positive on (0, π) and negative on (π, 4).
    assert!(pos.triangle_count() > neg.triangle_count());
    assert!(neg.triangle_count() > 0);
    assert!(neg.bounds().max[1] <= 0.0);
    assert!(scene.get("curve").is_some());
}

#[test]
fn test_network_scene_roots_in_draw_order() {
    let req = VizRequest::Network {
        layer_sizes: vec![3, 4, 2],
        layer_gap: 3.0,
        spacing: 1.2,
    };
    let scene = req.build_scene(&MeshOptions::default()).unwrap();
    let names: Vec<String> = scene.flatten().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["edges".to_string(), "nodes".to_string()]);
}

#[test]
fn test_degenerate_requests_build_empty_meshes() {
    let opts = MeshOptions::default();
    let scene = VizRequest::Ellipse(EllipseSpec::new(2.0, 1.2, 0))
        .build_scene(&opts)
        .unwrap();
    assert!(scene.get("ellipse").unwrap().mesh.as_ref().unwrap().is_empty());
    assert!(scene.bounds().is_empty());

    let scene = riemann(SampleFn::Sin, -5).build_scene(&opts).unwrap();
    assert!(scene.get("area_positive").unwrap().mesh.as_ref().unwrap().is_empty());
}

#[test]
fn test_non_finite_requests_build_empty_meshes() {
    let opts = MeshOptions::default();
    let requests = [
        VizRequest::Ellipse(EllipseSpec::new(f64::NAN, 1.0, 32)),
        VizRequest::Ellipse(EllipseSpec::new(f64::INFINITY, 1.0, 32)),
        VizRequest::Neurons(NeuronLayerSpec::new(4, f64::NAN)),
        VizRequest::Neurons(NeuronLayerSpec::new(4, 0.0).with_spacing(f64::INFINITY)),
        VizRequest::Network {
            layer_sizes: vec![2, 3],
            layer_gap: f64::NAN,
            spacing: 1.2,
        },
    ];
    for req in requests {
        let scene = req.build_scene(&opts).unwrap();
        assert!(
            scene.flatten().iter().all(|d| d.mesh.is_empty()),
            "{req:?}"
        );
    }
}

#[test]
fn test_curve_drops_samples_overflowing_f32() {
    // 1e300·x is finite in f64 but not in f32 for x > 0.
    let scene = riemann(SampleFn::Polynomial(vec![0.0, 1e300]), 4)
        .build_scene(&MeshOptions::default())
        .unwrap();
    let curve = scene.get("curve").unwrap().mesh.as_ref().unwrap();
    assert!(curve.positions.iter().flatten().all(|c| c.is_finite()));
}
