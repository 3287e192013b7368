use super::*;
use approx::assert_relative_eq;

fn wave_nodes() -> Vec<Point> {
    vec![
        Point::new(50.0, 170.0),
        Point::new(150.0, 370.0),
        Point::new(250.0, 35.0),
        Point::new(400.0, 320.0),
    ]
}

fn wave() -> Curve {
    Curve::with_nodes(CurveKind::Bezier, wave_nodes())
}

fn assert_points_close(a: &[Point], b: &[Point], epsilon: f64) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b) {
        assert_relative_eq!(p.x, q.x, epsilon = epsilon);
        assert_relative_eq!(p.y, q.y, epsilon = epsilon);
    }
}

#[test]
fn test_endpoints_at_resolution_four() {
    let mut curve = wave();
    curve.set_resolution(4);
    curve.recompute(RecomputeMode::Exact);

    let points = curve.points();
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], Point::new(50.0, 170.0));
    assert_eq!(points[4], Point::new(400.0, 320.0));
}

#[test]
fn test_resolution_is_clamped() {
    let mut curve = Curve::with_nodes(
        CurveKind::Polygonal,
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    );
    curve.set_resolution(usize::MAX);
    assert_eq!(curve.resolution(), MAX_RESOLUTION);
    assert_eq!(curve.fast_sample_count(), MAX_RESOLUTION / 10);
    curve.recompute(RecomputeMode::Fast);
    assert_eq!(curve.points().len(), MAX_RESOLUTION / 10);

    curve.set_resolution(0);
    assert_eq!(curve.resolution(), 1);
    curve.recompute(RecomputeMode::Exact);
    assert_eq!(curve.points().len(), 2);
}

#[test]
fn test_horner_agrees_with_de_casteljau_up_to_degree_ten() {
    let nodes: Vec<Point> = (0..=10)
        .map(|i| {
            let x = i as f64 * 30.0;
            Point::new(x, (x * 0.05).sin() * 100.0)
        })
        .collect();
    for degree in 1..=10 {
        let control = &nodes[..=degree];
        for step in 0..=50 {
            let t = step as f64 / 50.0;
            let a = bezier::de_casteljau(control, t);
            let b = bezier::horner(control, t);
            assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_fast_and_exact_share_shape() {
    let mut curve = wave();
    curve.set_resolution(200);
    curve.recompute(RecomputeMode::Fast);
    assert_eq!(curve.points().len(), FAST_MIN_SAMPLES);
    assert_eq!(curve.last_recompute(), Some(RecomputeMode::Fast));

    let fast = curve.points().to_vec();
    for (i, p) in fast.iter().enumerate() {
        let t = i as f64 / (fast.len() - 1) as f64;
        let exact = bezier::de_casteljau(curve.nodes(), t);
        assert_relative_eq!(p.x, exact.x, epsilon = 1e-9);
        assert_relative_eq!(p.y, exact.y, epsilon = 1e-9);
    }

    curve.recompute(RecomputeMode::Exact);
    assert_eq!(curve.points().len(), 201);
    assert_eq!(curve.last_recompute(), Some(RecomputeMode::Exact));
}

#[test]
fn test_elevation_preserves_shape_for_m_one_to_five() {
    for m in 1..=5 {
        let mut curve = wave();
        assert!(curve.raise_degree(m));
        assert_eq!(curve.nodes().len(), 4 + m);
        for step in 0..=20 {
            let t = step as f64 / 20.0;
            let a = bezier::de_casteljau(&wave_nodes(), t);
            let b = curve.evaluate(t).unwrap();
            assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_reduce_degree_needs_three_nodes() {
    let mut curve = Curve::with_nodes(
        CurveKind::Bezier,
        vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
    );
    assert!(!curve.reduce_degree());
    assert_eq!(curve.nodes().len(), 2);

    let mut curve = wave();
    assert!(curve.reduce_degree());
    assert_eq!(curve.nodes().len(), 3);
}

#[test]
fn test_split_halves_reproduce_original() {
    let original = wave();
    let t = 0.4;
    let (first, second) = original.split_at(t).unwrap();
    assert_eq!(first.kind(), CurveKind::Bezier);
    assert_eq!(second.nodes().len(), 4);

    for step in 0..=20 {
        let s = step as f64 / 20.0;
        let expected_first = original.evaluate(t * s).unwrap();
        let got_first = first.evaluate(s).unwrap();
        assert_relative_eq!(got_first.x, expected_first.x, epsilon = 1e-9);
        assert_relative_eq!(got_first.y, expected_first.y, epsilon = 1e-9);

        let expected_second = original.evaluate(t + (1.0 - t) * s).unwrap();
        let got_second = second.evaluate(s).unwrap();
        assert_relative_eq!(got_second.x, expected_second.x, epsilon = 1e-9);
        assert_relative_eq!(got_second.y, expected_second.y, epsilon = 1e-9);
    }
}

#[test]
fn test_rational_split_keeps_weights_in_lockstep() {
    let curve = Curve::rational(wave_nodes(), vec![1.0, 3.0, 0.5, 2.0]).unwrap();
    let (first, second) = curve.split_at(0.5).unwrap();
    assert_eq!(first.weights().unwrap().len(), 4);
    assert_eq!(second.weights().unwrap().len(), 4);
    let mid = curve.evaluate(0.5).unwrap();
    let a = first.evaluate(1.0).unwrap();
    let b = second.evaluate(0.0).unwrap();
    assert_relative_eq!(a.x, mid.x, epsilon = 1e-9);
    assert_relative_eq!(b.y, mid.y, epsilon = 1e-9);
}

#[test]
fn test_rational_with_unit_weights_equals_bezier() {
    let node_sets = [
        wave_nodes(),
        vec![Point::new(0.0, 0.0), Point::new(5.0, 10.0)],
        vec![
            Point::new(-3.0, 2.0),
            Point::new(0.0, 8.0),
            Point::new(4.0, -1.0),
            Point::new(9.0, 6.0),
            Point::new(12.0, 0.0),
        ],
    ];
    for nodes in node_sets {
        let mut plain = Curve::with_nodes(CurveKind::Bezier, nodes.clone());
        let mut rational = Curve::with_nodes(CurveKind::RationalBezier, nodes);
        plain.set_resolution(40);
        rational.set_resolution(40);
        for mode in [RecomputeMode::Exact, RecomputeMode::Fast] {
            plain.recompute(mode);
            rational.recompute(mode);
            assert_points_close(plain.points(), rational.points(), 1e-9);
        }
    }
}

#[test]
fn test_swap_twice_restores_order() {
    let mut curve = Curve::rational(wave_nodes(), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    curve.reorder_nodes(0, 2, ReorderMode::Swap);
    assert_eq!(curve.nodes()[0], Point::new(250.0, 35.0));
    assert_eq!(curve.weights().unwrap(), &[3.0, 2.0, 1.0, 4.0]);
    curve.reorder_nodes(0, 2, ReorderMode::Swap);
    assert_eq!(curve.nodes(), wave_nodes().as_slice());
    assert_eq!(curve.weights().unwrap(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_insert_before_and_after() {
    let labels = |curve: &Curve| -> Vec<f64> { curve.nodes().iter().map(|p| p.x).collect() };
    let line = || {
        Curve::with_nodes(
            CurveKind::Polygonal,
            (0..5).map(|i| Point::new(i as f64, 0.0)).collect(),
        )
    };

    let mut curve = line();
    curve.reorder_nodes(3, 1, ReorderMode::InsertBefore);
    assert_eq!(labels(&curve), vec![0.0, 3.0, 1.0, 2.0, 4.0]);

    let mut curve = line();
    curve.reorder_nodes(1, 3, ReorderMode::InsertBefore);
    assert_eq!(labels(&curve), vec![0.0, 2.0, 1.0, 3.0, 4.0]);

    let mut curve = line();
    curve.reorder_nodes(1, 3, ReorderMode::InsertAfter);
    assert_eq!(labels(&curve), vec![0.0, 2.0, 3.0, 1.0, 4.0]);

    let mut curve = line();
    curve.reorder_nodes(3, 0, ReorderMode::InsertAfter);
    assert_eq!(labels(&curve), vec![0.0, 3.0, 1.0, 2.0, 4.0]);

    let mut curve = line();
    curve.reorder_nodes(0, 4, ReorderMode::InsertAfter);
    assert_eq!(labels(&curve), vec![1.0, 2.0, 3.0, 4.0, 0.0]);
}

#[test]
#[should_panic]
fn test_reorder_out_of_range_panics() {
    let mut curve = wave();
    curve.reorder_nodes(0, 7, ReorderMode::Swap);
}

#[test]
fn test_mutation_marks_points_stale() {
    let mut curve = wave();
    assert!(curve.needs_recompute());
    curve.recompute(RecomputeMode::Exact);
    assert!(!curve.needs_recompute());
    assert!(curve.memo_len() > 0);

    curve.move_node(0, Point::new(0.0, 0.0));
    assert!(curve.needs_recompute());
    assert_eq!(curve.memo_len(), 0);
    // Punkte bleiben bis zur Neuberechnung unverändert
    assert_eq!(curve.points()[0], Point::new(50.0, 170.0));

    curve.recompute(RecomputeMode::Exact);
    assert_eq!(curve.points()[0], Point::new(0.0, 0.0));
}

#[test]
fn test_translate_scale_rotate_about_centroid() {
    let mut curve = Curve::with_nodes(
        CurveKind::Polygonal,
        vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ],
    );
    curve.translate(Point::new(3.0, 4.0));
    assert_eq!(curve.nodes()[0], Point::new(3.0, 4.0));

    curve.scale(2.0);
    assert_eq!(curve.nodes()[0], Point::new(2.0, 3.0));
    assert_eq!(curve.nodes()[2], Point::new(6.0, 7.0));

    curve.rotate(90.0);
    let rotated = curve.nodes()[0];
    assert_relative_eq!(rotated.x, 6.0, epsilon = 1e-9);
    assert_relative_eq!(rotated.y, 3.0, epsilon = 1e-9);
}

#[test]
fn test_transforms_on_empty_curve_are_noops() {
    let mut curve = Curve::new(CurveKind::CubicSpline);
    curve.scale(3.0);
    curve.rotate(45.0);
    curve.translate(Point::new(1.0, 1.0));
    assert!(curve.nodes().is_empty());
    curve.recompute(RecomputeMode::Exact);
    assert!(curve.points().is_empty());
    assert!(curve.nearest_node(Point::ZERO).is_none());
    assert_eq!(curve.distance_to_nearest_sample(Point::ZERO), f64::INFINITY);
}

#[test]
fn test_clone_is_independent() {
    let mut original = wave();
    original.recompute(RecomputeMode::Exact);
    let mut copy = original.clone();
    copy.translate(Point::new(20.0, 20.0));
    copy.recompute(RecomputeMode::Exact);
    assert_eq!(original.nodes()[0], Point::new(50.0, 170.0));
    assert_eq!(original.points()[0], Point::new(50.0, 170.0));
    assert_eq!(copy.points()[0], Point::new(70.0, 190.0));
}

#[test]
fn test_nearest_node_and_sample() {
    let mut curve = wave();
    curve.set_resolution(10);
    curve.recompute(RecomputeMode::Exact);
    let hit = curve.nearest_node(Point::new(152.0, 370.0)).unwrap();
    assert_eq!(hit.index, 1);
    assert_relative_eq!(hit.distance, 2.0);

    let sample = curve.nearest_sample(Point::new(400.0, 321.0)).unwrap();
    assert_eq!(sample.index, 10);
    assert_relative_eq!(curve.sample_parameter(sample.index), 1.0);
}

#[test]
fn test_set_node_weight_validation() {
    let mut rational = Curve::with_nodes(CurveKind::RationalBezier, wave_nodes());
    assert!(rational.set_node_weight(1, 2.5).is_ok());
    assert_eq!(rational.weights().unwrap()[1], 2.5);
    assert!(rational.set_node_weight(1, 0.0).is_err());
    assert!(rational.set_node_weight(1, f64::NAN).is_err());
    assert_eq!(rational.weights().unwrap()[1], 2.5);

    let mut plain = wave();
    assert!(plain.set_node_weight(0, 1.0).is_err());
}

#[test]
fn test_rational_constructor_rejects_bad_weights() {
    assert!(Curve::rational(wave_nodes(), vec![1.0; 3]).is_err());
    assert!(Curve::rational(wave_nodes(), vec![1.0, -1.0, 1.0, 1.0]).is_err());
}

#[test]
fn test_add_and_remove_node_keep_weights_in_lockstep() {
    let mut curve = Curve::new(CurveKind::RationalBezier);
    curve.add_node(Point::new(0.0, 0.0));
    curve.add_node(Point::new(10.0, 0.0));
    assert_eq!(curve.weights().unwrap(), &[1.0, 1.0]);
    let removed = curve.remove_node(1);
    assert_eq!(removed, Point::new(10.0, 0.0));
    assert_eq!(curve.nodes(), &[Point::new(0.0, 0.0)]);
    assert_eq!(curve.weights().unwrap(), &[1.0]);
}

#[test]
fn test_reverse_nodes() {
    let mut curve = Curve::rational(wave_nodes(), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    curve.reverse_nodes();
    assert_eq!(curve.nodes()[0], Point::new(400.0, 320.0));
    assert_eq!(curve.weights().unwrap(), &[4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn test_join_c1_matches_tangent() {
    let left = wave();
    let mut right = Curve::with_nodes(
        CurveKind::Bezier,
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(30.0, 10.0),
        ],
    );
    assert!(left.join_right_smooth(&mut right, JoinMethod::C1));
    assert_eq!(right.nodes()[0], Point::new(400.0, 320.0));
    assert_eq!(right.nodes()[1], Point::new(550.0, 605.0));
    assert_eq!(right.nodes()[2], Point::new(430.0, 330.0));
}

#[test]
fn test_join_g1_keeps_own_tangent_length() {
    let left = Curve::with_nodes(
        CurveKind::Bezier,
        vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ],
    );
    let mut right = Curve::with_nodes(
        CurveKind::Bezier,
        vec![
            Point::new(50.0, 50.0),
            Point::new(50.0, 53.0),
            Point::new(60.0, 60.0),
        ],
    );
    assert!(left.join_right_smooth(&mut right, JoinMethod::G1));
    assert_eq!(right.nodes()[0], Point::new(10.0, 0.0));
    assert_relative_eq!(right.nodes()[1].x, 13.0, epsilon = 1e-12);
    assert_relative_eq!(right.nodes()[1].y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_join_rational_matches_weights() {
    let left = Curve::rational(
        vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        ],
        vec![1.0, 2.0, 3.0],
    )
    .unwrap();
    let mut right = Curve::with_nodes(
        CurveKind::RationalBezier,
        vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        ],
    );
    assert!(left.join_right_smooth(&mut right, JoinMethod::C1));
    assert_eq!(right.weights().unwrap(), &[3.0, 4.0, 1.0]);
}

#[test]
fn test_join_short_curves_only_translates() {
    let left = Curve::with_nodes(
        CurveKind::Polygonal,
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    );
    let mut right = Curve::with_nodes(
        CurveKind::Polygonal,
        vec![Point::new(1.0, 1.0), Point::new(2.0, 5.0)],
    );
    assert!(left.join_right_smooth(&mut right, JoinMethod::G1));
    assert_eq!(
        right.nodes(),
        &[Point::new(10.0, 0.0), Point::new(11.0, 4.0)]
    );
}

#[test]
fn test_spline_and_polynomial_cannot_split_or_elevate() {
    let nodes = wave_nodes();
    let mut spline = Curve::with_nodes(CurveKind::CubicSpline, nodes.clone());
    assert!(spline.split_at(0.5).is_none());
    assert!(!spline.raise_degree(1));
    let poly = Curve::interpolation(nodes, NodeSpacing::Equidistant);
    assert!(poly.split_at(0.5).is_none());
}

#[test]
fn test_interpolation_polynomial_passes_through_nodes() {
    for spacing in [NodeSpacing::Chebyshev, NodeSpacing::Equidistant] {
        let mut curve = Curve::interpolation(wave_nodes(), spacing);
        curve.set_resolution(30);
        curve.recompute(RecomputeMode::Exact);
        let points = curve.points();
        assert_eq!(points.first(), Some(&wave_nodes()[0]));
        assert_eq!(points.last(), Some(&wave_nodes()[3]));
        assert_eq!(curve.evaluate(0.0), Some(wave_nodes()[0]));
    }
}

#[test]
fn test_polygonal_split_contains_cut_point() {
    let curve = Curve::with_nodes(
        CurveKind::Polygonal,
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ],
    );
    let (a, b) = curve.split_at(0.5).unwrap();
    assert_eq!(a.nodes(), &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
    assert_eq!(b.nodes(), &[Point::new(10.0, 0.0), Point::new(10.0, 10.0)]);
}

#[test]
fn test_summary_text() {
    let curve = wave().named("Welle");
    assert_eq!(curve.summary(), "Welle | Bezier | 4 Nodes");
}
