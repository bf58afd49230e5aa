use nalgebra::distance;
use selkie_graph::{Edge, Graph, SparseGraph, generators};
use selkie_layout::geom::unit;
use selkie_layout::{
    CancellationToken, Error, Point, SpringStaticLayout, StaticGraphLayout, StaticLayout, layout,
    pack_components,
};
use std::f64::consts::TAU;

const EPS: f64 = 1e-9;

#[test]
fn origin_places_every_node_at_zero() {
    let g = generators::path(false, 4);
    let pos = layout(&g, &StaticLayout::Origin).unwrap();
    assert_eq!(pos.len(), 4);
    assert!(pos.values().all(|p| *p == Point::origin()));
}

#[test]
fn circle_spaces_nodes_evenly_in_node_order() {
    let g = generators::empty(false, 6);
    let radius = 3.0;
    let pos = layout(&g, &StaticLayout::circle(radius)).unwrap();

    let keys: Vec<usize> = pos.keys().copied().collect();
    assert_eq!(keys, (0..6).collect::<Vec<_>>());
    for (i, p) in pos.values().enumerate() {
        assert!((p.coords.norm() - radius).abs() < EPS);
        let expected = Point::from(unit(TAU * i as f64 / 6.0) * radius);
        assert!(distance(p, &expected) < EPS, "node {i} at {p:?}");
    }
    assert!(distance(&pos[&0], &Point::new(radius, 0.0)) < EPS);
}

#[test]
fn circle_of_one_node_sits_on_the_positive_x_axis() {
    let g = generators::empty(false, 1);
    let pos = layout(&g, &StaticLayout::circle(2.0)).unwrap();
    assert!(distance(&pos[&0], &Point::new(2.0, 0.0)) < EPS);
}

#[test]
fn random_stays_within_extent_and_is_reproducible_with_a_seed() {
    let g = generators::complete(false, 50);
    let a = layout(&g, &StaticLayout::seeded_random(4.0, 7)).unwrap();
    let b = layout(&g, &StaticLayout::seeded_random(4.0, 7)).unwrap();
    let c = layout(&g, &StaticLayout::seeded_random(4.0, 8)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    for p in a.values().chain(layout(&g, &StaticLayout::random(4.0)).unwrap().values()) {
        assert!(p.x.abs() <= 4.0 && p.y.abs() <= 4.0, "{p:?}");
    }
}

#[test]
fn empty_graph_yields_empty_layouts() {
    let g = generators::empty(true, 0);
    for strategy in [
        StaticLayout::Origin,
        StaticLayout::circle(1.0),
        StaticLayout::seeded_random(1.0, 1),
    ] {
        assert!(layout(&g, &strategy).unwrap().is_empty());
    }
}

#[test]
fn cancelled_token_interrupts_every_layout() {
    let g = generators::cycle(false, 5);
    let cancel = CancellationToken::new();
    let observer = cancel.clone();
    cancel.cancel();
    assert!(observer.is_cancelled());

    let strategies: Vec<Box<dyn StaticGraphLayout<usize>>> = vec![
        Box::new(StaticLayout::Origin),
        Box::new(StaticLayout::circle(1.0)),
        Box::new(StaticLayout::random(1.0)),
        Box::new(SpringStaticLayout::default()),
    ];
    for s in &strategies {
        assert!(matches!(s.layout(&g, &observer), Err(Error::Interrupted)));
    }
    assert!(matches!(
        pack_components(&g, &StaticLayout::Origin, 1.0, &observer),
        Err(Error::Interrupted)
    ));
}

#[test]
fn invalid_parameters_are_rejected() {
    let g = generators::path(false, 2);
    for bad in [
        StaticLayout::circle(-1.0),
        StaticLayout::circle(f64::NAN),
        StaticLayout::random(f64::INFINITY),
    ] {
        assert!(matches!(
            layout(&g, &bad),
            Err(Error::InvalidParameter { .. })
        ));
    }
    assert!(matches!(
        pack_components(&g, &StaticLayout::Origin, -2.0, &CancellationToken::new()),
        Err(Error::InvalidParameter { name: "gap", .. })
    ));
}

#[test]
fn packed_components_do_not_overlap() {
    // Two triangles and an isolated node.
    let g = SparseGraph::new(
        false,
        0..7,
        [
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 0),
            Edge::new(3, 4),
            Edge::new(4, 5),
            Edge::new(5, 3),
        ],
    )
    .unwrap();
    let gap = 2.0;
    let pos = pack_components(&g, &StaticLayout::circle(1.0), gap, &CancellationToken::new())
        .unwrap();

    let keys: Vec<usize> = pos.keys().copied().collect();
    assert_eq!(keys, (0..7).collect::<Vec<_>>());

    let max_x = |nodes: &[usize]| nodes.iter().map(|v| pos[v].x).fold(f64::MIN, f64::max);
    let min_x = |nodes: &[usize]| nodes.iter().map(|v| pos[v].x).fold(f64::MAX, f64::min);
    let first = [0, 1, 2];
    let second = [3, 4, 5];
    assert!(min_x(&first).abs() < EPS);
    assert!((min_x(&second) - max_x(&first) - gap).abs() < EPS);
    assert!((pos[&6].x - max_x(&second) - gap).abs() < EPS);

    for component in [&first[..], &second[..]] {
        let lo = component.iter().map(|v| pos[v].y).fold(f64::MAX, f64::min);
        let hi = component.iter().map(|v| pos[v].y).fold(f64::MIN, f64::max);
        assert!((lo + hi).abs() < EPS, "component {component:?} not centred");
    }
    assert!(pos[&6].y.abs() < EPS);
}

#[test]
fn spring_static_layout_relaxes_a_path() {
    let g = generators::path(false, 5);
    let runner = SpringStaticLayout {
        max_iterations: 1_000,
        ..SpringStaticLayout::default()
    };
    let pos = runner.layout(&g, &CancellationToken::new()).unwrap();
    assert_eq!(pos.len(), g.node_count());

    for e in g.edges() {
        let d = distance(&pos[&e.source], &pos[&e.target]);
        assert!((5.0..8.0).contains(&d), "edge {e} has length {d}");
    }
}

#[test]
fn spring_static_layout_is_deterministic() {
    let g = generators::wheel(false, 6);
    let runner = SpringStaticLayout::default();
    let a = runner.layout(&g, &CancellationToken::new()).unwrap();
    let b = runner.layout(&g, &CancellationToken::new()).unwrap();
    assert_eq!(a, b);
}
