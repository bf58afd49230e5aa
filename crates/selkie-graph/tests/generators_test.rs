use rand::SeedableRng;
use rand::rngs::StdRng;
use selkie_graph::alg::components;
use selkie_graph::generators::{
    complete, cycle, empty, path, random_by_edge_count, random_by_probability, star, wheel,
};
use selkie_graph::{Error, Graph};

#[test]
fn deterministic_families_have_expected_shape() {
    assert_eq!(empty(false, 4).edge_count(), 0);
    assert_eq!(empty(false, 4).node_count(), 4);

    let p = path(false, 5);
    assert_eq!(p.edge_count(), 4);
    assert_eq!(p.degree(&0), 1);
    assert_eq!(p.degree(&2), 2);

    let c = cycle(false, 5);
    assert_eq!(c.edge_count(), 5);
    assert!(c.nodes().iter().all(|v| c.degree(v) == 2));
    assert_eq!(cycle(false, 2).edge_count(), 1);

    let s = star(false, 4);
    assert_eq!(s.node_count(), 5);
    assert_eq!(s.degree(&0), 4);

    let w = wheel(false, 5);
    assert_eq!(w.edge_count(), 10);
    assert_eq!(w.degree(&0), 5);
    assert!((1..=5).all(|v| w.degree(&v) == 3));

    assert_eq!(complete(false, 5).edge_count(), 10);
    assert_eq!(complete(true, 5).edge_count(), 20);
}

#[test]
fn random_by_edge_count_is_exact_and_seeded() {
    let a = random_by_edge_count(false, 30, 50, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = random_by_edge_count(false, 30, 50, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(a.edge_count(), 50);
    assert_eq!(a.edges(), b.edges());
    assert!(a.edges().iter().all(|e| !e.is_loop()));

    let full = random_by_edge_count(true, 6, 30, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(full.edge_count(), 30);
}

#[test]
fn random_by_edge_count_rejects_impossible_counts() {
    let err = random_by_edge_count(false, 4, 7, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "m", .. }));
}

#[test]
fn random_by_probability_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(random_by_probability(false, 10, 0.0, &mut rng).unwrap().edge_count(), 0);
    assert_eq!(random_by_probability(false, 10, 1.0, &mut rng).unwrap().edge_count(), 45);
    assert_eq!(components(&random_by_probability(false, 10, 1.0, &mut rng).unwrap()).len(), 1);

    for p in [-0.1, 1.5, f64::NAN] {
        let err = random_by_probability(true, 3, p, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "p", .. }));
    }
}
