use selkie_graph::{Edge, Error, Graph, SparseGraph};

#[test]
fn rejects_edges_to_undeclared_nodes() {
    let err = SparseGraph::new(false, [1, 2], [Edge::new(1, 3)]).unwrap_err();
    assert!(matches!(err, Error::UnknownNode { ref node } if node == "3"));
}

#[test]
fn rejects_negative_and_non_finite_weights() {
    for w in [-1.0, f64::NAN, f64::INFINITY] {
        let err = SparseGraph::weighted(false, [1, 2], [(Edge::new(1, 2), w)]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "weight", .. }));
    }
}

#[test]
fn edge_count_matches_edges_after_dedup() {
    let g = SparseGraph::new(
        true,
        ["a", "b", "c"],
        [
            Edge::new("a", "b"),
            Edge::new("a", "b"),
            Edge::new("b", "a"),
            Edge::new("b", "c"),
        ],
    )
    .unwrap();
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.edge_count(), g.edges().len());
}

#[test]
fn self_loop_counts_twice_toward_degree() {
    for directed in [false, true] {
        let g = SparseGraph::new(directed, ["a", "b"], [Edge::new("a", "a"), Edge::new("a", "b")])
            .unwrap();
        assert_eq!(g.degree(&"a"), 3, "directed={directed}");
        assert_eq!(g.edges_adjacent_to(&"a").len(), 2, "directed={directed}");
        assert!(g.adjacent(&"a", &"a"));
        assert!(g.neighbors(&"a").contains(&&"a"));
    }
}

#[test]
fn directed_degree_is_in_plus_out() {
    let g = SparseGraph::from_edges(
        true,
        [
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 0),
            Edge::new(0, 2),
            Edge::new(3, 3),
        ],
    );
    for v in g.nodes() {
        assert_eq!(g.degree(v), g.in_degree(v) + g.out_degree(v));
    }
    assert_eq!(g.out_degree(&0), 2);
    assert_eq!(g.in_degree(&0), 1);
    assert_eq!(g.degree(&3), 2);
}

#[test]
fn parallel_edges_are_kept_by_key() {
    let g = SparseGraph::from_edges(
        false,
        [Edge::keyed("a", "b", 0), Edge::keyed("b", "a", 1), Edge::keyed("a", "b", 1)],
    );
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.degree(&"a"), 2);
    assert_eq!(g.neighbors(&"a"), vec![&"b"]);
    assert_eq!(g.edges_between(&"b", &"a").len(), 2);
    assert_eq!(g.edge_index_of(&Edge::keyed("b", "a", 1)), Some(1));
}

#[test]
fn missing_nodes_use_neutral_defaults() {
    let g = SparseGraph::from_edges(false, [Edge::new(1, 2)]);
    assert!(!g.contains(&9));
    assert_eq!(g.degree(&9), 0);
    assert_eq!(g.in_degree(&9), 0);
    assert_eq!(g.out_degree(&9), 0);
    assert!(g.neighbors(&9).is_empty());
    assert!(g.out_neighbors(&9).is_empty());
    assert!(g.edges_adjacent_to(&9).is_empty());
    assert!(!g.adjacent(&1, &9));
    assert!(!g.adjacent(&9, &1));
}

#[test]
fn weights_are_looked_up_in_either_orientation() {
    let g = SparseGraph::weighted(
        false,
        ["x", "y", "z"],
        [(Edge::new("x", "y"), 2.5), (Edge::new("y", "z"), 0.0)],
    )
    .unwrap();
    assert!(g.is_weighted());
    assert_eq!(g.edge_weight(&Edge::new("y", "x")), Some(2.5));
    assert_eq!(g.edge_weight(&Edge::new("z", "y")), Some(0.0));
    assert_eq!(g.edge_weight(&Edge::new("x", "z")), None);

    let plain = SparseGraph::from_edges(false, [Edge::new("x", "y")]);
    assert!(!plain.is_weighted());
    assert_eq!(plain.edge_weight(&Edge::new("x", "y")), None);
}

#[test]
fn components_are_cached_at_construction() {
    let g = SparseGraph::new(
        false,
        ["a", "b", "c", "d", "e"],
        [Edge::new("a", "c"), Edge::new("d", "e")],
    )
    .unwrap();
    let comps = g.components().unwrap();
    assert_eq!(comps.len(), 3);
    assert_eq!(comps.sizes(), vec![2, 1, 2]);
    assert_eq!(comps.component_of(&"e"), Some(2));
    assert_eq!(comps.component_of(&"z"), None);

    let graphs = comps.graphs();
    assert_eq!(graphs.len(), 3);
    assert_eq!(graphs[0].edge_count(), 1);
    assert_eq!(graphs[1].node_count(), 1);
    assert_eq!(graphs[1].edge_count(), 0);
}

#[test]
fn empty_graph_is_well_defined() {
    let g = SparseGraph::new(true, Vec::<u8>::new(), Vec::<Edge<u8>>::new()).unwrap();
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.components().unwrap().is_empty());
    assert!(g.core_nodes().is_empty());
}
