use selkie_graph::{Edge, Graph, SparseGraph};

fn sorted<'a>(mut v: Vec<&'a &'static str>) -> Vec<&'a &'static str> {
    v.sort();
    v
}

#[test]
fn undirected_edges_are_symmetric() {
    let g = SparseGraph::new(false, ["a", "b"], [Edge::new("b", "a")]).unwrap();

    assert!(g.adjacent(&"a", &"b"));
    assert!(g.adjacent(&"b", &"a"));
    assert!(g.has_edge(&"a", &"b"));
    assert!(g.has_edge(&"b", &"a"));
    assert_eq!(g.edges_between(&"a", &"b"), g.edges_between(&"b", &"a"));
}

#[test]
fn undirected_reversed_duplicates_are_one_edge() {
    let g = SparseGraph::from_edges(false, [Edge::new("a", "b"), Edge::new("b", "a")]);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.degree(&"a"), 1);
}

#[test]
fn undirected_in_and_out_degrees_coincide() {
    let g = SparseGraph::from_edges(false, [Edge::new("a", "b"), Edge::new("b", "c")]);

    assert_eq!(g.out_degree(&"b"), 2);
    assert_eq!(g.in_degree(&"b"), 2);
    assert_eq!(g.degree(&"b"), 2);
}

#[test]
fn undirected_out_in_and_neighbors_are_the_same() {
    let g = SparseGraph::from_edges(false, [Edge::new("a", "b"), Edge::new("b", "c")]);

    assert_eq!(sorted(g.out_neighbors(&"b")), vec![&"a", &"c"]);
    assert_eq!(sorted(g.in_neighbors(&"b")), vec![&"a", &"c"]);
    assert_eq!(sorted(g.neighbors(&"b")), vec![&"a", &"c"]);
}

#[test]
fn undirected_edges_adjacent_to_returns_incident_edges() {
    let g = SparseGraph::from_edges(false, [Edge::new("a", "b"), Edge::new("b", "c")]);

    let edges = g.edges_adjacent_to(&"b");
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().any(|e| e.same_undirected(&Edge::new("a", "b"))));
    assert!(edges.iter().any(|e| e.same_undirected(&Edge::new("c", "b"))));
}

#[test]
fn directed_out_and_in_neighbors_respect_direction() {
    let g = SparseGraph::from_edges(true, [Edge::new("a", "b")]);

    assert_eq!(g.out_neighbors(&"a"), vec![&"b"]);
    assert!(g.out_neighbors(&"b").is_empty());
    assert_eq!(g.in_neighbors(&"b"), vec![&"a"]);
    assert!(g.in_neighbors(&"a").is_empty());
    assert!(g.has_edge(&"a", &"b"));
    assert!(!g.has_edge(&"b", &"a"));
    assert!(g.adjacent(&"b", &"a"));
}
