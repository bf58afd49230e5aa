use proptest::prelude::*;
use selkie_graph::alg::{
    component_graphs, components, components_of_adjacency, components_of_edges, geodesic_distance,
};
use selkie_graph::{Edge, Graph, NodeMap, NodeSet, SparseGraph};

fn set<const N: usize>(items: [&'static str; N]) -> NodeSet<&'static str> {
    items.into_iter().collect()
}

fn sample() -> SparseGraph<&'static str> {
    SparseGraph::new(
        true,
        ["a", "b", "c", "d", "e", "f"],
        [Edge::new("b", "a"), Edge::new("c", "d"), Edge::new("d", "e"), Edge::new("f", "f")],
    )
    .unwrap()
}

#[test]
fn three_entry_points_agree() {
    let g = sample();
    let expected = vec![set(["a", "b"]), set(["c", "d", "e"]), set(["f"])];

    assert_eq!(components(&g), expected);
    assert_eq!(components_of_edges(g.nodes(), g.edges()), expected);

    let mut adjacency: NodeMap<&str, Vec<&str>> = NodeMap::default();
    for v in g.nodes() {
        adjacency.insert(*v, g.out_neighbors(v).into_iter().copied().collect());
    }
    assert_eq!(components_of_adjacency(&adjacency), expected);
}

#[test]
fn works_through_a_trait_object() {
    let g = sample();
    let dynamic: &dyn Graph<&str> = &g;
    assert_eq!(components(dynamic).len(), 3);
}

#[test]
fn edges_may_introduce_extra_nodes() {
    let declared = set(["a"]);
    let comps = components_of_edges(&declared, &[Edge::new("b", "c")]);
    assert_eq!(comps, vec![set(["a"]), set(["b", "c"])]);
}

#[test]
fn component_graphs_are_induced_subgraphs() {
    let graphs = component_graphs(&sample());
    assert_eq!(graphs.len(), 3);
    assert!(graphs.iter().all(|g| g.is_directed()));
    assert_eq!(graphs[1].edge_count(), 2);
    assert!(graphs[2].has_edge(&"f", &"f"));
}

#[test]
fn empty_graph_has_no_components() {
    let g = SparseGraph::new(false, Vec::<u32>::new(), Vec::<Edge<u32>>::new()).unwrap();
    assert!(components(&g).is_empty());
}

proptest! {
    #[test]
    fn prop_components_partition_nodes(
        n in 1usize..14,
        pairs in prop::collection::vec((0usize..14, 0usize..14), 0..20),
    ) {
        let edges: Vec<Edge<usize>> = pairs
            .into_iter()
            .filter(|&(v, w)| v < n && w < n)
            .map(|(v, w)| Edge::new(v, w))
            .collect();
        let g = SparseGraph::new(false, 0..n, edges).unwrap();
        let comps = components(&g);

        let total: usize = comps.iter().map(|c| c.len()).sum();
        prop_assert_eq!(total, n);
        let mut seen: NodeSet<usize> = NodeSet::default();
        for c in &comps {
            for v in c {
                prop_assert!(seen.insert(*v));
            }
        }

        for (i, ci) in comps.iter().enumerate() {
            for (j, cj) in comps.iter().enumerate() {
                for x in ci {
                    for y in cj {
                        let d = geodesic_distance(&g, x, y);
                        prop_assert_eq!(d.is_some(), i == j);
                    }
                }
            }
        }
    }
}
