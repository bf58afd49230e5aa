//! Stateless algorithms over any [`Graph`](crate::Graph).
//!
//! Every function takes the graph by shared reference and accepts both concrete graphs and
//! `&dyn Graph<V>`. Results use graph node order wherever an order is observable.

pub mod adjacency;
pub mod betweenness;
pub mod components;
pub mod contract;
pub mod degree;
pub mod geodesic;
pub mod print;
pub mod search;
pub mod subgraph;

pub use adjacency::{adjacency_matrix, adjacency_powers};
pub use betweenness::betweenness_centrality;
pub use components::{component_graphs, components, components_of_adjacency, components_of_edges};
pub use contract::{contract, contract_components, contract_edges};
pub use degree::degree_distribution;
pub use geodesic::{GeodesicTree, geodesic_distance, geodesic_distances, geodesic_tree};
pub use print::graph_to_string;
pub use search::{ShortestPaths, breadth_first_search, dijkstra_search, shortest_paths};
pub use subgraph::{copy_subgraph, core};
