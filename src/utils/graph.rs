//! Helper functons for working with graphs.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph};

use crate::edge::Edge;
use crate::location::LocationId;

/// Folds a catalog snapshot into an adjacency graph.
///
/// Every location named by an edge becomes a node, and every edge
/// becomes a directed connection weighted by its price. When two edges
/// share the same (origin, destination) pair, the one appearing later
/// in the snapshot replaces the earlier one; the fold does not keep
/// the cheaper of the two.
///
/// Prices must be non-negative. The search built on top of this graph
/// is only correct under that assumption, so debug builds assert it.
///
/// # Arguments
/// * `edges` - The full edge snapshot handed over by the catalog.
///
/// # Returns
/// The graph and a map from location identifier to its node index.
///
/// # Time Complexity
/// *O*(*e*) over the number of edges in the snapshot.
pub fn fold_edges(
    edges: &[Edge],
) -> (
    StableDiGraph<LocationId, OrderedFloat<f64>>,
    HashMap<LocationId, NodeIndex>,
) {
    let mut graph = StableDiGraph::new();
    let mut node_indices: HashMap<LocationId, NodeIndex> = HashMap::new();

    for edge in edges {
        debug_assert!(
            edge.price >= OrderedFloat(0.0),
            "negative fare on {} -> {}",
            edge.origin,
            edge.destination
        );
        let from_index = *node_indices
            .entry(edge.origin.clone())
            .or_insert_with(|| graph.add_node(edge.origin.clone()));
        let to_index = *node_indices
            .entry(edge.destination.clone())
            .or_insert_with(|| graph.add_node(edge.destination.clone()));
        // Later rows replace earlier ones for the same pair.
        graph.update_edge(from_index, to_index, edge.price);
    }

    (graph, node_indices)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
