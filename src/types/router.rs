//! The core of the fare routing library.
//!
//! The engine module folds a catalog snapshot into a directed graph
//! and runs a best-first search over it to find the cheapest itinerary
//! between two locations.

/// The routing engine module.
pub mod engine {
    use std::cmp::Ordering;
    use std::collections::{BinaryHeap, HashMap, HashSet};

    use log::debug;
    use ordered_float::OrderedFloat;
    use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph, visit::EdgeRef};

    use crate::{
        edge::Edge, itinerary::Itinerary, location::LocationId, utils::graph::fold_edges,
    };

    /// A Router holds a graph of locations and a hashmap that maps a
    /// location identifier to its index in the graph.
    ///
    /// The graph is built once from a catalog snapshot and never
    /// mutated afterwards. A router is a local value owned by the
    /// query it serves; nothing is cached across queries, so any
    /// number of routers may be built and searched in parallel.
    #[derive(Debug)]
    pub struct Router {
        graph: StableDiGraph<LocationId, OrderedFloat<f64>>,
        node_indices: HashMap<LocationId, NodeIndex>,
    }

    /// A search entry awaiting expansion.
    ///
    /// Ordered so that the entry with the lowest cumulative cost wins;
    /// on equal costs the entry with the lowest insertion sequence
    /// number wins, so ties resolve to the entry pushed earliest.
    /// [`BinaryHeap`] is a max-heap, hence the reversed comparisons.
    struct FrontierEntry {
        cost: OrderedFloat<f64>,
        seq: usize,
        vertex: NodeIndex,
        stops: Vec<NodeIndex>,
    }

    impl PartialEq for FrontierEntry {
        fn eq(&self, other: &Self) -> bool {
            self.cost == other.cost && self.seq == other.seq
        }
    }

    impl Eq for FrontierEntry {}

    impl Ord for FrontierEntry {
        fn cmp(&self, other: &Self) -> Ordering {
            other
                .cost
                .cmp(&self.cost)
                .then_with(|| other.seq.cmp(&self.seq))
        }
    }

    impl PartialOrd for FrontierEntry {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Router {
        /// Creates a new router from a catalog snapshot.
        ///
        /// Each edge is folded into the graph in snapshot order. When
        /// two edges share the same origin and destination, the later
        /// one replaces the earlier one; the router does not keep the
        /// cheaper of the two.
        ///
        /// # Arguments
        /// * `edges` - The full edge snapshot handed over by the
        ///   catalog.
        pub fn new(edges: &[Edge]) -> Router {
            let (graph, node_indices) = fold_edges(edges);
            debug!(
                "router ready: {} locations, {} connections",
                graph.node_count(),
                graph.edge_count()
            );
            Router {
                graph,
                node_indices,
            }
        }

        /// Get the number of locations in the graph.
        pub fn location_count(&self) -> usize {
            self.graph.node_count()
        }

        /// Get the number of connections in the graph. Duplicate
        /// catalog rows collapse into a single connection.
        pub fn connection_count(&self) -> usize {
            self.graph.edge_count()
        }

        /// Finds the cheapest itinerary between two locations.
        ///
        /// Runs a best-first search over the non-negative fares: the
        /// frontier entry with the lowest cumulative cost is expanded
        /// first, so the first time the destination is selected its
        /// cost is final. Stale frontier entries for locations that
        /// were already finalized are discarded as they surface.
        ///
        /// A query for `from == to` is answered with a single-stop,
        /// zero-cost itinerary without consulting the graph, whatever
        /// the snapshot contains.
        ///
        /// # Arguments
        /// * `from` - Identifier of the starting location.
        /// * `to` - Identifier of the destination location.
        ///
        /// # Returns
        /// The cheapest itinerary, or [`None`] when no sequence of
        /// connections leads from `from` to `to`.
        pub fn find_cheapest_path(&self, from: &str, to: &str) -> Option<Itinerary> {
            if from == to {
                return Some(Itinerary {
                    stops: vec![from.to_string()],
                    cost: 0.0,
                });
            }

            let start = *self.node_indices.get(from)?;
            let end = *self.node_indices.get(to)?;

            let mut frontier = BinaryHeap::new();
            let mut finalized: HashSet<NodeIndex> = HashSet::new();
            let mut seq: usize = 0;

            frontier.push(FrontierEntry {
                cost: OrderedFloat(0.0),
                seq,
                vertex: start,
                stops: vec![start],
            });

            while let Some(entry) = frontier.pop() {
                if entry.vertex == end {
                    return Some(self.to_itinerary(entry));
                }

                if !finalized.insert(entry.vertex) {
                    // A cheaper route to this location was already
                    // finalized by an earlier pop.
                    continue;
                }

                for connection in self.graph.edges(entry.vertex) {
                    let next = connection.target();
                    if finalized.contains(&next) {
                        continue;
                    }
                    let mut stops = entry.stops.clone();
                    stops.push(next);
                    seq += 1;
                    frontier.push(FrontierEntry {
                        cost: entry.cost + *connection.weight(),
                        seq,
                        vertex: next,
                        stops,
                    });
                }
            }

            None
        }

        /// Resolves the node indices accumulated by the search back to
        /// location identifiers.
        fn to_itinerary(&self, entry: FrontierEntry) -> Itinerary {
            Itinerary {
                stops: entry
                    .stops
                    .iter()
                    .map(|index| self.graph[*index].clone())
                    .collect(),
                cost: entry.cost.into_inner(),
            }
        }
    }

    /// Finds the cheapest itinerary between two locations given a
    /// catalog snapshot.
    ///
    /// Builds a graph that lives for this one call and searches it.
    ///
    /// # Arguments
    /// * `edges` - The full edge snapshot handed over by the catalog.
    /// * `from` - Identifier of the starting location.
    /// * `to` - Identifier of the destination location.
    ///
    /// # Returns
    /// The cheapest itinerary, or [`None`] when no route exists.
    pub fn find_best_route(edges: &[Edge], from: &str, to: &str) -> Option<Itinerary> {
        Router::new(edges).find_cheapest_path(from, to)
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod router_tests {
    use crate::edge::Edge;
    use crate::generator::generate_catalog;
    use crate::types::router::engine::{find_best_route, Router};

    #[test]
    fn test_direct_connection() {
        let edges = vec![Edge::new("GRU", "CDG", 100.0)];

        let itinerary = find_best_route(&edges, "GRU", "CDG").unwrap();

        assert_eq!(itinerary.stops, vec!["GRU", "CDG"]);
        assert_eq!(itinerary.cost, 100.0);
    }

    #[test]
    fn test_no_route_between_disconnected_locations() {
        let edges = vec![Edge::new("GRU", "CDG", 100.0)];

        assert!(find_best_route(&edges, "GRU", "MIA").is_none());
    }

    #[test]
    fn test_multi_hop_beats_expensive_direct_connection() {
        let edges = vec![
            Edge::new("GRU", "BRC", 100.0),
            Edge::new("BRC", "SCL", 100.0),
            Edge::new("GRU", "SCL", 500.0),
        ];

        let itinerary = find_best_route(&edges, "GRU", "SCL").unwrap();

        assert_eq!(itinerary.stops, vec!["GRU", "BRC", "SCL"]);
        assert_eq!(itinerary.cost, 200.0);
    }

    /// A same-place query never consults the graph, so it succeeds
    /// even when the location appears in no edge at all.
    #[test]
    fn test_same_place_query_shortcut() {
        let itinerary = find_best_route(&[], "GRU", "GRU").unwrap();
        assert_eq!(itinerary.stops, vec!["GRU"]);
        assert_eq!(itinerary.cost, 0.0);

        let edges = vec![Edge::new("CDG", "SCL", 30.0)];
        let itinerary = find_best_route(&edges, "GRU", "GRU").unwrap();
        assert_eq!(itinerary.stops, vec!["GRU"]);
        assert_eq!(itinerary.cost, 0.0);
    }

    /// Duplicate catalog rows for the same pair are resolved by the
    /// later row, even when the earlier one was cheaper.
    #[test]
    fn test_duplicate_rows_later_one_wins() {
        let edges = vec![Edge::new("GRU", "CDG", 100.0), Edge::new("GRU", "CDG", 50.0)];
        let itinerary = find_best_route(&edges, "GRU", "CDG").unwrap();
        assert_eq!(itinerary.cost, 50.0);

        let edges = vec![Edge::new("GRU", "CDG", 50.0), Edge::new("GRU", "CDG", 100.0)];
        let itinerary = find_best_route(&edges, "GRU", "CDG").unwrap();
        assert_eq!(itinerary.cost, 100.0);
    }

    #[test]
    fn test_no_implicit_reverse_connection() {
        let edges = vec![Edge::new("GRU", "CDG", 100.0)];

        assert!(find_best_route(&edges, "CDG", "GRU").is_none());
    }

    #[test]
    fn test_start_absent_from_catalog() {
        let edges = vec![Edge::new("GRU", "CDG", 100.0)];

        assert!(find_best_route(&edges, "MIA", "CDG").is_none());
    }

    #[test]
    fn test_empty_catalog_has_no_routes() {
        assert!(find_best_route(&[], "GRU", "CDG").is_none());
    }

    /// A cyclic catalog must terminate: finalized locations are never
    /// expanded twice.
    #[test]
    fn test_cycle_terminates() {
        let edges = vec![
            Edge::new("GRU", "CDG", 1.0),
            Edge::new("CDG", "GRU", 1.0),
            Edge::new("GRU", "SCL", 10.0),
        ];

        let itinerary = find_best_route(&edges, "GRU", "SCL").unwrap();

        assert_eq!(itinerary.stops, vec!["GRU", "SCL"]);
        assert_eq!(itinerary.cost, 10.0);
    }

    /// A self-loop row is folded into the graph but can never appear
    /// inside an itinerary.
    #[test]
    fn test_self_loop_is_harmless() {
        let edges = vec![Edge::new("GRU", "GRU", 10.0), Edge::new("GRU", "CDG", 5.0)];

        let itinerary = find_best_route(&edges, "GRU", "CDG").unwrap();
        assert_eq!(itinerary.stops, vec!["GRU", "CDG"]);
        assert_eq!(itinerary.cost, 5.0);

        let itinerary = find_best_route(&edges, "GRU", "GRU").unwrap();
        assert_eq!(itinerary.stops, vec!["GRU"]);
        assert_eq!(itinerary.cost, 0.0);
    }

    #[test]
    fn test_zero_price_connections() {
        let edges = vec![Edge::new("GRU", "CDG", 0.0), Edge::new("CDG", "SCL", 0.0)];

        let itinerary = find_best_route(&edges, "GRU", "SCL").unwrap();

        assert_eq!(itinerary.stops, vec!["GRU", "CDG", "SCL"]);
        assert_eq!(itinerary.cost, 0.0);
    }

    /// Two itineraries tie on cost; whichever the tie-break selects,
    /// it must be the same one on every invocation.
    #[test]
    fn test_cost_tie_resolves_deterministically() {
        let edges = vec![
            Edge::new("GRU", "BRC", 1.0),
            Edge::new("GRU", "MVD", 1.0),
            Edge::new("BRC", "SCL", 1.0),
            Edge::new("MVD", "SCL", 1.0),
        ];

        let first = find_best_route(&edges, "GRU", "SCL").unwrap();
        assert_eq!(first.cost, 2.0);
        assert_eq!(first.stops.len(), 3);

        for _ in 0..10 {
            assert_eq!(find_best_route(&edges, "GRU", "SCL").unwrap(), first);
        }
    }

    /// Identical snapshots must produce identical answers, including
    /// across independently built routers.
    #[test]
    fn test_repeated_queries_are_identical() {
        let mut edges = generate_catalog(40, 4, 7);
        // Pin down one reachable pair regardless of what the seed
        // produced.
        edges.push(Edge::new("AAA", "AAZ", 120.0));

        let first = find_best_route(&edges, "AAA", "AAZ");
        assert!(first.is_some());

        for _ in 0..5 {
            assert_eq!(find_best_route(&edges, "AAA", "AAZ"), first);
        }
    }

    #[test]
    fn test_counts_collapse_duplicate_pairs() {
        let edges = vec![
            Edge::new("GRU", "CDG", 100.0),
            Edge::new("GRU", "CDG", 50.0),
            Edge::new("CDG", "SCL", 20.0),
        ];

        let router = Router::new(&edges);

        assert_eq!(router.location_count(), 3);
        assert_eq!(router.connection_count(), 2);
    }

    /// The two-step form and the one-shot helper agree.
    #[test]
    fn test_router_and_helper_agree() {
        let edges = generate_catalog(20, 3, 99);

        let router = Router::new(&edges);
        for (from, to) in [("AAA", "AAB"), ("AAB", "AAC"), ("AAC", "AAA")] {
            assert_eq!(
                router.find_cheapest_path(from, to),
                find_best_route(&edges, from, to)
            );
        }
    }
}
