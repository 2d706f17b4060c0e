//! Bridges the external route catalog and the routing engine.
//!
//! The catalog itself lives elsewhere, behind its own CRUD surface.
//! This module only captures the contract the engine relies on: hand
//! over the complete current list of edges on every query. The engine
//! builds a fresh graph per snapshot, so a router never outlives the
//! query it was built for and queries need no coordination.

use log::{debug, info};
use thiserror::Error;

use crate::edge::Edge;
use crate::itinerary::Itinerary;
use crate::location::LocationId;
use crate::router::engine::Router;

/// Query struct to find the cheapest itinerary between two locations.
///
/// Identifiers are matched against edge endpoints by exact string
/// equality; callers normalize them (trimming, case) before building
/// the query.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    /// Where the journey starts.
    pub from: LocationId,
    /// Where the journey ends.
    pub to: LocationId,
}

/// Errors surfaced to callers of [`best_route`].
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    /// No sequence of connections leads from the queried origin to
    /// the queried destination.
    #[error("no route from {from} to {to}")]
    NoRoute {
        /// Origin of the failed query.
        from: LocationId,
        /// Destination of the failed query.
        to: LocationId,
    },

    /// The catalog could not hand over a snapshot.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

/// A source of edge snapshots.
///
/// Implementations hand over the complete current list of connections.
/// There is no pagination and no incremental diff: a snapshot is
/// consumed by exactly one query and then discarded.
pub trait EdgeSource {
    /// Returns the full current list of connections.
    fn snapshot(&self) -> Result<Vec<Edge>, RouteError>;
}

/// A catalog held fully in memory.
#[derive(Debug)]
pub struct InMemoryCatalog {
    edges: Vec<Edge>,
}

impl InMemoryCatalog {
    /// Creates a catalog over the given edges.
    pub fn new(edges: Vec<Edge>) -> InMemoryCatalog {
        InMemoryCatalog { edges }
    }
}

impl EdgeSource for InMemoryCatalog {
    fn snapshot(&self) -> Result<Vec<Edge>, RouteError> {
        Ok(self.edges.clone())
    }
}

/// Answers a route query against a fresh catalog snapshot.
///
/// Fetches the full edge list, builds a router for this one call and
/// searches it.
///
/// # Arguments
/// * `source` - The catalog to snapshot.
/// * `query` - Normalized origin and destination identifiers.
///
/// # Returns
/// The cheapest itinerary, or a [`RouteError`] when the catalog is
/// unavailable or no route exists.
pub fn best_route(source: &dyn EdgeSource, query: &RouteQuery) -> Result<Itinerary, RouteError> {
    info!("finding route from {} to {}", query.from, query.to);
    let edges = source.snapshot()?;
    debug!("catalog snapshot: {} edges", edges.len());

    let router = Router::new(&edges);
    let itinerary = router
        .find_cheapest_path(&query.from, &query.to)
        .ok_or_else(|| RouteError::NoRoute {
            from: query.from.clone(),
            to: query.to.clone(),
        })?;

    debug!("stops: {:?}", itinerary.stops);
    debug!("cost: {}", itinerary.cost);
    Ok(itinerary)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
