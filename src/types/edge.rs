//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::location::LocationId;

/// An edge is a directed, priced connection between two locations.
///
/// A connection from `origin` to `destination` says nothing about the
/// reverse direction; if the catalog sells both legs, it lists both
/// edges. The price is assumed to be non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Where the connection departs from.
    pub origin: LocationId,

    /// Where the connection arrives.
    pub destination: LocationId,

    /// The fare charged for traversing this connection.
    pub price: OrderedFloat<f64>,
}

impl Edge {
    /// Creates an edge from borrowed identifiers and a raw price.
    pub fn new(origin: &str, destination: &str, price: f64) -> Edge {
        Edge {
            origin: origin.to_string(),
            destination: destination.to_string(),
            price: OrderedFloat(price),
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
