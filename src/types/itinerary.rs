//! Definition of the [`Itinerary`] type.

use serde::Serialize;

use crate::location::LocationId;

/// The result of a successful route query: the ordered list of
/// locations to travel through and the total fare.
///
/// Invariant: `stops` begins at the queried origin and ends at the
/// queried destination, and for every adjacent pair of stops the
/// catalog snapshot contained a connection with exactly the price that
/// was summed into `cost`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Locations visited, in travel order. Never empty; a same-place
    /// query yields a single stop.
    pub stops: Vec<LocationId>,

    /// Sum of the fares of the connections traversed. `0.0` for a
    /// same-place query.
    pub cost: f64,
}
