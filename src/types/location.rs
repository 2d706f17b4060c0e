//! Definition of the [`LocationId`] type.
//!
//! A location is identified by an opaque string token, typically an
//! IATA-style airport code such as `GRU` or `CDG`. The routing engine
//! attaches no structure to the token: two locations are the same
//! exactly when their identifiers compare equal as strings, and the
//! comparison is case sensitive. Trimming, case folding and any other
//! normalization happen on the caller's side before a query is made.

/// Opaque identifier of a place in the route network.
pub type LocationId = String;
