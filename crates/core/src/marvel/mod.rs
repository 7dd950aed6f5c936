/// Marvel catalog service transformations
///
/// This module contains pure functions for talking to the Marvel catalog
/// service: request signing, URL composition, wire types, and the mapping of
/// wire records into publisher-agnostic metadata records.
/// All functions are free of I/O operations and testable with fixture data.
pub mod auth;
pub mod dates;
pub mod records;
pub mod reference;
pub mod series;
pub mod transform;
pub mod wire;

/// Publisher name stamped on every record produced from this service
pub const PUBLISHER_NAME: &str = "Marvel";

/// Default gateway for the public API
pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com";
