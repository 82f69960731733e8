use thiserror::Error;

use crate::model::LocationId;

/// Convenient result alias for the roadplan library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name could not be found in the network.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a road or query references an identifier that was never
    /// registered.
    #[error("unknown location id: {id}")]
    UnknownLocationId { id: LocationId },

    /// Raised when the same identifier is registered twice with conflicting
    /// names.
    #[error("location id {id} already registered under a different name")]
    DuplicateLocation { id: LocationId },

    /// Raised when the same name is registered for two different identifiers.
    #[error("duplicate location name: {name}")]
    DuplicateLocationName { name: String },

    /// The destination has no predecessor entry: the search never reached it.
    #[error("destination was never reached")]
    NoPath,

    /// Defensive guard: the predecessor chain revisited a vertex before
    /// reaching the origin.
    #[error("cycle detected while reconstructing the route")]
    CyclicPredecessors,

    /// Raised when no route exists between two named locations.
    #[error("no route found between {origin} and {destination}")]
    RouteNotFound { origin: String, destination: String },

    /// Raised when a request carries an empty criteria list.
    #[error("request lists no criteria")]
    EmptyCriteria,

    /// Raised when a request uses a criterion symbol outside the recognised
    /// alphabet.
    #[error("unknown criterion symbol: {symbol}")]
    UnknownCriterion { symbol: char },

    /// Raised when an input line does not match the expected section format.
    #[error("invalid input at line {line}: {message}")]
    InvalidInput { line: usize, message: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
