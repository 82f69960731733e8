//! Roadplan library entry points.
//!
//! This crate parses the structured routing input, builds an immutable road
//! network, and answers per-request shortest-path queries: one optimal route
//! per requested criterion (length, time, cost) plus a compromise route that
//! balances the criteria according to the request's priority order.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use input::parse_input;
pub use model::{Location, LocationId, Road, RoadNetwork};
pub use output::{render_text, RequestStatus, RequestSummary, RouteLine};
pub use path::{reconstruct_path, shortest_path, SearchOutcome, Totals};
pub use routing::{
    evaluate_requests, plan_request, Criterion, CriterionRoute, RequestOutcome, RequestReport,
    TravelRequest,
};
