//! Request evaluation for multi-criterion trip planning.
//!
//! Each request runs one shortest-path search per criterion in its priority
//! list, reconstructs the winning path, and then selects a compromise route:
//! the per-criterion result whose totals, read off in priority order, are
//! lexicographically smallest.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{LocationId, Road, RoadNetwork};
use crate::path::{reconstruct_path, shortest_path, Totals};

/// One of the three independent weight dimensions a route can be optimised
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Length,
    Time,
    Cost,
}

impl Criterion {
    /// Single-letter symbol used by the request input format.
    pub fn symbol(self) -> char {
        match self {
            Criterion::Length => 'L',
            Criterion::Time => 'T',
            Criterion::Cost => 'C',
        }
    }

    /// Parse a request symbol from the `L`/`T`/`C` alphabet.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'L' => Ok(Criterion::Length),
            'T' => Ok(Criterion::Time),
            'C' => Ok(Criterion::Cost),
            _ => Err(Error::UnknownCriterion { symbol }),
        }
    }

    /// Uppercase label used in rendered output lines.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Length => "LENGTH",
            Criterion::Time => "TIME",
            Criterion::Cost => "COST",
        }
    }

    /// The weight of one arc in this dimension.
    pub(crate) fn weight_of(self, road: &Road) -> u64 {
        match self {
            Criterion::Length => road.length,
            Criterion::Time => road.time,
            Criterion::Cost => road.cost,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A trip query: origin and destination names plus the criteria to optimise,
/// most important first. Duplicate criteria are kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelRequest {
    pub origin: String,
    pub destination: String,
    pub priorities: Vec<Criterion>,
}

/// The optimal route for one criterion: the totals of all three dimensions
/// accumulated along it plus its vertex sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionRoute {
    pub criterion: Criterion,
    pub totals: Totals,
    pub steps: Vec<LocationId>,
}

/// Result of planning a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Origin and destination are the same location; nothing to compute.
    AlreadyAtDestination,
    /// One route per requested criterion occurrence plus the compromise.
    Planned {
        routes: Vec<CriterionRoute>,
        compromise: CriterionRoute,
    },
}

/// A request paired with its evaluation result.
#[derive(Debug)]
pub struct RequestReport {
    pub request: TravelRequest,
    pub outcome: Result<RequestOutcome>,
}

/// Plan a single request.
///
/// The first criterion whose route cannot be found fails the whole request;
/// routes already computed for earlier criteria are discarded.
pub fn plan_request(network: &RoadNetwork, request: &TravelRequest) -> Result<RequestOutcome> {
    if request.priorities.is_empty() {
        return Err(Error::EmptyCriteria);
    }

    let origin = resolve_location(network, &request.origin)?;
    let destination = resolve_location(network, &request.destination)?;

    if origin == destination {
        return Ok(RequestOutcome::AlreadyAtDestination);
    }

    let mut routes = Vec::with_capacity(request.priorities.len());
    for &criterion in &request.priorities {
        let search = shortest_path(network, origin, destination, criterion)?;
        let steps =
            reconstruct_path(&search.predecessors, origin, destination).map_err(|err| {
                match err {
                    Error::NoPath => route_not_found(request),
                    other => other,
                }
            })?;
        // A reconstructed path implies the destination settled with totals.
        let totals = search.totals.ok_or_else(|| route_not_found(request))?;
        routes.push(CriterionRoute {
            criterion,
            totals,
            steps,
        });
    }

    let compromise = routes[select_compromise(&routes, &request.priorities)].clone();
    Ok(RequestOutcome::Planned { routes, compromise })
}

/// Evaluate a batch of requests strictly in order. A failed request is
/// reported in its own entry and never aborts the rest of the batch.
pub fn evaluate_requests(network: &RoadNetwork, requests: &[TravelRequest]) -> Vec<RequestReport> {
    requests
        .iter()
        .map(|request| {
            let outcome = plan_request(network, request);
            if let Err(error) = &outcome {
                debug!(
                    origin = %request.origin,
                    destination = %request.destination,
                    %error,
                    "request could not be completed",
                );
            }
            RequestReport {
                request: request.clone(),
                outcome,
            }
        })
        .collect()
}

fn route_not_found(request: &TravelRequest) -> Error {
    Error::RouteNotFound {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
    }
}

/// Resolve a location name, attaching fuzzy suggestions when unknown.
fn resolve_location(network: &RoadNetwork, name: &str) -> Result<LocationId> {
    network.location_id_by_name(name).ok_or_else(|| {
        let suggestions = network.fuzzy_location_matches(name, 3);
        Error::UnknownLocation {
            name: name.to_string(),
            suggestions,
        }
    })
}

/// Index of the route whose totals, reordered by the priority list, are
/// lexicographically smallest. Ties keep the first candidate.
fn select_compromise(routes: &[CriterionRoute], priorities: &[Criterion]) -> usize {
    routes
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            compromise_key(a, priorities).cmp(&compromise_key(b, priorities))
        })
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn compromise_key(route: &CriterionRoute, priorities: &[Criterion]) -> Vec<u64> {
    priorities
        .iter()
        .map(|&criterion| route.totals.component(criterion))
        .collect()
}
