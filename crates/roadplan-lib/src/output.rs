//! Structured summaries and text rendering of request evaluations.

use std::fmt::Write;

use serde::Serialize;

use crate::model::RoadNetwork;
use crate::path::Totals;
use crate::routing::{Criterion, CriterionRoute, RequestOutcome, RequestReport};

/// Evaluation status of one request.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Planned,
    AlreadyAtDestination,
    Failed,
}

/// One route with resolved place names: the criterion it optimises, the
/// name path, and the three accumulated totals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteLine {
    pub criterion: Criterion,
    pub path: Vec<String>,
    pub totals: Totals,
}

/// Structured representation of one evaluated request that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestSummary {
    pub origin: String,
    pub destination: String,
    pub priorities: Vec<Criterion>,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compromise: Option<RouteLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RequestSummary {
    /// Build a summary from a report, resolving vertex ids to place names.
    pub fn from_report(network: &RoadNetwork, report: &RequestReport) -> Self {
        let request = &report.request;
        let (status, routes, compromise, error) = match &report.outcome {
            Ok(RequestOutcome::AlreadyAtDestination) => {
                (RequestStatus::AlreadyAtDestination, Vec::new(), None, None)
            }
            Ok(RequestOutcome::Planned { routes, compromise }) => (
                RequestStatus::Planned,
                routes
                    .iter()
                    .map(|route| route_line(network, route))
                    .collect(),
                Some(route_line(network, compromise)),
                None,
            ),
            Err(error) => (RequestStatus::Failed, Vec::new(), None, Some(error.to_string())),
        };

        Self {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            priorities: request.priorities.clone(),
            status,
            routes,
            compromise,
            error,
        }
    }
}

/// Render summaries as the output text format: one block per request,
/// blocks separated by a blank line.
pub fn render_text(summaries: &[RequestSummary]) -> String {
    let mut buffer = String::new();
    for (index, summary) in summaries.iter().enumerate() {
        if index > 0 {
            buffer.push('\n');
        }
        render_block(&mut buffer, summary);
    }
    buffer
}

fn render_block(buffer: &mut String, summary: &RequestSummary) {
    let priorities = summary
        .priorities
        .iter()
        .map(|criterion| criterion.symbol().to_string())
        .collect::<Vec<_>>()
        .join("|");
    let _ = writeln!(
        buffer,
        "{} -> {} | ({})",
        summary.origin, summary.destination, priorities
    );

    match summary.status {
        RequestStatus::AlreadyAtDestination => {
            let _ = writeln!(buffer, "Already at the destination");
        }
        RequestStatus::Failed => {
            let _ = writeln!(
                buffer,
                "Could not complete: {}",
                summary.error.as_deref().unwrap_or("unknown error")
            );
        }
        RequestStatus::Planned => {
            for line in &summary.routes {
                render_route_line(buffer, line.criterion.label(), line);
            }
            if let Some(compromise) = &summary.compromise {
                render_route_line(buffer, "COMPROMISE", compromise);
            }
        }
    }
}

fn render_route_line(buffer: &mut String, label: &str, line: &RouteLine) {
    let _ = writeln!(
        buffer,
        "{}: {} | L={}, T={}, C={}",
        label,
        line.path.join(" -> "),
        line.totals.length,
        line.totals.time,
        line.totals.cost
    );
}

fn route_line(network: &RoadNetwork, route: &CriterionRoute) -> RouteLine {
    RouteLine {
        criterion: route.criterion,
        path: route
            .steps
            .iter()
            .map(|&id| network.location_name(id).unwrap_or("<unknown>").to_string())
            .collect(),
        totals: route.totals,
    }
}
