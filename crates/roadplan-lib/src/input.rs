//! Parser for the structured routing input format.
//!
//! The input carries three sections:
//! - `[CITIES]` with `id: name` lines,
//! - `[ROADS]` with `u-v: length,time,cost` lines,
//! - `[REQUESTS]` with `Origin -> Destination | LTC` lines, where the
//!   criterion letters appear in priority order (duplicates permitted).
//!
//! Blank lines are skipped and surrounding whitespace is ignored.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::RoadNetwork;
use crate::routing::{Criterion, TravelRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Cities,
    Roads,
    Requests,
}

/// Parse the full input text into a road network and its request list.
pub fn parse_input(text: &str) -> Result<(RoadNetwork, Vec<TravelRequest>)> {
    let mut network = RoadNetwork::new();
    let mut requests = Vec::new();
    let mut section = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let line_no = index + 1;
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = Some(match line {
                "[CITIES]" => Section::Cities,
                "[ROADS]" => Section::Roads,
                "[REQUESTS]" => Section::Requests,
                _ => return Err(invalid(line_no, format!("unknown section {line}"))),
            });
            continue;
        }

        match section {
            Some(Section::Cities) => parse_city(&mut network, line, line_no)?,
            Some(Section::Roads) => parse_road(&mut network, line, line_no)?,
            Some(Section::Requests) => requests.push(parse_request(line, line_no)?),
            None => {
                return Err(invalid(
                    line_no,
                    "content before the first section header".to_string(),
                ))
            }
        }
    }

    debug!(
        locations = network.num_locations(),
        requests = requests.len(),
        "parsed routing input",
    );
    Ok((network, requests))
}

fn invalid(line: usize, message: String) -> Error {
    Error::InvalidInput { line, message }
}

fn parse_city(network: &mut RoadNetwork, line: &str, line_no: usize) -> Result<()> {
    let (id, name) = line
        .split_once(':')
        .ok_or_else(|| invalid(line_no, "expected `id: name`".to_string()))?;
    let id = parse_number(id, line_no)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid(line_no, "empty location name".to_string()));
    }
    network.add_location(id, name)
}

fn parse_road(network: &mut RoadNetwork, line: &str, line_no: usize) -> Result<()> {
    let (endpoints, weights) = line
        .split_once(':')
        .ok_or_else(|| invalid(line_no, "expected `u-v: length,time,cost`".to_string()))?;
    let (u, v) = endpoints
        .split_once('-')
        .ok_or_else(|| invalid(line_no, "expected `u-v` endpoints".to_string()))?;
    let u = parse_number(u, line_no)?;
    let v = parse_number(v, line_no)?;

    let mut parts = weights.split(',');
    let (length, time, cost) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(length), Some(time), Some(cost), None) => (
            parse_number(length, line_no)?,
            parse_number(time, line_no)?,
            parse_number(cost, line_no)?,
        ),
        _ => {
            return Err(invalid(
                line_no,
                "expected exactly three weights `length,time,cost`".to_string(),
            ))
        }
    };

    network.add_road(u, v, length, time, cost)
}

fn parse_request(line: &str, line_no: usize) -> Result<TravelRequest> {
    let (route, letters) = line.split_once('|').ok_or_else(|| {
        invalid(
            line_no,
            "expected `Origin -> Destination | criteria`".to_string(),
        )
    })?;
    let (origin, destination) = route
        .split_once("->")
        .ok_or_else(|| invalid(line_no, "expected `Origin -> Destination`".to_string()))?;
    let origin = origin.trim();
    let destination = destination.trim();
    if origin.is_empty() || destination.is_empty() {
        return Err(invalid(
            line_no,
            "empty origin or destination name".to_string(),
        ));
    }

    // Criterion letters may be written contiguously or separated by commas
    // or spaces; order is the priority order and duplicates are kept.
    let mut priorities = Vec::new();
    for symbol in letters.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        priorities.push(Criterion::from_symbol(symbol)?);
    }
    if priorities.is_empty() {
        return Err(invalid(line_no, "request lists no criteria".to_string()));
    }

    Ok(TravelRequest {
        origin: origin.to_string(),
        destination: destination.to_string(),
        priorities,
    })
}

fn parse_number<T: std::str::FromStr>(field: &str, line_no: usize) -> Result<T> {
    let field = field.trim();
    field
        .parse()
        .map_err(|_| invalid(line_no, format!("invalid number `{field}`")))
}
