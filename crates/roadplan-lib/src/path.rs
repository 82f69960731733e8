use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{LocationId, Road, RoadNetwork};
use crate::routing::Criterion;

/// Running totals of all three weight dimensions along one path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub length: u64,
    pub time: u64,
    pub cost: u64,
}

impl Totals {
    /// The accumulated value of one dimension.
    pub fn component(&self, criterion: Criterion) -> u64 {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Time => self.time,
            Criterion::Cost => self.cost,
        }
    }

    fn after(&self, road: &Road) -> Self {
        Self {
            length: self.length + road.length,
            time: self.time + road.time,
            cost: self.cost + road.cost,
        }
    }
}

/// Outcome of a single-criterion search: the predecessor relation over every
/// vertex relaxed before the destination settled, plus the destination's
/// accumulated totals (`None` when it was never reached).
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub predecessors: HashMap<LocationId, LocationId>,
    pub totals: Option<Totals>,
}

/// Dijkstra's algorithm over the chosen criterion, carrying the other two
/// dimensions along whichever path wins.
///
/// Stale frontier entries are discarded on extraction rather than removed
/// eagerly. The search stops the moment the destination is extracted; the
/// totals captured at that point are final.
pub fn shortest_path(
    network: &RoadNetwork,
    origin: LocationId,
    destination: LocationId,
    criterion: Criterion,
) -> Result<SearchOutcome> {
    for endpoint in [origin, destination] {
        if !network.contains(endpoint) {
            return Err(Error::UnknownLocationId { id: endpoint });
        }
    }

    let mut best: HashMap<LocationId, u64> = HashMap::new();
    let mut predecessors: HashMap<LocationId, LocationId> = HashMap::new();
    let mut queue = BinaryHeap::new();

    best.insert(origin, 0);
    queue.push(QueueEntry {
        node: origin,
        key: 0,
        totals: Totals::default(),
    });

    while let Some(entry) = queue.pop() {
        if let Some(&known) = best.get(&entry.node) {
            if entry.key > known {
                continue;
            }
        }

        if entry.node == destination {
            return Ok(SearchOutcome {
                predecessors,
                totals: Some(entry.totals),
            });
        }

        for road in network.neighbours(entry.node) {
            let candidate = entry.key + criterion.weight_of(road);
            if candidate < best.get(&road.target).copied().unwrap_or(u64::MAX) {
                best.insert(road.target, candidate);
                predecessors.insert(road.target, entry.node);
                queue.push(QueueEntry {
                    node: road.target,
                    key: candidate,
                    totals: entry.totals.after(road),
                });
            }
        }
    }

    Ok(SearchOutcome {
        predecessors,
        totals: None,
    })
}

/// Turn the predecessor relation into the ordered origin..=destination
/// vertex sequence.
///
/// Fails with [`Error::NoPath`] when the destination has no predecessor
/// entry and with [`Error::CyclicPredecessors`] when the backward walk
/// revisits a vertex before reaching the origin.
pub fn reconstruct_path(
    predecessors: &HashMap<LocationId, LocationId>,
    origin: LocationId,
    destination: LocationId,
) -> Result<Vec<LocationId>> {
    if origin == destination {
        return Ok(vec![origin]);
    }
    if !predecessors.contains_key(&destination) {
        return Err(Error::NoPath);
    }

    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut current = destination;
    while current != origin {
        if !visited.insert(current) {
            return Err(Error::CyclicPredecessors);
        }
        path.push(current);
        match predecessors.get(&current) {
            Some(&previous) => current = previous,
            None => return Err(Error::NoPath),
        }
    }
    path.push(origin);
    path.reverse();
    Ok(path)
}

#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    node: LocationId,
    key: u64,
    totals: Totals,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.node == other.node
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by key.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
