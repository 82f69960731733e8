use std::collections::HashMap;

use crate::error::{Error, Result};

/// Numeric identifier for a location in the road network.
pub type LocationId = u32;

/// A named place in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

/// Directed arc of the road network with its three weight dimensions.
///
/// Undirected roads are stored as two mirrored arcs sharing identical
/// weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub target: LocationId,
    pub length: u64,
    pub time: u64,
    pub cost: u64,
}

/// In-memory road network: registered locations plus the outgoing arcs of
/// each one. Built once at load time and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    locations: HashMap<LocationId, Location>,
    name_to_id: HashMap<String, LocationId>,
    adjacency: HashMap<LocationId, Vec<Road>>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location. Re-registering the same id with the same name is
    /// a no-op; a conflicting registration is an error so the name<->id
    /// mapping stays bijective.
    pub fn add_location(&mut self, id: LocationId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if let Some(existing) = self.locations.get(&id) {
            if existing.name == name {
                return Ok(());
            }
            return Err(Error::DuplicateLocation { id });
        }
        if self.name_to_id.contains_key(&name) {
            return Err(Error::DuplicateLocationName { name });
        }

        self.name_to_id.insert(name.clone(), id);
        self.adjacency.entry(id).or_default();
        self.locations.insert(id, Location { id, name });
        Ok(())
    }

    /// Insert an undirected road as a mirrored pair of arcs. Both endpoints
    /// must already be registered.
    pub fn add_road(
        &mut self,
        u: LocationId,
        v: LocationId,
        length: u64,
        time: u64,
        cost: u64,
    ) -> Result<()> {
        for endpoint in [u, v] {
            if !self.locations.contains_key(&endpoint) {
                return Err(Error::UnknownLocationId { id: endpoint });
            }
        }

        self.adjacency.entry(u).or_default().push(Road {
            target: v,
            length,
            time,
            cost,
        });
        self.adjacency.entry(v).or_default().push(Road {
            target: u,
            length,
            time,
            cost,
        });
        Ok(())
    }

    /// Outgoing arcs of a location, empty when it has none or is unknown.
    pub fn neighbours(&self, location: LocationId) -> &[Road] {
        self.adjacency
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the identifier is registered.
    pub fn contains(&self, location: LocationId) -> bool {
        self.locations.contains_key(&location)
    }

    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.locations.get(&id).map(|location| location.name.as_str())
    }

    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// Names most similar to a (likely misspelled) query, best match first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        const MIN_SIMILARITY: f64 = 0.7;

        let mut scored: Vec<(f64, &str)> = self
            .name_to_id
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}
