use std::collections::BTreeMap;
use std::fmt;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::algorithms::{shortest_paths, ShortestPaths};
use crate::error::Result;
use crate::network::Network;
use crate::{Cost, NodeName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingEntry {
    pub destination: NodeName,
    pub next_hop: NodeName,
    pub cost: Cost,
}

impl fmt::Display for RoutingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.destination, self.next_hop, self.cost)
    }
}

/// One-hop forwarding view for a single source. A snapshot: it is not
/// patched when the topology changes, rebuild it instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingTable {
    entries: BTreeMap<NodeName, RoutingEntry>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from a finished Dijkstra run. Unreachable
    /// destinations are left out.
    pub fn from_paths(paths: &ShortestPaths) -> Self {
        let mut table = Self::new();
        for (dest, &cost) in &paths.cost {
            if *dest == paths.source || !paths.is_reachable(dest) {
                continue;
            }
            match paths.next_hop(dest) {
                Some(next_hop) => table.add_route(RoutingEntry {
                    destination: dest.clone(),
                    next_hop: next_hop.clone(),
                    cost,
                }),
                None => debug!("No predecessor chain from {} to {}", paths.source, dest),
            }
        }
        table
    }

    pub fn add_route(&mut self, entry: RoutingEntry) {
        self.entries.insert(entry.destination.clone(), entry);
    }

    pub fn route(&self, destination: &str) -> Option<&RoutingEntry> {
        self.entries.get(destination)
    }

    /// Entries sorted by destination.
    pub fn iter(&self) -> impl Iterator<Item = &RoutingEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs Dijkstra from `source` on the current topology and turns the
/// result into a routing table.
pub fn build_routing_table(network: &Network, source: &str) -> Result<RoutingTable> {
    let paths = shortest_paths(network, source)?;
    let table = RoutingTable::from_paths(&paths);
    debug!("Routing table for {}: {} route(s)", source, table.len());
    Ok(table)
}
