use std::collections::{BTreeMap, BTreeSet};
use log::trace;
use crate::error::Result;
use crate::network::Network;
use crate::{Cost, NodeName};

pub const INFINITE_COST: Cost = Cost::MAX;

/// Result of one Dijkstra run from `source`.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub source: NodeName,
    /// Every node of the network; unreachable ones stay at `INFINITE_COST`.
    pub cost: BTreeMap<NodeName, Cost>,
    /// Only reachable nodes other than the source have a predecessor.
    pub predecessor: BTreeMap<NodeName, NodeName>,
}

impl ShortestPaths {
    pub fn cost_to(&self, dest: &str) -> Option<Cost> {
        self.cost.get(dest).copied().filter(|&c| c != INFINITE_COST)
    }

    pub fn is_reachable(&self, dest: &str) -> bool {
        self.cost_to(dest).is_some()
    }

    /// First hop on the way from the source to `dest`. `None` for the
    /// source itself and for unreachable nodes.
    pub fn next_hop(&self, dest: &str) -> Option<&NodeName> {
        if dest == self.source {
            return None;
        }

        let mut current = self.predecessor.get_key_value(dest)?.0;
        loop {
            match self.predecessor.get(current) {
                Some(prev) if *prev == self.source => return Some(current),
                Some(prev) => current = prev,
                None => return None,
            }
        }
    }

    /// Hop list from the source to `dest`, both included.
    pub fn path_to(&self, dest: &str) -> Option<Vec<NodeName>> {
        if !self.is_reachable(dest) {
            return None;
        }

        let mut path = vec![dest.to_string()];
        let mut current = dest;
        while let Some(prev) = self.predecessor.get(current) {
            path.push(prev.clone());
            current = prev.as_str();
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra over the direct-neighbor weights of every node.
///
/// The frontier is scanned in name order and only a strictly smaller cost
/// displaces the current pick, so equal-cost candidates are finalised in
/// lexicographic order. O(V²), which is fine for simulated topologies.
pub fn shortest_paths(network: &Network, source: &str) -> Result<ShortestPaths> {
    network.node(source)?;

    let mut cost: BTreeMap<NodeName, Cost> = network
        .node_names()
        .map(|name| (name.clone(), INFINITE_COST))
        .collect();
    let mut predecessor: BTreeMap<NodeName, NodeName> = BTreeMap::new();
    let mut unvisited: BTreeSet<&NodeName> = network.node_names().collect();
    cost.insert(source.to_string(), 0);

    while !unvisited.is_empty() {
        let mut closest: Option<&NodeName> = None;
        let mut min_cost = INFINITE_COST;
        for &name in &unvisited {
            if cost[name] < min_cost {
                min_cost = cost[name];
                closest = Some(name);
            }
        }

        // Whatever is left is disconnected from the source.
        let Some(u) = closest else { break };
        unvisited.remove(u);
        trace!("Finalised {} at cost {}", u, min_cost);

        for (v, &weight) in network.neighbors_of(u)? {
            if !unvisited.contains(v) {
                continue;
            }
            let new_cost = min_cost.saturating_add(Cost::from(weight));
            if new_cost < cost[v] {
                cost.insert(v.clone(), new_cost);
                predecessor.insert(v.clone(), u.clone());
            }
        }
    }

    Ok(ShortestPaths {
        source: source.to_string(),
        cost,
        predecessor,
    })
}
