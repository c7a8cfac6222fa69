use std::fmt;
use std::io::{self, Write};
use serde::{Deserialize, Serialize};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::network::Network;
use crate::protocol::{build_routing_table, LinkRecord, RoutingEntry};
use crate::{NodeName, Weight};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborRow {
    pub neighbor: NodeName,
    pub weight: Weight,
}

/// Snapshot of one node's neighbor table, LSDB and a freshly computed
/// routing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeReport {
    pub node: NodeName,
    pub neighbors: Vec<NeighborRow>,
    pub lsdb: Vec<LinkRecord>,
    pub routes: Vec<RoutingEntry>,
}

impl NodeReport {
    pub fn capture(network: &Network, name: &str) -> Result<Self> {
        let node = network.node(name)?;
        let routes = build_routing_table(network, name)?;

        Ok(Self {
            node: node.name.clone(),
            neighbors: node
                .neighbors
                .iter()
                .map(|(neighbor, &weight)| NeighborRow {
                    neighbor: neighbor.clone(),
                    weight,
                })
                .collect(),
            lsdb: node.lsdb.iter().cloned().collect(),
            routes: routes.iter().cloned().collect(),
        })
    }

    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => write!(out, "{}", self),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
        }
    }
}

impl fmt::Display for NodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Neighbour Table:", self.node)?;
        for row in &self.neighbors {
            writeln!(f, "{}|{}", row.neighbor, row.weight)?;
        }
        writeln!(f)?;

        writeln!(f, "{} LSDB:", self.node)?;
        for record in &self.lsdb {
            writeln!(f, "{}", record)?;
        }
        writeln!(f)?;

        writeln!(f, "{} Routing Table:", self.node)?;
        for route in &self.routes {
            writeln!(f, "{}", route)?;
        }
        writeln!(f)
    }
}
