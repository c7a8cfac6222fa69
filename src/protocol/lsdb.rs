use std::collections::BTreeSet;
use std::fmt;
use log::trace;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::network::Network;
use crate::{NodeName, Weight};

/// A link declaration as held in an LSDB. Endpoints keep the order in which
/// the link was declared; the derived ordering is the order the LSDB lists
/// its records in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LinkRecord {
    pub from: NodeName,
    pub to: NodeName,
    pub weight: Weight,
}

impl LinkRecord {
    pub fn new(from: impl Into<NodeName>, to: impl Into<NodeName>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// True if this record describes the link between `a` and `b`, in
    /// either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.from, self.to, self.weight)
    }
}

/// A node's link-state database. Holds at most one record per endpoint pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lsdb {
    records: BTreeSet<LinkRecord>,
}

impl Lsdb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, dropping whatever was known about the same pair.
    pub fn replace(&mut self, record: LinkRecord) {
        self.remove_pair(&record.from, &record.to);
        self.records.insert(record);
    }

    /// Removes every record for the `a`-`b` pair. Returns how many went.
    pub fn remove_pair(&mut self, a: &str, b: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.connects(a, b));
        before - self.records.len()
    }

    /// Removes the records declared exactly as `from`-`to`. A link declared
    /// the other way round is left alone.
    pub fn remove_declared(&mut self, from: &str, to: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !(r.from == from && r.to == to));
        before - self.records.len()
    }

    pub fn get(&self, a: &str, b: &str) -> Option<&LinkRecord> {
        self.records.iter().find(|r| r.connects(a, b))
    }

    pub fn contains(&self, record: &LinkRecord) -> bool {
        self.records.contains(record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Records `record` in `owner`'s LSDB and in the LSDB of every node that is
/// a direct neighbor of `owner` right now. The update goes no further than
/// one hop.
pub fn record_link(network: &mut Network, owner: &str, record: &LinkRecord) -> Result<()> {
    let neighbors: Vec<NodeName> = network.neighbors_of(owner)?.keys().cloned().collect();

    network.node_mut(owner)?.lsdb.replace(record.clone());
    for neighbor in &neighbors {
        network.node_mut(neighbor)?.lsdb.replace(record.clone());
    }
    trace!("{} recorded {} and flooded it to {:?}", owner, record, neighbors);
    Ok(())
}

/// Forgets records declared as `from`-`to` in `owner`'s own LSDB only.
/// Neighbors keep whatever copy they were flooded earlier.
pub fn withdraw_link(network: &mut Network, owner: &str, from: &str, to: &str) -> Result<()> {
    let removed = network.node_mut(owner)?.lsdb.remove_declared(from, to);
    trace!("{} withdrew {} record(s) for {}-{}", owner, removed, from, to);
    Ok(())
}
