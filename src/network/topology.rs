use std::collections::BTreeMap;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::error::{Result, SimError};
use crate::protocol::Lsdb;
use crate::{NodeName, Weight};

/// A simulated router: its direct links and its link-state database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    pub name: NodeName,
    pub neighbors: BTreeMap<NodeName, Weight>,
    pub lsdb: Lsdb,
}

impl Node {
    pub fn new(name: impl Into<NodeName>) -> Self {
        Self {
            name: name.into(),
            neighbors: BTreeMap::new(),
            lsdb: Lsdb::new(),
        }
    }
}

/// The whole simulated network. Node identities are fixed at creation;
/// only the links between them change afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    nodes: BTreeMap<NodeName, Node>,
}

impl Network {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeName>,
    {
        let mut nodes = BTreeMap::new();
        for name in names {
            let name = name.into();
            if nodes.contains_key(&name) {
                return Err(SimError::DuplicateNode(name));
            }
            nodes.insert(name.clone(), Node::new(name));
        }
        debug!("Created network with {} nodes", nodes.len());
        Ok(Self { nodes })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn node(&self, name: &str) -> Result<&Node> {
        self.nodes
            .get(name)
            .ok_or_else(|| SimError::UnknownNode(name.to_string()))
    }

    pub(crate) fn node_mut(&mut self, name: &str) -> Result<&mut Node> {
        self.nodes
            .get_mut(name)
            .ok_or_else(|| SimError::UnknownNode(name.to_string()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Node names in lexicographic order.
    pub fn node_names(&self) -> impl Iterator<Item = &NodeName> {
        self.nodes.keys()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn neighbors_of(&self, name: &str) -> Result<&BTreeMap<NodeName, Weight>> {
        Ok(&self.node(name)?.neighbors)
    }

    pub fn are_neighbors(&self, a: &str, b: &str) -> bool {
        self.nodes
            .get(a)
            .map(|n| n.neighbors.contains_key(b))
            .unwrap_or(false)
    }

    /// Checks that both endpoints exist and are distinct.
    pub fn check_endpoints(&self, a: &str, b: &str) -> Result<()> {
        for name in [a, b] {
            if !self.contains(name) {
                return Err(SimError::UnknownNode(name.to_string()));
            }
        }
        if a == b {
            return Err(SimError::SelfLink(a.to_string()));
        }
        Ok(())
    }

    /// Sets the weight of the `a`-`b` link on both sides, overwriting any
    /// previous weight.
    pub fn add_or_update_link(&mut self, a: &str, b: &str, weight: Weight) -> Result<()> {
        self.check_endpoints(a, b)?;
        self.node_mut(a)?.neighbors.insert(b.to_string(), weight);
        self.node_mut(b)?.neighbors.insert(a.to_string(), weight);
        debug!("Link {}-{} set to weight {}", a, b, weight);
        Ok(())
    }

    /// Drops the `a`-`b` link on both sides. Returns whether a link existed;
    /// removing a missing link is a no-op.
    pub fn remove_link(&mut self, a: &str, b: &str) -> Result<bool> {
        self.check_endpoints(a, b)?;
        let removed_ab = self.node_mut(a)?.neighbors.remove(b).is_some();
        let removed_ba = self.node_mut(b)?.neighbors.remove(a).is_some();
        if !removed_ab && !removed_ba {
            debug!("No link {}-{} to remove", a, b);
        }
        Ok(removed_ab || removed_ba)
    }
}
