use log::{debug, info};
use serde::{Deserialize, Serialize};
use crate::error::{Result, SimError};
use crate::network::Network;
use crate::protocol::lsdb::{record_link, withdraw_link, LinkRecord};
use crate::{NodeName, Weight};

/// A single link-update event, endpoints in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkEvent {
    Set { a: NodeName, b: NodeName, weight: Weight },
    Remove { a: NodeName, b: NodeName },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Updated,
    Removed,
    /// Removal of a link that did not exist.
    Unchanged,
}

impl LinkEvent {
    /// Interprets a raw weight: `removal_sentinel` asks for removal, any
    /// other value must fit a non-negative `Weight`.
    pub fn from_raw(a: impl Into<NodeName>, b: impl Into<NodeName>, raw: i64, removal_sentinel: i64) -> Result<Self> {
        let (a, b) = (a.into(), b.into());
        if raw == removal_sentinel {
            return Ok(LinkEvent::Remove { a, b });
        }
        if raw < 0 {
            return Err(SimError::NegativeWeight(raw));
        }
        let weight = Weight::try_from(raw).map_err(|_| SimError::NonIntegerWeight(raw.to_string()))?;
        Ok(LinkEvent::Set { a, b, weight })
    }

    pub fn endpoints(&self) -> (&str, &str) {
        match self {
            LinkEvent::Set { a, b, .. } | LinkEvent::Remove { a, b } => (a.as_str(), b.as_str()),
        }
    }
}

/// Applies one event to the topology and to the LSDBs.
///
/// A set event records the declared link once from each endpoint, so both
/// endpoints and each endpoint's current neighbors learn it. A removal only
/// clears the two endpoints' own LSDBs, and only of records declared in the
/// same endpoint order as the removal.
pub fn apply_event(network: &mut Network, event: &LinkEvent) -> Result<EventOutcome> {
    let (a, b) = event.endpoints();
    network.check_endpoints(a, b)?;

    match event {
        LinkEvent::Set { weight, .. } => {
            network.add_or_update_link(a, b, *weight)?;
            let record = LinkRecord::new(a, b, *weight);
            record_link(network, a, &record)?;
            record_link(network, b, &record)?;
            info!("Link {}-{} weight {}", a, b, weight);
            Ok(EventOutcome::Updated)
        }
        LinkEvent::Remove { .. } => {
            if !network.are_neighbors(a, b) {
                debug!("Ignoring removal of absent link {}-{}", a, b);
                return Ok(EventOutcome::Unchanged);
            }
            network.remove_link(a, b)?;
            withdraw_link(network, a, a, b)?;
            withdraw_link(network, b, a, b)?;
            info!("Link {}-{} removed", a, b);
            Ok(EventOutcome::Removed)
        }
    }
}
