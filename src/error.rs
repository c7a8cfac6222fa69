use thiserror::Error;

use crate::NodeName;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("unknown node: {0}")]
    UnknownNode(NodeName),
    #[error("malformed link token in line {line:?}: {reason}")]
    MalformedLinkToken { line: String, reason: &'static str },
    #[error("weight is not an integer: {0:?}")]
    NonIntegerWeight(String),
    #[error("negative link weight {0} (only the removal sentinel may be negative)")]
    NegativeWeight(i64),
    #[error("invalid node name {name:?}: {reason}")]
    InvalidNodeName { name: String, reason: &'static str },
    #[error("node declared twice: {0}")]
    DuplicateNode(NodeName),
    #[error("link endpoints are the same node: {0}")]
    SelfLink(NodeName),
    #[error("input ended before the {0} marker")]
    MissingMarker(&'static str),
}

pub type Result<T> = std::result::Result<T, SimError>;
