pub mod algorithms;
pub mod config;
pub mod error;
pub mod network;
pub mod protocol;
pub mod report;
pub mod script;
pub mod simulator;

pub use error::{Result, SimError};

/// Node identity: a unique name token.
pub type NodeName = String;
/// Weight of a single direct link.
pub type Weight = u32;
/// Sum of link weights along a path.
pub type Cost = u64;
