pub mod events;
pub mod lsdb;
pub mod routing_table;

pub use events::*;
pub use lsdb::*;
pub use routing_table::*;
