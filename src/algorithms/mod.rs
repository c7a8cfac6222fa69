pub mod dijkstra;

pub use dijkstra::{shortest_paths, ShortestPaths, INFINITE_COST};
