pub mod bodies;
pub mod config;
pub mod state;
