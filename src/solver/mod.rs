pub mod config;
pub mod constants;
mod core;
mod errors;
mod explorer;
mod reconstruct;
pub mod state;

pub use config::SolverConfig;
pub use self::core::{NumbersSolver, Solution};
pub use errors::SolverError;
pub use explorer::{Explorer, Parent, SearchStats};
pub use state::{Mask, StateKey};

#[cfg(test)]
mod tests;
