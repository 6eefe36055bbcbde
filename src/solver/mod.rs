pub mod constants;
mod config;
mod core;
mod errors;

pub use config::SolverConfig;
pub use self::core::Make10Solver;
pub use errors::SolverError;
