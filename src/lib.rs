// Module declarations for the library crate.

pub mod cli;
pub mod config;
pub mod filter;
pub mod logger;
pub mod person;
pub mod roster;

// Re-export statistics types for convenience, e.g., for tests or benches.
pub use filter::stats;
