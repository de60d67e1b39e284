//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They live here so the binders and the adapter crates can both
//! depend on them without creating circular dependencies.

pub mod gateway;
pub mod prompt;

pub use gateway::Gateway;
pub use prompt::ConfirmPrompt;
