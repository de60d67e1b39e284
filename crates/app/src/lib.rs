//! # freightdeck-app
//!
//! Application layer — the resource CRUD binders and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement (driven/outbound ports):
//!   - [`ports::Gateway`] — the backend's REST surface as a trait
//!   - [`ports::ConfirmPrompt`] — interactive confirmation before deletes
//! - Provide the per-entity **binders**: each couples one entity type's
//!   remote list to a local editable form draft and keeps the two
//!   synchronized through load/create/update/delete round trips
//! - Provide the **dashboard aggregator** deriving counts from the four
//!   lists fetched concurrently
//!
//! ## Dependency rule
//! Depends on `freightdeck-domain` only (plus `tokio` for `join!`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod binders;
pub mod dashboard;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;
