//! # freightdeck-domain
//!
//! Pure domain model for the freightdeck logistics dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the four logistics **entities** (customers, drivers, vehicles,
//!   shipments) exactly as the backend serializes them
//! - Define the **wire payloads** sent on create/update, including the
//!   `{"id": …}` reference objects used for relationships
//! - Define the **form drafts** — the in-progress, unsaved string-typed
//!   representation of an entity being created or edited — and the
//!   draft → payload conversion with its parsing and validation rules
//! - Derive **dashboard statistics** from entity lists
//! - Provide **display transforms** (status badges, placeholder text,
//!   table-row projections) shared by the dashboard UI and tests
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! It must never import anything from `app` or the adapter crates.
//! All network boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod customer;
pub mod driver;
pub mod shipment;
pub mod vehicle;

pub mod display;
pub mod stats;
