//! Resource CRUD binders — one per entity type.
//!
//! A binder couples one entity type's remote list to a local editable form
//! draft and keeps the two synchronized: every successful mutation is
//! followed by a full list reload. There is no optimistic mutation, no
//! partial patching, and no conflict detection — the backend is the sole
//! source of truth and last write wins.

pub mod customer;
pub mod driver;
pub mod shipment;
pub mod vehicle;

pub use customer::CustomerBinder;
pub use driver::DriverBinder;
pub use shipment::ShipmentBinder;
pub use vehicle::VehicleBinder;
