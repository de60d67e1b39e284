mod customer_table;
mod driver_table;
mod loading;
mod nav;
mod shipment_table;
mod stat_card;
mod status_badge;
mod vehicle_table;

pub use customer_table::CustomerTable;
pub use driver_table::DriverTable;
pub use loading::Loading;
pub use nav::Nav;
pub use shipment_table::ShipmentTable;
pub use stat_card::StatCard;
pub use status_badge::Badge;
pub use vehicle_table::VehicleTable;
