mod customers;
mod dashboard;
mod drivers;
mod not_found;
mod shipments;
mod vehicles;

pub use customers::Customers;
pub use dashboard::Dashboard;
pub use drivers::Drivers;
pub use not_found::NotFound;
pub use shipments::Shipments;
pub use vehicles::Vehicles;
