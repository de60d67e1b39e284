//! Dashboard statistics derived from the four entity lists.

use crate::customer::Customer;
use crate::driver::{Driver, DriverStatus};
use crate::shipment::{Shipment, ShipmentStatus};
use crate::vehicle::{Vehicle, VehicleStatus};

/// Status-partitioned counts shown on the dashboard page.
///
/// Cancelled shipments count toward `total_shipments` only; none of the
/// three shipment buckets includes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_customers: usize,
    pub total_drivers: usize,
    pub total_vehicles: usize,
    pub total_shipments: usize,
    pub pending_shipments: usize,
    pub in_transit_shipments: usize,
    pub delivered_shipments: usize,
    pub available_drivers: usize,
    pub available_vehicles: usize,
}

impl DashboardStats {
    /// Partition the four lists into dashboard counters.
    #[must_use]
    pub fn from_lists(
        customers: &[Customer],
        drivers: &[Driver],
        vehicles: &[Vehicle],
        shipments: &[Shipment],
    ) -> Self {
        let by_status = |status: ShipmentStatus| {
            shipments
                .iter()
                .filter(|shipment| shipment.status == status)
                .count()
        };

        Self {
            total_customers: customers.len(),
            total_drivers: drivers.len(),
            total_vehicles: vehicles.len(),
            total_shipments: shipments.len(),
            pending_shipments: by_status(ShipmentStatus::Pending),
            in_transit_shipments: by_status(ShipmentStatus::InTransit),
            delivered_shipments: by_status(ShipmentStatus::Delivered),
            available_drivers: drivers
                .iter()
                .filter(|driver| driver.status == DriverStatus::Available)
                .count(),
            available_vehicles: vehicles
                .iter()
                .filter(|vehicle| vehicle.status == VehicleStatus::Available)
                .count(),
        }
    }
}
