//! Presentation transforms — stateless mapping from entities to table cells
//! and status badges.
//!
//! Keeping these here (rather than in the wasm dashboard crate) lets the
//! native test suite pin down the exact strings the UI shows.

use crate::customer::Customer;
use crate::driver::Driver;
use crate::shipment::Shipment;
use crate::vehicle::Vehicle;

/// Placeholder shown for absent optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown for absent driver/vehicle assignments.
pub const UNASSIGNED: &str = "Unassigned";

/// A status rendered as a colored badge: the raw label plus a CSS selector
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub css_class: String,
    pub label: String,
}

/// Build the badge for a wire-spelled status (`IN_TRANSIT` →
/// `status-badge status-in-transit`).
#[must_use]
pub fn status_badge(status: &str) -> StatusBadge {
    let selector = status.to_lowercase().replace('_', "-");
    StatusBadge {
        css_class: format!("status-badge status-{selector}"),
        label: status.to_string(),
    }
}

/// An optional text field, or the "N/A" placeholder when absent or blank.
#[must_use]
pub fn text_or_na(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// An optional numeric field, or the "N/A" placeholder. Zero is a real
/// value and renders as `0`.
#[must_use]
pub fn number_or_na(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string())
}

/// An optional assignment name, or the "Unassigned" placeholder.
#[must_use]
pub fn name_or_unassigned(value: Option<&str>) -> String {
    value.map_or_else(|| UNASSIGNED.to_string(), ToString::to_string)
}

/// Table cells for one customer row: id, name, email, phone, address.
#[must_use]
pub fn customer_cells(customer: &Customer) -> Vec<String> {
    vec![
        customer.id.to_string(),
        customer.name.clone(),
        customer.email.clone(),
        customer.phone.clone(),
        text_or_na(customer.address.as_deref()),
    ]
}

/// Table cells for one driver row: id, name, license number, phone, status.
#[must_use]
pub fn driver_cells(driver: &Driver) -> Vec<String> {
    vec![
        driver.id.to_string(),
        driver.name.clone(),
        driver.license_number.clone(),
        driver.phone.clone(),
        driver.status.to_string(),
    ]
}

/// Table cells for one vehicle row: id, registration, type, model,
/// capacity, status.
#[must_use]
pub fn vehicle_cells(vehicle: &Vehicle) -> Vec<String> {
    vec![
        vehicle.id.to_string(),
        vehicle.registration_number.clone(),
        vehicle.vehicle_type.to_string(),
        vehicle.model.clone(),
        number_or_na(vehicle.capacity),
        vehicle.status.to_string(),
    ]
}

/// Table cells for one shipment row: tracking number, customer, origin,
/// destination, driver, vehicle, weight, status.
#[must_use]
pub fn shipment_cells(shipment: &Shipment) -> Vec<String> {
    vec![
        shipment.tracking_number.clone(),
        text_or_na(shipment.customer.as_ref().map(|c| c.name.as_str())),
        shipment.origin.clone(),
        shipment.destination.clone(),
        name_or_unassigned(shipment.driver.as_ref().map(|d| d.name.as_str())),
        name_or_unassigned(
            shipment
                .vehicle
                .as_ref()
                .map(|v| v.registration_number.as_str()),
        ),
        number_or_na(shipment.weight),
        shipment.status.to_string(),
    ]
}
