//! Shipment — a consignment moving from an origin to a destination.
//!
//! Relationships are embedded entities on the read side and `{"id": …}`
//! reference objects on the write side. The backend generates the tracking
//! number (`TRK-XXXXXXXX`) when the payload omits it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::driver::Driver;
use crate::error::ValidationError;
use crate::id::{CustomerId, DriverId, ShipmentId, VehicleId};
use crate::vehicle::Vehicle;

/// Delivery status of a shipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl ShipmentStatus {
    /// All variants, in form-select order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InTransit,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// The wire spelling (`PENDING`, `IN_TRANSIT`, `DELIVERED`, `CANCELLED`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InTransit => "IN_TRANSIT",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShipmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "shipment status",
                value: s.to_string(),
            })
    }
}

/// A nested JSON object carrying just an id, used to express a relationship
/// in request payloads (e.g. a shipment's customer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference<Id> {
    pub id: Id,
}

impl<Id> Reference<Id> {
    #[must_use]
    pub fn new(id: Id) -> Self {
        Self { id }
    }
}

/// A shipment as the backend serializes it, with related entities embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: ShipmentId,
    pub tracking_number: String,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub driver: Option<Driver>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    pub origin: String,
    pub destination: String,
    pub status: ShipmentStatus,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Request body for creating or updating a shipment.
///
/// `tracking_number` is omitted entirely when unset so the backend generates
/// one; the optional relationships and fields are sent as explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub customer: Reference<CustomerId>,
    pub driver: Option<Reference<DriverId>>,
    pub vehicle: Option<Reference<VehicleId>>,
    pub origin: String,
    pub destination: String,
    pub status: ShipmentStatus,
    pub weight: Option<f64>,
    pub description: Option<String>,
}

impl ShipmentPayload {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when `origin` or `destination`
    /// is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.origin.is_empty() {
            return Err(ValidationError::Required { field: "origin" });
        }
        if self.destination.is_empty() {
            return Err(ValidationError::Required { field: "destination" });
        }
        Ok(())
    }
}

/// Unsaved form state for the shipment modal.
///
/// Relationship ids and numbers are strings bound to form inputs; an empty
/// id string means "unselected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentDraft {
    pub tracking_number: String,
    pub customer_id: String,
    pub driver_id: String,
    pub vehicle_id: String,
    pub origin: String,
    pub destination: String,
    pub status: ShipmentStatus,
    pub weight: String,
    pub description: String,
}

impl ShipmentDraft {
    /// Prefill the form from an existing shipment for editing, extracting
    /// relationship ids from the embedded entities.
    #[must_use]
    pub fn for_entity(shipment: &Shipment) -> Self {
        Self {
            tracking_number: shipment.tracking_number.clone(),
            customer_id: shipment
                .customer
                .as_ref()
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
            driver_id: shipment
                .driver
                .as_ref()
                .map(|d| d.id.to_string())
                .unwrap_or_default(),
            vehicle_id: shipment
                .vehicle
                .as_ref()
                .map(|v| v.id.to_string())
                .unwrap_or_default(),
            origin: shipment.origin.clone(),
            destination: shipment.destination.clone(),
            status: shipment.status,
            weight: shipment.weight.map(|w| w.to_string()).unwrap_or_default(),
            description: shipment.description.clone().unwrap_or_default(),
        }
    }

    /// Convert the draft into a request payload: parse the relationship ids,
    /// wrap them as reference objects, parse the optional weight, and map
    /// blank optional fields to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCustomer`] when no customer is
    /// selected, [`ValidationError::InvalidNumber`] when an id or the weight
    /// does not parse, and [`ValidationError::Required`] for blank required
    /// fields.
    pub fn to_payload(&self) -> Result<ShipmentPayload, ValidationError> {
        if self.customer_id.is_empty() {
            return Err(ValidationError::MissingCustomer);
        }
        let customer = self
            .customer_id
            .parse::<CustomerId>()
            .map(Reference::new)
            .map_err(|_| ValidationError::InvalidNumber { field: "customer" })?;
        let driver = parse_optional_id::<DriverId>(&self.driver_id, "driver")?.map(Reference::new);
        let vehicle =
            parse_optional_id::<VehicleId>(&self.vehicle_id, "vehicle")?.map(Reference::new);
        let weight = if self.weight.is_empty() {
            None
        } else {
            Some(
                self.weight
                    .parse::<f64>()
                    .map_err(|_| ValidationError::InvalidNumber { field: "weight" })?,
            )
        };

        let payload = ShipmentPayload {
            tracking_number: (!self.tracking_number.is_empty())
                .then(|| self.tracking_number.clone()),
            customer,
            driver,
            vehicle,
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            status: self.status,
            weight,
            description: (!self.description.is_empty()).then(|| self.description.clone()),
        };
        payload.validate()?;
        Ok(payload)
    }
}

fn parse_optional_id<Id: std::str::FromStr>(
    raw: &str,
    field: &'static str,
) -> Result<Option<Id>, ValidationError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<Id>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidNumber { field })
}
