//! Vehicle — a truck, van, or bike that can carry shipments.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::VehicleId;

/// Kind of vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    #[default]
    Truck,
    Van,
    Bike,
}

impl VehicleType {
    /// All variants, in form-select order.
    pub const ALL: [Self; 3] = [Self::Truck, Self::Van, Self::Bike];

    /// The wire spelling (`TRUCK`, `VAN`, `BIKE`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Truck => "TRUCK",
            Self::Van => "VAN",
            Self::Bike => "BIKE",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VehicleType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "vehicle type",
                value: s.to_string(),
            })
    }
}

/// Operational status of a vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
}

impl VehicleStatus {
    /// All variants, in form-select order.
    pub const ALL: [Self; 3] = [Self::Available, Self::InUse, Self::Maintenance];

    /// The wire spelling (`AVAILABLE`, `IN_USE`, `MAINTENANCE`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::InUse => "IN_USE",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "vehicle status",
                value: s.to_string(),
            })
    }
}

/// A vehicle as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub registration_number: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub model: String,
    /// Load capacity in kilograms.
    #[serde(default)]
    pub capacity: Option<f64>,
    pub status: VehicleStatus,
}

/// Request body for creating or updating a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePayload {
    pub registration_number: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub model: String,
    pub capacity: f64,
    pub status: VehicleStatus,
}

impl VehiclePayload {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when a required field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.registration_number.is_empty() {
            return Err(ValidationError::Required {
                field: "registration number",
            });
        }
        if self.model.is_empty() {
            return Err(ValidationError::Required { field: "model" });
        }
        Ok(())
    }
}

/// Unsaved form state for the vehicle modal.
///
/// `capacity` stays a string here; it is parsed on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleDraft {
    pub registration_number: String,
    pub vehicle_type: VehicleType,
    pub model: String,
    pub capacity: String,
    pub status: VehicleStatus,
}

impl VehicleDraft {
    /// Prefill the form from an existing vehicle for editing.
    #[must_use]
    pub fn for_entity(vehicle: &Vehicle) -> Self {
        Self {
            registration_number: vehicle.registration_number.clone(),
            vehicle_type: vehicle.vehicle_type,
            model: vehicle.model.clone(),
            capacity: vehicle.capacity.map(|c| c.to_string()).unwrap_or_default(),
            status: vehicle.status,
        }
    }

    /// Convert the draft into a request payload, parsing `capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNumber`] when `capacity` is blank or
    /// not a number, and [`ValidationError::Required`] for blank required
    /// fields.
    pub fn to_payload(&self) -> Result<VehiclePayload, ValidationError> {
        let capacity = self
            .capacity
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidNumber { field: "capacity" })?;
        let payload = VehiclePayload {
            registration_number: self.registration_number.clone(),
            vehicle_type: self.vehicle_type,
            model: self.model.clone(),
            capacity,
            status: self.status,
        };
        payload.validate()?;
        Ok(payload)
    }
}
