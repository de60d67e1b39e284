//! Driver — a person who can be assigned to shipments.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::DriverId;

/// Availability of a driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverStatus {
    #[default]
    Available,
    Busy,
    OffDuty,
}

impl DriverStatus {
    /// All variants, in form-select order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Busy, Self::OffDuty];

    /// The wire spelling (`AVAILABLE`, `BUSY`, `OFF_DUTY`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Busy => "BUSY",
            Self::OffDuty => "OFF_DUTY",
        }
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DriverStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "driver status",
                value: s.to_string(),
            })
    }
}

/// A driver as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub license_number: String,
    pub phone: String,
    pub status: DriverStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Request body for creating or updating a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPayload {
    pub name: String,
    pub license_number: String,
    pub phone: String,
    pub status: DriverStatus,
}

impl DriverPayload {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when a required field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }
        if self.license_number.is_empty() {
            return Err(ValidationError::Required {
                field: "license number",
            });
        }
        if self.phone.is_empty() {
            return Err(ValidationError::Required { field: "phone" });
        }
        Ok(())
    }
}

/// Unsaved form state for the driver modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverDraft {
    pub name: String,
    pub license_number: String,
    pub phone: String,
    pub status: DriverStatus,
}

impl DriverDraft {
    /// Prefill the form from an existing driver for editing.
    #[must_use]
    pub fn for_entity(driver: &Driver) -> Self {
        Self {
            name: driver.name.clone(),
            license_number: driver.license_number.clone(),
            phone: driver.phone.clone(),
            status: driver.status,
        }
    }

    /// Convert the draft into a request payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when a required field is blank.
    pub fn to_payload(&self) -> Result<DriverPayload, ValidationError> {
        let payload = DriverPayload {
            name: self.name.clone(),
            license_number: self.license_number.clone(),
            phone: self.phone.clone(),
            status: self.status,
        };
        payload.validate()?;
        Ok(payload)
    }
}
