//! Customer — a party that books shipments.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::CustomerId;

/// A customer as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Request body for creating or updating a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerPayload {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when `name`, `email`, or
    /// `phone` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }
        if self.email.is_empty() {
            return Err(ValidationError::Required { field: "email" });
        }
        if self.phone.is_empty() {
            return Err(ValidationError::Required { field: "phone" });
        }
        Ok(())
    }
}

/// Unsaved form state for the customer modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerDraft {
    /// Prefill the form from an existing customer for editing.
    #[must_use]
    pub fn for_entity(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone().unwrap_or_default(),
        }
    }

    /// Convert the draft into a request payload.
    ///
    /// A blank address is omitted from the payload rather than sent as an
    /// empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when a required field is blank.
    pub fn to_payload(&self) -> Result<CustomerPayload, ValidationError> {
        let payload = CustomerPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: (!self.address.is_empty()).then(|| self.address.clone()),
        };
        payload.validate()?;
        Ok(payload)
    }
}
