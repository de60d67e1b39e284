//! HTTP implementation of the [`Gateway`] port backed by `reqwest`.
//!
//! Every method maps to exactly one backend route under the configured base
//! URL. Non-2xx responses are turned into [`GatewayError::Backend`] carrying
//! the backend's `message` field when the error body is JSON, or a plain
//! `HTTP {status}` string when it is not.

use freightdeck_app::ports::Gateway;
use freightdeck_domain::customer::{Customer, CustomerPayload};
use freightdeck_domain::driver::{Driver, DriverPayload, DriverStatus};
use freightdeck_domain::error::GatewayError;
use freightdeck_domain::id::{CustomerId, DriverId, ShipmentId, VehicleId};
use freightdeck_domain::shipment::{Shipment, ShipmentPayload, ShipmentStatus};
use freightdeck_domain::vehicle::{Vehicle, VehiclePayload, VehicleStatus};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Where the backend lives.
///
/// The base URL already includes the `/api` prefix, so route paths are joined
/// to it verbatim.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl GatewayConfig {
    /// Reads the base URL from `FREIGHTDECK_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("FREIGHTDECK_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
        }
    }

    pub fn build(self) -> HttpGateway {
        HttpGateway {
            client: reqwest::Client::new(),
            base_url: self.base_url,
        }
    }
}

/// Shape of the backend's JSON error responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

fn transport(err: reqwest::Error) -> GatewayError {
    if err.is_decode() {
        GatewayError::Decode(err.to_string())
    } else {
        GatewayError::Transport(err.to_string())
    }
}

/// Passes 2xx responses through and converts everything else into
/// [`GatewayError::Backend`].
async fn check(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("HTTP {}", status.as_u16()),
    };
    Err(GatewayError::Backend {
        status: status.as_u16(),
        message,
    })
}

/// [`Gateway`] implementation talking to the logistics backend over HTTP.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        config.build()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        check(response).await?.json::<T>().await.map_err(transport)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check(response).await?.json::<T>().await.map_err(transport)
    }

    async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check(response).await?.json::<T>().await.map_err(transport)
    }

    async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }
}

impl Gateway for HttpGateway {
    // -- customers ---------------------------------------------------------

    async fn list_customers(&self) -> Result<Vec<Customer>, GatewayError> {
        self.get_json("/customers").await
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Customer, GatewayError> {
        self.get_json(&format!("/customers/{id}")).await
    }

    async fn create_customer(&self, payload: &CustomerPayload) -> Result<Customer, GatewayError> {
        self.post_json("/customers", payload).await
    }

    async fn update_customer(
        &self,
        id: CustomerId,
        payload: &CustomerPayload,
    ) -> Result<Customer, GatewayError> {
        self.put_json(&format!("/customers/{id}"), payload).await
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<(), GatewayError> {
        self.delete(&format!("/customers/{id}")).await
    }

    // -- drivers -----------------------------------------------------------

    async fn list_drivers(&self) -> Result<Vec<Driver>, GatewayError> {
        self.get_json("/drivers").await
    }

    async fn get_driver(&self, id: DriverId) -> Result<Driver, GatewayError> {
        self.get_json(&format!("/drivers/{id}")).await
    }

    async fn list_drivers_by_status(
        &self,
        status: DriverStatus,
    ) -> Result<Vec<Driver>, GatewayError> {
        self.get_json(&format!("/drivers/status/{status}")).await
    }

    async fn create_driver(&self, payload: &DriverPayload) -> Result<Driver, GatewayError> {
        self.post_json("/drivers", payload).await
    }

    async fn update_driver(
        &self,
        id: DriverId,
        payload: &DriverPayload,
    ) -> Result<Driver, GatewayError> {
        self.put_json(&format!("/drivers/{id}"), payload).await
    }

    async fn delete_driver(&self, id: DriverId) -> Result<(), GatewayError> {
        self.delete(&format!("/drivers/{id}")).await
    }

    // -- vehicles ----------------------------------------------------------

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, GatewayError> {
        self.get_json("/vehicles").await
    }

    async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, GatewayError> {
        self.get_json(&format!("/vehicles/{id}")).await
    }

    async fn list_vehicles_by_status(
        &self,
        status: VehicleStatus,
    ) -> Result<Vec<Vehicle>, GatewayError> {
        self.get_json(&format!("/vehicles/status/{status}")).await
    }

    async fn create_vehicle(&self, payload: &VehiclePayload) -> Result<Vehicle, GatewayError> {
        self.post_json("/vehicles", payload).await
    }

    async fn update_vehicle(
        &self,
        id: VehicleId,
        payload: &VehiclePayload,
    ) -> Result<Vehicle, GatewayError> {
        self.put_json(&format!("/vehicles/{id}"), payload).await
    }

    async fn delete_vehicle(&self, id: VehicleId) -> Result<(), GatewayError> {
        self.delete(&format!("/vehicles/{id}")).await
    }

    // -- shipments ---------------------------------------------------------

    async fn list_shipments(&self) -> Result<Vec<Shipment>, GatewayError> {
        self.get_json("/shipments").await
    }

    async fn get_shipment(&self, id: ShipmentId) -> Result<Shipment, GatewayError> {
        self.get_json(&format!("/shipments/{id}")).await
    }

    async fn get_shipment_by_tracking(
        &self,
        tracking_number: &str,
    ) -> Result<Shipment, GatewayError> {
        self.get_json(&format!("/shipments/tracking/{tracking_number}"))
            .await
    }

    async fn list_shipments_by_status(
        &self,
        status: ShipmentStatus,
    ) -> Result<Vec<Shipment>, GatewayError> {
        self.get_json(&format!("/shipments/status/{status}")).await
    }

    async fn create_shipment(&self, payload: &ShipmentPayload) -> Result<Shipment, GatewayError> {
        self.post_json("/shipments", payload).await
    }

    async fn update_shipment(
        &self,
        id: ShipmentId,
        payload: &ShipmentPayload,
    ) -> Result<Shipment, GatewayError> {
        self.put_json(&format!("/shipments/{id}"), payload).await
    }

    async fn delete_shipment(&self, id: ShipmentId) -> Result<(), GatewayError> {
        self.delete(&format!("/shipments/{id}")).await
    }
}
