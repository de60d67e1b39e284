//! Gateway port — the backend's REST surface as a trait.
//!
//! One method per route, standard verbs: list → GET collection, get → GET
//! item, create → POST collection, update → PUT item, delete → DELETE item,
//! plus the read-side query variants the backend exposes. The gateway is a
//! pure pass-through transport: no retry, no timeout policy, no auth.

use std::future::Future;

use freightdeck_domain::customer::{Customer, CustomerPayload};
use freightdeck_domain::driver::{Driver, DriverPayload, DriverStatus};
use freightdeck_domain::error::GatewayError;
use freightdeck_domain::id::{CustomerId, DriverId, ShipmentId, VehicleId};
use freightdeck_domain::shipment::{Shipment, ShipmentPayload, ShipmentStatus};
use freightdeck_domain::vehicle::{Vehicle, VehiclePayload, VehicleStatus};

/// Uniform REST access to the logistics backend.
pub trait Gateway {
    // -- customers ---------------------------------------------------------

    /// `GET /customers`
    fn list_customers(&self) -> impl Future<Output = Result<Vec<Customer>, GatewayError>> + Send;

    /// `GET /customers/{id}`
    fn get_customer(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Customer, GatewayError>> + Send;

    /// `POST /customers`
    fn create_customer(
        &self,
        payload: &CustomerPayload,
    ) -> impl Future<Output = Result<Customer, GatewayError>> + Send;

    /// `PUT /customers/{id}`
    fn update_customer(
        &self,
        id: CustomerId,
        payload: &CustomerPayload,
    ) -> impl Future<Output = Result<Customer, GatewayError>> + Send;

    /// `DELETE /customers/{id}`
    fn delete_customer(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    // -- drivers -----------------------------------------------------------

    /// `GET /drivers`
    fn list_drivers(&self) -> impl Future<Output = Result<Vec<Driver>, GatewayError>> + Send;

    /// `GET /drivers/{id}`
    fn get_driver(&self, id: DriverId)
    -> impl Future<Output = Result<Driver, GatewayError>> + Send;

    /// `GET /drivers/status/{status}`
    fn list_drivers_by_status(
        &self,
        status: DriverStatus,
    ) -> impl Future<Output = Result<Vec<Driver>, GatewayError>> + Send;

    /// `POST /drivers`
    fn create_driver(
        &self,
        payload: &DriverPayload,
    ) -> impl Future<Output = Result<Driver, GatewayError>> + Send;

    /// `PUT /drivers/{id}`
    fn update_driver(
        &self,
        id: DriverId,
        payload: &DriverPayload,
    ) -> impl Future<Output = Result<Driver, GatewayError>> + Send;

    /// `DELETE /drivers/{id}`
    fn delete_driver(&self, id: DriverId) -> impl Future<Output = Result<(), GatewayError>> + Send;

    // -- vehicles ----------------------------------------------------------

    /// `GET /vehicles`
    fn list_vehicles(&self) -> impl Future<Output = Result<Vec<Vehicle>, GatewayError>> + Send;

    /// `GET /vehicles/{id}`
    fn get_vehicle(
        &self,
        id: VehicleId,
    ) -> impl Future<Output = Result<Vehicle, GatewayError>> + Send;

    /// `GET /vehicles/status/{status}`
    fn list_vehicles_by_status(
        &self,
        status: VehicleStatus,
    ) -> impl Future<Output = Result<Vec<Vehicle>, GatewayError>> + Send;

    /// `POST /vehicles`
    fn create_vehicle(
        &self,
        payload: &VehiclePayload,
    ) -> impl Future<Output = Result<Vehicle, GatewayError>> + Send;

    /// `PUT /vehicles/{id}`
    fn update_vehicle(
        &self,
        id: VehicleId,
        payload: &VehiclePayload,
    ) -> impl Future<Output = Result<Vehicle, GatewayError>> + Send;

    /// `DELETE /vehicles/{id}`
    fn delete_vehicle(
        &self,
        id: VehicleId,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    // -- shipments ---------------------------------------------------------

    /// `GET /shipments`
    fn list_shipments(&self) -> impl Future<Output = Result<Vec<Shipment>, GatewayError>> + Send;

    /// `GET /shipments/{id}`
    fn get_shipment(
        &self,
        id: ShipmentId,
    ) -> impl Future<Output = Result<Shipment, GatewayError>> + Send;

    /// `GET /shipments/tracking/{trackingNumber}`
    fn get_shipment_by_tracking(
        &self,
        tracking_number: &str,
    ) -> impl Future<Output = Result<Shipment, GatewayError>> + Send;

    /// `GET /shipments/status/{status}`
    fn list_shipments_by_status(
        &self,
        status: ShipmentStatus,
    ) -> impl Future<Output = Result<Vec<Shipment>, GatewayError>> + Send;

    /// `POST /shipments`
    fn create_shipment(
        &self,
        payload: &ShipmentPayload,
    ) -> impl Future<Output = Result<Shipment, GatewayError>> + Send;

    /// `PUT /shipments/{id}`
    fn update_shipment(
        &self,
        id: ShipmentId,
        payload: &ShipmentPayload,
    ) -> impl Future<Output = Result<Shipment, GatewayError>> + Send;

    /// `DELETE /shipments/{id}`
    fn delete_shipment(
        &self,
        id: ShipmentId,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
