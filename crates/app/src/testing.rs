//! In-memory [`Gateway`] double shared by the binder and dashboard tests.
//!
//! Behaves like the real backend where the binders can observe it: ids are
//! assigned server-side, created shipments embed the referenced entities,
//! and a blank tracking number gets a generated `TRK-…` value.

use std::sync::{Arc, Mutex};

use freightdeck_domain::customer::{Customer, CustomerPayload};
use freightdeck_domain::driver::{Driver, DriverPayload, DriverStatus};
use freightdeck_domain::error::GatewayError;
use freightdeck_domain::id::{CustomerId, DriverId, ShipmentId, VehicleId};
use freightdeck_domain::shipment::{Shipment, ShipmentPayload, ShipmentStatus};
use freightdeck_domain::vehicle::{Vehicle, VehiclePayload, VehicleStatus, VehicleType};

use crate::ports::Gateway;

#[derive(Default)]
struct State {
    customers: Vec<Customer>,
    drivers: Vec<Driver>,
    vehicles: Vec<Vehicle>,
    shipments: Vec<Shipment>,
    next_id: i64,
    fail_lists: bool,
    fail_mutations: bool,
    delete_calls: usize,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Cloneable handle to a shared in-memory backend.
#[derive(Clone, Default)]
pub struct FakeGateway {
    inner: Arc<Mutex<State>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every list request fail with a transport error.
    pub fn fail_lists(&self) {
        self.inner.lock().unwrap().fail_lists = true;
    }

    /// Make every mutation fail with a backend rejection.
    pub fn fail_mutations(&self) {
        self.inner.lock().unwrap().fail_mutations = true;
    }

    /// How many DELETE requests have been issued (successful or not).
    pub fn delete_calls(&self) -> usize {
        self.inner.lock().unwrap().delete_calls
    }

    pub fn seed_customer(&self, customer: Customer) {
        self.inner.lock().unwrap().customers.push(customer);
    }

    pub fn seed_driver(&self, driver: Driver) {
        self.inner.lock().unwrap().drivers.push(driver);
    }

    pub fn seed_vehicle(&self, vehicle: Vehicle) {
        self.inner.lock().unwrap().vehicles.push(vehicle);
    }

    pub fn seed_shipment(&self, shipment: Shipment) {
        self.inner.lock().unwrap().shipments.push(shipment);
    }
}

fn refused() -> GatewayError {
    GatewayError::Transport("connection refused".to_string())
}

fn rejected() -> GatewayError {
    GatewayError::Backend {
        status: 400,
        message: "rejected by backend".to_string(),
    }
}

fn not_found(what: &str) -> GatewayError {
    GatewayError::Backend {
        status: 404,
        message: format!("{what} not found"),
    }
}

impl Gateway for FakeGateway {
    async fn list_customers(&self) -> Result<Vec<Customer>, GatewayError> {
        let state = self.inner.lock().unwrap();
        if state.fail_lists {
            return Err(refused());
        }
        Ok(state.customers.clone())
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Customer, GatewayError> {
        let state = self.inner.lock().unwrap();
        state
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found("Customer"))
    }

    async fn create_customer(&self, payload: &CustomerPayload) -> Result<Customer, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if state.fail_mutations {
            return Err(rejected());
        }
        let customer = Customer {
            id: CustomerId::new(state.next_id()),
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            address: payload.address.clone(),
        };
        state.customers.push(customer.clone());
        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: CustomerId,
        payload: &CustomerPayload,
    ) -> Result<Customer, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if state.fail_mutations {
            return Err(rejected());
        }
        let customer = state
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("Customer"))?;
        customer.name = payload.name.clone();
        customer.email = payload.email.clone();
        customer.phone = payload.phone.clone();
        customer.address = payload.address.clone();
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<(), GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.delete_calls += 1;
        if state.fail_mutations {
            return Err(rejected());
        }
        state.customers.retain(|c| c.id != id);
        Ok(())
    }

    async fn list_drivers(&self) -> Result<Vec<Driver>, GatewayError> {
        let state = self.inner.lock().unwrap();
        if state.fail_lists {
            return Err(refused());
        }
        Ok(state.drivers.clone())
    }

    async fn get_driver(&self, id: DriverId) -> Result<Driver, GatewayError> {
        let state = self.inner.lock().unwrap();
        state
            .drivers
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| not_found("Driver"))
    }

    async fn list_drivers_by_status(
        &self,
        status: DriverStatus,
    ) -> Result<Vec<Driver>, GatewayError> {
        let state = self.inner.lock().unwrap();
        if state.fail_lists {
            return Err(refused());
        }
        Ok(state
            .drivers
            .iter()
            .filter(|d| d.status == status)
            .cloned()
            .collect())
    }

    async fn create_driver(&self, payload: &DriverPayload) -> Result<Driver, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if state.fail_mutations {
            return Err(rejected());
        }
        let driver = Driver {
            id: DriverId::new(state.next_id()),
            name: payload.name.clone(),
            license_number: payload.license_number.clone(),
            phone: payload.phone.clone(),
            status: payload.status,
            created_at: None,
        };
        state.drivers.push(driver.clone());
        Ok(driver)
    }

    async fn update_driver(
        &self,
        id: DriverId,
        payload: &DriverPayload,
    ) -> Result<Driver, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if state.fail_mutations {
            return Err(rejected());
        }
        let driver = state
            .drivers
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| not_found("Driver"))?;
        driver.name = payload.name.clone();
        driver.license_number = payload.license_number.clone();
        driver.phone = payload.phone.clone();
        driver.status = payload.status;
        Ok(driver.clone())
    }

    async fn delete_driver(&self, id: DriverId) -> Result<(), GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.delete_calls += 1;
        if state.fail_mutations {
            return Err(rejected());
        }
        state.drivers.retain(|d| d.id != id);
        Ok(())
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, GatewayError> {
        let state = self.inner.lock().unwrap();
        if state.fail_lists {
            return Err(refused());
        }
        Ok(state.vehicles.clone())
    }

    async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, GatewayError> {
        let state = self.inner.lock().unwrap();
        state
            .vehicles
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| not_found("Vehicle"))
    }

    async fn list_vehicles_by_status(
        &self,
        status: VehicleStatus,
    ) -> Result<Vec<Vehicle>, GatewayError> {
        let state = self.inner.lock().unwrap();
        if state.fail_lists {
            return Err(refused());
        }
        Ok(state
            .vehicles
            .iter()
            .filter(|v| v.status == status)
            .cloned()
            .collect())
    }

    async fn create_vehicle(&self, payload: &VehiclePayload) -> Result<Vehicle, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if state.fail_mutations {
            return Err(rejected());
        }
        let vehicle = Vehicle {
            id: VehicleId::new(state.next_id()),
            registration_number: payload.registration_number.clone(),
            vehicle_type: payload.vehicle_type,
            model: payload.model.clone(),
            capacity: Some(payload.capacity),
            status: payload.status,
        };
        state.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn update_vehicle(
        &self,
        id: VehicleId,
        payload: &VehiclePayload,
    ) -> Result<Vehicle, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if state.fail_mutations {
            return Err(rejected());
        }
        let vehicle = state
            .vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| not_found("Vehicle"))?;
        vehicle.registration_number = payload.registration_number.clone();
        vehicle.vehicle_type = payload.vehicle_type;
        vehicle.model = payload.model.clone();
        vehicle.capacity = Some(payload.capacity);
        vehicle.status = payload.status;
        Ok(vehicle.clone())
    }

    async fn delete_vehicle(&self, id: VehicleId) -> Result<(), GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.delete_calls += 1;
        if state.fail_mutations {
            return Err(rejected());
        }
        state.vehicles.retain(|v| v.id != id);
        Ok(())
    }

    async fn list_shipments(&self) -> Result<Vec<Shipment>, GatewayError> {
        let state = self.inner.lock().unwrap();
        if state.fail_lists {
            return Err(refused());
        }
        Ok(state.shipments.clone())
    }

    async fn get_shipment(&self, id: ShipmentId) -> Result<Shipment, GatewayError> {
        let state = self.inner.lock().unwrap();
        state
            .shipments
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found("Shipment"))
    }

    async fn get_shipment_by_tracking(
        &self,
        tracking_number: &str,
    ) -> Result<Shipment, GatewayError> {
        let state = self.inner.lock().unwrap();
        state
            .shipments
            .iter()
            .find(|s| s.tracking_number == tracking_number)
            .cloned()
            .ok_or_else(|| not_found("Shipment"))
    }

    async fn list_shipments_by_status(
        &self,
        status: ShipmentStatus,
    ) -> Result<Vec<Shipment>, GatewayError> {
        let state = self.inner.lock().unwrap();
        if state.fail_lists {
            return Err(refused());
        }
        Ok(state
            .shipments
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect())
    }

    async fn create_shipment(&self, payload: &ShipmentPayload) -> Result<Shipment, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if state.fail_mutations {
            return Err(rejected());
        }
        let id = state.next_id();
        let shipment = Shipment {
            id: ShipmentId::new(id),
            tracking_number: payload
                .tracking_number
                .clone()
                .unwrap_or_else(|| format!("TRK-{id:08}")),
            customer: resolve(&state.customers, |c| c.id == payload.customer.id),
            driver: payload
                .driver
                .and_then(|r| resolve(&state.drivers, |d| d.id == r.id)),
            vehicle: payload
                .vehicle
                .and_then(|r| resolve(&state.vehicles, |v| v.id == r.id)),
            origin: payload.origin.clone(),
            destination: payload.destination.clone(),
            status: payload.status,
            weight: payload.weight,
            description: payload.description.clone(),
            created_at: None,
            updated_at: None,
        };
        state.shipments.push(shipment.clone());
        Ok(shipment)
    }

    async fn update_shipment(
        &self,
        id: ShipmentId,
        payload: &ShipmentPayload,
    ) -> Result<Shipment, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if state.fail_mutations {
            return Err(rejected());
        }
        if !state.shipments.iter().any(|s| s.id == id) {
            return Err(not_found("Shipment"));
        }
        let customer = resolve(&state.customers, |c| c.id == payload.customer.id);
        let driver = payload
            .driver
            .and_then(|r| resolve(&state.drivers, |d| d.id == r.id));
        let vehicle = payload
            .vehicle
            .and_then(|r| resolve(&state.vehicles, |v| v.id == r.id));
        let shipment = state
            .shipments
            .iter_mut()
            .find(|s| s.id == id)
            .expect("presence checked above");
        shipment.customer = customer;
        shipment.driver = driver;
        shipment.vehicle = vehicle;
        shipment.origin = payload.origin.clone();
        shipment.destination = payload.destination.clone();
        shipment.status = payload.status;
        shipment.weight = payload.weight;
        shipment.description = payload.description.clone();
        Ok(shipment.clone())
    }

    async fn delete_shipment(&self, id: ShipmentId) -> Result<(), GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.delete_calls += 1;
        if state.fail_mutations {
            return Err(rejected());
        }
        state.shipments.retain(|s| s.id != id);
        Ok(())
    }
}

fn resolve<T: Clone>(items: &[T], matches: impl Fn(&T) -> bool) -> Option<T> {
    items.iter().find(|item| matches(item)).cloned()
}

// Sample entities for seeding.

pub fn sample_customer(id: i64, name: &str) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0100".to_string(),
        address: None,
    }
}

pub fn sample_driver(id: i64, name: &str, status: DriverStatus) -> Driver {
    Driver {
        id: DriverId::new(id),
        name: name.to_string(),
        license_number: format!("DL-{id:04}"),
        phone: "555-0101".to_string(),
        status,
        created_at: None,
    }
}

pub fn sample_vehicle(id: i64, registration: &str, status: VehicleStatus) -> Vehicle {
    Vehicle {
        id: VehicleId::new(id),
        registration_number: registration.to_string(),
        vehicle_type: VehicleType::Truck,
        model: "Actros".to_string(),
        capacity: Some(18000.0),
        status,
    }
}

pub fn sample_shipment(id: i64, status: ShipmentStatus) -> Shipment {
    Shipment {
        id: ShipmentId::new(id),
        tracking_number: format!("TRK-{id:08}"),
        customer: Some(sample_customer(1, "Acme")),
        driver: None,
        vehicle: None,
        origin: "Oslo".to_string(),
        destination: "Bergen".to_string(),
        status,
        weight: None,
        description: None,
        created_at: None,
        updated_at: None,
    }
}
