//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use freightdeck_domain::customer::{Customer, CustomerPayload};
use freightdeck_domain::driver::{Driver, DriverPayload};
use freightdeck_domain::id::{CustomerId, DriverId, ShipmentId, VehicleId};
use freightdeck_domain::shipment::{Shipment, ShipmentPayload};
use freightdeck_domain::stats::DashboardStats;
use freightdeck_domain::vehicle::{Vehicle, VehiclePayload};
use gloo_net::http::{Request, Response};
use serde::Deserialize;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

// -- customers ---------------------------------------------------------------

/// Fetch all customers from the API.
pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    let resp = check_response(Request::get("/api/customers").send().await?).await?;
    let customers: Vec<Customer> = resp.json().await?;
    Ok(customers)
}

/// Create a customer via POST /api/customers.
pub async fn create_customer(payload: &CustomerPayload) -> Result<Customer, ApiError> {
    let resp =
        check_response(Request::post("/api/customers").json(payload)?.send().await?).await?;
    let customer: Customer = resp.json().await?;
    Ok(customer)
}

/// Update a customer via PUT /api/customers/{id}.
pub async fn update_customer(
    id: CustomerId,
    payload: &CustomerPayload,
) -> Result<Customer, ApiError> {
    let url = format!("/api/customers/{id}");
    let resp = check_response(Request::put(&url).json(payload)?.send().await?).await?;
    let customer: Customer = resp.json().await?;
    Ok(customer)
}

/// Delete a customer via DELETE /api/customers/{id}.
pub async fn delete_customer(id: CustomerId) -> Result<(), ApiError> {
    let url = format!("/api/customers/{id}");
    check_response(Request::delete(&url).send().await?).await?;
    Ok(())
}

// -- drivers -----------------------------------------------------------------

/// Fetch all drivers from the API.
pub async fn fetch_drivers() -> Result<Vec<Driver>, ApiError> {
    let resp = check_response(Request::get("/api/drivers").send().await?).await?;
    let drivers: Vec<Driver> = resp.json().await?;
    Ok(drivers)
}

/// Create a driver via POST /api/drivers.
pub async fn create_driver(payload: &DriverPayload) -> Result<Driver, ApiError> {
    let resp = check_response(Request::post("/api/drivers").json(payload)?.send().await?).await?;
    let driver: Driver = resp.json().await?;
    Ok(driver)
}

/// Update a driver via PUT /api/drivers/{id}.
pub async fn update_driver(id: DriverId, payload: &DriverPayload) -> Result<Driver, ApiError> {
    let url = format!("/api/drivers/{id}");
    let resp = check_response(Request::put(&url).json(payload)?.send().await?).await?;
    let driver: Driver = resp.json().await?;
    Ok(driver)
}

/// Delete a driver via DELETE /api/drivers/{id}.
pub async fn delete_driver(id: DriverId) -> Result<(), ApiError> {
    let url = format!("/api/drivers/{id}");
    check_response(Request::delete(&url).send().await?).await?;
    Ok(())
}

// -- vehicles ----------------------------------------------------------------

/// Fetch all vehicles from the API.
pub async fn fetch_vehicles() -> Result<Vec<Vehicle>, ApiError> {
    let resp = check_response(Request::get("/api/vehicles").send().await?).await?;
    let vehicles: Vec<Vehicle> = resp.json().await?;
    Ok(vehicles)
}

/// Create a vehicle via POST /api/vehicles.
pub async fn create_vehicle(payload: &VehiclePayload) -> Result<Vehicle, ApiError> {
    let resp = check_response(Request::post("/api/vehicles").json(payload)?.send().await?).await?;
    let vehicle: Vehicle = resp.json().await?;
    Ok(vehicle)
}

/// Update a vehicle via PUT /api/vehicles/{id}.
pub async fn update_vehicle(id: VehicleId, payload: &VehiclePayload) -> Result<Vehicle, ApiError> {
    let url = format!("/api/vehicles/{id}");
    let resp = check_response(Request::put(&url).json(payload)?.send().await?).await?;
    let vehicle: Vehicle = resp.json().await?;
    Ok(vehicle)
}

/// Delete a vehicle via DELETE /api/vehicles/{id}.
pub async fn delete_vehicle(id: VehicleId) -> Result<(), ApiError> {
    let url = format!("/api/vehicles/{id}");
    check_response(Request::delete(&url).send().await?).await?;
    Ok(())
}

// -- shipments ---------------------------------------------------------------

/// Fetch all shipments from the API.
pub async fn fetch_shipments() -> Result<Vec<Shipment>, ApiError> {
    let resp = check_response(Request::get("/api/shipments").send().await?).await?;
    let shipments: Vec<Shipment> = resp.json().await?;
    Ok(shipments)
}

/// Create a shipment via POST /api/shipments.
pub async fn create_shipment(payload: &ShipmentPayload) -> Result<Shipment, ApiError> {
    let resp =
        check_response(Request::post("/api/shipments").json(payload)?.send().await?).await?;
    let shipment: Shipment = resp.json().await?;
    Ok(shipment)
}

/// Update a shipment via PUT /api/shipments/{id}.
pub async fn update_shipment(
    id: ShipmentId,
    payload: &ShipmentPayload,
) -> Result<Shipment, ApiError> {
    let url = format!("/api/shipments/{id}");
    let resp = check_response(Request::put(&url).json(payload)?.send().await?).await?;
    let shipment: Shipment = resp.json().await?;
    Ok(shipment)
}

/// Delete a shipment via DELETE /api/shipments/{id}.
pub async fn delete_shipment(id: ShipmentId) -> Result<(), ApiError> {
    let url = format!("/api/shipments/{id}");
    check_response(Request::delete(&url).send().await?).await?;
    Ok(())
}

// -- aggregates --------------------------------------------------------------

/// Everything the shipments page needs: the shipments themselves plus the
/// three pick lists for the form selects.
#[derive(Debug, Clone, Default)]
pub struct ShipmentBoard {
    pub shipments: Vec<Shipment>,
    pub customers: Vec<Customer>,
    pub drivers: Vec<Driver>,
    pub vehicles: Vec<Vehicle>,
}

/// Fetch the shipments page data concurrently, failing if any list fails.
pub async fn fetch_shipment_board() -> Result<ShipmentBoard, ApiError> {
    let (shipments, customers, drivers, vehicles) = futures::try_join!(
        fetch_shipments(),
        fetch_customers(),
        fetch_drivers(),
        fetch_vehicles(),
    )?;

    Ok(ShipmentBoard {
        shipments,
        customers,
        drivers,
        vehicles,
    })
}

/// Fetch the four entity lists concurrently and partition them into
/// dashboard counters.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ApiError> {
    let (customers, drivers, vehicles, shipments) = futures::try_join!(
        fetch_customers(),
        fetch_drivers(),
        fetch_vehicles(),
        fetch_shipments(),
    )?;

    Ok(DashboardStats::from_lists(
        &customers, &drivers, &vehicles, &shipments,
    ))
}
