use freightdeck_adapter_gateway_reqwest::{GatewayConfig, HttpGateway};
use freightdeck_app::ports::Gateway;
use freightdeck_domain::driver::DriverStatus;
use freightdeck_domain::id::{CustomerId, ShipmentId};
use freightdeck_domain::shipment::{Reference, ShipmentPayload, ShipmentStatus};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(GatewayConfig {
        base_url: format!("{}/api", server.uri()),
    })
}

#[tokio::test]
async fn should_list_customers_from_the_collection_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Acme", "email": "ops@acme.com", "phone": "555-0100", "address": null},
            {"id": 2, "name": "Globex", "email": "hq@globex.com", "phone": "555-0101", "address": "1 Main St"}
        ])))
        .mount(&server)
        .await;

    let customers = gateway_for(&server).list_customers().await.unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].name, "Acme");
    assert_eq!(customers[1].address.as_deref(), Some("1 Main St"));
}

#[tokio::test]
async fn should_post_shipment_with_reference_objects_and_explicit_nulls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shipments"))
        .and(body_json(json!({
            "customer": {"id": 3},
            "driver": null,
            "vehicle": null,
            "origin": "Oslo",
            "destination": "Bergen",
            "status": "PENDING",
            "weight": null,
            "description": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "trackingNumber": "TRK-AB12CD34",
            "customer": {"id": 3, "name": "Acme", "email": "ops@acme.com", "phone": "555-0100"},
            "driver": null,
            "vehicle": null,
            "origin": "Oslo",
            "destination": "Bergen",
            "status": "PENDING",
            "weight": null,
            "description": null
        })))
        .mount(&server)
        .await;

    let payload = ShipmentPayload {
        tracking_number: None,
        customer: Reference::new(CustomerId::new(3)),
        driver: None,
        vehicle: None,
        origin: "Oslo".to_string(),
        destination: "Bergen".to_string(),
        status: ShipmentStatus::Pending,
        weight: None,
        description: None,
    };
    let shipment = gateway_for(&server).create_shipment(&payload).await.unwrap();
    assert_eq!(shipment.tracking_number, "TRK-AB12CD34");
    assert_eq!(shipment.customer.unwrap().id, CustomerId::new(3));
}

#[tokio::test]
async fn should_surface_the_backend_message_on_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"message": "email already registered"})),
        )
        .mount(&server)
        .await;

    let payload = freightdeck_domain::customer::CustomerPayload {
        name: "Acme".to_string(),
        email: "ops@acme.com".to_string(),
        phone: "555-0100".to_string(),
        address: None,
    };
    let err = gateway_for(&server)
        .create_customer(&payload)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "email already registered");
}

#[tokio::test]
async fn should_fall_back_to_the_status_code_when_the_error_body_is_not_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = gateway_for(&server).list_vehicles().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn should_report_not_found_when_deleting_a_stale_row() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/shipments/9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Shipment not found"})),
        )
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .delete_shipment(ShipmentId::new(9))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn should_treat_an_empty_2xx_delete_response_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/customers/4"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    gateway_for(&server)
        .delete_customer(CustomerId::new(4))
        .await
        .unwrap();
}

#[tokio::test]
async fn should_hit_the_status_query_route_with_the_wire_spelling() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drivers/status/OFF_DUTY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Sam", "licenseNumber": "DL-7788", "phone": "555-0107", "status": "OFF_DUTY"}
        ])))
        .mount(&server)
        .await;

    let drivers = gateway_for(&server)
        .list_drivers_by_status(DriverStatus::OffDuty)
        .await
        .unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].status, DriverStatus::OffDuty);
}

#[tokio::test]
async fn should_look_up_a_shipment_by_tracking_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/shipments/tracking/TRK-AB12CD34"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "trackingNumber": "TRK-AB12CD34",
            "customer": null,
            "driver": null,
            "vehicle": null,
            "origin": "Oslo",
            "destination": "Bergen",
            "status": "IN_TRANSIT",
            "weight": 2.5,
            "description": null
        })))
        .mount(&server)
        .await;

    let shipment = gateway_for(&server)
        .get_shipment_by_tracking("TRK-AB12CD34")
        .await
        .unwrap();
    assert_eq!(shipment.id, ShipmentId::new(11));
    assert_eq!(shipment.status, ShipmentStatus::InTransit);
}

#[tokio::test]
async fn should_report_a_transport_error_when_the_backend_is_unreachable() {
    let gateway = HttpGateway::new(GatewayConfig {
        base_url: "http://127.0.0.1:1/api".to_string(),
    });
    let err = gateway.list_customers().await.unwrap_err();
    assert!(matches!(
        err,
        freightdeck_domain::error::GatewayError::Transport(_)
    ));
}
