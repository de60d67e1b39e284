//! Shipment binder — couples the remote shipment list to the modal form.
//!
//! Unlike the other binders this one also owns the customer, driver, and
//! vehicle pick lists backing the form selects, so its `load()` issues all
//! four list requests concurrently.

use freightdeck_domain::customer::Customer;
use freightdeck_domain::driver::Driver;
use freightdeck_domain::id::ShipmentId;
use freightdeck_domain::shipment::{Shipment, ShipmentDraft};
use freightdeck_domain::vehicle::Vehicle;

use crate::ports::{ConfirmPrompt, Gateway};

/// Per-page state for the shipments view.
pub struct ShipmentBinder<G> {
    gateway: G,
    pub items: Vec<Shipment>,
    /// Pick list for the required customer select.
    pub customers: Vec<Customer>,
    /// Pick list for the optional driver select.
    pub drivers: Vec<Driver>,
    /// Pick list for the optional vehicle select.
    pub vehicles: Vec<Vehicle>,
    pub loading: bool,
    pub modal_open: bool,
    pub editing: Option<Shipment>,
    pub draft: ShipmentDraft,
    pub notice: Option<String>,
}

impl<G: Gateway> ShipmentBinder<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            customers: Vec::new(),
            drivers: Vec::new(),
            vehicles: Vec::new(),
            loading: true,
            modal_open: false,
            editing: None,
            draft: ShipmentDraft::default(),
            notice: None,
        }
    }

    /// Fetch the shipment list and the three pick lists concurrently.
    /// Assignment is all-or-nothing: if any of the four requests fails, the
    /// failure is logged and every list keeps its previous value.
    pub async fn load(&mut self) {
        self.loading = true;
        let (shipments, customers, drivers, vehicles) = tokio::join!(
            self.gateway.list_shipments(),
            self.gateway.list_customers(),
            self.gateway.list_drivers(),
            self.gateway.list_vehicles(),
        );
        match (shipments, customers, drivers, vehicles) {
            (Ok(shipments), Ok(customers), Ok(drivers), Ok(vehicles)) => {
                self.items = shipments;
                self.customers = customers;
                self.drivers = drivers;
                self.vehicles = vehicles;
            }
            (shipments, customers, drivers, vehicles) => {
                let failed = [
                    shipments.err().map(|e| ("shipments", e)),
                    customers.err().map(|e| ("customers", e)),
                    drivers.err().map(|e| ("drivers", e)),
                    vehicles.err().map(|e| ("vehicles", e)),
                ];
                for (list, err) in failed.into_iter().flatten() {
                    tracing::error!(error = %err, list, "failed to load shipment page data");
                }
            }
        }
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.draft = ShipmentDraft::default();
        self.modal_open = true;
    }

    pub fn open_edit(&mut self, shipment: &Shipment) {
        self.editing = Some(shipment.clone());
        self.draft = ShipmentDraft::for_entity(shipment);
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Submit the draft: update when editing, create otherwise, then reload.
    /// The draft's relationship ids are wrapped as `{"id": …}` reference
    /// objects; a blank tracking number is omitted so the backend generates
    /// one.
    pub async fn submit(&mut self) {
        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.notice = Some(format!("Error saving shipment: {err}"));
                return;
            }
        };
        let result = match self.editing.as_ref().map(|s| s.id) {
            Some(id) => self.gateway.update_shipment(id, &payload).await,
            None => self.gateway.create_shipment(&payload).await,
        };
        match result {
            Ok(_) => {
                self.modal_open = false;
                self.editing = None;
                self.draft = ShipmentDraft::default();
                self.notice = None;
                self.load().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save shipment");
                self.notice = Some(format!("Error saving shipment: {err}"));
            }
        }
    }

    /// Delete after interactive confirmation; declining issues no request.
    pub async fn remove(&mut self, id: ShipmentId, prompt: &impl ConfirmPrompt) {
        if !prompt.confirm("Are you sure you want to delete this shipment?") {
            return;
        }
        match self.gateway.delete_shipment(id).await {
            Ok(()) => self.load().await,
            Err(err) => {
                tracing::error!(error = %err, "failed to delete shipment");
                self.notice = Some("Error deleting shipment".to_string());
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
