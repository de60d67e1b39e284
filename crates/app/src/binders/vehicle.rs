//! Vehicle binder — couples the remote vehicle list to the modal form.

use freightdeck_domain::id::VehicleId;
use freightdeck_domain::vehicle::{Vehicle, VehicleDraft};

use crate::ports::{ConfirmPrompt, Gateway};

/// Per-page state for the vehicles view.
pub struct VehicleBinder<G> {
    gateway: G,
    pub items: Vec<Vehicle>,
    pub loading: bool,
    pub modal_open: bool,
    pub editing: Option<Vehicle>,
    pub draft: VehicleDraft,
    pub notice: Option<String>,
}

impl<G: Gateway> VehicleBinder<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            loading: true,
            modal_open: false,
            editing: None,
            draft: VehicleDraft::default(),
            notice: None,
        }
    }

    /// Fetch the full list; failures are logged and leave the items as-is.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.gateway.list_vehicles().await {
            Ok(items) => self.items = items,
            Err(err) => tracing::error!(error = %err, "failed to load vehicles"),
        }
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.draft = VehicleDraft::default();
        self.modal_open = true;
    }

    pub fn open_edit(&mut self, vehicle: &Vehicle) {
        self.editing = Some(vehicle.clone());
        self.draft = VehicleDraft::for_entity(vehicle);
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Submit the draft: update when editing, create otherwise, then reload.
    /// The capacity string must parse as a number or the submission stops
    /// with a notice before any request is made.
    pub async fn submit(&mut self) {
        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.notice = Some(format!("Error saving vehicle: {err}"));
                return;
            }
        };
        let result = match self.editing.as_ref().map(|v| v.id) {
            Some(id) => self.gateway.update_vehicle(id, &payload).await,
            None => self.gateway.create_vehicle(&payload).await,
        };
        match result {
            Ok(_) => {
                self.modal_open = false;
                self.editing = None;
                self.draft = VehicleDraft::default();
                self.notice = None;
                self.load().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save vehicle");
                self.notice = Some(format!("Error saving vehicle: {err}"));
            }
        }
    }

    /// Delete after interactive confirmation; declining issues no request.
    pub async fn remove(&mut self, id: VehicleId, prompt: &impl ConfirmPrompt) {
        if !prompt.confirm("Are you sure you want to delete this vehicle?") {
            return;
        }
        match self.gateway.delete_vehicle(id).await {
            Ok(()) => self.load().await,
            Err(err) => {
                tracing::error!(error = %err, "failed to delete vehicle");
                self.notice = Some("Error deleting vehicle".to_string());
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
