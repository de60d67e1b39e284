//! Driver binder — couples the remote driver list to the modal form.

use freightdeck_domain::driver::{Driver, DriverDraft};
use freightdeck_domain::id::DriverId;

use crate::ports::{ConfirmPrompt, Gateway};

/// Per-page state for the drivers view.
pub struct DriverBinder<G> {
    gateway: G,
    pub items: Vec<Driver>,
    pub loading: bool,
    pub modal_open: bool,
    pub editing: Option<Driver>,
    pub draft: DriverDraft,
    pub notice: Option<String>,
}

impl<G: Gateway> DriverBinder<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            loading: true,
            modal_open: false,
            editing: None,
            draft: DriverDraft::default(),
            notice: None,
        }
    }

    /// Fetch the full list; failures are logged and leave the items as-is.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.gateway.list_drivers().await {
            Ok(items) => self.items = items,
            Err(err) => tracing::error!(error = %err, "failed to load drivers"),
        }
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.draft = DriverDraft::default();
        self.modal_open = true;
    }

    pub fn open_edit(&mut self, driver: &Driver) {
        self.editing = Some(driver.clone());
        self.draft = DriverDraft::for_entity(driver);
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Submit the draft: update when editing, create otherwise, then reload.
    /// A failure leaves the modal open with the draft intact and sets a
    /// blocking notice.
    pub async fn submit(&mut self) {
        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.notice = Some(format!("Error saving driver: {err}"));
                return;
            }
        };
        let result = match self.editing.as_ref().map(|d| d.id) {
            Some(id) => self.gateway.update_driver(id, &payload).await,
            None => self.gateway.create_driver(&payload).await,
        };
        match result {
            Ok(_) => {
                self.modal_open = false;
                self.editing = None;
                self.draft = DriverDraft::default();
                self.notice = None;
                self.load().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save driver");
                self.notice = Some(format!("Error saving driver: {err}"));
            }
        }
    }

    /// Delete after interactive confirmation; declining issues no request.
    pub async fn remove(&mut self, id: DriverId, prompt: &impl ConfirmPrompt) {
        if !prompt.confirm("Are you sure you want to delete this driver?") {
            return;
        }
        match self.gateway.delete_driver(id).await {
            Ok(()) => self.load().await,
            Err(err) => {
                tracing::error!(error = %err, "failed to delete driver");
                self.notice = Some("Error deleting driver".to_string());
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
