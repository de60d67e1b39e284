//! Customer binder — couples the remote customer list to the modal form.

use freightdeck_domain::customer::{Customer, CustomerDraft};
use freightdeck_domain::id::CustomerId;

use crate::ports::{ConfirmPrompt, Gateway};

/// Per-page state for the customers view.
///
/// Owned exclusively by one page instance; constructed on mount and torn
/// down with the page. `load()` should be called once after construction.
pub struct CustomerBinder<G> {
    gateway: G,
    /// The last list fetched from the backend.
    pub items: Vec<Customer>,
    /// True until the first load settles, and during reloads.
    pub loading: bool,
    /// Whether the create/edit modal overlay is visible.
    pub modal_open: bool,
    /// The customer being edited, or `None` when creating.
    pub editing: Option<Customer>,
    /// The in-progress form state backing the modal inputs.
    pub draft: CustomerDraft,
    /// Blocking error notice from the last failed mutation.
    pub notice: Option<String>,
}

impl<G: Gateway> CustomerBinder<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            loading: true,
            modal_open: false,
            editing: None,
            draft: CustomerDraft::default(),
            notice: None,
        }
    }

    /// Fetch the full list. A failure is logged and the previous items are
    /// kept (initially empty) — the list view cannot tell "no data" from
    /// "failed to load".
    pub async fn load(&mut self) {
        self.loading = true;
        match self.gateway.list_customers().await {
            Ok(items) => self.items = items,
            Err(err) => tracing::error!(error = %err, "failed to load customers"),
        }
        self.loading = false;
    }

    /// Open the modal with a fresh draft for creating a customer.
    pub fn open_create(&mut self) {
        self.editing = None;
        self.draft = CustomerDraft::default();
        self.modal_open = true;
    }

    /// Open the modal prefilled from `customer` for editing.
    pub fn open_edit(&mut self, customer: &Customer) {
        self.editing = Some(customer.clone());
        self.draft = CustomerDraft::for_entity(customer);
        self.modal_open = true;
    }

    /// Hide the modal. The draft and `editing` survive; every open path
    /// resets them.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Submit the draft: update when editing, create otherwise. On success
    /// the modal closes, the draft resets, and the list is reloaded. On
    /// failure a blocking notice is set and the modal stays open with the
    /// draft intact so the user can retry.
    pub async fn submit(&mut self) {
        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.notice = Some(format!("Error saving customer: {err}"));
                return;
            }
        };
        let result = match self.editing.as_ref().map(|c| c.id) {
            Some(id) => self.gateway.update_customer(id, &payload).await,
            None => self.gateway.create_customer(&payload).await,
        };
        match result {
            Ok(_) => {
                self.modal_open = false;
                self.editing = None;
                self.draft = CustomerDraft::default();
                self.notice = None;
                self.load().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save customer");
                self.notice = Some(format!("Error saving customer: {err}"));
            }
        }
    }

    /// Delete after interactive confirmation; declining issues no request.
    pub async fn remove(&mut self, id: CustomerId, prompt: &impl ConfirmPrompt) {
        if !prompt.confirm("Are you sure you want to delete this customer?") {
            return;
        }
        match self.gateway.delete_customer(id).await {
            Ok(()) => self.load().await,
            Err(err) => {
                tracing::error!(error = %err, "failed to delete customer");
                self.notice = Some("Error deleting customer".to_string());
            }
        }
    }

    /// Clear the blocking error notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGateway, sample_customer};

    fn filled_draft() -> CustomerDraft {
        CustomerDraft {
            name: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            phone: "555-0100".to_string(),
            address: String::new(),
        }
    }

    #[tokio::test]
    async fn should_replace_items_when_load_succeeds() {
        let gateway = FakeGateway::new();
        gateway.seed_customer(sample_customer(1, "Acme"));
        let mut binder = CustomerBinder::new(gateway);
        assert!(binder.loading);

        binder.load().await;

        assert!(!binder.loading);
        assert_eq!(binder.items.len(), 1);
        assert_eq!(binder.items[0].name, "Acme");
    }

    #[tokio::test]
    async fn should_degrade_to_empty_when_load_fails() {
        let gateway = FakeGateway::new();
        gateway.fail_lists();
        let mut binder = CustomerBinder::new(gateway);

        binder.load().await;

        assert!(!binder.loading);
        assert!(binder.items.is_empty());
        assert!(binder.notice.is_none());
    }

    #[tokio::test]
    async fn should_reset_draft_when_opening_create() {
        let gateway = FakeGateway::new();
        let customer = sample_customer(1, "Acme");
        let mut binder = CustomerBinder::new(gateway);
        binder.open_edit(&customer);

        binder.open_create();

        assert!(binder.modal_open);
        assert!(binder.editing.is_none());
        assert_eq!(binder.draft, CustomerDraft::default());
    }

    #[tokio::test]
    async fn should_prefill_draft_when_opening_edit() {
        let gateway = FakeGateway::new();
        let customer = sample_customer(1, "Acme");
        let mut binder = CustomerBinder::new(gateway);

        binder.open_edit(&customer);

        assert!(binder.modal_open);
        assert_eq!(binder.editing.as_ref().unwrap().id, customer.id);
        assert_eq!(binder.draft.name, "Acme");
    }

    #[tokio::test]
    async fn should_create_and_reload_when_submitting_new_draft() {
        let gateway = FakeGateway::new();
        let mut binder = CustomerBinder::new(gateway);
        binder.load().await;
        binder.open_create();
        binder.draft = filled_draft();

        binder.submit().await;

        assert!(!binder.modal_open);
        assert!(binder.editing.is_none());
        assert_eq!(binder.draft, CustomerDraft::default());
        assert_eq!(binder.items.len(), 1);
        let created = &binder.items[0];
        assert_eq!(created.name, "Acme");
        assert_eq!(created.email, "a@acme.com");
        assert_eq!(created.phone, "555-0100");
        assert!(created.address.is_none());
    }

    #[tokio::test]
    async fn should_update_existing_when_submitting_while_editing() {
        let gateway = FakeGateway::new();
        gateway.seed_customer(sample_customer(1, "Acme"));
        let mut binder = CustomerBinder::new(gateway);
        binder.load().await;
        let existing = binder.items[0].clone();

        binder.open_edit(&existing);
        binder.draft.phone = "555-0199".to_string();
        binder.submit().await;

        assert_eq!(binder.items.len(), 1);
        assert_eq!(binder.items[0].id, existing.id);
        assert_eq!(binder.items[0].phone, "555-0199");
        assert!(binder.editing.is_none());
    }

    #[tokio::test]
    async fn should_keep_modal_open_with_notice_when_submit_fails() {
        let gateway = FakeGateway::new();
        gateway.fail_mutations();
        let mut binder = CustomerBinder::new(gateway);
        binder.open_create();
        binder.draft = filled_draft();

        binder.submit().await;

        assert!(binder.modal_open);
        assert_eq!(binder.draft, filled_draft());
        let notice = binder.notice.as_deref().unwrap();
        assert!(notice.contains("rejected by backend"));
    }

    #[tokio::test]
    async fn should_set_notice_without_network_call_when_draft_invalid() {
        let gateway = FakeGateway::new();
        let mut binder = CustomerBinder::new(gateway);
        binder.open_create();
        binder.draft.name = "Acme".to_string();
        // email and phone left blank

        binder.submit().await;

        assert!(binder.modal_open);
        assert!(binder.notice.as_deref().unwrap().contains("must not be empty"));
        assert!(binder.items.is_empty());
    }

    #[tokio::test]
    async fn should_leave_backend_unchanged_when_edit_is_cancelled() {
        let gateway = FakeGateway::new();
        gateway.seed_customer(sample_customer(1, "Acme"));
        let mut binder = CustomerBinder::new(gateway.clone());
        binder.load().await;
        let before = binder.items.clone();

        let existing = before[0].clone();
        binder.open_edit(&existing);
        binder.draft.name = "Changed but never submitted".to_string();
        binder.close_modal();
        binder.load().await;

        assert_eq!(binder.items, before);
    }

    #[tokio::test]
    async fn should_delete_and_reload_when_confirmed() {
        let gateway = FakeGateway::new();
        gateway.seed_customer(sample_customer(1, "Acme"));
        let mut binder = CustomerBinder::new(gateway.clone());
        binder.load().await;

        binder.remove(CustomerId::new(1), &|_: &str| true).await;

        assert_eq!(gateway.delete_calls(), 1);
        assert!(binder.items.is_empty());
    }

    #[tokio::test]
    async fn should_not_issue_request_when_confirmation_declined() {
        let gateway = FakeGateway::new();
        gateway.seed_customer(sample_customer(1, "Acme"));
        let mut binder = CustomerBinder::new(gateway.clone());
        binder.load().await;

        binder.remove(CustomerId::new(1), &|_: &str| false).await;

        assert_eq!(gateway.delete_calls(), 0);
        assert_eq!(binder.items.len(), 1);
    }

    #[tokio::test]
    async fn should_set_generic_notice_when_delete_fails() {
        let gateway = FakeGateway::new();
        gateway.seed_customer(sample_customer(1, "Acme"));
        let mut binder = CustomerBinder::new(gateway.clone());
        binder.load().await;
        gateway.fail_mutations();

        binder.remove(CustomerId::new(1), &|_: &str| true).await;

        assert_eq!(binder.notice.as_deref(), Some("Error deleting customer"));
        assert_eq!(binder.items.len(), 1);
    }

    #[tokio::test]
    async fn should_clear_notice_when_dismissed() {
        let gateway = FakeGateway::new();
        let mut binder = CustomerBinder::new(gateway);
        binder.notice = Some("Error saving customer".to_string());

        binder.dismiss_notice();

        assert!(binder.notice.is_none());
    }
}
