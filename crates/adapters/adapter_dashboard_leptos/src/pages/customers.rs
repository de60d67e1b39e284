use freightdeck_domain::customer::{Customer, CustomerDraft};
use freightdeck_domain::id::CustomerId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::components::{CustomerTable, Loading};

/// Customers page: list with add/edit modal and confirmed delete.
#[component]
pub fn Customers() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0);
    let customers = LocalResource::new(move || {
        reload_trigger.track();
        api::fetch_customers()
    });

    let (modal_open, set_modal_open) = signal(false);
    let (editing, set_editing) = signal(None::<Customer>);
    let draft = RwSignal::new(CustomerDraft::default());

    let open_create = move |_| {
        set_editing.set(None);
        draft.set(CustomerDraft::default());
        set_modal_open.set(true);
    };

    let open_edit = Callback::new(move |customer: Customer| {
        draft.set(CustomerDraft::for_entity(&customer));
        set_editing.set(Some(customer));
        set_modal_open.set(true);
    });

    // Cancel only hides the modal; reopening via Add resets the form.
    let close_modal = move |_| set_modal_open.set(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match draft.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                browser::alert(&format!("Error saving customer: {err}"));
                return;
            }
        };
        let editing_id = editing.get_untracked().map(|customer| customer.id);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_customer(id, &payload).await,
                None => api::create_customer(&payload).await,
            };
            match result {
                Ok(_) => {
                    set_modal_open.set(false);
                    set_editing.set(None);
                    draft.set(CustomerDraft::default());
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => browser::alert(&format!("Error saving customer: {err}")),
            }
        });
    };

    let remove = Callback::new(move |id: CustomerId| {
        if !browser::confirm("Are you sure you want to delete this customer?") {
            return;
        }
        spawn_local(async move {
            match api::delete_customer(id).await {
                Ok(()) => set_reload_trigger.update(|v| *v += 1),
                Err(_) => browser::alert("Error deleting customer"),
            }
        });
    });

    view! {
        <div>
            <div class="page-header">
                <h1>"Customers"</h1>
                <button class="btn-add" on:click=open_create>"Add Customer"</button>
            </div>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    customers.read().as_ref().map(|result| {
                        // A failed load degrades to the empty table; the
                        // list view cannot tell "no data" from "failed".
                        let list = match result {
                            Ok(list) => list.clone(),
                            Err(err) => {
                                leptos::logging::error!("failed to load customers: {err}");
                                Vec::new()
                            }
                        };
                        view! {
                            <CustomerTable customers=list on_edit=open_edit on_delete=remove/>
                        }
                    })
                }}
            </Suspense>
            {move || modal_open.get().then(|| view! {
                <div class="modal-overlay">
                    <div class="modal">
                        <h2>{move || if editing.read().is_some() { "Edit Customer" } else { "Add Customer" }}</h2>
                        <form on:submit=submit>
                            <label>"Name"
                                <input
                                    required
                                    prop:value=move || draft.read().name.clone()
                                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                />
                            </label>
                            <label>"Email"
                                <input
                                    type="email"
                                    required
                                    prop:value=move || draft.read().email.clone()
                                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                                />
                            </label>
                            <label>"Phone"
                                <input
                                    required
                                    prop:value=move || draft.read().phone.clone()
                                    on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                                />
                            </label>
                            <label>"Address"
                                <input
                                    prop:value=move || draft.read().address.clone()
                                    on:input=move |ev| draft.update(|d| d.address = event_target_value(&ev))
                                />
                            </label>
                            <div class="modal-actions">
                                <button type="submit" class="btn-save">"Save"</button>
                                <button type="button" class="btn-cancel" on:click=close_modal>"Cancel"</button>
                            </div>
                        </form>
                    </div>
                </div>
            })}
        </div>
    }
}
