use freightdeck_domain::customer::Customer;
use freightdeck_domain::driver::Driver;
use freightdeck_domain::id::ShipmentId;
use freightdeck_domain::shipment::{Shipment, ShipmentDraft, ShipmentStatus};
use freightdeck_domain::vehicle::Vehicle;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::components::{Loading, ShipmentTable};

/// Shipments page: list plus add/edit modal whose selects are fed by the
/// customer, driver, and vehicle pick lists.
///
/// The tracking number never appears in the form; the backend generates it
/// on create and the draft carries the existing one through an edit.
#[component]
pub fn Shipments() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0);
    let board = LocalResource::new(move || {
        reload_trigger.track();
        api::fetch_shipment_board()
    });

    let (modal_open, set_modal_open) = signal(false);
    let (editing, set_editing) = signal(None::<Shipment>);
    let draft = RwSignal::new(ShipmentDraft::default());

    let open_create = move |_| {
        set_editing.set(None);
        draft.set(ShipmentDraft::default());
        set_modal_open.set(true);
    };

    let open_edit = Callback::new(move |shipment: Shipment| {
        draft.set(ShipmentDraft::for_entity(&shipment));
        set_editing.set(Some(shipment));
        set_modal_open.set(true);
    });

    let close_modal = Callback::new(move |()| set_modal_open.set(false));

    let submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match draft.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                browser::alert(&format!("Error saving shipment: {err}"));
                return;
            }
        };
        let editing_id = editing.get_untracked().map(|shipment| shipment.id);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_shipment(id, &payload).await,
                None => api::create_shipment(&payload).await,
            };
            match result {
                Ok(_) => {
                    set_modal_open.set(false);
                    set_editing.set(None);
                    draft.set(ShipmentDraft::default());
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => browser::alert(&format!("Error saving shipment: {err}")),
            }
        });
    });

    let remove = Callback::new(move |id: ShipmentId| {
        if !browser::confirm("Are you sure you want to delete this shipment?") {
            return;
        }
        spawn_local(async move {
            match api::delete_shipment(id).await {
                Ok(()) => set_reload_trigger.update(|v| *v += 1),
                Err(_) => browser::alert("Error deleting shipment"),
            }
        });
    });

    view! {
        <div>
            <div class="page-header">
                <h1>"Shipments"</h1>
                <button class="btn-add" on:click=open_create>"Add Shipment"</button>
            </div>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    board.read().as_ref().map(|result| {
                        // All-or-nothing: any failed fetch degrades the
                        // whole page to empty lists.
                        let board = match result {
                            Ok(board) => board.clone(),
                            Err(err) => {
                                leptos::logging::error!("failed to load shipments: {err}");
                                api::ShipmentBoard::default()
                            }
                        };
                        let shipments = board.shipments;
                        let customers = board.customers;
                        let drivers = board.drivers;
                        let vehicles = board.vehicles;
                        view! {
                            <ShipmentTable shipments on_edit=open_edit on_delete=remove/>
                            {move || modal_open.get().then(|| view! {
                                <ShipmentModal
                                    customers=customers.clone()
                                    drivers=drivers.clone()
                                    vehicles=vehicles.clone()
                                    draft=draft
                                    editing=editing.read().is_some()
                                    on_submit=submit
                                    on_cancel=close_modal
                                />
                            })}
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// The add/edit shipment form. Relationship selects hold ids as strings; an
/// empty value means "unselected".
#[component]
fn ShipmentModal(
    customers: Vec<Customer>,
    drivers: Vec<Driver>,
    vehicles: Vec<Vehicle>,
    draft: RwSignal<ShipmentDraft>,
    editing: bool,
    #[prop(into)] on_submit: Callback<SubmitEvent>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{if editing { "Edit Shipment" } else { "Add Shipment" }}</h2>
                <form on:submit=move |ev| on_submit.run(ev)>
                    <label>"Customer"
                        <select
                            prop:value=move || draft.read().customer_id.clone()
                            on:change=move |ev| draft.update(|d| d.customer_id = event_target_value(&ev))
                        >
                            <option value="">"Select Customer"</option>
                            {customers.iter().map(|customer| view! {
                                <option value=customer.id.to_string()>{customer.name.clone()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>"Origin"
                        <input
                            required
                            prop:value=move || draft.read().origin.clone()
                            on:input=move |ev| draft.update(|d| d.origin = event_target_value(&ev))
                        />
                    </label>
                    <label>"Destination"
                        <input
                            required
                            prop:value=move || draft.read().destination.clone()
                            on:input=move |ev| draft.update(|d| d.destination = event_target_value(&ev))
                        />
                    </label>
                    <label>"Driver"
                        <select
                            prop:value=move || draft.read().driver_id.clone()
                            on:change=move |ev| draft.update(|d| d.driver_id = event_target_value(&ev))
                        >
                            <option value="">"Unassigned"</option>
                            {drivers.iter().map(|driver| view! {
                                <option value=driver.id.to_string()>{driver.name.clone()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>"Vehicle"
                        <select
                            prop:value=move || draft.read().vehicle_id.clone()
                            on:change=move |ev| draft.update(|d| d.vehicle_id = event_target_value(&ev))
                        >
                            <option value="">"Unassigned"</option>
                            {vehicles.iter().map(|vehicle| view! {
                                <option value=vehicle.id.to_string()>{vehicle.registration_number.clone()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>"Status"
                        <select
                            prop:value=move || draft.read().status.as_str()
                            on:change=move |ev| draft.update(|d| {
                                d.status = event_target_value(&ev).parse().unwrap_or_default();
                            })
                        >
                            {ShipmentStatus::ALL.iter().map(|status| view! {
                                <option value=status.as_str()>{status.as_str()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>"Weight (kg)"
                        <input
                            type="number"
                            step="any"
                            prop:value=move || draft.read().weight.clone()
                            on:input=move |ev| draft.update(|d| d.weight = event_target_value(&ev))
                        />
                    </label>
                    <label>"Description"
                        <textarea
                            prop:value=move || draft.read().description.clone()
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="modal-actions">
                        <button type="submit" class="btn-save">"Save"</button>
                        <button type="button" class="btn-cancel" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
