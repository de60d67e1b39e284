use freightdeck_domain::id::VehicleId;
use freightdeck_domain::vehicle::{Vehicle, VehicleDraft, VehicleStatus, VehicleType};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::components::{Loading, VehicleTable};

/// Vehicles page: list with add/edit modal and confirmed delete.
#[component]
pub fn Vehicles() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0);
    let vehicles = LocalResource::new(move || {
        reload_trigger.track();
        api::fetch_vehicles()
    });

    let (modal_open, set_modal_open) = signal(false);
    let (editing, set_editing) = signal(None::<Vehicle>);
    let draft = RwSignal::new(VehicleDraft::default());

    let open_create = move |_| {
        set_editing.set(None);
        draft.set(VehicleDraft::default());
        set_modal_open.set(true);
    };

    let open_edit = Callback::new(move |vehicle: Vehicle| {
        draft.set(VehicleDraft::for_entity(&vehicle));
        set_editing.set(Some(vehicle));
        set_modal_open.set(true);
    });

    let close_modal = move |_| set_modal_open.set(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match draft.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                browser::alert(&format!("Error saving vehicle: {err}"));
                return;
            }
        };
        let editing_id = editing.get_untracked().map(|vehicle| vehicle.id);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_vehicle(id, &payload).await,
                None => api::create_vehicle(&payload).await,
            };
            match result {
                Ok(_) => {
                    set_modal_open.set(false);
                    set_editing.set(None);
                    draft.set(VehicleDraft::default());
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => browser::alert(&format!("Error saving vehicle: {err}")),
            }
        });
    };

    let remove = Callback::new(move |id: VehicleId| {
        if !browser::confirm("Are you sure you want to delete this vehicle?") {
            return;
        }
        spawn_local(async move {
            match api::delete_vehicle(id).await {
                Ok(()) => set_reload_trigger.update(|v| *v += 1),
                Err(_) => browser::alert("Error deleting vehicle"),
            }
        });
    });

    view! {
        <div>
            <div class="page-header">
                <h1>"Vehicles"</h1>
                <button class="btn-add" on:click=open_create>"Add Vehicle"</button>
            </div>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    vehicles.read().as_ref().map(|result| {
                        let list = match result {
                            Ok(list) => list.clone(),
                            Err(err) => {
                                leptos::logging::error!("failed to load vehicles: {err}");
                                Vec::new()
                            }
                        };
                        view! {
                            <VehicleTable vehicles=list on_edit=open_edit on_delete=remove/>
                        }
                    })
                }}
            </Suspense>
            {move || modal_open.get().then(|| view! {
                <div class="modal-overlay">
                    <div class="modal">
                        <h2>{move || if editing.read().is_some() { "Edit Vehicle" } else { "Add Vehicle" }}</h2>
                        <form on:submit=submit>
                            <label>"Registration Number"
                                <input
                                    required
                                    prop:value=move || draft.read().registration_number.clone()
                                    on:input=move |ev| draft.update(|d| d.registration_number = event_target_value(&ev))
                                />
                            </label>
                            <label>"Type"
                                <select
                                    prop:value=move || draft.read().vehicle_type.as_str()
                                    on:change=move |ev| draft.update(|d| {
                                        d.vehicle_type = event_target_value(&ev).parse().unwrap_or_default();
                                    })
                                >
                                    {VehicleType::ALL.iter().map(|kind| view! {
                                        <option value=kind.as_str()>{kind.as_str()}</option>
                                    }).collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label>"Model"
                                <input
                                    required
                                    prop:value=move || draft.read().model.clone()
                                    on:input=move |ev| draft.update(|d| d.model = event_target_value(&ev))
                                />
                            </label>
                            <label>"Capacity (kg)"
                                <input
                                    type="number"
                                    step="any"
                                    required
                                    prop:value=move || draft.read().capacity.clone()
                                    on:input=move |ev| draft.update(|d| d.capacity = event_target_value(&ev))
                                />
                            </label>
                            <label>"Status"
                                <select
                                    prop:value=move || draft.read().status.as_str()
                                    on:change=move |ev| draft.update(|d| {
                                        d.status = event_target_value(&ev).parse().unwrap_or_default();
                                    })
                                >
                                    {VehicleStatus::ALL.iter().map(|status| view! {
                                        <option value=status.as_str()>{status.as_str()}</option>
                                    }).collect::<Vec<_>>()}
                                </select>
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
