use freightdeck_domain::driver::{Driver, DriverDraft, DriverStatus};
use freightdeck_domain::id::DriverId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::components::{DriverTable, Loading};

/// Drivers page: list with add/edit modal and confirmed delete.
#[component]
pub fn Drivers() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0);
    let drivers = LocalResource::new(move || {
        reload_trigger.track();
        api::fetch_drivers()
    });

    let (modal_open, set_modal_open) = signal(false);
    let (editing, set_editing) = signal(None::<Driver>);
    let draft = RwSignal::new(DriverDraft::default());

    let open_create = move |_| {
        set_editing.set(None);
        draft.set(DriverDraft::default());
        set_modal_open.set(true);
    };

    let open_edit = Callback::new(move |driver: Driver| {
        draft.set(DriverDraft::for_entity(&driver));
        set_editing.set(Some(driver));
        set_modal_open.set(true);
    });

    let close_modal = move |_| set_modal_open.set(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match draft.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                browser::alert(&format!("Error saving driver: {err}"));
                return;
            }
        };
        let editing_id = editing.get_untracked().map(|driver| driver.id);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_driver(id, &payload).await,
                None => api::create_driver(&payload).await,
            };
            match result {
                Ok(_) => {
                    set_modal_open.set(false);
                    set_editing.set(None);
                    draft.set(DriverDraft::default());
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => browser::alert(&format!("Error saving driver: {err}")),
            }
        });
    };

    let remove = Callback::new(move |id: DriverId| {
        if !browser::confirm("Are you sure you want to delete this driver?") {
            return;
        }
        spawn_local(async move {
            match api::delete_driver(id).await {
                Ok(()) => set_reload_trigger.update(|v| *v += 1),
                Err(_) => browser::alert("Error deleting driver"),
            }
        });
    });

    view! {
        <div>
            <div class="page-header">
                <h1>"Drivers"</h1>
                <button class="btn-add" on:click=open_create>"Add Driver"</button>
            </div>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    drivers.read().as_ref().map(|result| {
                        let list = match result {
                            Ok(list) => list.clone(),
                            Err(err) => {
                                leptos::logging::error!("failed to load drivers: {err}");
                                Vec::new()
                            }
                        };
                        view! {
                            <DriverTable drivers=list on_edit=open_edit on_delete=remove/>
                        }
                    })
                }}
            </Suspense>
            {move || modal_open.get().then(|| view! {
                <div class="modal-overlay">
                    <div class="modal">
                        <h2>{move || if editing.read().is_some() { "Edit Driver" } else { "Add Driver" }}</h2>
                        <form on:submit=submit>
                            <label>"Name"
                                <input
                                    required
                                    prop:value=move || draft.read().name.clone()
                                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                />
                            </label>
                            <label>"License Number"
                                <input
                                    required
                                    prop:value=move || draft.read().license_number.clone()
                                    on:input=move |ev| draft.update(|d| d.license_number = event_target_value(&ev))
                                />
                            </label>
                            <label>"Phone"
                                <input
                                    required
                                    prop:value=move || draft.read().phone.clone()
                                    on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                                />
                            </label>
                            <label>"Status"
                                <select
                                    prop:value=move || draft.read().status.as_str()
                                    on:change=move |ev| draft.update(|d| {
                                        d.status = event_target_value(&ev).parse().unwrap_or_default();
                                    })
                                >
                                    {DriverStatus::ALL.iter().map(|status| view! {
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
