//! Vehicle table component for displaying a list of vehicles.

use freightdeck_domain::display::number_or_na;
use freightdeck_domain::id::VehicleId;
use freightdeck_domain::vehicle::Vehicle;
use leptos::prelude::*;

use super::Badge;

/// A table displaying a list of vehicles with edit/delete actions.
#[component]
pub fn VehicleTable(
    /// The list of vehicles to display.
    vehicles: Vec<Vehicle>,
    /// Callback when the user clicks Edit on a row.
    #[prop(into)]
    on_edit: Callback<Vehicle>,
    /// Callback when the user clicks Delete on a row.
    #[prop(into)]
    on_delete: Callback<VehicleId>,
) -> impl IntoView {
    if vehicles.is_empty() {
        view! {
            <p>"No vehicles found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Registration"</th>
                        <th>"Type"</th>
                        <th>"Model"</th>
                        <th>"Capacity (kg)"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {vehicles.into_iter().map(|vehicle| {
                        view! {
                            <VehicleRow vehicle on_edit on_delete/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the vehicle table.
#[component]
fn VehicleRow(
    /// The vehicle to display.
    vehicle: Vehicle,
    #[prop(into)] on_edit: Callback<Vehicle>,
    #[prop(into)] on_delete: Callback<VehicleId>,
) -> impl IntoView {
    let id = vehicle.id;
    let status = vehicle.status;
    let capacity = number_or_na(vehicle.capacity);
    let edit_target = vehicle.clone();

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{vehicle.registration_number}</td>
            <td>{vehicle.vehicle_type.as_str()}</td>
            <td>{vehicle.model}</td>
            <td>{capacity}</td>
            <td><Badge status=status.as_str()/></td>
            <td>
                <button class="btn-edit" on:click=move |_| on_edit.run(edit_target.clone())>
                    "Edit"
                </button>
                <button class="btn-delete" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
