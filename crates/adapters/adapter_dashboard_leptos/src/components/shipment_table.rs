//! Shipment table component for displaying a list of shipments.

use freightdeck_domain::display::{name_or_unassigned, number_or_na, text_or_na};
use freightdeck_domain::id::ShipmentId;
use freightdeck_domain::shipment::Shipment;
use leptos::prelude::*;

use super::Badge;

/// A table displaying a list of shipments with edit/delete actions.
///
/// Relationship columns show the embedded entity's display name, or a
/// placeholder when the backend sent no assignment.
#[component]
pub fn ShipmentTable(
    /// The list of shipments to display.
    shipments: Vec<Shipment>,
    /// Callback when the user clicks Edit on a row.
    #[prop(into)]
    on_edit: Callback<Shipment>,
    /// Callback when the user clicks Delete on a row.
    #[prop(into)]
    on_delete: Callback<ShipmentId>,
) -> impl IntoView {
    if shipments.is_empty() {
        view! {
            <p>"No shipments found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"Tracking #"</th>
                        <th>"Customer"</th>
                        <th>"Origin"</th>
                        <th>"Destination"</th>
                        <th>"Driver"</th>
                        <th>"Vehicle"</th>
                        <th>"Weight (kg)"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {shipments.into_iter().map(|shipment| {
                        view! {
                            <ShipmentRow shipment on_edit on_delete/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the shipment table.
#[component]
fn ShipmentRow(
    /// The shipment to display.
    shipment: Shipment,
    #[prop(into)] on_edit: Callback<Shipment>,
    #[prop(into)] on_delete: Callback<ShipmentId>,
) -> impl IntoView {
    let id = shipment.id;
    let status = shipment.status;
    let customer = text_or_na(shipment.customer.as_ref().map(|c| c.name.as_str()));
    let driver = name_or_unassigned(shipment.driver.as_ref().map(|d| d.name.as_str()));
    let vehicle = name_or_unassigned(
        shipment
            .vehicle
            .as_ref()
            .map(|v| v.registration_number.as_str()),
    );
    let weight = number_or_na(shipment.weight);
    let edit_target = shipment.clone();

    view! {
        <tr>
            <td>{shipment.tracking_number}</td>
            <td>{customer}</td>
            <td>{shipment.origin}</td>
            <td>{shipment.destination}</td>
            <td>{driver}</td>
            <td>{vehicle}</td>
            <td>{weight}</td>
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
