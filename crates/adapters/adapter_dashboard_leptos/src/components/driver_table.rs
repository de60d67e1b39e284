//! Driver table component for displaying a list of drivers.

use freightdeck_domain::driver::Driver;
use freightdeck_domain::id::DriverId;
use leptos::prelude::*;

use super::Badge;

/// A table displaying a list of drivers with edit/delete actions.
#[component]
pub fn DriverTable(
    /// The list of drivers to display.
    drivers: Vec<Driver>,
    /// Callback when the user clicks Edit on a row.
    #[prop(into)]
    on_edit: Callback<Driver>,
    /// Callback when the user clicks Delete on a row.
    #[prop(into)]
    on_delete: Callback<DriverId>,
) -> impl IntoView {
    if drivers.is_empty() {
        view! {
            <p>"No drivers found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"License Number"</th>
                        <th>"Phone"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {drivers.into_iter().map(|driver| {
                        view! {
                            <DriverRow driver on_edit on_delete/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the driver table.
#[component]
fn DriverRow(
    /// The driver to display.
    driver: Driver,
    #[prop(into)] on_edit: Callback<Driver>,
    #[prop(into)] on_delete: Callback<DriverId>,
) -> impl IntoView {
    let id = driver.id;
    let status = driver.status;
    let edit_target = driver.clone();

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{driver.name}</td>
            <td>{driver.license_number}</td>
            <td>{driver.phone}</td>
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
