//! Customer table component for displaying a list of customers.

use freightdeck_domain::customer::Customer;
use freightdeck_domain::display::text_or_na;
use freightdeck_domain::id::CustomerId;
use leptos::prelude::*;

/// A table displaying a list of customers with edit/delete actions.
#[component]
pub fn CustomerTable(
    /// The list of customers to display.
    customers: Vec<Customer>,
    /// Callback when the user clicks Edit on a row.
    #[prop(into)]
    on_edit: Callback<Customer>,
    /// Callback when the user clicks Delete on a row.
    #[prop(into)]
    on_delete: Callback<CustomerId>,
) -> impl IntoView {
    if customers.is_empty() {
        view! {
            <p>"No customers found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Address"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {customers.into_iter().map(|customer| {
                        view! {
                            <CustomerRow customer on_edit on_delete/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the customer table.
#[component]
fn CustomerRow(
    /// The customer to display.
    customer: Customer,
    #[prop(into)] on_edit: Callback<Customer>,
    #[prop(into)] on_delete: Callback<CustomerId>,
) -> impl IntoView {
    let id = customer.id;
    let address = text_or_na(customer.address.as_deref());
    let edit_target = customer.clone();

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{customer.name}</td>
            <td>{customer.email}</td>
            <td>{customer.phone}</td>
            <td>{address}</td>
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
