use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <span class="brand">"FreightDeck"</span>
            <ul>
                <li><a href="/">"Dashboard"</a></li>
                <li><a href="/customers">"Customers"</a></li>
                <li><a href="/drivers">"Drivers"</a></li>
                <li><a href="/vehicles">"Vehicles"</a></li>
                <li><a href="/shipments">"Shipments"</a></li>
            </ul>
        </nav>
    }
}
