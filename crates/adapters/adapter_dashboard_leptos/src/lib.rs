use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod browser;
mod components;
mod pages;

use components::Nav;
use pages::{Customers, Dashboard, Drivers, NotFound, Shipments, Vehicles};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Dashboard/>
                    <Route path=path!("customers") view=Customers/>
                    <Route path=path!("drivers") view=Drivers/>
                    <Route path=path!("vehicles") view=Vehicles/>
                    <Route path=path!("shipments") view=Shipments/>
                </Routes>
            </main>
        </Router>
    }
}
