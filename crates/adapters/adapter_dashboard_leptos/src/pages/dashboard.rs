use freightdeck_domain::stats::DashboardStats;
use leptos::prelude::*;

use crate::api;
use crate::components::{Loading, StatCard};

/// Dashboard page showing status-partitioned counts across all four
/// entity collections.
#[component]
pub fn Dashboard() -> impl IntoView {
    let stats = LocalResource::new(api::fetch_dashboard_stats);

    view! {
        <div>
            <h1>"Dashboard"</h1>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    stats.read().as_ref().map(|result| {
                        // A failed aggregation renders zeroed counters, no
                        // error surface.
                        let stats = match result {
                            Ok(stats) => *stats,
                            Err(err) => {
                                leptos::logging::error!("failed to load dashboard stats: {err}");
                                DashboardStats::default()
                            }
                        };
                        view! {
                            <div class="stat-grid">
                                <StatCard label="Total Shipments" value=stats.total_shipments/>
                                <StatCard label="Pending" value=stats.pending_shipments/>
                                <StatCard label="In Transit" value=stats.in_transit_shipments/>
                                <StatCard label="Delivered" value=stats.delivered_shipments/>
                                <StatCard label="Customers" value=stats.total_customers/>
                                <StatCard label="Drivers" value=stats.total_drivers/>
                                <StatCard label="Available Drivers" value=stats.available_drivers/>
                                <StatCard label="Vehicles" value=stats.total_vehicles/>
                                <StatCard label="Available Vehicles" value=stats.available_vehicles/>
                            </div>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
