//! Dashboard aggregator — derives status-partitioned counts from the four
//! entity lists. There is no dedicated backend endpoint for this; the
//! aggregator fetches the lists and counts client-side.

use freightdeck_domain::stats::DashboardStats;

use crate::ports::Gateway;

/// Per-page state for the dashboard view.
pub struct DashboardBinder<G> {
    gateway: G,
    /// Last successfully computed counts; zeroed until the first load.
    pub stats: DashboardStats,
    pub loading: bool,
}

impl<G: Gateway> DashboardBinder<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            stats: DashboardStats::default(),
            loading: true,
        }
    }

    /// Fetch all four lists concurrently and recompute the counts once all
    /// of them resolve. If any request fails the whole aggregation fails
    /// silently: the error is logged and the last-known stats remain — no
    /// partial aggregation, no retry.
    pub async fn load(&mut self) {
        self.loading = true;
        let (customers, drivers, vehicles, shipments) = tokio::join!(
            self.gateway.list_customers(),
            self.gateway.list_drivers(),
            self.gateway.list_vehicles(),
            self.gateway.list_shipments(),
        );
        match (customers, drivers, vehicles, shipments) {
            (Ok(customers), Ok(drivers), Ok(vehicles), Ok(shipments)) => {
                self.stats =
                    DashboardStats::from_lists(&customers, &drivers, &vehicles, &shipments);
            }
            _ => tracing::error!("failed to load dashboard stats"),
        }
        self.loading = false;
    }
}
