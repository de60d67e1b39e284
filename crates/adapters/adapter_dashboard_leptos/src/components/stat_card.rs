//! Dashboard counter card.

use leptos::prelude::*;

/// One counter on the dashboard grid: the count on top, its caption below.
#[component]
pub fn StatCard(
    /// Caption describing what is being counted.
    #[prop(into)]
    label: String,
    /// The count itself.
    value: usize,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
