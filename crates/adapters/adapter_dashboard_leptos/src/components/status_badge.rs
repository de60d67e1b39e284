//! Colored status badge component.

use freightdeck_domain::display::status_badge;
use leptos::prelude::*;

/// A status rendered as a colored pill. The CSS selector is derived from
/// the wire spelling (`IN_TRANSIT` → `status-in-transit`).
#[component]
pub fn Badge(
    /// The wire-spelled status to display.
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let badge = status_badge(&status);
    view! {
        <span class=badge.css_class>{badge.label}</span>
    }
}
