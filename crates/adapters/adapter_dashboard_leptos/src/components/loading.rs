//! Centered loading indicator shown while a page's data is in flight.

use leptos::prelude::*;

/// Spinner with a caption.
#[component]
pub fn Loading(
    /// Caption shown next to the spinner.
    #[prop(default = "Loading\u{2026}".into(), into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner" aria-hidden="true"></span>
            <span>{message}</span>
        </div>
    }
}
