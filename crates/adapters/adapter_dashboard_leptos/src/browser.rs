//! Thin wrappers over the browser's `confirm` and `alert` dialogs.

/// Ask the user to confirm a destructive action. Returns `false` when no
/// window is available (e.g. headless tests).
pub fn confirm(message: &str) -> bool {
    web_sys::window().is_some_and(|window| window.confirm_with_message(message).unwrap_or(false))
}

/// Show a blocking message dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
