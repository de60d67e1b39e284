//! Confirm-prompt port — interactive confirmation before destructive actions.
//!
//! In the browser this is `window.confirm`; tests pass a closure.

/// Asks the user to confirm an action. Returns `true` to proceed.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
