//! Blocking browser alert.
//!
//! Outside the browser the message is logged instead, so page logic that
//! raises an alert stays callable from native tests.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Show `message` in a modal `window.alert` dialog.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("alert without window: {message}");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}
