//! Thin wrappers over browser dialogs and navigation.
//!
//! TRADE-OFFS
//! ==========
//! These are browser-only effects; SSR and test builds no-op so rendering
//! stays deterministic.

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Hand a `tel:`, `sms:` or `mailto:` link to the platform.
pub fn open_external(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(href) {
                log::warn!("failed to open {href}: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Log an API failure and tell the user about it.
pub fn report_failure(action: &str, message: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("{action} failed: {message}");
    #[cfg(not(feature = "hydrate"))]
    let _ = action;
    alert(message);
}
