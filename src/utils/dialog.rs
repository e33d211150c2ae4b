use leptos::logging::warn;

/// Blocking browser alert.
pub fn alert(message: &str) {
    if leptos::window().alert_with_message(message).is_err() {
        warn!("[DIALOG] Could not show alert: {}", message);
    }
}

/// Blocking yes/no prompt; a dialog that fails to open counts as "no".
pub fn confirm(message: &str) -> bool {
    leptos::window().confirm_with_message(message).unwrap_or(false)
}
