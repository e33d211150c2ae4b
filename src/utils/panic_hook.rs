use std::panic;
use leptos::logging::log;

/// Pulls the human-readable message out of a panic payload.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Chains a tagged summary after the console hook so panics are easy to
/// spot among the `[API]` and `[SESSION]` lines.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        log!("[PANIC] {} at {}", message, location);

        if message.contains("OwnerDisposed") {
            log!("[PANIC] A signal or callback ran after its page was unmounted.");
            log!("[PANIC] Check spawn_local tasks that outlive navigation.");
        }
    }));
}

/// Call once from `main` before mounting.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}

#[cfg(test)]
mod tests {
    use super::panic_message;

    #[test]
    fn extracts_string_and_str_payloads() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("boom"));
        assert_eq!(panic_message(owned.as_ref()), "boom");

        let borrowed: Box<dyn std::any::Any + Send> = Box::new("static boom");
        assert_eq!(panic_message(borrowed.as_ref()), "static boom");

        let other: Box<dyn std::any::Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(other.as_ref()), "Unknown panic");
    }
}
