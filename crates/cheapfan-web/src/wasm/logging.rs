//! Console logging for the browser build.

/// Install the panic hook and route `tracing` events to the devtools console.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    console_error_panic_hook::set_once();
    if tracing_wasm::try_set_as_global_default().is_err() {
        web_sys::console::warn_1(&"cheapfan: tracing subscriber already installed".into());
    }
}
