use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `log` output to the browser console and panics to `console.error`.
///
/// Only the first call has any effect, so every lesson entry point can call it.
pub fn init(level: log::Level) {
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        wasm_logger::init(wasm_logger::Config::new(level));
    });
}
