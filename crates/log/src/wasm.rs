use web_sys::wasm_bindgen::JsValue;

use crate::{Message, Verbosity};

type ConsoleFn = fn(&JsValue, &JsValue, &JsValue, &JsValue);

/// Returns the console function, label and label color used for `verbosity`.
fn style(verbosity: Verbosity) -> (ConsoleFn, &'static str, &'static str) {
    match verbosity {
        Verbosity::Error => (web_sys::console::error_4 as ConsoleFn, "ERROR", "#f00"),
        Verbosity::Warning => (web_sys::console::warn_4 as ConsoleFn, "WARNING", "#fa0"),
        Verbosity::Info => (web_sys::console::info_4 as ConsoleFn, "INFO", "#00f"),
        Verbosity::Trace => (web_sys::console::log_4 as ConsoleFn, "TRACE", "#888"),
    }
}

/// Forwards a message to the browser console, with the label and location styled through
/// `%c` directives.
pub fn log(msg: Message) {
    let (console, label, color) = style(msg.verbosity);

    let text = format!(
        "%c{label}%c [{}] {}  %c{}:{}:{}",
        msg.module, msg.message, msg.file, msg.line, msg.column,
    );

    console(
        &JsValue::from(text),
        &JsValue::from(format!("color: {color}; font-weight: bold;")),
        &JsValue::from_str("color: inherit; font-weight: inherit;"),
        &JsValue::from_str("color: #888;"),
    );
}
