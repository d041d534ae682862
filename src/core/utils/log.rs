//! Console logging macros
//!
//! On wasm32 the message goes to the browser console through `web_sys`.
//! Everywhere else the arguments are still type-checked but nothing is
//! printed: calling a JS import off wasm32 aborts the process.
//!
//! Usage:
//! ```rust
//! use blob_engine::{console_log, console_warn};
//!
//! let bodies = 5;
//! console_log!("spawned {} blobs", bodies);
//! console_warn!("missing element #{}", "logo");
//! ```

/// Log an informational line to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
