//! Shared helpers for WASM API operations
//!
//! Console logging macros, serialization to and from `JsValue`, and the
//! conversion of mapper errors into JavaScript `Error` objects.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::FretboardError;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    web_sys::console::log_1(&format!("[WASM] {}", msg).into());
}

pub fn log_info(msg: &str) {
    web_sys::console::info_1(&format!("[WASM] {}", msg).into());
}

pub fn log_error(msg: &str) {
    web_sys::console::error_1(&format!("[WASM] ❌ {}", msg).into());
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        js_error(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    // Plain objects rather than Maps so the renderer can read fields directly
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        js_error(&msg)
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Wrap a message in a JavaScript `Error`
pub fn js_error(msg: &str) -> JsValue {
    js_sys::Error::new(msg).into()
}

/// Convert a mapper error to a JsValue, logging it on the way out
pub fn fretboard_error(context: &str, err: FretboardError) -> JsValue {
    let msg = format!("{}: {}", context, err);
    wasm_error!("{}", msg);
    js_error(&msg)
}
