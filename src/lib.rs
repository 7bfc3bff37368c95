//! Fretboard Mapper WASM Module
//!
//! Computes which frets of a stringed instrument belong to which scale or
//! pattern overlays, for a given tuning, capo and set of position windows.
//! The mapping core is plain Rust; `api` exposes it to JavaScript.

pub mod api;
pub mod error;
pub mod fretboard;
pub mod models;

// Re-export commonly used types
pub use error::FretboardError;
pub use fretboard::{interval, interval_between, map_frets, FretMapper, MapperConfig};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    log::info!("Fretboard mapper WASM module initialized");
}
