//! Fretboard Mapper WASM API
//!
//! JavaScript-facing wrappers around the mapping core.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, `JsValue` serialization, error conversion
//! - `types`: `MapRequest` / `MapResult`, usable without a browser
//! - `fretboard`: the exported `mapFrets`, `intervalBetween`, `listModels`, ...

pub mod fretboard;
pub mod helpers;
pub mod types;

pub use fretboard::{interval_between_js, list_models, map_frets, map_frets_json, map_frets_with_models, parse_note};
pub use types::{execute_json, MapRequest, MapResult};
