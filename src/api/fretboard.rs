//! Fret mapping operations for the WASM API
//!
//! Every call builds a fresh grid; nothing is kept on the WASM side between
//! calls. Models come from the built-in registry unless the caller passes
//! extra model text, which is merged over it.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, fretboard_error, serialize};
use crate::api::types::{execute_json, MapRequest};
use crate::fretboard::interval_between;
use crate::models::{ModelRegistry, Note, Sequence};
use crate::{wasm_info, wasm_log};

// ============================================================================
// Mapping
// ============================================================================

/// Map sequences onto the fretboard using the built-in models
///
/// # Parameters
/// - `sequences_js`: array of sequence descriptors (camelCase fields)
/// - `tuning_js`: array of open string note names
/// - `capo`: capo fret (0 for none)
/// - `flipped`: true when the last tuning string is drawn lowest
///
/// # Returns
/// `{ rowLen, stringCount, frets }`
#[wasm_bindgen(js_name = mapFrets)]
pub fn map_frets(
    sequences_js: JsValue,
    tuning_js: JsValue,
    capo: u32,
    flipped: bool,
) -> Result<JsValue, JsValue> {
    map_frets_with_models(sequences_js, tuning_js, capo, flipped, String::new())
}

/// Map sequences with extra models (YAML or JSON text) merged over the built-ins
#[wasm_bindgen(js_name = mapFretsWithModels)]
pub fn map_frets_with_models(
    sequences_js: JsValue,
    tuning_js: JsValue,
    capo: u32,
    flipped: bool,
    models: String,
) -> Result<JsValue, JsValue> {
    let sequences: Vec<Sequence> = deserialize(sequences_js, "Failed to deserialize sequences")?;
    let tuning: Vec<String> = deserialize(tuning_js, "Failed to deserialize tuning")?;

    wasm_log!(
        "mapFrets: {} sequences, tuning {:?}, capo {}, flipped {}",
        sequences.len(),
        tuning,
        capo,
        flipped
    );

    let request = MapRequest {
        sequences,
        tuning,
        capo: capo as usize,
        flipped,
        models: Some(models),
        config: None,
    };
    let result = request
        .execute()
        .map_err(|e| fretboard_error("mapFrets failed", e))?;

    wasm_log!("  mapped {} frets", result.frets.len());
    serialize(&result, "Failed to serialize fret grid")
}

/// Map a whole JSON-encoded request and return the JSON-encoded result
#[wasm_bindgen(js_name = mapFretsJson)]
pub fn map_frets_json(request_json: &str) -> Result<String, JsValue> {
    execute_json(request_json).map_err(|e| fretboard_error("mapFretsJson failed", e))
}

// ============================================================================
// Notes and Models
// ============================================================================

/// Half-steps upward from `from` to `to` (0-11)
#[wasm_bindgen(js_name = intervalBetween)]
pub fn interval_between_js(from: &str, to: &str) -> Result<u8, JsValue> {
    interval_between(from, to).map_err(|e| fretboard_error("intervalBetween failed", e))
}

/// Canonical (sharp) spelling of a note name
#[wasm_bindgen(js_name = parseNote)]
pub fn parse_note(name: &str) -> Result<String, JsValue> {
    name.parse::<Note>()
        .map(|note| note.to_string())
        .map_err(|e| fretboard_error("parseNote failed", e))
}

/// Descriptors of every built-in model, sorted by id
#[wasm_bindgen(js_name = listModels)]
pub fn list_models() -> Result<JsValue, JsValue> {
    let descriptors = ModelRegistry::builtin().descriptors();
    wasm_info!("listModels: {} models", descriptors.len());
    serialize(&descriptors, "Failed to serialize models")
}
