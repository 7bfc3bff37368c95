//! Request and result types for the WASM API
//!
//! These mirror the arguments of `mapFrets` so a whole mapping can also be
//! sent as one JSON document.

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;
use crate::fretboard::{FretMapper, MapperConfig};
use crate::models::{parse_tuning, Fret, ModelRegistry, Sequence};

/// A complete fret mapping request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRequest {
    pub sequences: Vec<Sequence>,
    /// Open string note names, in string order
    pub tuning: Vec<String>,
    #[serde(default)]
    pub capo: usize,
    #[serde(default)]
    pub flipped: bool,
    /// Extra models (YAML or JSON text) merged over the built-ins
    #[serde(default)]
    pub models: Option<String>,
    #[serde(default)]
    pub config: Option<MapperConfig>,
}

/// Result of a mapping: the flat grid plus its row length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResult {
    pub row_len: usize,
    pub string_count: usize,
    pub frets: Vec<Fret>,
}

impl MapRequest {
    /// Registry for this request: built-ins, overlaid with `models` if present
    pub fn registry(&self) -> Result<ModelRegistry, FretboardError> {
        let mut registry = ModelRegistry::builtin();
        if let Some(text) = self.models.as_deref().filter(|t| !t.trim().is_empty()) {
            registry.merge(ModelRegistry::from_str_auto(text)?);
        }
        Ok(registry)
    }

    pub fn execute(&self) -> Result<MapResult, FretboardError> {
        let tuning = parse_tuning(&self.tuning)?;
        let registry = self.registry()?;
        let config = self.config.unwrap_or_default();

        let mapper = FretMapper::new(&registry).with_config(config);
        let frets = mapper.map(&self.sequences, &tuning, self.capo, self.flipped)?;

        Ok(MapResult {
            row_len: config.row_len(),
            string_count: tuning.len(),
            frets,
        })
    }
}

/// Run a JSON-encoded `MapRequest` and return the JSON-encoded `MapResult`
pub fn execute_json(request: &str) -> Result<String, FretboardError> {
    let request: MapRequest = serde_json::from_str(request)
        .map_err(|e| FretboardError::InvalidRequest(e.to_string()))?;
    let result = request.execute()?;
    serde_json::to_string(&result)
        .map_err(|e| FretboardError::InvalidRequest(format!("cannot encode result: {}", e)))
}
