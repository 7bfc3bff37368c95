//! Sequence model registry (scales, modes, arpeggios)
//!
//! A model gives the half-step intervals of a pattern relative to its root and,
//! optionally, a table of position windows. Windows are [start, stop] fret
//! offsets relative to where the root sits on the lowest string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::FretboardError;
use crate::models::note::SEMITONES;
use crate::models::sequence::Sequence;

/// Largest window offset a loaded model may use, in either direction
pub const MAX_WINDOW_BOUND: i32 = 1000;

/// Category of sequence model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ModelCategory {
    #[default]
    Scale,
    Mode,
    Pentatonic,
    Arpeggio,
    Custom,
}

/// A scale or pattern definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceModel {
    /// Display name
    pub name: String,

    #[serde(default)]
    pub category: ModelCategory,

    /// Half-steps from the root, in scale-step order
    pub intervals: Vec<u8>,

    /// Position windows; `None` means the model is always shown whole
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<[i32; 2]>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Summary handed to the UI for model pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub category: ModelCategory,
    pub position_count: usize,
}

/// Models keyed by id, passed explicitly into the mapper
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelRegistry {
    models: BTreeMap<String, SequenceModel>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every predefined model
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (id, model) in predefined_models() {
            registry.insert(id, model);
        }
        registry
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, FretboardError> {
        let registry: Self = serde_yaml::from_str(text)
            .map_err(|e| FretboardError::ModelRegistry(format!("invalid YAML: {}", e)))?;
        registry.validate()?;
        Ok(registry)
    }

    pub fn from_json_str(text: &str) -> Result<Self, FretboardError> {
        let registry: Self = serde_json::from_str(text)
            .map_err(|e| FretboardError::ModelRegistry(format!("invalid JSON: {}", e)))?;
        registry.validate()?;
        Ok(registry)
    }

    /// Parse text that may be either JSON or YAML
    pub fn from_str_auto(text: &str) -> Result<Self, FretboardError> {
        if text.trim_start().starts_with('{') {
            Self::from_json_str(text)
        } else {
            Self::from_yaml_str(text)
        }
    }

    /// Load a registry file; `.json` is read as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FretboardError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            FretboardError::ModelRegistry(format!("cannot read {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_yaml_str(&text),
        }
    }

    pub fn insert(&mut self, id: impl Into<String>, model: SequenceModel) -> Option<SequenceModel> {
        self.models.insert(id.into(), model)
    }

    /// Overlay another registry; its models replace ones with the same id
    pub fn merge(&mut self, other: ModelRegistry) {
        self.models.extend(other.models);
    }

    pub fn get(&self, id: &str) -> Option<&SequenceModel> {
        self.models.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Ordered scale-step intervals of the sequence's model
    pub fn intervals_for_sequence(&self, sequence: &Sequence) -> Option<&[u8]> {
        self.get(&sequence.model).map(|model| model.intervals.as_slice())
    }

    /// Position table of a model, if it defines one
    pub fn positions(&self, id: &str) -> Option<&[[i32; 2]]> {
        self.get(id).and_then(|model| model.positions.as_deref())
    }

    pub fn descriptors(&self) -> Vec<ModelDescriptor> {
        self.models
            .iter()
            .map(|(id, model)| ModelDescriptor {
                id: id.clone(),
                name: model.name.clone(),
                category: model.category,
                position_count: model.positions.as_ref().map_or(0, Vec::len),
            })
            .collect()
    }

    fn validate(&self) -> Result<(), FretboardError> {
        for (id, model) in &self.models {
            if let Some(bad) = model.intervals.iter().find(|&&i| i >= SEMITONES) {
                return Err(FretboardError::ModelRegistry(format!(
                    "model '{}' has interval {} outside 0-11",
                    id, bad
                )));
            }
            let mut bounds = model.positions.iter().flatten().flatten();
            if let Some(bad) = bounds.find(|b| b.unsigned_abs() > MAX_WINDOW_BOUND.unsigned_abs()) {
                return Err(FretboardError::ModelRegistry(format!(
                    "model '{}' has window bound {} outside -{}..{}",
                    id, bad, MAX_WINDOW_BOUND, MAX_WINDOW_BOUND
                )));
            }
        }
        Ok(())
    }
}

fn model(
    name: &str,
    category: ModelCategory,
    intervals: &[u8],
    positions: Option<&[[i32; 2]]>,
    description: &str,
) -> SequenceModel {
    SequenceModel {
        name: name.to_string(),
        category,
        intervals: intervals.to_vec(),
        positions: positions.map(<[[i32; 2]]>::to_vec),
        description: Some(description.to_string()),
    }
}

// Five box shapes, offsets from the root on the lowest string
const MAJOR_POSITIONS: [[i32; 2]; 5] = [[0, 4], [2, 5], [4, 8], [7, 10], [9, 13]];
const MINOR_POSITIONS: [[i32; 2]; 5] = [[0, 3], [2, 5], [3, 7], [5, 8], [7, 10]];
const MINOR_PENTATONIC_POSITIONS: [[i32; 2]; 5] = [[0, 3], [2, 5], [4, 8], [7, 10], [9, 12]];
const MAJOR_PENTATONIC_POSITIONS: [[i32; 2]; 5] = [[0, 3], [2, 5], [4, 7], [6, 10], [9, 12]];

/// Get all predefined sequence models
pub fn predefined_models() -> Vec<(&'static str, SequenceModel)> {
    use ModelCategory::*;

    vec![
        // SCALES
        ("major", model("Major", Scale, &[0, 2, 4, 5, 7, 9, 11], Some(&MAJOR_POSITIONS), "Ionian, basis for Western music")),
        ("minor", model("Natural Minor", Scale, &[0, 2, 3, 5, 7, 8, 10], Some(&MINOR_POSITIONS), "Aeolian")),
        ("harmonic-minor", model("Harmonic Minor", Scale, &[0, 2, 3, 5, 7, 8, 11], None, "Minor with raised 7th")),
        ("melodic-minor", model("Melodic Minor", Scale, &[0, 2, 3, 5, 7, 9, 11], None, "Jazz minor, ascending form")),
        ("chromatic", model("Chromatic", Scale, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], None, "Every half-step")),

        // MODES
        ("dorian", model("Dorian", Mode, &[0, 2, 3, 5, 7, 9, 10], None, "Minor mode with major 6th")),
        ("phrygian", model("Phrygian", Mode, &[0, 1, 3, 5, 7, 8, 10], None, "Minor mode with flat 2nd")),
        ("lydian", model("Lydian", Mode, &[0, 2, 4, 6, 7, 9, 11], None, "Major mode with sharp 4th")),
        ("mixolydian", model("Mixolydian", Mode, &[0, 2, 4, 5, 7, 9, 10], None, "Major mode with flat 7th")),
        ("locrian", model("Locrian", Mode, &[0, 1, 3, 5, 6, 8, 10], None, "Diminished mode")),

        // PENTATONICS
        ("major-pentatonic", model("Major Pentatonic", Pentatonic, &[0, 2, 4, 7, 9], Some(&MAJOR_PENTATONIC_POSITIONS), "Major scale without 4th and 7th")),
        ("minor-pentatonic", model("Minor Pentatonic", Pentatonic, &[0, 3, 5, 7, 10], Some(&MINOR_PENTATONIC_POSITIONS), "Minor scale without 2nd and 6th")),
        ("blues", model("Blues", Pentatonic, &[0, 3, 5, 6, 7, 10], Some(&MINOR_PENTATONIC_POSITIONS), "Minor pentatonic with flat 5th")),

        // ARPEGGIOS
        ("major-triad", model("Major Triad", Arpeggio, &[0, 4, 7], None, "1 3 5")),
        ("minor-triad", model("Minor Triad", Arpeggio, &[0, 3, 7], None, "1 b3 5")),
        ("dominant-seventh", model("Dominant 7th", Arpeggio, &[0, 4, 7, 10], None, "1 3 5 b7")),
    ]
}
