//! Sensory input records
//!
//! A [`SensoryInput`] is the result of one extraction + mapping cycle: the
//! kind-specific features, the derived musical parameters, and enough of
//! the source to show the user what was saved. Records are immutable once
//! built; a new save replaces the whole record.

use crate::extractors::{extract_features, FeatureSet, RawInput};
use crate::mapper::map_features;
use crate::params::MusicalParameterSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use syncomp_common::config::{SessionConfig, DEFAULT_TEXT_EXCERPT_CHARS};
use syncomp_common::{InputKind, Result};
use tracing::debug;
use uuid::Uuid;

/// One saved sensory input and the parameters derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensoryInput {
    id: Uuid,
    created_at: DateTime<Utc>,
    features: FeatureSet,
    /// Leading characters of the source text (text inputs only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_excerpt: Option<String>,
    parameters: MusicalParameterSet,
}

impl SensoryInput {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn kind(&self) -> InputKind {
        self.features.kind()
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn parameters(&self) -> &MusicalParameterSet {
        &self.parameters
    }

    pub fn text_excerpt(&self) -> Option<&str> {
        self.text_excerpt.as_deref()
    }

    /// Short description of the source for listings
    pub fn source_summary(&self) -> String {
        match &self.features {
            FeatureSet::Color(color) => color.hex(),
            FeatureSet::Image(image) => format!("{}x{} image", image.width, image.height),
            FeatureSet::Text(text) => match &self.text_excerpt {
                Some(excerpt) if !excerpt.is_empty() => format!("\"{}\"", excerpt),
                _ => format!("{} words", text.word_count),
            },
            FeatureSet::Emotion(emotion) => format!(
                "joy {} / sadness {} / energy {} / calm {}",
                emotion.levels.joy, emotion.levels.sadness, emotion.levels.energy, emotion.levels.calm
            ),
        }
    }
}

/// Runs the extract → map pipeline and builds records
#[derive(Debug, Clone)]
pub struct Analyzer {
    text_excerpt_chars: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_EXCERPT_CHARS)
    }
}

impl Analyzer {
    /// `text_excerpt_chars` bounds how much source text a record keeps
    pub fn new(text_excerpt_chars: usize) -> Self {
        Self { text_excerpt_chars }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.text_excerpt_chars)
    }

    /// Features and parameters only, no record
    pub fn interpret(&self, input: &RawInput) -> Result<(FeatureSet, MusicalParameterSet)> {
        let features = extract_features(input)?;
        let parameters = map_features(&features);
        Ok((features, parameters))
    }

    /// Extract, map and wrap into a new record
    pub fn analyze(&self, input: RawInput) -> Result<SensoryInput> {
        let (features, parameters) = self.interpret(&input)?;

        let text_excerpt = match &input {
            RawInput::Text(text) => Some(text.chars().take(self.text_excerpt_chars).collect()),
            _ => None,
        };

        let record = SensoryInput {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            features,
            text_excerpt,
            parameters,
        };
        debug!("Built {} record {}", record.kind(), record.id);
        Ok(record)
    }
}
