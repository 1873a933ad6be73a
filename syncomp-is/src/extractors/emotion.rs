// Emotion Feature Extractor
//
// Four sliders in [0, 100] folded into valence (joy vs. sadness) and
// arousal (energy vs. calm), each in [-1, 1].

use super::FeatureExtractor;
use serde::{Deserialize, Serialize};
use syncomp_common::{Error, InputKind, Result};
use tracing::debug;

/// Upper bound of every emotion slider
pub const MAX_INTENSITY: u8 = 100;

/// Raw slider positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionLevels {
    pub joy: u8,
    pub sadness: u8,
    pub energy: u8,
    pub calm: u8,
}

impl Default for EmotionLevels {
    /// Initial slider positions of the emotion form
    fn default() -> Self {
        Self {
            joy: 50,
            sadness: 20,
            energy: 60,
            calm: 40,
        }
    }
}

impl EmotionLevels {
    /// Build levels, rejecting any slider above 100
    pub fn new(joy: u8, sadness: u8, energy: u8, calm: u8) -> Result<Self> {
        let levels = Self {
            joy,
            sadness,
            energy,
            calm,
        };
        levels.validate()?;
        Ok(levels)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("joy", self.joy),
            ("sadness", self.sadness),
            ("energy", self.energy),
            ("calm", self.calm),
        ] {
            if value > MAX_INTENSITY {
                return Err(Error::invalid_input(format!(
                    "{} must be within 0..={}, got {}",
                    name, MAX_INTENSITY, value
                )));
            }
        }
        Ok(())
    }
}

/// Slider levels plus the derived emotional coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionFeatures {
    pub levels: EmotionLevels,
    /// (joy − sadness) / 100
    pub valence: f64,
    /// (energy − calm) / 100
    pub arousal: f64,
}

pub struct EmotionExtractor;

impl FeatureExtractor for EmotionExtractor {
    type Input = EmotionLevels;
    type Features = EmotionFeatures;

    fn source_id(&self) -> &'static str {
        "Emotion"
    }

    fn kind(&self) -> InputKind {
        InputKind::Emotion
    }

    fn extract(&self, levels: &EmotionLevels) -> Result<EmotionFeatures> {
        levels.validate()?;

        let valence = (levels.joy as i16 - levels.sadness as i16) as f64 / 100.0;
        let arousal = (levels.energy as i16 - levels.calm as i16) as f64 / 100.0;

        debug!("Emotion valence={:.2}, arousal={:.2}", valence, arousal);

        Ok(EmotionFeatures {
            levels: *levels,
            valence,
            arousal,
        })
    }
}
