// Feature Extractors - one per sensory input kind
//
// Each extractor turns a pre-validated raw input into a kind-specific
// feature set. Extractors are pure: same input, same features.

use serde::{Deserialize, Serialize};
use syncomp_common::{InputKind, Result};

pub mod color;
pub mod emotion;
pub mod image;
pub mod text;

pub use self::color::{ColorExtractor, ColorFeatures, Hsv, Rgb};
pub use self::emotion::{EmotionExtractor, EmotionFeatures, EmotionLevels};
pub use self::image::{ChannelStatistics, ImageExtractor, ImageFeatures};
pub use self::text::{TextExtractor, TextFeatures};

/// Extractor trait - all sensory feature extractors implement this
pub trait FeatureExtractor {
    /// Raw input this extractor consumes
    type Input: ?Sized;
    /// Feature set this extractor produces
    type Features;

    /// Extractor identifier (e.g., "Color", "Text")
    fn source_id(&self) -> &'static str;

    /// Input kind this extractor handles
    fn kind(&self) -> InputKind;

    /// Extract features from raw input
    ///
    /// # Returns
    /// * `Ok(Features)` - Deterministic feature set
    /// * `Err(Error::InvalidInput)` - Input violates the extractor's preconditions
    fn extract(&self, input: &Self::Input) -> Result<Self::Features>;
}

/// Raw input from the presentation layer, tagged by kind
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Color(Rgb),
    Image(ChannelStatistics),
    Text(String),
    Emotion(EmotionLevels),
}

impl RawInput {
    pub fn kind(&self) -> InputKind {
        match self {
            RawInput::Color(_) => InputKind::Color,
            RawInput::Image(_) => InputKind::Image,
            RawInput::Text(_) => InputKind::Text,
            RawInput::Emotion(_) => InputKind::Emotion,
        }
    }
}

/// Features produced by exactly one extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum FeatureSet {
    Color(ColorFeatures),
    Image(ImageFeatures),
    Text(TextFeatures),
    Emotion(EmotionFeatures),
}

impl FeatureSet {
    pub fn kind(&self) -> InputKind {
        match self {
            FeatureSet::Color(_) => InputKind::Color,
            FeatureSet::Image(_) => InputKind::Image,
            FeatureSet::Text(_) => InputKind::Text,
            FeatureSet::Emotion(_) => InputKind::Emotion,
        }
    }
}

/// Run the extractor matching the input's kind
pub fn extract_features(input: &RawInput) -> Result<FeatureSet> {
    match input {
        RawInput::Color(rgb) => ColorExtractor.extract(rgb).map(FeatureSet::Color),
        RawInput::Image(stats) => ImageExtractor.extract(stats).map(FeatureSet::Image),
        RawInput::Text(text) => TextExtractor.extract(text.as_str()).map(FeatureSet::Text),
        RawInput::Emotion(levels) => EmotionExtractor.extract(levels).map(FeatureSet::Emotion),
    }
}
