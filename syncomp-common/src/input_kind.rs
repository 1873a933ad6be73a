//! Sensory input kinds
//!
//! The discriminator shared by raw inputs, feature sets, parameter sets,
//! saved records and session events.

use serde::{Deserialize, Serialize};

/// Kind of sensory input a record was derived from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// A single `#RRGGBB` color
    Color,
    /// Channel statistics of a decoded raster image
    Image,
    /// Free text
    Text,
    /// Four emotion-intensity sliders
    Emotion,
}

impl InputKind {
    /// All kinds, in the order the front-end presents them
    pub const ALL: [InputKind; 4] = [
        InputKind::Color,
        InputKind::Image,
        InputKind::Text,
        InputKind::Emotion,
    ];

    /// Capitalized label for status displays ("Color input ready")
    pub fn label(&self) -> &'static str {
        match self {
            InputKind::Color => "Color",
            InputKind::Image => "Image",
            InputKind::Text => "Text",
            InputKind::Emotion => "Emotion",
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Color => write!(f, "color"),
            InputKind::Image => write!(f, "image"),
            InputKind::Text => write!(f, "text"),
            InputKind::Emotion => write!(f, "emotion"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&InputKind::Emotion).unwrap();
        assert_eq!(json, "\"emotion\"");

        let kind: InputKind = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(kind, InputKind::Image);
    }

    #[test]
    fn test_display_matches_serde_name() {
        for kind in InputKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json.trim_matches('"'), kind.to_string());
        }
    }

    #[test]
    fn test_label_is_capitalized() {
        assert_eq!(InputKind::Color.label(), "Color");
        assert_eq!(InputKind::Text.label(), "Text");
    }
}
