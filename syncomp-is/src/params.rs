//! Musical parameter vocabulary
//!
//! The canonical output of the mapping engine: one [`MusicalParameterSet`]
//! per saved input, tagged with the kind it was derived from. Every label
//! serializes to the exact display string the front-end shows
//! ("C#", "Major Pentatonic", "Happy & Energetic").

use serde::{Deserialize, Serialize};
use syncomp_common::InputKind;

// ============================================================================
// Pitch and key
// ============================================================================

/// One of the twelve chromatic pitch classes, C first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

impl PitchClass {
    /// Chromatic scale in index order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Pitch class for a chromatic index; wraps modulo 12
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Position in the chromatic scale (C = 0, B = 11)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Major or minor tonality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum KeyQuality {
    Major,
    Minor,
}

impl std::fmt::Display for KeyQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyQuality::Major => write!(f, "Major"),
            KeyQuality::Minor => write!(f, "Minor"),
        }
    }
}

/// Note-or-key field
///
/// Colors pick a base note; text and emotions pick a tonality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Key {
    Note(PitchClass),
    Quality(KeyQuality),
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Note(pitch) => write!(f, "{}", pitch),
            Key::Quality(quality) => write!(f, "{}", quality),
        }
    }
}

// ============================================================================
// Scale, dynamics, complexity, mood
// ============================================================================

/// Scale/mode vocabulary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Scale {
    Major,
    Minor,
    #[serde(rename = "Major Pentatonic")]
    MajorPentatonic,
    Phrygian,
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scale::Major => write!(f, "Major"),
            Scale::Minor => write!(f, "Minor"),
            Scale::MajorPentatonic => write!(f, "Major Pentatonic"),
            Scale::Phrygian => write!(f, "Phrygian"),
        }
    }
}

/// Intensity/dynamics label
///
/// Colors use the three-step Low/Medium/High intensity scale; images use
/// the Piano/Forte marking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Dynamics {
    Low,
    Medium,
    High,
    Piano,
    Forte,
}

impl std::fmt::Display for Dynamics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dynamics::Low => write!(f, "Low"),
            Dynamics::Medium => write!(f, "Medium"),
            Dynamics::High => write!(f, "High"),
            Dynamics::Piano => write!(f, "Piano"),
            Dynamics::Forte => write!(f, "Forte"),
        }
    }
}

/// Image complexity label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Complexity {
    Low,
    High,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Low => write!(f, "Low"),
            Complexity::High => write!(f, "High"),
        }
    }
}

/// Mood label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mood {
    #[serde(rename = "Bright/Major")]
    BrightMajor,
    #[serde(rename = "Dark/Minor")]
    DarkMinor,
    Energetic,
    Calm,
    #[serde(rename = "Happy & Energetic")]
    HappyEnergetic,
    #[serde(rename = "Content & Peaceful")]
    ContentPeaceful,
    #[serde(rename = "Anxious & Tense")]
    AnxiousTense,
    #[serde(rename = "Melancholic & Slow")]
    MelancholicSlow,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::BrightMajor => "Bright/Major",
            Mood::DarkMinor => "Dark/Minor",
            Mood::Energetic => "Energetic",
            Mood::Calm => "Calm",
            Mood::HappyEnergetic => "Happy & Energetic",
            Mood::ContentPeaceful => "Content & Peaceful",
            Mood::AnxiousTense => "Anxious & Tense",
            Mood::MelancholicSlow => "Melancholic & Slow",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Parameter set
// ============================================================================

/// Musical parameters derived from one sensory input
///
/// Fields a kind does not derive stay `None` and are omitted when
/// serialized:
///
/// | kind    | key   | scale | tempo | dynamics | mood | complexity | measures |
/// |---------|-------|-------|-------|----------|------|------------|----------|
/// | color   | note  |       | ✓     | ✓        |      |            |          |
/// | image   |       |       |       | ✓        | ✓    | ✓          |          |
/// | text    | M/m   |       | ✓     |          | ✓    |            | ✓        |
/// | emotion | M/m   | ✓     | ✓     |          | ✓    |            |          |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicalParameterSet {
    /// Kind of input these parameters came from
    pub kind: InputKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    /// Tempo in beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_bpm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamics: Option<Dynamics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    /// Structural hint: number of measures to compose (text only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measures: Option<u32>,
}

impl MusicalParameterSet {
    /// Parameter set for `kind` with nothing derived yet
    pub fn empty(kind: InputKind) -> Self {
        Self {
            kind,
            key: None,
            scale: None,
            tempo_bpm: None,
            dynamics: None,
            mood: None,
            complexity: None,
            measures: None,
        }
    }

    /// Human-readable `(label, value)` pairs for every derived field
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();
        if let Some(key) = self.key {
            let label = match key {
                Key::Note(_) => "Base Note",
                Key::Quality(_) => "Key",
            };
            lines.push((label, key.to_string()));
        }
        if let Some(mood) = self.mood {
            lines.push(("Mood", mood.to_string()));
        }
        if let Some(scale) = self.scale {
            lines.push(("Scale", scale.to_string()));
        }
        if let Some(complexity) = self.complexity {
            lines.push(("Complexity", complexity.to_string()));
        }
        if let Some(dynamics) = self.dynamics {
            let label = match dynamics {
                Dynamics::Piano | Dynamics::Forte => "Dynamics",
                _ => "Intensity",
            };
            lines.push((label, dynamics.to_string()));
        }
        if let Some(tempo) = self.tempo_bpm {
            lines.push(("Tempo", format!("{} BPM", tempo)));
        }
        if let Some(measures) = self.measures {
            lines.push(("Measures", measures.to_string()));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_wraps() {
        assert_eq!(PitchClass::from_index(0), PitchClass::C);
        assert_eq!(PitchClass::from_index(11), PitchClass::B);
        assert_eq!(PitchClass::from_index(12), PitchClass::C);
        for (i, pitch) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pitch.index(), i);
        }
    }

    #[test]
    fn test_labels_serialize_as_display_strings() {
        assert_eq!(serde_json::to_string(&PitchClass::FSharp).unwrap(), "\"F#\"");
        assert_eq!(
            serde_json::to_string(&Scale::MajorPentatonic).unwrap(),
            "\"Major Pentatonic\""
        );
        assert_eq!(
            serde_json::to_string(&Mood::AnxiousTense).unwrap(),
            "\"Anxious & Tense\""
        );
        assert_eq!(Mood::DarkMinor.to_string(), "Dark/Minor");
    }

    #[test]
    fn test_key_is_untagged() {
        let note = Key::Note(PitchClass::GSharp);
        let quality = Key::Quality(KeyQuality::Minor);
        assert_eq!(serde_json::to_string(&note).unwrap(), "\"G#\"");
        assert_eq!(serde_json::to_string(&quality).unwrap(), "\"Minor\"");

        let back: Key = serde_json::from_str("\"Major\"").unwrap();
        assert_eq!(back, Key::Quality(KeyQuality::Major));
        let back: Key = serde_json::from_str("\"A#\"").unwrap();
        assert_eq!(back, Key::Note(PitchClass::ASharp));
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let mut params = MusicalParameterSet::empty(InputKind::Image);
        params.mood = Some(Mood::BrightMajor);

        let json = serde_json::to_value(&params).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["kind"], "image");
        assert_eq!(json["mood"], "Bright/Major");

        let back: MusicalParameterSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_describe_labels() {
        let params = MusicalParameterSet {
            key: Some(Key::Note(PitchClass::C)),
            dynamics: Some(Dynamics::Medium),
            tempo_bpm: Some(180),
            ..MusicalParameterSet::empty(InputKind::Color)
        };

        assert_eq!(
            params.describe(),
            vec![
                ("Base Note", "C".to_string()),
                ("Intensity", "Medium".to_string()),
                ("Tempo", "180 BPM".to_string()),
            ]
        );
    }
}
