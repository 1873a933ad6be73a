// Music Parameter Mapper
//
// One independent mapping per input kind. Each branch has its own musical
// heuristics; they intentionally share no formula. All functions are pure.
//
// Comparisons are strict where the thresholds say "above": a brightness of
// exactly 0.5 is Dark/Minor and a valence of exactly 0 is Minor.

use crate::extractors::{ColorFeatures, EmotionFeatures, FeatureSet, ImageFeatures, TextFeatures};
use crate::params::{
    Complexity, Dynamics, Key, KeyQuality, Mood, MusicalParameterSet, PitchClass, Scale,
};
use syncomp_common::InputKind;
use tracing::debug;

// Color
const LOW_SATURATION: f64 = 0.3;
const HIGH_SATURATION: f64 = 0.7;
const COLOR_TEMPO_BASE: f64 = 60.0;
const COLOR_TEMPO_SPAN: f64 = 120.0;

// Image
const BRIGHT_THRESHOLD: f64 = 0.5;
const FORTE_THRESHOLD: f64 = 0.7;
const COMPLEX_THRESHOLD: f64 = 0.3;

// Text
const ENERGETIC_THRESHOLD: f64 = 2.0;
const TEXT_TEMPO_BASE: f64 = 90.0;
const TEXT_TEMPO_MAX_BOOST: f64 = 60.0;
const WORDS_PER_MEASURE: usize = 4;
const MAX_MEASURES: usize = 16;

// Emotion
const EMOTION_TEMPO_BASE: f64 = 80.0;
const EMOTION_TEMPO_SPAN: f64 = 60.0;

/// Derive musical parameters from whichever feature set was extracted
pub fn map_features(features: &FeatureSet) -> MusicalParameterSet {
    let params = match features {
        FeatureSet::Color(f) => map_color(f),
        FeatureSet::Image(f) => map_image(f),
        FeatureSet::Text(f) => map_text(f),
        FeatureSet::Emotion(f) => map_emotion(f),
    };
    debug!("Mapped {} input to {:?}", params.kind, params);
    params
}

// ============================================================================
// Color
// ============================================================================

/// Chromatic index for a hue: `floor(hue × 12) mod 12`
///
/// The modulo keeps a hue of exactly 1.0 on C.
pub fn note_index(hue: f64) -> usize {
    ((hue * 12.0).floor() as i64).rem_euclid(12) as usize
}

/// Saturation → intensity: [0, 0.3) Low, [0.3, 0.7) Medium, [0.7, 1] High
pub fn intensity(saturation: f64) -> Dynamics {
    if saturation < LOW_SATURATION {
        Dynamics::Low
    } else if saturation < HIGH_SATURATION {
        Dynamics::Medium
    } else {
        Dynamics::High
    }
}

/// Value → tempo in [60, 180] BPM
pub fn color_tempo(value: f64) -> u32 {
    (COLOR_TEMPO_BASE + value * COLOR_TEMPO_SPAN).round() as u32
}

pub fn map_color(features: &ColorFeatures) -> MusicalParameterSet {
    let hsv = features.hsv;
    MusicalParameterSet {
        key: Some(Key::Note(PitchClass::from_index(note_index(hsv.h)))),
        dynamics: Some(intensity(hsv.s)),
        tempo_bpm: Some(color_tempo(hsv.v)),
        ..MusicalParameterSet::empty(InputKind::Color)
    }
}

// ============================================================================
// Image
// ============================================================================

pub fn map_image(features: &ImageFeatures) -> MusicalParameterSet {
    let mood = if features.brightness > BRIGHT_THRESHOLD {
        Mood::BrightMajor
    } else {
        Mood::DarkMinor
    };
    let complexity = if features.complexity > COMPLEX_THRESHOLD {
        Complexity::High
    } else {
        Complexity::Low
    };
    let dynamics = if features.brightness > FORTE_THRESHOLD {
        Dynamics::Forte
    } else {
        Dynamics::Piano
    };

    MusicalParameterSet {
        mood: Some(mood),
        complexity: Some(complexity),
        dynamics: Some(dynamics),
        ..MusicalParameterSet::empty(InputKind::Image)
    }
}

// ============================================================================
// Text
// ============================================================================

/// Energy level: exclamations plus ten times the uppercase ratio
pub fn text_energy(features: &TextFeatures) -> f64 {
    features.exclamation_count as f64 + features.uppercase_ratio * 10.0
}

/// Tempo in [90, 150] BPM
pub fn text_tempo(energy: f64) -> u32 {
    (TEXT_TEMPO_BASE + (energy * 10.0).min(TEXT_TEMPO_MAX_BOOST)).round() as u32
}

/// Measures to compose: one per four words, at most 16
pub fn text_measures(word_count: usize) -> u32 {
    (word_count / WORDS_PER_MEASURE).min(MAX_MEASURES) as u32
}

pub fn map_text(features: &TextFeatures) -> MusicalParameterSet {
    let energy = text_energy(features);
    let mood = if energy > ENERGETIC_THRESHOLD {
        Mood::Energetic
    } else {
        Mood::Calm
    };
    // Ties go to Minor
    let quality = if features.exclamation_count > features.question_count {
        KeyQuality::Major
    } else {
        KeyQuality::Minor
    };

    MusicalParameterSet {
        key: Some(Key::Quality(quality)),
        mood: Some(mood),
        tempo_bpm: Some(text_tempo(energy)),
        measures: Some(text_measures(features.word_count)),
        ..MusicalParameterSet::empty(InputKind::Text)
    }
}

// ============================================================================
// Emotion
// ============================================================================

/// Tempo in [20, 140] BPM
pub fn emotion_tempo(arousal: f64) -> u32 {
    (EMOTION_TEMPO_BASE + arousal * EMOTION_TEMPO_SPAN).round() as u32
}

/// Mood and scale from the signs of valence and arousal
///
/// Only strictly positive values count as positive; zero falls on the
/// negative side of both axes.
pub fn emotion_quadrant(valence: f64, arousal: f64) -> (Mood, Scale) {
    match (valence > 0.0, arousal > 0.0) {
        (true, true) => (Mood::HappyEnergetic, Scale::MajorPentatonic),
        (true, false) => (Mood::ContentPeaceful, Scale::Major),
        (false, true) => (Mood::AnxiousTense, Scale::Phrygian),
        (false, false) => (Mood::MelancholicSlow, Scale::Minor),
    }
}

pub fn map_emotion(features: &EmotionFeatures) -> MusicalParameterSet {
    let quality = if features.valence > 0.0 {
        KeyQuality::Major
    } else {
        KeyQuality::Minor
    };
    let (mood, scale) = emotion_quadrant(features.valence, features.arousal);

    MusicalParameterSet {
        key: Some(Key::Quality(quality)),
        scale: Some(scale),
        mood: Some(mood),
        tempo_bpm: Some(emotion_tempo(features.arousal)),
        ..MusicalParameterSet::empty(InputKind::Emotion)
    }
}
