// Text Feature Extractor
//
// Surface statistics only: token counts, punctuation and capitalization.
// Every string, including the empty one, yields a valid feature set.

use super::FeatureExtractor;
use serde::{Deserialize, Serialize};
use syncomp_common::{InputKind, Result};
use tracing::debug;

/// Lexical and punctuation statistics of a text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextFeatures {
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Characters, whitespace and punctuation included
    pub char_count: usize,
    /// `char_count / word_count`, 0 when there are no words
    pub avg_word_length: f64,
    pub exclamation_count: usize,
    pub question_count: usize,
    /// Uppercase letters over `char_count`, 0 for empty text
    pub uppercase_ratio: f64,
}

pub struct TextExtractor;

impl FeatureExtractor for TextExtractor {
    type Input = str;
    type Features = TextFeatures;

    fn source_id(&self) -> &'static str {
        "Text"
    }

    fn kind(&self) -> InputKind {
        InputKind::Text
    }

    fn extract(&self, text: &str) -> Result<TextFeatures> {
        let word_count = text.split_whitespace().count();

        let mut char_count = 0usize;
        let mut exclamation_count = 0usize;
        let mut question_count = 0usize;
        let mut uppercase_count = 0usize;
        for c in text.chars() {
            char_count += 1;
            match c {
                '!' => exclamation_count += 1,
                '?' => question_count += 1,
                c if c.is_uppercase() => uppercase_count += 1,
                _ => {}
            }
        }

        let avg_word_length = if word_count > 0 {
            char_count as f64 / word_count as f64
        } else {
            0.0
        };
        let uppercase_ratio = if char_count > 0 {
            uppercase_count as f64 / char_count as f64
        } else {
            0.0
        };

        debug!(
            "Text: {} words, {} chars, {} '!', {} '?', uppercase ratio {:.2}",
            word_count, char_count, exclamation_count, question_count, uppercase_ratio
        );

        Ok(TextFeatures {
            word_count,
            char_count,
            avg_word_length,
            exclamation_count,
            question_count,
            uppercase_ratio,
        })
    }
}
