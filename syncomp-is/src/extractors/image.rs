// Image Feature Extractor
//
// Consumes per-channel pixel statistics (computed by the decoding
// collaborator, see `pixel_stats`) and reduces them to brightness,
// complexity and an average color. Only the first three channels count.
// Grayscale images (L, LA) sum the channels they have over the same
// 3 × 255 scale as RGB, so a white L image reads as a third as bright.

use super::FeatureExtractor;
use serde::{Deserialize, Serialize};
use syncomp_common::{Error, InputKind, Result};
use tracing::debug;

/// Channels that contribute to color statistics (RGBA alpha is ignored)
const COLOR_CHANNELS: usize = 3;

/// Divisor normalizing a sum of three 8-bit channel statistics into [0, 1]
const FULL_SCALE: f64 = COLOR_CHANNELS as f64 * 255.0;

/// Per-channel mean and standard deviation over all pixels, 0–255 domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelStatistics {
    pub means: Vec<f64>,
    pub stddevs: Vec<f64>,
    pub width: u32,
    pub height: u32,
}

impl ChannelStatistics {
    pub fn new(means: Vec<f64>, stddevs: Vec<f64>, width: u32, height: u32) -> Self {
        Self {
            means,
            stddevs,
            width,
            height,
        }
    }

    pub fn channel_count(&self) -> usize {
        self.means.len()
    }

    fn validate(&self) -> Result<()> {
        if self.means.is_empty() {
            return Err(Error::invalid_input("image statistics have no channels"));
        }
        if self.means.len() != self.stddevs.len() {
            return Err(Error::invalid_input(format!(
                "image statistics have {} means but {} standard deviations",
                self.means.len(),
                self.stddevs.len()
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid_input(format!(
                "image dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if let Some(bad) = self
            .means
            .iter()
            .chain(self.stddevs.iter())
            .find(|v| !v.is_finite() || **v < 0.0)
        {
            return Err(Error::invalid_input(format!(
                "image statistic {} is not a non-negative number",
                bad
            )));
        }
        Ok(())
    }
}

/// Aggregate visual features of one image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageFeatures {
    /// Mean R, G, B (grayscale images repeat their mean level)
    pub average_rgb: [f64; 3],
    /// Sum of channel means / (3 × 255), in [0, 1]
    pub brightness: f64,
    /// Sum of channel standard deviations / (3 × 255), in [0, 1]
    pub complexity: f64,
    pub width: u32,
    pub height: u32,
}

pub struct ImageExtractor;

impl FeatureExtractor for ImageExtractor {
    type Input = ChannelStatistics;
    type Features = ImageFeatures;

    fn source_id(&self) -> &'static str {
        "Image"
    }

    fn kind(&self) -> InputKind {
        InputKind::Image
    }

    fn extract(&self, stats: &ChannelStatistics) -> Result<ImageFeatures> {
        stats.validate()?;

        let used = stats.channel_count().min(COLOR_CHANNELS);
        let means = &stats.means[..used];
        let stddevs = &stats.stddevs[..used];

        let level_sum = means.iter().sum::<f64>();
        let spread_sum = stddevs.iter().sum::<f64>();

        let average_rgb = if used == COLOR_CHANNELS {
            [means[0], means[1], means[2]]
        } else {
            [level_sum / used as f64; 3]
        };

        let brightness = (level_sum / FULL_SCALE).clamp(0.0, 1.0);
        let complexity = (spread_sum / FULL_SCALE).clamp(0.0, 1.0);

        debug!(
            "Image {}x{} ({} channels): brightness={:.2}, complexity={:.2}",
            stats.width,
            stats.height,
            stats.channel_count(),
            brightness,
            complexity
        );

        Ok(ImageFeatures {
            average_rgb,
            brightness,
            complexity,
            width: stats.width,
            height: stats.height,
        })
    }
}
