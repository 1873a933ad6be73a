//! Pixel statistics from decoded images
//!
//! The mapping engine never sees pixels. This module decodes an image file
//! and reduces it to per-channel mean and population standard deviation in
//! the 8-bit domain, which is all [`ImageExtractor`](crate::extractors::ImageExtractor)
//! needs. Channel layout follows the decoded color type: L, LA, RGB or RGBA.

use crate::error::SenseResult;
use crate::extractors::ChannelStatistics;
use image::DynamicImage;
use std::path::Path;
use tracing::debug;

/// Per-channel statistics of an already decoded image
pub fn channel_statistics(img: &DynamicImage) -> ChannelStatistics {
    let (width, height) = (img.width(), img.height());

    match img {
        DynamicImage::ImageLuma8(buf) => from_interleaved(buf.as_raw(), 1, width, height),
        DynamicImage::ImageLumaA8(buf) => from_interleaved(buf.as_raw(), 2, width, height),
        DynamicImage::ImageRgb8(buf) => from_interleaved(buf.as_raw(), 3, width, height),
        DynamicImage::ImageRgba8(buf) => from_interleaved(buf.as_raw(), 4, width, height),
        // Wider sample types are reduced to 8 bits, keeping the channel layout
        other => match (other.color().has_color(), other.color().has_alpha()) {
            (false, false) => from_interleaved(other.to_luma8().as_raw(), 1, width, height),
            (false, true) => from_interleaved(other.to_luma_alpha8().as_raw(), 2, width, height),
            (true, false) => from_interleaved(other.to_rgb8().as_raw(), 3, width, height),
            (true, true) => from_interleaved(other.to_rgba8().as_raw(), 4, width, height),
        },
    }
}

/// Decode `path` and compute its channel statistics
pub fn load_channel_statistics(path: &Path) -> SenseResult<ChannelStatistics> {
    let img = image::open(path)?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(channel_statistics(&img))
}

fn from_interleaved(raw: &[u8], channels: usize, width: u32, height: u32) -> ChannelStatistics {
    let mut sums = vec![0u64; channels];
    let mut sums_sq = vec![0u64; channels];

    for pixel in raw.chunks_exact(channels) {
        for (c, &sample) in pixel.iter().enumerate() {
            let v = sample as u64;
            sums[c] += v;
            sums_sq[c] += v * v;
        }
    }

    let count = (raw.len() / channels.max(1)) as f64;
    let mut means = Vec::with_capacity(channels);
    let mut stddevs = Vec::with_capacity(channels);

    for c in 0..channels {
        if count == 0.0 {
            means.push(0.0);
            stddevs.push(0.0);
            continue;
        }
        let mean = sums[c] as f64 / count;
        let variance = (sums_sq[c] as f64 / count - mean * mean).max(0.0);
        means.push(mean);
        stddevs.push(variance.sqrt());
    }

    ChannelStatistics::new(means, stddevs, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_uniform_rgb_has_no_spread() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, Rgb([255, 128, 0])));
        let stats = channel_statistics(&img);

        assert_eq!(stats.means, vec![255.0, 128.0, 0.0]);
        assert_eq!(stats.stddevs, vec![0.0, 0.0, 0.0]);
        assert_eq!((stats.width, stats.height), (4, 3));
    }

    #[test]
    fn test_black_and_white_checker() {
        // Half 0, half 255: mean 127.5, population stddev 127.5
        let img = GrayImage::from_fn(2, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([0])
            } else {
                Luma([255])
            }
        });
        let stats = channel_statistics(&DynamicImage::ImageLuma8(img));

        assert_eq!(stats.channel_count(), 1);
        assert_eq!(stats.means, vec![127.5]);
        assert_eq!(stats.stddevs, vec![127.5]);
    }

    #[test]
    fn test_rgba_keeps_alpha_channel() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 40]));
        let stats = channel_statistics(&DynamicImage::ImageRgba8(img));
        assert_eq!(stats.means, vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_load_from_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("swatch.png");
        RgbImage::from_pixel(8, 8, Rgb([0, 0, 255]))
            .save(&path)
            .unwrap();

        let stats = load_channel_statistics(&path).unwrap();
        assert_eq!(stats.means, vec![0.0, 0.0, 255.0]);
        assert_eq!((stats.width, stats.height), (8, 8));
    }

    #[test]
    fn test_undecodable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(load_channel_statistics(&path).is_err());
    }
}
