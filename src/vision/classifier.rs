//! Mean-color heuristic classifier for plant photos
//!
//! Not a trained model: three fixed rules over the average RGB value,
//! evaluated in order. Decode failures are recovered here and reported as
//! an `Error` diagnosis with zero confidence, so the escalation policy
//! routes them to an expert.

use image::RgbImage;
use serde::Serialize;

use crate::error::{AdvisorError, Result};

/// Channel mean a dominant channel must exceed to count as a signal
const CHANNEL_FLOOR: f64 = 100.0;

const HEALTHY_CONFIDENCE: f32 = 0.95;
const DEFICIENCY_CONFIDENCE: f32 = 0.80;
const UNKNOWN_CONFIDENCE: f32 = 0.50;
const ERROR_CONFIDENCE: f32 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    Healthy,
    NutrientDeficiency,
    UnknownIssue,
    Error,
}

impl Diagnosis {
    /// Display label shown to the farmer
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy Plant",
            Self::NutrientDeficiency => "Nutrient Deficiency",
            Self::UnknownIssue => "Unknown Issue",
            Self::Error => "Error",
        }
    }

    pub fn solution(self) -> &'static str {
        match self {
            Self::Healthy => "Your plant appears to be healthy! Keep up the good work.",
            Self::NutrientDeficiency => {
                "Yellowing leaves can indicate a lack of nitrogen. Consider applying a balanced fertilizer."
            }
            Self::UnknownIssue => {
                "The system cannot identify the issue. Please consult an expert for a definitive diagnosis."
            }
            Self::Error => "The image could not be processed.",
        }
    }
}

/// Per-channel mean over every pixel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageStats {
    pub mean_r: f64,
    pub mean_g: f64,
    pub mean_b: f64,
}

impl ImageStats {
    pub fn new(mean_r: f64, mean_g: f64, mean_b: f64) -> Self {
        Self {
            mean_r,
            mean_g,
            mean_b,
        }
    }

    pub fn from_rgb(image: &RgbImage) -> Result<Self> {
        let count = image.width() as u64 * image.height() as u64;
        if count == 0 {
            return Err(AdvisorError::DecodeError("image has no pixels".to_string()));
        }

        let mut sums = [0u64; 3];
        for pixel in image.pixels() {
            for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
                *sum += channel as u64;
            }
        }

        let n = count as f64;
        Ok(Self::new(
            sums[0] as f64 / n,
            sums[1] as f64 / n,
            sums[2] as f64 / n,
        ))
    }
}

/// Result of classifying one image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: Diagnosis,
    pub confidence: f32,
    /// None when decoding failed
    pub stats: Option<ImageStats>,
    /// Decode error message for the `Error` category
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageClassifier;

impl ImageClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify encoded image bytes (PNG, JPEG, WebP, GIF)
    pub fn classify(&self, bytes: &[u8]) -> Classification {
        match decode_rgb(bytes).and_then(|img| ImageStats::from_rgb(&img)) {
            Ok(stats) => self.classify_stats(stats),
            Err(e) => {
                tracing::warn!(error = %e, "Image decode failed, reporting low-confidence Error");
                Classification {
                    category: Diagnosis::Error,
                    confidence: ERROR_CONFIDENCE,
                    stats: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Classify an already decoded RGB image
    pub fn classify_image(&self, image: &RgbImage) -> Classification {
        match ImageStats::from_rgb(image) {
            Ok(stats) => self.classify_stats(stats),
            Err(e) => Classification {
                category: Diagnosis::Error,
                confidence: ERROR_CONFIDENCE,
                stats: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Decision table; first matching rule wins
    pub fn classify_stats(&self, stats: ImageStats) -> Classification {
        let ImageStats {
            mean_r: r,
            mean_g: g,
            mean_b: b,
        } = stats;

        let (category, confidence) = if g > r && g > b && g > CHANNEL_FLOOR {
            (Diagnosis::Healthy, HEALTHY_CONFIDENCE)
        } else if r > g && r > CHANNEL_FLOOR {
            (Diagnosis::NutrientDeficiency, DEFICIENCY_CONFIDENCE)
        } else {
            (Diagnosis::UnknownIssue, UNKNOWN_CONFIDENCE)
        };

        tracing::debug!(r, g, b, ?category, "Classified image");

        Classification {
            category,
            confidence,
            stats: Some(stats),
            error: None,
        }
    }
}

fn decode_rgb(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(AdvisorError::DecodeError("empty input".to_string()));
    }
    image::load_from_memory(bytes)
        .map(|img| img.to_rgb8())
        .map_err(|e| AdvisorError::DecodeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb};
    use std::io::Cursor;

    fn png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb(color));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decision_table() {
        let classifier = ImageClassifier::new();
        let cases = [
            ((50.0, 180.0, 60.0), Diagnosis::Healthy, 0.95),
            ((160.0, 90.0, 40.0), Diagnosis::NutrientDeficiency, 0.80),
            ((90.0, 95.0, 92.0), Diagnosis::UnknownIssue, 0.50),
        ];
        for ((r, g, b), category, confidence) in cases {
            let result = classifier.classify_stats(ImageStats::new(r, g, b));
            assert_eq!(result.category, category);
            assert_eq!(result.confidence, confidence);
        }
    }

    #[test]
    fn test_rule_boundaries() {
        let classifier = ImageClassifier::new();
        // Green dominant but not above the floor
        let dim_green = classifier.classify_stats(ImageStats::new(10.0, 100.0, 10.0));
        assert_eq!(dim_green.category, Diagnosis::UnknownIssue);
        // Green ties blue: not strictly dominant, red too dark
        let tie = classifier.classify_stats(ImageStats::new(50.0, 150.0, 150.0));
        assert_eq!(tie.category, Diagnosis::UnknownIssue);
        // Red beats green but blue is highest: still a deficiency
        let bluish = classifier.classify_stats(ImageStats::new(120.0, 80.0, 200.0));
        assert_eq!(bluish.category, Diagnosis::NutrientDeficiency);
    }

    #[test]
    fn test_stats_from_pixels() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([0, 100, 255]));
        img.put_pixel(1, 0, Rgb([100, 200, 255]));
        let stats = ImageStats::from_rgb(&img).unwrap();
        assert_eq!(stats, ImageStats::new(50.0, 150.0, 255.0));
    }

    #[test]
    fn test_classify_encoded_png() {
        let classifier = ImageClassifier::new();
        let result = classifier.classify(&png(8, 8, [50, 180, 60]));
        assert_eq!(result.category, Diagnosis::Healthy);
        assert_eq!(result.stats, Some(ImageStats::new(50.0, 180.0, 60.0)));
    }

    #[test]
    fn test_garbage_bytes_downgrade_to_error() {
        let classifier = ImageClassifier::new();
        for bytes in [&b""[..], &b"definitely not an image"[..]] {
            let result = classifier.classify(bytes);
            assert_eq!(result.category, Diagnosis::Error);
            assert_eq!(result.confidence, 0.0);
            assert!(result.stats.is_none());
            assert!(result.error.is_some());
        }
    }

    #[test]
    fn test_zero_pixel_image() {
        let result = ImageClassifier::new().classify_image(&RgbImage::new(0, 0));
        assert_eq!(result.category, Diagnosis::Error);
    }

    #[test]
    fn test_deterministic() {
        let classifier = ImageClassifier::new();
        let bytes = png(4, 4, [160, 90, 40]);
        assert_eq!(classifier.classify(&bytes), classifier.classify(&bytes));
    }
}
