//! Grayscale template matching.
//!
//! [`match_template`] compares a candidate image with a reference using the
//! normalized correlation coefficient (the `TM_CCOEFF_NORMED` measure):
//!
//! ```text
//!            Σ (T - T̄)(I - Ī)
//! r = ───────────────────────────────
//!      sqrt(Σ (T - T̄)² · Σ (I - Ī)²)
//! ```
//!
//! evaluated at every offset where the reference fits inside the candidate.
//! The best coefficient, scaled by 100, is the similarity score. With the
//! default configuration the candidate is first resized to the reference's
//! exact dimensions, so exactly one offset exists.
//!
//! Uniform patches have no variance; they correlate at 1 with a uniform patch
//! of the same level and at 0 with anything else.

mod config;
mod correlate;
mod error;

use std::borrow::Cow;

use image::{imageops, GrayImage};
use serde::{Deserialize, Serialize};

pub use crate::config::{ImageMatchConfig, Interpolation};
pub use crate::error::ImageMatchError;

use crate::correlate::{best_window, Template};

/// Outcome of a template match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemplateMatch {
    /// `correlation * 100`, floored at 0 when negative values are clamped.
    pub score: f64,
    /// Raw best coefficient in `[-1, 1]`.
    pub correlation: f64,
    /// Top-left corner of the best window in the (possibly resized) candidate.
    pub offset: (u32, u32),
    /// Whether the candidate was resized before matching.
    pub resized: bool,
}

/// Score how well `candidate` matches `reference`, in `[0, 100]` by default.
pub fn match_template(
    reference: &GrayImage,
    candidate: &GrayImage,
    cfg: &ImageMatchConfig,
) -> Result<TemplateMatch, ImageMatchError> {
    ensure_non_empty(reference, "reference")?;
    ensure_non_empty(candidate, "candidate")?;

    let (ref_w, ref_h) = reference.dimensions();
    let needs_resize = candidate.dimensions() != (ref_w, ref_h) && cfg.resize_candidate;
    let search: Cow<'_, GrayImage> = if needs_resize {
        Cow::Owned(imageops::resize(
            candidate,
            ref_w,
            ref_h,
            cfg.interpolation.filter(),
        ))
    } else {
        Cow::Borrowed(candidate)
    };

    let (cand_w, cand_h) = search.dimensions();
    if cand_w < ref_w || cand_h < ref_h {
        return Err(ImageMatchError::DimensionMismatch {
            expected_width: ref_w,
            expected_height: ref_h,
            actual_width: cand_w,
            actual_height: cand_h,
        });
    }

    let template = Template::new(reference);
    let (correlation, x, y) = best_window(&template, &search, cfg.use_parallel);

    let mut score = correlation * 100.0;
    if cfg.clamp_negative {
        score = score.max(0.0);
    }

    Ok(TemplateMatch {
        score,
        correlation,
        offset: (x, y),
        resized: needs_resize,
    })
}

fn ensure_non_empty(image: &GrayImage, role: &'static str) -> Result<(), ImageMatchError> {
    if image.width() == 0 || image.height() == 0 {
        Err(ImageMatchError::EmptyImage(role))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn gradient(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| Luma([(x * 4 + y * 2) as u8]))
    }

    fn invert(img: &GrayImage) -> GrayImage {
        GrayImage::from_fn(img.width(), img.height(), |x, y| {
            Luma([255 - img.get_pixel(x, y)[0]])
        })
    }

    #[test]
    fn identical_images_score_one_hundred() {
        let img = gradient(32, 24);
        let result = match_template(&img, &img, &ImageMatchConfig::default()).expect("match");
        assert!((result.score - 100.0).abs() < 1e-9);
        assert_eq!(result.offset, (0, 0));
        assert!(!result.resized);
    }

    #[test]
    fn inverted_image_is_clamped_to_zero() {
        let img = gradient(32, 24);
        let inverted = invert(&img);

        let clamped = match_template(&img, &inverted, &ImageMatchConfig::default()).expect("match");
        assert_eq!(clamped.score, 0.0);
        assert!((clamped.correlation + 1.0).abs() < 1e-9);

        let raw_cfg = ImageMatchConfig::default().with_clamp_negative(false);
        let raw = match_template(&img, &inverted, &raw_cfg).expect("match");
        assert!((raw.score + 100.0).abs() < 1e-9);
    }

    #[test]
    fn larger_candidate_is_resized_to_reference() {
        let reference = gradient(32, 24);
        let candidate = GrayImage::from_fn(64, 48, |x, y| Luma([(x * 2 + y) as u8]));

        let first = match_template(&reference, &candidate, &ImageMatchConfig::default())
            .expect("resize avoids dimension errors");
        assert!(first.resized);
        assert!(first.score > 95.0, "score was {}", first.score);
        assert!(first.score <= 100.0);

        let second =
            match_template(&reference, &candidate, &ImageMatchConfig::default()).expect("match");
        assert_eq!(first, second);
    }

    #[test]
    fn every_interpolation_accepts_odd_sizes() {
        let reference = gradient(17, 13);
        let candidate = gradient(50, 7);
        for interpolation in [
            Interpolation::Nearest,
            Interpolation::Linear,
            Interpolation::Cubic,
            Interpolation::Lanczos,
        ] {
            let cfg = ImageMatchConfig::default().with_interpolation(interpolation);
            let result = match_template(&reference, &candidate, &cfg).expect("match");
            assert!((0.0..=100.0).contains(&result.score));
        }
    }

    #[test]
    fn smaller_candidate_without_resize_is_rejected() {
        let cfg = ImageMatchConfig::default().with_resize(false);
        let err = match_template(&gradient(32, 24), &gradient(16, 24), &cfg).unwrap_err();
        assert_eq!(
            err,
            ImageMatchError::DimensionMismatch {
                expected_width: 32,
                expected_height: 24,
                actual_width: 16,
                actual_height: 24,
            }
        );
    }

    #[test]
    fn larger_candidate_without_resize_is_searched() {
        let reference = GrayImage::from_fn(8, 6, |x, y| Luma([((x * 31 + y * 17) % 97) as u8]));
        let mut candidate = GrayImage::from_pixel(30, 20, Luma([0]));
        imageops::replace(&mut candidate, &reference, 9, 4);

        let cfg = ImageMatchConfig::default().with_resize(false);
        let result = match_template(&reference, &candidate, &cfg).expect("match");
        assert_eq!(result.offset, (9, 4));
        assert!((result.score - 100.0).abs() < 1e-9);
        assert!(!result.resized);

        let parallel = match_template(&reference, &candidate, &cfg.with_parallel(true))
            .expect("match");
        assert_eq!(parallel, result);
    }

    #[test]
    fn empty_images_are_rejected() {
        let empty = GrayImage::new(0, 0);
        let img = gradient(4, 4);
        let cfg = ImageMatchConfig::default();
        assert_eq!(
            match_template(&empty, &img, &cfg).unwrap_err(),
            ImageMatchError::EmptyImage("reference")
        );
        assert_eq!(
            match_template(&img, &empty, &cfg).unwrap_err(),
            ImageMatchError::EmptyImage("candidate")
        );
    }

    #[test]
    fn blank_candidate_against_textured_reference_scores_zero() {
        let blank = GrayImage::from_pixel(32, 24, Luma([255]));
        let result =
            match_template(&gradient(32, 24), &blank, &ImageMatchConfig::default()).expect("match");
        assert_eq!(result.score, 0.0);
    }
}
