use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// Resampling filter used when the candidate is resized to the reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Nearest,
    /// Bilinear; the default.
    #[default]
    Linear,
    Cubic,
    Lanczos,
}

impl Interpolation {
    pub fn filter(self) -> FilterType {
        match self {
            Interpolation::Nearest => FilterType::Nearest,
            Interpolation::Linear => FilterType::Triangle,
            Interpolation::Cubic => FilterType::CatmullRom,
            Interpolation::Lanczos => FilterType::Lanczos3,
        }
    }
}

/// Configuration for [`crate::match_template`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageMatchConfig {
    /// Resize a candidate whose dimensions differ from the reference to exactly
    /// the reference's width and height. Aspect ratio is not preserved.
    ///
    /// When disabled, a larger candidate is searched with the reference as a
    /// sliding window and a smaller one is rejected.
    #[serde(default = "default_true")]
    pub resize_candidate: bool,
    #[serde(default)]
    pub interpolation: Interpolation,
    /// Report negative correlations as 0 instead of down to -100.
    #[serde(default = "default_true")]
    pub clamp_negative: bool,
    /// Scan window rows on the rayon pool. Results are identical either way.
    #[serde(default)]
    pub use_parallel: bool,
}

impl ImageMatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resize(mut self, resize_candidate: bool) -> Self {
        self.resize_candidate = resize_candidate;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_clamp_negative(mut self, clamp_negative: bool) -> Self {
        self.clamp_negative = clamp_negative;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }
}

impl Default for ImageMatchConfig {
    fn default() -> Self {
        Self {
            resize_candidate: true,
            interpolation: Interpolation::default(),
            clamp_negative: true,
            use_parallel: false,
        }
    }
}

fn default_true() -> bool {
    true
}
