use std::path::{Path, PathBuf};

use image::GrayImage;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading reference templates at startup.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read text template {path}: {source}")]
    ReadText {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode reference image {path}: {source}")]
    DecodeImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("reference image {0} has no pixels")]
    EmptyImage(PathBuf),

    #[error("no template configured: set a text template, a reference image, or both")]
    NoTemplate,
}

/// Reference material every candidate is compared against.
///
/// Holds at most one text template and one reference image. Loaded once,
/// then shared read-only by all match calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSet {
    text: Option<String>,
    image: Option<GrayImage>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_image(mut self, image: GrayImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Load whichever templates have a path. At least one path is required.
    pub fn load(text_path: Option<&Path>, image_path: Option<&Path>) -> Result<Self, TemplateError> {
        if text_path.is_none() && image_path.is_none() {
            return Err(TemplateError::NoTemplate);
        }

        let mut set = Self::new();
        if let Some(path) = text_path {
            set.text = Some(load_text(path)?);
        }
        if let Some(path) = image_path {
            set.image = Some(load_image(path)?);
        }
        Ok(set)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn image(&self) -> Option<&GrayImage> {
        self.image.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image.is_none()
    }
}

/// Read a UTF-8 text template.
pub fn load_text(path: &Path) -> Result<String, TemplateError> {
    let text = std::fs::read_to_string(path).map_err(|source| TemplateError::ReadText {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), chars = text.chars().count(), "loaded text template");
    Ok(text)
}

/// Read a reference image and convert it to 8-bit grayscale.
pub fn load_image(path: &Path) -> Result<GrayImage, TemplateError> {
    let image = image::open(path)
        .map_err(|source| TemplateError::DecodeImage {
            path: path.to_path_buf(),
            source,
        })?
        .to_luma8();
    if image.width() == 0 || image.height() == 0 {
        return Err(TemplateError::EmptyImage(path.to_path_buf()));
    }
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "loaded reference image"
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn load_requires_a_path() {
        assert!(matches!(
            TemplateSet::load(None, None),
            Err(TemplateError::NoTemplate)
        ));
    }

    #[test]
    fn load_text_template() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Invoice #123, dated 2024-01-01".as_bytes()).unwrap();

        let set = TemplateSet::load(Some(file.path()), None).unwrap();
        assert_eq!(set.text(), Some("Invoice #123, dated 2024-01-01"));
        assert!(set.image().is_none());
    }

    #[test]
    fn load_image_template_as_grayscale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reference.png");
        let rgb = image::RgbImage::from_pixel(6, 4, image::Rgb([255, 255, 255]));
        rgb.save(&path).unwrap();

        let set = TemplateSet::load(None, Some(&path)).unwrap();
        let image = set.image().unwrap();
        assert_eq!(image.dimensions(), (6, 4));
        assert_eq!(image.get_pixel(0, 0), &Luma([255]));
    }

    #[test]
    fn missing_text_file_reports_path() {
        let err = TemplateSet::load(Some(Path::new("/nonexistent/template.txt")), None).unwrap_err();
        assert!(matches!(err, TemplateError::ReadText { .. }));
        assert!(err.to_string().contains("/nonexistent/template.txt"));
    }

    #[test]
    fn corrupt_image_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reference.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(matches!(
            TemplateSet::load(None, Some(&path)),
            Err(TemplateError::DecodeImage { .. })
        ));
    }

    #[test]
    fn builder_sets_both_templates() {
        let set = TemplateSet::new()
            .with_text("hello")
            .with_image(GrayImage::new(2, 2));
        assert!(!set.is_empty());
        assert_eq!(set.text(), Some("hello"));
        assert!(TemplateSet::new().is_empty());
    }
}
