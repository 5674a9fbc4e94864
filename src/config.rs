//! Configuration types for image-to-PDF conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The defaults reproduce the plain
//! `img2pdf --dir scans out.pdf` behaviour, so most callers only touch the
//! document title.

use crate::error::Img2PdfError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Nominal resolution written for every page, in dots per inch.
pub const DEFAULT_RESOLUTION: f32 = 100.0;

const MIN_RESOLUTION: f32 = 1.0;
const MAX_RESOLUTION: f32 = 2400.0;

/// Configuration for an image-to-PDF conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use img2pdf::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .title("Scanned receipts")
///     .build()
///     .unwrap();
/// assert_eq!(config.resolution, 100.0);
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Nominal resolution in DPI used to size every page. Default: 100.
    ///
    /// A page is `pixels × 72 / resolution` points wide, so a 1000 px wide
    /// image becomes a 720 pt (10 in) page. The value is a fixed policy for
    /// the whole document; DPI tags embedded in the source images are ignored.
    pub resolution: f32,

    /// Flate-compress the image streams. Default: true.
    ///
    /// Pixels are stored as raw 8-bit RGB; without compression a 3000 × 4000
    /// scan costs 36 MB per page.
    pub compress: bool,

    /// Document `Title` written to the PDF info dictionary.
    pub title: Option<String>,

    /// Document `Creator` written to the PDF info dictionary.
    pub creator: Option<String>,

    /// Receives per-page events while images are loaded.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            compress: true,
            title: None,
            creator: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("resolution", &self.resolution)
            .field("compress", &self.compress)
            .field("title", &self.title)
            .field("creator", &self.creator)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ConversionProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Check the invariants [`ConversionConfigBuilder::build`] enforces.
    ///
    /// The fields are public, so entry points that take a config re-check it.
    pub fn validate(&self) -> Result<(), Img2PdfError> {
        let r = self.resolution;
        if !r.is_finite() || !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&r) {
            return Err(Img2PdfError::InvalidConfig(format!(
                "resolution must be {MIN_RESOLUTION}–{MAX_RESOLUTION} dpi, got {r}"
            )));
        }
        Ok(())
    }

    /// Convert a pixel length to PDF points at the configured resolution.
    pub fn pixels_to_points(&self, pixels: u32) -> f32 {
        pixels as f32 * 72.0 / self.resolution
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn resolution(mut self, dpi: f32) -> Self {
        self.config.resolution = dpi;
        self
    }

    pub fn compress(mut self, v: bool) -> Self {
        self.config.compress = v;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.config.creator = Some(creator.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Img2PdfError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
