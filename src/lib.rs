//! # img2pdf
//!
//! Combine raster images from a directory or an explicit list into a single
//! multi-page PDF.
//!
//! ## Pipeline Overview
//!
//! ```text
//! --dir scans/  or  --path a.png b.jpg …
//!  │
//!  ├─ 1. Input   resolve + validate paths (flat scan, sorted by file name)
//!  ├─ 2. Load    decode each file eagerly, normalise to 8-bit RGB
//!  └─ 3. Write   one page per image at 100 dpi, parents created as needed
//! ```
//!
//! Everything runs synchronously on the calling thread. Any failure aborts
//! the run with an [`Img2PdfError`]; see [`Img2PdfError::kind`] for the
//! input / decode / write split.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use img2pdf::{convert, ConversionConfig};
//! use std::path::{Path, PathBuf};
//!
//! let pages = vec![PathBuf::from("cover.png"), PathBuf::from("page1.jpg")];
//! let config = ConversionConfig::builder().title("Booklet").build()?;
//! let stats = convert(None, Some(pages.as_slice()), Path::new("booklet.pdf"), &config)?;
//! assert_eq!(stats.page_count, 2);
//! # Ok::<(), img2pdf::Img2PdfError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `img2pdf` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod bitmap;
pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use bitmap::{Bitmap, ColorMode, Raster};
pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_RESOLUTION};
pub use convert::{convert, convert_images, inspect};
pub use error::{ErrorKind, Img2PdfError};
pub use output::{ConversionStats, PageInfo};
pub use pipeline::input::{resolve_paths, SUPPORTED_EXTENSIONS};
pub use pipeline::load::load_images;
pub use pipeline::write::write_pdf;
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
