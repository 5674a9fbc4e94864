//! Progress-callback trait for per-page conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the pipeline loads each image. The CLI uses it to drive a
//! terminal progress bar; library callers can forward events anywhere.
//!
//! # Example
//!
//! ```rust
//! use img2pdf::{ConversionProgressCallback, ConversionConfig};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     loaded: AtomicUsize,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_page_complete(&self, page_num: usize, total_pages: usize, dimensions: (u32, u32)) {
//!         self.loaded.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("Page {}/{} loaded ({}x{})", page_num, total_pages, dimensions.0, dimensions.1);
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { loaded: AtomicUsize::new(0) });
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ConversionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by the conversion pipeline as it processes each page.
///
/// The pipeline is single-threaded, so events arrive in page order from the
/// calling thread. The `Send + Sync` bound only lets one callback be shared
/// between configs. All methods default to no-ops.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after path resolution, before any image is decoded.
    fn on_conversion_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called just before an image is decoded.
    ///
    /// `page_num` is 1-indexed.
    fn on_page_start(&self, page_num: usize, total_pages: usize) {
        let _ = (page_num, total_pages);
    }

    /// Called when an image is decoded and normalised to RGB.
    fn on_page_complete(&self, page_num: usize, total_pages: usize, dimensions: (u32, u32)) {
        let _ = (page_num, total_pages, dimensions);
    }

    /// Called when an image fails to decode. The conversion aborts right after.
    fn on_page_error(&self, page_num: usize, total_pages: usize, error: &str) {
        let _ = (page_num, total_pages, error);
    }

    /// Called once after the PDF has been written.
    fn on_conversion_complete(&self, total_pages: usize, output_bytes: u64) {
        let _ = (total_pages, output_bytes);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;
