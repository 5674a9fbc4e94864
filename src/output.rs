//! Result types returned by the conversion entry points.

use crate::bitmap::ColorMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of a finished conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Destination PDF.
    pub output_path: PathBuf,
    /// Pages written, one per input image.
    pub page_count: usize,
    /// Size of the written PDF.
    pub output_bytes: u64,
    /// Time spent decoding images.
    pub load_duration_ms: u64,
    /// Time spent building and saving the PDF.
    pub write_duration_ms: u64,
    /// Wall-clock time including path resolution.
    pub total_duration_ms: u64,
}

/// One resolved input, as reported by [`crate::inspect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// 1-indexed position in the output document.
    pub page_num: usize,
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Layout the decoder reports before normalisation.
    pub color_mode: ColorMode,
}
