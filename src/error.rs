//! Error types for the img2pdf library.
//!
//! Every failure is fatal: the pipeline never recovers internally, so one
//! error type is enough. Variants are fine-grained to keep messages precise,
//! and [`Img2PdfError::kind`] folds them back into the three categories
//! callers actually branch on:
//!
//! * [`ErrorKind::InvalidInput`]: bad arguments: missing directory, missing
//!   explicit path, nothing to convert, a raster the writer cannot embed.
//! * [`ErrorKind::Decode`]: an input file is not a decodable image.
//! * [`ErrorKind::Write`]: the output PDF cannot be created or written.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the img2pdf library.
#[derive(Debug, Error)]
pub enum Img2PdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// `--dir` points at nothing, or at something that is not a directory.
    #[error("Directory does not exist: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The directory exists but its entries could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory holds no file with a supported image extension.
    #[error("No supported images found in directory: {}", path.display())]
    NoSupportedImages { path: PathBuf },

    /// An explicitly listed path is missing or not a regular file.
    #[error("Image path does not exist: {}", path.display())]
    ImageNotFound { path: PathBuf },

    /// Neither a directory nor any explicit path was supplied.
    #[error("At least one image path must be provided.")]
    NoImagesProvided,

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A raster handed to the writer is not packed 8-bit RGB.
    #[error("Page {page} cannot be embedded: {detail}")]
    InvalidRaster { page: usize, detail: String },

    // ── Decode errors ─────────────────────────────────────────────────────
    /// The file could not be opened or parsed as an image.
    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // ── Write errors ──────────────────────────────────────────────────────
    /// Creating the parent directory or writing the file failed.
    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// lopdf refused to encode or serialise the document.
    #[error("Failed to build PDF {}: {detail}", path.display())]
    PdfWriteFailed { path: PathBuf, detail: String },
}

/// Coarse error category, one per pipeline failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Decode,
    Write,
}

impl Img2PdfError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Img2PdfError::DirectoryNotFound { .. }
            | Img2PdfError::DirectoryUnreadable { .. }
            | Img2PdfError::NoSupportedImages { .. }
            | Img2PdfError::ImageNotFound { .. }
            | Img2PdfError::NoImagesProvided
            | Img2PdfError::InvalidConfig(_)
            | Img2PdfError::InvalidRaster { .. } => ErrorKind::InvalidInput,
            Img2PdfError::Decode { .. } => ErrorKind::Decode,
            Img2PdfError::OutputWriteFailed { .. } | Img2PdfError::PdfWriteFailed { .. } => {
                ErrorKind::Write
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_not_found_display() {
        let e = Img2PdfError::DirectoryNotFound {
            path: PathBuf::from("/tmp/nope"),
        };
        assert_eq!(e.to_string(), "Directory does not exist: /tmp/nope");
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn no_images_provided_display() {
        let e = Img2PdfError::NoImagesProvided;
        assert!(e
            .to_string()
            .contains("At least one image path must be provided"));
    }

    #[test]
    fn write_failure_kind() {
        let e = Img2PdfError::OutputWriteFailed {
            path: PathBuf::from("out/combined.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.kind(), ErrorKind::Write);
        let msg = e.to_string();
        assert!(msg.contains("out/combined.pdf"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
    }

    #[test]
    fn invalid_raster_is_input_error() {
        let e = Img2PdfError::InvalidRaster {
            page: 3,
            detail: "colour mode is gray8, expected rgb8".into(),
        };
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            e.to_string(),
            "Page 3 cannot be embedded: colour mode is gray8, expected rgb8"
        );
    }

    #[test]
    fn pdf_write_failure_kind() {
        let e = Img2PdfError::PdfWriteFailed {
            path: PathBuf::from("a.pdf"),
            detail: "bad content".into(),
        };
        assert_eq!(e.kind(), ErrorKind::Write);
    }
}
