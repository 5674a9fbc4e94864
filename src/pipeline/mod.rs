//! Pipeline stages for image-to-PDF conversion.
//!
//! Each submodule implements exactly one step, called once per run in this
//! order with no branching back:
//!
//! ```text
//! input ──▶ load ──▶ write
//! (paths)   (RGB)    (PDF)
//! ```
//!
//! 1. [`input`]: resolve `--dir` or `--path …` to an ordered, validated
//!    list of files
//! 2. [`load`]: decode every file eagerly and normalise it to 8-bit RGB
//! 3. [`write`]: lay the bitmaps out one per page and save the PDF

pub mod input;
pub mod load;
pub mod write;
