//! # syl-parser
//!
//! Reads the metadata a lesson script carries in its leading docstring:
//! title, summary paragraph, `Author:` and `Date:` trailer lines, and the
//! `Part N: <heading>` comment banners that outline the lesson.
//!
//! ```text
//! # -*- coding: utf-8 -*-
//! """
//! Bayesian Statistics Interactive Lesson
//!
//! This script provides an introduction to Bayesian statistics.
//!
//! Author: Gemini
//! Date: 2025-08-24
//! """
//!
//! # # Part 1: Introduction to Bayesian Statistics   #
//! ```

pub mod discover;
pub mod error;
pub mod header;

pub use discover::{SCRIPT_EXTENSION, discover};
pub use error::ParseError;
pub use header::{ScriptHeader, parse_header};

use std::path::Path;

/// Read and parse the header of the script at `path`.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the header error
/// for malformed content.
pub fn parse_file(path: &Path) -> Result<ScriptHeader, ParseError> {
    let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_header(&source)
}
