//! Header parsing errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The script does not start with a docstring.
    #[error("no header docstring at the top of the script")]
    MissingHeader,

    /// The docstring is never closed.
    #[error("header docstring opened on line {line} is never closed")]
    UnterminatedHeader { line: usize },

    /// The docstring has no title line.
    #[error("header docstring has no title")]
    MissingTitle,

    /// The `Date:` line is not `YYYY-MM-DD`.
    #[error("invalid header date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// The script or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory walking failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: ignore::Error,
    },
}
