//! Error types for the wordlist engine.
//!
//! Generation itself is infallible for well-formed input. Errors only surface
//! from opt-in strictness (`LengthPolicy::Strict`), the seed-count guard, and
//! the final file write.

use std::path::PathBuf;

use crate::LengthField;

/// Result alias used across `wordforge`.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `wordforge` can produce.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A length bound could not be parsed as a non-negative integer.
    ///
    /// Only raised under [`crate::LengthPolicy::Strict`]; the lenient policy
    /// falls back to the default bound instead.
    #[error("invalid {field} length: {value:?} is not a non-negative integer")]
    InvalidLength { field: LengthField, value: String },

    /// The minimum length is greater than the maximum length.
    ///
    /// Only raised under [`crate::LengthPolicy::Strict`].
    #[error("minimum length ({min}) is greater than maximum length ({max})")]
    InvalidBounds { min: usize, max: usize },

    /// The input produced more seed tokens than the configured cap allows.
    #[error("{count} seed tokens exceed the limit of {limit}")]
    TooManySeeds { count: usize, limit: usize },

    /// Writing the wordlist to `path` failed.
    #[error("failed to write wordlist to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
