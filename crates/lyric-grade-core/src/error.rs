//! Error types for lyric-grade-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A scoring weight is negative or not a finite number.
    #[error("scoring weight `{name}` must be a finite, non-negative number (got {value})")]
    InvalidWeight {
        /// Name of the offending weight.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Every scoring weight is zero, so no score can be formed.
    #[error("at least one scoring weight must be greater than zero")]
    ZeroWeights,

    /// The rare-word frequency default is outside the Zipf range.
    #[error("rare_word_zipf must be between 0 and 8 (got {0})")]
    InvalidRareZipf(f64),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during lyric analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Difficulty was requested for a song with no lines.
    #[error("cannot compute difficulty of an empty line sequence")]
    InvalidInput,

    /// A language code outside the supported set.
    #[error("unknown language: {code}. Use: {available}")]
    UnknownLanguage {
        /// The code that was requested.
        code: String,
        /// Comma-separated list of supported codes.
        available: String,
    },

    /// A frequency list could not be read.
    #[error("failed to read frequency list {path}: {source}")]
    FrequencyListIo {
        /// File that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A frequency list line is malformed.
    #[error("frequency list line {line}: {reason}")]
    FrequencyListParse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
