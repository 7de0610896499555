//! Core library for lyric-grade.
//!
//! Estimates how hard a song's lyrics are for a language learner. Each line
//! is tokenized and lemmatized, verb forms are mapped to a tense or mood,
//! known idioms are marked, and the song-level statistics are combined into
//! a difficulty score in `[1, 10]` and an integer level.
//!
//! # Modules
//!
//! - [`tokenizer`] - Splitting lines into words, punctuation and whitespace
//! - [`lexical`] - Lemma, part of speech and tense per token
//! - [`conjugation`] - Verb paradigms and inflected-form lookup
//! - [`idioms`] - Multi-word expression detection
//! - [`metrics`] - Song-level statistics
//! - [`scoring`] - Difficulty score and level assignment
//! - [`language`] - Per-language lexicons, frequency tables and rules
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lyric_grade_core::{Language, analyze_lyrics, compute_difficulty};
//!
//! let profile = Language::Spanish.profile();
//! let lines = analyze_lyrics("Quiero que vengas\nsin embargo no estás", profile);
//! let report = compute_difficulty(&lines).unwrap();
//!
//! assert!((1..=10).contains(&report.level));
//! assert_eq!(report.metrics.idiom_count, 1);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod conjugation;
pub mod dictionaries;
pub mod error;
pub mod idioms;
pub mod language;
pub mod lexical;
pub mod metrics;
pub mod morphology;
pub mod scoring;
pub mod tokenizer;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use idioms::{IdiomMatch, IdiomSpan, get_idioms_for_lyrics};
pub use language::{FrequencyTable, Language, LanguageProfile};
pub use lexical::{LineAnalysis, Token, analyze_line, analyze_lyrics, conjugations};
pub use metrics::SongMetrics;
pub use morphology::{PartOfSpeech, Person, TenseMood};
pub use scoring::{DifficultyReport, ScoringConfig, ScoringWeights, assign_level, compute_difficulty};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
