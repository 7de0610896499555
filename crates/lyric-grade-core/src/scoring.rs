//! Difficulty scoring and level assignment.
//!
//! Six signals are normalized to `[0, 1]`, combined as a weighted mean and
//! rescaled onto `[1, 10]`:
//!
//! | signal        | normalization                              |
//! |---------------|--------------------------------------------|
//! | rarity        | `(7 - avg_word_freq_zipf) / 6`             |
//! | verb density  | `verb_density / 0.5`                       |
//! | tense         | `(tense_weight_avg - 1) / (max weight - 1)` |
//! | diversity     | `type_token_ratio`                         |
//! | idiom density | `(idiom_count / word_count) / 0.1`         |
//! | punctuation   | `punct_complexity / 3`                     |
//!
//! Every signal is non-decreasing in the quantity it measures, and weights
//! are non-negative, so the score is monotone in each signal.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
use crate::lexical::LineAnalysis;
use crate::metrics::{SongMetrics, aggregate};
use crate::morphology::TenseMood;

/// Lowest difficulty score and level.
pub const MIN_LEVEL: u8 = 1;
/// Highest difficulty score and level.
pub const MAX_LEVEL: u8 = 10;

const COMMON_ZIPF: f64 = 7.0;
const ZIPF_SPAN: f64 = 6.0;
const VERB_DENSITY_CEILING: f64 = 0.5;
const IDIOM_DENSITY_CEILING: f64 = 0.1;
const PUNCT_CEILING: f64 = 3.0;

/// Relative weight of each difficulty signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringWeights {
    /// Word rarity (inverted average Zipf frequency).
    pub rarity: f64,
    /// Share of words that are lexical verbs.
    pub verb_density: f64,
    /// Average tense complexity.
    pub tense: f64,
    /// Vocabulary diversity (type-token ratio).
    pub diversity: f64,
    /// Idioms per word.
    pub idiom_density: f64,
    /// Punctuation and subordination.
    pub punctuation: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rarity: 0.30,
            verb_density: 0.10,
            tense: 0.20,
            diversity: 0.15,
            idiom_density: 0.10,
            punctuation: 0.15,
        }
    }
}

impl ScoringWeights {
    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("rarity", self.rarity),
            ("verb_density", self.verb_density),
            ("tense", self.tense),
            ("diversity", self.diversity),
            ("idiom_density", self.idiom_density),
            ("punctuation", self.punctuation),
        ]
    }

    fn sum(&self) -> f64 {
        self.named().iter().map(|(_, w)| w).sum()
    }
}

/// Tunable scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Signal weights.
    pub weights: ScoringWeights,
    /// Zipf frequency assumed for words missing from the frequency table.
    pub rare_word_zipf: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            rare_word_zipf: 1.5,
        }
    }
}

impl ScoringConfig {
    /// Reject weights that would break the score's range or monotonicity.
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in self.weights.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        if self.weights.sum() <= 0.0 {
            return Err(ConfigError::ZeroWeights);
        }
        if !self.rare_word_zipf.is_finite() || !(0.0..=8.0).contains(&self.rare_word_zipf) {
            return Err(ConfigError::InvalidRareZipf(self.rare_word_zipf));
        }
        Ok(())
    }
}

/// Metrics, score and level for a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DifficultyReport {
    /// Aggregated statistics, `difficulty_score` included.
    pub metrics: SongMetrics,
    /// Continuous score in `[1, 10]`.
    pub difficulty_score: f64,
    /// Integer level in `1..=10`.
    pub level: u8,
}

/// Score a song with the default weights.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] when `lines` is empty.
pub fn compute_difficulty(lines: &[LineAnalysis]) -> AnalysisResult<DifficultyReport> {
    compute_difficulty_with(lines, &ScoringConfig::default())
}

/// Score a song with explicit scoring parameters.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] when `lines` is empty.
#[tracing::instrument(skip_all, fields(line_count = lines.len()))]
pub fn compute_difficulty_with(
    lines: &[LineAnalysis],
    config: &ScoringConfig,
) -> AnalysisResult<DifficultyReport> {
    if lines.is_empty() {
        return Err(AnalysisError::InvalidInput);
    }

    let mut metrics = aggregate(lines, config.rare_word_zipf);
    let difficulty_score = score(&metrics, &config.weights);
    metrics.difficulty_score = difficulty_score;
    let level = assign_level(difficulty_score);

    tracing::debug!(
        words = metrics.word_count,
        score = difficulty_score,
        level,
        "difficulty computed"
    );
    Ok(DifficultyReport {
        metrics,
        difficulty_score,
        level,
    })
}

/// Combine normalized signals into a score in `[1, 10]`.
///
/// A song without words scores the minimum.
pub fn score(metrics: &SongMetrics, weights: &ScoringWeights) -> f64 {
    let total = weights.sum();
    if metrics.word_count == 0 || !total.is_finite() || total <= 0.0 {
        return f64::from(MIN_LEVEL);
    }

    let idiom_density = metrics.idiom_count as f64 / metrics.word_count as f64;
    let signals = [
        (COMMON_ZIPF - metrics.avg_word_freq_zipf) / ZIPF_SPAN,
        metrics.verb_density / VERB_DENSITY_CEILING,
        (metrics.tense_weight_avg - 1.0) / (TenseMood::MAX_WEIGHT - 1.0),
        metrics.type_token_ratio,
        idiom_density / IDIOM_DENSITY_CEILING,
        metrics.punct_complexity / PUNCT_CEILING,
    ];

    let combined: f64 = weights
        .named()
        .iter()
        .zip(signals)
        .map(|((_, weight), signal)| weight * unit(signal))
        .sum::<f64>()
        / total;

    let span = f64::from(MAX_LEVEL - MIN_LEVEL);
    (f64::from(MIN_LEVEL) + span * combined).clamp(f64::from(MIN_LEVEL), f64::from(MAX_LEVEL))
}

fn unit(signal: f64) -> f64 {
    if signal.is_nan() {
        0.0
    } else {
        signal.clamp(0.0, 1.0)
    }
}

/// Round a score half-up and clamp it to `1..=10`.
///
/// Total: NaN maps to the lowest level and infinities to the nearest bound.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn assign_level(score: f64) -> u8 {
    if score.is_nan() {
        return MIN_LEVEL;
    }
    let rounded = (score + 0.5).floor();
    rounded.clamp(f64::from(MIN_LEVEL), f64::from(MAX_LEVEL)) as u8
}
