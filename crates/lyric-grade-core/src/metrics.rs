//! Song-level statistics aggregated from line analyses.
//!
//! Everything here is a pure function of the [`LineAnalysis`] sequence: the
//! token frequencies were looked up during analysis, so recomputing the
//! metrics from the same lines gives bit-identical numbers.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::language::LanguageProfile;
use crate::lexical::LineAnalysis;
use crate::morphology::TenseMood;

/// Document-level statistics for one song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SongMetrics {
    /// Number of analyzed lines.
    pub line_count: usize,
    /// Tokens that count as words.
    pub word_count: usize,
    /// Distinct lemmas among the words.
    pub unique_word_count: usize,
    /// `unique_word_count / word_count`.
    pub type_token_ratio: f64,
    /// Mean Zipf frequency; words missing from the table count as rare.
    pub avg_word_freq_zipf: f64,
    /// Lexical verbs (copulas and auxiliaries excluded).
    pub verb_count: usize,
    /// `verb_count / word_count`.
    pub verb_density: f64,
    /// Occurrences of each tense.
    pub tense_counts: BTreeMap<TenseMood, usize>,
    /// Occurrences of each tense times its complexity weight.
    pub tense_weights: BTreeMap<TenseMood, f64>,
    /// Sum of weighted tense occurrences divided by the number of tensed verbs.
    pub tense_weight_avg: f64,
    /// Idiom spans across all lines.
    pub idiom_count: usize,
    /// Mean per-line structural complexity from punctuation and subordination.
    pub punct_complexity: f64,
    /// Combined difficulty in `[1, 10]`.
    pub difficulty_score: f64,
}

/// Aggregate metrics over a song. `difficulty_score` is left at 1.0; the
/// scorer fills it in.
///
/// `rare_word_zipf` is the frequency assumed for words the table lacks.
pub fn aggregate(lines: &[LineAnalysis], rare_word_zipf: f64) -> SongMetrics {
    let mut word_count = 0;
    let mut lemmas = HashSet::new();
    let mut zipf_sum = 0.0;
    let mut verb_count = 0;
    let mut tense_counts: BTreeMap<TenseMood, usize> = BTreeMap::new();
    let mut idiom_count = 0;
    let mut punct_total = 0.0;

    for line in lines {
        idiom_count += line.idiom_spans.len();
        punct_total += line_punct_complexity(line);

        for token in line.words() {
            word_count += 1;
            lemmas.insert(token.lemma.to_lowercase());
            zipf_sum += token.frequency.unwrap_or(rare_word_zipf);
            if token.is_verb() && !token.auxiliary {
                verb_count += 1;
            }
            if let Some(tense) = token.tense_mood {
                *tense_counts.entry(tense).or_default() += 1;
            }
        }
    }

    let tense_weights: BTreeMap<TenseMood, f64> = tense_counts
        .iter()
        .map(|(tense, count)| (*tense, *count as f64 * tense.complexity_weight()))
        .collect();
    let tensed: usize = tense_counts.values().sum();
    let tense_weight_avg = if tensed == 0 {
        0.0
    } else {
        tense_weights.values().sum::<f64>() / tensed as f64
    };

    let (type_token_ratio, avg_word_freq_zipf, verb_density) = if word_count == 0 {
        (1.0, 0.0, 0.0)
    } else {
        let words = word_count as f64;
        (
            lemmas.len() as f64 / words,
            zipf_sum / words,
            verb_count as f64 / words,
        )
    };

    SongMetrics {
        line_count: lines.len(),
        word_count,
        unique_word_count: lemmas.len(),
        type_token_ratio,
        avg_word_freq_zipf,
        verb_count,
        verb_density,
        tense_counts,
        tense_weights,
        tense_weight_avg,
        idiom_count,
        punct_complexity: if lines.is_empty() {
            0.0
        } else {
            punct_total / lines.len() as f64
        },
        difficulty_score: 1.0,
    }
}

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?…]+").expect("valid regex"));

const CLAUSE_BREAK: f64 = 1.0;
const COMMA: f64 = 0.5;
const PARENTHETICAL: f64 = 0.75;
const EXTRA_SENTENCE: f64 = 0.5;
const SUBORDINATOR: f64 = 0.5;

/// Structural complexity of one line.
///
/// Semicolons and colons weigh most, then dashes and parentheses, then
/// commas. Every sentence-final run after the first adds to the score, as
/// does each word that opens a subordinate clause.
pub fn line_punct_complexity(line: &LineAnalysis) -> f64 {
    let profile = LanguageProfile::builtin(line.language);
    let text = line.text();

    let marks: f64 = text
        .chars()
        .map(|c| match c {
            ';' | ':' => CLAUSE_BREAK,
            ',' => COMMA,
            '—' | '–' | '(' => PARENTHETICAL,
            _ => 0.0,
        })
        .sum();

    let sentence_runs = SENTENCE_END.find_iter(&text).count();
    let extra_sentences = sentence_runs.saturating_sub(1) as f64 * EXTRA_SENTENCE;

    let subordinators = line
        .tokens
        .iter()
        .filter(|t| !t.is_whitespace())
        .filter(|t| profile.is_subordinator(&t.clean) || opens_with_elided(&t.surface, profile))
        .count() as f64
        * SUBORDINATOR;

    marks + extra_sentences + subordinators
}

/// `qu'il`, `lorsqu'on`: a subordinator elided onto the next word.
fn opens_with_elided(surface: &str, profile: &LanguageProfile) -> bool {
    let lower = surface.to_lowercase().replace('\u{2019}', "'");
    profile.rules().elisions.iter().any(|prefix| {
        lower.len() > prefix.len()
            && lower.starts_with(prefix)
            && prefix
                .strip_suffix('\'')
                .is_some_and(|stem| profile.is_subordinator(&format!("{stem}e")))
    })
}
