//! Language selection and the read-only per-language profile.
//!
//! A [`LanguageProfile`] bundles everything analysis needs for one language:
//! tokenizer rules, the lexicon index, the conjugation engine, the frequency
//! table and the idiom dictionary. Built-in profiles are constructed on first
//! use and shared for the life of the process; nothing mutates them, so any
//! number of threads can analyze songs against the same profile at once.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::conjugation::{Conjugator, Paradigm};
use crate::dictionaries::{LanguageTables, french, spanish};
use crate::error::{AnalysisError, AnalysisResult};
use crate::idioms::IdiomDictionary;
use crate::morphology::PartOfSpeech;
use crate::tokenizer::TokenizerRules;

/// A supported lyric language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// Spanish.
    #[default]
    #[serde(rename = "es")]
    #[cfg_attr(feature = "clap", value(name = "es"))]
    Spanish,
    /// French.
    #[serde(rename = "fr")]
    #[cfg_attr(feature = "clap", value(name = "fr"))]
    French,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 2] = [Self::Spanish, Self::French];

    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::French => "fr",
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spanish => "Spanish",
            Self::French => "French",
        }
    }

    /// The built-in profile for this language.
    pub fn profile(self) -> &'static LanguageProfile {
        LanguageProfile::builtin(self)
    }

    const fn tables(self) -> &'static LanguageTables {
        match self {
            Self::Spanish => &spanish::TABLES,
            Self::French => &french::TABLES,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spa" | "spanish" | "español" => Ok(Self::Spanish),
            "fr" | "fra" | "fre" | "french" | "français" => Ok(Self::French),
            _ => Err(AnalysisError::UnknownLanguage {
                code: s.to_string(),
                available: Self::ALL
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Word frequencies on the Zipf scale (roughly 1 = very rare, 7 = very common).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    scores: HashMap<String, f64>,
}

impl FrequencyTable {
    /// Build a table from static pairs.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            scores: pairs
                .iter()
                .map(|(word, zipf)| (normalize(word), *zipf))
                .collect(),
        }
    }

    /// Parse `word<TAB>zipf` lines. Blank lines and `#` comments are skipped;
    /// any run of whitespace separates the two columns.
    pub fn from_tsv(text: &str) -> AnalysisResult<Self> {
        let mut scores = HashMap::new();
        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parse_error = |reason: &str| AnalysisError::FrequencyListParse {
                line: n + 1,
                reason: reason.to_string(),
            };
            let mut columns = line.split_whitespace();
            let (Some(word), Some(value), None) = (columns.next(), columns.next(), columns.next())
            else {
                return Err(parse_error("expected `word<TAB>zipf`"));
            };
            let zipf: f64 = value
                .parse()
                .map_err(|_| parse_error(&format!("`{value}` is not a number")))?;
            if !zipf.is_finite() || !(0.0..=8.0).contains(&zipf) {
                return Err(parse_error(&format!("zipf {zipf} is outside 0..=8")));
            }
            scores.insert(normalize(word), zipf);
        }
        Ok(Self { scores })
    }

    /// Read and parse a frequency list file.
    #[tracing::instrument]
    pub fn load(path: &Utf8Path) -> AnalysisResult<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|source| AnalysisError::FrequencyListIo {
                path: path.to_path_buf(),
                source,
            })?;
        let table = Self::from_tsv(&text)?;
        tracing::debug!(entries = table.len(), "frequency list loaded");
        Ok(table)
    }

    /// Zipf score for a word, if listed.
    pub fn zipf(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn normalize(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

/// Everything analysis needs for one language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: Language,
    tables: &'static LanguageTables,
    lexicon: HashMap<&'static str, Vec<(&'static str, PartOfSpeech)>>,
    conjugator: Conjugator,
    frequencies: FrequencyTable,
    idioms: IdiomDictionary,
}

static SPANISH: LazyLock<LanguageProfile> =
    LazyLock::new(|| LanguageProfile::build(Language::Spanish));
static FRENCH: LazyLock<LanguageProfile> =
    LazyLock::new(|| LanguageProfile::build(Language::French));

impl LanguageProfile {
    /// The shared built-in profile.
    pub fn builtin(language: Language) -> &'static Self {
        match language {
            Language::Spanish => &SPANISH,
            Language::French => &FRENCH,
        }
    }

    fn build(language: Language) -> Self {
        let tables = language.tables();
        let mut lexicon: HashMap<&'static str, Vec<(&'static str, PartOfSpeech)>> =
            HashMap::new();
        for &(form, lemma, pos) in tables.lexicon {
            lexicon.entry(form).or_default().push((lemma, pos));
        }
        let profile = Self {
            language,
            tables,
            lexicon,
            conjugator: Conjugator::new(&tables.conjugation, tables.verbs),
            frequencies: FrequencyTable::from_pairs(tables.frequencies),
            idioms: IdiomDictionary::from_idioms(tables.idioms, tables.rules),
        };
        tracing::debug!(
            language = %language,
            lexicon = profile.lexicon.len(),
            frequencies = profile.frequencies.len(),
            idioms = profile.idioms.len(),
            "language profile built"
        );
        profile
    }

    /// A copy of this profile using a different frequency table.
    ///
    /// Build it once at startup and share it like a built-in profile.
    #[must_use]
    pub fn with_frequencies(&self, frequencies: FrequencyTable) -> Self {
        Self {
            frequencies,
            ..self.clone()
        }
    }

    /// A copy of this profile using a different idiom dictionary.
    #[must_use]
    pub fn with_idioms(&self, idioms: IdiomDictionary) -> Self {
        Self {
            idioms,
            ..self.clone()
        }
    }

    /// The profile's language.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Tokenizer rules.
    pub const fn rules(&self) -> TokenizerRules {
        self.tables.rules
    }

    /// Lexicon entries for an exact clean form, as `(lemma, pos)` pairs.
    pub fn lexicon(&self, form: &str) -> &[(&'static str, PartOfSpeech)] {
        self.lexicon.get(form).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct forms in the lexicon.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Conjugation engine.
    pub const fn conjugator(&self) -> &Conjugator {
        &self.conjugator
    }

    /// Frequency table in use.
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Idiom dictionary in use.
    pub const fn idioms(&self) -> &IdiomDictionary {
        &self.idioms
    }

    /// Whether a clean form opens a subordinate clause.
    pub fn is_subordinator(&self, clean: &str) -> bool {
        self.tables.subordinators.contains(&clean)
    }

    /// Whether a verb lemma is a copula or auxiliary.
    pub fn is_auxiliary(&self, lemma: &str) -> bool {
        self.tables.auxiliaries.contains(&lemma)
    }

    /// Whether a verb lemma forms perfect tenses.
    pub fn is_perfect_auxiliary(&self, lemma: &str) -> bool {
        self.tables.perfect_auxiliaries.contains(&lemma)
    }

    /// Plural suffixes tried for nouns and adjectives.
    pub const fn plural_suffixes(&self) -> &'static [&'static str] {
        self.tables.plural_suffixes
    }

    /// Full conjugation grid for a verb lemma.
    ///
    /// Returns `None` when the word cannot be a verb: either the lexicon
    /// lists it only as another part of speech, or no conjugation class
    /// fits its ending.
    pub fn conjugations(&self, lemma: &str) -> Option<Paradigm> {
        let lemma = normalize(lemma.trim());
        let listed_as_other = self
            .lexicon(&lemma)
            .iter()
            .any(|(_, pos)| *pos != PartOfSpeech::Verb);
        if listed_as_other && !self.conjugator.is_known(&lemma) {
            return None;
        }
        self.conjugator.paradigm(&lemma)
    }
}
