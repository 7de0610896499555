//! Built-in language resources.
//!
//! Each language module exposes one [`LanguageTables`] static holding its
//! tokenizer rules, lexicon, verb lists, conjugation tables, frequency list
//! and idiom dictionary. The tables are plain `'static` data; the indexes
//! built over them live in [`crate::language::LanguageProfile`].

pub mod french;
pub mod spanish;

use crate::conjugation::ConjugationTables;
use crate::idioms::Idiom;
use crate::morphology::PartOfSpeech;
use crate::tokenizer::TokenizerRules;

/// One lexicon entry: surface form, lemma, part of speech.
pub type LexEntry = (&'static str, &'static str, PartOfSpeech);

/// Every static resource for one language.
#[derive(Debug)]
pub struct LanguageTables {
    /// Tokenizer clean-up rules.
    pub rules: TokenizerRules,
    /// Exact-match dictionary. A form may appear more than once.
    pub lexicon: &'static [LexEntry],
    /// Known regular verb infinitives (irregular ones come from the tables).
    pub verbs: &'static [&'static str],
    /// Conjugation classes and irregular overrides.
    pub conjugation: ConjugationTables,
    /// Zipf frequency per word form or lemma.
    pub frequencies: &'static [(&'static str, f64)],
    /// Multi-word expressions.
    pub idioms: &'static [Idiom],
    /// Words that open a subordinate clause.
    pub subordinators: &'static [&'static str],
    /// Copulas and auxiliaries, excluded from lexical verb density.
    pub auxiliaries: &'static [&'static str],
    /// Auxiliaries that form perfect tenses with a past participle.
    pub perfect_auxiliaries: &'static [&'static str],
    /// Plural suffixes tried when a noun or adjective misses the lexicon.
    pub plural_suffixes: &'static [&'static str],
}

/// Punctuation trimmed from token edges, shared by both languages.
pub(crate) const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '¡', '¿', '"', '\'', '«', '»', '(', ')', '[', ']', '{', '}',
    '…', '—', '–', '-', '*', '“', '”', '/', '_', '~',
];
