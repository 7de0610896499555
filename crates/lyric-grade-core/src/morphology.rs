//! Grammatical categories shared by the analyzer, conjugator and scorer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Part of speech assigned to a token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartOfSpeech {
    /// Noun.
    Noun,
    /// Verb, including copulas and auxiliaries.
    Verb,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Pronoun.
    Pronoun,
    /// Preposition (including contracted forms such as `del`, `au`).
    Preposition,
    /// Conjunction.
    Conjunction,
    /// Definite or indefinite article.
    Article,
    /// Demonstrative, possessive or quantifying determiner.
    Determiner,
    /// Numeral, spelled out or in digits.
    Number,
    /// Anything else, including unknown words.
    Other,
}

impl PartOfSpeech {
    /// Resolution rank when one surface form has several candidate tags.
    ///
    /// Lower wins: verb, noun, adjective, adverb, then the closed classes in
    /// declaration order, with `Other` last.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Verb => 0,
            Self::Noun => 1,
            Self::Adjective => 2,
            Self::Adverb => 3,
            Self::Pronoun => 4,
            Self::Preposition => 5,
            Self::Conjunction => 6,
            Self::Article => 7,
            Self::Determiner => 8,
            Self::Number => 9,
            Self::Other => 10,
        }
    }

    /// Closed-class words: the dictionary entry is authoritative for them.
    pub const fn is_closed_class(self) -> bool {
        matches!(
            self,
            Self::Pronoun
                | Self::Preposition
                | Self::Conjunction
                | Self::Article
                | Self::Determiner
                | Self::Number
        )
    }

    /// Short lowercase label for display.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adj",
            Self::Adverb => "adv",
            Self::Pronoun => "pron",
            Self::Preposition => "prep",
            Self::Conjunction => "conj",
            Self::Article => "art",
            Self::Determiner => "det",
            Self::Number => "num",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tense or mood of a conjugated verb.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenseMood {
    /// Present indicative.
    Present,
    /// Simple past (Spanish pretérito, French passé simple).
    Preterite,
    /// Imperfect indicative.
    Imperfect,
    /// Simple future.
    Future,
    /// Conditional.
    Conditional,
    /// Present subjunctive.
    Subjunctive,
    /// Present perfect (auxiliary in the present + participle).
    PresentPerfect,
    /// Pluperfect (auxiliary in the imperfect + participle).
    Pluperfect,
}

impl TenseMood {
    /// Every tense, in paradigm display order.
    pub const ALL: [Self; 8] = [
        Self::Present,
        Self::Preterite,
        Self::Imperfect,
        Self::Future,
        Self::Conditional,
        Self::Subjunctive,
        Self::PresentPerfect,
        Self::Pluperfect,
    ];

    /// The simple (single-word) tenses.
    pub const SIMPLE: [Self; 6] = [
        Self::Present,
        Self::Preterite,
        Self::Imperfect,
        Self::Future,
        Self::Conditional,
        Self::Subjunctive,
    ];

    /// Fixed complexity weight, ascending with grammatical difficulty.
    pub const fn complexity_weight(self) -> f64 {
        match self {
            Self::Present => 1.0,
            Self::Preterite | Self::Imperfect | Self::Future => 1.5,
            Self::Conditional => 2.0,
            Self::Subjunctive | Self::PresentPerfect => 2.5,
            Self::Pluperfect => 3.0,
        }
    }

    /// The largest weight any tense carries.
    pub const MAX_WEIGHT: f64 = 3.0;

    /// Whether the tense is built from an auxiliary plus a participle.
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::PresentPerfect | Self::Pluperfect)
    }

    /// Stable snake_case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Preterite => "preterite",
            Self::Imperfect => "imperfect",
            Self::Future => "future",
            Self::Conditional => "conditional",
            Self::Subjunctive => "subjunctive",
            Self::PresentPerfect => "present_perfect",
            Self::Pluperfect => "pluperfect",
        }
    }
}

impl std::fmt::Display for TenseMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical person and number, in conjugation-table row order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    /// yo / je
    FirstSingular,
    /// tú / tu
    SecondSingular,
    /// él, ella, usted / il, elle, on
    ThirdSingular,
    /// nosotros / nous
    FirstPlural,
    /// vosotros / vous
    SecondPlural,
    /// ellos, ustedes / ils, elles
    ThirdPlural,
}

impl Person {
    /// All six persons in row order.
    pub const ALL: [Self; 6] = [
        Self::FirstSingular,
        Self::SecondSingular,
        Self::ThirdSingular,
        Self::FirstPlural,
        Self::SecondPlural,
        Self::ThirdPlural,
    ];

    /// Row index into a six-form conjugation row.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the person is plural.
    pub const fn is_plural(self) -> bool {
        matches!(self, Self::FirstPlural | Self::SecondPlural | Self::ThirdPlural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tense_weights_ascend_with_difficulty() {
        let w = TenseMood::complexity_weight;
        assert!(w(TenseMood::Present) < w(TenseMood::Preterite));
        assert_eq!(w(TenseMood::Preterite), w(TenseMood::Imperfect));
        assert_eq!(w(TenseMood::Imperfect), w(TenseMood::Future));
        assert!(w(TenseMood::Future) < w(TenseMood::Conditional));
        assert!(w(TenseMood::Conditional) < w(TenseMood::Subjunctive));
        assert!(w(TenseMood::Subjunctive) <= w(TenseMood::PresentPerfect));
        assert!(
            TenseMood::ALL
                .iter()
                .all(|t| t.complexity_weight() <= TenseMood::MAX_WEIGHT)
        );
    }

    #[test]
    fn verb_outranks_noun_outranks_adjective() {
        assert!(PartOfSpeech::Verb.priority() < PartOfSpeech::Noun.priority());
        assert!(PartOfSpeech::Noun.priority() < PartOfSpeech::Adjective.priority());
        assert!(PartOfSpeech::Adjective.priority() < PartOfSpeech::Adverb.priority());
        assert!(PartOfSpeech::Adverb.priority() < PartOfSpeech::Other.priority());
    }

    #[test]
    fn serializes_with_screaming_case() {
        let json = serde_json::to_string(&TenseMood::PresentPerfect).unwrap();
        assert_eq!(json, "\"PRESENT_PERFECT\"");
        let json = serde_json::to_string(&PartOfSpeech::Adjective).unwrap();
        assert_eq!(json, "\"ADJECTIVE\"");
    }

    #[test]
    fn person_indexes_rows() {
        assert_eq!(Person::FirstSingular.index(), 0);
        assert_eq!(Person::ThirdPlural.index(), 5);
        assert!(Person::FirstPlural.is_plural());
        assert!(!Person::ThirdSingular.is_plural());
    }
}
