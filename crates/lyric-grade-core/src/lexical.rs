//! Lexical analysis: lemma, part of speech and tense for every token.
//!
//! Each word is resolved in stages:
//!
//! 1. the exact-match lexicon (closed-class entries are final)
//! 2. conjugation readings: irregular overrides first, then regular endings
//! 3. plural and participle fallbacks for open-class words
//!
//! Competing candidates are ordered by part-of-speech priority, then tense,
//! so a given form in a given context always resolves the same way. A word
//! right after an article or determiner prefers a non-verb reading
//! (`el camino` is a noun, `camino por` a verb). A final pass folds
//! `auxiliary + participle` pairs into compound tenses.

use schemars::JsonSchema;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::conjugation::Paradigm;
use crate::idioms::IdiomSpan;
use crate::language::{Language, LanguageProfile};
use crate::morphology::{PartOfSpeech, Person, TenseMood};
use crate::tokenizer::{RawToken, tokenize};

/// One analyzed token.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Token {
    /// Text exactly as it appeared in the line.
    pub surface: String,
    /// Normalized lookup form.
    pub clean: String,
    /// Dictionary form; the infinitive for verbs.
    pub lemma: String,
    /// Resolved part of speech.
    pub part_of_speech: PartOfSpeech,
    /// Tense or mood, for conjugated verbs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tense_mood: Option<TenseMood>,
    /// Grammatical person, for conjugated verbs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    /// Whether the token counts as a word.
    pub is_word: bool,
    /// Copula or auxiliary verb.
    pub auxiliary: bool,
    /// Zipf frequency of the form or its lemma, if listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

impl Token {
    /// Whether the token is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        !self.surface.is_empty() && self.surface.chars().all(char::is_whitespace)
    }

    /// Whether the token is a verb.
    pub fn is_verb(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Verb
    }
}

/// The analysis of one lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct LineAnalysis {
    /// Position of the line in the song.
    pub index: usize,
    /// Language the line was analyzed as.
    pub language: Language,
    /// Every token, whitespace included, in order.
    pub tokens: Vec<Token>,
    /// Non-overlapping idiom matches.
    pub idiom_spans: Vec<IdiomSpan>,
}

impl LineAnalysis {
    /// Tokens that count as words.
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_word)
    }

    /// The line text, rebuilt from token surfaces.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.surface.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    lemma: String,
    pos: PartOfSpeech,
    tense: Option<TenseMood>,
    person: Option<Person>,
}

impl Candidate {
    fn new(lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            tense: None,
            person: None,
        }
    }
}

/// Analyze one line of lyrics.
///
/// Never fails: unknown words become `Other` with their clean form as lemma,
/// and an empty line yields no tokens.
#[tracing::instrument(skip(text, profile), fields(text_len = text.len(), language = %profile.language()))]
pub fn analyze_line(text: &str, index: usize, profile: &LanguageProfile) -> LineAnalysis {
    let normalized: String = text.nfc().collect();
    let raw = tokenize(&normalized, &profile.rules());

    let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
    let mut previous_pos = None;
    for raw_token in raw {
        let token = resolve(raw_token, previous_pos, profile);
        if !token.is_whitespace() && !token.clean.is_empty() {
            previous_pos = Some(token.part_of_speech);
        }
        tokens.push(token);
    }

    fold_compound_tenses(&mut tokens, profile);
    let idiom_spans = profile.idioms().detect(&tokens);

    LineAnalysis {
        index,
        language: profile.language(),
        tokens,
        idiom_spans,
    }
}

/// Analyze a whole song, one [`LineAnalysis`] per non-blank line.
///
/// Line indexes count the kept lines only.
#[tracing::instrument(skip_all, fields(text_len = text.len(), language = %profile.language()))]
pub fn analyze_lyrics(text: &str, profile: &LanguageProfile) -> Vec<LineAnalysis> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| analyze_line(line, index, profile))
        .collect()
}

/// Full conjugation grid for a verb lemma in the profile's language.
pub fn conjugations(lemma: &str, profile: &LanguageProfile) -> Option<Paradigm> {
    profile.conjugations(lemma)
}

fn resolve(raw: RawToken, previous: Option<PartOfSpeech>, profile: &LanguageProfile) -> Token {
    if raw.is_whitespace || raw.clean.is_empty() {
        return Token {
            lemma: raw.clean.clone(),
            part_of_speech: PartOfSpeech::Other,
            tense_mood: None,
            person: None,
            is_word: false,
            auxiliary: false,
            frequency: None,
            surface: raw.surface,
            clean: raw.clean,
        };
    }

    let mut candidates = candidates(&raw.clean, raw.is_word, profile);

    if matches!(
        previous,
        Some(PartOfSpeech::Article | PartOfSpeech::Determiner)
    ) && candidates.iter().any(|c| c.pos != PartOfSpeech::Verb)
    {
        candidates.retain(|c| c.pos != PartOfSpeech::Verb);
    }

    if candidates.len() > 1 {
        tracing::trace!(
            word = %raw.clean,
            candidates = candidates.len(),
            "ambiguous form, resolving by priority"
        );
    }
    candidates.sort_by_key(|c| (c.pos.priority(), c.tense));

    let chosen = candidates.into_iter().next().unwrap_or_else(|| {
        if raw.is_word {
            tracing::trace!(word = %raw.clean, "lexicon miss");
        }
        let pos = if raw.clean.chars().all(|c| c.is_ascii_digit()) {
            PartOfSpeech::Number
        } else {
            PartOfSpeech::Other
        };
        Candidate::new(raw.clean.clone(), pos)
    });

    let frequencies = profile.frequencies();
    let frequency = frequencies
        .zipf(&raw.clean)
        .or_else(|| frequencies.zipf(&chosen.lemma));
    if frequency.is_none() && raw.is_word {
        tracing::trace!(word = %raw.clean, "frequency miss");
    }

    let auxiliary = chosen.pos == PartOfSpeech::Verb && profile.is_auxiliary(&chosen.lemma);
    Token {
        surface: raw.surface,
        clean: raw.clean,
        lemma: chosen.lemma,
        part_of_speech: chosen.pos,
        tense_mood: chosen.tense,
        person: chosen.person,
        is_word: raw.is_word,
        auxiliary,
        frequency,
    }
}

fn candidates(clean: &str, is_word: bool, profile: &LanguageProfile) -> Vec<Candidate> {
    let entries = profile.lexicon(clean);
    let mut candidates: Vec<Candidate> = entries
        .iter()
        .map(|(lemma, pos)| Candidate::new(*lemma, *pos))
        .collect();

    let conjugator = profile.conjugator();
    let readings = conjugator.readings(clean, is_word && entries.is_empty());

    // A verb listed in the lexicon takes its tense from a matching reading.
    for candidate in candidates.iter_mut().filter(|c| c.pos == PartOfSpeech::Verb) {
        if let Some(r) = readings.iter().find(|r| r.lemma == candidate.lemma) {
            candidate.tense = Some(r.tense);
            candidate.person = Some(r.person);
        }
    }

    if entries.iter().any(|(_, pos)| pos.is_closed_class()) {
        return candidates;
    }

    candidates.extend(readings.into_iter().map(|r| Candidate {
        lemma: r.lemma,
        pos: PartOfSpeech::Verb,
        tense: Some(r.tense),
        person: Some(r.person),
    }));

    if candidates.is_empty() {
        candidates.extend(plural_candidates(clean, profile));
    }
    if candidates.is_empty()
        && let Some(lemma) = conjugator.participle_lemma(clean)
    {
        candidates.push(Candidate::new(lemma, PartOfSpeech::Adjective));
    }
    candidates
}

fn plural_candidates(clean: &str, profile: &LanguageProfile) -> Vec<Candidate> {
    profile
        .plural_suffixes()
        .iter()
        .filter_map(|suffix| clean.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
        .flat_map(|stem| profile.lexicon(stem))
        .filter(|(_, pos)| matches!(pos, PartOfSpeech::Noun | PartOfSpeech::Adjective))
        .map(|(lemma, pos)| Candidate::new(*lemma, *pos))
        .collect()
}

/// Turn `auxiliary + participle` into one compound-tense verb.
///
/// The participle takes the compound tense and the auxiliary's person; the
/// auxiliary keeps its verb tag but loses its own tense. Adverbs between the
/// two (`no`, `ya`, `pas`, `jamais`) are skipped.
fn fold_compound_tenses(tokens: &mut [Token], profile: &LanguageProfile) {
    let conjugator = profile.conjugator();
    for aux in 0..tokens.len() {
        let compound = match tokens[aux].tense_mood {
            Some(TenseMood::Present) => TenseMood::PresentPerfect,
            Some(TenseMood::Imperfect) => TenseMood::Pluperfect,
            _ => continue,
        };
        if !tokens[aux].is_verb() || !profile.is_perfect_auxiliary(&tokens[aux].lemma) {
            continue;
        }

        let next = tokens[aux + 1..]
            .iter()
            .position(|t| {
                !t.is_whitespace()
                    && !t.clean.is_empty()
                    && t.part_of_speech != PartOfSpeech::Adverb
            })
            .map(|offset| aux + 1 + offset);
        let Some(next) = next else { continue };
        let Some(lemma) = conjugator.participle_lemma(&tokens[next].clean) else {
            continue;
        };
        let lemma = lemma.to_string();

        let person = tokens[aux].person;
        tokens[aux].tense_mood = None;
        tokens[aux].auxiliary = true;

        let participle = &mut tokens[next];
        participle.auxiliary = profile.is_auxiliary(&lemma);
        participle.lemma = lemma;
        participle.part_of_speech = PartOfSpeech::Verb;
        participle.tense_mood = Some(compound);
        participle.person = person;
    }
}
