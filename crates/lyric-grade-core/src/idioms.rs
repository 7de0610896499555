//! Multi-word expression detection.
//!
//! Idioms are indexed by their first word. Matching walks the word slots of a
//! line once and, at each slot, tries only the idioms that can start there,
//! longest first. A match consumes its slots, so a shorter idiom starting
//! inside it is never reported. Cost is linear in line length times the
//! handful of candidates sharing a first word.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Serialize;

use crate::language::LanguageProfile;
use crate::lexical::{LineAnalysis, Token, analyze_line};
use crate::tokenizer::{TokenizerRules, tokenize};

/// A built-in idiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Idiom {
    /// Stable identifier, unique within a language.
    pub id: &'static str,
    /// Canonical phrase, words in base form.
    pub phrase: &'static str,
    /// Short English gloss.
    pub gloss: &'static str,
}

impl Idiom {
    /// Create an idiom entry.
    pub const fn new(id: &'static str, phrase: &'static str, gloss: &'static str) -> Self {
        Self { id, phrase, gloss }
    }
}

/// An idiom occurrence inside one line, as inclusive token indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct IdiomSpan {
    /// Index of the first token of the match.
    pub start: usize,
    /// Index of the last token of the match.
    pub end: usize,
    /// Identifier of the matched idiom.
    pub idiom_id: String,
}

/// An idiom found in a song, with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct IdiomMatch {
    /// Line the idiom occurs on.
    pub line_index: usize,
    /// First token index.
    pub start: usize,
    /// Last token index (inclusive).
    pub end: usize,
    /// Identifier of the matched idiom.
    pub idiom_id: String,
    /// Canonical phrase.
    pub phrase: String,
    /// English gloss.
    pub gloss: String,
    /// The matched text as it appears in the line.
    pub text: String,
}

#[derive(Debug, Clone)]
struct Pattern {
    id: String,
    phrase: String,
    gloss: String,
    words: Vec<String>,
}

/// Idiom dictionary indexed for matching.
#[derive(Debug, Clone)]
pub struct IdiomDictionary {
    rules: TokenizerRules,
    patterns: Vec<Pattern>,
    by_first: HashMap<String, Vec<usize>>,
    max_len: usize,
}

impl IdiomDictionary {
    /// An empty dictionary whose phrases are normalized with `rules`.
    pub fn new(rules: TokenizerRules) -> Self {
        Self {
            rules,
            patterns: Vec::new(),
            by_first: HashMap::new(),
            max_len: 0,
        }
    }

    /// Build a dictionary from built-in entries.
    pub fn from_idioms(idioms: &[Idiom], rules: TokenizerRules) -> Self {
        let mut dictionary = Self::new(rules);
        for idiom in idioms {
            dictionary.insert(idiom.id, idiom.phrase, idiom.gloss);
        }
        dictionary
    }

    /// Add an idiom. Phrases with fewer than two words are ignored.
    ///
    /// Returns whether the idiom was added.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        phrase: impl Into<String>,
        gloss: impl Into<String>,
    ) -> bool {
        let phrase = phrase.into();
        let words: Vec<String> = tokenize(&phrase, &self.rules)
            .into_iter()
            .filter(|t| !t.is_whitespace && !t.clean.is_empty())
            .map(|t| t.clean)
            .collect();
        if words.len() < 2 {
            return false;
        }

        let position = self.patterns.len();
        self.max_len = self.max_len.max(words.len());
        self.by_first
            .entry(words[0].clone())
            .or_default()
            .push(position);
        self.patterns.push(Pattern {
            id: id.into(),
            phrase,
            gloss: gloss.into(),
            words,
        });

        let patterns = &self.patterns;
        if let Some(bucket) = self.by_first.get_mut(&patterns[position].words[0]) {
            bucket.sort_by(|&a, &b| {
                patterns[b]
                    .words
                    .len()
                    .cmp(&patterns[a].words.len())
                    .then_with(|| patterns[a].id.cmp(&patterns[b].id))
            });
        }
        true
    }

    /// Number of idioms.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the dictionary has no idioms.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Word count of the longest idiom.
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Phrase and gloss for an idiom id.
    pub fn describe(&self, id: &str) -> Option<(&str, &str)> {
        self.patterns
            .iter()
            .find(|p| p.id == id)
            .map(|p| (p.phrase.as_str(), p.gloss.as_str()))
    }

    /// Find non-overlapping idiom spans in a line's tokens.
    pub fn detect(&self, tokens: &[Token]) -> Vec<IdiomSpan> {
        let slots: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_whitespace() && !t.clean.is_empty())
            .map(|(i, _)| i)
            .collect();

        let mut spans = Vec::new();
        let mut i = 0;
        while i < slots.len() {
            match self.longest_at(tokens, &slots[i..]) {
                Some(pattern) => {
                    let len = pattern.words.len();
                    spans.push(IdiomSpan {
                        start: slots[i],
                        end: slots[i + len - 1],
                        idiom_id: pattern.id.clone(),
                    });
                    i += len;
                }
                None => i += 1,
            }
        }
        spans
    }

    fn longest_at(&self, tokens: &[Token], window: &[usize]) -> Option<&Pattern> {
        let first = &tokens[window[0]];
        let mut candidates: Vec<usize> = [first.clean.as_str(), first.lemma.as_str()]
            .iter()
            .filter_map(|key| self.by_first.get(*key))
            .flatten()
            .copied()
            .collect();
        candidates.sort_by(|&a, &b| {
            self.patterns[b]
                .words
                .len()
                .cmp(&self.patterns[a].words.len())
                .then_with(|| self.patterns[a].id.cmp(&self.patterns[b].id))
        });
        candidates.dedup();

        candidates
            .into_iter()
            .map(|p| &self.patterns[p])
            .find(|pattern| {
                let len = pattern.words.len();
                len <= window.len()
                    && pattern
                        .words
                        .iter()
                        .zip(window)
                        .all(|(word, &slot)| word_matches(word, &tokens[slot]))
                    && !window[..len]
                        .windows(2)
                        .any(|pair| tokens[pair[0]..pair[1]].iter().any(ends_sentence))
            })
    }
}

/// Marks that close a sentence; an idiom never spans one.
const SENTENCE_FINAL: &[char] = &['.', '!', '?', '…'];

fn ends_sentence(token: &Token) -> bool {
    token
        .surface
        .trim_end_matches(['"', '\'', '»', '”', ')'])
        .ends_with(SENTENCE_FINAL)
}

fn word_matches(word: &str, token: &Token) -> bool {
    token.clean == word || token.lemma == word
}

/// Idiom matches across every line of a song.
#[tracing::instrument(skip_all, fields(line_count = lines.len(), language = %profile.language()))]
pub fn get_idioms_for_lyrics<S: AsRef<str>>(
    lines: &[S],
    profile: &LanguageProfile,
) -> Vec<IdiomMatch> {
    let analyses: Vec<LineAnalysis> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| analyze_line(line.as_ref(), index, profile))
        .collect();
    idioms_in(&analyses, profile)
}

/// Idiom matches from already analyzed lines.
pub fn idioms_in(analyses: &[LineAnalysis], profile: &LanguageProfile) -> Vec<IdiomMatch> {
    let dictionary = profile.idioms();
    analyses
        .iter()
        .flat_map(|line| {
            line.idiom_spans.iter().map(move |span| {
                let (phrase, gloss) = dictionary.describe(&span.idiom_id).unwrap_or_default();
                IdiomMatch {
                    line_index: line.index,
                    start: span.start,
                    end: span.end,
                    idiom_id: span.idiom_id.clone(),
                    phrase: phrase.to_string(),
                    gloss: gloss.to_string(),
                    text: line.tokens[span.start..=span.end]
                        .iter()
                        .map(|t| t.surface.as_str())
                        .collect(),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn es() -> &'static LanguageProfile {
        LanguageProfile::builtin(Language::Spanish)
    }

    fn fr() -> &'static LanguageProfile {
        LanguageProfile::builtin(Language::French)
    }

    fn ids(line: &str, profile: &LanguageProfile) -> Vec<String> {
        analyze_line(line, 0, profile)
            .idiom_spans
            .into_iter()
            .map(|s| s.idiom_id)
            .collect()
    }

    #[test]
    fn finds_idiom_regardless_of_position() {
        assert_eq!(ids("sin embargo te quiero", es()), vec!["sin-embargo"]);
        assert_eq!(ids("te quiero, sin embargo", es()), vec!["sin-embargo"]);
        assert_eq!(ids("yo te quiero sin embargo mucho", es()), vec!["sin-embargo"]);
    }

    #[test]
    fn span_covers_inclusive_token_range() {
        let analysis = analyze_line("Y de repente llegó", 0, es());
        assert_eq!(analysis.idiom_spans.len(), 1);
        let span = &analysis.idiom_spans[0];
        assert_eq!(analysis.tokens[span.start].surface, "de");
        assert_eq!(analysis.tokens[span.end].surface, "repente");
    }

    #[test]
    fn prefers_longest_match_and_never_overlaps() {
        // "de" also starts "de nuevo" and "de repente".
        let analysis = analyze_line("de vez en cuando pienso en ti", 0, es());
        let found: Vec<&str> = analysis
            .idiom_spans
            .iter()
            .map(|s| s.idiom_id.as_str())
            .collect();
        assert_eq!(found, vec!["de-vez-en-cuando"]);

        let mut covered = Vec::new();
        for span in &analysis.idiom_spans {
            for i in span.start..=span.end {
                assert!(!covered.contains(&i));
                covered.push(i);
            }
        }
    }

    #[test]
    fn matches_conjugated_verbs_through_lemma() {
        assert_eq!(ids("Te echo de menos", es()), vec!["echar-de-menos"]);
        assert_eq!(ids("J'ai le cafard ce soir", fr()), vec!["avoir-le-cafard"]);
    }

    #[test]
    fn french_idioms_with_short_words() {
        assert_eq!(ids("Il y a du soleil", fr()), vec!["il-y-a"]);
        assert_eq!(ids("C'était un coup de foudre", fr()), vec!["coup-de-foudre"]);
    }

    #[test]
    fn repeated_idioms_are_all_reported() {
        assert_eq!(
            ids("otra vez, otra vez", es()),
            vec!["otra-vez", "otra-vez"]
        );
    }

    #[test]
    fn idioms_stop_at_sentence_breaks() {
        assert!(ids("Sin. Embargo te quiero", es()).is_empty());
        assert!(ids("sin ! embargo", es()).is_empty());
        assert_eq!(ids("¡Otra vez! Otra vez", es()), vec!["otra-vez", "otra-vez"]);
        assert_eq!(ids("Sin embargo.", es()), vec!["sin-embargo"]);
    }

    #[test]
    fn get_idioms_for_lyrics_reports_metadata() {
        let lines = ["Hola", "A lo mejor mañana"];
        let matches = get_idioms_for_lyrics(&lines, es());
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.line_index, 1);
        assert_eq!(m.idiom_id, "a-lo-mejor");
        assert_eq!(m.gloss, "maybe");
        assert_eq!(m.text, "A lo mejor");
    }

    #[test]
    fn custom_dictionary() {
        let mut dictionary = IdiomDictionary::new(es().rules());
        assert!(dictionary.insert("x-y", "perro verde", "a rare thing"));
        assert!(!dictionary.insert("single", "perro", "one word"));
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.max_len(), 2);

        let analysis = analyze_line("es un perro verde", 0, es());
        let spans = dictionary.detect(&analysis.tokens);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].idiom_id, "x-y");
    }

    #[test]
    fn empty_line_has_no_idioms() {
        assert!(get_idioms_for_lyrics(&[""], es()).is_empty());
    }
}
