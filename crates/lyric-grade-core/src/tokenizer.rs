//! Whitespace-preserving tokenizer with per-language clean-up rules.
//!
//! A line is split into alternating whitespace and non-whitespace chunks.
//! Every chunk becomes a [`RawToken`]; non-whitespace chunks also get a
//! *clean* form used for dictionary lookups:
//!
//! 1. lowercase, typographic apostrophes folded to `'`
//! 2. opening marks (`¡ ¿ « " (`) peeled from the front
//! 3. whole-word expansions (`pa'` → `para`)
//! 4. elided prefixes dropped, keeping the stem (`l'amour` → `amour`)
//! 5. remaining punctuation trimmed from both ends
//!
//! Tokenization never fails; fragments that do not look like words are kept
//! with `is_word = false`.

/// Declarative tokenizer rules for one language.
#[derive(Debug, Clone, Copy)]
pub struct TokenizerRules {
    /// Elided prefixes stripped before lookup (`l'`, `qu'`, ...).
    pub elisions: &'static [&'static str],
    /// Whole-token colloquial contractions and their expansion.
    pub expansions: &'static [(&'static str, &'static str)],
    /// Characters trimmed from the edges of a token.
    pub punctuation: &'static [char],
    /// Accented letters that count as Latin letters for this language.
    pub letters: &'static str,
}

impl TokenizerRules {
    fn is_punct(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    fn is_letter(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || self.letters.contains(c)
    }
}

/// A token before lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// Text exactly as it appeared in the line.
    pub surface: String,
    /// Normalized lookup form; empty for whitespace and pure punctuation.
    pub clean: String,
    /// Whether the token counts as a word.
    pub is_word: bool,
    /// Whether the token is a whitespace run.
    pub is_whitespace: bool,
}

/// Split a line into ordered whitespace and non-whitespace tokens.
pub fn tokenize(text: &str, rules: &TokenizerRules) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (pos, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push(make_token(&text[start..pos], prev, rules));
                start = pos;
            }
            _ => {}
        }
        in_space = Some(space);
    }

    if let Some(space) = in_space {
        tokens.push(make_token(&text[start..], space, rules));
    }

    tokens
}

fn make_token(surface: &str, is_whitespace: bool, rules: &TokenizerRules) -> RawToken {
    if is_whitespace {
        return RawToken {
            surface: surface.to_string(),
            clean: String::new(),
            is_word: false,
            is_whitespace: true,
        };
    }

    let clean = clean_form(surface, rules);
    let is_word = is_word(&clean, rules);
    RawToken {
        surface: surface.to_string(),
        clean,
        is_word,
        is_whitespace: false,
    }
}

/// Compute the lookup form of a single non-whitespace chunk.
pub fn clean_form(surface: &str, rules: &TokenizerRules) -> String {
    let lowered: String = surface
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '`' => '\'',
            other => other,
        })
        .collect::<String>()
        .to_lowercase();

    let peeled = lowered.trim_start_matches(|c: char| c != '\'' && rules.is_punct(c));
    let core = peeled.trim_end_matches(|c: char| c != '\'' && rules.is_punct(c));

    if let Some((_, expansion)) = rules.expansions.iter().find(|(form, _)| *form == core) {
        return (*expansion).to_string();
    }

    let stem = rules
        .elisions
        .iter()
        .find_map(|prefix| {
            core.strip_prefix(prefix)
                .filter(|rest| rest.chars().next().is_some_and(|c| rules.is_letter(c)))
        })
        .unwrap_or(core);

    stem.trim_matches(|c: char| rules.is_punct(c)).to_string()
}

/// A clean form is a word when it has more than one character, at least one
/// Latin letter, and is not an elided prefix left dangling (`qu'`).
pub fn is_word(clean: &str, rules: &TokenizerRules) -> bool {
    clean.chars().count() > 1
        && clean.chars().any(|c| rules.is_letter(c))
        && !rules
            .elisions
            .iter()
            .any(|prefix| prefix.strip_suffix('\'') == Some(clean))
}
