//! Verb conjugation tables, paradigm generation and tense detection.
//!
//! One set of tables drives both directions:
//!
//! - [`Conjugator::paradigm`] builds the full tense × person grid for a lemma.
//! - [`Conjugator::readings`] goes the other way, from an inflected form back
//!   to `(lemma, tense, person)` readings, by looking the form up in the
//!   irregular index and otherwise stripping regular endings.
//!
//! Irregular verbs override whole rows; any tense they leave out is derived
//! from the regular class their infinitive ending selects.

use std::collections::{BTreeMap, HashMap, HashSet};

use schemars::JsonSchema;
use serde::Serialize;

use crate::morphology::{Person, TenseMood};

/// Six endings or forms, one per [`Person`].
pub type Row = [&'static str; 6];

/// A regular conjugation class keyed by infinitive ending.
#[derive(Debug)]
pub struct VerbClass {
    /// Infinitive ending that selects the class (`ar`, `re`, ...).
    pub infinitive: &'static str,
    /// Past participle ending appended to the stem.
    pub participle: &'static str,
    /// Letters dropped from the infinitive to form the future stem.
    pub future_trim: &'static str,
    /// Present indicative endings.
    pub present: Row,
    /// Simple past endings.
    pub preterite: Row,
    /// Imperfect endings.
    pub imperfect: Row,
    /// Present subjunctive endings.
    pub subjunctive: Row,
}

impl VerbClass {
    /// Endings attached to the stem for a stem-based tense.
    const fn stem_row(&self, tense: TenseMood) -> Option<&Row> {
        match tense {
            TenseMood::Present => Some(&self.present),
            TenseMood::Preterite => Some(&self.preterite),
            TenseMood::Imperfect => Some(&self.imperfect),
            TenseMood::Subjunctive => Some(&self.subjunctive),
            _ => None,
        }
    }
}

/// Overrides for one irregular verb.
#[derive(Debug)]
pub struct IrregularVerb {
    /// Infinitive.
    pub lemma: &'static str,
    /// Irregular past participle, if any.
    pub participle: Option<&'static str>,
    /// Irregular future/conditional stem, if any.
    pub future_stem: Option<&'static str>,
    /// Complete replacement rows for irregular simple tenses.
    pub rows: &'static [(TenseMood, Row)],
}

/// All conjugation data for one language.
#[derive(Debug)]
pub struct ConjugationTables {
    /// Regular classes; the first whose infinitive ending matches wins.
    pub classes: &'static [VerbClass],
    /// Future endings, attached to the future stem.
    pub future: Row,
    /// Conditional endings, attached to the future stem.
    pub conditional: Row,
    /// Auxiliary used to build compound tenses.
    pub auxiliary: &'static str,
    /// A second auxiliary taken by a closed set of verbs, if the language has one.
    pub alternate_auxiliary: Option<AlternateAuxiliary>,
    /// Suffixes a participle takes to agree with its subject, longest first.
    pub participle_agreement: &'static [&'static str],
    /// Irregular verb overrides.
    pub irregulars: &'static [IrregularVerb],
}

/// Verbs whose compound tenses use a different auxiliary.
#[derive(Debug)]
pub struct AlternateAuxiliary {
    /// Infinitive of the auxiliary.
    pub verb: &'static str,
    /// Infinitives that take it.
    pub lemmas: &'static [&'static str],
    /// Suffix the participle takes in the plural persons.
    pub plural_agreement: &'static str,
}

/// One way to read an inflected verb form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbReading {
    /// Infinitive the form belongs to.
    pub lemma: String,
    /// Tense or mood of the form.
    pub tense: TenseMood,
    /// Grammatical person of the form.
    pub person: Person,
}

/// Full conjugation grid for one verb.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Paradigm {
    /// Infinitive.
    pub lemma: String,
    /// Infinitive ending of the regular class, e.g. `-ar`.
    pub verb_class: String,
    /// Auxiliary of the compound tenses.
    pub auxiliary: String,
    /// Whether any form comes from the irregular tables.
    pub irregular: bool,
    /// Past participle.
    pub participle: String,
    /// Six forms per tense, in [`Person`] order.
    pub tenses: BTreeMap<TenseMood, Vec<String>>,
}

impl Paradigm {
    /// Look up a single form.
    pub fn form(&self, tense: TenseMood, person: Person) -> Option<&str> {
        self.tenses
            .get(&tense)
            .and_then(|row| row.get(person.index()))
            .map(String::as_str)
    }
}

/// Verbs whose stem must be at least this long to accept an unknown lemma.
const MIN_UNKNOWN_STEM: usize = 2;
/// Endings at least this long are distinctive enough to accept an unknown lemma.
const MIN_UNKNOWN_ENDING: usize = 5;

/// Runtime conjugation engine built once per language profile.
#[derive(Debug, Clone)]
pub struct Conjugator {
    tables: &'static ConjugationTables,
    known: HashSet<&'static str>,
    irregular_forms: HashMap<String, Vec<VerbReading>>,
    participles: HashMap<String, String>,
}

impl Conjugator {
    /// Build the engine and its form indexes.
    pub fn new(tables: &'static ConjugationTables, verbs: &'static [&'static str]) -> Self {
        let mut conjugator = Self {
            tables,
            known: verbs
                .iter()
                .copied()
                .chain(tables.irregulars.iter().map(|v| v.lemma))
                .collect(),
            irregular_forms: HashMap::new(),
            participles: HashMap::new(),
        };

        let mut irregular_forms: HashMap<String, Vec<VerbReading>> = HashMap::new();
        for verb in tables.irregulars {
            let Some(paradigm) = conjugator.derive(verb.lemma) else {
                continue;
            };
            for tense in TenseMood::SIMPLE {
                let Some(row) = paradigm.tenses.get(&tense) else {
                    continue;
                };
                for (person, form) in Person::ALL.into_iter().zip(row) {
                    let reading = VerbReading {
                        lemma: verb.lemma.to_string(),
                        tense,
                        person,
                    };
                    let entry = irregular_forms.entry(form.clone()).or_default();
                    if !entry.contains(&reading) {
                        entry.push(reading);
                    }
                }
            }
        }

        let mut participles = HashMap::new();
        let mut lemmas: Vec<&'static str> = conjugator.known.iter().copied().collect();
        lemmas.sort_unstable();
        for lemma in lemmas {
            if let Some(participle) = conjugator.participle_of(lemma) {
                participles.entry(participle).or_insert_with(|| lemma.to_string());
            }
        }

        conjugator.irregular_forms = irregular_forms;
        conjugator.participles = participles;
        conjugator
    }

    /// The auxiliary a lemma builds its compound tenses with.
    pub fn auxiliary_for(&self, lemma: &str) -> &'static str {
        match &self.tables.alternate_auxiliary {
            Some(alternate) if alternate.lemmas.contains(&lemma) => alternate.verb,
            _ => self.tables.auxiliary,
        }
    }

    /// Whether the lemma is a verb this language knows about.
    pub fn is_known(&self, lemma: &str) -> bool {
        self.known.contains(lemma)
    }

    /// The lemma whose past participle is `word`, if any.
    ///
    /// Agreeing forms (`allée`, `partis`) are tried after the bare form.
    pub fn participle_lemma(&self, word: &str) -> Option<&str> {
        if let Some(lemma) = self.participles.get(word) {
            return Some(lemma);
        }
        self.tables
            .participle_agreement
            .iter()
            .filter_map(|suffix| word.strip_suffix(suffix))
            .find_map(|bare| self.participles.get(bare))
            .map(String::as_str)
    }

    /// All readings of an inflected form.
    ///
    /// Irregular forms come from the override index and shadow regular
    /// stripping. Regular readings are accepted when the recovered infinitive
    /// is a known verb, or, if `allow_unknown` is set, when the ending is long
    /// enough to be unambiguous.
    pub fn readings(&self, word: &str, allow_unknown: bool) -> Vec<VerbReading> {
        if let Some(readings) = self.irregular_forms.get(word) {
            return readings.clone();
        }

        let mut readings = Vec::new();
        for class in self.tables.classes {
            for tense in TenseMood::SIMPLE {
                let (row, future_based) = match class.stem_row(tense) {
                    Some(row) => (row, false),
                    None if tense == TenseMood::Future => (&self.tables.future, true),
                    None => (&self.tables.conditional, true),
                };
                for (person, ending) in Person::ALL.into_iter().zip(row) {
                    if ending.is_empty() {
                        continue;
                    }
                    let Some(stem) = word.strip_suffix(ending) else {
                        continue;
                    };
                    let lemma = if future_based {
                        let lemma = format!("{stem}{}", class.future_trim);
                        if !lemma.ends_with(class.infinitive) {
                            continue;
                        }
                        lemma
                    } else {
                        format!("{stem}{}", class.infinitive)
                    };

                    let accepted = self.is_known(&lemma)
                        || (allow_unknown
                            && ending.chars().count() >= MIN_UNKNOWN_ENDING
                            && stem.chars().count() >= MIN_UNKNOWN_STEM);
                    if !accepted {
                        continue;
                    }

                    let reading = VerbReading {
                        lemma,
                        tense,
                        person,
                    };
                    if !readings.contains(&reading) {
                        readings.push(reading);
                    }
                }
            }
        }
        readings
    }

    /// Full paradigm for a lemma, or `None` when it cannot be a verb.
    pub fn paradigm(&self, lemma: &str) -> Option<Paradigm> {
        let mut paradigm = self.derive(lemma)?;
        let auxiliary = self.derive(&paradigm.auxiliary)?;
        let plural_agreement = match &self.tables.alternate_auxiliary {
            Some(alternate) if alternate.verb == auxiliary.lemma => alternate.plural_agreement,
            _ => "",
        };

        for (compound, aux_tense) in [
            (TenseMood::PresentPerfect, TenseMood::Present),
            (TenseMood::Pluperfect, TenseMood::Imperfect),
        ] {
            if let Some(aux_row) = auxiliary.tenses.get(&aux_tense) {
                let row = Person::ALL
                    .into_iter()
                    .zip(aux_row)
                    .map(|(person, aux)| {
                        let agreement = if person.is_plural() { plural_agreement } else { "" };
                        format!("{aux} {}{agreement}", paradigm.participle)
                    })
                    .collect();
                paradigm.tenses.insert(compound, row);
            }
        }
        Some(paradigm)
    }

    /// Simple tenses only; compound rows are added by [`Self::paradigm`].
    fn derive(&self, lemma: &str) -> Option<Paradigm> {
        let irregular = self.irregular(lemma);
        let class = self
            .tables
            .classes
            .iter()
            .find(|class| lemma.ends_with(class.infinitive));

        if irregular.is_none() {
            let class = class?;
            let stem = lemma.strip_suffix(class.infinitive)?;
            if !self.is_known(lemma) && stem.chars().count() < MIN_UNKNOWN_STEM {
                return None;
            }
        }

        let stem = class.and_then(|c| lemma.strip_suffix(c.infinitive));
        let future_stem = irregular
            .and_then(|v| v.future_stem)
            .map(str::to_string)
            .or_else(|| class.map(|c| lemma.strip_suffix(c.future_trim).unwrap_or(lemma).to_string()))
            .unwrap_or_else(|| lemma.to_string());

        let mut tenses = BTreeMap::new();
        for tense in TenseMood::SIMPLE {
            let overridden = irregular
                .and_then(|v| v.rows.iter().find(|(t, _)| *t == tense))
                .map(|(_, row)| row.iter().map(|f| (*f).to_string()).collect::<Vec<_>>());

            let row = match overridden {
                Some(row) => row,
                None => match tense {
                    TenseMood::Future => attach(&future_stem, &self.tables.future),
                    TenseMood::Conditional => attach(&future_stem, &self.tables.conditional),
                    _ => match (class, stem) {
                        (Some(class), Some(stem)) => match class.stem_row(tense) {
                            Some(endings) => attach(stem, endings),
                            None => continue,
                        },
                        _ => continue,
                    },
                },
            };
            tenses.insert(tense, row);
        }

        let participle = irregular
            .and_then(|v| v.participle)
            .map(str::to_string)
            .or_else(|| {
                class
                    .zip(stem)
                    .map(|(class, stem)| format!("{stem}{}", class.participle))
            })?;

        Some(Paradigm {
            lemma: lemma.to_string(),
            verb_class: class.map_or_else(|| "irregular".to_string(), |c| format!("-{}", c.infinitive)),
            auxiliary: self.auxiliary_for(lemma).to_string(),
            irregular: irregular.is_some(),
            participle,
            tenses,
        })
    }

    fn participle_of(&self, lemma: &str) -> Option<String> {
        if let Some(participle) = self.irregular(lemma).and_then(|v| v.participle) {
            return Some(participle.to_string());
        }
        let class = self
            .tables
            .classes
            .iter()
            .find(|class| lemma.ends_with(class.infinitive))?;
        let stem = lemma.strip_suffix(class.infinitive)?;
        Some(format!("{stem}{}", class.participle))
    }

    fn irregular(&self, lemma: &str) -> Option<&'static IrregularVerb> {
        self.tables.irregulars.iter().find(|v| v.lemma == lemma)
    }
}

fn attach(stem: &str, endings: &Row) -> Vec<String> {
    endings.iter().map(|ending| format!("{stem}{ending}")).collect()
}
