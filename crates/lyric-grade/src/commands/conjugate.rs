//! Conjugate command: the paradigm table of a verb.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lyric_grade_core::{Config, Language, conjugations};

use super::load_profile;

/// Arguments for the `conjugate` subcommand.
#[derive(Args, Debug)]
pub struct ConjugateArgs {
    /// Infinitive to conjugate.
    pub lemma: String,

    /// Language of the verb. Defaults to the configured language.
    #[arg(short, long)]
    pub language: Option<Language>,
}

const fn pronouns(language: Language) -> [&'static str; 6] {
    match language {
        Language::Spanish => ["yo", "tú", "él", "nosotros", "vosotros", "ellos"],
        Language::French => ["je", "tu", "il", "nous", "vous", "ils"],
    }
}

/// Print every tense of the verb, one row per person.
#[instrument(name = "cmd_conjugate", skip_all, fields(lemma = %args.lemma))]
pub fn cmd_conjugate(args: ConjugateArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(lemma = %args.lemma, language = ?args.language, "executing conjugate command");

    let profile = load_profile(args.language, config)?;
    let lemma = args.lemma.trim().to_lowercase();
    let Some(paradigm) = conjugations(&lemma, &profile) else {
        bail!(
            "{} is not a {} verb infinitive",
            args.lemma,
            profile.language().name()
        );
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&paradigm)?);
        return Ok(());
    }

    let kind = if paradigm.irregular { "irregular" } else { "regular" };
    let class = if paradigm.verb_class.starts_with('-') {
        format!("{kind} {}", paradigm.verb_class)
    } else {
        paradigm.verb_class.clone()
    };
    println!(
        "{} ({class}, auxiliary {}, participle {})",
        paradigm.lemma.bold(),
        paradigm.auxiliary,
        paradigm.participle.cyan(),
    );

    let pronouns = pronouns(profile.language());
    for (tense, forms) in &paradigm.tenses {
        println!("\n  {}", tense.as_str().underline());
        for (pronoun, form) in pronouns.iter().zip(forms) {
            println!("    {:<10} {form}", pronoun.dimmed());
        }
    }

    Ok(())
}
