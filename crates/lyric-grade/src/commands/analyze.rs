//! Analyze command: per-line token breakdown.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lyric_grade_core::{Config, Language, LineAnalysis, LanguageProfile, analyze_lyrics};

use super::{load_profile, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Lyric file to analyze.
    pub file: Utf8PathBuf,

    /// Language of the lyrics. Defaults to the configured language.
    #[arg(short, long)]
    pub language: Option<Language>,
}

/// Print lemma, part of speech and tense for every word of every line.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, language = ?args.language, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let profile = load_profile(args.language, config)?;
    let lines = analyze_lyrics(&content, &profile);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    for line in &lines {
        print_line(line, &profile);
    }

    Ok(())
}

fn print_line(line: &LineAnalysis, profile: &LanguageProfile) {
    println!("\n  {} {}", format!("[{}]", line.index).dimmed(), line.text().trim());

    for token in line.words() {
        let tense = token.tense_mood.map_or("", |t| t.as_str());
        let marker = if token.auxiliary { " (aux)" } else { "" };
        println!(
            "    {:<16} {:<14} {:<12} {}{}",
            token.surface,
            token.lemma.dimmed(),
            token.part_of_speech.as_str().cyan(),
            tense,
            marker.dimmed(),
        );
    }

    for span in &line.idiom_spans {
        let matched: String = line.tokens[span.start..=span.end]
            .iter()
            .map(|t| t.surface.as_str())
            .collect();
        match profile.idioms().describe(&span.idiom_id) {
            Some((_, gloss)) => println!("    {} {matched} = {gloss}", "Idiom:".yellow()),
            None => println!("    {} {matched}", "Idiom:".yellow()),
        }
    }
}
