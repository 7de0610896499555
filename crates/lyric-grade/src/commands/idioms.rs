//! Idioms command: multi-word expressions found in a song.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lyric_grade_core::{Config, Language, get_idioms_for_lyrics};

use super::{load_profile, read_input_file};

/// Arguments for the `idioms` subcommand.
#[derive(Args, Debug)]
pub struct IdiomsArgs {
    /// Lyric file to scan.
    pub file: Utf8PathBuf,

    /// Language of the lyrics. Defaults to the configured language.
    #[arg(short, long)]
    pub language: Option<Language>,
}

/// List every idiom match with its line and gloss.
#[instrument(name = "cmd_idioms", skip_all, fields(file = %args.file))]
pub fn cmd_idioms(
    args: IdiomsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, language = ?args.language, "executing idioms command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let profile = load_profile(args.language, config)?;
    // Blank lines stay so match positions are file line numbers.
    let lines: Vec<&str> = content.lines().collect();
    let matches = get_idioms_for_lyrics(&lines, &profile);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("{}: no idioms found", args.file);
        return Ok(());
    }

    println!("{}", args.file.bold());
    for m in &matches {
        println!(
            "  {} {} = {} {}",
            format!("line {}:", m.line_index + 1).dimmed(),
            m.text.yellow(),
            m.gloss,
            format!("({})", m.phrase).dimmed(),
        );
    }
    println!("\n{} idioms", matches.len());

    Ok(())
}
