//! Score command: difficulty score and level for lyric files.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use lyric_grade_core::scoring::compute_difficulty_with;
use lyric_grade_core::{Config, DifficultyReport, Language, analyze_lyrics};

use super::{load_profile, read_input_file};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Lyric files to score, one line of lyrics per line.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Language of the lyrics. Defaults to the configured language.
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Highest acceptable level (1–10).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub max_level: Option<u8>,
}

#[derive(Debug, Serialize)]
struct FileScore {
    file: Utf8PathBuf,
    language: Language,
    #[serde(flatten)]
    report: DifficultyReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_level: Option<u8>,
    pass: bool,
}

/// Score each file and enforce the level gate.
///
/// With `--json`, one file prints a single object and several print an array.
#[instrument(name = "cmd_score", skip_all, fields(files = args.files.len()))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, language = ?args.language, "executing score command");

    let profile = load_profile(args.language, config)?;
    let max_level = args.max_level.or(config.max_level);

    let progress = if args.files.len() > 1 && !global_json {
        let pb = ProgressBar::new(args.files.len() as u64);
        pb.set_style(ProgressStyle::default_bar().template("{bar:30} {pos}/{len} {msg}")?);
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut results = Vec::with_capacity(args.files.len());
    for file in &args.files {
        progress.set_message(file.to_string());
        let content = read_input_file(file, max_input_bytes)?;
        let lines = analyze_lyrics(&content, &profile);
        let report = compute_difficulty_with(&lines, &config.scoring)
            .with_context(|| format!("failed to score {file}: it has no lyric lines"))?;
        let pass = max_level.is_none_or(|max| report.level <= max);
        debug!(%file, level = report.level, pass, "file scored");

        if !global_json {
            progress.suspend(|| print_score(file, &report, max_level, pass));
        }
        results.push(FileScore {
            file: file.clone(),
            language: profile.language(),
            report,
            max_level,
            pass,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    if global_json {
        if let [single] = results.as_slice() {
            println!("{}", serde_json::to_string_pretty(single)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    let failed: Vec<_> = results.iter().filter(|r| !r.pass).collect();
    if let (Some(max), false) = (max_level, failed.is_empty()) {
        let names: Vec<_> = failed.iter().map(|r| r.file.as_str()).collect();
        bail!(
            "{} above level {max}: {}. Pick simpler songs or raise --max-level.",
            if failed.len() == 1 { "1 song is" } else { "songs are" },
            names.join(", "),
        );
    }

    Ok(())
}

fn print_score(file: &Utf8PathBuf, report: &DifficultyReport, max_level: Option<u8>, pass: bool) {
    let level = format!("level {}", report.level);
    let level = if report.level <= 3 {
        level.green().to_string()
    } else if report.level <= 6 {
        level.yellow().to_string()
    } else {
        level.red().to_string()
    };

    match max_level {
        Some(max) if pass => println!(
            "{} {file}: {level} (score {:.2}, max: {max})",
            "PASS:".green(),
            report.difficulty_score,
        ),
        Some(max) => println!(
            "{} {file}: {level} (score {:.2}, max: {max})",
            "FAIL:".red(),
            report.difficulty_score,
        ),
        None => println!("{file}: {level} (score {:.2})", report.difficulty_score),
    }

    let m = &report.metrics;
    println!(
        "  {} {} lines, {} words, {} unique",
        "Text:".cyan(),
        m.line_count,
        m.word_count,
        m.unique_word_count,
    );
    println!(
        "  {} avg zipf {:.2}, verb density {:.2}, tense weight {:.2}",
        "Signals:".cyan(),
        m.avg_word_freq_zipf,
        m.verb_density,
        m.tense_weight_avg,
    );
    println!(
        "  {} {} idioms, punctuation {:.2}",
        "Structure:".cyan(),
        m.idiom_count,
        m.punct_complexity,
    );
}
