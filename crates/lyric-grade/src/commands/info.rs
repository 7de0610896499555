//! Info command implementation

use clap::Args;
use lyric_grade_core::config::{Config, ConfigSources};
use lyric_grade_core::{Language, ScoringConfig};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_list: Option<String>,
    scoring: ScoringConfig,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            language: config.language,
            input_limit: config.input_limit(),
            max_level: config.max_level,
            frequency_list: config.frequency_list.as_ref().map(|p| p.to_string()),
            scoring: config.scoring,
        }
    }
}

#[derive(Serialize)]
struct LanguageInfo {
    code: &'static str,
    name: &'static str,
    lexicon_entries: usize,
    frequency_entries: usize,
    idioms: usize,
}

impl LanguageInfo {
    fn new(language: Language) -> Self {
        let profile = language.profile();
        Self {
            code: language.code(),
            name: language.name(),
            lexicon_entries: profile.lexicon_len(),
            frequency_entries: profile.frequencies().len(),
            idioms: profile.idioms().len(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    languages: Vec<LanguageInfo>,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: info,
        config: ConfigInfo::from_config(config, sources),
        languages: Language::ALL.into_iter().map(LanguageInfo::new).collect(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }
    if !full_info.package.repository.is_empty() {
        println!(
            "{}: {}",
            "Repository".dimmed(),
            full_info.package.repository.cyan()
        );
    }

    // Configuration section
    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = cfg.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    println!("{}: {}", "Language".dimmed(), cfg.language);
    print_opt("Input limit (bytes)", &cfg.input_limit);
    print_opt("Max level", &cfg.max_level);
    print_opt("Frequency list", &cfg.frequency_list);

    let w = &cfg.scoring.weights;
    println!();
    println!("{}", "Scoring".bold().underline());
    println!(
        "{}: rarity {:.2}, verbs {:.2}, tense {:.2}, diversity {:.2}, idioms {:.2}, punctuation {:.2}",
        "Weights".dimmed(),
        w.rarity,
        w.verb_density,
        w.tense,
        w.diversity,
        w.idiom_density,
        w.punctuation,
    );
    println!("{}: {:.1}", "Rare word zipf".dimmed(), cfg.scoring.rare_word_zipf);

    println!();
    println!("{}", "Languages".bold().underline());
    for lang in &full_info.languages {
        println!(
            "{} ({}): {} lexicon entries, {} frequencies, {} idioms",
            lang.name,
            lang.code.cyan(),
            lang.lexicon_entries,
            lang.frequency_entries,
            lang.idioms,
        );
    }

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
