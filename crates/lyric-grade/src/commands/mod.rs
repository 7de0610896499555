//! Command implementations.

use std::borrow::Cow;

use anyhow::Context;
use camino::Utf8Path;
use lyric_grade_core::{Config, Language, LanguageProfile};

pub mod analyze;
pub mod conjugate;
pub mod idioms;
pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// The profile for `--language`, or the configured default language.
pub fn load_profile(
    language: Option<Language>,
    config: &Config,
) -> anyhow::Result<Cow<'static, LanguageProfile>> {
    let language = language.unwrap_or(config.language);
    config
        .profile(language)
        .with_context(|| format!("failed to prepare the {} profile", language.name()))
}
