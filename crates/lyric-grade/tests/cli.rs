//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}


// =============================================================================
// Score Command
// =============================================================================

/// Write a lyric file into `dir` and return its path as a string.
fn song(dir: &TempDir, name: &str, lyrics: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, lyrics).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn score_prints_level() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Te quiero\nTe quiero mucho\n");

    cmd()
        .args(["score", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("level"))
        .stdout(predicate::str::contains("score"));
}

#[test]
fn score_json_reports_level_and_metrics() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Quiero que vengas\nsin embargo no estás\n");

    let output = cmd().args(["score", &file, "--json"]).assert().success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    let level = json["level"].as_u64().unwrap();
    assert!((1..=10).contains(&level));
    let score = json["difficulty_score"].as_f64().unwrap();
    assert!((1.0..=10.0).contains(&score));
    assert_eq!(json["language"], "es");
    assert_eq!(json["metrics"]["line_count"], 2);
    assert_eq!(json["metrics"]["idiom_count"], 1);
    assert_eq!(json["pass"], true);
}

#[test]
fn score_several_files_prints_array() {
    let tmp = TempDir::new().unwrap();
    let a = song(&tmp, "a.txt", "La la la la la\n");
    let b = song(&tmp, "b.txt", "Aunque llueva, caminaremos juntos.\n");

    let output = cmd().args(["--json", "score", &a, &b]).assert().success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0]["file"].as_str().unwrap().ends_with("a.txt"));
}

#[test]
fn score_max_level_gate_fails_hard_song() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Aunque llueva, caminaremos juntos; nadie sabe.\n");

    cmd()
        .args(["score", &file, "--max-level", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL:"))
        .stderr(predicate::str::contains("above level 1"));
}

#[test]
fn score_max_level_gate_passes() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Te quiero\n");

    cmd()
        .args(["score", &file, "--max-level", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn score_max_level_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".lyric-grade.toml"), "max_level = 1\n").unwrap();
    song(&tmp, "song.txt", "Aunque llueva, caminaremos juntos; nadie sabe.\n");

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "song.txt"])
        .assert()
        .failure();
}

#[test]
fn score_max_level_out_of_range_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Te quiero\n");

    cmd()
        .args(["score", &file, "--max-level", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn score_empty_file_fails() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "empty.txt", "\n   \n");

    cmd()
        .args(["score", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no lyric lines"));
}

#[test]
fn score_missing_file_fails() {
    cmd()
        .args(["score", "/nonexistent/song.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn score_respects_input_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".lyric-grade.toml"), "max_input_bytes = 4\n").unwrap();
    song(&tmp, "song.txt", "Te quiero mucho\n");

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "song.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn score_unknown_language_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Hallo Welt\n");

    cmd()
        .args(["score", &file, "--language", "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_frequency_list_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".lyric-grade.toml"),
        "frequency_list = \"missing.tsv\"\n",
    )
    .unwrap();
    song(&tmp, "song.txt", "Te quiero\n");

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "song.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile"));
}

#[test]
fn custom_frequency_list_changes_rarity() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("freq.tsv"), "# word\tzipf\nte\t7.0\nquerer\t7.0\n").unwrap();
    fs::write(
        tmp.path().join(".lyric-grade.toml"),
        "frequency_list = \"freq.tsv\"\n",
    )
    .unwrap();
    song(&tmp, "song.txt", "Te quiero\n");

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "--json", "score", "song.txt"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["metrics"]["avg_word_freq_zipf"], 7.0);
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_json_has_tokens_per_line() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "El camino es largo\n\nCamino por la calle\n");

    let output = cmd().args(["analyze", &file, "--json"]).assert().success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let lines = json.as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["index"], 1);

    let first = lines[0]["tokens"].as_array().unwrap();
    let camino = first.iter().find(|t| t["surface"] == "camino").unwrap();
    assert_eq!(camino["part_of_speech"], "NOUN");

    let second = lines[1]["tokens"].as_array().unwrap();
    let camino = second.iter().find(|t| t["surface"] == "Camino").unwrap();
    assert_eq!(camino["part_of_speech"], "VERB");
    assert_eq!(camino["lemma"], "caminar");
}

#[test]
fn analyze_text_shows_idioms() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Otra vez te vi\n");

    cmd()
        .args(["--color", "never", "analyze", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Idiom:"))
        .stdout(predicate::str::contains("again"));
}

// =============================================================================
// Idioms Command
// =============================================================================

#[test]
fn idioms_json_lists_matches() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Te quiero\nsin embargo te vas\n");

    let output = cmd().args(["idioms", &file, "--json"]).assert().success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let matches = json.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["idiom_id"], "sin-embargo");
    assert_eq!(matches[0]["line_index"], 1);
    assert_eq!(matches[0]["text"], "sin embargo");
}

#[test]
fn idioms_report_file_line_numbers() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Te quiero\n\n\nsin embargo te vas\n");

    let output = cmd().args(["idioms", &file, "--json"]).assert().success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json[0]["line_index"], 3);

    cmd()
        .args(["--color", "never", "idioms", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 4:"));
}

#[test]
fn idioms_none_found() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "song.txt", "Te quiero\n");

    cmd()
        .args(["idioms", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("no idioms found"));
}

#[test]
fn idioms_in_french() {
    let tmp = TempDir::new().unwrap();
    let file = song(&tmp, "chanson.txt", "Ce fut un coup de foudre\n");

    let output = cmd()
        .args(["idioms", &file, "--language", "fr", "--json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json[0]["idiom_id"], "coup-de-foudre");
}

// =============================================================================
// Conjugate Command
// =============================================================================

#[test]
fn conjugate_prints_table() {
    cmd()
        .args(["--color", "never", "conjugate", "tener"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tengo"))
        .stdout(predicate::str::contains("tenido"));
}

#[test]
fn conjugate_french_json() {
    let output = cmd()
        .args(["conjugate", "aller", "--language", "fr", "--json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["lemma"], "aller");
    assert_eq!(json["tenses"]["FUTURE"][5], "iront");
    assert_eq!(json["auxiliary"], "être");
    assert_eq!(json["tenses"]["PRESENT_PERFECT"][0], "suis allé");
}

#[test]
fn conjugate_non_verb_fails() {
    cmd()
        .args(["conjugate", "para"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a Spanish verb"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
