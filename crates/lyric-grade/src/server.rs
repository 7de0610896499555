//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes lyric scoring, line analysis, idiom lookup and conjugation tables
//! to AI assistants over stdio. Every tool delegates to `lyric-grade-core`;
//! the server only parses parameters and serializes reports.

use std::borrow::Cow;
use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use lyric_grade_core::scoring::compute_difficulty_with;
use lyric_grade_core::{
    AnalysisResult, Config, Language, LanguageProfile, ScoringConfig, analyze_line,
    analyze_lyrics, conjugations, get_idioms_for_lyrics,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_lyrics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreLyricsParams {
    /// Full song text, one lyric line per line.
    pub lyrics: String,
    /// Language code ("es" or "fr"). Defaults to the server's configured language.
    pub language: Option<String>,
}

/// Parameters for the `analyze_line` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeLineParams {
    /// A single lyric line.
    pub line: String,
    /// Language code ("es" or "fr").
    pub language: Option<String>,
}

/// Parameters for the `find_idioms` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FindIdiomsParams {
    /// Lyric lines, in song order.
    pub lines: Vec<String>,
    /// Language code ("es" or "fr").
    pub language: Option<String>,
}

/// Parameters for the `conjugate` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ConjugateParams {
    /// Verb infinitive, e.g. "tener" or "aller".
    pub lemma: String,
    /// Language code ("es" or "fr").
    pub language: Option<String>,
}

/// MCP server exposing lyric difficulty analysis.
#[derive(Clone)]
pub struct LyricServer {
    profiles: Arc<Vec<Cow<'static, LanguageProfile>>>,
    default_language: Language,
    scoring: ScoringConfig,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl LyricServer {
    /// Build a server, loading the configured frequency list once.
    pub fn new(config: &Config, max_input_bytes: Option<usize>) -> AnalysisResult<Self> {
        let profiles = Language::ALL
            .into_iter()
            .map(|language| config.profile(language))
            .collect::<AnalysisResult<Vec<_>>>()?;
        Ok(Self {
            profiles: Arc::new(profiles),
            default_language: config.language,
            scoring: config.scoring,
            max_input_bytes,
            tool_router: Self::tool_router(),
        })
    }

    fn profile(&self, code: Option<&str>) -> Result<&LanguageProfile, McpError> {
        let language = match code {
            Some(code) => code
                .parse::<Language>()
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?,
            None => self.default_language,
        };
        self.profiles
            .iter()
            .find(|p| p.language() == language)
            .map(|p| p.as_ref())
            .ok_or_else(|| McpError::internal_error(format!("no profile for {language}"), None))
    }

    fn check_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "languages": Language::ALL.map(Language::code),
            "default_language": self.default_language,
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score a whole song.
    #[tool(
        description = "Score the difficulty of song lyrics for a language learner. Returns a score from 1 to 10, an integer level, and the underlying metrics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_lyrics(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<ScoreLyricsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_lyrics", language = ?params.language, "executing MCP tool");
        self.check_size(params.lyrics.len())?;

        let profile = self.profile(params.language.as_deref())?;
        let lines = analyze_lyrics(&params.lyrics, profile);
        let report = compute_difficulty_with(&lines, &self.scoring)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(
            tool = "score_lyrics",
            level = report.level,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }

    /// Analyze one line.
    #[tool(
        description = "Tokenize and analyze one lyric line. Returns each token with lemma, part of speech, tense/mood, person, and idiom spans."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_line(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<AnalyzeLineParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_line", language = ?params.language, "executing MCP tool");
        self.check_size(params.line.len())?;

        let profile = self.profile(params.language.as_deref())?;
        let analysis = analyze_line(&params.line, 0, profile);

        tracing::info!(
            tool = "analyze_line",
            tokens = analysis.tokens.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&analysis)?)]))
    }

    /// Find idioms across lines.
    #[tool(
        description = "Find known idioms in lyric lines. Returns line index, token span, idiom id, phrase, English gloss, and the matched text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn find_idioms(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<FindIdiomsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "find_idioms", lines = params.lines.len(), "executing MCP tool");
        self.check_size(params.lines.iter().map(String::len).sum())?;

        let profile = self.profile(params.language.as_deref())?;
        let matches = get_idioms_for_lyrics(&params.lines, profile);

        tracing::info!(
            tool = "find_idioms",
            count = matches.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&matches)?)]))
    }

    /// Conjugation table for a verb.
    #[tool(
        description = "Conjugate a verb infinitive. Returns every tense and mood for all six persons, plus the past participle."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", lemma = %params.lemma))]
    fn conjugate(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<ConjugateParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "conjugate", lemma = %params.lemma, "executing MCP tool");

        let profile = self.profile(params.language.as_deref())?;
        let paradigm = conjugations(&params.lemma.to_lowercase(), profile).ok_or_else(|| {
            McpError::invalid_params(
                format!(
                    "{} is not a {} verb infinitive",
                    params.lemma,
                    profile.language().name()
                ),
                None,
            )
        })?;

        tracing::info!(
            tool = "conjugate",
            irregular = paradigm.irregular,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&paradigm)?)]))
    }
}

#[tool_handler]
impl ServerHandler for LyricServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Score Spanish and French song lyrics for learners, \
                 analyze lines, find idioms, and conjugate verbs.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
