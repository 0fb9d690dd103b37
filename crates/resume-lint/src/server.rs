//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes résumé analysis to AI assistants over stdio. The server is a
//! presentation layer: every `#[tool]` method delegates to
//! `resume_lint_core` and returns the same JSON the CLI prints with `--json`.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use resume_lint_core::power_verbs::{self, VerbCategory};
use resume_lint_core::{Lexicon, Resume, analysis, detector};

/// Location label used when a `detect_weak_phrases` call gives none.
const DEFAULT_LOCATION: &str = "Text";

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

/// Parameters for the `analyze_resume` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeResumeParams {
    /// The résumé record, with camelCase keys (`personalInfo`, `experience`, ...).
    pub resume: Resume,
}

/// Parameters for the `detect_weak_phrases` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DetectWeakPhrasesParams {
    /// The text to scan.
    pub text: String,
    /// Label attached to each detection (default "Text").
    pub location: Option<String>,
}

/// Parameters for the `suggest_power_verbs` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestPowerVerbsParams {
    /// Free-text context, e.g. "managed the support team".
    #[serde(default)]
    pub context: String,
    /// Category to list directly, skipping classification.
    pub category: Option<VerbCategory>,
}

#[derive(Serialize)]
struct VerbSuggestion {
    category: VerbCategory,
    verbs: &'static [&'static str],
}

/// MCP server exposing résumé analysis to AI assistants.
#[derive(Clone)]
pub struct ResumeServer {
    lexicon: Arc<Lexicon>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ResumeServer {
    fn default() -> Self {
        Self::new(Lexicon::builtin().clone(), None)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ResumeServer {
    /// Create a server that checks text against `lexicon`.
    pub fn new(lexicon: Lexicon, max_input_bytes: Option<usize>) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_input_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
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
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "weakPhrases": self.lexicon.len(),
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

    /// Full content analysis of a résumé.
    #[tool(
        description = "Analyze a resume. Returns weak phrases, ATS/readability/impact scores (0-100), and improvement suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_resume(
        &self,
        Parameters(params): Parameters<AnalyzeResumeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_resume",
            experience = params.resume.experience.len(),
            "executing MCP tool"
        );

        let report = analysis::analyze_resume_content_with(&self.lexicon, &params.resume);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_resume",
            ats = report.ats_score,
            weak_phrases = report.weak_phrases.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Weak phrase detection over free text.
    #[tool(
        description = "Find weak resume phrases (e.g. 'responsible for', 'helped') in text. Returns each phrase with a stronger suggestion."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn detect_weak_phrases(
        &self,
        Parameters(params): Parameters<DetectWeakPhrasesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "detect_weak_phrases", "executing MCP tool");
        self.check_input_size(&params.text)?;

        let location = params.location.as_deref().unwrap_or(DEFAULT_LOCATION);
        let hits = detector::detect_with(&self.lexicon, &params.text, location);
        let json = to_json(&hits)?;

        tracing::info!(
            tool = "detect_weak_phrases",
            count = hits.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Power verbs for a context or category.
    #[tool(
        description = "Suggest strong action verbs for a resume bullet, picked from the context (leadership, creation, improvement, analysis, growth, collaboration, achievement)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn suggest_power_verbs(
        &self,
        Parameters(params): Parameters<SuggestPowerVerbsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "suggest_power_verbs", category = ?params.category, "executing MCP tool");
        self.check_input_size(&params.context)?;

        let category = params
            .category
            .unwrap_or_else(|| power_verbs::classify_context(&params.context));
        let suggestion = VerbSuggestion {
            category,
            verbs: power_verbs::verbs_for(category),
        };
        let json = to_json(&suggestion)?;

        tracing::info!(
            tool = "suggest_power_verbs",
            category = category.as_str(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ResumeServer {
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
                "{} MCP server. Use analyze_resume for a full report, or \
                 detect_weak_phrases and suggest_power_verbs while editing bullets.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
