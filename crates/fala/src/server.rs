//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the scorer over the MCP protocol so AI assistants and lesson
//! tooling can score attempts via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! that the CLI commands use; each `#[tool]` method delegates to `fala_core`
//! and converts errors to `McpError`.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use fala_core::batch::{self, AttemptRecord};
use fala_core::{Score, Scorer, classify};

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

/// Parameters for the `score_pronunciation` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScorePronunciationParams {
    /// What the speech recognizer heard. Missing or null is treated as "".
    #[serde(default)]
    pub utterance: Option<String>,
    /// The expected word or phrase. Missing or null is treated as "".
    #[serde(default)]
    pub target: Option<String>,
}

/// Parameters for the `classify_score` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyScoreParams {
    /// Score to classify (0-100).
    pub score: i64,
}

/// Parameters for the `score_batch` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreBatchParams {
    /// Attempts to score.
    pub records: Vec<AttemptRecord>,
    /// Optional pass gate (0-100).
    pub min_score: Option<i64>,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

/// MCP server exposing the pronunciation scorer.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct PronunciationServer {
    scorer: Scorer,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for PronunciationServer {
    fn default() -> Self {
        Self::new(Scorer::default())
    }
}

#[tool_router]
impl PronunciationServer {
    /// Create a new MCP server instance using `scorer`.
    pub fn new(scorer: Scorer) -> Self {
        Self {
            scorer,
            tool_router: Self::tool_router(),
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

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score one spoken attempt.
    #[tool(
        description = "Score how closely a recognized utterance matches a target word or phrase. Returns score (0-100), band (excellent/good/fair/poor), message, and edit distance."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_pronunciation(
        &self,
        Parameters(params): Parameters<ScorePronunciationParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_pronunciation", "executing MCP tool");

        let utterance = params.utterance.unwrap_or_default();
        let target = params.target.unwrap_or_default();
        let evaluation = self
            .scorer
            .try_evaluate(&utterance, &target)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(
            tool = "score_pronunciation",
            score = evaluation.score.value(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &evaluation,
        )?)]))
    }

    /// Map a score to its feedback band.
    #[tool(
        description = "Classify a 0-100 score into a feedback band: excellent (>=90), good (75-89), fair (60-74), poor (<60)."
    )]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn classify_score(
        &self,
        Parameters(params): Parameters<ClassifyScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "classify_score", score = params.score, "executing MCP tool");

        let score = Score::try_from(params.score)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let band = classify(score);

        let json = to_json(&serde_json::json!({
            "score": score,
            "band": band,
            "message": band.message(),
            "color": band.color(),
        }))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Score many attempts at once.
    #[tool(
        description = "Score a list of {utterance, target, id?} attempts. Returns per-attempt results and a summary with mean score and band counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", count = params.records.len()))]
    fn score_batch(
        &self,
        Parameters(params): Parameters<ScoreBatchParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_batch", "executing MCP tool");

        let min_score = params
            .min_score
            .map(Score::try_from)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let attempts = batch::number_records(params.records);
        let report = batch::score_attempts(&attempts, &self.scorer, min_score)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(
            tool = "score_batch",
            count = report.summary.count,
            mean_score = report.summary.mean_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &report,
        )?)]))
    }
}

#[tool_handler]
impl ServerHandler for PronunciationServer {
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
                "{} MCP server. Use score_pronunciation to compare a recognized utterance with its target word.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn server() -> PronunciationServer {
        PronunciationServer::new(Scorer::new(Some(16)))
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    #[test]
    fn server_info_has_correct_name() {
        let info = ServerHandler::get_info(&server());
        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });
        let result = server().get_info(params).expect("get_info should succeed");
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn score_pronunciation_tool_works() {
        let params = Parameters(ScorePronunciationParams {
            utterance: Some("helo".to_string()),
            target: Some("hello".to_string()),
        });
        let result = server()
            .score_pronunciation(params)
            .expect("score_pronunciation should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let json = json_of(&result);
        assert_eq!(json["score"], 80);
        assert_eq!(json["band"], "good");
        assert_eq!(json["message"], "Great job!");
    }

    #[test]
    fn score_pronunciation_null_utterance_is_empty() {
        let params: ScorePronunciationParams =
            serde_json::from_str(r#"{"utterance": null, "target": "hello"}"#).unwrap();
        let result = server()
            .score_pronunciation(Parameters(params))
            .expect("null utterance should score");
        let json = json_of(&result);
        assert_eq!(json["score"], 0);
        assert_eq!(json["band"], "poor");
    }

    #[test]
    fn score_pronunciation_rejects_over_cap() {
        let params = Parameters(ScorePronunciationParams {
            utterance: Some("a".repeat(17)),
            target: Some("a".to_string()),
        });
        assert!(server().score_pronunciation(params).is_err());
    }

    #[test]
    fn classify_score_tool_works() {
        let result = server()
            .classify_score(Parameters(ClassifyScoreParams { score: 74 }))
            .expect("classify_score should succeed");
        let json = json_of(&result);
        assert_eq!(json["band"], "fair");
        assert_eq!(json["color"], "yellow");
    }

    #[test]
    fn classify_score_rejects_out_of_range() {
        assert!(
            server()
                .classify_score(Parameters(ClassifyScoreParams { score: 101 }))
                .is_err()
        );
        assert!(
            server()
                .classify_score(Parameters(ClassifyScoreParams { score: -5 }))
                .is_err()
        );
    }

    #[test]
    fn score_batch_tool_works() {
        let params = Parameters(ScoreBatchParams {
            records: vec![
                AttemptRecord::new("hello", "hello"),
                AttemptRecord::new("xyz", "hello"),
            ],
            min_score: Some(60),
        });
        let result = server()
            .score_batch(params)
            .expect("score_batch should succeed");
        let json = json_of(&result);
        assert_eq!(json["summary"]["count"], 2);
        assert_eq!(json["summary"]["below_min"], 1);
        assert_eq!(json["summary"]["pass"], false);
        assert_eq!(json["attempts"][1]["line"], 2);
    }

    #[test]
    fn score_batch_rejects_bad_gate() {
        let params = Parameters(ScoreBatchParams {
            records: vec![],
            min_score: Some(200),
        });
        assert!(server().score_batch(params).is_err());
    }
}
