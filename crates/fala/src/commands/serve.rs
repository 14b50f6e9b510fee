//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use fala_core::Scorer;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use crate::server::PronunciationServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve MCP tools until the client disconnects.
#[instrument(name = "cmd_serve", skip_all, fields(max_chars = ?scorer.max_chars()))]
pub async fn cmd_serve(_args: ServeArgs, scorer: Scorer) -> anyhow::Result<()> {
    info!("starting MCP server on stdio");

    let service = PronunciationServer::new(scorer)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;

    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
