// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Narrative Collaborator Seam

//! Prompt assembly for an external text-generation service.
//!
//! The engine never calls a service itself. Frontends build a
//! [`NarrativeRequest`] from a [`ReportSummary`] and hand it to whatever
//! implements [`NarrativeGenerator`]. One request, one response, no retry.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::digest::ReportSummary;

pub const SYSTEM_PROMPT: &str = "You are an AI marketing expert.";
const INSTRUCTION: &str = "Give a short analysis and suggestions for improvement.";

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative service unavailable: {0}")]
    Unavailable(String),

    #[error("narrative service returned an empty response")]
    EmptyResponse,

    #[error("narrative service error: {0}")]
    Service(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// A one-shot chat request: fixed system role plus the user prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    pub messages: Vec<ChatMessage>,
}

impl NarrativeRequest {
    pub fn from_summary(summary: &ReportSummary) -> Self {
        Self {
            messages: vec![
                ChatMessage { role: ChatRole::System, content: SYSTEM_PROMPT.to_string() },
                ChatMessage {
                    role: ChatRole::User,
                    content: build_prompt(&summary.context, &summary.data()),
                },
            ],
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
    }
}

pub fn build_prompt(context: &str, data: &str) -> String {
    format!("{context}\n\nData:\n{data}\n\n{INSTRUCTION}")
}

/// Anything that can turn a request into prose.
pub trait NarrativeGenerator {
    fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;
}

/// Send a summary to a generator. Blank replies count as failures.
pub fn narrate<G: NarrativeGenerator + ?Sized>(
    generator: &G,
    summary: &ReportSummary,
) -> Result<String, NarrativeError> {
    let request = NarrativeRequest::from_summary(summary);
    info!(context = %summary.context, lines = summary.lines.len(), "requesting narrative");
    match generator.generate(&request) {
        Ok(text) if text.trim().is_empty() => Err(NarrativeError::EmptyResponse),
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(error = %e, "narrative generation failed");
            Err(e)
        }
    }
}
