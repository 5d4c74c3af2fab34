//! M3-Agent stub: fabricates memory-flavoured markdown locally.
//! No memory graph, no external process, no network.

use super::content::{GenerationRequest, Mode};
use crate::category::{capitalize, Category, GENERIC_INSTRUCTION};
use crate::templates::category_body;
use chrono::{DateTime, Utc};

pub const AGENT_NAME: &str = "M3-Agent";

/// A single fabricated job, kept only for logging.
#[derive(Debug, Clone)]
pub struct M3Job {
    pub id: String,
    pub timestamp: DateTime<Utc>,
}

impl M3Job {
    pub fn new() -> Self {
        let timestamp = Utc::now();
        Self {
            id: format!("content_{}", timestamp.timestamp_millis()),
            timestamp,
        }
    }
}

impl Default for M3Job {
    fn default() -> Self {
        Self::new()
    }
}

/// Agent briefing. Only logged at debug level; the stub never sends it anywhere.
pub fn system_context(request: &GenerationRequest) -> String {
    let requirement = Category::from_key(&request.category)
        .map(Category::m3_requirement)
        .unwrap_or(GENERIC_INSTRUCTION);
    format!(
        "You are an advanced {} with multimodal memory capabilities.\n\
         Category: {}\nUser Prompt: {}\nContext: {}\nMode: {}\n\nBase Requirements: {}",
        AGENT_NAME,
        request.category,
        request.prompt.as_deref().unwrap_or_default(),
        request.context_text().unwrap_or("General content generation"),
        match request.mode() {
            Mode::Smart => "smart",
            Mode::Manual => "manual",
        },
        requirement
    )
}

/// Fabricated markdown for `m3-generate`.
pub fn generate(request: &GenerationRequest) -> String {
    let job = M3Job::new();
    tracing::debug!(
        target: "contentgen::m3",
        job_id = %job.id,
        started_at = %job.timestamp.to_rfc3339(),
        briefing = %system_context(request),
        "fabricating M3 content"
    );

    let category = request.category.trim();
    let body = category_body(category, request.prompt_text().unwrap_or_default());
    let processing = match request.mode() {
        Mode::Smart => "Intelligent analysis with memory retrieval",
        Mode::Manual => "Direct generation with context awareness",
    };

    format!(
        "# {agent} Enhanced Content

## Memory-Enhanced Generation
*Generated using {agent}'s multimodal memory system*

## Context Analysis
Based on comprehensive memory analysis and multimodal reasoning:

## {heading} Content

{body}

## {agent} Insights
- **Memory Integration**: Content generated with reference to stored knowledge graphs
- **Multimodal Reasoning**: Enhanced understanding through visual and contextual processing
- **Adaptive Generation**: Personalized content based on interaction patterns
- **Long-term Memory**: Content that builds upon previous generations and user preferences

## Technical Specifications
- **Agent Framework**: {agent} with long-term memory
- **Processing Mode**: {processing}
- **Memory Graphs**: Entity-centric multimodal knowledge representation
- **Reasoning Depth**: Multi-turn iterative reasoning with memory retrieval

---
*Powered by {agent}: Seeing, Listening, Remembering, and Reasoning*",
        agent = AGENT_NAME,
        heading = capitalize(category),
        body = body,
        processing = processing,
    )
}
