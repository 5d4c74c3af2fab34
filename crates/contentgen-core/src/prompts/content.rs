//! Prompt assembly for `generate-content`.
//!
//! A request becomes a system/user pair. The category picks an instruction fragment from
//! the shared table; smart mode swaps the user's prompt for a market-trends instruction.

use crate::category::instruction_for;
use crate::error::{GenerationError, Result};
use crate::wire::null_as_default;
use serde::{Deserialize, Serialize};

/// How a request is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Manual,
    Smart,
}

impl Mode {
    /// Only `"smart"` selects smart mode; anything else (or nothing) is manual.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("smart") => Mode::Smart,
            _ => Mode::Manual,
        }
    }
}

/// Body shared by `generate-content` and `m3-generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

impl GenerationRequest {
    pub fn mode(&self) -> Mode {
        Mode::from_wire(self.mode.as_deref())
    }

    /// Trimmed prompt, `None` when absent or blank.
    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    pub fn context_text(&self) -> Option<&str> {
        self.context.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// The `prompt` echoed back to the caller.
    pub fn echo_prompt(&self, smart_label: &str) -> String {
        match self.mode() {
            Mode::Smart => format!("{} {} content", smart_label, self.category),
            Mode::Manual => self.prompt.clone().unwrap_or_default(),
        }
    }
}

/// Assembled prompts for a chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Build the system/user pair. Manual mode without a prompt is rejected.
pub fn assemble(request: &GenerationRequest) -> Result<PromptPair> {
    let category = request.category.trim();
    let fragment = instruction_for(category);

    match request.mode() {
        Mode::Smart => {
            let system = format!(
                "You are an expert at creating valuable digital content in the {} category. Generate complete, ready-to-use content that provides immediate value and solves real problems. Focus on quality, practicality, and professional presentation.",
                category
            );
            let context_line = match request.context_text() {
                Some(ctx) => format!("Additional context: {}", ctx),
                None => "Use current market trends and best practices.".to_string(),
            };
            let user = format!(
                "Generate a high-quality {} product that would be worth purchasing.\n\n{}\n\n{}\n\nMake it comprehensive, professional, and immediately actionable. Include clear structure, detailed content, and practical value.",
                category, fragment, context_line
            );
            Ok(PromptPair { system, user })
        }
        Mode::Manual => {
            let prompt = request
                .prompt_text()
                .ok_or_else(|| GenerationError::InvalidRequest("Prompt is required".to_string()))?;
            let system = format!(
                "You are an expert content creator specializing in {}. Create comprehensive, professional content that provides immediate value and meets the specific requirements provided.",
                category
            );
            let user = format!(
                "Create {} content based on these requirements:\n\n{}\n\n{}\n\nMake it complete, professional, and immediately actionable with clear structure and practical implementation details.",
                category, prompt, fragment
            );
            Ok(PromptPair { system, user })
        }
    }
}
