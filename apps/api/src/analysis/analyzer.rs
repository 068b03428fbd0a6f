//! Job analyzer: turns a pasted job description into a short summary and the
//! three skills worth highlighting.
//!
//! The model is untrusted twice over: it may be unreachable, or it may answer
//! with something that is not the expected shape. Both cases produce a fixed
//! `AnalysisResult` rather than an error, so only blank input ever fails.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::analysis::prompts::{
    ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM, MALFORMED_FALLBACK_SKILLS,
    MALFORMED_FALLBACK_SUMMARY, UNAVAILABLE_FALLBACK_SKILLS, UNAVAILABLE_FALLBACK_SUMMARY,
};
use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};

pub const SKILL_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub skills: Vec<String>,
    /// Any further keys the model sent, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    fn fixed(summary: &str, skills: [&str; SKILL_COUNT]) -> Self {
        Self {
            summary: summary.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            extra: Map::new(),
        }
    }

    /// Returned when the model answered but the answer was unusable.
    pub fn malformed_fallback() -> Self {
        Self::fixed(MALFORMED_FALLBACK_SUMMARY, MALFORMED_FALLBACK_SKILLS)
    }

    /// Returned when the model could not be reached at all.
    pub fn unavailable_fallback() -> Self {
        Self::fixed(UNAVAILABLE_FALLBACK_SUMMARY, UNAVAILABLE_FALLBACK_SKILLS)
    }
}

#[derive(Clone)]
pub struct JobAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl JobAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn analyze(&self, job_description: &str) -> Result<AnalysisResult, AppError> {
        if job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "Job description is required".to_string(),
            ));
        }

        let prompt = ANALYZE_PROMPT_TEMPLATE.replace("{job_description}", job_description);

        let result = match self.generator.generate(ANALYZE_SYSTEM, &prompt).await {
            Ok(text) => match parse_analysis(&text) {
                Ok(analysis) => {
                    info!("Job description analyzed");
                    analysis
                }
                Err(reason) => {
                    warn!("Model output rejected ({reason}); using fallback analysis");
                    AnalysisResult::malformed_fallback()
                }
            },
            Err(LlmError::EmptyContent) => {
                warn!("Model returned no content; using fallback analysis");
                AnalysisResult::malformed_fallback()
            }
            Err(e) => {
                warn!("Model unavailable: {e}; using fallback analysis");
                AnalysisResult::unavailable_fallback()
            }
        };

        Ok(result)
    }
}

/// Parses model text into an `AnalysisResult`, requiring a non-empty summary
/// and exactly three skills.
fn parse_analysis(text: &str) -> Result<AnalysisResult, String> {
    let analysis: AnalysisResult =
        serde_json::from_str(strip_json_fences(text)).map_err(|e| format!("invalid JSON: {e}"))?;

    if analysis.summary.trim().is_empty() {
        return Err("empty summary".to_string());
    }
    if analysis.skills.len() != SKILL_COUNT {
        return Err(format!(
            "expected {SKILL_COUNT} skills, got {}",
            analysis.skills.len()
        ));
    }

    Ok(analysis)
}
