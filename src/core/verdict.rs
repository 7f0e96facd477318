use serde::{Deserialize, Serialize};

/// Which decision stage produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Exact match after lowercasing/trimming
    Exact,
    /// Fuzzy match above the high threshold (minor typo)
    Fuzzy,
    /// Technical-term fast path (fuzzy only, semantic skipped)
    Technical,
    /// Synonym-aware token overlap
    Semantic,
    /// Weighted semantic + fuzzy blend
    Hybrid,
    /// No stage matched
    None,
}

/// Verdict returned for a single answer validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    /// Whether the answer is accepted
    pub is_correct: bool,

    /// Confidence score (0.0 - 1.0)
    pub confidence: f64,

    /// Decision stage that settled the verdict
    pub method: MatchMethod,

    /// Human-readable explanation for the grading UI
    pub explanation: String,
}

impl ValidationResult {
    /// Create an accepting verdict
    pub fn correct(method: MatchMethod, confidence: f64, explanation: impl Into<String>) -> Self {
        Self {
            is_correct: true,
            confidence: confidence.clamp(0.0, 1.0),
            method,
            explanation: explanation.into(),
        }
    }

    /// Create a rejecting verdict
    pub fn incorrect(method: MatchMethod, confidence: f64, explanation: impl Into<String>) -> Self {
        Self {
            is_correct: false,
            confidence: confidence.clamp(0.0, 1.0),
            method,
            explanation: explanation.into(),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!(
            "{} - {:.0}% {:?} ({})",
            if self.is_correct { "correct" } else { "incorrect" },
            self.confidence * 100.0,
            self.method,
            self.explanation
        )
    }
}
