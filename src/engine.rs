use std::sync::Arc;

use crate::core::{MatchMethod, Subject, ThresholdConfig, ValidationResult};
use crate::error::Result;
#[cfg(not(feature = "fuzzy"))]
use crate::similarity::ExactScorer;
#[cfg(feature = "fuzzy")]
use crate::similarity::RapidfuzzScorer;
use crate::similarity::{FuzzyScorer, SimilarityEngine};
use crate::synonyms::SynonymIndex;

/// Weights of the hybrid second-chance blend
const SEMANTIC_WEIGHT: f64 = 0.75;
const FUZZY_WEIGHT: f64 = 0.25;

/// Single-token programming vocabulary graded by fuzzy ratio alone: for
/// these, character similarity is discriminating enough and the synonym
/// stages would only soften the gate.
const TECHNICAL_TERMS: &[&str] = &[
    "bool", "int", "float", "str", "list", "dict", "tuple", "def", "class", "if", "else", "for",
    "while", "print", "input", "#", "//", "and", "or", "not",
];

/// Main answer validation orchestrator.
///
/// Stateless across calls: every piece of state is read-only after
/// construction, so a single validator can grade answers from any number of
/// threads without locking.
pub struct AnswerValidator {
    synonyms: SynonymIndex,
    thresholds: ThresholdConfig,
    similarity: SimilarityEngine,
}

impl AnswerValidator {
    /// Create a validator with the reference synonym groups and thresholds.
    pub fn new() -> Result<Self> {
        Self::with_config(SynonymIndex::new(), ThresholdConfig::default())
    }

    /// Create a validator with a custom synonym set and threshold config.
    pub fn with_config(synonyms: SynonymIndex, thresholds: ThresholdConfig) -> Result<Self> {
        thresholds.validate()?;

        let similarity = SimilarityEngine::new(default_scorer())?;

        tracing::info!(
            "answer validator ready: {} indexed words, scorer '{}'",
            synonyms.len(),
            similarity.scorer_name()
        );

        Ok(Self {
            synonyms,
            thresholds,
            similarity,
        })
    }

    /// Replace the fuzzy scorer (e.g. to force the degraded exact-only mode).
    pub fn set_scorer(&mut self, scorer: Arc<dyn FuzzyScorer>) -> Result<()> {
        self.similarity = SimilarityEngine::new(scorer)?;
        Ok(())
    }

    /// Whether full fuzzy-matching capability is available. When false, the
    /// validator grades by exact comparison only.
    pub fn is_ready(&self) -> bool {
        !self.similarity.is_degraded()
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    pub fn synonyms(&self) -> &SynonymIndex {
        &self.synonyms
    }

    /// Grade a free-text answer against the expected answer.
    ///
    /// Never fails and never panics: malformed input is scored as incorrect,
    /// not raised. The subject tag only matters for programming content,
    /// which activates the technical-term fast path.
    pub fn validate(
        &self,
        user_answer: &str,
        correct_answer: &str,
        subject: &str,
    ) -> ValidationResult {
        let user = user_answer.trim().to_lowercase();
        let correct = correct_answer.trim().to_lowercase();

        if self.similarity.is_degraded() {
            return self.validate_exact_only(&user, &correct);
        }

        if user.is_empty() && !correct.is_empty() {
            return ValidationResult::incorrect(MatchMethod::None, 0.0, "empty answer");
        }

        if user == correct {
            return ValidationResult::correct(MatchMethod::Exact, 1.0, "exact match");
        }

        let fuzzy = self.similarity.fuzzy_ratio(&user, &correct);
        if fuzzy >= self.thresholds.fuzzy_high {
            return ValidationResult::correct(MatchMethod::Fuzzy, fuzzy, "correct (minor typo)");
        }

        // Hard gate for known technical vocabulary: fuzzy only, no synonym
        // expansion either way.
        if Subject::from_tag(subject) == Subject::Programming && is_technical_answer(&correct) {
            return if fuzzy >= self.thresholds.fuzzy_good {
                ValidationResult::correct(MatchMethod::Technical, fuzzy, "correct (technical term)")
            } else {
                ValidationResult::incorrect(MatchMethod::Technical, fuzzy, "incorrect")
            };
        }

        let semantic = self
            .similarity
            .semantic_similarity(user_answer, correct_answer, &self.synonyms);
        let short = self.thresholds.is_short(&correct);

        if semantic >= self.thresholds.semantic_high(short) {
            return ValidationResult::correct(
                MatchMethod::Semantic,
                semantic,
                "correct (semantic match)",
            );
        }

        if semantic >= self.thresholds.semantic_low(short) {
            let combined = semantic * SEMANTIC_WEIGHT + fuzzy * FUZZY_WEIGHT;
            if combined >= self.thresholds.combined_high(short) {
                return ValidationResult::correct(
                    MatchMethod::Hybrid,
                    combined,
                    "correct (hybrid match)",
                );
            }
        }

        tracing::debug!(
            "rejected: fuzzy={:.2} semantic={:.2} short={}",
            fuzzy,
            semantic,
            short
        );

        ValidationResult::incorrect(
            MatchMethod::None,
            semantic,
            format!("incorrect ({}% similar)", (semantic * 100.0) as u32),
        )
    }

    /// Grade against the expected answer plus its accepted alternatives,
    /// keeping the first accepting verdict (or the primary rejection).
    pub fn validate_with_alternatives<S: AsRef<str>>(
        &self,
        user_answer: &str,
        correct_answer: &str,
        alternatives: &[S],
        subject: &str,
    ) -> ValidationResult {
        let primary = self.validate(user_answer, correct_answer, subject);
        if primary.is_correct {
            return primary;
        }

        for alternative in alternatives {
            let verdict = self.validate(user_answer, alternative.as_ref(), subject);
            if verdict.is_correct {
                return verdict;
            }
        }

        primary
    }

    fn validate_exact_only(&self, user: &str, correct: &str) -> ValidationResult {
        if user == correct {
            ValidationResult::correct(MatchMethod::Exact, 1.0, "exact match")
        } else {
            ValidationResult::incorrect(MatchMethod::None, 0.0, "incorrect")
        }
    }
}

fn default_scorer() -> Arc<dyn FuzzyScorer> {
    #[cfg(feature = "fuzzy")]
    {
        Arc::new(RapidfuzzScorer::new())
    }
    #[cfg(not(feature = "fuzzy"))]
    {
        tracing::warn!("fuzzy matching disabled, falling back to exact comparison");
        Arc::new(ExactScorer::new())
    }
}

/// Whether the expected answer is drawn from the technical vocabulary.
/// Alternative splitters (" o " / " or ") are stripped first so compound
/// answers like "int o float" still gate.
fn is_technical_answer(correct: &str) -> bool {
    correct
        .replace(" o ", " ")
        .replace(" or ", " ")
        .split_whitespace()
        .any(|word| TECHNICAL_TERMS.contains(&word))
}
