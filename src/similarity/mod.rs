pub mod exact;
#[cfg(feature = "fuzzy")]
pub mod fuzzy;

use std::sync::Arc;

use crate::error::Result;
use crate::synonyms::SynonymIndex;
use crate::text::TextNormalizer;

pub use exact::ExactScorer;
#[cfg(feature = "fuzzy")]
pub use fuzzy::RapidfuzzScorer;

/// Trait for character-level fuzzy similarity implementations
pub trait FuzzyScorer: Send + Sync {
    /// Similarity in [0.0, 1.0]; 1.0 for identical strings, 0.0 for fully
    /// disjoint ones, symmetric in its arguments.
    fn ratio(&self, a: &str, b: &str) -> f64;

    /// Get scorer name for logging
    fn name(&self) -> &str;

    /// Whether this scorer only recognizes exact equality (degraded mode)
    fn is_degraded(&self) -> bool {
        false
    }
}

/// Computes the two similarity scores used by the validator: raw character
/// similarity and synonym-aware token overlap (with a code-comparison path
/// for inputs that look like source fragments).
pub struct SimilarityEngine {
    scorer: Arc<dyn FuzzyScorer>,
    normalizer: TextNormalizer,
}

impl SimilarityEngine {
    pub fn new(scorer: Arc<dyn FuzzyScorer>) -> Result<Self> {
        Ok(Self {
            scorer,
            normalizer: TextNormalizer::new()?,
        })
    }

    /// Name of the underlying fuzzy scorer
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    pub fn is_degraded(&self) -> bool {
        self.scorer.is_degraded()
    }

    /// Character-level similarity of two raw strings.
    pub fn fuzzy_ratio(&self, a: &str, b: &str) -> f64 {
        self.scorer.ratio(a, b)
    }

    /// Similarity of two code fragments after structural normalization.
    /// Equal normalized forms are exactly 1.0 regardless of the scorer.
    pub fn code_similarity(&self, code_a: &str, code_b: &str) -> f64 {
        let norm_a = self.normalizer.normalize_code(code_a);
        let norm_b = self.normalizer.normalize_code(code_b);

        if norm_a == norm_b {
            return 1.0;
        }

        self.scorer.ratio(&norm_a, &norm_b)
    }

    /// Synonym-aware token overlap (Dice coefficient over greedily matched
    /// synonym pairs). Inputs that look like code are compared as code
    /// instead.
    pub fn semantic_similarity(&self, text_a: &str, text_b: &str, synonyms: &SynonymIndex) -> f64 {
        if self.normalizer.looks_like_code(text_a) || self.normalizer.looks_like_code(text_b) {
            return self.code_similarity(text_a, text_b);
        }

        let tokens_a = self.normalizer.tokenize(&self.normalizer.expand(text_a));
        let tokens_b = self.normalizer.tokenize(&self.normalizer.expand(text_b));

        if tokens_a.is_empty() || tokens_b.is_empty() {
            return 0.0;
        }

        // Greedy first-available matching: each token of A claims the
        // earliest unused synonym in B.
        let mut used = vec![false; tokens_b.len()];
        let mut matches = 0usize;

        for token_a in &tokens_a {
            for (j, token_b) in tokens_b.iter().enumerate() {
                if !used[j] && synonyms.are_synonyms(token_a, token_b) {
                    used[j] = true;
                    matches += 1;
                    break;
                }
            }
        }

        let dice = (2.0 * matches as f64) / (tokens_a.len() + tokens_b.len()) as f64;
        dice.min(1.0)
    }
}
