//! # PiLearn Answer Engine
//!
//! Semantic answer validation engine with:
//! - Exact, fuzzy, and synonym-aware semantic matching
//! - Code-fragment normalization for programming answers
//! - Technical-term fast path for single-token vocabulary
//! - Configurable decision thresholds
//! - Degraded exact-only mode when fuzzy matching is unavailable
//!
//! ## Example Usage
//!
//! ```rust
//! use pilearn_answer_engine::AnswerValidator;
//!
//! fn main() -> pilearn_answer_engine::Result<()> {
//!     let validator = AnswerValidator::new()?;
//!
//!     let verdict = validator.validate("arreglo", "lista", "programming");
//!     println!("{}: {:.0}%", verdict.is_correct, verdict.confidence * 100.0);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod similarity;
pub mod synonyms;
pub mod text;

// Re-export primary types
pub use core::{check_answer_text, InputRejection, MatchMethod, Subject, ThresholdConfig, ValidationResult};
pub use engine::AnswerValidator;
pub use error::{Result, ValidatorError};
pub use similarity::{FuzzyScorer, SimilarityEngine};
pub use synonyms::SynonymIndex;
pub use text::TextNormalizer;

// Python bindings
#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
pub use python::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
