use serde::{Deserialize, Serialize};

/// Subject area of an exercise.
///
/// Subject tags are an open set; only the programming tag changes validator
/// behavior (it activates the technical-term fast path). Both the English and
/// Spanish content-database tags are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Programming,
    General,
}

impl Subject {
    /// Parse a free-form subject tag; unknown tags are non-technical.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "programming" | "programacion" => Subject::Programming,
            _ => Subject::General,
        }
    }
}
