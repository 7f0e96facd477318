use thiserror::Error;

/// Maximum accepted answer length in characters
pub const MAX_ANSWER_LEN: usize = 100;

const FORBIDDEN_CHARS: &[char] = &['<', '>', ';', '&', '|', '`', '$'];

/// Why a raw answer was rejected before grading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("answer is empty")]
    Empty,

    #[error("answer contains forbidden character '{0}'")]
    ForbiddenChar(char),

    #[error("answer is too long ({0} characters)")]
    TooLong(usize),
}

/// Pre-check raw answer text before it reaches the validator.
///
/// This is a caller-side courtesy check for the input form: the validator
/// itself accepts any string and simply scores degenerate input as incorrect.
pub fn check_answer_text(text: &str) -> Result<(), InputRejection> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(InputRejection::Empty);
    }

    if let Some(c) = trimmed.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(InputRejection::ForbiddenChar(c));
    }

    let len = trimmed.chars().count();
    if len > MAX_ANSWER_LEN {
        return Err(InputRejection::TooLong(len));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_normal_answers() {
        assert!(check_answer_text("una lista de numeros").is_ok());
        assert!(check_answer_text("x = 5").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(check_answer_text(""), Err(InputRejection::Empty));
        assert_eq!(check_answer_text("   "), Err(InputRejection::Empty));
    }

    #[test]
    fn test_rejects_forbidden_chars() {
        assert_eq!(
            check_answer_text("hola; mundo"),
            Err(InputRejection::ForbiddenChar(';'))
        );
        assert_eq!(
            check_answer_text("a | b"),
            Err(InputRejection::ForbiddenChar('|'))
        );
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "a".repeat(MAX_ANSWER_LEN + 1);
        assert_eq!(
            check_answer_text(&long),
            Err(InputRejection::TooLong(MAX_ANSWER_LEN + 1))
        );
    }
}
