//! Free-text and code-fragment normalization ahead of similarity scoring.

use regex::Regex;

use crate::error::Result;

/// Known code constructs expanded into their word equivalents before
/// tokenization. Longest first: `print()` contains `int()`, and every call
/// form contains the bare `()`.
const EXPANSIONS: &[(&str, &str)] = &[
    ("print()", " imprimir mostrar "),
    ("int()", " numero entero integer "),
    ("str()", " texto string cadena "),
    ("len()", " longitud tamaño "),
    ("[]", " lista array "),
    ("{}", " diccionario hash "),
    ("()", " tupla par "),
];

/// Text normalizer with pre-compiled patterns.
///
/// `looks_like_code` is a heuristic, not a parser; false positives and
/// negatives are tolerated by the similarity engine.
#[derive(Debug)]
pub struct TextNormalizer {
    code_re: Regex,
    token_re: Regex,
    space_re: Regex,
    string_lit_re: Regex,
    number_lit_re: Regex,
    operator_re: Regex,
}

impl TextNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            code_re: Regex::new(r"\w\s*=\s*\w|\bdef\b|\bclass\b|\breturn\b")?,
            token_re: Regex::new(r"[^\w\s]")?,
            space_re: Regex::new(r"\s+")?,
            string_lit_re: Regex::new(r#"".*?"|'.*?'"#)?,
            number_lit_re: Regex::new(r"\b\d+(?:\.\d+)?\b")?,
            operator_re: Regex::new(r"\s*([=+\-*/%<>:,()\[\]{}])\s*")?,
        })
    }

    /// Heuristic: does this text read like a source-code fragment?
    pub fn looks_like_code(&self, text: &str) -> bool {
        self.code_re.is_match(text)
    }

    /// Lowercase and expand known code constructs into word equivalents.
    pub fn expand(&self, text: &str) -> String {
        let mut result = text.to_lowercase();
        for (pattern, expansion) in EXPANSIONS {
            result = result.replace(pattern, expansion);
        }
        result
    }

    /// Split into lowercase word tokens; punctuation becomes whitespace and
    /// single-character tokens are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = self.token_re.replace_all(&lowered, " ");
        cleaned
            .split_whitespace()
            .map(|token| token.to_string())
            .collect()
    }

    /// Normalize a code fragment so that byte-different but structurally
    /// identical fragments compare equal: whitespace collapsed, string
    /// literals and numbers replaced with placeholders, spacing around
    /// operators removed.
    pub fn normalize_code(&self, code: &str) -> String {
        let trimmed = code.trim();
        let collapsed = self.space_re.replace_all(trimmed, " ");
        let no_strings = self.string_lit_re.replace_all(&collapsed, "STR");
        let no_numbers = self.number_lit_re.replace_all(&no_strings, "NUM");
        let tightened = self.operator_re.replace_all(&no_numbers, "$1");
        tightened.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new().unwrap()
    }

    #[test]
    fn test_looks_like_code() {
        let norm = normalizer();
        assert!(norm.looks_like_code("x = 5"));
        assert!(norm.looks_like_code("x=5"));
        assert!(norm.looks_like_code("def suma(a, b):"));
        assert!(norm.looks_like_code("class Persona:"));
        assert!(norm.looks_like_code("return total"));
        assert!(!norm.looks_like_code("una lista de numeros"));
        assert!(!norm.looks_like_code("el resultado es mayor"));
    }

    #[test]
    fn test_expand_constructs() {
        let norm = normalizer();
        let expanded = norm.expand("usa int() para convertir");
        assert!(expanded.contains("numero entero integer"));
        assert!(!expanded.contains("int()"));

        let expanded = norm.expand("una [] vacia");
        assert!(expanded.contains("lista array"));
    }

    #[test]
    fn test_expand_call_form_wins_over_bare_parens() {
        let norm = normalizer();
        let expanded = norm.expand("print()");
        assert!(expanded.contains("imprimir mostrar"));
        assert!(!expanded.contains("tupla"));
    }

    #[test]
    fn test_tokenize() {
        let norm = normalizer();
        assert_eq!(
            norm.tokenize("Hola, mundo!"),
            vec!["hola".to_string(), "mundo".to_string()]
        );
        // single-character tokens are kept
        assert_eq!(norm.tokenize("x e y"), vec!["x", "e", "y"]);
        assert!(norm.tokenize("¡¿!?").is_empty());
        assert!(norm.tokenize("").is_empty());
    }

    #[test]
    fn test_normalize_code_whitespace_insensitive() {
        let norm = normalizer();
        assert_eq!(norm.normalize_code("x = 5"), norm.normalize_code("x=5"));
        assert_eq!(norm.normalize_code("x = 5"), "x=num");
    }

    #[test]
    fn test_normalize_code_literal_placeholders() {
        let norm = normalizer();
        // different numbers normalize identically
        assert_eq!(norm.normalize_code("a = 1"), norm.normalize_code("a = 2"));
        assert_eq!(
            norm.normalize_code("a = 3.14"),
            norm.normalize_code("a = 2.71")
        );
        // different string literals normalize identically
        assert_eq!(
            norm.normalize_code(r#"msg = "hola""#),
            norm.normalize_code(r#"msg = "adios""#)
        );
        assert_eq!(
            norm.normalize_code("msg = 'hola'"),
            norm.normalize_code(r#"msg = "hola""#)
        );
    }

    #[test]
    fn test_normalize_code_collapses_runs() {
        let norm = normalizer();
        assert_eq!(
            norm.normalize_code("  resultado   =  a  +  b  "),
            "resultado=a+b"
        );
    }
}
