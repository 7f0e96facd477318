//! Synonym groups and the word/symbol interchangeability index.
//!
//! The index answers "are these two tokens interchangeable?" in O(1) after a
//! symbol-alias normalization step. It is built once from a fixed list of
//! groups and never mutated afterward.

use std::collections::{HashMap, HashSet};

/// Reference synonym groups for the tutoring content (Spanish/English mix,
/// plus the symbols students type for the same concepts).
pub const DEFAULT_GROUPS: &[&[&str]] = &[
    // Actions
    &["print", "imprimir", "mostrar", "escribir", "display", "sacar"],
    &["crear", "construir", "definir", "hacer", "generar"],
    // Types
    &["string", "str", "cadena", "texto", "mensaje"],
    &["int", "integer", "entero", "numero", "número"],
    &["float", "decimal", "flotante", "real"],
    &["bool", "boolean", "booleano", "logico", "lógico"],
    // Structures
    &["lista", "list", "arreglo", "array", "[]"],
    &["diccionario", "dict", "mapa", "hash", "{}"],
    &["tupla", "tuple", "par", "()"],
    // I/O
    &["input", "entrada", "leer", "pedir", "capturar"],
    &["output", "salida", "pantalla", "consola"],
    // Comments and quoting
    &["comentario", "nota", "#", "//"],
    &["comillas", "\"", "'", "\"\"", "''"],
    // Operators
    &["suma", "sumar", "+", "mas", "más"],
    &["resta", "restar", "-", "menos"],
    &["multiplicacion", "multiplicar", "*", "por"],
    &["division", "dividir", "/", "entre"],
    // Comparators
    &["igual", "=="],
    &["diferente", "!="],
    &["mayor", ">"],
    &["menor", "<"],
    // Common methods
    &["longitud", "length", "len", "tamaño", "largo"],
    &["tipo", "type", "clase", "class"],
];

/// Normalize a punctuation/operator symbol to its canonical word before
/// index lookup.
pub fn symbol_alias(token: &str) -> Option<&'static str> {
    let canonical = match token {
        "[]" => "lista",
        "{}" => "diccionario",
        "()" => "tupla",
        "\"" | "'" => "comillas",
        "#" | "//" => "comentario",
        "+" => "suma",
        "-" => "resta",
        "*" => "multiplicacion",
        "/" => "division",
        "==" => "igual",
        "!=" => "diferente",
        ">" => "mayor",
        "<" => "menor",
        _ => return None,
    };
    Some(canonical)
}

/// Word/symbol interchangeability index.
///
/// Each indexed word maps to the union of every group it appears in, so a
/// word occurring in two groups keeps both memberships. Words absent from
/// every group are synonyms only of themselves.
#[derive(Debug, Clone)]
pub struct SynonymIndex {
    map: HashMap<String, HashSet<String>>,
}

impl SynonymIndex {
    /// Build an index from the reference groups.
    pub fn new() -> Self {
        Self::from_groups(DEFAULT_GROUPS)
    }

    /// Build an index from custom groups (each group a set of mutually
    /// interchangeable words).
    pub fn from_groups(groups: &[&[&str]]) -> Self {
        let mut map: HashMap<String, HashSet<String>> = HashMap::new();

        for group in groups {
            let group_set: HashSet<String> =
                group.iter().map(|word| word.to_lowercase()).collect();

            for word in &group_set {
                map.entry(word.clone())
                    .or_default()
                    .extend(group_set.iter().cloned());
            }
        }

        Self { map }
    }

    /// Number of indexed words
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether two tokens are interchangeable.
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();

        if a == b {
            return true;
        }

        let a_norm = symbol_alias(&a).unwrap_or(&a);
        let b_norm = symbol_alias(&b).unwrap_or(&b);

        if a_norm == b_norm {
            return true;
        }

        match (self.map.get(a_norm), self.map.get(b_norm)) {
            (Some(group_a), Some(group_b)) => !group_a.is_disjoint(group_b),
            _ => false,
        }
    }
}

impl Default for SynonymIndex {
    fn default() -> Self {
        Self::new()
    }
}
