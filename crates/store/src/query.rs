use std::collections::BTreeSet;

use crate::id::DocId;

/// Escape free text for safe embedding in a pattern-matching query. Every
/// character in `- [ ] { } ( ) * + ? . , \ ^ $ | #` and any whitespace is
/// preceded by a backslash. Total: accepts any string, never fails.
#[must_use]
pub fn escape_pattern(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let special = matches!(
            ch,
            '-' | '['
                | ']'
                | '{'
                | '}'
                | '('
                | ')'
                | '*'
                | '+'
                | '?'
                | '.'
                | ','
                | '\\'
                | '^'
                | '$'
                | '|'
                | '#'
        );
        if special || ch.is_whitespace() {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Set of relation names to eagerly load alongside a fetched document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Populate(BTreeSet<String>);

impl Populate {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with<I, S>(relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(relations.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn contains(&self, relation: &str) -> bool {
        self.0.contains(relation)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Filter accepted by the store's `count` operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Match the single document carrying this id.
    ById(DocId),
    /// Match documents whose name fields match this pattern.
    NamePattern(String),
}

impl Filter {
    /// Case-insensitive name filter built from free text. The text is
    /// escaped, so it always matches literally.
    #[must_use]
    pub fn name_contains(text: &str) -> Self {
        Self::NamePattern(format!("(?i){}", escape_pattern(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_special_character() {
        assert_eq!(
            escape_pattern(r"-[]{}()*+?.,\^$|#"),
            r"\-\[\]\{\}\(\)\*\+\?\.\,\\\^\$\|\#"
        );
    }

    #[test]
    fn escapes_whitespace() {
        assert_eq!(escape_pattern("a b"), "a\\ b");
        assert_eq!(escape_pattern("a\tb\nc"), "a\\\tb\\\nc");
        assert_eq!(escape_pattern("Solanum lycopersicum"), "Solanum\\ lycopersicum");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_pattern(""), "");
        assert_eq!(escape_pattern("tomato"), "tomato");
    }

    #[test]
    fn name_contains_is_literal() {
        let Filter::NamePattern(pattern) = Filter::name_contains("bell (pepper)") else {
            panic!("expected a name pattern");
        };
        let re = regex::Regex::new(&pattern).expect("escaped pattern compiles");
        assert!(re.is_match("Bell (Pepper)"));
        assert!(!re.is_match("bell pepper"));
    }
}
