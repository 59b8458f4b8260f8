// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Letter cases used by the subject-case rule.
//!
//! Text is in a case when converting it to that case leaves it unchanged.
//! Quoted spans are dropped before the comparison, so a quoted proper name
//! never decides the case of a subject.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Backtick, double and single quoted spans.
    static ref QUOTED: Regex = Regex::new(r#"`.*?`|".*?"|'.*?'"#).unwrap();
}

/// Letter case of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Case {
    LowerCase,
    UpperCase,
    SentenceCase,
    StartCase,
    PascalCase,
}

impl Case {
    /// Get the string representation of the case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::LowerCase => "lower-case",
            Case::UpperCase => "upper-case",
            Case::SentenceCase => "sentence-case",
            Case::StartCase => "start-case",
            Case::PascalCase => "pascal-case",
        }
    }

    /// Convert `text` to this case.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Case::LowerCase => text.to_lowercase(),
            Case::UpperCase => text.to_uppercase(),
            Case::SentenceCase => {
                let first = text.split(' ').next().unwrap_or("");
                format!("{}{}", upper_first(first), text[first.len()..].to_lowercase())
            }
            Case::StartCase => words(text)
                .iter()
                .map(|w| upper_first(w))
                .collect::<Vec<_>>()
                .join(" "),
            Case::PascalCase => words(text)
                .iter()
                .map(|w| upper_first(&w.to_lowercase()))
                .collect(),
        }
    }

    /// Check whether `text` is written in this case.
    ///
    /// Text that converts to nothing, or to something starting with a digit,
    /// is in every case.
    pub fn matches(&self, text: &str) -> bool {
        let unquoted = QUOTED.replace_all(text, "");
        let input = unquoted.trim();
        let converted = self.apply(input);

        if converted.is_empty() || converted.starts_with(|c: char| c.is_ascii_digit()) {
            return true;
        }
        converted == input
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split text into words.
///
/// Words are runs of letters and digits, split again where a lower-case
/// letter meets an upper-case one, before the last capital of an acronym
/// followed by a lower-case letter (`OAuth` is `O Auth`), and between letters
/// and digits. Apostrophes are removed first.
fn words(text: &str) -> Vec<String> {
    let cleaned: String = text.chars().filter(|c| !matches!(c, '\'' | '’')).collect();
    let mut words = Vec::new();

    for token in cleaned
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        let chars: Vec<char> = token.chars().collect();
        let mut start = 0;

        for i in 1..chars.len() {
            let (prev, cur) = (chars[i - 1], chars[i]);
            let next_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());
            let boundary = (prev.is_lowercase() && cur.is_uppercase())
                || (prev.is_uppercase() && cur.is_uppercase() && next_lower)
                || prev.is_alphabetic() != cur.is_alphabetic();

            if boundary {
                words.push(chars[start..i].iter().collect());
                start = i;
            }
        }
        words.push(chars[start..].iter().collect());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        assert_eq!(words("Add iOS support"), vec!["Add", "i", "OS", "support"]);
        assert_eq!(words("fix OAuth-flow"), vec!["fix", "O", "Auth", "flow"]);
        assert_eq!(words("don't panic"), vec!["dont", "panic"]);
        assert_eq!(words("utf8 decoder"), vec!["utf", "8", "decoder"]);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Case::SentenceCase.apply("add iOS support"), "Add ios support");
        assert_eq!(Case::StartCase.apply("add iOS support"), "Add I OS Support");
        assert_eq!(Case::PascalCase.apply("add login page"), "AddLoginPage");
        assert_eq!(Case::UpperCase.apply("add login"), "ADD LOGIN");
    }

    #[test]
    fn test_sentence_case() {
        assert!(Case::SentenceCase.matches("Add login"));
        assert!(!Case::SentenceCase.matches("add login"));
        assert!(!Case::SentenceCase.matches("Add iOS support"));
        assert!(!Case::SentenceCase.matches("Fix OAuth flow"));
    }

    #[test]
    fn test_start_and_pascal_case() {
        assert!(Case::StartCase.matches("Add Login Page"));
        assert!(!Case::StartCase.matches("Add login page"));
        assert!(!Case::StartCase.matches("Fix OAuth Flow"));
        assert!(Case::PascalCase.matches("AddLogin"));
        assert!(!Case::PascalCase.matches("Add login"));
    }

    #[test]
    fn test_upper_and_lower_case() {
        assert!(Case::UpperCase.matches("ADD LOGIN"));
        assert!(!Case::UpperCase.matches("Add login"));
        assert!(Case::LowerCase.matches("add login"));
    }

    #[test]
    fn test_quoted_spans_are_ignored() {
        assert!(Case::LowerCase.matches("update `README` wording"));
        assert!(!Case::SentenceCase.matches("\"Eslint\" configuration"));
    }

    #[test]
    fn test_empty_or_numeric_text_is_in_every_case() {
        assert!(Case::UpperCase.matches("123"));
        assert!(Case::SentenceCase.matches("`Only Quoted`"));
    }
}
