//! Whitespace tokenization and casing helpers shared by the analyzers.

use serde::{Deserialize, Serialize};

/// How trailing punctuation on a token is treated before lexicon lookup.
///
/// With [`PunctuationPolicy::Literal`] the token `"apple!"` never equals the
/// lexicon entry `"apple"`. With [`PunctuationPolicy::StripTrailing`] it
/// does, and the emitted mention text is the stripped token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationPolicy {
    #[default]
    Literal,
    StripTrailing,
}

impl PunctuationPolicy {
    fn apply<'a>(&self, token: &'a str) -> &'a str {
        match self {
            PunctuationPolicy::Literal => token,
            PunctuationPolicy::StripTrailing => {
                token.trim_end_matches(|c: char| c.is_ascii_punctuation())
            }
        }
    }
}

/// Lowercase `text` and split it on whitespace.
///
/// Tokens keep their position: a token made only of punctuation becomes
/// an empty string under [`PunctuationPolicy::StripTrailing`] instead of
/// being dropped, so indexes line up with `text.split_whitespace()`.
pub fn tokenize(text: &str, policy: PunctuationPolicy) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|token| policy.apply(token).to_string())
        .collect()
}

/// Title-case a string: a cased character is uppercased when it starts the
/// string or follows an uncased character, and lowercased otherwise.
///
/// `"iphone 14"` becomes `"Iphone 14"`, `"wh-1000xm4"` becomes `"Wh-1000Xm4"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && previous_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_keeps_punctuation() {
        assert_eq!(
            tokenize("Love my Apple!  Great.", PunctuationPolicy::Literal),
            vec!["love", "my", "apple!", "great."]
        );
    }

    #[test]
    fn tokenize_strip_keeps_positions() {
        assert_eq!(
            tokenize("Terrible ... Very disappointed.", PunctuationPolicy::StripTrailing),
            vec!["terrible", "", "very", "disappointed"]
        );
    }

    #[test]
    fn tokenize_blank_text() {
        assert!(tokenize("", PunctuationPolicy::Literal).is_empty());
        assert!(tokenize(" \t\n ", PunctuationPolicy::StripTrailing).is_empty());
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("apple"), "Apple");
        assert_eq!(title_case("apple!"), "Apple!");
        assert_eq!(title_case("iphone 14"), "Iphone 14");
        assert_eq!(title_case("galaxy s23"), "Galaxy S23");
        assert_eq!(title_case("wh-1000xm4 headphones."), "Wh-1000Xm4 Headphones.");
        assert_eq!(title_case(""), "");
    }
}
