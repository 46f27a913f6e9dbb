//! Pulls the target word out of a card-generation prompt.
//!
//! Clients ask for a card with a prompt containing `English word: "<word>"`.
//! The marker form wins; failing that the first double-quoted run of text is
//! used, and failing that the word is [`UNKNOWN_WORD`].

use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_WORD: &str = "unknown";

static MARKED_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"English word:\s*"([^"]+)""#).expect("marker pattern is valid")
});

static QUOTED_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("quoted pattern is valid"));

/// Which rule produced the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Marker,
    Quoted,
    Default,
}

impl MatchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Marker => "marker",
            Self::Quoted => "quoted",
            Self::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub source: MatchSource,
}

pub fn match_word(prompt: &str) -> WordMatch {
    if prompt.is_empty() {
        return WordMatch {
            word: UNKNOWN_WORD.to_string(),
            source: MatchSource::Default,
        };
    }

    for (pattern, source) in [
        (&*MARKED_WORD, MatchSource::Marker),
        (&*QUOTED_WORD, MatchSource::Quoted),
    ] {
        if let Some(captures) = pattern.captures(prompt) {
            return WordMatch {
                word: captures[1].to_string(),
                source,
            };
        }
    }

    WordMatch {
        word: UNKNOWN_WORD.to_string(),
        source: MatchSource::Default,
    }
}

pub fn extract_word(prompt: &str) -> String {
    match_word(prompt).word
}
