//! Free-text keyword scoring.

use evt_table::Event;

use crate::normalize::normalize;

/// Keywords shorter than this many characters are ignored.
const MIN_KEYWORD_CHARS: usize = 2;

/// Bonus added when every keyword matches.
const FULL_MATCH_BONUS: usize = 2;

/// A parsed free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    /// Distinct normalized keywords, in query order.
    keywords: Vec<String>,
}

impl KeywordQuery {
    /// Parses a raw query string.
    ///
    /// Returns `None` when the normalized query is empty, meaning no keyword
    /// filtering applies. A non-empty query whose keywords are all too short
    /// still parses and matches nothing.
    pub fn parse(query: &str) -> Option<Self> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return None;
        }

        let mut keywords: Vec<String> = Vec::new();
        for word in normalized.split(' ') {
            if word.chars().count() >= MIN_KEYWORD_CHARS && !keywords.iter().any(|k| k == word) {
                keywords.push(word.to_string());
            }
        }
        Some(Self { keywords })
    }

    /// The keywords used for scoring.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Scores an event against its name and description.
    pub fn score(&self, event: &Event) -> usize {
        let text = normalize(&format!("{} {}", event.event_name, event.description));
        self.score_text(&text)
    }

    /// Scores already-normalized text.
    ///
    /// `matches` is the number of keywords contained in the text. Zero matches
    /// score 0, a full match scores `matches + 2`, a partial match scores `matches`.
    pub fn score_text(&self, text: &str) -> usize {
        let matches = self
            .keywords
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count();

        if matches == 0 {
            0
        } else if matches == self.keywords.len() {
            matches + FULL_MATCH_BONUS
        } else {
            matches
        }
    }
}
