//! Category translation to the canonical French display taxonomy.
//!
//! Scraped categories arrive in whatever language the source site used
//! (`Konzerte`, `conciertos`, `Christmas markets`) and are often delimited lists
//! (`concerts; festivals`). The translator maps them onto one canonical display
//! name per category.

use std::collections::HashMap;

use crate::normalize::normalize;

/// Built-in label table: normalized multilingual label -> canonical category.
const BUILTIN_LABELS: &[(&str, &str)] = &[
    ("concert", "Concerts"),
    ("concerts", "Concerts"),
    ("konzerte", "Concerts"),
    ("conciertos", "Concerts"),
    ("exhibition", "Expositions"),
    ("exhibitions", "Expositions"),
    ("ausstellungen", "Expositions"),
    ("exposiciones", "Expositions"),
    ("market", "Marchés"),
    ("markets", "Marchés"),
    ("marches", "Marchés"),
    ("markte", "Marchés"),
    ("mercados", "Marchés"),
    ("flea market", "Marchés aux puces"),
    ("flea markets", "Marchés aux puces"),
    ("flohmarkte", "Marchés aux puces"),
    ("mercadillos", "Marchés aux puces"),
    ("christmas market", "Marchés de Noël"),
    ("christmas markets", "Marchés de Noël"),
    ("marches de noel", "Marchés de Noël"),
    ("weihnachtsmarkte", "Marchés de Noël"),
    ("festival", "Festivals"),
    ("festivals", "Festivals"),
    ("festivales", "Festivals"),
    ("ferias", "Fêtes et foires"),
    ("fetes et foires", "Fêtes et foires"),
    ("trade show", "Salons professionnels"),
    ("trade shows", "Salons professionnels"),
    ("fachmessen", "Salons professionnels"),
    ("ferias profesionales", "Salons professionnels"),
    ("dance", "Spectacles de danse"),
    ("danza", "Spectacles de danse"),
    ("tanzshows", "Spectacles de danse"),
    ("theatre", "Théâtre"),
    ("theater", "Théâtre"),
    ("teatro", "Théâtre"),
    ("opera", "Opéra"),
    ("oper", "Opéra"),
    ("musical", "Comédies musicales"),
    ("musicals", "Comédies musicales"),
    ("musicales", "Comédies musicales"),
    ("ateliers", "Ateliers"),
    ("messen", "Salons"),
];

/// Characters that separate multiple labels in one category cell.
const LABEL_DELIMITERS: [char; 5] = [';', ',', '/', '|', '-'];

/// Maps raw category labels to canonical display categories.
///
/// Lookup is exact on normalized tokens. When a cell holds several labels the
/// first one (in cell order) with a table entry wins, not the best one.
#[derive(Debug, Clone)]
pub struct CategoryTranslator {
    /// Normalized label -> canonical category.
    labels: HashMap<String, String>,
}

impl Default for CategoryTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryTranslator {
    /// Creates a translator with the built-in label table.
    pub fn new() -> Self {
        let labels = BUILTIN_LABELS
            .iter()
            .map(|(label, canonical)| ((*label).to_string(), (*canonical).to_string()))
            .collect();
        Self { labels }
    }

    /// Adds extra `(label, canonical)` pairs.
    ///
    /// Labels are normalized before insertion. Existing entries, including the
    /// built-in ones, are never overwritten.
    pub fn with_labels<I, L, C>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: AsRef<str>,
        C: Into<String>,
    {
        for (label, canonical) in extra {
            let key = normalize(label.as_ref());
            if key.is_empty() {
                continue;
            }
            self.labels.entry(key).or_insert_with(|| canonical.into());
        }
        self
    }

    /// Number of known labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Translates a raw category cell for display.
    ///
    /// Returns `None` for missing or blank input. Otherwise returns the canonical
    /// category of the first token with a table entry, or the raw value unchanged
    /// when no token is known, so unknown categories stay visible.
    pub fn translate(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw?;
        if raw.trim().is_empty() {
            return None;
        }

        let normalized = normalize(raw);
        let hit = normalized
            .split(LABEL_DELIMITERS)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .find_map(|token| self.labels.get(token));

        Some(hit.cloned().unwrap_or_else(|| raw.to_string()))
    }
}
