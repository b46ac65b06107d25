//! Per-request query parameters.

use std::{fmt, str::FromStr};

/// Result ordering requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Highest interest score first, then highest keyword score.
    #[default]
    Relevance,
    /// Earliest start date first.
    Date,
}

impl SortOrder {
    /// Parses a `sort` parameter. Only `"date"` selects date order.
    pub fn parse(value: &str) -> Self {
        if value == "date" {
            Self::Date
        } else {
            Self::Relevance
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "date" => Ok(Self::Date),
            other => Err(format!(
                "unknown sort order '{other}' (expected 'relevance' or 'date')"
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relevance => write!(f, "relevance"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// Filters and ordering for one search or coverage request.
///
/// All fields are optional; an empty string is treated the same as a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Weighted interests, `name:weight,name:weight`.
    pub interests: Option<String>,
    /// Free-text query.
    pub q: Option<String>,
    /// City substring filter.
    pub city: Option<String>,
    /// Earliest start date.
    pub start_date: Option<String>,
    /// Latest start date.
    pub end_date: Option<String>,
    /// Result ordering.
    pub sort: SortOrder,
}

impl QueryParams {
    /// Builds parameters from `(key, value)` pairs such as a decoded query string.
    ///
    /// Recognized keys are `interests`, `q`, `city`, `start_date`, `end_date` and
    /// `sort`. Unknown keys are ignored; a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "interests" => params.interests = Some(value),
                "q" => params.q = Some(value),
                "city" => params.city = Some(value),
                "start_date" => params.start_date = Some(value),
                "end_date" => params.end_date = Some(value),
                "sort" => params.sort = SortOrder::parse(&value),
                _ => {}
            }
        }
        params
    }

    /// Sets the interests filter.
    pub fn with_interests(mut self, interests: impl Into<String>) -> Self {
        self.interests = Some(interests.into());
        self
    }

    /// Sets the free-text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Sets the city filter.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the earliest start date.
    pub fn with_start_date(mut self, start: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self
    }

    /// Sets the latest start date.
    pub fn with_end_date(mut self, end: impl Into<String>) -> Self {
        self.end_date = Some(end.into());
        self
    }

    /// Sets the result ordering.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// The interests filter, if set and non-empty.
    pub fn interests(&self) -> Option<&str> {
        present(self.interests.as_deref())
    }

    /// The free-text query, if set and non-empty.
    pub fn query(&self) -> Option<&str> {
        present(self.q.as_deref())
    }

    /// The city filter, if set and non-empty.
    pub fn city(&self) -> Option<&str> {
        present(self.city.as_deref())
    }

    /// The earliest start date, if set and non-empty.
    pub fn start_date(&self) -> Option<&str> {
        present(self.start_date.as_deref())
    }

    /// The latest start date, if set and non-empty.
    pub fn end_date(&self) -> Option<&str> {
        present(self.end_date.as_deref())
    }
}

/// Treats empty strings as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
