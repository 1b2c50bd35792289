//! Sort Engine — orders record arrays by a single key and direction.
//!
//! Stable by construction (std `sort_by` is stable): records comparing equal
//! on the chosen key keep their relative order from the input array.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::MatchRecord;

/// The fixed set of sortable fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Numeric match score — the default.
    #[default]
    Score,
    Date,
    Title,
}

impl SortKey {
    /// Lenient parse for URL parameters. Unknown values fall back to the
    /// default numeric key rather than failing.
    pub fn from_param(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "date" => SortKey::Date,
            "title" => SortKey::Title,
            _ => SortKey::Score,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::Date => "date",
            SortKey::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    /// Highest match first — the default for score-ranked views.
    #[default]
    Desc,
}

impl SortDirection {
    pub fn from_param(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Returns a new array ordered per `spec`; the input is not mutated.
pub fn sort_records(records: &[MatchRecord], spec: &SortSpec) -> Vec<MatchRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, spec.key);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by_key(a: &MatchRecord, b: &MatchRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Score => a
            .match_score
            .partial_cmp(&b.match_score)
            .unwrap_or(Ordering::Equal),
        // Records without a date sort as oldest.
        SortKey::Date => a
            .posted_date
            .unwrap_or(NaiveDate::MIN)
            .cmp(&b.posted_date.unwrap_or(NaiveDate::MIN)),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}
