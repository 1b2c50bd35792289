//! URL State Synchronizer — bidirectional mapping between the three state
//! fragments and the query string.
//!
//! Parameter contract (client-owned): `page`, `pageSize`, `minScore`,
//! `maxScore`, `skills` (comma-joined), `location`, `experienceLevel`,
//! `daysPosted`, `sortBy`, `sortOrder`. Encoding omits anything equal to its
//! default so bookmarked URLs stay short; decoding is lenient — malformed
//! values fall back to defaults, never an error.

use crate::pipeline::filters::{FilterCriteria, SCORE_CEIL, SCORE_FLOOR};
use crate::pipeline::pagination::{PaginationSpec, DEFAULT_PAGE_SIZE};
use crate::pipeline::range::RangeControl;
use crate::pipeline::sorting::{SortDirection, SortKey, SortSpec};

/// The decoded query-string view of the pipeline state. `None` means the
/// parameter was absent (or malformed) and the fragment takes its default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub experience_level: Option<String>,
    pub days_posted: Option<i64>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortDirection>,
}

impl QueryState {
    /// Parses a raw query string. Unknown parameters are ignored; malformed
    /// values (unparseable numbers, out-of-domain scores) are silently
    /// dropped to their defaults.
    pub fn decode(query: &str) -> Self {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query).unwrap_or_default();

        let mut state = QueryState::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => state.page = value.parse::<usize>().ok().filter(|p| *p >= 1),
                "pageSize" => state.page_size = value.parse::<usize>().ok(),
                "minScore" => state.min_score = parse_score(&value),
                "maxScore" => state.max_score = parse_score(&value),
                "skills" => {
                    state.skills = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "location" => {
                    let trimmed = value.trim();
                    if !trimmed.is_empty() {
                        state.location = Some(trimmed.to_string());
                    }
                }
                "experienceLevel" => {
                    let trimmed = value.trim();
                    if !trimmed.is_empty() {
                        state.experience_level = Some(trimmed.to_string());
                    }
                }
                "daysPosted" => state.days_posted = value.parse::<i64>().ok().filter(|d| *d >= 0),
                "sortBy" => state.sort_by = Some(SortKey::from_param(&value)),
                "sortOrder" => state.sort_order = Some(SortDirection::from_param(&value)),
                _ => {}
            }
        }
        state
    }

    /// Renders the canonical query string, omitting parameters equal to
    /// their default. The empty state encodes to the empty string.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(page) = self.page.filter(|p| *p > 1) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size.filter(|s| *s != DEFAULT_PAGE_SIZE) {
            pairs.push(("pageSize", size.to_string()));
        }
        if let Some(min) = self.min_score.filter(|v| *v > SCORE_FLOOR) {
            pairs.push(("minScore", format_number(min)));
        }
        if let Some(max) = self.max_score.filter(|v| *v < SCORE_CEIL) {
            pairs.push(("maxScore", format_number(max)));
        }
        if !self.skills.is_empty() {
            pairs.push(("skills", self.skills.join(",")));
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            pairs.push(("location", location.to_string()));
        }
        if let Some(level) = self.experience_level.as_deref().filter(|l| !l.is_empty()) {
            pairs.push(("experienceLevel", level.to_string()));
        }
        if let Some(days) = self.days_posted {
            pairs.push(("daysPosted", days.to_string()));
        }
        if let Some(key) = self.sort_by.filter(|k| *k != SortKey::default()) {
            pairs.push(("sortBy", key.as_param().to_string()));
        }
        if let Some(order) = self.sort_order.filter(|o| *o != SortDirection::default()) {
            pairs.push(("sortOrder", order.as_param().to_string()));
        }

        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }

    /// Builds a query state from the three fragments (for writing the
    /// address bar back after a control edit).
    pub fn from_fragments(
        criteria: &FilterCriteria,
        sort: &SortSpec,
        pagination: &PaginationSpec,
    ) -> Self {
        QueryState {
            page: Some(pagination.page),
            page_size: Some(pagination.page_size),
            min_score: criteria.score_min,
            max_score: criteria.score_max,
            skills: criteria.skills.clone(),
            location: criteria.location.clone(),
            experience_level: criteria.experience_level.clone(),
            days_posted: criteria.days_posted,
            sort_by: Some(sort.key),
            sort_order: Some(sort.direction),
        }
    }

    /// The filter fragment this query state seeds. A crossed score pair is
    /// historically impossible through the range widgets, so one arriving
    /// via a hand-edited URL is malformed and falls back to unconstrained.
    pub fn criteria(&self) -> FilterCriteria {
        let (score_min, score_max) = match (self.min_score, self.max_score) {
            (Some(min), Some(max)) => {
                RangeControl::with_values(SCORE_FLOOR, SCORE_CEIL, min, max).bounds()
            }
            pair => pair,
        };
        FilterCriteria {
            score_min,
            score_max,
            skills: self.skills.clone(),
            location: self.location.clone(),
            days_posted: self.days_posted,
            experience_level: self.experience_level.clone(),
            ..Default::default()
        }
    }

    pub fn sort(&self) -> SortSpec {
        SortSpec {
            key: self.sort_by.unwrap_or_default(),
            direction: self.sort_order.unwrap_or_default(),
        }
    }

    pub fn pagination(&self) -> PaginationSpec {
        PaginationSpec {
            page: self.page.unwrap_or(1).max(1),
            page_size: PaginationSpec::coerce_page_size(
                self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            ),
        }
    }
}

fn parse_score(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && (SCORE_FLOOR..=SCORE_CEIL).contains(v))
}

/// Integral floats print without a trailing `.0` so `minScore=50` round-trips
/// byte-identically.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
