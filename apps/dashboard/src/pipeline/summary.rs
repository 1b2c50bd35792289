//! Active-Filter Summary — read-only projection of the current criteria
//! into human-readable chips plus a "showing N of M" line.

use serde::Serialize;

use crate::pipeline::filters::FilterCriteria;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSummary {
    /// One chip per explicitly-set criterion, in a fixed display order.
    pub chips: Vec<String>,
    /// Present only when filtering actually narrowed the set.
    pub showing: Option<String>,
}

/// Pure projection; never mutates state. `count_before_filter` is the size
/// of the unfiltered source array, `visible_count` the post-filter size.
pub fn summarize(
    criteria: &FilterCriteria,
    visible_count: usize,
    count_before_filter: usize,
) -> FilterSummary {
    let mut chips = Vec::new();

    match (criteria.score_min, criteria.score_max) {
        (Some(min), Some(max)) => chips.push(format!("Score {}–{}", trim(min), trim(max))),
        (Some(min), None) => chips.push(format!("Score ≥ {}", trim(min))),
        (None, Some(max)) => chips.push(format!("Score ≤ {}", trim(max))),
        (None, None) => {}
    }

    match (criteria.experience_min, criteria.experience_max) {
        (Some(min), Some(max)) => {
            chips.push(format!("Experience {}–{} yrs", trim(min), trim(max)))
        }
        (Some(min), None) => chips.push(format!("Experience ≥ {} yrs", trim(min))),
        (None, Some(max)) => chips.push(format!("Experience ≤ {} yrs", trim(max))),
        (None, None) => {}
    }

    if !criteria.skills.is_empty() {
        chips.push(format!("Skills: {}", criteria.skills.join(", ")));
    }
    if let Some(location) = criteria.location.as_deref().filter(|l| !l.trim().is_empty()) {
        chips.push(format!("Location: {location}"));
    }
    if let Some(days) = criteria.days_posted {
        chips.push(format!("Posted within {days} days"));
    }
    if let Some(level) = criteria.experience_level.as_deref() {
        chips.push(format!("Level: {level}"));
    }
    if criteria.exclude_flagged {
        chips.push("Excluding flagged".to_string());
    }

    let showing = (visible_count != count_before_filter)
        .then(|| format!("Showing {visible_count} of {count_before_filter}"));

    FilterSummary { chips, showing }
}

fn trim(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
