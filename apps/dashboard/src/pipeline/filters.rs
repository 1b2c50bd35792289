//! Filter Engine — pure evaluation of `FilterCriteria` against record arrays.
//!
//! Every present criterion must pass (logical AND); absent criteria and
//! bounds equal to their domain edge impose no constraint. The filter is
//! stable: output preserves the input's relative order.

#![allow(dead_code)]

use chrono::NaiveDate;

use crate::models::MatchRecord;

/// Score domain edges. A lower bound at the floor or an upper bound at the
/// ceiling behaves exactly like an unset bound.
pub const SCORE_FLOOR: f64 = 0.0;
pub const SCORE_CEIL: f64 = 100.0;

/// Filter criteria for a result screen. All fields are independently
/// optional; the default value means "no constraint".
///
/// Bounds are `Option<f64>` so an explicit user choice that happens to equal
/// the default (e.g. dragging the score thumb to 0) stays distinguishable
/// from an untouched control — the active-filter summary shows it, the
/// filter engine still treats it as unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub score_min: Option<f64>,
    pub score_max: Option<f64>,
    /// Experience bounds in years. Domain-edge values never reach here —
    /// the range edit boundary converts them to `None` (see `pipeline::range`).
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    /// A record passes if it carries at least one of these skills.
    pub skills: Vec<String>,
    /// Case-insensitive substring match against the record location.
    pub location: Option<String>,
    /// Upper bound on age-in-days of `posted_date`.
    pub days_posted: Option<i64>,
    /// Exact (case-insensitive) categorical match.
    pub experience_level: Option<String>,
    pub exclude_flagged: bool,
}

impl FilterCriteria {
    /// True when no field deviates from its default — filtering with a
    /// default criteria value is the identity on any record array.
    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

/// Returns the subset of `records` passing all active criteria, in input
/// order. Total for well-typed input: malformed records (missing a measured
/// field) fail only criteria that reference the missing field with a
/// non-default bound.
///
/// `today` anchors the `days_posted` age check; production callers pass
/// `Utc::now().date_naive()`.
pub fn filter_records(
    records: &[MatchRecord],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<MatchRecord> {
    records
        .iter()
        .filter(|r| record_passes(r, criteria, today))
        .cloned()
        .collect()
}

fn record_passes(record: &MatchRecord, criteria: &FilterCriteria, today: NaiveDate) -> bool {
    // Score range. The field is always present; bounds at the domain edge
    // impose no constraint even when explicitly set.
    if let Some(min) = criteria.score_min.filter(|v| *v > SCORE_FLOOR) {
        if record.match_score < min {
            return false;
        }
    }
    if let Some(max) = criteria.score_max.filter(|v| *v < SCORE_CEIL) {
        if record.match_score > max {
            return false;
        }
    }

    // Experience range. A record without a measured value fails an active
    // bound; a lower bound of 0 is vacuous either way.
    if let Some(min) = criteria.experience_min.filter(|v| *v > 0.0) {
        match record.experience_years {
            Some(years) if years >= min => {}
            _ => return false,
        }
    }
    if let Some(max) = criteria.experience_max {
        match record.experience_years {
            Some(years) if years <= max => {}
            _ => return false,
        }
    }

    // Skills: OR within the list, AND with everything else.
    if !criteria.skills.is_empty() {
        let hit = criteria.skills.iter().any(|wanted| {
            record
                .required_skills
                .iter()
                .any(|s| s.eq_ignore_ascii_case(wanted))
        });
        if !hit {
            return false;
        }
    }

    // Location: case-insensitive substring containment.
    if let Some(wanted) = criteria.location.as_deref().filter(|l| !l.trim().is_empty()) {
        let wanted = wanted.to_lowercase();
        match record.location.as_deref() {
            Some(loc) if loc.to_lowercase().contains(&wanted) => {}
            _ => return false,
        }
    }

    // Posting age: records without a date fail when the bound is active.
    if let Some(max_days) = criteria.days_posted {
        match record.posted_date {
            Some(posted) if (today - posted).num_days() <= max_days => {}
            _ => return false,
        }
    }

    // Categorical equality.
    if let Some(level) = criteria.experience_level.as_deref() {
        match record.experience_level.as_deref() {
            Some(rl) if rl.eq_ignore_ascii_case(level) => {}
            _ => return false,
        }
    }

    if criteria.exclude_flagged && record.flagged {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_record(title: &str, score: f64) -> MatchRecord {
        MatchRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            match_score: score,
            required_skills: vec![],
            location: None,
            posted_date: None,
            experience_level: None,
            experience_years: None,
            flagged: false,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let records: Vec<_> = (1..=5)
            .map(|i| make_record(&format!("r{i}"), i as f64 * 10.0))
            .collect();
        let out = filter_records(&records, &FilterCriteria::default(), today());
        assert_eq!(out, records);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let records = vec![
            make_record("a", 90.0),
            make_record("b", 10.0),
            make_record("c", 70.0),
            make_record("d", 55.0),
        ];
        let criteria = FilterCriteria {
            score_min: Some(50.0),
            ..Default::default()
        };
        let out = filter_records(&records, &criteria, today());
        let titles: Vec<_> = out.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "d"], "must be a stable subsequence");
    }

    /// Scenario: 12 records with scores 10, 20, ..., 120; scoreMin 50 keeps
    /// exactly the records at or above 50, count and order intact.
    #[test]
    fn test_score_min_keeps_records_at_or_above_bound() {
        let records: Vec<_> = (1..=12)
            .map(|i| make_record(&format!("r{i}"), i as f64 * 10.0))
            .collect();
        let criteria = FilterCriteria {
            score_min: Some(50.0),
            ..Default::default()
        };
        let out = filter_records(&records, &criteria, today());
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|r| r.match_score >= 50.0));
        assert_eq!(out[0].title, "r5");
        assert_eq!(out[7].title, "r12");
    }

    #[test]
    fn test_score_bounds_are_inclusive() {
        let records = vec![make_record("edge", 50.0)];
        let criteria = FilterCriteria {
            score_min: Some(50.0),
            score_max: Some(50.0),
            ..Default::default()
        };
        assert_eq!(filter_records(&records, &criteria, today()).len(), 1);
    }

    #[test]
    fn test_explicit_domain_edge_bounds_impose_no_constraint() {
        let records = vec![make_record("any", 0.0)];
        // Explicitly chosen, but equal to the domain edges — behaves unset.
        let criteria = FilterCriteria {
            score_min: Some(SCORE_FLOOR),
            score_max: Some(SCORE_CEIL),
            ..Default::default()
        };
        assert_eq!(filter_records(&records, &criteria, today()).len(), 1);
    }

    #[test]
    fn test_skills_pass_on_any_overlap() {
        let mut a = make_record("a", 50.0);
        a.required_skills = vec!["Rust".to_string(), "SQL".to_string()];
        let mut b = make_record("b", 50.0);
        b.required_skills = vec!["python".to_string()];
        let criteria = FilterCriteria {
            skills: vec!["rust".to_string(), "go".to_string()],
            ..Default::default()
        };
        let out = filter_records(&[a, b], &criteria, today());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "a");
    }

    #[test]
    fn test_missing_skills_fail_skill_criterion() {
        let record = make_record("bare", 50.0);
        let criteria = FilterCriteria {
            skills: vec!["rust".to_string()],
            ..Default::default()
        };
        assert!(filter_records(&[record], &criteria, today()).is_empty());
    }

    #[test]
    fn test_location_substring_is_case_insensitive() {
        let mut record = make_record("a", 50.0);
        record.location = Some("Berlin, Germany".to_string());
        let criteria = FilterCriteria {
            location: Some("berlin".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_records(&[record], &criteria, today()).len(), 1);
    }

    #[test]
    fn test_blank_location_filter_imposes_no_constraint() {
        let record = make_record("a", 50.0); // no location at all
        let criteria = FilterCriteria {
            location: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_records(&[record], &criteria, today()).len(), 1);
    }

    #[test]
    fn test_days_posted_bounds_age() {
        let mut fresh = make_record("fresh", 50.0);
        fresh.posted_date = NaiveDate::from_ymd_opt(2026, 8, 25);
        let mut stale = make_record("stale", 50.0);
        stale.posted_date = NaiveDate::from_ymd_opt(2026, 7, 1);
        let criteria = FilterCriteria {
            days_posted: Some(7),
            ..Default::default()
        };
        let out = filter_records(&[fresh, stale], &criteria, today());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "fresh");
    }

    #[test]
    fn test_missing_date_fails_active_days_bound_passes_default() {
        let record = make_record("undated", 50.0);

        let active = FilterCriteria {
            days_posted: Some(30),
            ..Default::default()
        };
        assert!(filter_records(std::slice::from_ref(&record), &active, today()).is_empty());

        // No bound set — the missing field never excludes the record.
        let out = filter_records(&[record], &FilterCriteria::default(), today());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_missing_experience_fails_active_bound_only() {
        let record = make_record("no-exp", 50.0);

        let active = FilterCriteria {
            experience_max: Some(1.0),
            ..Default::default()
        };
        assert!(filter_records(std::slice::from_ref(&record), &active, today()).is_empty());

        let vacuous = FilterCriteria {
            experience_min: Some(0.0), // lower bound at domain floor
            ..Default::default()
        };
        assert_eq!(filter_records(&[record], &vacuous, today()).len(), 1);
    }

    #[test]
    fn test_experience_level_exact_match() {
        let mut junior = make_record("junior", 50.0);
        junior.experience_level = Some("Junior".to_string());
        let mut senior = make_record("senior", 50.0);
        senior.experience_level = Some("senior".to_string());
        let criteria = FilterCriteria {
            experience_level: Some("junior".to_string()),
            ..Default::default()
        };
        let out = filter_records(&[junior, senior], &criteria, today());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "junior");
    }

    #[test]
    fn test_exclude_flagged() {
        let mut flagged = make_record("flagged", 90.0);
        flagged.flagged = true;
        let clean = make_record("clean", 10.0);
        let criteria = FilterCriteria {
            exclude_flagged: true,
            ..Default::default()
        };
        let out = filter_records(&[flagged, clean], &criteria, today());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "clean");
    }

    #[test]
    fn test_criteria_and_together() {
        let mut record = make_record("a", 80.0);
        record.required_skills = vec!["rust".to_string()];
        record.location = Some("Remote".to_string());
        let criteria = FilterCriteria {
            score_min: Some(50.0),
            skills: vec!["rust".to_string()],
            location: Some("paris".to_string()), // this one fails
            ..Default::default()
        };
        assert!(filter_records(&[record], &criteria, today()).is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let criteria = FilterCriteria {
            score_min: Some(50.0),
            ..Default::default()
        };
        assert!(filter_records(&[], &criteria, today()).is_empty());
    }
}
