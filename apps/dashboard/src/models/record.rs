use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flat record returned by the ranking backend — an internship or candidate
/// summary. The pipeline never mutates records; it only selects, reorders,
/// and slices them.
///
/// Field names follow the backend's JSON contract (camelCase). Everything
/// beyond `id`, `title`, and `matchScore` is optional: records arrive from
/// heterogeneous sources and the filter engine has a defined policy for
/// missing fields (see `pipeline::filters`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: Uuid,
    pub title: String,
    /// Match score from the AI ranking backend, 0–100.
    pub match_score: f64,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub posted_date: Option<NaiveDate>,
    /// Categorical level label ("intern", "junior", ...).
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub experience_years: Option<f64>,
    /// Set by moderation; records can be excluded from views via a filter.
    #[serde(default)]
    pub flagged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_from_backend_json() {
        let json = r#"{
            "id": "6f2c0cde-8a88-4f22-9af0-6d9b4255e3a1",
            "title": "Backend Intern",
            "matchScore": 87.5,
            "requiredSkills": ["rust", "sql"],
            "location": "Berlin, Germany",
            "postedDate": "2026-08-01",
            "experienceLevel": "intern",
            "experienceYears": 0.5,
            "flagged": false
        }"#;

        let record: MatchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Backend Intern");
        assert!((record.match_score - 87.5).abs() < f64::EPSILON);
        assert_eq!(record.required_skills, vec!["rust", "sql"]);
        assert_eq!(
            record.posted_date,
            NaiveDate::from_ymd_opt(2026, 8, 1)
        );
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let json = r#"{
            "id": "6f2c0cde-8a88-4f22-9af0-6d9b4255e3a1",
            "title": "Data Intern",
            "matchScore": 42.0
        }"#;

        let record: MatchRecord = serde_json::from_str(json).unwrap();
        assert!(record.required_skills.is_empty());
        assert!(record.location.is_none());
        assert!(record.posted_date.is_none());
        assert!(record.experience_level.is_none());
        assert!(record.experience_years.is_none());
        assert!(!record.flagged);
    }
}
