//! Record Source — the external ranking backend that produces flat record
//! arrays. The pipeline treats it as an opaque producer; fetch failures
//! surface as a retryable upstream error, never as a pipeline fault.

#![allow(dead_code)]

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::MatchRecord;

/// Server-side narrowing parameters. Screens that let the backend do the
/// narrowing forward their bounds here; the client-side filter engine still
/// runs afterwards and must give the same answer on the narrowed set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingParams {
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub exclude_flagged: bool,
    /// Bounded result size (top-K ≤ 50).
    pub top_k: usize,
}

impl RankingParams {
    pub fn with_top_k(top_k: usize) -> Self {
        Self {
            top_k,
            ..Default::default()
        }
    }

    /// Query-string form of the narrowing parameters, omitting unset bounds.
    fn to_query(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(min) = self.min_score {
            pairs.push(("minScore", min.to_string()));
        }
        if let Some(max) = self.max_score {
            pairs.push(("maxScore", max.to_string()));
        }
        if let Some(min) = self.experience_min {
            pairs.push(("experienceMin", min.to_string()));
        }
        if let Some(max) = self.experience_max {
            pairs.push(("experienceMax", max.to_string()));
        }
        if self.exclude_flagged {
            pairs.push(("excludeFlagged", "true".to_string()));
        }
        pairs.push(("limit", self.top_k.to_string()));
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }
}

/// The record producer trait. Carried in `AppState` as
/// `Arc<dyn RecordSource>` so screens and tests can swap backends.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self, params: &RankingParams) -> Result<Vec<MatchRecord>, AppError>;
}

/// HTTP source over the ranking backend's REST endpoint.
pub struct HttpRecordSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecordSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self, params: &RankingParams) -> Result<Vec<MatchRecord>, AppError> {
        let url = format!("{}/api/v1/rankings?{}", self.base_url, params.to_query());
        debug!("fetching records: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("ranking request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "ranking backend returned {}",
                response.status()
            )));
        }

        let mut records: Vec<MatchRecord> = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("malformed ranking payload: {e}")))?;

        // Backend contract caps the list, but never trust it.
        if params.top_k > 0 && records.len() > params.top_k {
            records.truncate(params.top_k);
        }

        info!("fetched {} records", records.len());
        Ok(records)
    }
}

/// Fixed in-memory source for tests and local development.
pub struct StaticRecordSource(pub Vec<MatchRecord>);

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch(&self, params: &RankingParams) -> Result<Vec<MatchRecord>, AppError> {
        let mut records = self.0.clone();
        if params.top_k > 0 && records.len() > params.top_k {
            records.truncate(params.top_k);
        }
        Ok(records)
    }
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

    #[test]
    fn test_params_query_omits_unset_bounds() {
        let params = RankingParams::with_top_k(50);
        assert_eq!(params.to_query(), "limit=50");
    }

    #[test]
    fn test_params_query_carries_active_bounds() {
        let params = RankingParams {
            min_score: Some(40.0),
            exclude_flagged: true,
            top_k: 25,
            ..Default::default()
        };
        let query = params.to_query();
        assert!(query.contains("minScore=40"));
        assert!(query.contains("excludeFlagged=true"));
        assert!(query.contains("limit=25"));
        assert!(!query.contains("maxScore"));
    }

    #[tokio::test]
    async fn test_static_source_returns_fixture() {
        let source = StaticRecordSource(vec![make_record("a", 1.0), make_record("b", 2.0)]);
        let records = source.fetch(&RankingParams::with_top_k(50)).await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_static_source_honors_top_k() {
        let source =
            StaticRecordSource((0..10).map(|i| make_record("r", i as f64)).collect());
        let records = source.fetch(&RankingParams::with_top_k(3)).await.unwrap();
        assert_eq!(records.len(), 3);
    }
}
