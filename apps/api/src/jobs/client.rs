/// Job search client — the single point of entry for calls to the remote job listing service.
///
/// One GET per (role, location), no retries. Failures are returned to the
/// caller as `JobSearchError` so each role can be handled in isolation.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::jobs::models::{JobRecord, JobSearchResponse};

/// Upper bound on listings returned per role.
pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl JobSearchError {
    /// HTTP status reported by the service, if the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            JobSearchError::Api { status, .. } => Some(*status),
            JobSearchError::Http(e) => e.status().map(|s| s.as_u16()),
            JobSearchError::Parse(_) => None,
        }
    }
}

/// Search backend. Carried in `AppState` as `Arc<dyn JobSearch>`.
#[async_trait]
pub trait JobSearch: Send + Sync {
    /// Returns at most `MAX_RESULTS` normalized listings for `role` in `location`.
    async fn search(&self, role: &str, location: &str) -> Result<Vec<JobRecord>, JobSearchError>;
}

/// Query parameters sent with every search.
pub fn search_params(role: &str, location: &str, country: &str) -> Vec<(&'static str, String)> {
    vec![
        ("query", format!("{role} in {location}")),
        ("page", "1".to_string()),
        ("num_pages", "1".to_string()),
        ("page_size", MAX_RESULTS.to_string()),
        ("country", country.to_string()),
    ]
}

/// Parses a successful response body into at most `MAX_RESULTS` records.
pub fn parse_search_body(body: &str) -> Result<Vec<JobRecord>, JobSearchError> {
    let parsed: JobSearchResponse = serde_json::from_str(body)?;
    Ok(parsed
        .data
        .into_iter()
        .take(MAX_RESULTS)
        .map(JobRecord::from)
        .collect())
}

/// JSearch (RapidAPI) backed implementation.
#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    url: String,
    api_key: String,
    api_host: String,
    country: String,
}

impl JSearchClient {
    pub fn new(config: &Config) -> Result<Self, JobSearchError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.jobs_request_timeout_secs))
                .build()?,
            url: config.jobs_api_url.clone(),
            api_key: config.jobs_api_key.clone(),
            api_host: config.jobs_api_host.clone(),
            country: config.jobs_country.clone(),
        })
    }
}

#[async_trait]
impl JobSearch for JSearchClient {
    async fn search(&self, role: &str, location: &str) -> Result<Vec<JobRecord>, JobSearchError> {
        debug!("Searching jobs: role={role}, location={location}");

        let response = self
            .client
            .get(&self.url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(&search_params(role, location, &self.country))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Job search API returned {} for '{}': {}", status, role, body);
            return Err(JobSearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let jobs = parse_search_body(&body)?;
        debug!("Job search for '{}' returned {} listings", role, jobs.len());
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    /// Headers and query string of every request the local service received.
    type Received = Arc<Mutex<Vec<(HeaderMap, HashMap<String, String>)>>>;

    /// Serves `app` on an ephemeral local port and returns its search URL.
    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/search")
    }

    fn client_for(url: String) -> JSearchClient {
        let config = Config {
            jobs_api_key: "test-key".to_string(),
            jobs_api_host: "jobs.test".to_string(),
            jobs_api_url: url,
            jobs_country: "IN".to_string(),
            jobs_request_timeout_secs: 5,
            max_upload_bytes: 1024,
            port: 0,
            rust_log: "debug".to_string(),
        };
        JSearchClient::new(&config).unwrap()
    }

    fn listings(count: usize) -> Value {
        let data: Vec<Value> = (0..count)
            .map(|i| json!({ "job_title": format!("Job {i}"), "employer_name": "Acme" }))
            .collect();
        json!({ "data": data })
    }

    #[tokio::test]
    async fn test_search_sends_headers_and_query() {
        let received = Received::default();
        let app = Router::new()
            .route(
                "/search",
                get(
                    |State(received): State<Received>,
                     headers: HeaderMap,
                     Query(params): Query<HashMap<String, String>>| async move {
                        received.lock().unwrap().push((headers, params));
                        Json(listings(1))
                    },
                ),
            )
            .with_state(received.clone());
        let client = client_for(serve(app).await);

        let jobs = client.search("Backend Developer", "Pune").await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Job 0");
        assert_eq!(jobs[0].company, "Acme");

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (headers, params) = &received[0];
        assert_eq!(headers["x-rapidapi-key"], "test-key");
        assert_eq!(headers["x-rapidapi-host"], "jobs.test");
        assert_eq!(params["query"], "Backend Developer in Pune");
        assert_eq!(params["page"], "1");
        assert_eq!(params["num_pages"], "1");
        assert_eq!(params["page_size"], "5");
        assert_eq!(params["country"], "IN");
    }

    #[tokio::test]
    async fn test_search_caps_listings_from_service() {
        let app = Router::new().route("/search", get(|| async { Json(listings(8)) }));
        let client = client_for(serve(app).await);

        let jobs = client.search("Frontend Developer", "Chennai").await.unwrap();
        assert_eq!(jobs.len(), MAX_RESULTS);
        assert_eq!(jobs[4].title, "Job 4");
    }

    #[tokio::test]
    async fn test_search_empty_data_is_empty() {
        let app = Router::new().route("/search", get(|| async { Json(json!({ "data": [] })) }));
        let client = client_for(serve(app).await);

        assert!(client.search("Frontend Developer", "Pune").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_rate_limited_is_api_error() {
        let app = Router::new().route(
            "/search",
            get(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
        );
        let client = client_for(serve(app).await);

        let err = client.search("Backend Developer", "Pune").await.unwrap_err();
        match &err {
            JobSearchError::Api { status, body } => {
                assert_eq!(*status, 429);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("expected API error, got {other:?}"),
        }
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "API error: 429 - quota exceeded");
    }

    #[tokio::test]
    async fn test_search_non_json_success_is_parse_error() {
        let app = Router::new().route("/search", get(|| async { "<html>maintenance</html>" }));
        let client = client_for(serve(app).await);

        let err = client.search("Backend Developer", "Pune").await.unwrap_err();
        assert!(matches!(err, JobSearchError::Parse(_)));
    }

    #[test]
    fn test_search_params_shape() {
        let params = search_params("Backend Developer", "Pune", "IN");
        assert_eq!(
            params,
            vec![
                ("query", "Backend Developer in Pune".to_string()),
                ("page", "1".to_string()),
                ("num_pages", "1".to_string()),
                ("page_size", "5".to_string()),
                ("country", "IN".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_caps_results_at_five() {
        let jobs: Vec<String> = (0..8)
            .map(|i| format!(r#"{{"job_title": "Job {i}"}}"#))
            .collect();
        let body = format!(r#"{{"data": [{}]}}"#, jobs.join(","));

        let parsed = parse_search_body(&body).unwrap();
        assert_eq!(parsed.len(), MAX_RESULTS);
        assert_eq!(parsed[0].title, "Job 0");
        assert_eq!(parsed[4].title, "Job 4");
    }

    #[test]
    fn test_parse_empty_data() {
        assert!(parse_search_body(r#"{"data": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        let err = parse_search_body("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, JobSearchError::Parse(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_api_error_display_carries_status_and_body() {
        let err = JobSearchError::Api {
            status: 429,
            body: "Too many requests".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 429 - Too many requests");
        assert_eq!(err.status(), Some(429));
    }
}
