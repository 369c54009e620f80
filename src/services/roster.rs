use crate::models::Therapist;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the therapist directory API
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Therapist directory API client
///
/// The directory owns the roster; this client only reads it. The
/// response envelope is `{ "therapists": [...], "total": n }` and
/// individually malformed records are skipped rather than failing the
/// whole fetch.
pub struct RosterClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl RosterClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch the full therapist roster
    pub async fn fetch_roster(&self) -> Result<Vec<Therapist>, RosterError> {
        let url = format!("{}/therapists", self.base_url.trim_end_matches('/'));

        tracing::debug!("Fetching therapist roster from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RosterError::ApiError(format!(
                "Failed to fetch roster: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let records = json
            .get("therapists")
            .and_then(|t| t.as_array())
            .ok_or_else(|| RosterError::InvalidResponse("Missing therapists array".into()))?;

        let roster: Vec<Therapist> = records
            .iter()
            .filter_map(|record| serde_json::from_value(record.clone()).ok())
            .collect();

        if roster.len() < records.len() {
            tracing::warn!(
                "Skipped {} malformed roster records",
                records.len() - roster.len()
            );
        }

        tracing::debug!("Fetched {} therapists (total: {})", roster.len(), total);

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn therapist_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": format!("Dr. {}", id),
            "gender": "Female",
            "specialty": "Clinical Psychologist",
            "location": "Kampala",
            "price": "UGX 45,000",
            "priceUnit": "per session",
            "languages": ["English"],
            "tags": ["Anxiety"],
            "available": true,
            "rating": 4.5,
            "reviews": 12
        })
    }

    #[tokio::test]
    async fn test_fetch_roster() {
        let mut server = mockito::Server::new_async().await;

        let body = serde_json::json!({
            "therapists": [therapist_json("t1"), therapist_json("t2")],
            "total": 2
        });

        let mock = server
            .mock("GET", "/therapists")
            .match_header("X-Api-Key", "test_key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = RosterClient::new(server.url(), "test_key".to_string(), 5);
        let roster = client.fetch_roster().await.unwrap();

        mock.assert_async().await;
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, "t1");
        assert_eq!(roster[1].rating, 4.5);
    }

    #[tokio::test]
    async fn test_malformed_records_are_skipped() {
        let mut server = mockito::Server::new_async().await;

        let body = serde_json::json!({
            "therapists": [therapist_json("t1"), { "id": "broken" }],
            "total": 2
        });

        let _mock = server
            .mock("GET", "/therapists")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = RosterClient::new(server.url(), "test_key".to_string(), 5);
        let roster = client.fetch_roster().await.unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "t1");
    }

    #[tokio::test]
    async fn test_server_error_surfaces_as_api_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/therapists")
            .with_status(503)
            .create_async()
            .await;

        let client = RosterClient::new(server.url(), "test_key".to_string(), 5);
        let err = client.fetch_roster().await.unwrap_err();

        assert!(matches!(err, RosterError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_missing_envelope_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/therapists")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{\"total\": 0}")
            .create_async()
            .await;

        let client = RosterClient::new(server.url(), "test_key".to_string(), 5);
        let err = client.fetch_roster().await.unwrap_err();

        assert!(matches!(err, RosterError::InvalidResponse(_)));
    }
}
