//! Client for the Practicum homework statuses API

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::io::HttpClient;
use crate::{BotError, Result};

/// Client for fetching homework review statuses
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl PracticumClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            token: config.api_token.clone(),
            http,
        }
    }

    /// Fetch homework statuses updated since the given Unix timestamp.
    ///
    /// Every failure mode collapses into ApiRequest: transport errors,
    /// non-200 status codes, and bodies that are not valid JSON.
    pub async fn homework_statuses(&self, from_date: u64) -> Result<Value> {
        tracing::debug!("Requesting homework statuses since {}", from_date);

        let url = format!("{}?from_date={}", self.endpoint, from_date);
        let auth = format!("OAuth {}", self.token);
        let headers = [("Authorization", auth.as_str())];

        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|e| BotError::ApiRequest(e.to_string()))?;

        if response.status != 200 {
            return Err(BotError::ApiRequest(format!(
                "endpoint returned status code {}",
                response.status
            )));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| BotError::ApiRequest(format!("decoding response body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{HttpResponse, MockHttpClient};

    fn test_config() -> Config {
        Config::from_lookup(|name| {
            Some(
                match name {
                    "API_TOKEN" => "practicum-token",
                    "MESSAGING_TOKEN" => "123456:bot-token",
                    "CHAT_ID" => "987654",
                    _ => return None,
                }
                .to_string(),
            )
        })
        .unwrap()
    }

    #[tokio::test]
    async fn request_carries_cursor_and_oauth_header() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url, headers| {
                url == "https://practicum.yandex.ru/api/user_api/homework_statuses/\
                        ?from_date=1700000000"
                    && headers.contains(&("Authorization", "OAuth practicum-token"))
            })
            .returning(|_, _| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 200,
                        body: r#"{"homeworks":[],"current_date":1700000600}"#.to_string(),
                    })
                })
            });

        let client = PracticumClient::new(&test_config(), Arc::new(mock));
        let response = client.homework_statuses(1_700_000_000).await.unwrap();

        assert_eq!(response["current_date"], 1_700_000_600u64);
    }

    #[tokio::test]
    async fn non_200_status_is_an_api_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 503,
                    body: "Service Unavailable".to_string(),
                })
            })
        });

        let client = PracticumClient::new(&test_config(), Arc::new(mock));
        let err = client.homework_statuses(0).await.unwrap_err();

        match err {
            BotError::ApiRequest(msg) => {
                assert_eq!(msg, "endpoint returned status code 503");
            }
            other => panic!("expected ApiRequest error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_is_an_api_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| {
            Box::pin(async { Err(BotError::Http("GET failed: connection refused".into())) })
        });

        let client = PracticumClient::new(&test_config(), Arc::new(mock));
        let err = client.homework_statuses(0).await.unwrap_err();

        match err {
            BotError::ApiRequest(msg) => assert!(msg.contains("connection refused"), "{msg}"),
            other => panic!("expected ApiRequest error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_body_is_an_api_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 200,
                    body: "<html>gateway error</html>".to_string(),
                })
            })
        });

        let client = PracticumClient::new(&test_config(), Arc::new(mock));
        let err = client.homework_statuses(0).await.unwrap_err();

        match err {
            BotError::ApiRequest(msg) => assert!(msg.contains("decoding"), "{msg}"),
            other => panic!("expected ApiRequest error, got {other:?}"),
        }
    }

    #[test]
    fn debug_output_hides_the_token() {
        let client = PracticumClient::new(
            &test_config(),
            Arc::new(crate::io::ReqwestHttpClient::new()),
        );

        let debug = format!("{client:?}");

        assert!(debug.contains("practicum.yandex.ru"));
        assert!(!debug.contains("practicum-token"));
    }
}
