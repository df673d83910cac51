//! Shorten request handler
//!
//! Issues one POST against the remote shorten endpoint and maps the three
//! possible outcomes (success, service-reported error, transport failure)
//! to a uniform result. The synchronous HTTP call runs in `spawn_blocking`.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};
use ureq::Agent;

use crate::config::AppConfig;
use crate::errors::{BitsnipError, Result};

use super::state::{InFlightGuard, InFlightPermit};

/// User-facing message for any transport-level failure. The root cause is
/// only logged for diagnostics.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Wire body of a shorten request
#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest {
    pub long_url: String,
    pub domain: String,
}

/// A shortened link as returned by the service: host+path, no scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub id: String,
}

impl ShortenedLink {
    /// Display form with the scheme the upstream page links to
    pub fn display_url(&self) -> String {
        format!("https://{}", self.id)
    }
}

/// Client for the remote shorten service.
///
/// One outstanding request at a time: a second `shorten` while one is in
/// flight fails fast with `RequestInFlight` instead of racing.
#[derive(Debug)]
pub struct ShortenClient {
    endpoint: String,
    default_domain: String,
    token: String,
    agent: Agent,
    in_flight: InFlightGuard,
}

impl ShortenClient {
    pub fn new(endpoint: String, default_domain: String, token: String, timeout: Duration) -> Self {
        // Non-2xx responses still carry the service's message body, so they
        // must come back as responses, not transport errors.
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            endpoint,
            default_domain,
            token,
            agent,
            in_flight: InFlightGuard::new(),
        }
    }

    /// Build a client from configuration. Fails before any network call
    /// when no access token is configured.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        if config.api.access_token.trim().is_empty() {
            return Err(BitsnipError::config(
                "access token is not set (BITSNIP_ACCESS_TOKEN or [api] access_token)",
            ));
        }

        Ok(Self::new(
            config.api.endpoint.clone(),
            config.api.domain.clone(),
            config.api.access_token.trim().to_string(),
            Duration::from_secs(config.http.timeout_secs),
        ))
    }

    /// Shorten a URL with the configured default domain.
    ///
    /// Precondition enforced by the caller: `url` is non-empty after
    /// trimming. No further validation happens here; the remote service is
    /// the sole validator of URL well-formedness.
    pub async fn shorten(&self, url: &str) -> Result<ShortenedLink> {
        let domain = self.default_domain.clone();
        self.shorten_with_domain(url, &domain).await
    }

    /// Shorten a URL with an explicit short-link domain
    pub async fn shorten_with_domain(&self, url: &str, domain: &str) -> Result<ShortenedLink> {
        let _permit: InFlightPermit<'_> = self.in_flight.try_acquire().ok_or_else(|| {
            BitsnipError::request_in_flight("a shorten request is already in flight")
        })?;

        let request = ShortenRequest {
            long_url: url.trim().to_string(),
            domain: domain.to_string(),
        };

        debug!("Shortening \"{}\" via {}", request.long_url, self.endpoint);

        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let token = self.token.clone();

        // 使用 spawn_blocking 在线程池中执行同步 HTTP 请求
        tokio::task::spawn_blocking(move || post_sync(&agent, &endpoint, &token, &request))
            .await
            .unwrap_or_else(|e| {
                warn!("Shorten task join failed: {}", e);
                Err(BitsnipError::transport(UNEXPECTED_ERROR_MESSAGE))
            })
    }
}

/// Perform the POST and read the JSON body (synchronous, blocking pool only)
fn post_sync(
    agent: &Agent,
    endpoint: &str,
    token: &str,
    request: &ShortenRequest,
) -> Result<ShortenedLink> {
    let resp = match agent
        .post(endpoint)
        .header("Authorization", format!("Bearer {}", token))
        .send_json(request)
    {
        Ok(r) => r,
        Err(e) => {
            warn!("Shorten request to \"{}\" failed: {}", endpoint, e);
            return Err(BitsnipError::transport(UNEXPECTED_ERROR_MESSAGE));
        }
    };

    let http_ok = resp.status().is_success();

    let body: serde_json::Value = match resp.into_body().read_json() {
        Ok(j) => j,
        Err(e) => {
            warn!("Shorten response from \"{}\" parse failed: {}", endpoint, e);
            return Err(BitsnipError::transport(UNEXPECTED_ERROR_MESSAGE));
        }
    };

    map_response(http_ok, &body)
}

/// Map a service response to the uniform outcome.
///
/// - HTTP-OK with an `id` field is a success
/// - any body carrying a `message` field is a service-level error,
///   surfaced verbatim (rate limiting, quota, malformed-URL rejections)
/// - anything else degrades to the generic transport failure
pub fn map_response(http_ok: bool, body: &serde_json::Value) -> Result<ShortenedLink> {
    if http_ok {
        if let Some(id) = body["id"].as_str() {
            return Ok(ShortenedLink { id: id.to_string() });
        }
    }

    if let Some(message) = body["message"].as_str() {
        debug!("Service reported: {}", message);
        return Err(BitsnipError::service(message));
    }

    warn!("Shorten response carried neither id nor message");
    Err(BitsnipError::transport(UNEXPECTED_ERROR_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_response_success() {
        let body = json!({ "id": "bit.ly/abc123", "link": "https://bit.ly/abc123" });
        let link = map_response(true, &body).unwrap();
        assert_eq!(link.id, "bit.ly/abc123");
        assert_eq!(link.display_url(), "https://bit.ly/abc123");
    }

    #[test]
    fn test_map_response_service_message_verbatim() {
        let body = json!({ "message": "INVALID_ARG_LONG_URL", "description": "..." });
        let err = map_response(false, &body).unwrap_err();
        assert!(matches!(err, BitsnipError::Service(_)));
        assert_eq!(err.message(), "INVALID_ARG_LONG_URL");
    }

    #[test]
    fn test_map_response_message_wins_when_not_ok() {
        // A body with both fields on a non-OK status is a service error
        let body = json!({ "id": "bit.ly/abc123", "message": "MONTHLY_RATE_LIMIT_EXCEEDED" });
        let err = map_response(false, &body).unwrap_err();
        assert_eq!(err.message(), "MONTHLY_RATE_LIMIT_EXCEEDED");
    }

    #[test]
    fn test_map_response_empty_body_is_transport_failure() {
        let body = json!({});
        let err = map_response(true, &body).unwrap_err();
        assert!(matches!(err, BitsnipError::Transport(_)));
        assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn test_map_response_id_without_ok_status() {
        // HTTP not OK and no message field: degrade to transport failure
        let body = json!({ "id": "bit.ly/abc123" });
        let err = map_response(false, &body).unwrap_err();
        assert!(matches!(err, BitsnipError::Transport(_)));
    }

    #[test]
    fn test_from_config_requires_token() {
        let config = crate::config::AppConfig::default();
        let err = ShortenClient::from_config(&config).unwrap_err();
        assert!(matches!(err, BitsnipError::Config(_)));
        assert!(err.message().contains("access token"), "got: {}", err);
    }

    /// 测试超时处理
    /// 依赖外部网络环境，CI 环境可能失败
    #[tokio::test]
    #[ignore]
    async fn test_transport_failure_is_generic() {
        // TEST-NET, 不可路由
        let client = ShortenClient::new(
            "http://192.0.2.1/v4/shorten".to_string(),
            "bit.ly".to_string(),
            "test-token".to_string(),
            Duration::from_secs(1),
        );

        let err = client.shorten("https://example.com").await.unwrap_err();
        assert!(matches!(err, BitsnipError::Transport(_)));
        assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
    }
}
