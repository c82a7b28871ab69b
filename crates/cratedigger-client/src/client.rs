// SPDX-License-Identifier: GPL-3.0-or-later

use crate::endpoint::Endpoint;
use crate::error::{DiscogsError, Result};
use crate::models::{
    Artist, ArtistReleases, Collection, CollectionAdded, CollectionQuery, Identity, Label,
    LabelReleases, Master, MasterVersions, NewList, Release, SearchQuery, SearchResults, User,
    UserList, Wantlist,
};
use crate::rate_limiter::{RateLimiter, RateLimiterStatus};
use crate::retry::{run_with_retry, RetryPolicy};
use reqwest::header::{HeaderValue, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

const DISCOGS_API_BASE: &str = "https://api.discogs.com";
const USER_AGENT: &str = concat!(
    "cratedigger/",
    env!("CARGO_PKG_VERSION"),
    " ( https://github.com/SvetaKrava/cratedigger )"
);

/// Discogs API client with client-side rate limiting and retry.
#[derive(Debug, Clone)]
pub struct DiscogsClient {
    http: Client,
    base_url: String,
    token: Option<String>,
    rate_limiter: RateLimiter,
    retry_policy: RetryPolicy,
}

impl DiscogsClient {
    /// Create an unauthenticated client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> DiscogsClientBuilder {
        DiscogsClientBuilder::default()
    }

    /// Search the Discogs database.
    ///
    /// # Example
    /// ```no_run
    /// # use cratedigger_client::{DiscogsClient, SearchQuery, SearchType};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = DiscogsClient::new()?;
    /// let query = SearchQuery::text("Nevermind")
    ///     .search_type(SearchType::Release)
    ///     .per_page(10);
    /// let results = client.search(query).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: SearchQuery) -> Result<SearchResults> {
        let mut endpoint = Endpoint::search();
        if let Some(q) = &query.query {
            endpoint = endpoint.param("q", q.as_str());
        }
        if let Some(search_type) = query.search_type {
            endpoint = endpoint.param("type", search_type.as_str());
        }
        if let Some(title) = &query.title {
            endpoint = endpoint.param("title", title.as_str());
        }
        if let Some(artist) = &query.artist {
            endpoint = endpoint.param("artist", artist.as_str());
        }
        if let Some(genre) = &query.genre {
            endpoint = endpoint.param("genre", genre.as_str());
        }
        if let Some(style) = &query.style {
            endpoint = endpoint.param("style", style.as_str());
        }
        if let Some(year) = &query.year {
            endpoint = endpoint.param("year", year.as_str());
        }
        if let Some(country) = &query.country {
            endpoint = endpoint.param("country", country.as_str());
        }
        self.get(paginate(endpoint, query.page, query.per_page))
            .await
    }

    /// Look up an artist by ID.
    pub async fn artist(&self, artist_id: u64) -> Result<Artist> {
        self.get(Endpoint::artist(artist_id)).await
    }

    /// List releases credited to an artist.
    pub async fn artist_releases(
        &self,
        artist_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<ArtistReleases> {
        self.get(paginate(Endpoint::artist_releases(artist_id), page, per_page))
            .await
    }

    /// Look up a release by ID.
    pub async fn release(&self, release_id: u64) -> Result<Release> {
        self.get(Endpoint::release(release_id)).await
    }

    /// Look up a master release by ID.
    pub async fn master(&self, master_id: u64) -> Result<Master> {
        self.get(Endpoint::master(master_id)).await
    }

    /// List the versions of a master release.
    pub async fn master_versions(
        &self,
        master_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<MasterVersions> {
        self.get(paginate(Endpoint::master_versions(master_id), page, per_page))
            .await
    }

    /// Look up a label by ID.
    pub async fn label(&self, label_id: u64) -> Result<Label> {
        self.get(Endpoint::label(label_id)).await
    }

    /// List releases issued on a label.
    pub async fn label_releases(
        &self,
        label_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<LabelReleases> {
        self.get(paginate(Endpoint::label_releases(label_id), page, per_page))
            .await
    }

    /// Identify the account the configured token belongs to. Fails with
    /// [`DiscogsError::Auth`] when no valid token is set.
    pub async fn identity(&self) -> Result<Identity> {
        self.get(Endpoint::identity()).await
    }

    /// Look up a user profile.
    pub async fn user(&self, username: &str) -> Result<User> {
        self.get(Endpoint::user(username)).await
    }

    /// List a user's collection folder.
    pub async fn collection(&self, username: &str, query: CollectionQuery) -> Result<Collection> {
        let mut endpoint = Endpoint::collection(username, query.folder.unwrap_or(0));
        if let Some(field) = &query.sort {
            endpoint = endpoint.param("sort", field.as_str());
        }
        if let Some(order) = query.sort_order {
            endpoint = endpoint.param("sort_order", order.as_str());
        }
        self.get(paginate(endpoint, query.page, query.per_page))
            .await
    }

    /// List a user's wantlist.
    pub async fn wantlist(
        &self,
        username: &str,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Wantlist> {
        self.get(paginate(Endpoint::wantlist(username), page, per_page))
            .await
    }

    /// Add a release to a collection folder. Requires a token for the
    /// collection's owner.
    pub async fn add_to_collection(
        &self,
        username: &str,
        folder_id: u64,
        release_id: u64,
    ) -> Result<CollectionAdded> {
        self.post(
            Endpoint::collection_release(username, folder_id, release_id),
            None,
        )
        .await
    }

    /// Create a new user list. Requires a token for the list's owner.
    pub async fn create_list(&self, username: &str, list: NewList) -> Result<UserList> {
        let body = serde_json::to_value(&list)?;
        self.post(Endpoint::lists(username), Some(body)).await
    }

    /// Client-side view of the rate limit window.
    pub async fn rate_limit_status(&self) -> RateLimiterStatus {
        self.rate_limiter.status().await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        self.request(Method::GET, endpoint, None).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        self.request(Method::POST, endpoint, body).await
    }

    /// Dispatch one API call. Rate limit admission, the HTTP exchange, and
    /// status mapping all sit inside the retried closure, so every attempt
    /// is individually admitted against the window.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = endpoint.url(&self.base_url)?;

        run_with_retry(&self.retry_policy, || {
            let method = method.clone();
            let url = url.clone();
            let body = body.clone();
            async move {
                self.rate_limiter.acquire().await;

                trace!(target: "discogs", "{} {}", method, url);

                let mut request = self.http.request(method, url);
                if let Some(token) = &self.token {
                    request = request.header(AUTHORIZATION, format!("Discogs token={token}"));
                }
                if let Some(body) = &body {
                    request = request.json(body);
                }

                let response = request.send().await?;
                self.decode_response(response).await
            }
        })
        .await
    }

    async fn decode_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        debug!(target: "discogs", "response status: {}", status);

        if status.is_success() {
            let body = response.text().await?;
            trace!(target: "discogs", "response body: {}", body);
            if body.trim().is_empty() {
                // Some write endpoints acknowledge with an empty body.
                return Ok(serde_json::from_str("{}")?);
            }
            return Ok(serde_json::from_str(&body)?);
        }

        let retry_after = parse_retry_after(response.headers().get(RETRY_AFTER));
        let resource = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        Err(match status {
            StatusCode::UNAUTHORIZED => DiscogsError::Auth { message },
            StatusCode::NOT_FOUND => DiscogsError::NotFound { resource },
            StatusCode::TOO_MANY_REQUESTS => DiscogsError::Throttled {
                message,
                retry_after,
            },
            s if s.is_client_error() => DiscogsError::BadRequest {
                status: s.as_u16(),
                message,
            },
            s => DiscogsError::Server {
                status: s.as_u16(),
                message,
            },
        })
    }
}

fn paginate(mut endpoint: Endpoint, page: Option<u32>, per_page: Option<u32>) -> Endpoint {
    if let Some(page) = page {
        endpoint = endpoint.page(page);
    }
    if let Some(per_page) = per_page {
        endpoint = endpoint.per_page(per_page);
    }
    endpoint
}

/// Pull the human-readable message out of an error body.
///
/// Discogs error responses are usually `{"message": "..."}`, but proxies
/// and gateways can answer with arbitrary text.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error detail provided".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a `Retry-After` header given in whole seconds.
fn parse_retry_after(value: Option<&HeaderValue>) -> Option<Duration> {
    value?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Builder for configuring a Discogs client.
#[derive(Debug)]
pub struct DiscogsClientBuilder {
    base_url: String,
    token: Option<String>,
    user_agent: String,
    timeout: Duration,
    max_requests: usize,
    time_window: Duration,
    retry_policy: RetryPolicy,
}

impl Default for DiscogsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DISCOGS_API_BASE.to_string(),
            token: None,
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_requests: 60,
            time_window: Duration::from_secs(60),
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl DiscogsClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the personal access token for authenticated endpoints. Blank
    /// tokens are treated as absent.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        self.token = if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        };
        self
    }

    /// Identify the application in the `User-Agent` header. Discogs asks
    /// clients to send something distinctive here.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cap requests per trailing window. Discogs allows 60 per minute for
    /// authenticated clients and 25 for anonymous ones.
    pub fn rate_limit(mut self, max_requests: usize, time_window: Duration) -> Self {
        self.max_requests = max_requests;
        self.time_window = time_window;
        self
    }

    /// Replace the default retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Build the Discogs client.
    pub fn build(self) -> Result<DiscogsClient> {
        let http = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;

        Ok(DiscogsClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            token: self.token,
            rate_limiter: RateLimiter::new(self.max_requests, self.time_window),
            retry_policy: self.retry_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_retry_after() {
        let value = HeaderValue::from_static("45");
        assert_eq!(
            parse_retry_after(Some(&value)),
            Some(Duration::from_secs(45))
        );

        let value = HeaderValue::from_static(" 10 ");
        assert_eq!(
            parse_retry_after(Some(&value)),
            Some(Duration::from_secs(10))
        );

        // HTTP-date form is not used by Discogs; treat it as absent.
        let value = HeaderValue::from_static("Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(parse_retry_after(Some(&value)), None);

        assert_eq!(parse_retry_after(None), None);
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message": "Invalid consumer token."}"#),
            "Invalid consumer token."
        );
        assert_eq!(error_message("upstream connect error"), "upstream connect error");
        assert_eq!(error_message(r#"{"detail": "nope"}"#), r#"{"detail": "nope"}"#);
        assert_eq!(error_message("  "), "no error detail provided");
    }

    #[test]
    fn test_builder_trims_base_url_and_blank_token() {
        let client = DiscogsClient::builder()
            .base_url("https://api.discogs.com/")
            .token("   ")
            .build()
            .unwrap();

        assert_eq!(client.base_url, "https://api.discogs.com");
        assert!(client.token.is_none());
    }
}
