//! Blocking Reddit OAuth client and the paginated listing iterator.

use crate::credentials::Credentials;
use crate::error::{ExternalServiceError, ScrapeError};
use crate::listing::{ListingMode, PostSource, PostStream, TopWindow};
use crate::response::{AuthResponse, ListingPage, RawPost, POST_KIND};
use reqwest::blocking::{Client, Response};
use std::cell::OnceCell;
use std::collections::VecDeque;
use std::time::Duration;

/// Largest page Reddit serves for a listing request.
pub const MAX_PAGE_SIZE: usize = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the client sends token and API requests.
#[derive(Clone, Debug)]
pub struct RedditEndpoints {
    pub token_url: String,
    pub api_base: String,
}

impl Default for RedditEndpoints {
    fn default() -> Self {
        Self {
            token_url: "https://www.reddit.com/api/v1/access_token".to_string(),
            api_base: "https://oauth.reddit.com".to_string(),
        }
    }
}

/// Application-only Reddit client. Construction is purely local; the OAuth
/// token is requested on the first listing page and reused afterwards.
pub struct RedditClient {
    http: Client,
    credentials: Credentials,
    endpoints: RedditEndpoints,
    top_window: TopWindow,
    token: OnceCell<String>,
}

impl RedditClient {
    pub fn new(credentials: Credentials) -> Result<Self, ScrapeError> {
        Self::with_endpoints(credentials, RedditEndpoints::default())
    }

    pub fn with_endpoints(credentials: Credentials, endpoints: RedditEndpoints) -> Result<Self, ScrapeError> {
        // Unknown subreddits redirect to a search page; surface that as a
        // status error instead of following it.
        let http = Client::builder()
            .user_agent(credentials.user_agent.clone())
            .redirect(reqwest::redirect::Policy::none())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ExternalServiceError::Client)?;

        Ok(Self {
            http,
            credentials,
            endpoints,
            top_window: TopWindow::default(),
            token: OnceCell::new(),
        })
    }

    pub fn with_top_window(mut self, window: TopWindow) -> Self {
        self.top_window = window;
        self
    }

    fn access_token(&self) -> Result<&str, ScrapeError> {
        if let Some(token) = self.token.get() {
            return Ok(token.as_str());
        }
        let token = self.authenticate()?;
        Ok(self.token.get_or_init(|| token).as_str())
    }

    fn authenticate(&self) -> Result<String, ScrapeError> {
        tracing::debug!(url = %self.endpoints.token_url, "requesting application-only token");

        let resp = self
            .http
            .post(&self.endpoints.token_url)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .map_err(|source| ExternalServiceError::Request { context: "token request", source })?;
        let body = read_body(check_status(resp, "token request")?, "token request")?;
        let auth: AuthResponse = serde_json::from_str(&body)
            .map_err(|source| ExternalServiceError::Decode { context: "token response", source })?;

        match (auth.access_token, auth.error) {
            (_, Some(err)) => Err(ExternalServiceError::Auth(err).into()),
            (Some(token), None) if !token.is_empty() => Ok(token),
            _ => Err(ExternalServiceError::Auth("token response carried no access_token".into()).into()),
        }
    }
}

impl PostSource for RedditClient {
    fn fetch_listing<'a>(
        &'a self,
        subreddit: &str,
        mode: ListingMode,
        limit: usize,
    ) -> Result<PostStream<'a>, ScrapeError> {
        let url = format!("{}/r/{}/{}", self.endpoints.api_base.trim_end_matches('/'), subreddit, mode);
        let time_filter = (mode == ListingMode::Top).then(|| self.top_window.as_str());
        Ok(Box::new(Listing {
            client: self,
            url,
            time_filter,
            remaining: limit,
            after: None,
            buffer: VecDeque::new(),
            exhausted: false,
        }))
    }
}

/// Cursor-driven walk over one listing. Pages are requested only when the
/// buffer runs dry; once exhausted or failed it yields nothing more.
pub struct Listing<'a> {
    client: &'a RedditClient,
    url: String,
    time_filter: Option<&'static str>,
    remaining: usize,
    after: Option<String>,
    buffer: VecDeque<RawPost>,
    exhausted: bool,
}

impl Listing<'_> {
    fn fetch_page(&mut self) -> Result<(), ScrapeError> {
        let client = self.client;
        let token = client.access_token()?;

        let page_size = self.remaining.min(MAX_PAGE_SIZE);
        let mut query: Vec<(&str, String)> = vec![("limit", page_size.to_string()), ("raw_json", "1".to_string())];
        if let Some(t) = self.time_filter {
            query.push(("t", t.to_string()));
        }
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }

        let resp = client
            .http
            .get(&self.url)
            .bearer_auth(token)
            .query(&query)
            .send()
            .map_err(|source| ExternalServiceError::Request { context: "listing request", source })?;
        log_rate_limit(&resp);
        let body = read_body(check_status(resp, "listing request")?, "listing request")?;
        let page: ListingPage = serde_json::from_str(&body)
            .map_err(|source| ExternalServiceError::Decode { context: "listing page", source })?;

        let page_len = page.data.children.len();
        for child in page.data.children {
            if child.kind != POST_KIND {
                tracing::debug!(kind = %child.kind, "skipping non-post listing child");
                continue;
            }
            let post: RawPost = serde_json::from_value(child.data)
                .map_err(|source| ExternalServiceError::Decode { context: "listing post", source })?;
            self.buffer.push_back(post);
        }

        self.after = page.data.after;
        if self.after.is_none() || page_len == 0 {
            self.exhausted = true;
        }
        tracing::debug!(url = %self.url, received = self.buffer.len(), after = ?self.after, "fetched listing page");
        Ok(())
    }
}

impl Iterator for Listing<'_> {
    type Item = Result<RawPost, ScrapeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // A page may hold only non-post children while the cursor moves on.
        while self.buffer.is_empty() {
            if self.exhausted {
                return None;
            }
            if let Err(e) = self.fetch_page() {
                self.exhausted = true;
                self.remaining = 0;
                return Some(Err(e));
            }
        }
        let post = self.buffer.pop_front()?;
        self.remaining -= 1;
        Some(Ok(post))
    }
}

fn check_status(resp: Response, context: &'static str) -> Result<Response, ExternalServiceError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ExternalServiceError::Status { context, status, url: resp.url().to_string() })
    }
}

fn read_body(resp: Response, context: &'static str) -> Result<String, ExternalServiceError> {
    resp.text().map_err(|source| ExternalServiceError::Request { context, source })
}

fn log_rate_limit(resp: &Response) {
    let headers = resp.headers();
    let remaining = headers.get("x-ratelimit-remaining").and_then(|v| v.to_str().ok());
    let reset = headers.get("x-ratelimit-reset").and_then(|v| v.to_str().ok());
    if remaining.is_some() || reset.is_some() {
        tracing::debug!(remaining = ?remaining, reset = ?reset, "rate limit budget");
    }
}
