use crate::error::{Result, SourceError};
use crate::result::{Contributor, UserProfile};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const PER_PAGE: usize = 100;

/// Anything that can list a repository's contributors and look up their
/// profile location. The GitHub client is the production implementation;
/// tests substitute in-memory fakes.
pub trait ContributorSource: Send + Sync {
    /// Every contributor of `repo` (`owner/name`), across all pages.
    ///
    /// Fails only when nothing at all could be retrieved. A failure on a
    /// later page keeps the pages already fetched.
    fn list_contributors(&self, repo: &str)
    -> impl Future<Output = Result<Vec<Contributor>>> + Send;

    /// Profile for `login`. `Ok(None)` means the service answered but had no
    /// profile for us (non-2xx); `Err` means the request itself failed.
    fn fetch_profile(&self, login: &str)
    -> impl Future<Output = Result<Option<UserProfile>>> + Send;
}

pub struct GitHubClient {
    client: Client,
    api_url: String,
    max_pages: usize,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_timeout(token, Duration::from_secs(10))
    }

    pub fn with_timeout(token: Option<&str>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("token {}", token))
                .map_err(|e| SourceError::Other(format!("Invalid API token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent("contribmap/0.1 (https://github.com/trapdoorsec/contribmap)")
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(timeout / 2)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            api_url: DEFAULT_API_URL.to_string(),
            max_pages: 50,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    fn contributors_url(&self, repo: &str, page: usize) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/repos/{}/contributors", self.api_url, repo))
            .map_err(|e| SourceError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn profile_url(&self, login: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| SourceError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(["users", login]);
        Ok(url)
    }

    async fn fetch_page(&self, url: &Url) -> Result<Vec<Contributor>> {
        debug!("Fetching {}", url);

        let start = Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        // GitHub answers 204 for repositories without any commits.
        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let contributors: Vec<Contributor> = serde_json::from_str(&body)
            .map_err(|e| SourceError::ParseError(format!("contributors page: {}", e)))?;
        debug!(
            "Fetched {} contributors in {:?}",
            contributors.len(),
            start.elapsed()
        );
        Ok(contributors)
    }
}

impl ContributorSource for GitHubClient {
    async fn list_contributors(&self, repo: &str) -> Result<Vec<Contributor>> {
        let repo = validate_repo(repo)?;
        info!("Listing contributors of {}", repo);

        let mut contributors = Vec::new();
        for page in 1..=self.max_pages {
            let url = self.contributors_url(repo, page)?;
            match self.fetch_page(&url).await {
                Ok(batch) => {
                    let fetched = batch.len();
                    contributors.extend(batch);
                    if fetched < PER_PAGE {
                        break;
                    }
                }
                Err(e) if page == 1 => return Err(e),
                Err(e) => {
                    warn!("Stopping pagination of {} at page {}: {}", repo, page, e);
                    break;
                }
            }
        }

        info!("Found {} contributors for {}", contributors.len(), repo);
        Ok(contributors)
    }

    async fn fetch_profile(&self, login: &str) -> Result<Option<UserProfile>> {
        let url = self.profile_url(login)?;
        debug!("Fetching profile {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("No profile for {} (status {})", login, status.as_u16());
            return Ok(None);
        }

        let body = response.text().await?;
        let profile: UserProfile = serde_json::from_str(&body)
            .map_err(|e| SourceError::ParseError(format!("profile {}: {}", login, e)))?;
        Ok(Some(profile))
    }
}

/// Accepts `owner/name` where both halves are non-empty GitHub slugs.
pub fn validate_repo(repo: &str) -> Result<&str> {
    let repo = repo.trim();
    let valid_part = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };

    match repo.split_once('/') {
        Some((owner, name)) if valid_part(owner) && valid_part(name) => Ok(repo),
        _ => Err(SourceError::InvalidUrl(format!(
            "repository must look like owner/name, got '{}'",
            repo
        ))),
    }
}
