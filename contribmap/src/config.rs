use clap::ArgMatches;
use contribmap_core::cache::{CacheService, DEFAULT_REPO_TTL};
use contribmap_core::{MapTemplate, TemplateError};
use contribmap_source::github::DEFAULT_API_URL;
use contribmap_source::{GitHubClient, SourceError};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BIND: &str = "127.0.0.1:5002";
pub const DEFAULT_CACHE_DIR: &str = "~/.cache/contribmap/";
pub const DEFAULT_REPO: &str = "sws2apps/organized-app";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: SocketAddr,
    pub cache_dir: PathBuf,
    /// Overrides the embedded world map when set.
    pub template: Option<PathBuf>,
    pub repo_ttl: Duration,
    pub timeout: Duration,
    pub api_url: String,
    pub token: Option<String>,
    pub default_repo: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 5002)),
            cache_dir: expand_path(DEFAULT_CACHE_DIR),
            template: None,
            repo_ttl: DEFAULT_REPO_TTL,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            default_repo: DEFAULT_REPO.to_string(),
        }
    }
}

impl Config {
    /// Build from the global options of the parsed command line.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let defaults = Self::default();

        Self {
            bind: matches
                .get_one::<SocketAddr>("bind")
                .copied()
                .unwrap_or(defaults.bind),
            cache_dir: matches
                .get_one::<String>("cache-dir")
                .map(|dir| expand_path(dir))
                .unwrap_or(defaults.cache_dir),
            template: matches
                .get_one::<String>("template")
                .map(|path| expand_path(path)),
            repo_ttl: matches
                .get_one::<u64>("repo-ttl")
                .map(|secs| Duration::from_secs(*secs))
                .unwrap_or(defaults.repo_ttl),
            timeout: matches
                .get_one::<u64>("timeout")
                .map(|secs| Duration::from_secs(*secs))
                .unwrap_or(defaults.timeout),
            api_url: matches
                .get_one::<Url>("api-url")
                .map(Url::to_string)
                .unwrap_or(defaults.api_url),
            token: matches
                .get_one::<String>("token")
                .filter(|token| !token.trim().is_empty())
                .cloned(),
            default_repo: matches
                .get_one::<String>("default-repo")
                .cloned()
                .unwrap_or(defaults.default_repo),
        }
    }

    /// The configured template file, or the embedded map.
    pub fn load_template(&self) -> Result<MapTemplate, TemplateError> {
        match &self.template {
            Some(path) => MapTemplate::load(path),
            None => MapTemplate::embedded(),
        }
    }

    pub fn github_client(&self) -> Result<GitHubClient, SourceError> {
        Ok(GitHubClient::with_timeout(self.token.as_deref(), self.timeout)?
            .with_api_url(self.api_url.as_str()))
    }

    pub fn open_cache(&self) -> CacheService {
        CacheService::open(&self.cache_dir).with_repo_ttl(self.repo_ttl)
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_path(path: &str) -> PathBuf {
    Path::new(shellexpand::tilde(path).as_ref()).to_path_buf()
}
