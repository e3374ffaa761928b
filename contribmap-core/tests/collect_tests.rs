// Tests for the contributor collection pipeline

use contribmap_core::cache::LOCATION_CACHE_FILE;
use contribmap_core::{CacheService, CollectError, aggregate, collect_contributors};
use contribmap_source::{Contributor, ContributorSource, SourceError, UserProfile};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

/// In-memory stand-in for the GitHub API.
#[derive(Default)]
struct FakeSource {
    contributors: Vec<&'static str>,
    /// login -> location; logins missing here have no profile.
    locations: HashMap<&'static str, Option<&'static str>>,
    /// Logins whose profile request fails outright.
    broken: Vec<&'static str>,
    fail_listing: bool,
    /// File checked on every profile request.
    watch: Option<PathBuf>,
    watched_file_seen: AtomicUsize,
    list_calls: AtomicUsize,
    profile_calls: AtomicUsize,
}

impl FakeSource {
    fn new(people: &[(&'static str, Option<&'static str>)]) -> Self {
        Self {
            contributors: people.iter().map(|(login, _)| *login).collect(),
            locations: people.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }
}

impl ContributorSource for FakeSource {
    async fn list_contributors(&self, _repo: &str) -> contribmap_source::error::Result<Vec<Contributor>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(SourceError::Status {
                status: 404,
                url: "https://api.github.com/repos/x/y/contributors".to_string(),
            });
        }
        Ok(self.contributors.iter().map(|l| Contributor::new(*l)).collect())
    }

    async fn fetch_profile(&self, login: &str) -> contribmap_source::error::Result<Option<UserProfile>> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if self.watch.as_ref().is_some_and(|path| path.exists()) {
            self.watched_file_seen.fetch_add(1, Ordering::SeqCst);
        }
        if self.broken.iter().any(|b| *b == login) {
            return Err(SourceError::Other("connection reset".to_string()));
        }
        Ok(self.locations.get(login).map(|location| UserProfile {
            login: login.to_string(),
            location: location.map(str::to_string),
        }))
    }
}

fn service(dir: &TempDir) -> CacheService {
    CacheService::open(dir.path())
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[tokio::test]
async fn test_collect_resolves_end_to_end() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir);
    let source = FakeSource::new(&[
        ("alice", Some("Berlin, Germany")),
        ("bob", Some("CI")),
        ("carol", None),
    ]);

    let records = collect_contributors(&source, &cache, "o/r", false).await.unwrap();
    assert_eq!(records.len(), 3);

    let counts = aggregate(&records);
    assert_eq!(
        serde_json::to_value(&counts).unwrap(),
        serde_json::json!({"de": 1})
    );
}

#[tokio::test]
async fn test_collect_preserves_order_and_lowercases() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir);
    let people: Vec<(&'static str, Option<&'static str>)> = vec![
        ("Zed", Some("Oslo")),
        ("amy", Some("Lima, Peru")),
        ("Bo", None),
        ("kim", Some("Seoul")),
        ("Lee", Some("Busan")),
        ("max", Some("Hamburg")),
        ("Nia", Some("Lagos, Nigeria")),
        ("oli", Some("Perth")),
        ("Pat", Some("Quito")),
        ("ray", Some("Cork")),
    ];
    let source = FakeSource::new(&people);

    let records = collect_contributors(&source, &cache, "o/r", false).await.unwrap();
    let logins: Vec<&str> = records.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(
        logins,
        vec!["zed", "amy", "bo", "kim", "lee", "max", "nia", "oli", "pat", "ray"]
    );
    assert_eq!(records[1].location.as_deref(), Some("Lima, Peru"));
}

#[tokio::test]
async fn test_duplicate_logins_collapse() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir);
    let mut source = FakeSource::new(&[("dup", Some("Paris"))]);
    source.contributors = vec!["dup", "DUP", "dup"];

    let records = collect_contributors(&source, &cache, "o/r", false).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(source.profile_calls(), 1);
}

#[tokio::test]
async fn test_listing_failure_is_an_error() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir);
    let source = FakeSource {
        fail_listing: true,
        ..Default::default()
    };

    let err = collect_contributors(&source, &cache, "x/y", false).await.unwrap_err();
    assert!(matches!(err, CollectError::Source(SourceError::Status { status: 404, .. })));
    assert!(err.to_string().contains("404"));
    assert!(cache.repos().is_empty());
}

// ============================================================================
// Caching Tests
// ============================================================================

#[tokio::test]
async fn test_repo_cache_hit_skips_source() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir);
    let source = FakeSource::new(&[("alice", Some("Berlin"))]);

    collect_contributors(&source, &cache, "o/r", false).await.unwrap();
    collect_contributors(&source, &cache, "o/r", false).await.unwrap();

    assert_eq!(source.list_calls(), 1);
    assert_eq!(source.profile_calls(), 1);
}

#[tokio::test]
async fn test_expired_repo_cache_refetches() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir).with_repo_ttl(Duration::ZERO);
    let source = FakeSource::new(&[("alice", Some("Berlin"))]);

    collect_contributors(&source, &cache, "o/r", false).await.unwrap();
    collect_contributors(&source, &cache, "o/r", false).await.unwrap();

    assert_eq!(source.list_calls(), 2);
    // locations never expire
    assert_eq!(source.profile_calls(), 1);
}

#[tokio::test]
async fn test_force_refresh_bypasses_repo_cache_only() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir);
    let source = FakeSource::new(&[("alice", Some("Berlin")), ("bob", None)]);

    collect_contributors(&source, &cache, "o/r", false).await.unwrap();
    collect_contributors(&source, &cache, "o/r", true).await.unwrap();

    assert_eq!(source.list_calls(), 2);
    assert_eq!(source.profile_calls(), 2);
}

#[tokio::test]
async fn test_missing_profile_is_cached_as_none() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir);
    // "ghost" is listed but has no profile
    let mut source = FakeSource::new(&[]);
    source.contributors = vec!["ghost"];

    let records = collect_contributors(&source, &cache, "o/r", false).await.unwrap();
    assert_eq!(records[0].location, None);
    assert_eq!(cache.locations().get("ghost", None), Some(None));
}

#[tokio::test]
async fn test_failed_profile_lookup_is_not_cached() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir);
    let mut source = FakeSource::new(&[("flaky", Some("Tokyo")), ("steady", Some("Rome"))]);
    source.broken = vec!["flaky"];

    let records = collect_contributors(&source, &cache, "o/r", false).await.unwrap();
    assert_eq!(records[0].location, None);
    assert_eq!(records[1].location.as_deref(), Some("Rome"));

    assert_eq!(cache.locations().get("flaky", None), None);
    assert_eq!(
        cache.locations().get("steady", None),
        Some(Some("Rome".to_string()))
    );
}

#[tokio::test]
async fn test_cached_results_survive_restart() {
    let dir = TempDir::new().unwrap();
    let source = FakeSource::new(&[("alice", Some("Berlin"))]);

    collect_contributors(&source, &service(&dir), "o/r", false).await.unwrap();
    let records = collect_contributors(&source, &service(&dir), "o/r", false).await.unwrap();

    assert_eq!(records[0].location.as_deref(), Some("Berlin"));
    assert_eq!(source.list_calls(), 1);
}

#[tokio::test]
async fn test_locations_written_once_per_pass() {
    let dir = TempDir::new().unwrap();
    let cache = service(&dir);
    let logins: Vec<&'static str> = (0..200)
        .map(|i| &*Box::leak(format!("user{}", i).into_boxed_str()))
        .collect();
    let mut source = FakeSource::new(&[]);
    source.contributors = logins.clone();
    source.locations = logins.iter().map(|l| (*l, Some("Oslo"))).collect();
    source.watch = Some(dir.path().join(LOCATION_CACHE_FILE));

    let records = collect_contributors(&source, &cache, "o/r", false).await.unwrap();
    assert_eq!(records.len(), 200);

    // no lookup saw the file: it is written after the last one
    assert_eq!(source.watched_file_seen.load(Ordering::SeqCst), 0);
    assert!(!cache.locations().is_dirty());

    let reopened = service(&dir);
    assert_eq!(reopened.locations().len(), 200);
    assert_eq!(
        reopened.locations().get("user199", None),
        Some(Some("Oslo".to_string()))
    );
}
