use crate::cache::CacheService;
use crate::error::CollectError;
use crate::model::ContributorRecord;
use contribmap_source::ContributorSource;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use tracing::{info, warn};

/// Profile lookups in flight at once for a single repo.
pub const PROFILE_CONCURRENCY: usize = 8;

/// Contributors of `repo` with their profile locations.
///
/// The contributor list comes from the repo cache unless it is stale or
/// `force_refresh` is set. Locations always go through the location cache,
/// which `force_refresh` does not bypass.
pub async fn collect_contributors<S: ContributorSource>(
    source: &S,
    cache: &CacheService,
    repo: &str,
    force_refresh: bool,
) -> Result<Vec<ContributorRecord>, CollectError> {
    let fetch = || fetch_records(source, cache, repo);

    if force_refresh {
        info!("Refreshing contributors for {}", repo);
        cache.repos().refresh(repo, fetch).await
    } else {
        cache
            .repos()
            .get_or_fetch(repo, Some(cache.repo_ttl()), fetch)
            .await
    }
}

async fn fetch_records<S: ContributorSource>(
    source: &S,
    cache: &CacheService,
    repo: &str,
) -> Result<Vec<ContributorRecord>, CollectError> {
    let contributors = source.list_contributors(repo).await?;

    let mut seen = HashSet::new();
    let logins: Vec<String> = contributors
        .iter()
        .map(|c| c.normalized_login())
        .filter(|login| seen.insert(login.clone()))
        .collect();

    info!(
        "Looking up locations for {} contributors of {}",
        logins.len(),
        repo
    );

    let records: Vec<ContributorRecord> = stream::iter(logins)
        .map(|login| async move {
            let location = lookup_location(source, cache, &login).await;
            ContributorRecord {
                username: login,
                location,
            }
        })
        .buffered(PROFILE_CONCURRENCY)
        .collect()
        .await;

    cache.locations().flush().await;
    Ok(records)
}

/// Location from the cache or the profile API. New answers are stored in
/// memory and written once the whole pass is done. A failed request yields
/// `None` for this pass without caching it.
async fn lookup_location<S: ContributorSource>(
    source: &S,
    cache: &CacheService,
    login: &str,
) -> Option<String> {
    let locations = cache.locations();
    if let Some(location) = locations.get(login, None) {
        return location;
    }

    match source.fetch_profile(login).await {
        Ok(profile) => {
            let location = profile.and_then(|p| p.location);
            locations.store(login, location.clone());
            location
        }
        Err(e) => {
            warn!("Profile lookup for {} failed: {}", login, e);
            None
        }
    }
}
