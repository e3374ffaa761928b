//! Persisted TTL caches for contributor lists and profile locations.
//!
//! Each cache is one JSON object on disk, `{key: {"timestamp", "data"}}`.
//! Async callers batch their changes with [`Cache::store`] and write the
//! whole file once with [`Cache::flush`], which runs on the blocking pool.

use crate::error::CacheError;
use crate::model::ContributorRecord;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::future::Future;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::task::spawn_blocking;
use tracing::{debug, error, info, warn};

pub const REPO_CACHE_FILE: &str = "repo_cache.json";
pub const LOCATION_CACHE_FILE: &str = "user_locations.json";

/// How long a repo's contributor list stays fresh.
pub const DEFAULT_REPO_TTL: Duration = Duration::from_secs(86_400);

/// Source of "now" for entry timestamps and expiry checks.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub data: T,
}

type Entries<T> = BTreeMap<String, CacheEntry<T>>;

struct State<T> {
    entries: Entries<T>,
    /// Bumped on every change.
    generation: u64,
}

/// Serialized entries at one generation, ready to be written.
struct Snapshot {
    generation: u64,
    json: Vec<u8>,
}

pub struct Cache<T> {
    name: String,
    path: PathBuf,
    state: Mutex<State<T>>,
    /// Generation currently on disk. Held for the whole write so writers
    /// never interleave and an older snapshot never replaces a newer one.
    written: Arc<Mutex<u64>>,
    memory_only: AtomicBool,
    clock: Clock,
}

impl<T> Cache<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Open the cache stored at `path`.
    ///
    /// A missing file gives an empty cache. An unreadable or corrupt file is
    /// logged and also treated as empty; it is replaced on the next write.
    pub fn open(name: &str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match load::<T>(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring cache {}: {}", name, e);
                Entries::new()
            }
        };
        debug!(
            "Opened cache {} at {} ({} entries)",
            name,
            path.display(),
            entries.len()
        );

        Self {
            name: name.to_string(),
            path,
            state: Mutex::new(State {
                entries,
                generation: 0,
            }),
            written: Arc::new(Mutex::new(0)),
            memory_only: AtomicBool::new(false),
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the wall clock, for tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once persistence has been abandoned for this process.
    pub fn is_memory_only(&self) -> bool {
        self.memory_only.load(Ordering::Relaxed)
    }

    /// True while stored changes have not reached the file.
    pub fn is_dirty(&self) -> bool {
        let generation = self.lock().generation;
        generation > *lock(&self.written)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Value for `key` if present and younger than `ttl`. `None` never expires.
    pub fn get(&self, key: &str, ttl: Option<Duration>) -> Option<T> {
        let now = self.now();
        let state = self.lock();
        let entry = state.entries.get(key)?;

        match ttl {
            Some(ttl) if now - entry.timestamp >= ttl.as_secs_f64() => None,
            _ => Some(entry.data.clone()),
        }
    }

    /// Cached value for `key`, or the result of `fetch` on a miss.
    ///
    /// Successful fetches are stored and flushed. Errors are returned
    /// unchanged and leave the cache untouched.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        fetch: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get(key, ttl) {
            debug!("Cache {} hit for {}", self.name, key);
            return Ok(value);
        }

        debug!("Cache {} miss for {}", self.name, key);
        self.refresh(key, fetch).await
    }

    /// Fetch unconditionally, store the result and flush.
    pub async fn refresh<F, Fut, E>(&self, key: &str, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let value = fetch().await?;
        self.store(key, value.clone());
        self.flush().await;
        Ok(value)
    }

    /// Store `value` under `key` in memory only. [`Cache::flush`] writes it out.
    pub fn store(&self, key: &str, value: T) {
        let entry = CacheEntry {
            timestamp: self.now(),
            data: value,
        };

        let mut state = self.lock();
        state.entries.insert(key.to_string(), entry);
        state.generation += 1;
    }

    /// Store `value` under `key` and write the file on the calling thread.
    /// Persistence failures are logged, never returned.
    pub fn insert(&self, key: &str, value: T) {
        self.store(key, value);
        let result = self
            .snapshot()
            .and_then(|snapshot| match snapshot {
                Some(snapshot) => write_snapshot(&self.written, &self.path, snapshot),
                None => Ok(()),
            });
        self.report(result);
    }

    /// Write pending changes to disk on the blocking pool. A clean or
    /// memory-only cache is left alone. Failures are logged, never returned.
    pub async fn flush(&self) {
        let snapshot = match self.snapshot() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return,
            Err(e) => return self.report(Err(e)),
        };

        let written = self.written.clone();
        let path = self.path.clone();
        match spawn_blocking(move || write_snapshot(&written, &path, snapshot)).await {
            Ok(result) => self.report(result),
            Err(e) => error!("Flushing cache {} failed: {}", self.name, e),
        }
    }

    fn snapshot(&self) -> Result<Option<Snapshot>, CacheError> {
        if self.is_memory_only() {
            return Ok(None);
        }

        let state = self.lock();
        if state.generation <= *lock(&self.written) {
            return Ok(None);
        }

        let json = serde_json::to_vec(&state.entries).map_err(|source| CacheError::Serialize {
            name: self.name.clone(),
            source,
        })?;
        Ok(Some(Snapshot {
            generation: state.generation,
            json,
        }))
    }

    fn report(&self, result: Result<(), CacheError>) {
        match result {
            Ok(()) => {}
            Err(e @ CacheError::Unavailable { .. }) => {
                self.memory_only.store(true, Ordering::Relaxed);
                warn!("{}; cache {} is now memory-only", e, self.name);
            }
            Err(e) => error!("{}", e),
        }
    }

    fn now(&self) -> f64 {
        (self.clock)().timestamp_millis() as f64 / 1000.0
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        lock(&self.state)
    }
}

fn lock<S>(mutex: &Mutex<S>) -> MutexGuard<'_, S> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Atomically replace the file at `path` with `snapshot`, unless a newer
/// generation is already there.
fn write_snapshot(written: &Mutex<u64>, path: &Path, snapshot: Snapshot) -> Result<(), CacheError> {
    let mut on_disk = lock(written);
    if snapshot.generation <= *on_disk {
        return Ok(());
    }

    let unavailable = |source: std::io::Error| CacheError::Unavailable {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(unavailable)?;
    let mut temp = NamedTempFile::new_in(dir).map_err(unavailable)?;
    temp.write_all(&snapshot.json).map_err(unavailable)?;
    temp.persist(path).map_err(|e| unavailable(e.error))?;

    *on_disk = snapshot.generation;
    debug!("Wrote {} ({} bytes)", path.display(), snapshot.json.len());
    Ok(())
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<Entries<T>, CacheError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
        Err(source) => {
            return Err(CacheError::Unavailable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| CacheError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Both caches the collection pipeline needs. Built once at startup and
/// shared behind an `Arc`.
pub struct CacheService {
    repos: Cache<Vec<ContributorRecord>>,
    locations: Cache<Option<String>>,
    repo_ttl: Duration,
}

impl CacheService {
    pub fn open(dir: &Path) -> Self {
        let service = Self {
            repos: Cache::open("repos", dir.join(REPO_CACHE_FILE)),
            locations: Cache::open("locations", dir.join(LOCATION_CACHE_FILE)),
            repo_ttl: DEFAULT_REPO_TTL,
        };
        info!(
            "Cache directory {} ({} repos, {} locations)",
            dir.display(),
            service.repos.len(),
            service.locations.len()
        );
        service
    }

    pub fn with_repo_ttl(mut self, ttl: Duration) -> Self {
        self.repo_ttl = ttl;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.repos = self.repos.with_clock(clock.clone());
        self.locations = self.locations.with_clock(clock);
        self
    }

    pub fn repos(&self) -> &Cache<Vec<ContributorRecord>> {
        &self.repos
    }

    pub fn locations(&self) -> &Cache<Option<String>> {
        &self.locations
    }

    pub fn repo_ttl(&self) -> Duration {
        self.repo_ttl
    }
}
