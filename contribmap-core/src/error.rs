use std::path::PathBuf;
use thiserror::Error;

/// The map template could not be loaded. Fatal at startup.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed template SVG: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Template root must be <svg>, found <{0}>")]
    NotSvg(String),

    #[error("Invalid template viewBox '{0}'")]
    InvalidViewBox(String),

    #[error("Template contains no drawable shapes")]
    Empty,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template bounds {width}x{height} cannot be scaled into the viewport")]
    InvalidBounds { width: f64, height: f64 },

    #[error("Failed to serialize SVG: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Render task failed: {0}")]
    Task(String),
}

/// Cache persistence failures. None of these fail a request.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Storage is not usable (read-only filesystem, missing permissions).
    /// The cache keeps working in memory.
    #[error("Cache storage unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory state could not be encoded. Indicates a bug.
    #[error("Failed to serialize cache {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The file on disk could not be decoded.
    #[error("Corrupt cache file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Failed to fetch contributors: {0}")]
    Source(#[from] contribmap_source::SourceError),
}
