use std::path::PathBuf;
use thiserror::Error;

/// Central error type for profile handling.
/// Every module returns `Result<T, ProfileError>`.
#[derive(Debug, Error)]
pub enum ProfileError {
    // ── Coordinates ─────────────────────────────────────
    #[error("Invalid library coordinate: {0}")]
    InvalidCoordinateFormat(String),

    // ── Merge ───────────────────────────────────────────
    #[error("Cannot merge `{field}`: base profile has no value to extend")]
    UndefinedMergeTarget { field: &'static str },

    #[error("Profile inherits from {expected}, but parent is {found}")]
    InheritanceMismatch { expected: String, found: String },

    // ── Libraries ───────────────────────────────────────
    #[error("Library {0} is not required and has no download")]
    UnsourcedLibrary(String),

    #[error("Library file is missing: {0:?}")]
    MissingLibraryFile(PathBuf),

    #[error("Unsupported repository URL: {0}")]
    UnsupportedRepositoryUrl(String),

    // ── Package versions ────────────────────────────────
    #[error("Invalid package version: {0}")]
    InvalidPackageVersion(String),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type ProfileResult<T> = Result<T, ProfileError>;

impl ProfileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProfileError::Io {
            path: path.into(),
            source,
        }
    }
}
