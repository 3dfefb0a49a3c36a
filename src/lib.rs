pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::error::{ProfileError, ProfileResult};
pub use crate::core::maven::{CoordinateKind, MavenCoordinate};
pub use crate::core::version::{
    build_downloads, check_source, inherit, merge, merge_with, Arguments, InstallProfile, Library, LibraryArtifactDownload,
    LibraryDownloads, MergeOptions, MissingArgumentsPolicy, Profile, ProfileField,
    VersionManifest,
};

/// Install a structured logging subscriber for embedders and tools.
///
/// Honors `RUST_LOG`; defaults to `info,version_profile=debug`. Calling it
/// again after a subscriber is installed does nothing.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,version_profile=debug")),
        )
        .try_init();
}
