pub mod install_profile;
pub mod io;
pub mod libraries;
pub mod library;
pub mod manifest;
pub mod merge;
pub mod profile;
pub mod stamp;

pub use install_profile::InstallProfile;
pub use io::{read_from_path, write_to_path};
pub use libraries::{build_downloads, check_source};
pub use library::{Library, LibraryArtifactDownload, LibraryDownloads};
pub use manifest::{LatestVersions, VersionEntry, VersionManifest};
pub use merge::{inherit, merge, merge_with, MergeOptions, MissingArgumentsPolicy};
pub use profile::{Arguments, Profile, ProfileField};
pub use stamp::{next_package_version, next_package_version_now};
