// ─── Library Sources ───
// Checks where each library of a profile comes from and fills in artifact
// downloads from a local `libraries/` tree.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::library::{Library, LibraryArtifactDownload, LibraryDownloads};
use crate::core::error::{ProfileError, ProfileResult};

/// Split Forge jars published next to the universal entry, in insertion order.
const FORGE_SPLIT_TAGS: [&str; 2] = ["universal", "client"];

/// Verify that every library has a source.
///
/// A library is sourced when it is client or server required (its file must
/// exist under `libraries_root`), when it carries a download artifact or
/// classifiers, or when it is the Forge universal jar.
pub fn check_source(libraries: &[Library], libraries_root: &Path) -> ProfileResult<()> {
    for library in libraries {
        if library.is_required() {
            let file = libraries_root.join(library.path());
            if !file.exists() {
                return Err(ProfileError::MissingLibraryFile(file));
            }
        } else if let Some(downloads) = &library.downloads {
            if downloads.is_empty() {
                return Err(ProfileError::UnsourcedLibrary(library.name.clone()));
            }
        } else if !library.is_forge_universal() {
            return Err(ProfileError::UnsourcedLibrary(library.name.clone()));
        }
    }
    Ok(())
}

/// Attach artifact downloads served from `base_url` to the libraries whose
/// files live under `libraries_root`.
///
/// Required libraries and the Forge universal entry get a download for
/// their own file. When the Forge jar is split (`-universal` and `-server`
/// jars beside it), `<name>-universal` and `<name>-client` libraries are
/// inserted right after it, each with its own download.
pub fn build_downloads(
    libraries: &mut Vec<Library>,
    libraries_root: &Path,
    base_url: &str,
) -> ProfileResult<()> {
    check_source(libraries, libraries_root)?;

    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ProfileError::UnsupportedRepositoryUrl(base_url.to_string()));
    }

    let mut pos = 0;
    while pos < libraries.len() {
        let library = &libraries[pos];
        let required = library.is_required();
        if !required && !library.is_forge_universal() {
            pos += 1;
            continue;
        }

        let path = library.path();
        let file = libraries_root.join(&path);

        let mut inserted = Vec::new();
        if !required && has_split_forge_jars(library, libraries_root)? {
            for tag in FORGE_SPLIT_TAGS {
                let coordinate = library.coordinate().clone().with_tag(Some(tag.to_string()));
                let split_path = coordinate.local_path();
                let download = LibraryArtifactDownload::from_file(
                    &libraries_root.join(&split_path),
                    &split_path,
                    base_url,
                )?;
                inserted.push(
                    Library::with_coordinate(format!("{}-{}", library.name, tag), coordinate)
                        .with_downloads(LibraryDownloads::artifact(download)),
                );
            }
            info!("Split Forge jars found for {}", library.name);
        }

        if !file.exists() {
            return Err(ProfileError::MissingLibraryFile(file));
        }
        let download = LibraryArtifactDownload::from_file(&file, &path, base_url)?;
        libraries[pos].downloads = Some(LibraryDownloads::artifact(download));
        debug!("Attached download to {}", libraries[pos].name);

        pos += 1;
        for library in inserted {
            libraries.insert(pos, library);
            pos += 1;
        }
    }

    Ok(())
}

/// Whether the Forge jar at `library` ships as separate universal, server
/// and client jars. Universal and server without client is an error.
fn has_split_forge_jars(library: &Library, libraries_root: &Path) -> ProfileResult<bool> {
    let split = |tag: &str| -> PathBuf {
        let coordinate = library.coordinate().clone().with_tag(Some(tag.to_string()));
        libraries_root.join(coordinate.local_path())
    };

    if !(split("universal").exists() && split("server").exists()) {
        return Ok(false);
    }

    let client = split("client");
    if !client.exists() {
        return Err(ProfileError::MissingLibraryFile(client));
    }
    Ok(true)
}
