// ─── Library Entry ───
// A dependency record of a version profile, keyed by its `name`.

use std::hash::{Hash, Hasher};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use tracing::debug;

use crate::core::error::{ProfileError, ProfileResult};
use crate::core::maven::MavenCoordinate;

/// A library listed in a version profile.
///
/// Two libraries are the same library when their `name`s are equal, no
/// matter how the rest of the record differs. The coordinate is parsed
/// from `name` once, at construction, unless one was attached explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LibrarySerde")]
pub struct Library {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksums: Option<Vec<String>>,
    #[serde(rename = "serverreq", default, skip_serializing_if = "Option::is_none")]
    pub server_required: Option<bool>,
    #[serde(rename = "clientreq", default, skip_serializing_if = "Option::is_none")]
    pub client_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<LibraryDownloads>,
    /// Applicability rules, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<serde_json::Value>>,
    /// Keys this model does not know about.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
    #[serde(skip)]
    coordinate: MavenCoordinate,
}

#[derive(Debug, Deserialize)]
struct LibrarySerde {
    name: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    checksums: Option<Vec<String>>,
    #[serde(default)]
    serverreq: Option<bool>,
    #[serde(default)]
    clientreq: Option<bool>,
    #[serde(default)]
    downloads: Option<LibraryDownloads>,
    #[serde(default)]
    rules: Option<Vec<serde_json::Value>>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<LibrarySerde> for Library {
    type Error = ProfileError;

    fn try_from(value: LibrarySerde) -> Result<Self, Self::Error> {
        let mut library = Library::new(value.name)?;
        library.url = value.url;
        library.checksums = value.checksums;
        library.server_required = value.serverreq;
        library.client_required = value.clientreq;
        library.downloads = value.downloads;
        library.rules = value.rules;
        library.extra = value.extra;
        Ok(library)
    }
}

impl Library {
    /// Create a library from its `group:artifact:version[:tag]` name.
    pub fn new(name: impl Into<String>) -> ProfileResult<Self> {
        let name = name.into();
        let coordinate = MavenCoordinate::parse(&name)?;
        Ok(Self::with_coordinate(name, coordinate))
    }

    /// Create a library with an explicitly attached coordinate; `name` is
    /// not parsed.
    pub fn with_coordinate(name: impl Into<String>, coordinate: MavenCoordinate) -> Self {
        Self {
            name: name.into(),
            url: None,
            checksums: None,
            server_required: None,
            client_required: None,
            downloads: None,
            rules: None,
            extra: serde_json::Map::new(),
            coordinate,
        }
    }

    /// Create a library named after the coordinate's display form.
    pub fn from_coordinate(coordinate: MavenCoordinate) -> Self {
        Self::with_coordinate(coordinate.to_string(), coordinate)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_checksums(mut self, checksums: Vec<String>) -> Self {
        self.checksums = Some(checksums);
        self
    }

    pub fn with_server_required(mut self, required: bool) -> Self {
        self.server_required = Some(required);
        self
    }

    pub fn with_client_required(mut self, required: bool) -> Self {
        self.client_required = Some(required);
        self
    }

    pub fn with_downloads(mut self, downloads: LibraryDownloads) -> Self {
        self.downloads = Some(downloads);
        self
    }

    pub fn with_rules(mut self, rules: Vec<serde_json::Value>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn coordinate(&self) -> &MavenCoordinate {
        &self.coordinate
    }

    pub fn group(&self) -> &str {
        &self.coordinate.group
    }

    pub fn artifact(&self) -> &str {
        &self.coordinate.artifact
    }

    pub fn version(&self) -> &str {
        &self.coordinate.version
    }

    pub fn tag(&self) -> Option<&str> {
        self.coordinate.tag.as_deref()
    }

    /// Path of the library file relative to a libraries root.
    pub fn path(&self) -> String {
        self.coordinate.local_path()
    }

    /// Whether the library is required on either side.
    pub fn is_required(&self) -> bool {
        self.client_required == Some(true) || self.server_required == Some(true)
    }

    pub fn is_forge_universal(&self) -> bool {
        self.group() == "net.minecraftforge" && self.artifact() == "forge"
    }
}

impl PartialEq for Library {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Library {}

impl Hash for Library {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

// ─── Downloads ───

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LibraryDownloads {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<LibraryArtifactDownload>,
    /// Platform specific variants, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifiers: Option<serde_json::Value>,
}

impl LibraryDownloads {
    pub fn artifact(artifact: LibraryArtifactDownload) -> Self {
        Self {
            artifact: Some(artifact),
            classifiers: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.artifact.is_none() && self.classifiers.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryArtifactDownload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl LibraryArtifactDownload {
    /// Describe a file on disk: size, SHA-1 and its URL under `base_url`.
    ///
    /// `relative_path` is the forward-slash path published under the
    /// repository root, usually [`Library::path`].
    pub fn from_file(file: &Path, relative_path: &str, base_url: &str) -> ProfileResult<Self> {
        let bytes = std::fs::read(file).map_err(|e| ProfileError::io(file, e))?;

        let mut hasher = Sha1::new();
        hasher.update(&bytes);
        let sha1 = hex::encode(hasher.finalize());

        let relative_path = relative_path.trim_start_matches('/');
        let url = format!("{}/{}", base_url.trim_end_matches('/'), relative_path);

        debug!("Described artifact {:?} ({} bytes, sha1 {})", file, bytes.len(), sha1);

        Ok(Self {
            size: Some(bytes.len() as u64),
            sha1: Some(sha1),
            path: Some(relative_path.to_string()),
            url: Some(url),
        })
    }
}
