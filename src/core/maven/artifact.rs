use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{ProfileError, ProfileResult};

/// File flavour a coordinate resolves to.
///
/// The suffix belongs to the kind, not to the coordinate fields, so the
/// same `group:artifact:version` can point at a jar or at a text sidecar.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateKind {
    #[default]
    Jar,
    Text,
}

impl CoordinateKind {
    pub fn suffix(self) -> &'static str {
        match self {
            CoordinateKind::Jar => ".jar",
            CoordinateKind::Text => ".txt",
        }
    }
}

/// A parsed library coordinate.
///
/// Supported formats:
///   `group:artifact:version`
///   `group:artifact:version:tag`
///
/// Equality and hashing cover the four coordinate fields; `kind` only
/// picks the file suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MavenCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub tag: Option<String>,
    #[serde(default)]
    pub kind: CoordinateKind,
}

impl MavenCoordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            tag: None,
            kind: CoordinateKind::Jar,
        }
    }

    /// Parse a coordinate string resolving to a jar.
    ///
    /// # Examples
    /// ```
    /// use version_profile::MavenCoordinate;
    ///
    /// let c = MavenCoordinate::parse("net.sf.jopt-simple:jopt-simple:5.0.4").unwrap();
    /// assert_eq!(c.group, "net.sf.jopt-simple");
    /// ```
    pub fn parse(coord: &str) -> ProfileResult<Self> {
        Self::parse_with_kind(coord, CoordinateKind::Jar)
    }

    /// Parse a coordinate string, resolving to files of the given kind.
    pub fn parse_with_kind(coord: &str, kind: CoordinateKind) -> ProfileResult<Self> {
        let parts: Vec<&str> = coord.split(':').collect();

        let (group, artifact, version, tag) = match parts.as_slice() {
            [group, artifact, version] => (*group, *artifact, *version, None),
            [group, artifact, version, tag] => (*group, *artifact, *version, Some(*tag)),
            _ => return Err(ProfileError::InvalidCoordinateFormat(coord.to_string())),
        };

        Ok(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
            tag: tag.map(str::to_string),
            kind,
        })
    }

    /// Group with dots turned into directories (`net/sf/jopt-simple`).
    pub fn group_path(&self) -> String {
        self.group.replace('.', "/")
    }

    /// `artifact-version[-tag]` plus the kind's suffix.
    ///
    /// An empty tag is skipped like a missing one.
    pub fn filename(&self) -> String {
        let stem = [
            Some(self.artifact.as_str()),
            Some(self.version.as_str()),
            self.tag.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

        format!("{}{}", stem, self.kind.suffix())
    }

    /// Forward-slash path relative to a libraries root:
    /// `<group_path>/<artifact>/<version>/<filename>`
    pub fn local_path(&self) -> String {
        [
            self.group_path(),
            self.artifact.clone(),
            self.version.clone(),
            self.filename(),
        ]
        .join("/")
    }

    /// Full URL of this file under the given repository base.
    pub fn url(&self, repo_base: &str) -> String {
        format!("{}/{}", repo_base.trim_end_matches('/'), self.local_path())
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_artifact(mut self, artifact: impl Into<String>) -> Self {
        self.artifact = artifact.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_kind(mut self, kind: CoordinateKind) -> Self {
        self.kind = kind;
        self
    }
}

impl PartialEq for MavenCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group
            && self.artifact == other.artifact
            && self.version == other.version
            && self.tag == other.tag
    }
}

impl Eq for MavenCoordinate {}

impl Hash for MavenCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
        self.artifact.hash(state);
        self.version.hash(state);
        self.tag.hash(state);
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) if !tag.is_empty() => write!(
                f,
                "{}:{}:{}:{}",
                self.group, self.artifact, self.version, tag
            ),
            _ => write!(f, "{}:{}:{}", self.group, self.artifact, self.version),
        }
    }
}

impl FromStr for MavenCoordinate {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_coordinate() {
        let c = MavenCoordinate::parse("net.sf.jopt-simple:jopt-simple:5.0.4").unwrap();
        assert_eq!(c.group, "net.sf.jopt-simple");
        assert_eq!(c.artifact, "jopt-simple");
        assert_eq!(c.version, "5.0.4");
        assert_eq!(c.tag, None);
        assert_eq!(c.kind, CoordinateKind::Jar);
    }

    #[test]
    fn parse_with_tag() {
        let c = MavenCoordinate::parse("org.lwjgl:lwjgl:3.3.3:natives-windows").unwrap();
        assert_eq!(c.tag, Some("natives-windows".to_string()));
    }

    #[test]
    fn parse_rejects_wrong_segment_counts() {
        for bad in ["", "a", "a:b", "a:b:c:d:e", "a:b:c:d:e:f"] {
            match MavenCoordinate::parse(bad) {
                Err(ProfileError::InvalidCoordinateFormat(s)) => assert_eq!(s, bad),
                other => panic!("expected InvalidCoordinateFormat for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn local_path_construction() {
        let c = MavenCoordinate::parse("org.example:foo:1.0").unwrap();
        assert_eq!(c.local_path(), "org/example/foo/1.0/foo-1.0.jar");

        let tagged = MavenCoordinate::parse("org.example:foo:1.0:natives").unwrap();
        assert_eq!(tagged.local_path(), "org/example/foo/1.0/foo-1.0-natives.jar");
    }

    #[test]
    fn text_kind_uses_txt_suffix() {
        let c = MavenCoordinate::parse_with_kind("org.example:foo:1.0", CoordinateKind::Text)
            .unwrap();
        assert_eq!(c.local_path(), "org/example/foo/1.0/foo-1.0.txt");
        assert_eq!(
            c.local_path(),
            MavenCoordinate::parse("org.example:foo:1.0")
                .unwrap()
                .with_kind(CoordinateKind::Text)
                .local_path()
        );
    }

    #[test]
    fn kind_does_not_affect_identity() {
        use std::collections::HashSet;

        let jar = MavenCoordinate::parse("org.example:foo:1.0").unwrap();
        let text =
            MavenCoordinate::parse_with_kind("org.example:foo:1.0", CoordinateKind::Text).unwrap();
        assert_eq!(jar, text);
        assert_ne!(jar.local_path(), text.local_path());

        let set: HashSet<_> = [jar, text].into_iter().collect();
        assert_eq!(set.len(), 1);

        let tagged = MavenCoordinate::parse("org.example:foo:1.0:natives").unwrap();
        assert_ne!(tagged, MavenCoordinate::parse("org.example:foo:1.0").unwrap());
    }

    #[test]
    fn local_path_is_deterministic() {
        let c = MavenCoordinate::parse("net.minecraft:client:1.16.5-20210115:srg").unwrap();
        assert_eq!(c.local_path(), c.clone().local_path());
    }

    #[test]
    fn empty_tag_adds_no_separator() {
        let c = MavenCoordinate::new("a.b", "c", "1").with_tag(Some(String::new()));
        assert_eq!(c.filename(), "c-1.jar");
        assert_eq!(c.to_string(), "a.b:c:1");
    }

    #[test]
    fn with_fields_preserve_the_rest() {
        let c = MavenCoordinate::parse("net.minecraftforge:forge:1.16.5-36.2.0").unwrap();
        let universal = c.clone().with_tag(Some("universal".into()));
        assert_eq!(universal.group, c.group);
        assert_eq!(universal.artifact, c.artifact);
        assert_eq!(universal.version, c.version);
        assert_eq!(
            universal.local_path(),
            "net/minecraftforge/forge/1.16.5-36.2.0/forge-1.16.5-36.2.0-universal.jar"
        );

        let bumped = c.with_version("1.16.5-36.2.39");
        assert_eq!(bumped.to_string(), "net.minecraftforge:forge:1.16.5-36.2.39");
    }

    #[test]
    fn url_trims_trailing_slash() {
        let c = MavenCoordinate::parse("a.b:c:1").unwrap();
        assert_eq!(c.url("https://repo.example/maven/"), "https://repo.example/maven/a/b/c/1/c-1.jar");
    }

    #[test]
    fn url_construction() {
        let c: MavenCoordinate = "net.sf.jopt-simple:jopt-simple:5.0.4".parse().unwrap();
        assert_eq!(
            c.url(crate::core::maven::MOJANG_LIBRARIES),
            "https://libraries.minecraft.net/net/sf/jopt-simple/jopt-simple/5.0.4/jopt-simple-5.0.4.jar"
        );
    }

    #[test]
    fn display_round_trips_name() {
        for name in ["a.b:c:1.0", "a.b:c:1.0:natives-linux"] {
            assert_eq!(MavenCoordinate::parse(name).unwrap().to_string(), name);
        }
    }
}
