// ─── Version Profile ───
// The launch descriptor of one version: entry point, arguments, libraries.

use serde::{Deserialize, Serialize};

use super::library::Library;

/// A version profile (Mojang version JSON, or a loader overlay of one).
///
/// `minecraft_arguments` is derived: whenever structured `arguments` are
/// present it holds the plain-string game arguments joined with spaces.
/// Required text fields left empty count as absent when merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "ProfileSerde", rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub time: String,
    pub release_time: String,
    #[serde(rename = "type")]
    pub version_type: String,
    pub main_class: String,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub logging: serde_json::Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Arguments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minecraft_arguments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_launcher_version: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub libraries: Vec<Library>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherits_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_index: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
    /// Keys this model does not know about.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileSerde {
    id: String,
    time: String,
    release_time: String,
    #[serde(rename = "type")]
    version_type: String,
    #[serde(alias = "mainEntryPoint")]
    main_class: String,
    // 1.7.10 profiles carry no logging section; some write `null`.
    #[serde(default)]
    logging: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    arguments: Option<Arguments>,
    #[serde(default, alias = "flattenedArguments")]
    minecraft_arguments: Option<String>,
    #[serde(default)]
    minimum_launcher_version: Option<serde_json::Number>,
    #[serde(default)]
    libraries: Vec<Library>,
    #[serde(default)]
    jar: Option<String>,
    #[serde(default)]
    inherits_from: Option<String>,
    #[serde(default)]
    asset_index: Option<serde_json::Value>,
    #[serde(default)]
    downloads: Option<serde_json::Value>,
    #[serde(default)]
    assets: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl From<ProfileSerde> for Profile {
    fn from(raw: ProfileSerde) -> Self {
        let mut profile = Profile {
            id: raw.id,
            time: raw.time,
            release_time: raw.release_time,
            version_type: raw.version_type,
            main_class: raw.main_class,
            logging: raw.logging.unwrap_or_default(),
            arguments: raw.arguments,
            minecraft_arguments: raw.minecraft_arguments,
            minimum_launcher_version: raw.minimum_launcher_version,
            libraries: raw.libraries,
            jar: raw.jar,
            inherits_from: raw.inherits_from,
            asset_index: raw.asset_index,
            downloads: raw.downloads,
            assets: raw.assets,
            extra: raw.extra,
        };
        profile.sync_minecraft_arguments();
        profile
    }
}

/// Structured launch arguments (1.13+).
///
/// Entries are either plain strings or conditional objects
/// (`{"rules": [...], "value": ...}`), kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Arguments {
    #[serde(default)]
    pub game: Vec<serde_json::Value>,
    #[serde(default)]
    pub jvm: Vec<serde_json::Value>,
}

impl Arguments {
    pub fn new(game: Vec<serde_json::Value>, jvm: Vec<serde_json::Value>) -> Self {
        Self { game, jvm }
    }

    /// Structured form of a legacy space-separated argument string.
    pub fn from_legacy(minecraft_arguments: &str) -> Self {
        Self {
            game: minecraft_arguments
                .split_whitespace()
                .map(|arg| serde_json::Value::String(arg.to_string()))
                .collect(),
            jvm: Vec::new(),
        }
    }

    /// Plain-string game arguments joined by a space; conditional entries
    /// are skipped.
    pub fn flatten_game(&self) -> String {
        self.game
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A top-level profile key, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileField {
    Id,
    Time,
    ReleaseTime,
    Type,
    MainClass,
    Logging,
    Arguments,
    MinecraftArguments,
    MinimumLauncherVersion,
    Libraries,
    Jar,
    InheritsFrom,
    AssetIndex,
    Downloads,
    Assets,
    /// A pass-through key outside the model.
    Extra(String),
}

impl ProfileField {
    /// The JSON key of this field.
    pub fn key(&self) -> &str {
        match self {
            ProfileField::Id => "id",
            ProfileField::Time => "time",
            ProfileField::ReleaseTime => "releaseTime",
            ProfileField::Type => "type",
            ProfileField::MainClass => "mainClass",
            ProfileField::Logging => "logging",
            ProfileField::Arguments => "arguments",
            ProfileField::MinecraftArguments => "minecraftArguments",
            ProfileField::MinimumLauncherVersion => "minimumLauncherVersion",
            ProfileField::Libraries => "libraries",
            ProfileField::Jar => "jar",
            ProfileField::InheritsFrom => "inheritsFrom",
            ProfileField::AssetIndex => "assetIndex",
            ProfileField::Downloads => "downloads",
            ProfileField::Assets => "assets",
            ProfileField::Extra(key) => key,
        }
    }
}

impl Profile {
    pub fn new(
        id: impl Into<String>,
        time: impl Into<String>,
        release_time: impl Into<String>,
        version_type: impl Into<String>,
        main_class: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            release_time: release_time.into(),
            version_type: version_type.into(),
            main_class: main_class.into(),
            ..Self::default()
        }
    }

    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = Some(arguments);
        self.sync_minecraft_arguments();
        self
    }

    /// Set the legacy argument string. Ignored when structured arguments
    /// are present, since those define it.
    pub fn with_minecraft_arguments(mut self, minecraft_arguments: impl Into<String>) -> Self {
        self.minecraft_arguments = Some(minecraft_arguments.into());
        self.sync_minecraft_arguments();
        self
    }

    pub fn with_libraries(mut self, libraries: Vec<Library>) -> Self {
        self.libraries = libraries;
        self
    }

    pub fn with_inherits_from(mut self, parent: impl Into<String>) -> Self {
        self.inherits_from = Some(parent.into());
        self
    }

    /// Recompute `minecraft_arguments` from structured arguments, if any.
    pub fn sync_minecraft_arguments(&mut self) {
        if let Some(arguments) = &self.arguments {
            self.minecraft_arguments = Some(arguments.flatten_game());
        }
    }

    /// Fields that carry a value, in declaration order followed by
    /// pass-through keys.
    pub fn present_fields(&self) -> Vec<ProfileField> {
        let mut fields = Vec::new();
        let mut push = |present: bool, field: ProfileField| {
            if present {
                fields.push(field);
            }
        };

        push(!self.id.is_empty(), ProfileField::Id);
        push(!self.time.is_empty(), ProfileField::Time);
        push(!self.release_time.is_empty(), ProfileField::ReleaseTime);
        push(!self.version_type.is_empty(), ProfileField::Type);
        push(!self.main_class.is_empty(), ProfileField::MainClass);
        push(!self.logging.is_empty(), ProfileField::Logging);
        push(self.arguments.is_some(), ProfileField::Arguments);
        push(self.minecraft_arguments.is_some(), ProfileField::MinecraftArguments);
        push(
            self.minimum_launcher_version.is_some(),
            ProfileField::MinimumLauncherVersion,
        );
        push(!self.libraries.is_empty(), ProfileField::Libraries);
        push(self.jar.is_some(), ProfileField::Jar);
        push(self.inherits_from.is_some(), ProfileField::InheritsFrom);
        push(self.asset_index.is_some(), ProfileField::AssetIndex);
        push(self.downloads.is_some(), ProfileField::Downloads);
        push(self.assets.is_some(), ProfileField::Assets);

        fields.extend(self.extra.keys().cloned().map(ProfileField::Extra));
        fields
    }

    /// Find a library by exact name.
    pub fn library(&self, name: &str) -> Option<&Library> {
        self.libraries.iter().find(|lib| lib.name == name)
    }

    /// Game arguments as separate tokens, from whichever form is present.
    pub fn plain_game_args(&self) -> Vec<String> {
        match (&self.arguments, &self.minecraft_arguments) {
            (Some(args), _) => args
                .game
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::to_string)
                .collect(),
            (None, Some(legacy)) => legacy.split_whitespace().map(str::to_string).collect(),
            (None, None) => vec![],
        }
    }
}
