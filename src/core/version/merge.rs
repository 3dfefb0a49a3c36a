// ─── Profile Merge ───
// Combines a parent profile with an inheriting overlay (`inheritsFrom`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::profile::{Arguments, Profile, ProfileField};
use crate::core::error::{ProfileError, ProfileResult};

/// What to do when the overlay carries structured `arguments` but the
/// base profile has none to extend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingArgumentsPolicy {
    /// Fail with [`ProfileError::UndefinedMergeTarget`] before touching the base.
    #[default]
    Reject,
    /// Convert the base's legacy argument string (if any) into structured
    /// arguments, then extend those.
    Initialize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MergeOptions {
    pub missing_arguments: MissingArgumentsPolicy,
}

type Combine = fn(&mut Profile, &Profile);

/// Keys whose combination cannot be read off their container type.
/// Checked in order, before the structural fallback.
struct MergeRule {
    key: &'static str,
    combine: Combine,
}

const FIELD_RULES: &[MergeRule] = &[
    MergeRule {
        key: "libraries",
        combine: merge_libraries,
    },
    MergeRule {
        key: "arguments",
        combine: extend_arguments,
    },
    MergeRule {
        key: "minecraftArguments",
        combine: merge_minecraft_arguments,
    },
];

/// Merge `overlay` into `base` with default options.
pub fn merge(base: &mut Profile, overlay: &Profile) -> ProfileResult<()> {
    merge_with(base, overlay, &MergeOptions::default())
}

/// Merge `overlay` into `base`, which becomes the combined profile.
///
/// For every field present on the overlay:
/// - `libraries`: union keyed by name, overlay entries first and winning
///   on collision, then base entries not named by the overlay.
/// - `arguments`: overlay game/jvm entries appended to the base's.
/// - `minecraftArguments`: appended when the base has structured
///   arguments, replaced otherwise.
/// - other sequences are appended, other maps updated (overlay wins),
///   everything else replaced.
///
/// On error the base is left untouched.
pub fn merge_with(
    base: &mut Profile,
    overlay: &Profile,
    options: &MergeOptions,
) -> ProfileResult<()> {
    if overlay.arguments.is_some() && base.arguments.is_none() {
        match options.missing_arguments {
            MissingArgumentsPolicy::Reject => {
                return Err(ProfileError::UndefinedMergeTarget { field: "arguments" });
            }
            MissingArgumentsPolicy::Initialize => {
                let legacy = base.minecraft_arguments.as_deref().unwrap_or_default();
                debug!("Initializing structured arguments of {} from legacy form", base.id);
                base.arguments = Some(Arguments::from_legacy(legacy));
            }
        }
    }

    let base_libraries = base.libraries.len();
    let fields = overlay.present_fields();

    for field in &fields {
        match FIELD_RULES.iter().find(|rule| rule.key == field.key()) {
            Some(rule) => (rule.combine)(base, overlay),
            None => merge_structural(base, overlay, field),
        }
        debug!("Merged field `{}`", field.key());
    }

    base.sync_minecraft_arguments();

    info!(
        "Merged profile {} ({} fields): {} + {} libraries -> {}",
        base.id,
        fields.len(),
        base_libraries,
        overlay.libraries.len(),
        base.libraries.len()
    );
    Ok(())
}

/// Resolve a child profile against its parent, producing a standalone
/// profile with no `inheritsFrom`.
pub fn inherit(
    parent: Profile,
    child: &Profile,
    options: &MergeOptions,
) -> ProfileResult<Profile> {
    if let Some(expected) = &child.inherits_from {
        if *expected != parent.id {
            return Err(ProfileError::InheritanceMismatch {
                expected: expected.clone(),
                found: parent.id,
            });
        }
    }

    let mut merged = parent;
    merge_with(&mut merged, child, options)?;
    merged.inherits_from = None;
    Ok(merged)
}

impl Profile {
    /// Merge `overlay` into this profile with default options.
    pub fn merge(&mut self, overlay: &Profile) -> ProfileResult<()> {
        merge(self, overlay)
    }
}

// ─── Field rules ───

fn merge_libraries(base: &mut Profile, overlay: &Profile) {
    let mut seen = HashSet::new();
    let base_libraries = std::mem::take(&mut base.libraries);

    base.libraries = overlay
        .libraries
        .iter()
        .cloned()
        .chain(base_libraries)
        .filter(|lib| seen.insert(lib.name.clone()))
        .collect();
}

fn extend_arguments(base: &mut Profile, overlay: &Profile) {
    let Some(extra) = &overlay.arguments else {
        return;
    };
    let target = base.arguments.get_or_insert_with(Arguments::default);
    target.game.extend(extra.game.iter().cloned());
    target.jvm.extend(extra.jvm.iter().cloned());
}

fn merge_minecraft_arguments(base: &mut Profile, overlay: &Profile) {
    let Some(extra) = &overlay.minecraft_arguments else {
        return;
    };

    match base.arguments.as_mut() {
        Some(arguments) => {
            // A structured overlay was already appended by the `arguments` rule.
            if overlay.arguments.is_none() {
                arguments.game.extend(Arguments::from_legacy(extra).game);
            }
            let current = base.minecraft_arguments.get_or_insert_with(String::new);
            if !extra.is_empty() {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(extra);
            }
        }
        None => base.minecraft_arguments = Some(extra.clone()),
    }
}

// ─── Structural fallback ───

fn merge_structural(base: &mut Profile, overlay: &Profile, field: &ProfileField) {
    match field {
        ProfileField::Id => base.id.clone_from(&overlay.id),
        ProfileField::Time => base.time.clone_from(&overlay.time),
        ProfileField::ReleaseTime => base.release_time.clone_from(&overlay.release_time),
        ProfileField::Type => base.version_type.clone_from(&overlay.version_type),
        ProfileField::MainClass => base.main_class.clone_from(&overlay.main_class),
        ProfileField::Logging => base
            .logging
            .extend(overlay.logging.iter().map(|(k, v)| (k.clone(), v.clone()))),
        ProfileField::MinimumLauncherVersion => base
            .minimum_launcher_version
            .clone_from(&overlay.minimum_launcher_version),
        // Combined by FIELD_RULES only.
        ProfileField::Libraries | ProfileField::Arguments | ProfileField::MinecraftArguments => {}
        ProfileField::Jar => base.jar.clone_from(&overlay.jar),
        ProfileField::InheritsFrom => base.inherits_from.clone_from(&overlay.inherits_from),
        ProfileField::AssetIndex => {
            if let Some(value) = &overlay.asset_index {
                merge_optional_value(&mut base.asset_index, value);
            }
        }
        ProfileField::Downloads => {
            if let Some(value) = &overlay.downloads {
                merge_optional_value(&mut base.downloads, value);
            }
        }
        ProfileField::Assets => base.assets.clone_from(&overlay.assets),
        ProfileField::Extra(key) => {
            if let Some(value) = overlay.extra.get(key) {
                match base.extra.get_mut(key) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        base.extra.insert(key.clone(), value.clone());
                    }
                }
            }
        }
    }
}

/// Append arrays, update objects, replace anything else.
fn merge_value(base: &mut serde_json::Value, overlay: &serde_json::Value) {
    use serde_json::Value;

    match (base, overlay) {
        (Value::Array(items), Value::Array(more)) => items.extend(more.iter().cloned()),
        (Value::Object(map), Value::Object(more)) => {
            for (key, value) in more {
                map.insert(key.clone(), value.clone());
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

fn merge_optional_value(base: &mut Option<serde_json::Value>, overlay: &serde_json::Value) {
    match base {
        Some(slot) => merge_value(slot, overlay),
        None => *base = Some(overlay.clone()),
    }
}
