// ─── Profile Files ───
// Reads and writes profile documents as UTF-8 JSON.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::error::{ProfileError, ProfileResult};

/// Parse a JSON document (profile, install profile, version manifest).
pub fn read_from_path<T: DeserializeOwned>(path: &Path) -> ProfileResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|e| ProfileError::io(path, e))?;
    let document = serde_json::from_str(&raw)?;
    debug!("Loaded {:?}", path);
    Ok(document)
}

/// Serialize a document with four-space indentation, creating parent
/// directories as needed.
pub fn write_to_path<T: Serialize>(document: &T, path: &Path) -> ProfileResult<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ProfileError::io(parent, e))?;
    }
    std::fs::write(path, &buf).map_err(|e| ProfileError::io(path, e))?;

    info!("Wrote {:?} ({} bytes)", path, buf.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::version::{merge, Arguments, Library, Profile};
    use serde_json::json;

    #[test]
    fn write_then_read_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("versions/1.7.10/1.7.10.json");

        let profile = Profile::new("1.7.10", "t", "r", "release", "net.minecraft.client.main.Main")
            .with_minecraft_arguments("--username ${auth_player_name}")
            .with_libraries(vec![Library::new("com.mojang:realms:1.3.5").unwrap()]);
        write_to_path(&profile, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n    \"id\": \"1.7.10\""));

        let loaded: Profile = read_from_path(&path).unwrap();
        assert_eq!(loaded, profile);
        assert_eq!(loaded.libraries[0].version(), "1.3.5");
    }

    #[test]
    fn merge_documents_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let parent_path = dir.path().join("1.16.5.json");
        let child_path = dir.path().join("1.16.5-forge.json");
        std::fs::write(
            &parent_path,
            json!({
                "id": "1.16.5", "time": "t", "releaseTime": "r", "type": "release",
                "mainClass": "net.minecraft.client.main.Main",
                "arguments": {"game": ["--username", "${auth_player_name}"], "jvm": ["-cp", "${classpath}"]},
                "libraries": [{"name": "com.mojang:patchy:1.1"}]
            })
            .to_string(),
        )
        .unwrap();
        std::fs::write(
            &child_path,
            json!({
                "id": "1.16.5-forge-36.2.39", "time": "t2", "releaseTime": "r2", "type": "release",
                "mainClass": "cpw.mods.modlauncher.Launcher",
                "inheritsFrom": "1.16.5",
                "arguments": {"game": ["--launchTarget", "fmlclient"]},
                "libraries": [{"name": "cpw.mods:modlauncher:8.1.3"}]
            })
            .to_string(),
        )
        .unwrap();

        let mut base: Profile = read_from_path(&parent_path).unwrap();
        let overlay: Profile = read_from_path(&child_path).unwrap();
        merge(&mut base, &overlay).unwrap();

        assert_eq!(base.main_class, "cpw.mods.modlauncher.Launcher");
        assert_eq!(
            base.minecraft_arguments.as_deref(),
            Some("--username ${auth_player_name} --launchTarget fmlclient")
        );
        assert_eq!(base.libraries.len(), 2);
        assert_eq!(base.libraries[0].name, "cpw.mods:modlauncher:8.1.3");
    }

    #[test]
    fn legacy_overlay_arguments_survive_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.json");

        let mut base = Profile::new("1.12.2", "t", "r", "release", "net.minecraft.client.main.Main")
            .with_arguments(Arguments::new(vec![json!("--a")], vec![]));
        let overlay = Profile::default().with_minecraft_arguments("--tweak X");
        merge(&mut base, &overlay).unwrap();
        assert_eq!(base.minecraft_arguments.as_deref(), Some("--a --tweak X"));

        write_to_path(&base, &path).unwrap();
        let reloaded: Profile = read_from_path(&path).unwrap();

        assert_eq!(reloaded.minecraft_arguments, base.minecraft_arguments);
        assert_eq!(reloaded.arguments, base.arguments);
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: ProfileResult<Profile> = read_from_path(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ProfileError::Io { .. })));
    }

    #[test]
    fn read_malformed_library_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"id":"x","time":"t","releaseTime":"r","type":"release","mainClass":"m","libraries":[{"name":"bad"}]}"#,
        )
        .unwrap();

        let result: ProfileResult<Profile> = read_from_path(&path);
        match result {
            Err(ProfileError::Json(e)) => assert!(e.to_string().contains("Invalid library coordinate")),
            other => panic!("expected JSON error, got {other:?}"),
        }
    }
}
