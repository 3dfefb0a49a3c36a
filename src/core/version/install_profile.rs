// ─── Install Profile ───
// `install_profile.json` shipped inside Forge installers (1.13+).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::library::Library;
use crate::core::maven::MavenCoordinate;

/// Client jars the installer derives from the vanilla client.
const CLIENT_VARIANTS: [&str; 3] = ["extra", "slim", "srg"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub libraries: Vec<Library>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl InstallProfile {
    /// Client-side MCP version from `data.MCP_VERSION.client`, unquoted.
    pub fn mcp_client_version(&self) -> Option<String> {
        let raw = self
            .data
            .as_ref()?
            .get("MCP_VERSION")?
            .get("client")?
            .as_str()?;
        Some(raw.trim_matches(|c| c == '\'' || c == '"').to_string())
    }

    /// The processed client jars (`extra`, `slim`, `srg`) the installer
    /// writes under `net/minecraft/client/<vanilla>-<mcp>/`, as
    /// client-required libraries. Empty without MCP data.
    pub fn mcp_client_libraries(&self, vanilla_version: &str) -> Vec<Library> {
        let Some(mcp) = self.mcp_client_version() else {
            return vec![];
        };

        let version = format!("{}-{}", vanilla_version, mcp);
        debug!("Deriving MCP client libraries for {}", version);

        CLIENT_VARIANTS
            .iter()
            .map(|tag| {
                let coordinate = MavenCoordinate::new("net.minecraft", "client", version.as_str())
                    .with_tag(Some((*tag).to_string()));
                Library::from_coordinate(coordinate).with_client_required(true)
            })
            .collect()
    }
}
