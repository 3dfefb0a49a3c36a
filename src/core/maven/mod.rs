mod artifact;

pub use artifact::{CoordinateKind, MavenCoordinate};

/// Mojang's library repository.
pub const MOJANG_LIBRARIES: &str = "https://libraries.minecraft.net";
