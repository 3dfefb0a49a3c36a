// ─── Version Profile Core ───
// Version profiles and how inheriting profiles combine.
//
// Architecture:
//   core/
//     maven/    - Library coordinates and their repository paths
//     version/  - Profiles, libraries, merging, install profiles, files
//     error     - Crate-wide error type

pub mod error;
pub mod maven;
pub mod version;
