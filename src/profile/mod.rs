//! Profile storage module
//!
//! Handles where credential profiles live on disk and how they are read
//! and written.
//!
//! # Layout
//!
//! ```text
//! ~/.tozny/                 # or $E3DB_CONFIG_DIR
//! ├── e3db.json             # default profile
//! └── <name>/
//!     └── e3db.json         # named profile
//! ```
//!
//! Saving never overwrites: the profile file is opened create-only, so two
//! racing registrations for the same profile cannot both persist.

mod store;

pub use store::{display_name, ProfileStore, CONFIG_DIR_ENV, PROFILE_FILE};

#[cfg(test)]
mod tests;
