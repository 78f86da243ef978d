//! Profile store implementation
//!
//! Provides file-based profile persistence with create-only writes.

use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the profile root directory
pub const CONFIG_DIR_ENV: &str = "E3DB_CONFIG_DIR";

/// File name of a profile inside its directory
pub const PROFILE_FILE: &str = "e3db.json";

/// Human-readable profile name, `(default)` for the empty selector
pub fn display_name(profile: &str) -> &str {
    if profile.is_empty() {
        "(default)"
    } else {
        profile
    }
}

/// Store for credential profiles rooted at one directory
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create a store at `$E3DB_CONFIG_DIR`, falling back to `~/.tozny`
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::new(dir));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| Error::config("Could not determine home directory"))?;
        Ok(Self::new(home.join(".tozny")))
    }

    /// Path of the profile file for a selector
    pub fn path_for(&self, profile: &str) -> Result<PathBuf> {
        if profile.is_empty() {
            return Ok(self.root.join(PROFILE_FILE));
        }

        validate_name(profile)?;
        Ok(self.root.join(profile).join(PROFILE_FILE))
    }

    /// Check whether a profile has been saved
    pub fn exists(&self, profile: &str) -> bool {
        self.path_for(profile).is_ok_and(|path| path.exists())
    }

    /// Load a profile's configuration
    pub fn load(&self, profile: &str) -> Result<ClientConfig> {
        let path = self.path_for(profile)?;
        debug!("Loading profile {} from {}", display_name(profile), path.display());

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ProfileNotFound {
                    name: display_name(profile).to_string(),
                });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        ClientConfig::from_json(&contents)
            .with_context(|| format!("Invalid profile file {}", path.display()))
    }

    /// Save a new profile, failing if one already exists
    ///
    /// The file is created exclusively; `AlreadyExists` here is the
    /// authoritative conflict signal even if an earlier existence check
    /// passed.
    pub fn save(&self, profile: &str, config: &ClientConfig) -> Result<PathBuf> {
        let path = self.path_for(profile)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(config)?;

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = match options.open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::ProfileExists {
                    name: display_name(profile).to_string(),
                });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        write_or_remove(&path, || {
            file.write_all(contents.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()
        })?;

        debug!("Saved profile {} to {}", display_name(profile), path.display());
        Ok(path)
    }
}

/// Run `write` against a freshly created file, deleting the file on failure
///
/// A partial profile would block every later save of the same name.
pub(super) fn write_or_remove(path: &Path, write: impl FnOnce() -> io::Result<()>) -> Result<()> {
    write().map_err(|e| {
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("Could not remove partial profile {}: {remove_err}", path.display());
        }
        Error::Io(e)
    })
}

/// Reject names that would escape the store root
fn validate_name(profile: &str) -> Result<()> {
    let mut components = Path::new(profile).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !profile.contains(['/', '\\']) => Ok(()),
        _ => Err(Error::invalid_profile(
            profile,
            "must be a single path component",
        )),
    }
}
