use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "actilog";

/// Resolves platform-specific application data paths (config, database,
/// PID file). The daily spreadsheet folders are user-visible and configured
/// separately, see [`crate::libs::config::StorageConfig`].
#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// The login name used to key daily store files.
pub fn login_name() -> String {
    var("USERNAME").or_else(|_| var("USER")).unwrap_or_else(|_| "user".to_string())
}

/// The user's Documents folder, the default parent of the activity and
/// backup directories.
pub fn documents_dir() -> PathBuf {
    let home = match OS {
        "windows" => var("USERPROFILE").unwrap_or_else(|_| ".".into()),
        _ => var("HOME").unwrap_or_else(|_| ".".into()),
    };
    Path::new(&home).join("Documents")
}
