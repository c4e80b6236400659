use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;

use crate::utils::get_data_dir;

const NAME_FILE: &str = "username";

/// Persisted name cache: a single file in the data directory, read once at
/// startup and rewritten on every name change.
///
/// Losing this file is harmless, so load failures degrade to "no saved
/// name" and save failures are the caller's to log.
#[derive(Debug, Clone)]
pub struct NameStore {
    path: PathBuf,
}

impl NameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory
    pub fn at_default_location() -> Self {
        Self::new(get_data_dir().join(NAME_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved name; `None` when the file is missing, unreadable or
    /// holds only whitespace.
    pub fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let name = contents.trim_end_matches(['\r', '\n']).to_string();
                if name.trim().is_empty() {
                    None
                } else {
                    Some(name)
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("failed to read saved name from {:?}: {e}", self.path);
                None
            }
        }
    }

    /// Overwrite the saved name with the current value (empty included, so
    /// clearing the field clears the cache on the next load).
    pub fn save(&self, name: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> NameStore {
        NameStore::new(dir.path().join(NAME_FILE))
    }

    #[test]
    fn test_missing_file_loads_nothing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = store_in(&dir);
        assert_eq!(store.load(), None);
        Ok(())
    }

    #[test]
    fn test_save_load_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = store_in(&dir);

        store.save("Ada")?;
        assert_eq!(store.load(), Some("Ada".to_string()));

        store.save("Grace")?;
        assert_eq!(store.load(), Some("Grace".to_string()));
        Ok(())
    }

    #[test]
    fn test_blank_contents_load_nothing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = store_in(&dir);

        store.save("")?;
        assert_eq!(store.load(), None);

        store.save("   ")?;
        assert_eq!(store.load(), None);
        Ok(())
    }

    #[test]
    fn test_save_creates_parent_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = NameStore::new(dir.path().join("nested").join(NAME_FILE));

        store.save("Ada")?;
        assert_eq!(store.load(), Some("Ada".to_string()));
        Ok(())
    }

    #[test]
    fn test_trailing_newline_is_stripped() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = store_in(&dir);

        std::fs::write(store.path(), "Ada\n")?;
        assert_eq!(store.load(), Some("Ada".to_string()));
        Ok(())
    }
}
