use std::io::ErrorKind;
use std::path::PathBuf;

use super::Storage;
use crate::error::{PlannerError, PlannerResult};

/// Storage backed by a directory with one file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> PlannerResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(FileStorage { dir })
    }

    fn path_for(&self, key: &str) -> PlannerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(PlannerError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> PlannerResult<Option<String>> {
        let path = self.path_for(key)?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PlannerResult<()> {
        let path = self.path_for(key)?;
        let temp = self.dir.join(format!("{}.tmp", key));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PlannerResult<()> {
        let path = self.path_for(key)?;

        match std::fs::remove_file(&path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(tmp.path()).unwrap();

        assert_eq!(storage.get("events").unwrap(), None);

        storage.set("events", "[]").unwrap();
        assert_eq!(storage.get("events").unwrap().as_deref(), Some("[]"));

        storage.set("events", "[1]").unwrap();
        assert_eq!(storage.get("events").unwrap().as_deref(), Some("[1]"));
        assert!(!tmp.path().join("events.tmp").exists());

        storage.remove("events").unwrap();
        assert_eq!(storage.get("events").unwrap(), None);
    }

    #[test]
    fn removing_missing_key_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(tmp.path()).unwrap();
        assert!(storage.remove("eventInfo_1").is_ok());
    }

    #[test]
    fn creates_nested_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a/b/planner");
        let mut storage = FileStorage::open(&dir).unwrap();
        storage.set("eventInfo_7", "hello").unwrap();
        assert!(dir.join("eventInfo_7").exists());
    }

    #[test]
    fn rejects_keys_that_escape_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(tmp.path()).unwrap();

        for key in ["../events", "a/b", "", "with space"] {
            assert!(matches!(
                storage.set(key, "x"),
                Err(PlannerError::InvalidKey(_))
            ));
        }
    }
}
