use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use super::QueryStore;
use crate::error::{RecentQueriesError, Result};

const NAMESPACE: &str = "recent-queries";
pub const COMPONENT_ID: &str = "RecentQueries";

/// Key under which the list is stored: `recent-queries.RecentQueries`.
pub fn storage_key() -> String {
    format!("{}.{}", NAMESPACE, COMPONENT_ID)
}

/// Local storage strategy: a JSON object of string keys to string values,
/// the list itself stored as a JSON-encoded string under [`storage_key`].
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    key: String,
}

impl LocalStorage {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            key: storage_key(),
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let Some(path) = &self.path else {
            return Ok(BTreeMap::new());
        };

        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    pub fn get_item(&self) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(&self.key))
    }

    /// Writes `value` under the component key, keeping every other key.
    pub fn set_item(&mut self, value: String) -> Result<()> {
        let Some(path) = &self.path else {
            return Err(RecentQueriesError::NoDataDir);
        };

        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(self.key.clone(), value);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&entries)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }
}

impl QueryStore for LocalStorage {
    fn try_load(&self) -> Result<Option<Vec<String>>> {
        match self.get_item()? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn try_save(&mut self, queries: &[String]) -> Result<()> {
        self.set_item(serde_json::to_string(queries)?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn storage_in(dir: &TempDir) -> LocalStorage {
        LocalStorage::new(Some(dir.path().join("local_storage.json")))
    }

    #[test]
    fn test_storage_key_is_namespaced() {
        assert_eq!(storage_key(), "recent-queries.RecentQueries");
    }

    #[test]
    fn test_missing_file_is_no_data() {
        let dir = TempDir::new().unwrap();
        assert_eq!(storage_in(&dir).try_load().unwrap(), None);
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut storage = storage_in(&dir);
        let list = vec!["first".to_string(), "Second".to_string()];

        storage.try_save(&list).unwrap();

        assert_eq!(storage.try_load().unwrap(), Some(list));
    }

    #[test]
    fn test_value_is_json_string_under_key() {
        let dir = TempDir::new().unwrap();
        let mut storage = storage_in(&dir);
        storage.try_save(&["a".to_string()]).unwrap();

        let raw = fs::read_to_string(storage.path().unwrap()).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.get("recent-queries.RecentQueries").unwrap(), r#"["a"]"#);
    }

    #[test]
    fn test_other_keys_are_preserved() {
        let dir = TempDir::new().unwrap();
        let mut storage = storage_in(&dir);
        fs::write(
            storage.path().unwrap(),
            r#"{"other.Component": "keep me"}"#,
        )
        .unwrap();

        storage.try_save(&["q".to_string()]).unwrap();

        let raw = fs::read_to_string(storage.path().unwrap()).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.get("other.Component").unwrap(), "keep me");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_undecodable_value_is_error() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(
            storage.path().unwrap(),
            r#"{"recent-queries.RecentQueries": "[1, 2"}"#,
        )
        .unwrap();

        assert!(storage.try_load().is_err());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut storage =
            LocalStorage::new(Some(dir.path().join("nested").join("deeper").join("ls.json")));

        storage.try_save(&["q".to_string()]).unwrap();

        assert!(storage.path().unwrap().exists());
    }
}
