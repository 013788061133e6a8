use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::AppResult;
use crate::models::dataset::Dataset;
use crate::services::dataset_service::DatasetService;

/// File name of the single dataset slot inside the app data directory.
pub const DATA_FILE_NAME: &str = "pms-data.json";

/// Persistence adapter over one JSON file. The slot is all-or-nothing:
/// load returns the full snapshot, a missing slot triggers regeneration,
/// and a corrupt slot surfaces as an error rather than silent replacement.
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    pub fn new(path: PathBuf) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the slot, seeding it with a freshly generated dataset when
    /// empty.
    pub fn load(&self) -> AppResult<Dataset> {
        if self.path.exists() {
            debug!(target: "app::store", path = %self.path.display(), "Loading dataset slot");
            let raw = fs::read_to_string(&self.path)?;
            let dataset: Dataset = serde_json::from_str(&raw)?;
            Ok(dataset)
        } else {
            info!(target: "app::store", path = %self.path.display(), "Slot empty, generating dataset");
            let dataset = DatasetService::generate_default();
            self.persist(&dataset)?;
            Ok(dataset)
        }
    }

    /// Discards the slot and regenerates it.
    pub fn reset(&self) -> AppResult<Dataset> {
        info!(target: "app::store", path = %self.path.display(), "Resetting dataset slot");
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.load()
    }

    fn persist(&self, dataset: &Dataset) -> AppResult<()> {
        let json = serde_json::to_string_pretty(dataset)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DataStore {
        DataStore::new(dir.path().join(DATA_FILE_NAME)).expect("store")
    }

    #[test]
    fn load_seeds_an_empty_slot_and_is_stable_afterwards() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        let first = store.load().expect("first load");
        assert!(store.path().exists());
        assert!(!first.employees.is_empty());

        let second = store.load().expect("second load");
        let a = serde_json::to_string(&first).expect("serialize");
        let b = serde_json::to_string(&second).expect("serialize");
        assert_eq!(a, b);
    }

    #[test]
    fn reset_replaces_the_slot() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        store.load().expect("seed");
        fs::write(store.path(), "{\"employees\":[]").expect("corrupt");

        let dataset = store.reset().expect("reset");
        assert!(!dataset.employees.is_empty());
        assert!(store.load().is_ok());
    }

    #[test]
    fn corrupt_slot_is_an_error_not_a_regeneration() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        fs::write(store.path(), "not json").expect("write");
        assert!(matches!(
            store.load(),
            Err(AppError::Serialization(_))
        ));
        // The broken slot stays on disk for inspection.
        assert_eq!(fs::read_to_string(store.path()).expect("read"), "not json");
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = TempDir::new().expect("tempdir");
        let nested = dir.path().join("nested").join("deeper").join(DATA_FILE_NAME);
        let store = DataStore::new(nested).expect("store");
        assert!(store.load().is_ok());
    }
}
