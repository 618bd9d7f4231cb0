use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use flightpath_core::errors::{Result, StorageError};
use flightpath_core::goals::{Goal, GoalRepositoryTrait};

/// File-backed goal repository.
///
/// The whole collection is serialized as one JSON array with camelCase
/// fields and ISO dates, matching the records the original web client
/// stored. Missing or malformed content loads as an empty collection;
/// only genuine IO failures surface as errors.
pub struct JsonGoalRepository {
    path: PathBuf,
}

impl JsonGoalRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonGoalRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GoalRepositoryTrait for JsonGoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored goals at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::ReadFailed(e.to_string()).into()),
        };

        match serde_json::from_str(&raw) {
            Ok(goals) => Ok(goals),
            Err(e) => {
                // Malformed data is recoverable: log it and start empty
                warn!(
                    "Discarding malformed goal store {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_goals(&self, goals: &[Goal]) -> Result<()> {
        let payload = serde_json::to_string_pretty(goals)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        // Write-then-rename keeps the previous collection intact if the
        // process dies mid-write
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use flightpath_core::errors::Error;
    use flightpath_core::goals::Frequency;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn sample_goal(id: &str) -> Goal {
        Goal {
            id: id.to_string(),
            name: "Emergency fund".to_string(),
            amount: dec!(1200),
            frequency: Frequency::Monthly,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            steps_completed: vec![dec!(100), dec!(100)],
            completed: false,
            celebrated: false,
        }
    }

    #[test]
    fn test_round_trips_goal_collection() {
        let dir = TempDir::new().unwrap();
        let repository = JsonGoalRepository::new(dir.path().join("goals.json"));
        assert_eq!(repository.path(), dir.path().join("goals.json"));

        let goals = vec![sample_goal("g1"), sample_goal("g2")];
        repository.save_goals(&goals).unwrap();

        assert_eq!(repository.load_goals().unwrap(), goals);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let repository = JsonGoalRepository::new(dir.path().join("absent.json"));

        assert!(repository.load_goals().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_content_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goals.json");
        fs::write(&path, "{not json at all").unwrap();

        let repository = JsonGoalRepository::new(path);
        assert!(repository.load_goals().unwrap().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goals.json");
        fs::write(&path, r#"{"goals": "not an array"}"#).unwrap();

        let repository = JsonGoalRepository::new(path);
        assert!(repository.load_goals().unwrap().is_empty());
    }

    #[test]
    fn test_persisted_layout_uses_camel_case_and_iso_dates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goals.json");
        let repository = JsonGoalRepository::new(path.clone());

        repository.save_goals(&[sample_goal("g1")]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();

        assert!(raw.contains("\"startDate\": \"2024-01-01\""));
        assert!(raw.contains("\"stepsCompleted\""));
    }

    #[test]
    fn test_save_overwrites_previous_collection() {
        let dir = TempDir::new().unwrap();
        let repository = JsonGoalRepository::new(dir.path().join("goals.json"));

        repository
            .save_goals(&[sample_goal("g1"), sample_goal("g2")])
            .unwrap();
        repository.save_goals(&[sample_goal("g3")]).unwrap();

        let loaded = repository.load_goals().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "g3");
    }

    #[test]
    fn test_save_into_missing_directory_fails_with_storage_error() {
        let dir = TempDir::new().unwrap();
        let repository = JsonGoalRepository::new(dir.path().join("nope").join("goals.json"));

        let result = repository.save_goals(&[sample_goal("g1")]);
        assert!(matches!(result, Err(Error::Storage(_))));
    }
}
