use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Project, Record};
use crate::error::ExportError;
use crate::store::RecordSet;

/// A project together with every answer recorded for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSnapshot {
    pub project: Project,
    #[serde(default)]
    pub values: Vec<Record>,
}

impl ProjectSnapshot {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            values: Vec::new(),
        }
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.values.push(record);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            records = snapshot.values.len(),
            "Loaded project snapshot"
        );
        Ok(snapshot)
    }

    /// Index the answers for lookup.
    pub fn record_set(&self) -> RecordSet {
        RecordSet::from_records(self.values.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "project": {
            "title": "Soil samples",
            "description": "Field campaign",
            "created": "2024-01-10T08:00:00Z",
            "updated": "2024-02-01T12:00:00Z"
        },
        "values": [
            {"path": "project/dataset/id", "set_index": 0, "text": "Raw data"},
            {"path": "project/dataset/sharing/yesno", "set_index": 0, "option": {"path": "dataset_sharing_options/69"}}
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = ProjectSnapshot::from_json_str(SNAPSHOT).unwrap();
        assert_eq!(snapshot.project.title, "Soil samples");
        assert_eq!(snapshot.values.len(), 2);
        assert_eq!(
            snapshot.values[1].option_path(),
            Some("dataset_sharing_options/69")
        );
    }

    #[test]
    fn test_values_default_to_empty() {
        let json = r#"{"project": {"title": "t", "created": "2024-01-10T08:00:00Z", "updated": "2024-01-10T08:00:00Z"}}"#;
        let snapshot = ProjectSnapshot::from_json_str(json).unwrap();
        assert!(snapshot.values.is_empty());
        assert_eq!(snapshot.project.description, "");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        let snapshot = ProjectSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.project.description, "Field campaign");
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = ProjectSnapshot::from_json_str("{\"project\": 1}").unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ProjectSnapshot::load(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
