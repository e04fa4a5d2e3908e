use std::collections::HashMap;

use super::RecordSource;
use crate::model::Record;

/// In-memory answer store indexed by question path.
///
/// Records keep their insertion order within a path.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    by_path: HashMap<String, Vec<Record>>,
    len: usize,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut set = Self::new();
        for record in records {
            set.insert(record);
        }
        set
    }

    pub fn insert(&mut self, record: Record) {
        self.by_path
            .entry(record.path.clone())
            .or_default()
            .push(record);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl RecordSource for RecordSet {
    fn by_path(&self, path: &str) -> Vec<&Record> {
        self.by_path
            .get(path)
            .map(|records| records.iter().collect())
            .unwrap_or_default()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
