use std::collections::BTreeSet;

use super::RecordSource;
use crate::model::Record;

/// Typed reads over a [`RecordSource`], addressed by
/// `(path, set_index, collection_index)`.
///
/// Absence is never an error: lookups yield `None`, an empty string, or an
/// empty list and the caller decides what absence means.
#[derive(Clone, Copy)]
pub struct Accessor<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> Accessor<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    /// Distinct repeat-group instances present under `path`, ascending.
    pub fn values_for_group(&self, path: &str) -> Vec<u32> {
        self.source
            .by_path(path)
            .into_iter()
            .map(|r| r.set_index)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First record at collection position 0.
    pub fn get(&self, path: &str, set_index: u32) -> Option<&'a Record> {
        self.get_at(path, set_index, 0)
    }

    pub fn get_at(&self, path: &str, set_index: u32, collection_index: u32) -> Option<&'a Record> {
        self.source
            .by_set(path, set_index)
            .into_iter()
            .find(|r| r.collection_index == collection_index)
    }

    /// Every answer of a repeatable question, ordered by collection position.
    pub fn values(&self, path: &str, set_index: u32) -> Vec<&'a Record> {
        let mut records = self.source.by_set(path, set_index);
        records.sort_by_key(|r| r.collection_index);
        records
    }

    pub fn text(&self, path: &str, set_index: u32) -> &'a str {
        self.text_at(path, set_index, 0)
    }

    pub fn text_at(&self, path: &str, set_index: u32, collection_index: u32) -> &'a str {
        self.get_at(path, set_index, collection_index)
            .map(|r| r.text.as_str())
            .unwrap_or("")
    }

    /// Non-empty answer text, `None` when absent or blank.
    pub fn present_text(&self, path: &str, set_index: u32) -> Option<&'a str> {
        Some(self.text(path, set_index)).filter(|t| !t.is_empty())
    }

    /// ISO-8601 form of a date answer, empty when absent or not a date.
    pub fn timestamp(&self, path: &str, set_index: u32) -> String {
        self.timestamp_at(path, set_index, 0)
    }

    pub fn timestamp_at(&self, path: &str, set_index: u32, collection_index: u32) -> String {
        self.get_at(path, set_index, collection_index)
            .and_then(|r| r.value.as_ref())
            .and_then(|v| v.to_iso8601())
            .unwrap_or_default()
    }
}
