pub mod accessor;
pub mod record_set;

pub use accessor::Accessor;
pub use record_set::RecordSet;

use crate::model::Record;

/// Read-only answers for one project and snapshot.
///
/// Implementations return records in their storage order; the accessor
/// treats the first match as authoritative when a key is duplicated.
pub trait RecordSource {
    /// All records stored under `path`.
    fn by_path(&self, path: &str) -> Vec<&Record>;

    /// Records under `path` belonging to one repeat-group instance.
    fn by_set(&self, path: &str, set_index: u32) -> Vec<&Record> {
        self.by_path(path)
            .into_iter()
            .filter(|r| r.set_index == set_index)
            .collect()
    }
}

impl RecordSource for [Record] {
    fn by_path(&self, path: &str) -> Vec<&Record> {
        self.iter().filter(|r| r.path == path).collect()
    }
}

impl RecordSource for Vec<Record> {
    fn by_path(&self, path: &str) -> Vec<&Record> {
        self.as_slice().by_path(path)
    }
}
