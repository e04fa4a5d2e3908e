pub mod dmp;
pub mod project;
pub mod record;
pub mod snapshot;

pub use project::Project;
pub use record::{Record, RecordOption, RecordValue};
pub use snapshot::ProjectSnapshot;
