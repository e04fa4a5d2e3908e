pub mod settings;

pub use settings::{ExportSettings, VocabularyOverrides};
