pub mod datasets;
pub mod export;
pub mod schema;
pub mod vocabulary;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Render the maDMP document for a project snapshot
    Export(export::ExportArgs),
    /// List the datasets a snapshot would export
    Datasets(datasets::DatasetsArgs),
    /// Show the effective option tables and currency codes
    Vocabulary(vocabulary::VocabularyArgs),
    /// Print the JSON Schema of the exported document
    Schema,
}
