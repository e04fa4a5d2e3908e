//! Transforms a project's questionnaire answers into a machine-actionable
//! data management plan (maDMP) document.
//!
//! Answers arrive as a flat, path-addressed [`store::RecordSource`]. The
//! [`export::assemble`] entry point reads them through an
//! [`store::Accessor`], translates controlled options through a
//! [`vocabulary::Vocabulary`] and returns a [`model::dmp::Dmp`].
//!
//! # Example
//! ```
//! use madmp_core::model::{Project, ProjectSnapshot, Record};
//! use madmp_core::vocabulary::Vocabulary;
//!
//! let snapshot = ProjectSnapshot::new(Project::new("Soil samples"))
//!     .with_record(Record::text("project/dataset/id", "Raw data").in_set(0))
//!     .with_record(Record::text("project/dataset/storage/uri", "https://store.example.org").in_set(0));
//!
//! let rendered = madmp_core::render_export(&snapshot, Vocabulary::builtin()).unwrap();
//! assert_eq!(rendered.content_type, "application/json");
//! assert!(rendered.body.contains("Storage during the project"));
//! ```

pub mod builders;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod store;
pub mod vocabulary;

pub use error::ExportError;
pub use export::{assemble, render_export, RenderedExport};
