use crate::error::ExportError;
use crate::model::dmp::{Dmp, DmpEnvelope};
use crate::model::ProjectSnapshot;
use crate::vocabulary::Vocabulary;

use super::assemble;

pub const CONTENT_TYPE: &str = "application/json";

/// A serialized export ready to hand to a response writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExport {
    pub content_type: &'static str,
    pub body: String,
}

/// Serialize `dmp` under the top-level `"dmp"` key, pretty-printed with
/// two-space indentation.
pub fn render(dmp: Dmp) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&DmpEnvelope { dmp })?)
}

/// Assemble and serialize the document for a loaded snapshot.
pub fn render_export(
    snapshot: &ProjectSnapshot,
    vocabulary: &Vocabulary,
) -> Result<RenderedExport, ExportError> {
    let records = snapshot.record_set();
    let dmp = assemble(&records, &snapshot.project, vocabulary)?;
    Ok(RenderedExport {
        content_type: CONTENT_TYPE,
        body: render(dmp)?,
    })
}
