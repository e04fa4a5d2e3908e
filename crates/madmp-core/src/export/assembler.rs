use chrono::SecondsFormat;
use tracing::info;

use crate::builders::dataset::DATASET_ID;
use crate::builders::{build_contact, build_contributors, build_costs, build_dataset};
use crate::error::ExportError;
use crate::model::dmp::{Dmp, ProjectSummary};
use crate::model::Project;
use crate::store::{Accessor, RecordSource};
use crate::vocabulary::Vocabulary;

const PROJECT_START: &str = "project/schedule/project_start";
const PROJECT_END: &str = "project/schedule/project_end";

/// Build the maDMP document for `project` from its answers.
///
/// Any unmapped option in a mandatory vocabulary table aborts the whole
/// export; no partial document is returned.
pub fn assemble(
    source: &dyn RecordSource,
    project: &Project,
    vocabulary: &Vocabulary,
) -> Result<Dmp, ExportError> {
    let accessor = Accessor::new(source);

    let contact = build_contact(&accessor);
    let contributor = build_contributors(&accessor);
    let cost = build_costs(&accessor, vocabulary);

    let dataset = accessor
        .values_for_group(DATASET_ID)
        .into_iter()
        .map(|set_index| build_dataset(&accessor, vocabulary, set_index))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = ProjectSummary {
        title: project.title.clone(),
        description: project.description.clone(),
        start: accessor.timestamp(PROJECT_START, 0),
        end: accessor.timestamp(PROJECT_END, 0),
    };

    info!(
        project = %project.title,
        contributors = contributor.len(),
        costs = cost.len(),
        datasets = dataset.len(),
        "Assembled maDMP document"
    );

    Ok(Dmp {
        title: format!("maDMP for {}", project.title),
        created: project.created.to_rfc3339_opts(SecondsFormat::AutoSi, false),
        modified: project.updated.to_rfc3339_opts(SecondsFormat::AutoSi, false),
        contact,
        contributor,
        cost,
        dataset,
        project: vec![summary],
    })
}
