use tracing::{debug, warn};

use super::dataset::PUBLICATION_DATE;
use crate::error::ExportError;
use crate::model::dmp::{Distribution, Host, License};
use crate::store::Accessor;
use crate::vocabulary::Vocabulary;

pub const DURING_TITLE: &str = "Storage during the project";
pub const AFTER_TITLE: &str = "Preservation after the project";

const STORAGE_URI: &str = "project/dataset/storage/uri";
const DATA_ACCESS: &str = "project/dataset/sharing/yesno";
const FORMAT: &str = "project/dataset/format";
const CERTIFICATION: &str = "project/dataset/preservation/certification";
const PID_SYSTEM: &str = "project/dataset/pids/system";
const REPOSITORY: &str = "project/dataset/preservation/repository";
const LICENSE: &str = "project/dataset/sharing/conditions";

/// Option path chosen for `path` in this dataset, if any.
fn chosen_option<'a>(accessor: &Accessor<'a>, path: &str, set_index: u32) -> Option<&'a str> {
    accessor.get(path, set_index).and_then(|r| r.option_path())
}

/// Where the dataset lives while the project runs. `None` when neither an
/// access URL, an access level nor a format was given.
pub fn build_distribution_during(
    accessor: &Accessor<'_>,
    vocabulary: &Vocabulary,
    set_index: u32,
) -> Result<Option<Distribution>, ExportError> {
    let access_url = accessor.present_text(STORAGE_URI, set_index).map(String::from);
    let data_access = chosen_option(accessor, DATA_ACCESS, set_index)
        .map(|option| vocabulary.data_access(option).map(String::from))
        .transpose()?;
    let format = accessor.present_text(FORMAT, set_index).map(String::from);

    if access_url.is_none() && data_access.is_none() && format.is_none() {
        return Ok(None);
    }

    Ok(Some(Distribution {
        title: DURING_TITLE.to_string(),
        access_url,
        data_access,
        format,
        ..Default::default()
    }))
}

/// How the dataset is preserved once the project ends. `None` when no
/// certification, PID system, repository or mapped license was given.
pub fn build_distribution_after(
    accessor: &Accessor<'_>,
    vocabulary: &Vocabulary,
    set_index: u32,
) -> Result<Option<Distribution>, ExportError> {
    let certified_with = chosen_option(accessor, CERTIFICATION, set_index)
        .map(|option| vocabulary.certified_with(option).map(String::from))
        .transpose()?;
    let pid_system = chosen_option(accessor, PID_SYSTEM, set_index)
        .map(|option| vocabulary.pid_system(option).map(String::from))
        .transpose()?;
    let host = accessor.present_text(REPOSITORY, set_index).map(|title| Host {
        title: title.to_string(),
    });
    let license = build_license(accessor, vocabulary, set_index);

    if certified_with.is_none() && pid_system.is_none() && host.is_none() && license.is_none() {
        return Ok(None);
    }

    Ok(Some(Distribution {
        title: AFTER_TITLE.to_string(),
        certified_with,
        pid_system,
        host,
        license,
        ..Default::default()
    }))
}

fn build_license(accessor: &Accessor<'_>, vocabulary: &Vocabulary, set_index: u32) -> Option<License> {
    let option = chosen_option(accessor, LICENSE, set_index)?;
    let Some(license_ref) = vocabulary.license_ref(option) else {
        warn!(option, set_index, "License option has no license URL, skipping");
        return None;
    };
    let start_date = Some(accessor.timestamp(PUBLICATION_DATE, set_index)).filter(|d| !d.is_empty());
    debug!(license_ref, ?start_date, set_index, "Mapped dataset license");
    Some(License {
        license_ref: license_ref.to_string(),
        start_date,
    })
}
