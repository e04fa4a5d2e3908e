use tracing::debug;

use super::{build_distribution_after, build_distribution_during};
use crate::error::ExportError;
use crate::model::dmp::{Dataset, Identifier, YesNoUnknown};
use crate::store::Accessor;
use crate::vocabulary::Vocabulary;

/// Repeat-group anchor: one dataset per distinct set index under this path.
pub const DATASET_ID: &str = "project/dataset/id";
pub const PUBLICATION_DATE: &str = "project/dataset/data_publication_date";

const DESCRIPTION: &str = "project/dataset/description";
const QUALITY_ASSURANCE: &str = "project/dataset/quality_assurance";
const DATASET_IDENTIFIER: &str = "project/dataset/dataset_identifier";
const DATASET_IDENTIFIER_TYPE: &str = "project/dataset/dataset_identifier_type";
const KEYWORDS: &str = "project/research_question/keywords";
const PERSONAL_DATA: &str = "project/dataset/sensitive_data/personal_data_yesno/yesno";
const SENSITIVE_DATA: &str = "project/dataset/sensitive_data/personal_data/bdsg_3_9";
const PRESERVATION_STATEMENT: &str = "project/dataset/preservation/purpose";

const FALLBACK_ID_TYPE: &str = "other";

/// One dataset entry for the repeat-group instance `set_index`.
pub fn build_dataset(
    accessor: &Accessor<'_>,
    vocabulary: &Vocabulary,
    set_index: u32,
) -> Result<Dataset, ExportError> {
    let title = accessor.text(DATASET_ID, set_index);

    let mut distribution = Vec::with_capacity(2);
    if let Some(during) = build_distribution_during(accessor, vocabulary, set_index)? {
        distribution.push(during);
    }
    if let Some(after) = build_distribution_after(accessor, vocabulary, set_index)? {
        distribution.push(after);
    }

    debug!(
        set_index,
        title,
        distributions = distribution.len(),
        "Built dataset"
    );

    Ok(Dataset {
        title: title.to_string(),
        description: present(accessor, DESCRIPTION, set_index),
        data_quality_assurance: present(accessor, QUALITY_ASSURANCE, set_index),
        dataset_id: dataset_identifier(accessor, set_index),
        distribution,
        issued: Some(accessor.timestamp(PUBLICATION_DATE, set_index)).filter(|d| !d.is_empty()),
        keyword: keywords(accessor),
        personal_data: yes_no_unknown(accessor, PERSONAL_DATA, set_index),
        sensitive_data: yes_no_unknown(accessor, SENSITIVE_DATA, set_index),
        preservation_statement: present(accessor, PRESERVATION_STATEMENT, set_index),
    })
}

fn present(accessor: &Accessor<'_>, path: &str, set_index: u32) -> Option<String> {
    accessor.present_text(path, set_index).map(String::from)
}

/// The declared identifier with its type, or the dataset title typed `other`.
fn dataset_identifier(accessor: &Accessor<'_>, set_index: u32) -> Identifier {
    match accessor.present_text(DATASET_IDENTIFIER, set_index) {
        Some(identifier) => Identifier::new(
            identifier,
            accessor
                .present_text(DATASET_IDENTIFIER_TYPE, set_index)
                .unwrap_or(FALLBACK_ID_TYPE),
        ),
        None => Identifier::new(accessor.text(DATASET_ID, set_index), FALLBACK_ID_TYPE),
    }
}

/// Research-question keywords are project-wide; every dataset carries them.
fn keywords(accessor: &Accessor<'_>) -> Option<String> {
    let keywords: Vec<&str> = accessor
        .values(KEYWORDS, 0)
        .into_iter()
        .map(|r| r.text.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    (!keywords.is_empty()).then(|| keywords.join(", "))
}

/// `"1"` means yes, any other answer no, and no answer unknown.
fn yes_no_unknown(accessor: &Accessor<'_>, path: &str, set_index: u32) -> YesNoUnknown {
    match accessor.get(path, set_index) {
        Some(record) if record.text == "1" => YesNoUnknown::Yes,
        Some(_) => YesNoUnknown::No,
        None => YesNoUnknown::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::RecordSet;
    use chrono::NaiveDate;
    use serde_json::json;

    fn build(records: Vec<Record>, set_index: u32) -> Dataset {
        let set = RecordSet::from_records(records);
        build_dataset(&Accessor::new(&set), Vocabulary::builtin(), set_index).unwrap()
    }

    #[test]
    fn test_minimal_dataset() {
        let dataset = build(vec![Record::text(DATASET_ID, "Interviews").in_set(2)], 2);
        assert_eq!(
            serde_json::to_value(&dataset).unwrap(),
            json!({
                "title": "Interviews",
                "dataset_id": {"identifier": "Interviews", "type": "other"},
                "personal_data": "unknown",
                "sensitive_data": "unknown"
            })
        );
    }

    #[test]
    fn test_declared_identifier() {
        let dataset = build(
            vec![
                Record::text(DATASET_ID, "Interviews"),
                Record::text(DATASET_IDENTIFIER, "10.5281/zenodo.1234"),
                Record::text(DATASET_IDENTIFIER_TYPE, "doi"),
            ],
            0,
        );
        assert_eq!(dataset.dataset_id, Identifier::new("10.5281/zenodo.1234", "doi"));
    }

    #[test]
    fn test_declared_identifier_without_type() {
        let dataset = build(
            vec![
                Record::text(DATASET_ID, "Interviews"),
                Record::text(DATASET_IDENTIFIER, "ds-7"),
            ],
            0,
        );
        assert_eq!(dataset.dataset_id, Identifier::new("ds-7", "other"));
    }

    #[test]
    fn test_tri_state_flags() {
        let dataset = build(
            vec![
                Record::text(DATASET_ID, "Interviews"),
                Record::text(PERSONAL_DATA, "1"),
                Record::text(SENSITIVE_DATA, "0"),
            ],
            0,
        );
        assert_eq!(dataset.personal_data, YesNoUnknown::Yes);
        assert_eq!(dataset.sensitive_data, YesNoUnknown::No);

        let dataset = build(
            vec![
                Record::text(DATASET_ID, "Interviews"),
                Record::text(PERSONAL_DATA, "0"),
                Record::text(SENSITIVE_DATA, "1"),
            ],
            0,
        );
        assert_eq!(
            serde_json::to_value(dataset.personal_data).unwrap(),
            json!("no")
        );
        assert_eq!(dataset.sensitive_data, YesNoUnknown::Yes);
    }

    #[test]
    fn test_keywords_joined_in_collection_order() {
        let dataset = build(
            vec![
                Record::text(DATASET_ID, "Interviews").in_set(1),
                Record::text(KEYWORDS, "carbon").at(1),
                Record::text(KEYWORDS, "soil").at(0),
                Record::text(KEYWORDS, "").at(2),
            ],
            1,
        );
        assert_eq!(dataset.keyword.as_deref(), Some("soil, carbon"));
    }

    #[test]
    fn test_issued_and_texts() {
        let dataset = build(
            vec![
                Record::text(DATASET_ID, "Interviews"),
                Record::text(DESCRIPTION, "Transcribed interviews"),
                Record::text(QUALITY_ASSURANCE, "Double transcription"),
                Record::text(PRESERVATION_STATEMENT, "Reuse in follow-up study"),
                Record::date(PUBLICATION_DATE, NaiveDate::from_ymd_opt(2027, 1, 15).unwrap()),
            ],
            0,
        );
        assert_eq!(dataset.description.as_deref(), Some("Transcribed interviews"));
        assert_eq!(dataset.data_quality_assurance.as_deref(), Some("Double transcription"));
        assert_eq!(
            dataset.preservation_statement.as_deref(),
            Some("Reuse in follow-up study")
        );
        assert_eq!(dataset.issued.as_deref(), Some("2027-01-15"));
    }

    #[test]
    fn test_publication_date_text_without_value_is_not_issued() {
        let dataset = build(
            vec![
                Record::text(DATASET_ID, "Interviews"),
                Record::text(PUBLICATION_DATE, "next spring"),
            ],
            0,
        );
        assert!(dataset.issued.is_none());
    }

    #[test]
    fn test_distributions_during_then_after() {
        let dataset = build(
            vec![
                Record::text(DATASET_ID, "Interviews"),
                Record::text("project/dataset/preservation/repository", "Zenodo"),
                Record::text("project/dataset/storage/uri", "https://store.example.org"),
            ],
            0,
        );
        let titles: Vec<&str> = dataset.distribution.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Storage during the project", "Preservation after the project"]
        );
    }

    #[test]
    fn test_no_distribution_key_when_nothing_set() {
        let dataset = build(vec![Record::text(DATASET_ID, "Interviews")], 0);
        let value = serde_json::to_value(&dataset).unwrap();
        assert!(value.get("distribution").is_none());
    }
}
