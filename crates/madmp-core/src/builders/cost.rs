use crate::model::dmp::Cost;
use crate::store::Accessor;
use crate::vocabulary::Vocabulary;

/// Cost categories in output order: (title, answer path).
pub const COST_CATEGORIES: [(&str, &str); 18] = [
    ("Personal costs for data creation", "project/costs/creation/personnel"),
    ("Non personal costs for data creation", "project/costs/creation/non_personnel"),
    ("Personal costs for data usage", "project/costs/usage/personnel"),
    ("Non personal costs for data usage", "project/costs/usage/non_personnel"),
    ("Personal costs for data storage", "project/costs/storage/personnel"),
    ("Non personal costs for data storage", "project/costs/storage/non_personnel"),
    ("Personal costs for metadata curation", "project/costs/metadata/personnel"),
    ("Non personal costs for metadata curation", "project/costs/metadata/non_personnel"),
    ("Personal costs for PID curation", "project/costs/pid/personnel"),
    ("Non personal costs for PID curation", "project/costs/pid/non_personnel"),
    (
        "Personal costs for data anonymization",
        "project/costs/sensitive_data/anonymization/personnel",
    ),
    (
        "Non personal costs for data anonymization",
        "project/costs/sensitive_data/anonymization/non_personnel",
    ),
    (
        "Personal costs for data security",
        "project/costs/sensitive_data/security/personnel",
    ),
    (
        "Non personal costs for data security",
        "project/costs/sensitive_data/security/non_personnel",
    ),
    ("Personal costs for intellectual property rights", "project/costs/ipr/personnel"),
    ("Non personal costs for intellectual property rights", "project/costs/ipr/non_personnel"),
    ("Personal costs for preservation", "project/costs/preservation/personnel"),
    ("Non personal costs for preservation", "project/costs/preservation/non_personnel"),
];

/// A cost line for `path`, present only when an amount was entered.
pub fn build_cost(
    accessor: &Accessor<'_>,
    vocabulary: &Vocabulary,
    title: &str,
    path: &str,
) -> Option<Cost> {
    let record = accessor.get(path, 0).filter(|r| !r.text.is_empty())?;
    let unit = record.unit();
    Some(Cost {
        title: title.to_string(),
        value: record.text.clone(),
        description: unit.map(|unit| format!("{title} in {unit}")),
        currency_code: unit.and_then(|unit| vocabulary.currency_code(unit)),
    })
}

pub fn build_costs(accessor: &Accessor<'_>, vocabulary: &Vocabulary) -> Vec<Cost> {
    COST_CATEGORIES
        .iter()
        .filter_map(|(title, path)| build_cost(accessor, vocabulary, title, path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::RecordSet;
    use serde_json::json;

    #[test]
    fn test_cost_with_currency_unit() {
        let set = RecordSet::from_records(vec![
            Record::text("project/costs/creation/personnel", "120").with_unit("EUR")
        ]);
        let costs = build_costs(&Accessor::new(&set), Vocabulary::builtin());
        assert_eq!(
            serde_json::to_value(&costs).unwrap(),
            json!([{
                "title": "Personal costs for data creation",
                "value": "120",
                "description": "Personal costs for data creation in EUR",
                "currency_code": "EUR"
            }])
        );
    }

    #[test]
    fn test_non_currency_unit_keeps_description_only() {
        let set = RecordSet::from_records(vec![
            Record::text("project/costs/storage/personnel", "40").with_unit("hours")
        ]);
        let cost = build_cost(
            &Accessor::new(&set),
            Vocabulary::builtin(),
            "Personal costs for data storage",
            "project/costs/storage/personnel",
        )
        .unwrap();
        assert_eq!(
            cost.description.as_deref(),
            Some("Personal costs for data storage in hours")
        );
        assert!(cost.currency_code.is_none());
    }

    #[test]
    fn test_cost_without_unit() {
        let set = RecordSet::from_records(vec![Record::text("project/costs/pid/non_personnel", "5")]);
        let costs = build_costs(&Accessor::new(&set), Vocabulary::builtin());
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[0].title, "Non personal costs for PID curation");
        assert!(costs[0].description.is_none());
        assert!(costs[0].currency_code.is_none());
    }

    #[test]
    fn test_costs_follow_category_order() {
        let set = RecordSet::from_records(vec![
            Record::text("project/costs/preservation/non_personnel", "3").with_unit("Euro"),
            Record::text("project/costs/usage/personnel", "2").with_unit("eur"),
            Record::text("project/costs/creation/personnel", "1"),
            Record::text("project/costs/ipr/personnel", ""),
        ]);
        let costs = build_costs(&Accessor::new(&set), Vocabulary::builtin());
        let values: Vec<&str> = costs.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3"]);
        assert_eq!(costs[1].currency_code.as_deref(), Some("EUR"));
        assert_eq!(costs[2].currency_code.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_category_titles_are_unique() {
        let mut titles: Vec<&str> = COST_CATEGORIES.iter().map(|(t, _)| *t).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), COST_CATEGORIES.len());
    }
}
