use super::person_identifier;
use crate::model::dmp::Contributor;
use crate::store::Accessor;

/// Contributor roles in output order, each with the question group holding
/// the person's name, mailbox and identifier.
pub const CONTRIBUTOR_ROLES: [(&str, &str); 5] = [
    ("Contact person", "project/partner/contact_person"),
    (
        "Responsible for backup",
        "project/dataset/data_security/backup_responsible",
    ),
    (
        "Responsible for metadata",
        "project/dataset/metadata/responsible_person",
    ),
    (
        "Responsible for PIDs",
        "project/dataset/pids/responsible_person",
    ),
    (
        "Responsible for preservation",
        "project/preservation/responsible_person",
    ),
];

pub fn build_contributor(accessor: &Accessor<'_>, role: &str, attribute: &str) -> Option<Contributor> {
    let name = accessor.present_text(&format!("{attribute}/name"), 0)?;
    Some(Contributor {
        role: role.to_string(),
        name: name.to_string(),
        mbox: accessor
            .present_text(&format!("{attribute}/mbox"), 0)
            .map(String::from),
        contributor_id: person_identifier(accessor, attribute),
    })
}

/// One contributor per role with a name, in [`CONTRIBUTOR_ROLES`] order.
pub fn build_contributors(accessor: &Accessor<'_>) -> Vec<Contributor> {
    CONTRIBUTOR_ROLES
        .iter()
        .filter_map(|(role, attribute)| build_contributor(accessor, role, attribute))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dmp::Identifier;
    use crate::model::Record;
    use crate::store::RecordSet;

    #[test]
    fn test_roles_follow_fixed_order() {
        // Inserted in reverse role order on purpose.
        let set = RecordSet::from_records(vec![
            Record::text("project/preservation/responsible_person/name", "Petra"),
            Record::text("project/dataset/pids/responsible_person/name", "Paul"),
            Record::text("project/partner/contact_person/name", "Carla"),
        ]);
        let contributors = build_contributors(&Accessor::new(&set));
        let roles: Vec<&str> = contributors.iter().map(|c| c.role.as_str()).collect();
        assert_eq!(
            roles,
            vec![
                "Contact person",
                "Responsible for PIDs",
                "Responsible for preservation"
            ]
        );
    }

    #[test]
    fn test_contributor_optional_fields() {
        let set = RecordSet::from_records(vec![
            Record::text("project/dataset/metadata/responsible_person/name", "Mia"),
            Record::text("project/dataset/metadata/responsible_person/mbox", "mia@example.org"),
            Record::text(
                "project/dataset/metadata/responsible_person/identifier",
                "0000-0001-5109-3700",
            ),
        ]);
        let contributor = build_contributor(
            &Accessor::new(&set),
            "Responsible for metadata",
            "project/dataset/metadata/responsible_person",
        )
        .unwrap();
        assert_eq!(contributor.mbox.as_deref(), Some("mia@example.org"));
        assert_eq!(
            contributor.contributor_id,
            Some(Identifier::new("0000-0001-5109-3700", "orcid"))
        );
    }

    #[test]
    fn test_identifier_type_without_identifier_is_ignored() {
        let set = RecordSet::from_records(vec![
            Record::text("project/partner/contact_person/name", "Carla"),
            Record::text("project/partner/contact_person/identifier_type", "isni"),
        ]);
        let contributors = build_contributors(&Accessor::new(&set));
        assert_eq!(contributors.len(), 1);
        assert!(contributors[0].contributor_id.is_none());
        assert!(contributors[0].mbox.is_none());
    }

    #[test]
    fn test_no_names_no_contributors() {
        let set = RecordSet::new();
        assert!(build_contributors(&Accessor::new(&set)).is_empty());
    }
}
