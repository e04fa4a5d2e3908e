use super::person_identifier;
use crate::model::dmp::Contact;
use crate::store::Accessor;

const CONTACT: &str = "project/dmp/contact";

/// The plan's contact, present only when a contact name was entered.
pub fn build_contact(accessor: &Accessor<'_>) -> Option<Contact> {
    let name = accessor.present_text(&format!("{CONTACT}/name"), 0)?;
    Some(Contact {
        name: name.to_string(),
        mbox: accessor
            .present_text(&format!("{CONTACT}/mbox"), 0)
            .map(String::from),
        contact_id: person_identifier(accessor, CONTACT),
    })
}
