//! Assemble-if-present builders, one per optional sub-document.
//!
//! Each builder reads a handful of answers through an [`Accessor`] and
//! returns `None` when the sub-document has nothing to say.

pub mod contact;
pub mod contributor;
pub mod cost;
pub mod dataset;
pub mod distribution;

pub use contact::build_contact;
pub use contributor::{build_contributor, build_contributors, CONTRIBUTOR_ROLES};
pub use cost::{build_cost, build_costs, COST_CATEGORIES};
pub use dataset::build_dataset;
pub use distribution::{build_distribution_after, build_distribution_during};

use crate::model::dmp::Identifier;
use crate::store::Accessor;

const DEFAULT_PERSON_ID_TYPE: &str = "orcid";

/// `<attribute>/identifier` plus its type, defaulting to ORCID. `None` when no
/// identifier was entered.
fn person_identifier(accessor: &Accessor<'_>, attribute: &str) -> Option<Identifier> {
    let identifier = accessor.present_text(&format!("{attribute}/identifier"), 0)?;
    let kind = accessor
        .present_text(&format!("{attribute}/identifier_type"), 0)
        .unwrap_or(DEFAULT_PERSON_ID_TYPE);
    Some(Identifier::new(identifier, kind))
}
