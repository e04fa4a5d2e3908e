//! Output document types for the maDMP export.
//!
//! Field order in these structs is the key order of the rendered JSON.
//! Optional members are omitted entirely when absent, never emitted as
//! `null` or an empty placeholder.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The `{"dmp": ...}` wrapper around the exported plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct DmpEnvelope {
    pub dmp: Dmp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Dmp {
    pub title: String,
    pub created: String,
    pub modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    pub contributor: Vec<Contributor>,
    pub cost: Vec<Cost>,
    pub dataset: Vec<Dataset>,
    pub project: Vec<ProjectSummary>,
}

/// Identifier object shared by contact, contributor and dataset ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Identifier {
    pub identifier: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Identifier {
    pub fn new(identifier: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Contact {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbox: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<Identifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Contributor {
    pub role: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbox: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor_id: Option<Identifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Cost {
    pub title: String,
    /// The answer text as entered, e.g. `"120"`.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Dataset {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_quality_assurance: Option<String>,
    pub dataset_id: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distribution: Vec<Distribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub personal_data: YesNoUnknown,
    pub sensitive_data: YesNoUnknown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preservation_statement: Option<String>,
}

/// One distribution entry. "During" entries use the access fields,
/// "after" entries use the preservation fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Distribution {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certified_with: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Host>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Host {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct License {
    pub license_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum YesNoUnknown {
    Yes,
    No,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ProjectSummary {
    pub title: String,
    pub description: String,
    /// ISO-8601 start, empty when not scheduled.
    pub start: String,
    pub end: String,
}
