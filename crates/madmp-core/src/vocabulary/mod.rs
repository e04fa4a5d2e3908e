//! Controlled-option translation tables and currency recognition.
//!
//! The data-access, certification and PID-system tables are mandatory: an
//! option missing from them is a configuration defect and aborts the export
//! ([`Vocabulary::require`]). The license table is optional: unknown license
//! options are skipped ([`Vocabulary::find`]).

pub mod currency;
pub mod tables;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use crate::config::VocabularyOverrides;
use crate::error::ExportError;

pub use currency::detect_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VocabularyTable {
    DataAccess,
    CertifiedWith,
    PidSystem,
    LicenseRef,
}

impl VocabularyTable {
    pub const ALL: [VocabularyTable; 4] = [
        VocabularyTable::DataAccess,
        VocabularyTable::CertifiedWith,
        VocabularyTable::PidSystem,
        VocabularyTable::LicenseRef,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VocabularyTable::DataAccess => "data_access",
            VocabularyTable::CertifiedWith => "certified_with",
            VocabularyTable::PidSystem => "pid_system",
            VocabularyTable::LicenseRef => "license_ref",
        }
    }
}

impl std::fmt::Display for VocabularyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(|| Vocabulary {
    data_access: to_map(tables::DATA_ACCESS),
    certified_with: to_map(tables::CERTIFIED_WITH),
    pid_system: to_map(tables::PID_SYSTEM),
    license_ref: to_map(tables::LICENSE_REF),
    currency_codes: currency::CURRENCY_CODES
        .iter()
        .map(|c| c.to_string())
        .collect(),
});

fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Immutable set of translation tables used by one or more exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    data_access: BTreeMap<String, String>,
    certified_with: BTreeMap<String, String>,
    pid_system: BTreeMap<String, String>,
    license_ref: BTreeMap<String, String>,
    currency_codes: BTreeSet<String>,
}

impl Vocabulary {
    /// The process-wide built-in tables.
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN
    }

    /// The built-in tables extended by `overrides`. Override entries replace
    /// built-in entries with the same option path.
    pub fn with_overrides(overrides: &VocabularyOverrides) -> Self {
        let mut vocabulary = BUILTIN.clone();
        let tables = [
            (&mut vocabulary.data_access, &overrides.data_access),
            (&mut vocabulary.certified_with, &overrides.certified_with),
            (&mut vocabulary.pid_system, &overrides.pid_system),
            (&mut vocabulary.license_ref, &overrides.license_ref),
        ];
        for (table, extra) in tables {
            table.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        vocabulary
            .currency_codes
            .extend(overrides.currency_codes.iter().map(|c| c.to_uppercase()));
        vocabulary
    }

    fn table(&self, table: VocabularyTable) -> &BTreeMap<String, String> {
        match table {
            VocabularyTable::DataAccess => &self.data_access,
            VocabularyTable::CertifiedWith => &self.certified_with,
            VocabularyTable::PidSystem => &self.pid_system,
            VocabularyTable::LicenseRef => &self.license_ref,
        }
    }

    /// Optional lookup: `None` when the option is not in the table.
    pub fn find(&self, table: VocabularyTable, option_path: &str) -> Option<&str> {
        self.table(table).get(option_path).map(String::as_str)
    }

    /// Mandatory lookup: an unmapped option is an error.
    pub fn require(&self, table: VocabularyTable, option_path: &str) -> Result<&str, ExportError> {
        self.find(table, option_path)
            .ok_or_else(|| ExportError::UnmappedOption {
                table,
                path: option_path.to_string(),
            })
    }

    pub fn data_access(&self, option_path: &str) -> Result<&str, ExportError> {
        self.require(VocabularyTable::DataAccess, option_path)
    }

    pub fn certified_with(&self, option_path: &str) -> Result<&str, ExportError> {
        self.require(VocabularyTable::CertifiedWith, option_path)
    }

    pub fn pid_system(&self, option_path: &str) -> Result<&str, ExportError> {
        self.require(VocabularyTable::PidSystem, option_path)
    }

    pub fn license_ref(&self, option_path: &str) -> Option<&str> {
        self.find(VocabularyTable::LicenseRef, option_path)
    }

    /// Currency code inferred from a cost unit, see [`detect_currency`].
    pub fn currency_code(&self, unit: &str) -> Option<String> {
        detect_currency(unit, |code| self.currency_codes.contains(code))
    }

    /// Entries of one table, ordered by option path.
    pub fn entries(&self, table: VocabularyTable) -> impl Iterator<Item = (&str, &str)> {
        self.table(table)
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn currency_codes(&self) -> impl Iterator<Item = &str> {
        self.currency_codes.iter().map(String::as_str)
    }
}
