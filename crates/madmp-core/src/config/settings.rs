use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::vocabulary::tables::CERTIFICATION_SCHEMES;
use crate::vocabulary::Vocabulary;

/// Export settings, read from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExportSettings {
    #[serde(default)]
    pub vocabulary: VocabularyOverrides,
}

/// Extra option mappings merged over the built-in tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VocabularyOverrides {
    #[serde(default)]
    pub data_access: BTreeMap<String, String>,
    #[serde(default)]
    pub certified_with: BTreeMap<String, String>,
    #[serde(default)]
    pub pid_system: BTreeMap<String, String>,
    #[serde(default)]
    pub license_ref: BTreeMap<String, String>,
    #[serde(default)]
    pub currency_codes: Vec<String>,
}

impl ExportSettings {
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ExportError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ExportError> {
        const DATA_ACCESS_LEVELS: [&str; 3] = ["open", "shared", "closed"];

        let overrides = &self.vocabulary;
        if let Some((path, level)) = overrides
            .data_access
            .iter()
            .find(|(_, level)| !DATA_ACCESS_LEVELS.contains(&level.as_str()))
        {
            return Err(ExportError::Config(format!(
                "data_access option '{path}' maps to '{level}', expected one of open, shared, closed"
            )));
        }
        if let Some((path, scheme)) = overrides
            .certified_with
            .iter()
            .find(|(_, scheme)| !CERTIFICATION_SCHEMES.contains(&scheme.as_str()))
        {
            return Err(ExportError::Config(format!(
                "certified_with option '{path}' maps to unknown scheme '{scheme}'"
            )));
        }
        if let Some(code) = overrides
            .currency_codes
            .iter()
            .find(|c| c.chars().count() != 3)
        {
            return Err(ExportError::Config(format!(
                "currency code '{code}' must have exactly three letters"
            )));
        }
        Ok(())
    }

    /// Build the vocabulary these settings describe.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::with_overrides(&self.vocabulary)
    }
}
