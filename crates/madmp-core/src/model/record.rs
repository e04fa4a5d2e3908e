use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use serde::{Deserialize, Serialize};

/// One stored answer, addressed by question path, repeat-group instance
/// (`set_index`) and position within a repeatable answer (`collection_index`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub path: String,
    #[serde(default)]
    pub set_index: u32,
    #[serde(default)]
    pub collection_index: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RecordValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<RecordOption>,
}

/// Reference to a controlled-vocabulary entry chosen as the answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordOption {
    pub path: String,
}

/// Typed payload attached to an answer. Only dates are consumed by the export;
/// anything else is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RecordValue {
    Timestamp(DateTime<FixedOffset>),
    Date(NaiveDate),
    Other(serde_json::Value),
}

impl RecordValue {
    /// ISO-8601 rendering for date payloads, `None` for anything else.
    pub fn to_iso8601(&self) -> Option<String> {
        match self {
            RecordValue::Timestamp(ts) => Some(ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
            RecordValue::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
            RecordValue::Other(_) => None,
        }
    }
}

impl Record {
    /// A plain text answer at set 0, collection position 0.
    pub fn text(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            set_index: 0,
            collection_index: 0,
            text: text.into(),
            value: None,
            unit: None,
            option: None,
        }
    }

    /// An answer choosing the controlled option at `option_path`.
    pub fn option(path: impl Into<String>, option_path: impl Into<String>) -> Self {
        Self::text(path, "").with_option(option_path)
    }

    /// A date answer; the text carries the same date, as the answer store renders it.
    pub fn date(path: impl Into<String>, date: NaiveDate) -> Self {
        Self::text(path, date.format("%Y-%m-%d").to_string()).with_value(RecordValue::Date(date))
    }

    pub fn in_set(mut self, set_index: u32) -> Self {
        self.set_index = set_index;
        self
    }

    pub fn at(mut self, collection_index: u32) -> Self {
        self.collection_index = collection_index;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_option(mut self, option_path: impl Into<String>) -> Self {
        self.option = Some(RecordOption {
            path: option_path.into(),
        });
        self
    }

    pub fn with_value(mut self, value: RecordValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Path of the chosen controlled option, if any.
    pub fn option_path(&self) -> Option<&str> {
        self.option.as_ref().map(|o| o.path.as_str())
    }

    /// Unit string, treating an empty unit as absent.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.is_empty())
    }
}
