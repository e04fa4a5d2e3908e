use madmp_core::vocabulary::{Vocabulary, VocabularyTable};
use serde_json::json;

use super::OutputFormat;

pub struct DatasetRow {
    pub set_index: u32,
    pub title: String,
}

pub fn format_dataset_list(rows: &[DatasetRow], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            let rows: Vec<_> = rows
                .iter()
                .map(|r| json!({"set_index": r.set_index, "title": r.title}))
                .collect();
            serde_json::to_string_pretty(&rows).unwrap_or_default()
        }
        OutputFormat::Text => format_dataset_list_text(rows),
    }
}

fn format_dataset_list_text(rows: &[DatasetRow]) -> String {
    if rows.is_empty() {
        return "No datasets found.".to_string();
    }

    let mut out = String::new();
    for row in rows {
        let title = if row.title.is_empty() {
            "(untitled)"
        } else {
            row.title.as_str()
        };
        out.push_str(&format!("[{}] {title}\n", row.set_index));
    }
    out.trim_end().to_string()
}

pub fn format_vocabulary(vocabulary: &Vocabulary, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            let mut doc = serde_json::Map::new();
            for table in VocabularyTable::ALL {
                let entries: serde_json::Map<_, _> = vocabulary
                    .entries(table)
                    .map(|(k, v)| (k.to_string(), json!(v)))
                    .collect();
                doc.insert(table.to_string(), entries.into());
            }
            doc.insert(
                "currency_codes".into(),
                json!(vocabulary.currency_codes().collect::<Vec<_>>()),
            );
            serde_json::to_string_pretty(&doc).unwrap_or_default()
        }
        OutputFormat::Text => format_vocabulary_text(vocabulary),
    }
}

fn format_vocabulary_text(vocabulary: &Vocabulary) -> String {
    let mut out = String::new();
    for table in VocabularyTable::ALL {
        out.push_str(&format!("{table}:\n"));
        let mut empty = true;
        for (option, value) in vocabulary.entries(table) {
            out.push_str(&format!("  {option} -> {value}\n"));
            empty = false;
        }
        if empty {
            out.push_str("  (no entries)\n");
        }
        out.push('\n');
    }
    let codes: Vec<&str> = vocabulary.currency_codes().collect();
    out.push_str(&format!("currency_codes ({}):\n", codes.len()));
    for chunk in codes.chunks(15) {
        out.push_str(&format!("  {}\n", chunk.join(" ")));
    }
    out.trim_end().to_string()
}
