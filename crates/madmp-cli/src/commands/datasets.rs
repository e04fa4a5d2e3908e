use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use madmp_core::builders::dataset::DATASET_ID;
use madmp_core::model::ProjectSnapshot;
use madmp_core::store::Accessor;

use crate::output::format::{format_dataset_list, DatasetRow};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct DatasetsArgs {
    /// Project snapshot (JSON)
    pub snapshot: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: &DatasetsArgs) -> Result<()> {
    let snapshot = ProjectSnapshot::load(&args.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", args.snapshot.display()))?;
    let records = snapshot.record_set();
    let accessor = Accessor::new(&records);

    let rows: Vec<DatasetRow> = accessor
        .values_for_group(DATASET_ID)
        .into_iter()
        .map(|set_index| DatasetRow {
            set_index,
            title: accessor.text(DATASET_ID, set_index).to_string(),
        })
        .collect();

    println!("{}", format_dataset_list(&rows, args.format));
    Ok(())
}
