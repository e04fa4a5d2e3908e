use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use madmp_core::model::ProjectSnapshot;
use madmp_core::vocabulary::Vocabulary;

#[derive(Args)]
pub struct ExportArgs {
    /// Project snapshot (JSON) to export
    pub snapshot: PathBuf,

    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ExportArgs, vocabulary: &Vocabulary) -> Result<()> {
    let snapshot = ProjectSnapshot::load(&args.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", args.snapshot.display()))?;

    let rendered = madmp_core::render_export(&snapshot, vocabulary)
        .with_context(|| format!("Failed to export project '{}'", snapshot.project.title))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered.body))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote maDMP document");
        }
        None => println!("{}", rendered.body),
    }
    Ok(())
}
