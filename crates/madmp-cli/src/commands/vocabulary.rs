use anyhow::Result;
use clap::Args;
use madmp_core::vocabulary::Vocabulary;

use crate::output::format::format_vocabulary;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct VocabularyArgs {
    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: &VocabularyArgs, vocabulary: &Vocabulary) -> Result<()> {
    println!("{}", format_vocabulary(vocabulary, args.format));
    Ok(())
}
