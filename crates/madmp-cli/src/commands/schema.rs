use anyhow::Result;
use madmp_core::model::dmp::DmpEnvelope;

pub fn run() -> Result<()> {
    let schema = schemars::schema_for!(DmpEnvelope);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
