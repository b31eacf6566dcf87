use anyhow::Result;
use whittaker::WhittakerConfig;

pub fn run(config: &WhittakerConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
