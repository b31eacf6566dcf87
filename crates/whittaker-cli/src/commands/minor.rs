use anyhow::Result;
use colored::Colorize;
use whittaker::{Whittaker, WhittakerConfig};

pub fn run(config: WhittakerConfig, rows: &[usize], cols: &[usize], shift: i64) -> Result<()> {
    let w: Whittaker = Whittaker::from_config(config)?;
    let minor = w.minor(rows, cols, shift)?;

    println!(
        "{} rows {:?} cols {:?} shift {}",
        "Minor".bold(),
        rows,
        cols,
        shift
    );
    println!("  {}", w.render(&minor).to_string().cyan());
    Ok(())
}
