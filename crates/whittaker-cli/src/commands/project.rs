use anyhow::{Context, Result};
use colored::Colorize;
use whittaker::{Shifts, Whittaker, WhittakerConfig};

pub fn run(
    config: WhittakerConfig,
    seed: &[String],
    truncation: usize,
    shifts: &[String],
) -> Result<()> {
    let w: Whittaker = Whittaker::from_config(config)?;

    let shifts: Shifts = shifts
        .iter()
        .map(|s| Shifts::parse_assignment(s))
        .collect::<whittaker::Result<_>>()?;
    let factors = seed
        .iter()
        .map(|name| {
            w.generator_named(name)
                .with_context(|| format!("unknown seed generator {}", name))
        })
        .collect::<Result<Vec<_>>>()?;
    let el = w.product(&factors);

    let vector = w.proj(&el, truncation, &shifts)?;
    let report = w.is_inv(&vector)?;

    println!("{}: {}", "Seed".bold(), w.render(&el));
    if !shifts.is_empty() {
        println!("{}: {}", "Shifts".bold(), shifts);
    }
    println!();
    println!("{}", "Projection:".bold());
    println!("  {}", w.render(&vector).to_string().cyan());
    println!();
    if report.is_invariant() {
        println!("{} Whittaker invariant", "✓".green());
    } else {
        println!("{} not invariant under:", "✗".red());
        for (generator, residue) in &report.failures {
            println!("  {}: {}", generator.to_string().yellow(), w.render(residue));
        }
    }
    Ok(())
}
