use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "whittaker")]
#[command(author, version, about = "Exact Whittaker vectors for gl(N) via the Kirillov projector")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, env = "WHITTAKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Dimension N of gl(N)
    #[arg(long, short = 'n', global = true)]
    pub rank: Option<usize>,

    /// Carry ħ as a formal parameter
    #[arg(long, global = true)]
    pub asymptotic: bool,

    /// Representation prefix (repeatable, replaces the configured list)
    #[arg(long = "prefix", global = true)]
    pub prefixes: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project a product of generators onto Whittaker vectors
    Project {
        /// Seed generators, multiplied left to right (e.g. --seed u_1 E_1_2)
        #[arg(long, num_args = 1.., required = true)]
        seed: Vec<String>,

        /// Number of leading columns to leave unprojected
        #[arg(long, short, default_value_t = 0)]
        truncation: usize,

        /// Projector shift u_k=value (repeatable)
        #[arg(long = "shift", allow_hyphen_values = true)]
        shifts: Vec<String>,
    },

    /// Print a quotiented quantum minor
    Minor {
        /// Row indices, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        rows: Vec<usize>,

        /// Column indices, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        cols: Vec<usize>,

        /// Shift of the central variable
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        shift: i64,
    },

    /// Print the effective configuration as JSON
    Config,
}
