mod execute;
mod output;

use clap::Args;

/// Create the staff table, optionally seeded with sample rows
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  litebind init                # Create an empty staff table
  litebind init --seed         # Create and load the sample roster
  litebind init --force        # Drop any existing table first")]
pub struct InitCmd {
    /// Load a small sample roster after creating the table
    #[arg(short, long, default_value_t = false)]
    pub seed: bool,

    /// Drop an existing staff table before creating it
    #[arg(short, long, default_value_t = false)]
    pub force: bool,
}
