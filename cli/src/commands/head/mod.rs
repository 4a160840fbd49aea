mod execute;
mod execute_tests;
mod output;

use clap::Args;

/// Show the first rows of the staff table
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  litebind head            # First 5 staff members
  litebind head -n 10      # First 10")]
pub struct HeadCmd {
    /// Number of rows to show (1-1000)
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub limit: u32,
}
