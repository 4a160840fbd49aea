mod execute;
mod output;
mod output_tests;

use clap::Args;

/// List staff members, optionally filtered by city
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  litebind list                  # Every staff member
  litebind list --city Texas     # Only staff in Texas")]
pub struct ListCmd {
    /// Only list staff living in this city
    #[arg(short, long)]
    pub city: Option<String>,
}
