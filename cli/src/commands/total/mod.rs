mod execute;
mod output;

use clap::Args;

/// Show headcount and salary totals
#[derive(Args, Debug)]
pub struct TotalCmd {
    /// Only count staff living in this city
    #[arg(short, long)]
    pub city: Option<String>,
}
