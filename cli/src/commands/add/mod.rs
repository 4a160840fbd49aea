mod execute;
mod output;

use clap::Args;

/// Add a staff member
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  litebind add --name Paul --age 32                # Minimal entry
  litebind add --name Mark --age 25 --city Richmond --salary 65000")]
pub struct AddCmd {
    /// Name of the staff member
    #[arg(short, long)]
    pub name: String,

    /// Age in years
    #[arg(short, long)]
    pub age: i64,

    /// City of residence
    #[arg(short, long)]
    pub city: Option<String>,

    /// Annual salary
    #[arg(short, long)]
    pub salary: Option<f64>,
}
