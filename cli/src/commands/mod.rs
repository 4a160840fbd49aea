//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` impl that runs the command against the database
//! - An `Outputable` impl for its result type

mod add;
mod head;
mod init;
mod list;
mod total;

pub use add::AddCmd;
pub use head::HeadCmd;
pub use init::InitCmd;
pub use list::ListCmd;
pub use total::TotalCmd;

use clap::Subcommand;
use std::error::Error;

use litebind::Connection;

use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the staff table, optionally seeded with sample rows
    Init(InitCmd),

    /// Add a staff member
    Add(AddCmd),

    /// List staff members, optionally filtered by city
    List(ListCmd),

    /// Show the first rows of the staff table
    Head(HeadCmd),

    /// Show headcount and salary totals
    Total(TotalCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, conn: &Connection, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Init(cmd) => {
                let result = cmd.execute(conn)?;
                Ok(result.format(format))
            }
            Command::Add(cmd) => {
                let result = cmd.execute(conn)?;
                Ok(result.format(format))
            }
            Command::List(cmd) => {
                let result = cmd.execute(conn)?;
                Ok(result.format(format))
            }
            Command::Head(cmd) => {
                let result = cmd.execute(conn)?;
                Ok(result.format(format))
            }
            Command::Total(cmd) => {
                let result = cmd.execute(conn)?;
                Ok(result.format(format))
            }
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}
