//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the staff SQLite database file
    ///
    /// If not specified, searches for database in:
    ///   1. .litebind/staff.sqlite3 (project-local)
    ///   2. ./staff.sqlite3 (current directory)
    ///   3. ~/.litebind/staff.sqlite3 (user-global)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Resolve database path by checking multiple locations in order of preference
pub fn resolve_db_path(explicit_path: Option<PathBuf>) -> PathBuf {
    let path = locate_db_path(explicit_path);
    debug!(path = %path.display(), "resolved database path");
    path
}

fn locate_db_path(explicit_path: Option<PathBuf>) -> PathBuf {
    // If explicitly specified, use that
    if let Some(path) = explicit_path {
        return path;
    }

    // 1. Check .litebind/staff.sqlite3 (project-local)
    let project_db = PathBuf::from(".litebind/staff.sqlite3");
    if project_db.exists() {
        return project_db;
    }

    // 2. Check ./staff.sqlite3 (current directory)
    let local_db = PathBuf::from("./staff.sqlite3");
    if local_db.exists() {
        return local_db;
    }

    // 3. Check ~/.litebind/staff.sqlite3 (user-global)
    if let Some(home_dir) = home::home_dir() {
        let global_db = home_dir.join(".litebind/staff.sqlite3");
        if global_db.exists() {
            return global_db;
        }
    }

    // Default: .litebind/staff.sqlite3 (will be created if needed)
    project_db
}
