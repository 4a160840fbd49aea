use clap::Parser;

mod cli;
mod commands;
pub mod output;
#[macro_use]
mod test_macros;
use cli::Args;
use litebind::Connection;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();
    let db_path = cli::resolve_db_path(args.db);

    // Create .litebind directory if using default path
    if db_path.as_path() == std::path::Path::new(".litebind/staff.sqlite3") {
        std::fs::create_dir_all(".litebind").ok();
    }

    let conn = Connection::open(&db_path)?;
    let output = args.command.run(&conn, args.format)?;
    println!("{}", output);
    Ok(())
}
