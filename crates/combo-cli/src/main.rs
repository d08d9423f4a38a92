use anyhow::Result;
use clap::Parser;
use combo_cli::cli::{Args, Command};
use combo_cli::{cli_utils, commands, tui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("combo_cli=warn,combo_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let table = cli_utils::load_score_table(&args.data_dir)?;

    match args.command {
        Some(Command::Query {
            genres,
            games,
            json,
        }) => commands::query::run(table, &genres, &games, args.labels, json),
        Some(Command::List { json }) => commands::list::run(&table, json),
        None => tui::run(table, args.labels),
    }
}
