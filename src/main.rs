use anyhow::{Context, Result};
use clap::Parser;
use sqlx::SqlitePool;

use cricket_scorer::{
    args::{Args, Command},
    db,
    export::share_text,
    logging::init_logging,
    ui::{UiSettings, run_ui},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let data_dir = db::data_dir()?;
    let _log_guard = init_logging(&data_dir, &args.log_level)?;

    let pool = match &args.db {
        Some(path) => db::connect(path).await?,
        None => db::create_pool().await?,
    };

    match args.command {
        Some(Command::List) => list(&pool).await,
        Some(Command::Show { ref id }) => show(&pool, id).await,
        Some(Command::Reset) => {
            let deleted = db::matches::delete_all_matches(&pool).await?;
            println!("deleted {deleted} match(es)");
            Ok(())
        }
        None => {
            let settings = UiSettings {
                default_overs: args.overs,
                export_path: args
                    .export_file
                    .clone()
                    .unwrap_or_else(|| data_dir.join("scorecard.txt")),
            };
            run_ui(pool, settings)
        }
    }
}

async fn list(pool: &SqlitePool) -> Result<()> {
    let matches = db::matches::list_matches(pool).await?;
    if matches.is_empty() {
        println!("no saved matches");
    }

    for summary in matches {
        let result = summary.result.as_deref().unwrap_or("in progress");
        println!("{}  {}  ({})", summary.id, summary.label(), result);
    }

    Ok(())
}

async fn show(pool: &SqlitePool, id: &str) -> Result<()> {
    let m = db::matches::load_match(pool, id)
        .await?
        .with_context(|| format!("Match not found: {id}"))?;

    println!("{}", share_text(&m));
    Ok(())
}
