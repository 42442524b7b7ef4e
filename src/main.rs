//! Shelfgen - Library Catalog Seeder & Reporter
//!
//! A batch CLI that seeds an SQLite library catalog with synthetic authors
//! and books, then reports aggregate statistics over it.

use std::process::ExitCode;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfgen::{
    config::AppConfig,
    error::AppResult,
    repository::Repository,
    services::{reports, Services},
};

#[derive(Parser, Debug)]
#[command(
    name = "shelfgen",
    version,
    about = "Seed a library catalog with synthetic data and report on it"
)]
struct Cli {
    /// Database URL (overrides config file and DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Populate the catalog with synthetic books, authors and associations
    Seed(SeedArgs),
    /// Run the read-only summary reports
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// Number of authors to insert (default from config)
    #[arg(long)]
    authors: Option<u32>,

    /// Number of books to insert (default from config)
    #[arg(long)]
    books: Option<u32>,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    rng_seed: Option<u64>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Maximum number of authors in the no-books report
    #[arg(long, default_value_t = 10)]
    childless_limit: i64,

    /// Maximum number of authors in the prolific report
    #[arg(long, default_value_t = 5)]
    prolific_limit: i64,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shelfgen: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run() -> AppResult<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shelfgen={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting shelfgen v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool; the database file is created on
    // first use and foreign keys are enforced for the whole session.
    let options = SqliteConnectOptions::from_str(&config.database.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to database");

    // Idempotent schema creation
    shelfgen::MIGRATOR.run(&pool).await?;

    tracing::info!("Schema ready");

    let repository = Repository::new(pool);
    let services = Services::new(repository, config.seed.clone());

    match cli.command {
        Commands::Seed(args) => run_seed(&services, &config, args).await,
        Commands::Report(args) => run_report(&services, args).await,
    }
}

async fn run_seed(services: &Services, config: &AppConfig, args: SeedArgs) -> AppResult<()> {
    let authors = args.authors.unwrap_or(config.seed.authors);
    let books = args.books.unwrap_or(config.seed.books);

    let summary = services.seeder.seed(authors, books, args.rng_seed).await?;

    println!(
        "Seeded {} books and {} authors ({} author-book associations).",
        summary.books, summary.authors, summary.associations
    );
    Ok(())
}

async fn run_report(services: &Services, args: ReportArgs) -> AppResult<()> {
    let reports_svc = &services.reports;

    reports_svc.verify_integrity().await?;

    let max_pages = reports_svc.books_with_most_pages().await?;
    println!("Books with most pages:");
    for book in &max_pages.books {
        println!("{} - {} pages", book.title, book.pages);
    }

    let average = reports_svc.average_page_count().await?;
    println!("\nAverage pages - {average}\n");

    let youngest = reports_svc.youngest_author().await?;
    println!(
        "Youngest author - {}, aged {}.\n",
        youngest.author.full_name(),
        youngest.age
    );

    let childless = reports_svc.authors_without_books(args.childless_limit).await?;
    println!("Authors with no books (limited to {}):", args.childless_limit);
    for author in &childless {
        println!("{}", author.full_name());
    }

    let prolific = reports_svc.prolific_authors(args.prolific_limit).await?;
    println!(
        "\nAuthors with more than {} books:",
        reports::PROLIFIC_THRESHOLD
    );
    for entry in &prolific {
        println!("{} - {} books", entry.full_name(), entry.book_count);
    }

    Ok(())
}
