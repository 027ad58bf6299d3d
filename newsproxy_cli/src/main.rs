mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "newsproxy")]
#[command(about = "Proxy and browse news from the GNews API")]
struct Cli {
    /// Output format for browse: cards, table, json, csv or markdown
    #[arg(long, default_value = "cards", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the proxy server
    Serve(commands::serve::ServeArgs),
    /// Browse one page of search results
    Browse(commands::browse::BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("newsproxy=info".parse()?)
                .add_directive("newsproxy_lib=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "table" => OutputFormat::Table,
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Cards,
    };

    match &cli.command {
        Commands::Serve(args) => commands::serve::run(args).await?,
        Commands::Browse(args) => commands::browse::run(args, &format).await?,
    }

    Ok(())
}
