use anyhow::{Context, Result};
use clap::Args;
use newsproxy_lib::gnews_api::Client;
use newsproxy_lib::params::{self, DEFAULT_BROWSE_PAGE_SIZE};
use newsproxy_lib::{
    ArticleSource, DirectSource, NewsBrowser, NewsQuery, PageSession, ProxyConfig, ProxySource,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output::{print_page, OutputFormat};

#[derive(Args)]
pub struct BrowseArgs {
    /// Search term
    #[arg(long, default_value = "world")]
    pub q: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Articles per page (1-100)
    #[arg(long, default_value_t = DEFAULT_BROWSE_PAGE_SIZE as i64)]
    pub page_size: i64,

    /// Two-letter language code (direct mode only)
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Two-letter country code
    #[arg(long, default_value = "us")]
    pub country: String,

    /// Browse top headlines in this category instead of searching
    #[arg(long)]
    pub category: Option<String>,

    /// Base URL of a running proxy
    #[arg(long, default_value = "http://localhost:3000")]
    pub proxy_url: String,

    /// Query the upstream API directly using GNEWS_API_KEY instead of the proxy
    #[arg(long)]
    pub direct: bool,

    /// Keep the session open and page with n/p, q to quit
    #[arg(long, short)]
    pub interactive: bool,
}

pub async fn run(args: &BrowseArgs, format: &OutputFormat) -> Result<()> {
    let query = NewsQuery::default()
        .with_search_term(&params::validate_search(&args.q)?)
        .with_page(params::validate_page(args.page)?)
        .with_page_size(params::validate_page_size(args.page_size)?)
        .with_language(&params::validate_code(&args.lang)?)
        .with_country(&params::validate_code(&args.country)?)
        .with_category(args.category.as_deref().unwrap_or_default());

    if args.direct {
        let config = ProxyConfig::from_env()?;
        let client = Client::with_base_url(&config.base_url, &config.api_key)?;
        browse(DirectSource::new(client), query, args.interactive, format).await
    } else {
        let source = ProxySource::new(&args.proxy_url)?;
        browse(source, query, args.interactive, format).await
    }
}

async fn browse<S: ArticleSource>(
    source: S,
    query: NewsQuery,
    interactive: bool,
    format: &OutputFormat,
) -> Result<()> {
    let browser = NewsBrowser::new(source, query);
    browser.load().await;
    show(&browser.snapshot(), format)?;

    if !interactive {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let moved = match line.trim() {
            "n" | "next" => browser.next().await,
            "p" | "prev" => browser.prev().await,
            "r" | "reload" => Ok(browser.load().await),
            "q" | "quit" => break,
            other => {
                eprintln!("Unknown command '{}': use n, p, r or q", other);
                continue;
            }
        };
        match moved {
            Ok(_) => show(&browser.snapshot(), format)?,
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}

fn show(session: &PageSession, format: &OutputFormat) -> Result<()> {
    if let Some(error) = session.error() {
        eprintln!("{}", error);
    }
    print_page(session, format)
}
