use anyhow::Result;
use newsproxy_lib::types::Article;
use newsproxy_lib::{PageSession, PaginationState};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Cards,
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ArticleRow {
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

// -- Row builders --

fn build_article_rows(articles: &[Article]) -> Vec<ArticleRow> {
    articles
        .iter()
        .map(|a| ArticleRow {
            published: format_published(a),
            source: a.source_name().unwrap_or_default().to_string(),
            title: a.title.clone().unwrap_or_default(),
            url: a.url.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Cards --

fn render_card(article: &Article) -> String {
    let mut lines = vec![format!(
        "┌ {}",
        article.title.as_deref().unwrap_or("(untitled)")
    )];
    if let Some(description) = article.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("│ {}", description));
    }
    let byline = match (article.source_name(), format_published(article).as_str()) {
        (Some(source), "") => source.to_string(),
        (Some(source), date) => format!("{} · {}", source, date),
        (None, date) => date.to_string(),
    };
    if !byline.is_empty() {
        lines.push(format!("│ {}", byline));
    }
    if let Some(url) = article.url.as_deref() {
        lines.push(format!("│ {}", url));
    }
    if let Some(image) = article.image_url.as_deref() {
        lines.push(format!("│ image: {}", image));
    }
    lines.push("└".to_string());
    lines.join("\n")
}

pub fn print_cards(articles: &[Article]) {
    for article in articles {
        println!("{}\n", render_card(article));
    }
}

// -- Pagination footer --

fn render_footer(pagination: &PaginationState) -> String {
    let prev = if pagination.prev_enabled() {
        "← Prev"
    } else {
        "-"
    };
    let next = if pagination.next_enabled() {
        "Next →"
    } else {
        "-"
    };
    format!("{}  |  {}  |  {}", prev, pagination.label(), next)
}

/// The footer for a settled page with articles; `None` while loading or
/// when there is nothing to page through.
fn footer_for(session: &PageSession) -> Option<String> {
    if session.is_loading() || session.articles().is_empty() {
        return None;
    }
    Some(render_footer(&session.pagination()))
}

/// Prints the session's articles followed by the pagination footer.
pub fn print_page(session: &PageSession, format: &OutputFormat) -> Result<()> {
    let articles = session.articles();
    match format {
        OutputFormat::Cards => print_cards(articles),
        OutputFormat::Table => print_articles_table(articles),
        OutputFormat::Json => print_json(&articles),
        OutputFormat::Csv => print_articles_csv(articles)?,
        OutputFormat::Markdown => print_articles_markdown(articles),
    }
    if let Some(footer) = footer_for(session) {
        eprintln!("{}", footer);
    }
    Ok(())
}

// -- Table output --

pub fn print_articles_table(articles: &[Article]) {
    println!("{}", Table::new(build_article_rows(articles)));
}

// -- Markdown output --

pub fn print_articles_markdown(articles: &[Article]) {
    let mut table = Table::new(build_article_rows(articles));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_articles_csv(articles: &[Article]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_article_rows(articles) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// `01 Mar 2024 08:00`, the raw value when unparseable, or empty.
fn format_published(article: &Article) -> String {
    match article.published_date() {
        Some(date) => date.format("%d %b %Y %H:%M").to_string(),
        None => article.published_at.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
