use gnews_api::types::{ArticleList, ErrorBody};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_search_full() {
    let json = load_fixture("search.json");
    let resp: ArticleList = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.articles.len(), 12);
    assert_eq!(resp.total_articles, 25);

    let article = &resp.articles[0];
    assert_eq!(article.title.as_deref(), Some("World story 1"));
    assert_eq!(article.description.as_deref(), Some("Description 1"));
    assert_eq!(article.url.as_deref(), Some("https://news.example.com/1"));
    assert_eq!(
        article.image_url.as_deref(),
        Some("https://img.example.com/1.jpg")
    );
    assert_eq!(article.source_name(), Some("Example Wire"));
    assert!(article.published_date().is_some());
}

#[test]
fn deserialize_headlines_with_missing_fields() {
    let json = load_fixture("headlines.json");
    let resp: ArticleList = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total_articles, 3);

    let sparse = &resp.articles[2];
    assert_eq!(sparse.title, None);
    assert_eq!(sparse.image_url, None);
    assert_eq!(sparse.source_name(), None);
    assert_eq!(sparse.published_at, None);
}

#[test]
fn deserialize_empty() {
    let json = load_fixture("empty.json");
    let resp: ArticleList = serde_json::from_str(&json).unwrap();
    assert!(resp.articles.is_empty());
    assert_eq!(resp.total_articles, 0);
}

#[test]
fn missing_total_defaults_to_zero() {
    let resp: ArticleList = serde_json::from_str(r#"{"articles":[]}"#).unwrap();
    assert_eq!(resp.total_articles, 0);
}

#[test]
fn image_field_round_trips_under_wire_name() {
    let json = load_fixture("search.json");
    let resp: ArticleList = serde_json::from_str(&json).unwrap();
    let value = serde_json::to_value(&resp.articles[0]).unwrap();
    assert_eq!(value["image"], "https://img.example.com/1.jpg");
    assert_eq!(value["publishedAt"], "2024-03-01T08:00:00Z");
}

#[test]
fn deserialize_error_body() {
    let json = load_fixture("error_unauthorized.json");
    let body: ErrorBody = serde_json::from_str(&json).unwrap();
    assert_eq!(body.text().as_deref(), Some("You did not provide an API key."));
}
