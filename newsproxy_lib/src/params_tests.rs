use super::*;

// -- Lenient integer parsing --

#[test]
fn leading_int_plain() {
    assert_eq!(parse_leading_int("12"), Some(12));
    assert_eq!(parse_leading_int("  7"), Some(7));
}

#[test]
fn leading_int_stops_at_garbage() {
    assert_eq!(parse_leading_int("12abc"), Some(12));
    assert_eq!(parse_leading_int("3.9"), Some(3));
    assert_eq!(parse_leading_int("1e3"), Some(1));
}

#[test]
fn leading_int_signed() {
    assert_eq!(parse_leading_int("-5"), Some(-5));
    assert_eq!(parse_leading_int("+5"), Some(5));
    assert_eq!(parse_leading_int("-"), None);
}

#[test]
fn leading_int_rejects_non_numeric() {
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int("ten"), None);
}

#[test]
fn leading_int_saturates() {
    assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
}

// -- Page size coercion --

#[test]
fn page_size_absent_uses_default() {
    assert_eq!(coerce_page_size(None, DEFAULT_PAGE_SIZE), 10);
}

#[test]
fn page_size_zero_negative_or_garbage_uses_default() {
    for raw in ["0", "-3", "abc", "", "  "] {
        assert_eq!(coerce_page_size(Some(raw), DEFAULT_PAGE_SIZE), 10, "input {raw:?}");
    }
}

#[test]
fn page_size_valid_passes_through() {
    assert_eq!(coerce_page_size(Some("25"), DEFAULT_PAGE_SIZE), 25);
    assert_eq!(coerce_page_size(Some("12abc"), DEFAULT_PAGE_SIZE), 12);
}

#[test]
fn page_size_clamped_to_max() {
    assert_eq!(coerce_page_size(Some("500"), DEFAULT_PAGE_SIZE), 100);
    assert_eq!(coerce_page_size(Some("100"), DEFAULT_PAGE_SIZE), 100);
}

// -- Page coercion --

#[test]
fn page_defaults_to_one() {
    assert_eq!(coerce_page(None), 1);
    assert_eq!(coerce_page(Some("0")), 1);
    assert_eq!(coerce_page(Some("-1")), 1);
    assert_eq!(coerce_page(Some("x")), 1);
    assert_eq!(coerce_page(Some("4")), 4);
}

// -- Text defaults --

#[test]
fn empty_text_uses_default() {
    assert_eq!(text_or_default(None, "world"), "world");
    assert_eq!(text_or_default(Some(""), "world"), "world");
    assert_eq!(text_or_default(Some("rust"), "world"), "rust");
}

// -- Strict CLI validation --

#[test]
fn search_is_sanitized() {
    assert_eq!(validate_search("  climate\u{7}  ").unwrap(), "climate");
    assert!(validate_search("\u{1}\u{2}").is_err());
    assert!(validate_search(&"a".repeat(MAX_SEARCH_LENGTH + 1)).is_err());
}

#[test]
fn page_bounds() {
    assert_eq!(validate_page(1).unwrap(), 1);
    assert!(validate_page(0).is_err());
    assert!(validate_page(-2).is_err());
}

#[test]
fn page_size_bounds() {
    assert_eq!(validate_page_size(100).unwrap(), 100);
    assert!(validate_page_size(0).is_err());
    assert!(validate_page_size(101).is_err());
}

#[test]
fn codes_are_lowercased() {
    assert_eq!(validate_code("US").unwrap(), "us");
    assert!(validate_code("usa").is_err());
    assert!(validate_code("u1").is_err());
}

// -- NewsQuery --

#[test]
fn news_query_defaults() {
    let q = NewsQuery::default();
    assert_eq!(q.search_term, "world");
    assert_eq!(q.page_size, 12);
    assert_eq!(q.page, 1);
    assert_eq!(q.language, "en");
    assert_eq!(q.country, "us");
}

#[test]
fn news_query_coerces() {
    let q = NewsQuery::default().with_page(0).with_page_size(0);
    assert_eq!(q.page, 1);
    assert_eq!(q.page_size, 12);
    assert_eq!(NewsQuery::default().with_page_size(250).page_size, 100);
}

#[test]
fn news_query_to_search_query() {
    let url = url_for(&NewsQuery::default().with_page(3));
    assert_eq!(
        url,
        "https://example.com/search?q=world&lang=en&country=us&max=12&page=3"
    );
}

#[test]
fn news_query_to_headlines_query() {
    let q = NewsQuery::default().with_category("business").with_page(2);
    let base = "https://example.com/top-headlines".parse().unwrap();
    assert_eq!(
        q.to_headlines_query().add_to_url(&base).to_string(),
        "https://example.com/top-headlines?category=business&lang=en&country=us&max=12&page=2"
    );
}

#[test]
fn news_query_blank_category_is_search() {
    assert_eq!(NewsQuery::default().with_category("  ").category, None);
    assert_eq!(
        NewsQuery::default().with_category(" sports ").category.as_deref(),
        Some("sports")
    );
}

fn url_for(q: &NewsQuery) -> String {
    let base = "https://example.com/search".parse().unwrap();
    q.to_search_query().add_to_url(&base).to_string()
}
