use feedwatch_core::{NewnessCache, Record, SeenStore};
use std::path::Path;

pub fn activity(id: &str, user: &str, book: &str, action: &str) -> Record {
    Record {
        id: id.to_string(),
        username: user.to_string(),
        profile_link: format!("https://app.thestorygraph.com/profile/{user}"),
        profile_image_url: Some(format!("https://cdn.example/avatars/{user}.png")),
        book_cover_url: format!("https://cdn.example/covers/{book}.jpg"),
        book_link: format!("https://app.thestorygraph.com/books/{book}"),
        book_name: book.replace('-', " "),
        author_name: "Various".to_string(),
        author_link: "https://app.thestorygraph.com/authors/various".to_string(),
        review_link: None,
        rating: None,
        action: action.to_string(),
        timestamp: None,
        schema_version: Record::SCHEMA_VERSION,
    }
}

pub fn record_a() -> Record {
    activity("101", "ann", "dune", "wants to read")
}

pub fn record_b() -> Record {
    activity("102", "bob", "emma", "is currently reading")
}

pub fn record_c() -> Record {
    let mut c = activity("103", "cat", "middlemarch", "finished reading");
    c.rating = Some(4.25);
    c.review_link = Some("https://app.thestorygraph.com/reviews/c".to_string());
    c
}

/// A cache over `path` as a freshly started process would build it
pub fn open_cache(path: &Path) -> NewnessCache {
    NewnessCache::new(SeenStore::open(path))
}

pub fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}
