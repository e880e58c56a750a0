//! Rendering records into Discord embed-shaped notifications

use chrono::{DateTime, Utc};
use feedwatch_core::Record;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub url: String,
    pub description: String,
    pub author: EmbedAuthor,
    pub thumbnail: EmbedImage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

pub fn render(record: &Record) -> Notification {
    let mut description = format!("by [{}]({})", record.author_name, record.author_link);
    if let Some(rating) = record.rating.filter(|r| *r != 0.0) {
        let stars = "⭐".repeat(rating.max(0.0) as usize);
        description.push_str(&format!("\n{} {}", format_rating(rating), stars));
    }

    Notification {
        title: record.book_name.clone(),
        url: record
            .review_link
            .clone()
            .unwrap_or_else(|| record.book_link.clone()),
        description,
        author: EmbedAuthor {
            name: format!("{} {}", record.username, record.action),
            url: record.profile_link.clone(),
            icon_url: record.profile_image_url.clone(),
        },
        thumbnail: EmbedImage {
            url: record.book_cover_url.clone(),
        },
        timestamp: record.timestamp,
    }
}

// Whole ratings keep one decimal ("4.0"), others print as-is ("3.75")
fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        rating.to_string()
    }
}
