use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::PostStatus;

/// Post entity - a schedulable content item.
///
/// `publish_date` and `status` are carried as the store returns them:
/// the store enforces neither a date format nor a status enum, so the raw
/// strings survive into the domain and get parsed at the projection/export
/// boundaries. A missing or empty `publish_date` means "unscheduled".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub platform: String,
    pub title: String,
    pub description: String,
    pub publish_date: Option<String>,
    pub status: String,
    pub tags: String,
    pub series_id: Option<String>,
}

impl Post {
    /// Create a new post. Status defaults to `idea` when empty.
    pub fn new(
        platform: String,
        title: String,
        description: String,
        publish_date: Option<String>,
        status: Option<String>,
        tags: String,
        series_id: Option<String>,
    ) -> Self {
        let status = match status {
            Some(s) if !s.is_empty() => s,
            _ => PostStatus::Idea.as_str().to_string(),
        };
        Self {
            id: Uuid::new_v4(),
            platform,
            title,
            description,
            publish_date,
            status,
            tags,
            series_id,
        }
    }

    /// The publish date as a calendar date, if present and well-formed.
    pub fn parsed_publish_date(&self) -> Option<NaiveDate> {
        let raw = self.publish_date.as_deref()?;
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Whether the post carries a date string that fails to parse.
    ///
    /// Distinct from "unscheduled": an absent or empty date is fine, a
    /// present-but-garbled one is what projections count as skipped.
    pub fn has_malformed_date(&self) -> bool {
        match self.publish_date.as_deref() {
            None | Some("") => false,
            Some(_) => self.parsed_publish_date().is_none(),
        }
    }
}
