use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The five lifecycle states a post moves through.
///
/// The store itself keeps `status` as free text; this enum is the closed
/// boundary the workflow and the board enforce. Variant order is board
/// column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Idea,
    Production,
    Ready,
    Scheduled,
    Published,
}

impl PostStatus {
    /// All states in board column order.
    pub const ALL: [PostStatus; 5] = [
        PostStatus::Idea,
        PostStatus::Production,
        PostStatus::Ready,
        PostStatus::Scheduled,
        PostStatus::Published,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Idea => "idea",
            PostStatus::Production => "production",
            PostStatus::Ready => "ready",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idea" => Ok(PostStatus::Idea),
            "production" => Ok(PostStatus::Production),
            "ready" => Ok(PostStatus::Ready),
            "scheduled" => Ok(PostStatus::Scheduled),
            "published" => Ok(PostStatus::Published),
            other => Err(DomainError::Validation(format!(
                "unrecognized status: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_states() {
        for status in PostStatus::ALL {
            assert_eq!(status.as_str().parse::<PostStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert!("draft".parse::<PostStatus>().is_err());
        assert!("".parse::<PostStatus>().is_err());
        assert!("Idea".parse::<PostStatus>().is_err());
    }

    #[test]
    fn board_order_is_stable() {
        let order: Vec<&str> = PostStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            order,
            ["idea", "production", "ready", "scheduled", "published"]
        );
    }
}
