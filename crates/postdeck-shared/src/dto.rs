//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a post. Omitted status defaults to `idea`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub publish_date: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub tags: String,
    pub series_id: Option<String>,
}

/// Partial update: only present fields overwrite the stored record.
///
/// The double `Option` on the nullable fields distinguishes "leave as is"
/// (absent) from "clear" (explicit null).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub platform: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<Option<String>>,
    pub status: Option<String>,
    pub tags: Option<String>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Option<String>>,
}

/// Request to move a kanban card to another column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCardRequest {
    pub post_id: Uuid,
    pub status: String,
}

/// Serde helper keeping `field: null` distinct from an absent field.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_absent_from_null() {
        let absent: UpdatePostRequest = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(absent.title.as_deref(), Some("New"));
        assert!(absent.publish_date.is_none());

        let cleared: UpdatePostRequest =
            serde_json::from_str(r#"{"publish_date":null}"#).unwrap();
        assert_eq!(cleared.publish_date, Some(None));

        let set: UpdatePostRequest =
            serde_json::from_str(r#"{"publish_date":"2024-03-15"}"#).unwrap();
        assert_eq!(set.publish_date, Some(Some("2024-03-15".to_string())));
    }
}
