use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post - one entry of the feed
///
/// `id` is unique within a store and never reassigned. `author` is a free-text
/// label, not a reference to a `User`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(with = "millis_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "millis_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// RFC 3339 timestamps with exactly three fractional digits and a `Z` suffix
mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

impl Post {
    /// Build a post whose creation and update timestamps are identical.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        tags: &[&str],
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author: author.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at,
            updated_at: created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_post_serializes_camel_case() {
        let created = Utc.with_ymd_and_hms(2025, 7, 19, 16, 19, 0).unwrap();
        let post = Post::new(1, "Title", "Body", "Author 1", &["tag1", "tag2"], created);

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["tags"], serde_json::json!(["tag1", "tag2"]));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_timestamps_carry_milliseconds() {
        let created = Utc.with_ymd_and_hms(2025, 7, 19, 16, 19, 0).unwrap();
        let post = Post::new(1, "Title", "Body", "Author 1", &[], created);

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["createdAt"], "2025-07-19T16:19:00.000Z");
        assert_eq!(value["updatedAt"], "2025-07-19T16:19:00.000Z");

        let back: Post = serde_json::from_value(value).unwrap();
        assert_eq!(back, post);
    }
}
