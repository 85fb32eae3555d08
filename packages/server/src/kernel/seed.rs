//! Built-in mock data loaded at process start

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domains::auth::{Role, User};
use crate::domains::posts::Post;

/// The two accounts that can log in.
pub fn seed_users() -> Vec<User> {
    vec![User::new("u1", Role::User), User::new("u2", Role::Admin)]
}

/// (author number, tags) for each seeded post, in id order.
const SEED_POSTS: [(u8, [&str; 2]); 22] = [
    (1, ["tag1", "tag2"]),
    (2, ["tag2", "tag3"]),
    (3, ["tag3", "tag1"]),
    (4, ["tag1", "tag2"]),
    (5, ["tag2", "tag3"]),
    (1, ["tag3", "tag1"]),
    (2, ["tag1", "tag2"]),
    (3, ["tag2", "tag3"]),
    (4, ["tag3", "tag1"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (2, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
    (5, ["tag1", "tag2"]),
];

/// Mock feed, newest first.
///
/// The first ten posts are an hour apart starting 2025-07-19 16:19 UTC; the
/// rest share the tenth post's timestamp.
pub fn seed_posts() -> Vec<Post> {
    let newest: DateTime<Utc> = Utc
        .with_ymd_and_hms(2025, 7, 19, 16, 19, 0)
        .single()
        .expect("seed timestamp is a valid UTC instant");

    SEED_POSTS
        .iter()
        .zip(1i64..)
        .map(|((author, tags), id)| {
            let created_at = newest - Duration::hours((id - 1).min(9));
            Post::new(
                id,
                format!("Post Title {}", id),
                format!("This is the content of post number {}.", id),
                format!("Author {}", author),
                tags,
                created_at,
            )
        })
        .collect()
}
