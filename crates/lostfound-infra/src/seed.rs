//! Sample feed shown when a board session starts.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use lostfound_core::domain::{ImageRef, NewPost, Post, PostId};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=300";

fn on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn sample(n: u128, post: NewPost, created_at: DateTime<Utc>) -> Post {
    Post::with_identity(post, PostId::from(Uuid::from_u128(n)), created_at)
}

/// The demonstration posts, in feed order.
///
/// The order is deliberately not sorted by date; the feed is ordered by
/// insertion only.
pub fn sample_posts() -> Vec<Post> {
    let placeholder = ImageRef::new(PLACEHOLDER_IMAGE);

    vec![
        sample(
            1,
            NewPost::lost(
                "Lost Black Wallet",
                "Lost my black leather wallet near the library on Monday afternoon. Contains ID and cards.",
                "Main Library, 2nd Floor",
                "John Doe (PES1202200123)",
            )
            .with_image(placeholder.clone()),
            on(2023, 10, 10),
        ),
        sample(
            2,
            NewPost::found(
                "Found Blue Water Bottle",
                "Found a blue Hydro Flask water bottle with stickers on it.",
                "EC Block, Room 204",
                "EC Block Reception",
                "Jane Smith (PES1202200456)",
            )
            .with_image(placeholder.clone()),
            on(2023, 10, 11),
        ),
        sample(
            3,
            NewPost::lost(
                "Lost Calculator",
                "Lost my scientific calculator during the physics exam.",
                "Physics Lab",
                "Mike Johnson (PES1202200789)",
            ),
            on(2023, 10, 9),
        ),
        sample(
            4,
            NewPost::found(
                "Found Student ID Card",
                "Found a student ID card near the canteen.",
                "Main Canteen",
                "Student Affairs Office",
                "Admin Office",
            )
            .with_image(placeholder),
            on(2023, 10, 12),
        ),
    ]
}
