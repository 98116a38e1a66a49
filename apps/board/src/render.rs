//! Plain-text rendering of the header and the feed.

use std::fmt::Write;

use lostfound_core::domain::{Post, PostFilter, PostType};

/// Title line plus the filter buttons, the active one bracketed.
pub fn header(title: &str, active: PostFilter) -> String {
    let buttons: Vec<String> = PostFilter::ALL
        .iter()
        .map(|filter| {
            if *filter == active {
                format!("[{}]", filter.label())
            } else {
                format!(" {} ", filter.label())
            }
        })
        .collect();

    format!("== {title} ==\n{}\n", buttons.join(" "))
}

/// One post as a card.
pub fn post_card(post: &Post) -> String {
    let badge = match post.post_type() {
        PostType::Lost => "LOST",
        PostType::Found => "FOUND",
    };

    let mut card = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(card, "[{badge}] {}", post.title);
    let _ = writeln!(card, "  {}", post.description);
    let _ = writeln!(card, "  Location: {}", post.location);
    if let Some(current) = post.current_location() {
        let _ = writeln!(card, "  Currently at: {current}");
    }
    let _ = writeln!(card, "  Contact: {}", post.contact_info);
    if let Some(image) = &post.image {
        let _ = writeln!(card, "  Image: {image}");
    }
    let _ = writeln!(card, "  Posted {}", post.created_at.format("%b %-d, %Y"));
    card
}

/// The whole feed, or a notice when nothing matches.
pub fn feed(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts to show.\n".to_string();
    }

    posts
        .iter()
        .map(post_card)
        .collect::<Vec<_>>()
        .join("\n")
}
