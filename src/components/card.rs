//! Card components for displaying posts.
//!
//! This module provides maud components for rendering post cards and grids.

use maud::{html, Markup, Render};

use crate::db::Post;

/// A post card component for showing post summaries on the home page.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
/// use crate::db::Post;
///
/// let card = PostCard::new(&post);
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
}

impl<'a> PostCard<'a> {
    /// Create a new post card.
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self { post }
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;

        html! {
            article class="post-card" {
                h3 {
                    a href=(format!("/post/{}", post.id)) { (post.title) }
                }
                p class="subtitle" { (post.subtitle) }
                p class="meta" {
                    "Posted by " span class="author" { (post.author) }
                    " on " span class="date" { (post.date) }
                }
            }
        }
    }
}

/// A grid container for displaying multiple post cards.
#[derive(Debug, Clone)]
pub struct PostGrid<'a> {
    pub posts: &'a [Post],
}

impl<'a> PostGrid<'a> {
    /// Create a new post grid.
    #[must_use]
    pub const fn new(posts: &'a [Post]) -> Self {
        Self { posts }
    }
}

impl Render for PostGrid<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="post-grid" {
                @for post in self.posts {
                    (PostCard::new(post))
                }
            }
        }
    }
}

/// An empty state message for lists with nothing to show.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    /// Create a new empty state.
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Create a default "no posts" empty state.
    #[must_use]
    pub const fn no_posts() -> Self {
        Self {
            message: "No posts yet.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            article class="empty-state" {
                p { (self.message) }
            }
        }
    }
}
