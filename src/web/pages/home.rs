//! Home page listing every post.

use maud::{html, Markup};

use crate::components::{BaseLayout, EmptyState, PostGrid};
use crate::db::Post;

/// Render the home page with all posts in insertion order.
#[must_use]
pub fn render_home_page(posts: &[Post]) -> Markup {
    let content = html! {
        hgroup {
            h1 { "Clean Blog" }
            p { "Thoughts, stories and ideas." }
        }

        @if posts.is_empty() {
            (EmptyState::new("No posts yet. Write the first one!"))
        } @else {
            (PostGrid::new(posts))
        }

        p {
            a role="button" href="/new-post" { "Create New Post" }
        }
    };

    BaseLayout::new("Home").render(content)
}
