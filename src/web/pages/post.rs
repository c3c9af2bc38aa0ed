//! Single-post view.

use maud::{html, Markup, PreEscaped};

use crate::components::BaseLayout;
use crate::db::Post;

/// Render the single-post page.
#[must_use]
pub fn render_post_page(post: &Post) -> Markup {
    let content = html! {
        article class="post" {
            header {
                h1 { (post.title) }
                p class="subtitle" { (post.subtitle) }
                p class="meta" {
                    "Posted by " span class="author" { (post.author) }
                    " on " span class="date" { (post.date) }
                }
                img class="post-hero" src=(post.img_url) alt=(post.title);
            }
            // Body is operator-authored rich text; rendered unescaped.
            section class="post-body" {
                (PreEscaped(&post.body))
            }
            footer class="post-actions" {
                a role="button" href=(format!("/edit-post/{}", post.id)) { "Edit Post" }
                " "
                a class="danger" href=(format!("/delete/{}", post.id)) { "Delete" }
            }
        }
    };

    BaseLayout::new(&post.title).render(content)
}
