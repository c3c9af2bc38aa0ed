//! Static informational pages.

use maud::{html, Markup};

use crate::components::BaseLayout;

/// Render the about page.
#[must_use]
pub fn render_about_page() -> Markup {
    let content = html! {
        h1 { "About" }
        article {
            p {
                "Clean Blog is a small self-hosted publishing tool. Posts are "
                "written in a rich-text editor, stored in a single SQLite file, "
                "and rendered server-side."
            }
            p {
                "There are no accounts and no comments. One operator, one blog."
            }
        }
    };

    BaseLayout::new("About").render(content)
}

/// Render the contact page.
#[must_use]
pub fn render_contact_page() -> Markup {
    let content = html! {
        h1 { "Contact" }
        article {
            p { "Questions or corrections are always welcome." }
            ul {
                li { "Email: " a href="mailto:hello@example.com" { "hello@example.com" } }
                li { "Mastodon: " a href="https://mastodon.social/@cleanblog" { "@cleanblog" } }
            }
        }
    };

    BaseLayout::new("Contact").render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_page() {
        let html = render_about_page().into_string();
        assert!(html.contains("<h1>About</h1>"));
    }

    #[test]
    fn test_contact_page() {
        let html = render_contact_page().into_string();
        assert!(html.contains("<h1>Contact</h1>"));
        assert!(html.contains("mailto:"));
    }
}
