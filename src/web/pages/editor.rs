//! Post editor page, shared by the create and edit flows.
//!
//! The same form renders for `/new-post` and `/edit-post/:id`; the edit
//! flow pre-fills it from the stored post. On validation failure the form
//! re-renders with prior input retained and inline field errors.

use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, FieldMessage, Form, FormHelp, Input, Label, TextArea};
use crate::forms::{error_for, FieldError, PostForm};

/// Parameters for rendering the editor page.
#[derive(Debug, Clone, Default)]
pub struct EditorPageParams<'a> {
    /// The id of the post being edited, or `None` for a new post.
    pub editing: Option<i64>,
    /// Current field values (prior input, or the stored post for edits).
    pub values: Option<&'a PostForm>,
    /// Field-level validation errors to display inline.
    pub errors: &'a [FieldError],
}

impl<'a> EditorPageParams<'a> {
    /// Create params for an empty "new post" form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the form as editing an existing post.
    #[must_use]
    pub const fn editing(mut self, id: i64) -> Self {
        self.editing = Some(id);
        self
    }

    /// Set the current field values.
    #[must_use]
    pub const fn values(mut self, values: &'a PostForm) -> Self {
        self.values = Some(values);
        self
    }

    /// Set the validation errors.
    #[must_use]
    pub const fn errors(mut self, errors: &'a [FieldError]) -> Self {
        self.errors = errors;
        self
    }
}

/// Render the post editor page.
#[must_use]
pub fn render_editor_page(params: &EditorPageParams<'_>) -> Markup {
    let heading = if params.editing.is_some() {
        "Edit Post"
    } else {
        "New Post"
    };
    let action = params.editing.map_or_else(
        || "/new-post".to_string(),
        |id| format!("/edit-post/{id}"),
    );

    let empty = PostForm::default();
    let values = params.values.unwrap_or(&empty);
    let errors = params.errors;

    let fields = html! {
        (Label::new("title", "Blog title"))
        (Input::text("title").id("title").maxlength("250").required().value(&values.title))
        @if let Some(msg) = error_for(errors, "title") {
            (FieldMessage::new(msg))
        }

        (Label::new("subtitle", "Subtitle"))
        (Input::text("subtitle").id("subtitle").maxlength("250").required().value(&values.subtitle))
        @if let Some(msg) = error_for(errors, "subtitle") {
            (FieldMessage::new(msg))
        }

        (Label::new("author", "Author's name"))
        (Input::text("author").id("author").maxlength("250").required().value(&values.author))
        @if let Some(msg) = error_for(errors, "author") {
            (FieldMessage::new(msg))
        }

        (Label::new("img_url", "Background image URL"))
        (Input::url("img_url")
            .id("img_url")
            .maxlength("250")
            .required()
            .placeholder("https://example.com/header.jpg")
            .value(&values.img_url))
        (FormHelp::new("Shown behind the post header. Must be a full http(s) URL."))
        @if let Some(msg) = error_for(errors, "img_url") {
            (FieldMessage::new(msg))
        }

        (Label::new("body", "Body"))
        (TextArea::new("body").id("body").rows(12).required().value(&values.body))
        @if let Some(msg) = error_for(errors, "body") {
            (FieldMessage::new(msg))
        }

        button type="submit" { "Submit" }
    };

    let content = html! {
        h1 { (heading) }

        @if !errors.is_empty() {
            (Alert::error("Please fix the errors below.").with_title("Error:"))
        }

        (Form::post(&action, fields).class("post-editor"))
    };

    BaseLayout::new(heading).render(content)
}
