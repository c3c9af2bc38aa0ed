//! Validation for post editor submissions.
//!
//! Validation is a pure function from raw submitted fields to either a
//! [`NewPost`] ready for the store or a list of per-field errors. It knows
//! nothing about how the form is rendered.

use serde::Deserialize;
use url::Url;

use crate::db::NewPost;

/// Maximum length for single-line text fields, matching the schema.
const MAX_FIELD_LEN: usize = 250;

/// Raw fields submitted from the post editor form.
///
/// Every field defaults to empty so a partial submission still deserializes
/// and reports per-field errors instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub body: String,
}

impl PostForm {
    /// Build a form pre-filled from an existing post, for the edit flow.
    #[must_use]
    pub fn from_post(post: &crate::db::Post) -> Self {
        Self {
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            author: post.author.clone(),
            img_url: post.img_url.clone(),
            body: post.body.clone(),
        }
    }
}

/// A validation failure for a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Find the error message for a field, if any.
#[must_use]
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Validate a submitted post form.
///
/// Inputs are trimmed; required fields must be non-empty, single-line fields
/// at most 250 characters, and `img_url` a syntactically valid absolute
/// http(s) URL.
///
/// # Errors
///
/// Returns every failing field with a message suitable for inline display.
pub fn validate(form: &PostForm) -> Result<NewPost, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = checked_line(&mut errors, "title", &form.title);
    let subtitle = checked_line(&mut errors, "subtitle", &form.subtitle);
    let author = checked_line(&mut errors, "author", &form.author);
    let img_url = checked_line(&mut errors, "img_url", &form.img_url);

    if let Some(url) = img_url.as_deref() {
        if !is_valid_http_url(url) {
            errors.push(FieldError::new(
                "img_url",
                "must be a valid http(s) URL",
            ));
        }
    }

    let body = form.body.trim();
    if body.is_empty() {
        errors.push(FieldError::new("body", "is required"));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewPost {
        title: title.unwrap_or_default(),
        subtitle: subtitle.unwrap_or_default(),
        body: body.to_string(),
        author: author.unwrap_or_default(),
        img_url: img_url.unwrap_or_default(),
    })
}

/// Trim and check a single-line field: required, at most 250 characters.
/// Returns the trimmed value when it passed.
fn checked_line(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, "is required"));
        return None;
    }
    if value.chars().count() > MAX_FIELD_LEN {
        errors.push(FieldError::new(
            field,
            format!("must be at most {MAX_FIELD_LEN} characters"),
        ));
        return None;
    }
    Some(value.to_string())
}

fn is_valid_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PostForm {
        PostForm {
            title: "Hello".to_string(),
            subtitle: "World".to_string(),
            author: "A".to_string(),
            img_url: "http://x.com/i.png".to_string(),
            body: "<p>hi</p>".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let post = validate(&valid_form()).expect("form should validate");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.img_url, "http://x.com/i.png");
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let mut form = valid_form();
        form.title = "  Hello  ".to_string();
        form.body = "\n<p>hi</p>\n".to_string();

        let post = validate(&form).expect("form should validate");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.body, "<p>hi</p>");
    }

    #[test]
    fn test_empty_submission_reports_every_field() {
        let errors = validate(&PostForm::default()).unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["title", "subtitle", "author", "img_url", "body"]);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = valid_form();
        form.subtitle = "   ".to_string();

        let errors = validate(&form).unwrap_err();
        assert_eq!(error_for(&errors, "subtitle"), Some("is required"));
    }

    #[test]
    fn test_overlong_title_rejected() {
        let mut form = valid_form();
        form.title = "x".repeat(251);

        let errors = validate(&form).unwrap_err();
        assert_eq!(
            error_for(&errors, "title"),
            Some("must be at most 250 characters")
        );
    }

    #[test]
    fn test_title_at_limit_accepted() {
        let mut form = valid_form();
        form.title = "x".repeat(250);

        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_relative_img_url_rejected() {
        let mut form = valid_form();
        form.img_url = "/images/header.png".to_string();

        let errors = validate(&form).unwrap_err();
        assert_eq!(
            error_for(&errors, "img_url"),
            Some("must be a valid http(s) URL")
        );
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut form = valid_form();
        form.img_url = "ftp://x.com/i.png".to_string();

        assert!(validate(&form).is_err());
    }

    #[test]
    fn test_https_url_accepted() {
        let mut form = valid_form();
        form.img_url = "https://example.com/cover.jpg".to_string();

        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_error_for_missing_field_is_none() {
        let errors = vec![FieldError::new("title", "is required")];
        assert_eq!(error_for(&errors, "body"), None);
    }
}
