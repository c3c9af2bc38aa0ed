use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};

use super::pages;
use super::pages::EditorPageParams;
use super::AppState;
use crate::db::{delete_post, get_all_posts, get_post, insert_post, update_post, StoreError};
use crate::forms::{self, FieldError, PostForm};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/post/:id", get(show_post))
        .route("/new-post", get(new_post_form).post(create_post))
        .route("/edit-post/:id", get(edit_post_form).post(apply_edit))
        .route("/delete/:id", get(delete_post_handler))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>) -> Response {
    let posts = match get_all_posts(state.db.pool()).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to fetch posts: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    Html(pages::render_home_page(&posts).into_string()).into_response()
}

async fn show_post(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match get_post(state.db.pool(), id).await {
        Ok(post) => Html(pages::render_post_page(&post).into_string()).into_response(),
        Err(StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, "Post not found").into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch post {id}: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// Handler for the empty creation form (GET /new-post).
async fn new_post_form() -> Response {
    let params = EditorPageParams::new();
    Html(pages::render_editor_page(&params).into_string()).into_response()
}

/// Handler for creating a post (POST /new-post).
///
/// A failed validation re-renders the form with prior input retained and
/// inline errors; success redirects to the post list.
async fn create_post(State(state): State<AppState>, Form(form): Form<PostForm>) -> Response {
    let new_post = match forms::validate(&form) {
        Ok(p) => p,
        Err(errors) => {
            let params = EditorPageParams::new().values(&form).errors(&errors);
            return Html(pages::render_editor_page(&params).into_string()).into_response();
        }
    };

    match insert_post(state.db.pool(), &new_post).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post created");
            Redirect::to("/").into_response()
        }
        Err(StoreError::DuplicateTitle(title)) => {
            let errors = vec![FieldError::new(
                "title",
                format!("a post titled \"{title}\" already exists"),
            )];
            let params = EditorPageParams::new().values(&form).errors(&errors);
            Html(pages::render_editor_page(&params).into_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create post: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// Handler for the pre-filled edit form (GET /edit-post/:id).
async fn edit_post_form(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let post = match get_post(state.db.pool(), id).await {
        Ok(p) => p,
        Err(StoreError::NotFound(_)) => {
            return (StatusCode::NOT_FOUND, "Post not found").into_response();
        }
        Err(e) => {
            tracing::error!("Failed to fetch post {id} for edit: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    let values = PostForm::from_post(&post);
    let params = EditorPageParams::new().editing(post.id).values(&values);
    Html(pages::render_editor_page(&params).into_string()).into_response()
}

/// Handler for applying an edit (POST /edit-post/:id).
///
/// The date field is never part of the editable set; it stays as stamped
/// at creation.
async fn apply_edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<PostForm>,
) -> Response {
    // The post must exist before anything else is considered
    if let Err(e) = get_post(state.db.pool(), id).await {
        return match e {
            StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "Post not found").into_response(),
            e => {
                tracing::error!("Failed to fetch post {id} for edit: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
            }
        };
    }

    let changes = match forms::validate(&form) {
        Ok(p) => p,
        Err(errors) => {
            let params = EditorPageParams::new().editing(id).values(&form).errors(&errors);
            return Html(pages::render_editor_page(&params).into_string()).into_response();
        }
    };

    match update_post(state.db.pool(), id, &changes).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post updated");
            Redirect::to(&format!("/post/{id}")).into_response()
        }
        Err(StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, "Post not found").into_response(),
        Err(StoreError::DuplicateTitle(title)) => {
            let errors = vec![FieldError::new(
                "title",
                format!("a post titled \"{title}\" already exists"),
            )];
            let params = EditorPageParams::new().editing(id).values(&form).errors(&errors);
            Html(pages::render_editor_page(&params).into_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update post {id}: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// Handler for deleting a post (GET /delete/:id).
///
/// A delete that fails inside the store is logged and swallowed; the
/// caller always lands back on the post list. Only an id that never
/// existed yields a 404.
async fn delete_post_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match get_post(state.db.pool(), id).await {
        Ok(_) => {}
        Err(StoreError::NotFound(_)) => {
            return (StatusCode::NOT_FOUND, "Post not found").into_response();
        }
        Err(e) => {
            tracing::error!("Failed to fetch post {id} for deletion: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    }

    if let Err(e) = delete_post(state.db.pool(), id).await {
        tracing::error!("Failed to delete post {id}: {e}");
    } else {
        tracing::info!(post_id = id, "Post deleted");
    }

    Redirect::to("/").into_response()
}

// ========== Static Pages ==========

async fn about() -> Response {
    Html(pages::render_about_page().into_string()).into_response()
}

async fn contact() -> Response {
    Html(pages::render_contact_page().into_string()).into_response()
}

async fn health() -> &'static str {
    "OK"
}
