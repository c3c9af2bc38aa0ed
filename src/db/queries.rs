use sqlx::SqlitePool;

use super::models::{NewPost, Post};
use super::StoreError;

/// Reject writes carrying blank required fields before they reach SQLite.
/// NOT NULL does not catch empty strings, so the store enforces this itself.
fn require_non_blank(post: &NewPost) -> Result<(), StoreError> {
    for (field, value) in [
        ("title", &post.title),
        ("subtitle", &post.subtitle),
        ("body", &post.body),
        ("author", &post.author),
        ("img_url", &post.img_url),
    ] {
        if value.trim().is_empty() {
            return Err(StoreError::EmptyField(field));
        }
    }
    Ok(())
}

/// Map a write error to `DuplicateTitle` when the UNIQUE constraint on
/// `posts.title` fired, passing everything else through as a storage failure.
fn map_write_error(e: sqlx::Error, title: &str) -> StoreError {
    if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
        StoreError::DuplicateTitle(title.to_string())
    } else {
        StoreError::Storage(e)
    }
}

/// Today's date in the display format posts carry, e.g. "August 07, 2026".
fn today() -> String {
    chrono::Local::now().format("%B %d, %Y").to_string()
}

/// Insert a new post, stamping it with a fresh id and the current date.
///
/// # Errors
///
/// `DuplicateTitle` if the title collides with an existing post,
/// `EmptyField` if a required field is blank.
pub async fn insert_post(pool: &SqlitePool, post: &NewPost) -> Result<Post, StoreError> {
    require_non_blank(post)?;

    let result = sqlx::query(
        r"
        INSERT INTO posts (title, subtitle, date, body, author, img_url)
        VALUES (?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(&post.title)
    .bind(&post.subtitle)
    .bind(today())
    .bind(&post.body)
    .bind(&post.author)
    .bind(&post.img_url)
    .execute(pool)
    .await
    .map_err(|e| map_write_error(e, &post.title))?;

    get_post(pool, result.last_insert_rowid()).await
}

/// Get every post in insertion order.
pub async fn get_all_posts(pool: &SqlitePool) -> Result<Vec<Post>, StoreError> {
    let posts = sqlx::query_as("SELECT * FROM posts ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(posts)
}

/// Get a post by its id.
///
/// # Errors
///
/// `NotFound` if no post has that id.
pub async fn get_post(pool: &SqlitePool, id: i64) -> Result<Post, StoreError> {
    sqlx::query_as("SELECT * FROM posts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound(id))
}

/// Overwrite all mutable fields of the identified post. `date` is never
/// touched here; it belongs to creation.
///
/// # Errors
///
/// `NotFound` if the post is absent, `DuplicateTitle` if the new title
/// collides with a different post, `EmptyField` if a field is blank.
pub async fn update_post(pool: &SqlitePool, id: i64, post: &NewPost) -> Result<Post, StoreError> {
    require_non_blank(post)?;

    let result = sqlx::query(
        r"
        UPDATE posts
        SET title = ?, subtitle = ?, body = ?, author = ?, img_url = ?
        WHERE id = ?
        ",
    )
    .bind(&post.title)
    .bind(&post.subtitle)
    .bind(&post.body)
    .bind(&post.author)
    .bind(&post.img_url)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| map_write_error(e, &post.title))?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(id));
    }

    get_post(pool, id).await
}

/// Remove a post permanently.
///
/// Runs inside a transaction: a failure partway leaves the store in its
/// pre-delete state.
///
/// # Errors
///
/// `NotFound` if no post has that id.
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(StoreError::NotFound(id));
    }

    tx.commit().await?;
    Ok(())
}

/// Count all posts.
pub async fn count_posts(pool: &SqlitePool) -> Result<i64, StoreError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
