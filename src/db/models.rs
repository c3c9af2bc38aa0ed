use serde::{Deserialize, Serialize};

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    /// Creation date, e.g. "August 07, 2026". Immutable after creation.
    pub date: String,
    /// Rich text body. Stored opaquely; may contain HTML.
    pub body: String,
    pub author: String,
    pub img_url: String,
}

/// Data for inserting a new post, or for overwriting the mutable fields
/// of an existing one. `id` and `date` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub author: String,
    pub img_url: String,
}
