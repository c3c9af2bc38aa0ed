//! Integration tests for the post store.

use clean_blog::db::{
    count_posts, delete_post, get_all_posts, get_post, insert_post, update_post, Database,
    NewPost, StoreError,
};
use tempfile::TempDir;

async fn setup_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.sqlite");
    let db = Database::new(&db_path)
        .await
        .expect("Failed to create database");
    (db, temp_dir)
}

fn sample_post(title: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        subtitle: "World".to_string(),
        body: "<p>hi</p>".to_string(),
        author: "A".to_string(),
        img_url: "http://x.com/i.png".to_string(),
    }
}

fn today() -> String {
    chrono::Local::now().format("%B %d, %Y").to_string()
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let (db, _temp_dir) = setup_db().await;

    let created = insert_post(db.pool(), &sample_post("Hello"))
        .await
        .expect("Failed to insert post");

    assert!(created.id > 0);
    assert_eq!(created.title, "Hello");
    assert_eq!(created.subtitle, "World");
    assert_eq!(created.body, "<p>hi</p>");
    assert_eq!(created.author, "A");
    assert_eq!(created.img_url, "http://x.com/i.png");
    assert_eq!(created.date, today());

    let fetched = get_post(db.pool(), created.id)
        .await
        .expect("Failed to get post");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_all_returns_insertion_order() {
    let (db, _temp_dir) = setup_db().await;

    insert_post(db.pool(), &sample_post("First")).await.unwrap();
    insert_post(db.pool(), &sample_post("Second")).await.unwrap();
    insert_post(db.pool(), &sample_post("Third")).await.unwrap();

    let posts = get_all_posts(db.pool()).await.unwrap();
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);

    // Stable across repeated calls with no intervening writes
    let again = get_all_posts(db.pool()).await.unwrap();
    assert_eq!(posts, again);
}

#[tokio::test]
async fn test_get_missing_post_is_not_found() {
    let (db, _temp_dir) = setup_db().await;

    let err = get_post(db.pool(), 42).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(42)));
}

#[tokio::test]
async fn test_duplicate_title_rejected() {
    let (db, _temp_dir) = setup_db().await;

    insert_post(db.pool(), &sample_post("Hello")).await.unwrap();

    let err = insert_post(db.pool(), &sample_post("Hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateTitle(ref t) if t == "Hello"));

    // Exactly one post with that title survives
    assert_eq!(count_posts(db.pool()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_blank_required_field_rejected() {
    let (db, _temp_dir) = setup_db().await;

    let mut post = sample_post("Hello");
    post.author = "   ".to_string();

    let err = insert_post(db.pool(), &post).await.unwrap_err();
    assert!(matches!(err, StoreError::EmptyField("author")));
    assert_eq!(count_posts(db.pool()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_overwrites_mutable_fields_only() {
    let (db, _temp_dir) = setup_db().await;

    let created = insert_post(db.pool(), &sample_post("Hello")).await.unwrap();

    let changes = NewPost {
        title: "Goodbye".to_string(),
        subtitle: "Moon".to_string(),
        body: "<p>bye</p>".to_string(),
        author: "B".to_string(),
        img_url: "https://x.com/j.png".to_string(),
    };
    let updated = update_post(db.pool(), created.id, &changes).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Goodbye");
    assert_eq!(updated.subtitle, "Moon");
    assert_eq!(updated.body, "<p>bye</p>");
    assert_eq!(updated.author, "B");
    assert_eq!(updated.img_url, "https://x.com/j.png");
    // The creation date never moves
    assert_eq!(updated.date, created.date);
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let (db, _temp_dir) = setup_db().await;

    let created = insert_post(db.pool(), &sample_post("Hello")).await.unwrap();

    let changes = sample_post("Renamed");
    let once = update_post(db.pool(), created.id, &changes).await.unwrap();
    let twice = update_post(db.pool(), created.id, &changes).await.unwrap();

    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_update_title_collision_with_different_post() {
    let (db, _temp_dir) = setup_db().await;

    insert_post(db.pool(), &sample_post("First")).await.unwrap();
    let second = insert_post(db.pool(), &sample_post("Second")).await.unwrap();

    // Renaming onto another post's title fails
    let err = update_post(db.pool(), second.id, &sample_post("First"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateTitle(_)));

    // Keeping its own title is not a collision
    let kept = update_post(db.pool(), second.id, &sample_post("Second")).await;
    assert!(kept.is_ok());
}

#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let (db, _temp_dir) = setup_db().await;

    let err = update_post(db.pool(), 999, &sample_post("Hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(999)));
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (db, _temp_dir) = setup_db().await;

    let created = insert_post(db.pool(), &sample_post("Hello")).await.unwrap();

    delete_post(db.pool(), created.id)
        .await
        .expect("Failed to delete post");

    let err = get_post(db.pool(), created.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(count_posts(db.pool()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_missing_post_leaves_store_unchanged() {
    let (db, _temp_dir) = setup_db().await;

    insert_post(db.pool(), &sample_post("Hello")).await.unwrap();

    let err = delete_post(db.pool(), 999).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(999)));
    assert_eq!(count_posts(db.pool()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let (db, _temp_dir) = setup_db().await;

    let first = insert_post(db.pool(), &sample_post("First")).await.unwrap();
    delete_post(db.pool(), first.id).await.unwrap();

    let second = insert_post(db.pool(), &sample_post("Second")).await.unwrap();
    assert!(second.id > first.id);
}
