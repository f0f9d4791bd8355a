//! API integration tests
//!
//! Run against a live server with a migrated database:
//! `CATALOG_ADMIN_PASSWORD=... cargo test --test api_tests -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

fn admin_password() -> String {
    std::env::var("CATALOG_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string())
}

/// Helper to get an administrator token
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": admin_password()
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

async fn post_json(client: &Client, token: &str, path: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{}{}", BASE_URL, path))
        .header("Authorization", format!("Bearer {}", token))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
}

async fn delete(client: &Client, token: &str, url: &str) -> reqwest::Response {
    client
        .post(format!("{}{}/delete", BASE_URL, url))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": admin_password()
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_mutation() {
    let client = Client::new();

    let response = client
        .post(format!("{}/catalog/genre/create", BASE_URL))
        .json(&json!({ "name": "Fantasy" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_catalog_index() {
    let client = Client::new();

    let response = client
        .get(format!("{}/catalog", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["book_count"].is_number());
    assert!(body["data"]["book_instance_available_count"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_genre_create_list_detail() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = post_json(&client, &token, "/catalog/genre/create", json!({ "name": "Fantasy" })).await;
    assert!(response.status().is_success());
    let genre: Value = response.json().await.expect("Failed to parse response");
    let id = genre["id"].as_i64().expect("No genre ID");
    let url = genre["url"].as_str().expect("No genre url").to_string();
    assert_eq!(url, format!("/catalog/genre/{}", id));

    // Same name again resolves to the existing record
    let response = post_json(&client, &token, "/catalog/genre/create", json!({ "name": "fantasy" })).await;
    assert_eq!(response.status(), 200);
    let again: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(again["id"], genre["id"]);

    let genres: Value = client
        .get(format!("{}/catalog/genres", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(genres
        .as_array()
        .expect("Genre list is not an array")
        .iter()
        .any(|g| g["id"] == genre["id"]));

    let detail: Value = client
        .get(format!("{}{}", BASE_URL, url))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(detail["genre"]["name"], "Fantasy");
    assert_eq!(detail["genre"]["url"], url.as_str());

    // Only clean up when no book was filed under it by another run
    if detail["books"].as_array().map(|b| b.is_empty()).unwrap_or(false) {
        assert_eq!(delete(&client, &token, &url).await.status(), 204);
    }
}

#[tokio::test]
#[ignore]
async fn test_genre_name_too_short() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = post_json(&client, &token, "/catalog/genre/create", json!({ "name": "ab" })).await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["fields"]["name"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_author_lifespan() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = post_json(
        &client,
        &token,
        "/catalog/author/create",
        json!({
            "first_name": "Jane",
            "family_name": "Austen",
            "date_of_birth": "1775-12-16"
        }),
    )
    .await;
    assert_eq!(response.status(), 201);

    let author: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(author["name"], "Austen, Jane");
    assert!(author["lifespan"]
        .as_str()
        .expect("No lifespan")
        .starts_with("December 16th, 1775 - "));
    assert_eq!(author["date_of_birth_formatted"], "1775-12-16");
    assert_eq!(author["date_of_death_formatted"], "");

    let url = author["url"].as_str().expect("No author url");
    assert_eq!(delete(&client, &token, url).await.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_book_with_copy_cannot_be_deleted() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let author: Value = post_json(
        &client,
        &token,
        "/catalog/author/create",
        json!({ "first_name": "Mary", "family_name": "Shelley" }),
    )
    .await
    .json()
    .await
    .expect("Failed to parse response");

    let response = post_json(
        &client,
        &token,
        "/catalog/book/create",
        json!({
            "title": "Frankenstein",
            "author": author["id"],
            "summary": "A scientist creates a living being.",
            "isbn": "9780486282114"
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["author"]["name"], "Shelley, Mary");

    let response = post_json(
        &client,
        &token,
        "/catalog/bookinstance/create",
        json!({ "book": book["id"], "imprint": "Dover, 1994", "status": "Available" }),
    )
    .await;
    assert_eq!(response.status(), 201);
    let copy: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(copy["book"]["title"], "Frankenstein");

    let book_url = book["url"].as_str().expect("No book url");
    let author_url = author["url"].as_str().expect("No author url");
    let copy_url = copy["url"].as_str().expect("No copy url");

    assert_eq!(delete(&client, &token, book_url).await.status(), 409);
    assert_eq!(delete(&client, &token, author_url).await.status(), 409);

    assert_eq!(delete(&client, &token, copy_url).await.status(), 204);
    assert_eq!(delete(&client, &token, book_url).await.status(), 204);
    assert_eq!(delete(&client, &token, author_url).await.status(), 204);
}

async fn get_json(client: &Client, url: &str) -> Value {
    client
        .get(format!("{}{}", BASE_URL, url))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response")
}

async fn create_genre(client: &Client, token: &str, name: &str) -> Value {
    let response = post_json(client, token, "/catalog/genre/create", json!({ "name": name })).await;
    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

fn genre_ids(book: &Value) -> Vec<i64> {
    let mut ids: Vec<i64> = book["genre"]
        .as_array()
        .expect("No genre list")
        .iter()
        .filter_map(|g| g["id"].as_i64())
        .collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
#[ignore]
async fn test_book_genres_replaced_and_genre_in_use_kept() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let gothic = create_genre(&client, &token, "Gothic Fiction").await;
    let horror = create_genre(&client, &token, "Horror Classics").await;
    let author: Value = post_json(
        &client,
        &token,
        "/catalog/author/create",
        json!({ "first_name": "Bram", "family_name": "Stoker" }),
    )
    .await
    .json()
    .await
    .expect("Failed to parse response");

    let book: Value = post_json(
        &client,
        &token,
        "/catalog/book/create",
        json!({
            "title": "Dracula",
            "author": author["id"],
            "summary": "A count travels to England.",
            "isbn": "9780141439846",
            "genre": [gothic["id"]]
        }),
    )
    .await
    .json()
    .await
    .expect("Failed to parse response");
    let book_url = book["url"].as_str().expect("No book url").to_string();
    let gothic_url = gothic["url"].as_str().expect("No genre url").to_string();
    let horror_url = horror["url"].as_str().expect("No genre url").to_string();

    // A genre with a book filed under it stays put
    assert_eq!(delete(&client, &token, &gothic_url).await.status(), 409);
    assert!(get_json(&client, &gothic_url).await["genre"]["id"] == gothic["id"]);

    // Update replaces the whole genre set
    let response = post_json(
        &client,
        &token,
        &format!("{}/update", book_url),
        json!({
            "title": "Dracula",
            "author": author["id"],
            "summary": "A count travels to England.",
            "isbn": "9780141439846",
            "genre": [horror["id"]]
        }),
    )
    .await;
    assert_eq!(response.status(), 200);

    let detail = get_json(&client, &book_url).await;
    let horror_id = horror["id"].as_i64().expect("No genre ID");
    assert_eq!(genre_ids(&detail["book"]), vec![horror_id]);

    // The old genre is free again, the new one is now in use
    assert_eq!(delete(&client, &token, &gothic_url).await.status(), 204);
    assert_eq!(delete(&client, &token, &horror_url).await.status(), 409);

    assert_eq!(delete(&client, &token, &book_url).await.status(), 204);
    assert_eq!(delete(&client, &token, &horror_url).await.status(), 204);
    let author_url = author["url"].as_str().expect("No author url");
    assert_eq!(delete(&client, &token, author_url).await.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_book_with_unknown_author_rejected() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = post_json(
        &client,
        &token,
        "/catalog/book/create",
        json!({
            "title": "Orphan",
            "author": i32::MAX,
            "summary": "No author.",
            "isbn": "0"
        }),
    )
    .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_missing_record() {
    let client = Client::new();

    let response = client
        .get(format!("{}/catalog/author/{}", BASE_URL, i32::MAX))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
