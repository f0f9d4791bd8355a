//! API handlers and route table

pub mod auth;
pub mod authors;
pub mod book_instances;
pub mod books;
pub mod catalog;
pub mod genres;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Extractor for the authenticated administrator (JWT bearer token)
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;

        let claims = state.services.auth.authenticate(token)?;
        Ok(AuthenticatedUser(claims))
    }
}

/// JSON form body. Rejections become field-level `400` responses instead of
/// axum's plain-text `422`.
pub struct FormJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(FormJson(value))
    }
}

/// Catalog routes, mounted under `/catalog`.
///
/// For each record type `create` is registered before `:id` so the literal
/// segment is never read as an identity.
fn catalog_routes() -> Router<AppState> {
    Router::new()
        // Books
        .route("/book/create", get(books::create_book_form).post(books::create_book))
        .route("/book/:id/delete", get(books::delete_book_form).post(books::delete_book))
        .route("/book/:id/update", get(books::update_book_form).post(books::update_book))
        .route("/book/:id", get(books::get_book))
        .route("/books", get(books::list_books))
        // Authors
        .route("/author/create", get(authors::create_author_form).post(authors::create_author))
        .route("/author/:id/delete", get(authors::delete_author_form).post(authors::delete_author))
        .route("/author/:id/update", get(authors::update_author_form).post(authors::update_author))
        .route("/author/:id", get(authors::get_author))
        .route("/authors", get(authors::list_authors))
        // Genres
        .route("/genre/create", get(genres::create_genre_form).post(genres::create_genre))
        .route("/genre/:id/delete", get(genres::delete_genre_form).post(genres::delete_genre))
        .route("/genre/:id/update", get(genres::update_genre_form).post(genres::update_genre))
        .route("/genre/:id", get(genres::get_genre))
        .route("/genres", get(genres::list_genres))
        // Book instances
        .route(
            "/bookinstance/create",
            get(book_instances::create_book_instance_form).post(book_instances::create_book_instance),
        )
        .route(
            "/bookinstance/:id/delete",
            get(book_instances::delete_book_instance_form).post(book_instances::delete_book_instance),
        )
        .route(
            "/bookinstance/:id/update",
            get(book_instances::update_book_instance_form).post(book_instances::update_book_instance),
        )
        .route("/bookinstance/:id", get(book_instances::get_book_instance))
        .route("/bookinstances", get(book_instances::list_book_instances))
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(|| async { Redirect::temporary("/catalog") }))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/auth/login", post(auth::login))
        // Catalog
        .route("/catalog", get(catalog::index))
        .route("/catalog/", get(catalog::index))
        .nest("/catalog", catalog_routes())
        .with_state(state);

    app.merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use chrono::Utc;
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::{config::AppConfig, repository::Repository, services::Services};

    /// Router over a pool that never connects; only routes that stop before
    /// the database can be exercised here.
    fn app() -> (Router, AppConfig) {
        let config = AppConfig::default();
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .unwrap();
        let services = Services::new(Repository::new(pool), config.auth.clone());
        let state = AppState {
            services: Arc::new(services),
        };
        (create_router(state), config)
    }

    fn token(config: &AppConfig) -> String {
        let now = Utc::now().timestamp();
        UserClaims {
            sub: "admin".into(),
            exp: now + 60,
            iat: now,
        }
        .create_token(&config.auth.jwt_secret)
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(uri: &str, bearer: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = bearer {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_create_route_not_captured_by_id() {
        let (app, _) = app();

        let response = app
            .clone()
            .oneshot(Request::get("/catalog/genre/create").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["title"], "Create Genre");

        let response = app
            .oneshot(Request::get("/catalog/author/create").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["title"], "Create Author");
        assert!(body["author"].is_null());
    }

    #[tokio::test]
    async fn test_mutations_require_credential() {
        let (app, _) = app();
        let cases = [
            "/catalog/genre/create",
            "/catalog/author/create",
            "/catalog/book/create",
            "/catalog/bookinstance/create",
            "/catalog/book/1/update",
            "/catalog/book/1/delete",
            "/catalog/author/1/delete",
            "/catalog/genre/1/update",
            "/catalog/bookinstance/1/delete",
        ];
        for uri in cases {
            let response = app.clone().oneshot(post(uri, None, "{}")).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_invalid_token_rejected() {
        let (app, _) = app();
        let response = app
            .oneshot(post("/catalog/genre/create", Some("garbage"), r#"{"name":"Fantasy"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await["error"], "NotAuthorized");
    }

    #[tokio::test]
    async fn test_validation_errors_are_field_level() {
        let (app, config) = app();
        let token = token(&config);

        let response = app
            .clone()
            .oneshot(post("/catalog/genre/create", Some(&token), r#"{"name":"ab"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["fields"]["name"].is_array());

        let response = app
            .oneshot(post(
                "/catalog/author/create",
                Some(&token),
                r#"{"first_name":"","family_name":"Austen"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["fields"]["first_name"].is_array());
        assert!(body["fields"].get("family_name").is_none());
    }

    #[tokio::test]
    async fn test_unreadable_values_are_field_level() {
        let (app, config) = app();
        let token = token(&config);

        for date in ["16/12/1775", "1775-02-30"] {
            let body = format!(
                r#"{{"first_name":"Jane","family_name":"Austen","date_of_birth":"{}"}}"#,
                date
            );
            let response = app
                .clone()
                .oneshot(post("/catalog/author/create", Some(&token), &body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", date);
            let body = json_body(response).await;
            assert_eq!(body["error"], "BadValue");
            assert!(body["fields"]["date_of_birth"].is_array(), "{}", date);
        }

        let response = app
            .clone()
            .oneshot(post(
                "/catalog/book/create",
                Some(&token),
                r#"{"title":"Emma","author":"abc","summary":"s","isbn":"i"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["fields"]["author"].is_array());

        let response = app
            .oneshot(post("/catalog/genre/create", Some(&token), "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "BadValue");
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_credential() {
        let (app, _) = app();
        let response = app
            .oneshot(post(
                "/auth/login",
                None,
                r#"{"username":"admin","password":"admin"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_root_redirects_to_catalog() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()["location"], "/catalog");
    }
}
