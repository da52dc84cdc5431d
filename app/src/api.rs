//! ==============================================================================
//! api.rs - API client for the example pages
//! ==============================================================================
//!
//! every example page talks to a json placeholder api. the base url defaults to
//! the public jsonplaceholder instance and can be overridden at build time with
//! DEMO_API_BASE.
//!
//! ==============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// path the error example requests; the api answers it with a 404
pub const MISSING_RESOURCE: &str = "/this-route-does-not-exist";

pub fn api_base() -> &'static str {
    option_env!("DEMO_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

// ==============================================================================
// errors
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("{url} responded with status {status}")]
    Status { status: u16, url: String },

    #[error("could not encode request body: {0}")]
    Encode(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

// ==============================================================================
// resource types
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u32,
}

/// post together with the user who wrote it
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredPost {
    pub post: Post,
    pub author: User,
}

// ==============================================================================
// transport
// ==============================================================================

fn url_for(path: &str) -> String {
    join_url(api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        warn!(status = response.status(), url = %response.url(), "request rejected");
        return Err(ApiError::Status {
            status: response.status(),
            url: response.url(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = url_for(path);
    debug!(%url, "GET");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    decode(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = url_for(path);
    debug!(%url, "POST");

    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = Request::post(&url)
        .header("Content-Type", "application/json; charset=UTF-8")
        .body(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    decode(response).await
}

// ==============================================================================
// API functions
// ==============================================================================

/// Fetch a single todo
pub async fn fetch_todo(id: u32) -> Result<Todo, ApiError> {
    get_json(&format!("/todos/{}", id)).await
}

pub async fn fetch_user(id: u32) -> Result<User, ApiError> {
    get_json(&format!("/users/{}", id)).await
}

pub async fn fetch_post(id: u32) -> Result<Post, ApiError> {
    get_json(&format!("/posts/{}", id)).await
}

/// Fetch a user and a post at the same time
///
/// both requests are in flight together; each result is reported on its own so
/// one failing does not hide the other.
pub async fn fetch_user_and_post(
    user_id: u32,
    post_id: u32,
) -> (Result<User, ApiError>, Result<Post, ApiError>) {
    futures::join!(fetch_user(user_id), fetch_post(post_id))
}

/// Fetch a post, then the author it points at
pub async fn fetch_post_with_author(post_id: u32) -> Result<AuthoredPost, ApiError> {
    let post = fetch_post(post_id).await?;
    let author = fetch_user(post.user_id).await?;
    Ok(AuthoredPost { post, author })
}

/// Create a post; the api echoes it back with an id assigned
pub async fn create_post(new_post: &NewPost) -> Result<Post, ApiError> {
    post_json("/posts", new_post).await
}

/// Request a resource that does not exist
pub async fn fetch_missing() -> Result<serde_json::Value, ApiError> {
    get_json(MISSING_RESOURCE).await
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_todo_uses_camel_case_fields() {
        let json = r#"{"userId":1,"id":1,"title":"delectus aut autem","completed":false}"#;

        let todo: Todo = serde_json::from_str(json).unwrap();

        assert_eq!(todo.user_id, 1);
        assert!(!todo.completed);
    }

    #[rstest]
    fn test_user_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"city": "Gwenborough"}
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.username, "Bret");
    }

    #[rstest]
    fn test_new_post_serializes_user_id_as_camel_case() {
        let new_post = NewPost {
            title: "foo".to_string(),
            body: "bar".to_string(),
            user_id: 1,
        };

        let json = serde_json::to_string(&new_post).unwrap();

        assert!(json.contains("\"userId\":1"));
    }

    #[rstest]
    #[case("https://api.example", "/todos/1", "https://api.example/todos/1")]
    #[case("https://api.example/", "/todos/1", "https://api.example/todos/1")]
    #[case("https://api.example/v1//", "/posts", "https://api.example/v1/posts")]
    fn test_join_url_trims_trailing_slashes(
        #[case] base: &str,
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(join_url(base, path), expected);
    }

    #[rstest]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 404,
            url: url_for(MISSING_RESOURCE),
        };

        assert_eq!(
            err.to_string(),
            format!("{}{} responded with status 404", api_base(), MISSING_RESOURCE)
        );
    }
}
