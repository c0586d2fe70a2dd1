//! HTTP surface for the Huddle entity service.
//!
//! Thin plumbing over `huddle-engine`: handlers deserialize the request,
//! take the database lock, call one engine operation, and serialize the
//! result. Every mutating handler holds the write lock for the whole
//! operation, so multi-step cascades are serialized against all other
//! requests.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use huddle_engine::{member_types, posts, profiles, users, Database, EngineError, ErrorKind};
use huddle_types::{
    MemberType, NewPost, NewProfile, NewUser, Post, PostPatch, Profile, ProfilePatch, User,
    UserPatch,
};
use serde::Deserialize;
use tokio::sync::RwLock;

/// Shared handler state: the in-memory database behind a single lock.
#[derive(Clone, Default)]
pub struct AppState {
    db: Arc<RwLock<Database>>,
}

impl AppState {
    /// Creates a state with an empty database and default member types.
    #[must_use]
    pub fn new() -> Self {
        Self {
            db: Arc::new(RwLock::new(Database::new())),
        }
    }

    /// Creates a state around an existing database.
    #[must_use]
    pub fn with_database(db: Database) -> Self {
        Self {
            db: Arc::new(RwLock::new(db)),
        }
    }
}

/// Engine error carried out to the wire.
///
/// Maps the engine's error kind to a status code and renders the message as
/// `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(EngineError);

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).patch(patch_user).delete(delete_user),
        )
        .route("/users/{id}/subscribeTo", axum::routing::post(subscribe))
        .route(
            "/users/{id}/unsubscribeFrom",
            axum::routing::post(unsubscribe),
        )
        .route("/profiles", get(list_profiles).post(create_profile))
        .route(
            "/profiles/{id}",
            get(get_profile).patch(patch_profile).delete(delete_profile),
        )
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(patch_post).delete(delete_post),
        )
        .route("/member-types", get(list_member_types))
        .route("/member-types/{id}", get(get_member_type))
        .with_state(state)
}

// ── Users ────────────────────────────────────────────────────────

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(users::list(&*state.db.read().await))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(users::get(&*state.db.read().await, &id)?))
}

async fn create_user(State(state): State<AppState>, Json(draft): Json<NewUser>) -> Json<User> {
    Json(users::create(&mut *state.db.write().await, draft))
}

async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(users::update(&mut *state.db.write().await, &id, patch)?))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(users::delete(&mut *state.db.write().await, &id)?))
}

/// Body of the subscribe/unsubscribe routes. The path carries the target
/// user; this carries the acting subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeBody {
    user_id: String,
}

async fn subscribe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SubscribeBody>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(users::subscribe(
        &mut *state.db.write().await,
        &id,
        &body.user_id,
    )?))
}

async fn unsubscribe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SubscribeBody>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(users::unsubscribe(
        &mut *state.db.write().await,
        &id,
        &body.user_id,
    )?))
}

// ── Profiles ─────────────────────────────────────────────────────

async fn list_profiles(State(state): State<AppState>) -> Json<Vec<Profile>> {
    Json(profiles::list(&*state.db.read().await))
}

async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(profiles::get(&*state.db.read().await, &id)?))
}

async fn create_profile(
    State(state): State<AppState>,
    Json(draft): Json<NewProfile>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(profiles::create(&mut *state.db.write().await, draft)?))
}

async fn patch_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(profiles::update(
        &mut *state.db.write().await,
        &id,
        patch,
    )?))
}

async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(profiles::delete(&mut *state.db.write().await, &id)?))
}

// ── Posts ────────────────────────────────────────────────────────

async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(posts::list(&*state.db.read().await))
}

async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(posts::get(&*state.db.read().await, &id)?))
}

async fn create_post(State(state): State<AppState>, Json(draft): Json<NewPost>) -> Json<Post> {
    Json(posts::create(&mut *state.db.write().await, draft))
}

async fn patch_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PostPatch>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(posts::update(&mut *state.db.write().await, &id, patch)?))
}

async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(posts::delete(&mut *state.db.write().await, &id)?))
}

// ── Member types ─────────────────────────────────────────────────

async fn list_member_types(State(state): State<AppState>) -> Json<Vec<MemberType>> {
    Json(member_types::list(&*state.db.read().await))
}

async fn get_member_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MemberType>, ApiError> {
    Ok(Json(member_types::get(&*state.db.read().await, &id)?))
}
