use crate::server::{ServerError, ServerRouter, json::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use serde::Deserialize;
use std::sync::Arc;
use tagebuch_common::model::{
    Id,
    post::{Post, PostDraft, PostMarker},
};
use tagebuch_store::store::PostStore;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_posts)
        .typed_post(create_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts", rejection(ServerError))]
struct GetPostsPath();

async fn get_posts(
    GetPostsPath(): GetPostsPath,
    State(store): State<Arc<PostStore>>,
) -> Json<Vec<Post>> {
    Json(store.posts().await)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/create", rejection(ServerError))]
struct CreatePostPath();

async fn create_post(
    CreatePostPath(): CreatePostPath,
    State(store): State<Arc<PostStore>>,
    Json(draft): Json<PostDraft>,
) -> Json<Id<PostMarker>> {
    let id = store.create_post(draft).await;

    Json(id)
}
