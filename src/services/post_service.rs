use crate::content::{Post, PostSummary};
use leptos::prelude::*;

#[server]
pub async fn get_posts() -> Result<Vec<PostSummary>, ServerFnError> {
    let posts = crate::content::summaries();
    tracing::debug!(count = posts.len(), "listing posts");
    Ok(posts)
}

#[server]
pub async fn get_post(slug: String) -> Result<Post, ServerFnError> {
    tracing::debug!(%slug, "resolving post");
    crate::content::find(&slug).map_err(|e| ServerFnError::new(e.to_string()))
}
