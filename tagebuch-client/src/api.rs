use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tagebuch_common::model::{
    Id,
    post::{Post, PostDraft, PostMarker},
};
use thiserror::Error;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server replied with status {0}")]
    Status(StatusCode),
}

/// The two operations the post service exposes.
#[async_trait]
pub trait BlogApi {
    async fn create_post(&self, draft: &PostDraft) -> Result<Id<PostMarker>>;
    async fn get_posts(&self) -> Result<Vec<Post>>;
}

/// [`BlogApi`] over HTTP against a running tagebuch-api server.
pub struct HttpBlogApi {
    client: Client,
    base_url: String,
}

impl HttpBlogApi {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn create_post(&self, draft: &PostDraft) -> Result<Id<PostMarker>> {
        let response = self
            .client
            .post(self.url("/posts/create"))
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    async fn get_posts(&self) -> Result<Vec<Post>> {
        let response = self.client.get(self.url("/posts")).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::HttpBlogApi;

    #[test]
    fn url_joins_without_doubled_slash() {
        let api = HttpBlogApi::new("http://localhost:8080/".to_owned());
        assert_eq!(api.url("/posts"), "http://localhost:8080/posts");

        let api = HttpBlogApi::new("http://localhost:8080".to_owned());
        assert_eq!(api.url("/posts/create"), "http://localhost:8080/posts/create");
    }
}
