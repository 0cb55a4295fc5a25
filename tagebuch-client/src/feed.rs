use crate::api::BlogApi;
use tagebuch_common::model::post::{Post, PostDraft};
use tracing::error;

/// Client-side view of the post list.
///
/// The feed never fabricates state: the list only changes by replacing
/// it with what `getPosts` returned, so a failed call leaves the
/// previous (possibly stale) list visible. Failures are logged and
/// swallowed; there is no retry and no separate error state.
#[derive(Debug)]
pub struct Feed<Api> {
    api: Api,
    posts: Vec<Post>,
    loading: bool,
    submitting: bool,
}

impl<Api: BlogApi> Feed<Api> {
    /// A fresh feed is loading until the first [`load_posts`] call
    /// resolves.
    ///
    /// [`load_posts`]: Self::load_posts
    #[must_use]
    pub fn new(api: Api) -> Self {
        Self {
            api,
            posts: Vec::new(),
            loading: true,
            submitting: false,
        }
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replaces the list with the store's full state.
    ///
    /// On failure the error is logged and the list keeps its previous
    /// contents. The loading flag clears either way.
    pub async fn load_posts(&mut self) {
        match self.api.get_posts().await {
            Ok(posts) => self.posts = posts,
            Err(error) => error!(%error, "Error fetching posts"),
        }
        self.loading = false;
    }

    /// Submits a new post, refreshing the list on success.
    ///
    /// Returns whether the submission was accepted, so a caller can keep
    /// its form open for a manual retry when it was not. On failure the
    /// list is untouched. The submitting flag clears on both paths.
    pub async fn submit_post(&mut self, title: &str, body: &str, author: &str) -> bool {
        self.submitting = true;

        let draft = PostDraft {
            title: title.to_owned(),
            body: body.to_owned(),
            author: author.to_owned(),
        };
        let submitted = match self.api.create_post(&draft).await {
            Ok(_) => {
                self.load_posts().await;
                true
            }
            Err(error) => {
                error!(%error, "Error creating post");
                false
            }
        };

        self.submitting = false;
        submitted
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{BlogApi, ClientError, Result},
        feed::Feed,
    };
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    };
    use tagebuch_common::{
        model::{
            Id,
            post::{Post, PostDraft, PostMarker},
            timestamp::Timestamp,
        },
        sequence::Sequence,
    };

    #[derive(Debug, Default)]
    struct StubState {
        fail: AtomicBool,
        sequence: Sequence,
        posts: Mutex<Vec<Post>>,
    }

    /// In-memory [`BlogApi`] with switchable failure.
    #[derive(Clone, Debug, Default)]
    struct StubApi(Arc<StubState>);

    impl StubApi {
        fn set_failing(&self, fail: bool) {
            self.0.fail.store(fail, Ordering::Relaxed);
        }

        fn check_reachable(&self) -> Result<()> {
            if self.0.fail.load(Ordering::Relaxed) {
                Err(ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl BlogApi for StubApi {
        async fn create_post(&self, draft: &PostDraft) -> Result<Id<PostMarker>> {
            self.check_reachable()?;

            let id = Id::from(self.0.sequence.generate());
            self.0.posts.lock().unwrap().push(Post {
                id,
                title: draft.title.clone(),
                body: draft.body.clone(),
                author: draft.author.clone(),
                timestamp: Timestamp::now(),
            });
            Ok(id)
        }

        async fn get_posts(&self) -> Result<Vec<Post>> {
            self.check_reachable()?;

            Ok(self.0.posts.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn load_failure_leaves_no_posts_and_clears_loading() {
        let api = StubApi::default();
        api.set_failing(true);

        let mut feed = Feed::new(api);
        assert!(feed.is_loading());

        feed.load_posts().await;

        assert!(feed.posts().is_empty());
        assert!(!feed.is_loading());
    }

    #[tokio::test]
    async fn submit_refreshes_the_list() {
        let mut feed = Feed::new(StubApi::default());

        assert!(feed.submit_post("Hello", "World", "Alice").await);

        assert!(!feed.is_submitting());
        assert_eq!(feed.posts().len(), 1);
        let post = &feed.posts()[0];
        assert_eq!(post.id.get(), 0);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.body, "World");
        assert_eq!(post.author, "Alice");
    }

    #[tokio::test]
    async fn submit_failure_leaves_the_list_untouched() {
        let api = StubApi::default();
        let mut feed = Feed::new(api.clone());

        feed.submit_post("first", "body", "author").await;
        api.set_failing(true);

        assert!(!feed.submit_post("second", "body", "author").await);

        assert!(!feed.is_submitting());
        assert_eq!(feed.posts().len(), 1);
        assert_eq!(feed.posts()[0].title, "first");
    }

    #[tokio::test]
    async fn load_failure_keeps_the_stale_list() {
        let api = StubApi::default();
        let mut feed = Feed::new(api.clone());

        feed.submit_post("kept", "body", "author").await;
        api.set_failing(true);

        feed.load_posts().await;

        assert_eq!(feed.posts().len(), 1);
        assert_eq!(feed.posts()[0].title, "kept");
    }
}
