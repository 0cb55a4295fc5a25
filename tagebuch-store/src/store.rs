use tagebuch_common::model::{
    Id,
    post::{Post, PostDraft, PostMarker},
    timestamp::Timestamp,
};
use tagebuch_common::sequence::Sequence;
use tokio::sync::RwLock;

/// Process-lifetime holder of every post ever created.
///
/// The log is append-only: records are written once and never mutated or
/// removed. Identifiers are allocated under the write lock together with
/// the append, so the log stays ascending by identifier.
#[derive(Debug, Default)]
pub struct PostStore {
    sequence: Sequence,
    log: RwLock<Vec<Post>>,
}

impl PostStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new post and returns its identifier.
    ///
    /// Always succeeds; the timestamp is captured at append time.
    pub async fn create_post(&self, draft: PostDraft) -> Id<PostMarker> {
        let mut log = self.log.write().await;

        let id = Id::from(self.sequence.generate());
        log.push(Post {
            id,
            title: draft.title,
            body: draft.body,
            author: draft.author,
            timestamp: Timestamp::now(),
        });

        id
    }

    /// Returns every post, in creation order (ascending identifier).
    pub async fn posts(&self) -> Vec<Post> {
        self.log.read().await.clone()
    }
}
