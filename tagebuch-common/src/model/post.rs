use crate::model::{Id, timestamp::Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

/// One blog entry. Write-once: the store never mutates or removes a post
/// after it was appended.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub title: String,
    pub body: String,
    pub author: String,
    pub timestamp: Timestamp,
}

/// The client-supplied part of a post. Id and timestamp are assigned by
/// the store on creation.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub author: String,
}
