use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::UtcDateTime;

/// A creation instant as nanoseconds since the Unix epoch.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i128);

impl Timestamp {
    #[must_use]
    pub fn new(nanos: i128) -> Self {
        Self(nanos)
    }

    #[must_use]
    pub fn now() -> Self {
        UtcDateTime::now().into()
    }

    #[must_use]
    pub fn get(self) -> i128 {
        self.0
    }
}

impl From<UtcDateTime> for Timestamp {
    fn from(value: UtcDateTime) -> Self {
        Self(value.unix_timestamp_nanos())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
#[error("Timestamp is outside the representable datetime range: {0}")]
pub struct TimestampOutOfRangeError(i128);

impl TryFrom<Timestamp> for UtcDateTime {
    type Error = TimestampOutOfRangeError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        UtcDateTime::from_unix_timestamp_nanos(value.0)
            .map_err(|_| TimestampOutOfRangeError(value.0))
    }
}
