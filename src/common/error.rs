//! Error types for pagesim.

use std::num::ParseIntError;

use thiserror::Error;

use crate::common::config::MIN_FRAMES;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every variant is an input validation failure, detected before a single
/// step is simulated. Once parsing and configuration succeed, simulation
/// itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A field of the reference string is not a well-formed integer.
    ///
    /// `index` is the 0-based field position, `token` the trimmed text.
    #[error("invalid reference string: field {index} ({token:?}) is not an integer")]
    InvalidInput {
        index: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// Frame capacity below the minimum of one frame.
    #[error(
        "invalid frame count {n_frames}: at least {min} frame is required",
        min = MIN_FRAMES
    )]
    InvalidConfig { n_frames: usize },

    /// A policy name that does not match any known eviction policy.
    #[error("unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
