//! Talking to the remote board endpoint.
//!
//! - `client`: the `BoardApi` seam and its reqwest implementation
//! - `refresh`: the periodic GET that resynchronizes the store
//! - `submit`: drafts, validation and the two write actions

mod client;
mod refresh;
mod submit;

pub use client::{ApiError, BoardApi, HttpBoardApi};
pub use refresh::{refresh, refresh_loop};
pub use submit::{
    compose_memo, sanitize_price, submit_comment, submit_post, CommentDraft, PostDraft,
    SubmitError, ValidationError,
};
