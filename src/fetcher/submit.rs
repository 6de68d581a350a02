use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::client::{ApiError, BoardApi};
use crate::constants::{
    ALERT_MISSING_CONTENT, ALERT_MISSING_ITEM, ALERT_MISSING_TITLE, ALERT_NO_POST_SELECTED,
    LABEL_ANONYMOUS, POST_AUTHOR_ID,
};
use crate::model::{Action, NewComment, NewPost};

/// Input rejected before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("item name is required")]
    MissingItem,
    #[error("comment content is required")]
    MissingContent,
    #[error("no post is selected")]
    NoPostSelected,
}

impl ValidationError {
    /// Text of the blocking alert shown to the user.
    #[must_use]
    pub const fn alert_text(&self) -> &'static str {
        match self {
            Self::MissingTitle => ALERT_MISSING_TITLE,
            Self::MissingItem => ALERT_MISSING_ITEM,
            Self::MissingContent => ALERT_MISSING_CONTENT,
            Self::NoPostSelected => ALERT_NO_POST_SELECTED,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The endpoint answered `success: false`.
    #[error("rejected by endpoint: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Raw compose form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    pub title: String,
    pub item: String,
    pub price: String,
    pub location: String,
    pub content: String,
}

impl PostDraft {
    /// Check the required fields.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.item.trim().is_empty() {
            return Err(ValidationError::MissingItem);
        }
        Ok(())
    }

    /// Build the `new_post` action. Does not validate.
    #[must_use]
    pub fn to_action(&self) -> Action {
        Action::NewPost(NewPost {
            item_name: self.title.trim().to_string(),
            item_type: self.item.trim().to_string(),
            price: sanitize_price(&self.price),
            memo: compose_memo(&self.location, &self.content),
            comment_author_id: POST_AUTHOR_ID.to_string(),
        })
    }
}

/// Raw comment form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentDraft {
    pub author: String,
    pub content: String,
}

impl CommentDraft {
    /// Check the draft against the selected post.
    ///
    /// # Errors
    ///
    /// Returns `MissingContent` for blank content, then `NoPostSelected`.
    pub fn validate(&self, post_id: Option<&str>) -> Result<(), ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingContent);
        }
        if post_id.is_none() {
            return Err(ValidationError::NoPostSelected);
        }
        Ok(())
    }

    /// Build the `new_comment` action for `post_id`. Does not validate.
    #[must_use]
    pub fn to_action(&self, post_id: &str) -> Action {
        let author = match self.author.trim() {
            "" => LABEL_ANONYMOUS,
            name => name,
        };
        Action::NewComment(NewComment {
            post_id: post_id.to_string(),
            author: author.to_string(),
            content: self.content.trim().to_string(),
        })
    }
}

/// Keep only ASCII digits and parse; anything unparseable is 0.
#[must_use]
pub fn sanitize_price(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Memo body with the location tag line prepended.
#[must_use]
pub fn compose_memo(location: &str, content: &str) -> String {
    format!("[장소: {}]\n{}", location.trim(), content.trim())
}

/// Validate and send a new post.
///
/// # Errors
///
/// Returns `Invalid` without contacting the endpoint when a required field is
/// blank, `Rejected` when the endpoint declines, `Api` on transport failure.
pub async fn submit_post(api: &dyn BoardApi, draft: &PostDraft) -> Result<(), SubmitError> {
    draft.validate()?;
    let action = draft.to_action();
    let response = api.submit(&action).await?;

    if response.success {
        info!(item_name = %draft.title.trim(), "Post submitted");
        Ok(())
    } else {
        warn!(message = ?response.message, "Post rejected");
        Err(SubmitError::Rejected(response.message))
    }
}

/// Validate and send a new comment on `post_id`.
///
/// # Errors
///
/// Same contract as [`submit_post`].
pub async fn submit_comment(
    api: &dyn BoardApi,
    post_id: Option<&str>,
    draft: &CommentDraft,
) -> Result<(), SubmitError> {
    draft.validate(post_id)?;
    let Some(post_id) = post_id else {
        return Err(ValidationError::NoPostSelected.into());
    };
    let action = draft.to_action(post_id);
    let response = api.submit(&action).await?;

    if response.success {
        info!(post_id = %post_id, "Comment submitted");
        Ok(())
    } else {
        warn!(post_id = %post_id, message = ?response.message, "Comment rejected");
        Err(SubmitError::Rejected(response.message))
    }
}
