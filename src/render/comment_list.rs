use std::time::Duration;

use chrono::{DateTime, Utc};
use maud::{html, Markup, Render};

use super::format::{parse_timestamp, relative_time};
use crate::components::{BaseLayout, EmptyState};
use crate::constants::EMPTY_COMMENTS;
use crate::model::Comment;

/// Comments on `post_id`, oldest first. Unparseable timestamps go last.
#[must_use]
pub fn comments_for_post<'a>(post_id: &str, comments: &'a [Comment]) -> Vec<&'a Comment> {
    let mut matching: Vec<&Comment> = comments.iter().filter(|c| c.post_id == post_id).collect();
    matching.sort_by_key(|c| parse_timestamp(&c.timestamp).map_or((1, None), |t| (0, Some(t))));
    matching
}

/// Render the comment thread of one post.
#[must_use]
pub fn render_comment_list(post_id: &str, comments: &[Comment], now: DateTime<Utc>) -> Markup {
    let matching = comments_for_post(post_id, comments);

    html! {
        div id="comment-list" class="comment-list" {
            @if matching.is_empty() {
                (EmptyState::compact(EMPTY_COMMENTS))
            } @else {
                @for comment in matching {
                    (CommentItem { comment, now })
                }
            }
        }
    }
}

/// Standalone document holding the thread of the open post.
///
/// The detail panel embeds it in a frame. It reloads itself every
/// `refresh_interval` so the thread follows the refresh cycle while the
/// comment form in the parent page keeps its draft.
#[must_use]
pub fn render_comment_frame(
    post_id: Option<&str>,
    comments: &[Comment],
    now: DateTime<Utc>,
    refresh_interval: Duration,
) -> Markup {
    let content = match post_id {
        Some(id) => render_comment_list(id, comments, now),
        None => html! {
            div id="comment-list" class="comment-list" {
                (EmptyState::compact(EMPTY_COMMENTS))
            }
        },
    };

    BaseLayout::new("댓글")
        .without_header()
        .auto_refresh(Some(refresh_interval))
        .render(content)
}

struct CommentItem<'a> {
    comment: &'a Comment,
    now: DateTime<Utc>,
}

impl Render for CommentItem<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="comment-item" {
                div class="comment-item-header" {
                    span class="comment-author" { (self.comment.author) }
                    span class="comment-time" { (relative_time(&self.comment.timestamp, self.now)) }
                }
                p class="comment-text" { (self.comment.content) }
            }
        }
    }
}
