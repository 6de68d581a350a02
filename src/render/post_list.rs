//! The board's post list.

use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped, Render};

use super::format::{format_price, memo_preview, parse_timestamp, relative_time};
use crate::components::{EmptyState, Form, Input};
use crate::constants::{EMPTY_POSTS, LABEL_OTHER_CATEGORY, LABEL_UNTITLED};
use crate::model::{Comment, Post};
use crate::store::count_comments;

const COMMENT_ICON: &str = r##"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="#FF6436" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.5 8.5 0 0 1 8 8v.5z"/></svg>"##;

/// Posts newest first. Unparseable timestamps go last, in input order.
#[must_use]
pub fn sort_posts_newest_first(posts: &[Post]) -> Vec<&Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by_key(|p| std::cmp::Reverse(parse_timestamp(&p.timestamp)));
    sorted
}

/// Render every post, newest first, or the empty placeholder.
#[must_use]
pub fn render_post_list(posts: &[Post], comments: &[Comment], now: DateTime<Utc>) -> Markup {
    html! {
        section class="posts" {
            @if posts.is_empty() {
                (EmptyState::new(EMPTY_POSTS))
            } @else {
                @for post in sort_posts_newest_first(posts) {
                    (PostEntry {
                        post,
                        comment_count: count_comments(comments, post.id()),
                        now,
                    })
                }
            }
        }
    }
}

/// One clickable row of the post list.
struct PostEntry<'a> {
    post: &'a Post,
    comment_count: usize,
    now: DateTime<Utc>,
}

impl Render for PostEntry<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let title = non_empty_or(&post.item_name, LABEL_UNTITLED);
        let category = non_empty_or(&post.item_type, LABEL_OTHER_CATEGORY);

        let body = html! {
            (Input::hidden("post_id", post.id()))
            button type="submit" class="post-open" {
                div class="post-row" {
                    div {
                        h2 class="title" { (title) }
                        p class="preview meta" { (category) " · " (format_price(post.price)) }
                        p class="preview" { (memo_preview(&post.memo)) }
                        p class="post-time" { (relative_time(&post.timestamp, self.now)) }
                    }
                    div class="comment-box" {
                        (PreEscaped(COMMENT_ICON))
                        span class="comment-count" { (self.comment_count) }
                    }
                }
            }
        };

        html! {
            article class="post" {
                (Form::post("/detail/open", body))
            }
        }
    }
}

pub(super) fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn post(ts: &str, name: &str) -> Post {
        Post {
            timestamp: ts.to_string(),
            item_name: name.to_string(),
            item_type: "Furniture".to_string(),
            price: 15000,
            memo: "Good condition".to_string(),
        }
    }

    fn comment(post_id: &str) -> Comment {
        Comment {
            post_id: post_id.to_string(),
            author: "a".to_string(),
            content: "c".to_string(),
            timestamp: "2024-01-15T11:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_empty_list_renders_only_placeholder() {
        let html = render_post_list(&[], &[], now()).into_string();
        assert!(html.contains(EMPTY_POSTS));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_sorted_newest_first() {
        let posts = vec![
            post("2024-01-10T00:00:00Z", "Oldest"),
            post("garbage", "Undated"),
            post("2024-01-15T11:00:00Z", "Newest"),
            post("2024-01-12T00:00:00Z", "Middle"),
        ];
        let html = render_post_list(&posts, &[], now()).into_string();

        let newest = html.find("Newest").unwrap();
        let middle = html.find("Middle").unwrap();
        let oldest = html.find("Oldest").unwrap();
        let undated = html.find("Undated").unwrap();
        assert!(newest < middle && middle < oldest && oldest < undated);
    }

    #[test]
    fn test_entry_fields() {
        let posts = vec![post("2024-01-15T11:00:00Z", "Desk")];
        let comments = vec![comment("2024-01-15T11:00:00Z"), comment("other")];
        let html = render_post_list(&posts, &comments, now()).into_string();

        assert!(html.contains(r#"<h2 class="title">Desk</h2>"#));
        assert!(html.contains("Furniture · 15,000원"));
        assert!(html.contains("Good condition"));
        assert!(html.contains("1시간 전"));
        assert!(html.contains(r#"<span class="comment-count">1</span>"#));
        assert!(html.contains(r#"action="/detail/open""#));
        assert!(html.contains(r#"value="2024-01-15T11:00:00Z""#));
    }

    #[test]
    fn test_fallback_labels() {
        let posts = vec![Post {
            timestamp: "2024-01-15T11:00:00Z".to_string(),
            ..Post::default()
        }];
        let html = render_post_list(&posts, &[], now()).into_string();

        assert!(html.contains(LABEL_UNTITLED));
        assert!(html.contains(LABEL_OTHER_CATEGORY));
        assert!(html.contains("가격 미정"));
    }

    #[test]
    fn test_long_memo_is_truncated() {
        let mut p = post("2024-01-15T11:00:00Z", "Desk");
        p.memo = "x".repeat(100);
        let html = render_post_list(&[p], &[], now()).into_string();

        assert!(html.contains(&format!("{}...", "x".repeat(40))));
        assert!(!html.contains(&"x".repeat(41)));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let p = post("2024-01-15T11:00:00Z", "<img src=x onerror=alert(1)>");
        let html = render_post_list(&[p], &[], now()).into_string();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }
}
