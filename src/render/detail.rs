//! Post detail panel: item fields, the comment thread and the comment form.

use maud::{html, Markup, Render};

use super::format::{format_price, split_location};
use super::post_list::non_empty_or;
use crate::components::{Button, Form, Input, Panel, TextArea};
use crate::constants::{LABEL_LOCATION_UNSET, LABEL_OTHER_CATEGORY, LABEL_UNTITLED};
use crate::fetcher::CommentDraft;
use crate::model::Post;

/// Inputs for [`render_detail`].
#[derive(Debug, Clone, Copy)]
pub struct DetailParams<'a> {
    pub post: &'a Post,
    pub draft: &'a CommentDraft,
    /// A comment submission is in flight.
    pub busy: bool,
}

/// Render the open detail panel for one post.
///
/// The thread lives in a frame served by `/detail/comments`, which reloads
/// on its own while the comment form here keeps its draft.
#[must_use]
pub fn render_detail(params: &DetailParams<'_>) -> Markup {
    let post = params.post;
    let (location, body) = split_location(&post.memo);

    let content = html! {
        div class="detail-bar" {
            (Form::post("/detail/close", html! {
                (Button::ghost("← 목록").submit().id("back-to-list"))
            }))
        }
        article class="detail" {
            h2 id="detail-title" { (non_empty_or(&post.item_name, LABEL_UNTITLED)) }
            dl class="detail-fields" {
                dt { "물품" }
                dd id="detail-item" { (non_empty_or(&post.item_type, LABEL_OTHER_CATEGORY)) }
                dt { "가격" }
                dd id="detail-price" { (format_price(post.price)) }
                dt { "장소" }
                dd id="detail-location" { (location.unwrap_or(LABEL_LOCATION_UNSET)) }
            }
            p id="detail-content" class="detail-content" { (body) }
        }
        section class="comments" {
            h3 { "댓글" }
            iframe id="comment-frame" class="comment-frame" src="/detail/comments" title="댓글" {}
            (render_comment_form(params.draft, params.busy))
        }
    };

    Panel::new("detail-view", "detail-view", content)
        .open(true)
        .render()
}

fn render_comment_form(draft: &CommentDraft, busy: bool) -> Markup {
    let fields = html! {
        (Input::text("author")
            .id("comment-author")
            .placeholder("이름 (선택)")
            .value(&draft.author))
        (TextArea::new("content")
            .id("comment-text")
            .placeholder("댓글을 입력하세요")
            .rows(2)
            .value(&draft.content))
        (Button::primary("작성")
            .submit()
            .id("submit-comment")
            .disabled_if(busy))
    };

    Form::post("/comments", fields)
        .id("comment-form")
        .class("comment-form")
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk() -> Post {
        Post {
            timestamp: "2024-01-15T11:00:00Z".to_string(),
            item_name: "Desk".to_string(),
            item_type: "Furniture".to_string(),
            price: 15000,
            memo: "[장소: Room A]\nGood condition".to_string(),
        }
    }

    fn render(post: &Post, draft: &CommentDraft, busy: bool) -> String {
        render_detail(&DetailParams {
            post,
            draft,
            busy,
        })
        .into_string()
    }

    #[test]
    fn test_location_split_into_field() {
        let html = render(&desk(), &CommentDraft::default(), false);

        assert!(html.contains(r#"<dd id="detail-location">Room A</dd>"#));
        assert!(html.contains(r#"<p id="detail-content" class="detail-content">Good condition</p>"#));
        assert!(!html.contains("[장소:"));
        assert!(html.contains("15,000원"));
        assert!(html.contains("is-open"));
    }

    #[test]
    fn test_thread_is_embedded_frame() {
        let html = render(&desk(), &CommentDraft::default(), false);

        assert!(html.contains(r#"<iframe id="comment-frame" class="comment-frame" src="/detail/comments""#));
        assert!(!html.contains(r#"id="comment-list""#));
    }

    #[test]
    fn test_untagged_memo_uses_placeholder() {
        let mut post = desk();
        post.memo = "Just the body".to_string();
        let html = render(&post, &CommentDraft::default(), false);

        assert!(html.contains(LABEL_LOCATION_UNSET));
        assert!(html.contains("Just the body"));
    }

    #[test]
    fn test_comment_form_keeps_author_and_disables_when_busy() {
        let draft = CommentDraft {
            author: "kim".to_string(),
            content: String::new(),
        };
        let html = render(&desk(), &draft, true);

        assert!(html.contains(r#"value="kim""#));
        assert!(html.contains(r#"action="/comments""#));
        assert!(html.contains("disabled"));
        assert!(html.contains(r#"action="/detail/close""#));
    }
}
