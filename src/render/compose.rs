//! The "new post" modal.

use maud::{html, Markup, Render};

use crate::components::{Button, Form, FormGroup, Input, Panel, TextArea};
use crate::fetcher::PostDraft;

/// Render the compose modal. It is always in the page so the draft survives
/// a close; `open` only toggles visibility.
#[must_use]
pub fn render_compose(draft: &PostDraft, open: bool, busy: bool) -> Markup {
    let fields = html! {
        (FormGroup::new("제목", "post-title", Input::text("title")
            .id("post-title")
            .placeholder("무엇을 파시나요?")
            .value(&draft.title)
            .render()))
        (FormGroup::new("물품", "post-item", Input::text("item")
            .id("post-item")
            .placeholder("예: 가구, 전자기기")
            .value(&draft.item)
            .render()))
        (FormGroup::new("가격", "post-price", Input::text("price")
            .id("post-price")
            .inputmode("numeric")
            .placeholder("숫자만 입력")
            .value(&draft.price)
            .render()))
        (FormGroup::new("장소", "post-location", Input::text("location")
            .id("post-location")
            .placeholder("거래 희망 장소")
            .value(&draft.location)
            .render()))
        (FormGroup::new("내용", "post-content", TextArea::new("content")
            .id("post-content")
            .rows(6)
            .value(&draft.content)
            .render()))
        div class="modal-actions" {
            (Button::outline("닫기")
                .submit()
                .id("close-write")
                .formaction("/compose/close"))
            (Button::primary("올리기")
                .submit()
                .id("upload")
                .disabled_if(busy))
        }
    };

    let content = html! {
        div class="modal-content" {
            h2 { "새 글 쓰기" }
            (Form::post("/compose/submit", fields).id("write-form"))
        }
    };

    Panel::new("write-modal", "modal", content)
        .open(open)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_modal_keeps_draft_values() {
        let draft = PostDraft {
            title: "Desk".to_string(),
            item: "Furniture".to_string(),
            price: "15,000".to_string(),
            location: "Room A".to_string(),
            content: "Good condition".to_string(),
        };
        let html = render_compose(&draft, false, false).into_string();

        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains(r#"value="Desk""#));
        assert!(html.contains(r#"value="15,000""#));
        assert!(html.contains("Good condition</textarea>"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_open_and_busy() {
        let html = render_compose(&PostDraft::default(), true, true).into_string();

        assert!(html.contains(r#"class="modal is-open""#));
        assert!(html.contains(r#"action="/compose/submit""#));
        assert!(html.contains(r#"formaction="/compose/close""#));
        assert!(html.contains("disabled"));
    }
}
