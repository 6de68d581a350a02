//! Full board page assembly.

use std::time::Duration;

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use super::compose::render_compose;
use super::detail::{render_detail, DetailParams};
use super::post_list::render_post_list;
use crate::components::{Alert, BaseLayout, MessageBox};
use crate::controller::ViewState;
use crate::model::BoardSnapshot;

pub const PAGE_TITLE: &str = "벼룩시장";

/// Render the whole page for one view of the board.
///
/// The page reloads itself every `refresh_interval` while no panel is open,
/// so a half-typed draft is never thrown away by a reload.
///
/// An open detail panel shows the post from `snapshot`, or the copy kept in
/// the view when a refresh has dropped it. With neither, the page renders as
/// if the panel were closed.
#[must_use]
pub fn render_board_page(
    view: &ViewState,
    snapshot: &BoardSnapshot,
    now: DateTime<Utc>,
    refresh_interval: Duration,
) -> Markup {
    let detail = view
        .current_post_id
        .as_deref()
        .filter(|_| view.detail_open)
        .and_then(|id| {
            snapshot
                .post
                .iter()
                .find(|p| p.id() == id)
                .or(view.detail_post.as_ref())
        });
    let panel_open = detail.is_some() || view.compose_open;

    let content = html! {
        (render_post_list(&snapshot.post, &snapshot.comment, now))
        @if let Some(post) = detail {
            (render_detail(&DetailParams {
                post,
                draft: &view.comment_draft,
                busy: view.comment_busy,
            }))
        }
        (render_compose(&view.post_draft, view.compose_open, view.post_busy))
        @if let Some(alert) = &view.alert {
            (Alert::error(alert))
        }
        @if let Some(toast) = &view.toast {
            (MessageBox::new(&toast.text)
                .error(toast.is_error)
                .loading(toast.loading))
        }
    };

    BaseLayout::new(PAGE_TITLE)
        .scroll_locked(view.scroll_locked && panel_open)
        .auto_refresh((!panel_open).then_some(refresh_interval))
        .render(content)
}
