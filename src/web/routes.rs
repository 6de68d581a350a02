use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::controller::{Command, Outcome};
use crate::fetcher::{CommentDraft, PostDraft};
use crate::render::{render_board_page, render_comment_frame};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(board))
        .route("/detail/open", post(open_detail))
        .route("/detail/close", post(close_detail))
        .route("/detail/comments", get(detail_comments))
        .route("/compose/open", post(open_compose))
        .route("/compose/close", post(close_compose))
        .route("/compose/submit", post(submit_post))
        .route("/comments", post(submit_comment))
        .route("/refresh", post(refresh))
        .route("/api/board", get(api_board))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

async fn board(State(state): State<AppState>) -> Response {
    let view = state.controller.take_view();
    let snapshot = state.controller.store().snapshot();

    let html = render_board_page(
        &view,
        &snapshot,
        Utc::now(),
        state.config.refresh_interval,
    );
    Html(html.into_string()).into_response()
}

/// Thread of the open post, loaded into the detail panel's frame.
async fn detail_comments(State(state): State<AppState>) -> Response {
    let view = state.controller.state();
    let snapshot = state.controller.store().snapshot();
    let post_id = view.current_post_id.as_deref().filter(|_| view.detail_open);

    let html = render_comment_frame(
        post_id,
        &snapshot.comment,
        Utc::now(),
        state.config.refresh_interval,
    );
    Html(html.into_string()).into_response()
}

// ========== Commands ==========

#[derive(Debug, Deserialize)]
pub struct OpenDetailForm {
    post_id: String,
}

async fn open_detail(
    State(state): State<AppState>,
    Form(form): Form<OpenDetailForm>,
) -> Redirect {
    if state.controller.dispatch(Command::OpenDetail(form.post_id)).await == Outcome::Ignored {
        tracing::debug!("Post vanished before detail could open");
    }
    back_to_board()
}

async fn close_detail(State(state): State<AppState>) -> Redirect {
    state.controller.dispatch(Command::CloseDetail).await;
    back_to_board()
}

async fn open_compose(State(state): State<AppState>) -> Redirect {
    state.controller.dispatch(Command::OpenCompose).await;
    back_to_board()
}

async fn close_compose(
    State(state): State<AppState>,
    Form(draft): Form<PostDraft>,
) -> Redirect {
    state.controller.dispatch(Command::EditPostDraft(draft)).await;
    state.controller.dispatch(Command::CloseCompose).await;
    back_to_board()
}

async fn submit_post(State(state): State<AppState>, Form(draft): Form<PostDraft>) -> Redirect {
    state.controller.dispatch(Command::EditPostDraft(draft)).await;
    state.controller.dispatch(Command::SubmitPost).await;
    back_to_board()
}

async fn submit_comment(
    State(state): State<AppState>,
    Form(draft): Form<CommentDraft>,
) -> Redirect {
    state
        .controller
        .dispatch(Command::EditCommentDraft(draft))
        .await;
    state.controller.dispatch(Command::SubmitComment).await;
    back_to_board()
}

async fn refresh(State(state): State<AppState>) -> Redirect {
    state.controller.dispatch(Command::Refresh).await;
    back_to_board()
}

/// 303 back to the board so a reload never resubmits a form.
fn back_to_board() -> Redirect {
    Redirect::to("/")
}

// ========== JSON API ==========

async fn api_board(State(state): State<AppState>) -> Response {
    Json(state.controller.store().snapshot()).into_response()
}

async fn health(State(state): State<AppState>) -> Response {
    let store = state.controller.store();
    Json(json!({
        "status": "ok",
        "loaded": store.is_loaded(),
        "generation": store.generation(),
    }))
    .into_response()
}
