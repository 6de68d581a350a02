//! UI state of the board page and the commands that drive it.
//!
//! Every user interaction becomes a [`Command`]. The controller applies it
//! to [`ViewState`], talks to the endpoint when needed, and awaits the
//! follow-up refresh before returning so the next render sees fresh data.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::constants::{
    MSG_COMMENT_SAVED, MSG_COMMENT_SAVING, MSG_NETWORK_ERROR, MSG_POST_ERROR, MSG_POST_SAVED,
    MSG_POST_SAVING, MSG_REJECTED_PREFIX, TOAST_SECS,
};
use crate::fetcher::{
    refresh, submit_comment, submit_post, BoardApi, CommentDraft, PostDraft, SubmitError,
    ValidationError,
};
use crate::model::Post;
use crate::store::DataStore;

/// A transient message shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub is_error: bool,
    /// Loading toasts stay until replaced.
    pub loading: bool,
    shown_at: Instant,
}

impl Toast {
    fn new(text: impl Into<String>, is_error: bool, loading: bool) -> Self {
        Self {
            text: text.into(),
            is_error,
            loading,
            shown_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, true, false)
    }

    #[must_use]
    pub fn loading(text: impl Into<String>) -> Self {
        Self::new(text, false, true)
    }

    /// Whether the toast should still be on screen at `now`.
    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.loading || now.saturating_duration_since(self.shown_at) < Duration::from_secs(TOAST_SECS)
    }
}

/// Everything the page needs to know besides the board contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub detail_open: bool,
    pub compose_open: bool,
    pub current_post_id: Option<String>,
    /// The selected post as it was when the panel opened, kept so the panel
    /// survives a refresh that drops it.
    pub detail_post: Option<Post>,
    pub scroll_locked: bool,
    pub post_draft: PostDraft,
    pub comment_draft: CommentDraft,
    /// Blocking alert, shown once.
    pub alert: Option<String>,
    pub toast: Option<Toast>,
    /// The post upload control is disabled.
    pub post_busy: bool,
    /// The comment submit control is disabled.
    pub comment_busy: bool,
}

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenDetail(String),
    CloseDetail,
    OpenCompose,
    CloseCompose,
    EditPostDraft(PostDraft),
    EditCommentDraft(CommentDraft),
    SubmitPost,
    SubmitComment,
    Refresh,
}

/// What `dispatch` did with a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Nothing to do (unknown post, control already disabled).
    Ignored,
    /// Rejected client-side; an alert was raised and nothing was sent.
    Blocked(ValidationError),
    Submitted,
    /// Sent but not accepted; a toast explains why.
    Failed,
    Refreshed(usize),
    RefreshFailed,
}

/// Disables one submit control for the lifetime of a [`LatchGuard`].
#[derive(Debug, Default)]
pub struct ControlLatch {
    disabled: AtomicBool,
}

impl ControlLatch {
    /// Disable the control, or `None` if it is already disabled.
    pub fn try_disable(&self) -> Option<LatchGuard<'_>> {
        self.disabled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LatchGuard { latch: self })
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }
}

/// Re-enables its control when dropped, on every exit path.
#[derive(Debug)]
pub struct LatchGuard<'a> {
    latch: &'a ControlLatch,
}

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        self.latch.disabled.store(false, Ordering::Release);
    }
}

/// Owns the page state and wires commands to the fetcher.
pub struct ViewController {
    api: Arc<dyn BoardApi>,
    store: DataStore,
    state: Mutex<ViewState>,
    post_control: ControlLatch,
    comment_control: ControlLatch,
}

impl ViewController {
    #[must_use]
    pub fn new(api: Arc<dyn BoardApi>, store: DataStore) -> Self {
        Self {
            api,
            store,
            state: Mutex::new(ViewState::default()),
            post_control: ControlLatch::default(),
            comment_control: ControlLatch::default(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Copy of the current state, leaving the alert in place.
    #[must_use]
    pub fn state(&self) -> ViewState {
        let mut view = self.with_state(|s| s.clone());
        self.fill_controls(&mut view);
        view
    }

    /// State for one render: the alert is consumed and expired toasts dropped.
    #[must_use]
    pub fn take_view(&self) -> ViewState {
        let now = Instant::now();
        let mut view = self.with_state(|s| {
            if s.toast.as_ref().is_some_and(|t| !t.is_visible(now)) {
                s.toast = None;
            }
            let view = s.clone();
            s.alert = None;
            view
        });
        self.fill_controls(&mut view);
        view
    }

    /// Apply one user action.
    pub async fn dispatch(&self, command: Command) -> Outcome {
        debug!(?command, "Dispatching command");
        match command {
            Command::OpenDetail(post_id) => self.open_detail(post_id),
            Command::CloseDetail => self.with_state(|s| {
                s.detail_open = false;
                s.scroll_locked = false;
                s.current_post_id = None;
                s.detail_post = None;
                Outcome::Applied
            }),
            Command::OpenCompose => self.with_state(|s| {
                s.compose_open = true;
                s.scroll_locked = true;
                Outcome::Applied
            }),
            Command::CloseCompose => self.with_state(|s| {
                s.compose_open = false;
                s.scroll_locked = false;
                Outcome::Applied
            }),
            Command::EditPostDraft(draft) => self.with_state(|s| {
                s.post_draft = draft;
                Outcome::Applied
            }),
            Command::EditCommentDraft(draft) => self.with_state(|s| {
                s.comment_draft = draft;
                Outcome::Applied
            }),
            Command::SubmitPost => self.submit_post().await,
            Command::SubmitComment => self.submit_comment().await,
            Command::Refresh => self.refresh().await,
        }
    }

    fn open_detail(&self, post_id: String) -> Outcome {
        let Some(post) = self.store.post(&post_id) else {
            debug!(post_id = %post_id, "Ignoring open for unknown post");
            return Outcome::Ignored;
        };
        self.with_state(|s| {
            s.current_post_id = Some(post_id);
            s.detail_post = Some(post);
            s.detail_open = true;
            s.scroll_locked = true;
        });
        Outcome::Applied
    }

    async fn submit_post(&self) -> Outcome {
        let draft = self.with_state(|s| s.post_draft.clone());
        if let Err(e) = draft.validate() {
            self.raise_alert(e);
            return Outcome::Blocked(e);
        }

        let Some(guard) = self.post_control.try_disable() else {
            return Outcome::Ignored;
        };
        self.show_toast(Toast::loading(MSG_POST_SAVING));

        let result = submit_post(self.api.as_ref(), &draft).await;
        drop(guard);

        match result {
            Ok(()) => {
                self.with_state(|s| {
                    s.toast = Some(Toast::info(MSG_POST_SAVED));
                    s.post_draft = PostDraft::default();
                    s.compose_open = false;
                    s.scroll_locked = false;
                });
                self.refresh().await;
                Outcome::Submitted
            }
            Err(e) => self.submit_failed(&e, MSG_POST_ERROR),
        }
    }

    async fn submit_comment(&self) -> Outcome {
        let (draft, post_id) =
            self.with_state(|s| (s.comment_draft.clone(), s.current_post_id.clone()));
        if let Err(e) = draft.validate(post_id.as_deref()) {
            self.raise_alert(e);
            return Outcome::Blocked(e);
        }

        let Some(guard) = self.comment_control.try_disable() else {
            return Outcome::Ignored;
        };
        self.show_toast(Toast::loading(MSG_COMMENT_SAVING));

        let result = submit_comment(self.api.as_ref(), post_id.as_deref(), &draft).await;
        drop(guard);

        match result {
            Ok(()) => {
                self.with_state(|s| {
                    s.toast = Some(Toast::info(MSG_COMMENT_SAVED));
                    s.comment_draft.content.clear();
                });
                self.refresh().await;
                Outcome::Submitted
            }
            Err(e) => self.submit_failed(&e, MSG_NETWORK_ERROR),
        }
    }

    fn submit_failed(&self, error: &SubmitError, transport_message: &str) -> Outcome {
        match error {
            SubmitError::Invalid(e) => {
                self.raise_alert(*e);
                self.with_state(|s| s.toast = None);
                return Outcome::Blocked(*e);
            }
            SubmitError::Rejected(message) => {
                let text = format!(
                    "{MSG_REJECTED_PREFIX}{}",
                    message.as_deref().unwrap_or(MSG_POST_ERROR)
                );
                self.show_toast(Toast::error(text));
            }
            SubmitError::Api(e) => {
                warn!("Submit failed: {e}");
                self.show_toast(Toast::error(transport_message));
            }
        }
        Outcome::Failed
    }

    async fn refresh(&self) -> Outcome {
        match refresh(self.api.as_ref(), &self.store).await {
            Ok(posts) => Outcome::Refreshed(posts),
            Err(e) => {
                warn!("Refresh failed: {e:#}");
                Outcome::RefreshFailed
            }
        }
    }

    fn raise_alert(&self, error: ValidationError) {
        debug!(%error, "Input rejected");
        self.with_state(|s| s.alert = Some(error.alert_text().to_string()));
    }

    fn show_toast(&self, toast: Toast) {
        self.with_state(|s| s.toast = Some(toast));
    }

    fn fill_controls(&self, view: &mut ViewState) {
        view.post_busy = self.post_control.is_disabled();
        view.comment_busy = self.comment_control.is_disabled();
    }

    // The lock is only ever taken inside synchronous closures.
    fn with_state<T>(&self, f: impl FnOnce(&mut ViewState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}
