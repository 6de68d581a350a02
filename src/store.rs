//! In-memory holder of the current board contents.
//!
//! The store is replaced wholesale by every successful refresh. Overlapping
//! refreshes are not ordered: whichever response lands last wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::model::{BoardSnapshot, Comment, Post};

#[derive(Default)]
struct Inner {
    snapshot: RwLock<BoardSnapshot>,
    generation: AtomicU64,
}

/// Shared handle to the board's posts and comments.
#[derive(Clone, Default)]
pub struct DataStore {
    inner: Arc<Inner>,
}

impl DataStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both lists with a freshly fetched snapshot.
    ///
    /// Returns the new generation number.
    pub fn replace(&self, snapshot: BoardSnapshot) -> u64 {
        {
            let mut current = self
                .inner
                .snapshot
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *current = snapshot;
        }
        self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Owned copy of the current lists.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.read(Clone::clone)
    }

    /// Look up a post by its id.
    #[must_use]
    pub fn post(&self, id: &str) -> Option<Post> {
        self.read(|s| s.post.iter().find(|p| p.id() == id).cloned())
    }

    /// Number of successful replacements so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    /// Whether at least one refresh has landed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.generation() > 0
    }

    fn read<T>(&self, f: impl FnOnce(&BoardSnapshot) -> T) -> T {
        let snapshot = self
            .inner
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&snapshot)
    }
}

/// Number of comments whose `post_id` equals `post_id`.
#[must_use]
pub fn count_comments(comments: &[Comment], post_id: &str) -> usize {
    comments.iter().filter(|c| c.post_id == post_id).count()
}
