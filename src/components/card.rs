//! Panel and empty-state components.

use maud::{html, Markup, Render};

/// Placeholder shown when a list has nothing to display.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
    pub class: &'a str,
}

impl<'a> EmptyState<'a> {
    /// Create a new empty state.
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self {
            message,
            class: "empty-state",
        }
    }

    /// Smaller variant used inside the comment list.
    #[must_use]
    pub const fn compact(message: &'a str) -> Self {
        Self {
            message,
            class: "empty-state compact",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class=(self.class) { (self.message) }
        }
    }
}

/// A full-screen overlay panel (detail view, compose modal).
#[derive(Debug)]
pub struct Panel<'a> {
    pub id: &'a str,
    pub class: &'a str,
    pub open: bool,
    pub content: Markup,
}

impl<'a> Panel<'a> {
    #[must_use]
    pub fn new(id: &'a str, class: &'a str, content: Markup) -> Self {
        Self {
            id,
            class,
            open: false,
            content,
        }
    }

    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

impl Render for Panel<'_> {
    fn render(&self) -> Markup {
        let class = if self.open {
            format!("{} is-open", self.class)
        } else {
            self.class.to_string()
        };
        html! {
            section id=(self.id) class=(class) aria-hidden=[(!self.open).then_some("true")] {
                (self.content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let html = EmptyState::new("등록된 글이 없습니다.").render().into_string();
        assert_eq!(html, r#"<p class="empty-state">등록된 글이 없습니다.</p>"#);
    }

    #[test]
    fn test_compact_empty_state() {
        let html = EmptyState::compact("x").render().into_string();
        assert!(html.contains("empty-state compact"));
    }

    #[test]
    fn test_panel_open_class() {
        let open = Panel::new("detail-view", "detail-view", html! { "c" })
            .open(true)
            .render()
            .into_string();
        assert!(open.contains(r#"class="detail-view is-open""#));
        assert!(!open.contains("aria-hidden"));

        let closed = Panel::new("write-modal", "modal", html! { "c" })
            .render()
            .into_string();
        assert!(closed.contains(r#"class="modal""#));
        assert!(closed.contains(r#"aria-hidden="true""#));
    }
}
