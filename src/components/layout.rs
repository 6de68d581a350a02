//! Base layout components for the web UI.
//!
//! This module provides the page skeleton: head, header bar and body.

use std::time::Duration;

use maud::{html, Markup, DOCTYPE};

use super::button::Button;
use super::form::Form;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("게시판")
///     .scroll_locked(true)
///     .render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    scroll_locked: bool,
    auto_refresh: Option<Duration>,
    header: bool,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            scroll_locked: false,
            auto_refresh: None,
            header: true,
        }
    }

    /// Suppress page scroll while an overlay is open.
    #[must_use]
    pub fn scroll_locked(mut self, locked: bool) -> Self {
        self.scroll_locked = locked;
        self
    }

    /// Reload the page every `interval`.
    #[must_use]
    pub fn auto_refresh(mut self, interval: Option<Duration>) -> Self {
        self.auto_refresh = interval;
        self
    }

    /// Leave out the top bar, for documents embedded in a frame.
    #[must_use]
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        let body_style = if self.scroll_locked {
            "overflow: hidden;"
        } else {
            "overflow: auto;"
        };

        html! {
            (DOCTYPE)
            html lang="ko" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    @if let Some(interval) = self.auto_refresh {
                        meta http-equiv="refresh" content=(interval.as_secs());
                    }
                    title { (self.title) }
                    link rel="stylesheet" href="/static/css/style.css";
                }
                body style=(body_style) {
                    @if self.header {
                        (self.render_header())
                    }
                    main class="container" {
                        (content)
                    }
                }
            }
        }
    }

    /// Render the page header with the compose button.
    fn render_header(&self) -> Markup {
        html! {
            header class="top-bar" {
                h1 class="site-title" { (self.title) }
                (Form::post("/refresh", html! {
                    (Button::ghost("새로고침").submit().id("refresh"))
                }).class("inline"))
                (Form::post("/compose/open", html! {
                    (Button::primary("글쓰기").submit().id("open-write"))
                }).class("inline"))
            }
        }
    }
}
