//! Alert and message box components.
//!
//! An [`Alert`] is the blocking notice shown when input is rejected before
//! anything is sent. A [`MessageBox`] is the transient toast used for submit
//! progress and results.

use maud::{html, Markup, Render};

/// A blocking alert. Rendered as a dialog that must be dismissed.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self { message }
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            dialog open class="alert alert-error" role="alertdialog" {
                p { (self.message) }
                form method="dialog" {
                    button class="btn btn-primary" type="submit" { "확인" }
                }
            }
        }
    }
}

/// The transient message box pinned to the bottom of the page.
#[derive(Debug, Clone)]
pub struct MessageBox<'a> {
    pub text: &'a str,
    pub is_error: bool,
    /// Show a spinner; loading messages do not fade out.
    pub loading: bool,
}

impl<'a> MessageBox<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            is_error: false,
            loading: false,
        }
    }

    #[must_use]
    pub const fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    const fn background(&self) -> &'static str {
        if self.is_error {
            "rgba(255, 60, 60, 0.9)"
        } else {
            "rgba(0, 0, 0, 0.8)"
        }
    }
}

impl Render for MessageBox<'_> {
    fn render(&self) -> Markup {
        let class = if self.loading { "show" } else { "show fade" };
        html! {
            div id="message-box" class=(class) role="status"
                style={ "background-color: " (self.background()) ";" } {
                @if self.loading {
                    span class="loading-indicator" {}
                }
                span { (self.text) }
            }
        }
    }
}
