//! Button component for the web UI.
//!
//! Every interaction on the board is a form submission, so buttons render
//! as `<button>` elements; `formaction` lets one form carry several actions.

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary button (default) - `.btn-primary`
    #[default]
    Primary,
    /// Outline button - `.btn.outline`
    Outline,
    /// Ghost button (no background, minimal styling)
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn outline",
            Self::Ghost => "btn ghost",
        }
    }
}

/// A configurable button component.
///
/// # Example
///
/// ```ignore
/// use crate::components::button::Button;
///
/// let upload = Button::primary("올리기").submit().disabled_if(busy);
/// let close = Button::ghost("닫기").submit().formaction("/compose/close");
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    /// Button label text
    pub label: &'a str,
    /// Button style variant
    pub variant: ButtonVariant,
    /// Disabled state
    pub disabled: bool,
    /// Button type attribute
    pub r#type: Option<&'a str>,
    /// Overrides the enclosing form's action
    pub formaction: Option<&'a str>,
    /// Element ID
    pub id: Option<&'a str>,
}

impl<'a> Button<'a> {
    /// Creates a new button with the given label and variant.
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            disabled: false,
            r#type: None,
            formaction: None,
            id: None,
        }
    }

    /// Creates a primary button.
    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    /// Creates an outline button.
    #[must_use]
    pub fn outline(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Outline)
    }

    /// Creates a ghost button.
    #[must_use]
    pub fn ghost(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Ghost)
    }

    /// Makes this a submit button.
    #[must_use]
    pub fn submit(mut self) -> Self {
        self.r#type = Some("submit");
        self
    }

    /// Disables the button when `disabled` is true.
    #[must_use]
    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Submit the enclosing form to `action` instead of its own action.
    #[must_use]
    pub fn formaction(mut self, action: &'a str) -> Self {
        self.formaction = Some(action);
        self
    }

    /// Sets the element ID.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        html! {
            button
                class=(self.variant.class())
                type=(self.r#type.unwrap_or("button"))
                id=[self.id]
                formaction=[self.formaction]
                disabled[self.disabled]
            {
                (self.label)
            }
        }
    }
}
