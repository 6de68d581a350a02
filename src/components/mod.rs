//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout and header bar
//! - `button`: Form buttons
//! - `alert`: Blocking alerts and the transient message box
//! - `card`: Overlay panels and empty states
//! - `form`: Form elements and input components

pub mod alert;
pub mod button;
pub mod card;
pub mod form;
pub mod layout;

pub use alert::{Alert, MessageBox};
pub use button::{Button, ButtonVariant};
pub use card::{EmptyState, Panel};
pub use form::{Form, FormGroup, Input, TextArea};
pub use layout::BaseLayout;
