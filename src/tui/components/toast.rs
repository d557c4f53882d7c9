//! Toast notification
//!
//! One-line notice describing the last mutation on the ticket screen.

use iocraft::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Error,
    Success,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Error => Color::Red,
            ToastLevel::Success => Color::Green,
        }
    }
}

/// Render a toast as an optional element for use inside `element!`
pub fn render_toast(toast: Option<&Toast>) -> Option<AnyElement<'static>> {
    toast.map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(content: t.message.clone(), color: t.color())
            }
        }
        .into_any()
    })
}
