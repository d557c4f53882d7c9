//! Modal dialogs for the ticket manager
//!
//! - TicketFormModal: create and edit form with inline field errors
//! - DeleteConfirmModal: confirmation before a ticket is removed
//!
//! Both are render-only; keys are routed through the page reducer.

use iocraft::prelude::*;

use crate::ticket::FormField;
use crate::tui::components::{ModalContainer, ModalOverlay, ModalTone, Select};
use crate::tui::manage::model::{FieldViewModel, FormViewModel};
use crate::tui::theme::theme;
use crate::types::{TicketPriority, TicketStatus};

// =============================================================================
// Ticket Form Modal
// =============================================================================

#[derive(Default, Props)]
pub struct TicketFormModalProps {
    pub form: Option<FormViewModel>,
}

#[component]
pub fn TicketFormModal(props: &TicketFormModalProps) -> impl Into<AnyElement<'static>> {
    let Some(form) = props.form.clone() else {
        return element!(View).into_any();
    };

    element! {
        ModalOverlay() {
            ModalContainer(
                width: Some(64),
                title: Some(form.heading),
                footer_text: Some("[Tab] Next  [←/→] Change  [C-s] Save  [Esc] Cancel".to_string()),
            ) {
                #(form.fields.into_iter().map(render_field))
            }
        }
    }
    .into_any()
}

fn render_field(field: FieldViewModel) -> AnyElement<'static> {
    let theme = theme();
    let label_color = if field.is_focused {
        theme.border_focused
    } else {
        theme.text
    };
    let border_color = match (&field.error, field.is_focused) {
        (Some(_), _) => theme.error,
        (None, true) => theme.border_focused,
        (None, false) => theme.border,
    };

    let input: AnyElement<'static> = if field.is_select {
        let (value, value_color) = selector_display(&field);
        element! {
            Select(value: value, has_focus: field.is_focused, value_color: value_color)
        }
        .into_any()
    } else {
        let cursor = if field.is_focused { "_" } else { "" };
        element! {
            Text(content: format!("{}{}", field.value, cursor), color: theme.text)
        }
        .into_any()
    };

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: field.label, color: label_color, weight: Weight::Bold)
            View(
                width: 100pct,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
            ) {
                #(Some(input))
            }
            #(field.error.map(|error| element! {
                Text(content: error, color: theme.error)
            }))
        }
    }
    .into_any()
}

/// Label and color for a status or priority value
fn selector_display(field: &FieldViewModel) -> (String, Option<Color>) {
    let theme = theme();
    let parsed = match field.field {
        FormField::Status => {
            TicketStatus::from_wire(&field.value).map(|s| (s.label(), theme.status_color(s)))
        }
        FormField::Priority => field
            .value
            .parse::<TicketPriority>()
            .ok()
            .map(|p| (p.label(), theme.priority_color(p))),
        FormField::Title | FormField::Description => None,
    };
    match parsed {
        Some((label, color)) => (label.to_string(), Some(color)),
        None => (field.value.clone(), None),
    }
}

// =============================================================================
// Delete Confirmation Modal
// =============================================================================

pub const DELETE_HEADING: &str = "Are you absolutely sure?";
pub const DELETE_WARNING: &str =
    "This action cannot be undone. This will permanently delete the ticket:";

#[derive(Default, Props)]
pub struct DeleteConfirmModalProps {
    pub ticket_title: String,
}

#[component]
pub fn DeleteConfirmModal(props: &DeleteConfirmModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        ModalOverlay() {
            ModalContainer(
                width: Some(56),
                tone: ModalTone::Danger,
                title: Some(DELETE_HEADING.to_string()),
                footer_text: Some("[y] Delete  [n] Cancel".to_string()),
            ) {
                Text(content: DELETE_WARNING, color: theme.text)
                View(margin_top: 1) {
                    Text(content: props.ticket_title.clone(), color: theme.error, weight: Weight::Bold)
                }
            }
        }
    }
}
