//! Ticket manager model types for testable state management
//!
//! The page state, its actions and the view model live here so that every
//! transition of the modal state machine can be tested without iocraft.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::ticket::{FormField, TicketCollection, TicketForm};
use crate::tui::components::footer::Shortcut;
use crate::tui::components::select::Selectable;
use crate::tui::components::toast::Toast;
use crate::tui::components::{delete_shortcuts, empty_shortcuts, form_shortcuts, manage_shortcuts};
use crate::types::{Ticket, TicketPriority, TicketStatus};

/// Which modal, if any, is on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    /// Ticket form; `selected` is the ticket being edited, `None` when creating
    Form { selected: Option<Ticket> },
    DeleteConfirm { ticket: Ticket },
}

/// Raw state of the ticket manager
#[derive(Debug, Clone)]
pub struct ManageState {
    pub tickets: TicketCollection,
    /// Cursor into the ticket list
    pub selected_index: usize,
    pub modal: Modal,
    pub form: TicketForm,
    pub focused_field: FormField,
    pub toast: Option<Toast>,
    pub should_exit: bool,
}

impl ManageState {
    pub fn new(tickets: TicketCollection) -> Self {
        Self {
            tickets,
            selected_index: 0,
            modal: Modal::Closed,
            form: TicketForm::new(),
            focused_field: FormField::Title,
            toast: None,
            should_exit: false,
        }
    }

    /// Ticket under the list cursor
    pub fn cursor_ticket(&self) -> Option<&Ticket> {
        self.tickets.as_slice().get(self.selected_index)
    }

    /// Ticket the open modal refers to
    pub fn selected_ticket(&self) -> Option<&Ticket> {
        match &self.modal {
            Modal::Closed => None,
            Modal::Form { selected } => selected.as_ref(),
            Modal::DeleteConfirm { ticket } => Some(ticket),
        }
    }

    pub fn form_modal_open(&self) -> bool {
        matches!(self.modal, Modal::Form { .. })
    }

    pub fn delete_modal_open(&self) -> bool {
        matches!(self.modal, Modal::DeleteConfirm { .. })
    }

    fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.form.close();
        self.focused_field = FormField::Title;
    }

    fn clamp_cursor(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.tickets.len().saturating_sub(1));
    }
}

/// All possible actions on the ticket manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManageAction {
    // List
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    OpenCreate,
    OpenEdit,
    OpenDelete,
    Quit,

    // Form
    FocusNext,
    FocusPrev,
    /// Append a character to the focused text field
    Input(char),
    Backspace,
    /// Next value of the focused status/priority selector
    CycleNext,
    CyclePrev,
    Submit,
    Cancel,

    // Delete confirmation
    ConfirmDelete,
    CancelDelete,
}

/// Pure function: apply action to state (reducer pattern)
///
/// Actions that do not apply to the open modal are ignored.
pub fn reduce_manage_state(mut state: ManageState, action: ManageAction) -> ManageState {
    match (&state.modal, action) {
        (Modal::Closed, ManageAction::MoveDown) => {
            if !state.tickets.is_empty() {
                state.selected_index = (state.selected_index + 1).min(state.tickets.len() - 1);
            }
        }
        (Modal::Closed, ManageAction::MoveUp) => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        (Modal::Closed, ManageAction::GoToTop) => {
            state.selected_index = 0;
        }
        (Modal::Closed, ManageAction::GoToBottom) => {
            state.selected_index = state.tickets.len().saturating_sub(1);
        }
        (Modal::Closed, ManageAction::OpenCreate) => {
            state.form.open_create();
            state.focused_field = FormField::Title;
            state.toast = None;
            state.modal = Modal::Form { selected: None };
        }
        (Modal::Closed, ManageAction::OpenEdit) => {
            if let Some(ticket) = state.cursor_ticket().cloned() {
                state.form.open_edit(ticket.clone());
                state.focused_field = FormField::Title;
                state.toast = None;
                state.modal = Modal::Form {
                    selected: Some(ticket),
                };
            }
        }
        (Modal::Closed, ManageAction::OpenDelete) => {
            if let Some(ticket) = state.cursor_ticket().cloned() {
                state.toast = None;
                state.modal = Modal::DeleteConfirm { ticket };
            }
        }
        (Modal::Closed, ManageAction::Quit) => {
            state.should_exit = true;
        }

        (Modal::Form { .. }, ManageAction::FocusNext) => {
            state.focused_field = state.focused_field.next();
        }
        (Modal::Form { .. }, ManageAction::FocusPrev) => {
            state.focused_field = state.focused_field.prev();
        }
        (Modal::Form { .. }, ManageAction::Input(c)) => {
            if is_text_field(state.focused_field) {
                state.form.push_char(state.focused_field, c);
            }
        }
        (Modal::Form { .. }, ManageAction::Backspace) => {
            if is_text_field(state.focused_field) {
                state.form.pop_char(state.focused_field);
            }
        }
        (Modal::Form { .. }, ManageAction::CycleNext) => {
            cycle_selector(&mut state, true);
        }
        (Modal::Form { .. }, ManageAction::CyclePrev) => {
            cycle_selector(&mut state, false);
        }
        (Modal::Form { selected }, ManageAction::Submit) => {
            let editing = selected.as_ref().map(|t| t.id.clone());
            state = submit_form(state, editing);
        }
        (Modal::Form { .. }, ManageAction::Cancel) => {
            state.close_modal();
        }

        (Modal::DeleteConfirm { ticket }, ManageAction::ConfirmDelete) => {
            let id = ticket.id.clone();
            state.toast = Some(match state.tickets.delete(&id) {
                Some(removed) => Toast::success(format!("Deleted {}", removed.id)),
                None => Toast::error(format!("Ticket '{}' no longer exists", id)),
            });
            state.close_modal();
            state.clamp_cursor();
        }
        (Modal::DeleteConfirm { .. }, ManageAction::CancelDelete) => {
            state.close_modal();
        }

        (_, action) => {
            tracing::debug!("Ignoring {:?} in modal state {:?}", action, state.modal);
        }
    }
    state
}

fn is_text_field(field: FormField) -> bool {
    matches!(field, FormField::Title | FormField::Description)
}

fn cycle_selector(state: &mut ManageState, forward: bool) {
    let field = state.focused_field;
    let value = match field {
        FormField::Status => {
            let current: TicketStatus = state.form.field_value(field).parse().unwrap_or_default();
            let next = if forward { current.next() } else { current.prev() };
            next.to_string()
        }
        FormField::Priority => {
            let current: TicketPriority =
                state.form.field_value(field).parse().unwrap_or_default();
            let next = if forward { current.next() } else { current.prev() };
            next.to_string()
        }
        FormField::Title | FormField::Description => return,
    };
    state.form.set_field(field, value);
}

fn submit_form(mut state: ManageState, editing: Option<String>) -> ManageState {
    let Some(draft) = state.form.submit() else {
        // Errors stay on the form, the modal stays open
        return state;
    };

    match editing {
        None => match state.tickets.create(draft).map(|t| t.id.clone()) {
            Ok(id) => {
                state.selected_index = 0;
                state.toast = Some(Toast::success(format!("Created {}", id)));
                state.close_modal();
            }
            Err(e) => {
                state.toast = Some(Toast::error(e.to_string()));
            }
        },
        Some(id) => {
            state.toast = Some(match state.tickets.update(&id, draft) {
                Ok(_) => Toast::success(format!("Updated {}", id)),
                Err(e) => Toast::error(e.to_string()),
            });
            if let Some(index) = state.tickets.position(&id) {
                state.selected_index = index;
            }
            state.close_modal();
        }
    }
    state
}

/// Convert a key event to a ManageAction (pure function)
///
/// Returns `None` if the key doesn't map to any action in the current modal.
pub fn key_to_action(
    state: &ManageState,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Option<ManageAction> {
    match state.modal {
        Modal::Closed => list_key_to_action(code),
        Modal::Form { .. } => form_key_to_action(state.focused_field, code, modifiers),
        Modal::DeleteConfirm { .. } => match code {
            KeyCode::Char('y') | KeyCode::Enter => Some(ManageAction::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => Some(ManageAction::CancelDelete),
            _ => None,
        },
    }
}

fn list_key_to_action(code: KeyCode) -> Option<ManageAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(ManageAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(ManageAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(ManageAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(ManageAction::GoToBottom),
        KeyCode::Char('n') => Some(ManageAction::OpenCreate),
        KeyCode::Char('e') | KeyCode::Enter => Some(ManageAction::OpenEdit),
        KeyCode::Char('d') => Some(ManageAction::OpenDelete),
        KeyCode::Char('q') | KeyCode::Esc => Some(ManageAction::Quit),
        _ => None,
    }
}

fn form_key_to_action(
    focused: FormField,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Option<ManageAction> {
    match code {
        KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ManageAction::Submit)
        }
        KeyCode::Esc => Some(ManageAction::Cancel),
        KeyCode::Tab | KeyCode::Enter | KeyCode::Down => Some(ManageAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(ManageAction::FocusPrev),
        KeyCode::Right if !is_text_field(focused) => Some(ManageAction::CycleNext),
        KeyCode::Left if !is_text_field(focused) => Some(ManageAction::CyclePrev),
        KeyCode::Backspace => Some(ManageAction::Backspace),
        KeyCode::Char(c) if is_text_field(focused) && !modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ManageAction::Input(c))
        }
        _ => None,
    }
}

// ============================================================================
// View model
// ============================================================================

/// Computed view model for rendering the ticket manager
#[derive(Debug, Clone)]
pub struct ManageViewModel {
    /// Tickets in the visible window, with their selection flag
    pub cards: Vec<CardViewModel>,
    pub scroll_offset: usize,
    pub total: usize,
    pub show_empty_state: bool,
    pub shortcuts: Vec<Shortcut>,
    pub toast: Option<Toast>,
    pub form: Option<FormViewModel>,
    pub delete: Option<DeleteViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardViewModel {
    pub ticket: Ticket,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub heading: String,
    pub fields: Vec<FieldViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViewModel {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub is_focused: bool,
    /// Rendered as a selector instead of a text box
    pub is_select: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteViewModel {
    pub ticket_id: String,
    pub ticket_title: String,
}

/// Pure function: compute view model from state
pub fn compute_manage_view_model(state: &ManageState, visible_rows: usize) -> ManageViewModel {
    let total = state.tickets.len();
    let scroll_offset = scroll_offset_for(state.selected_index, total, visible_rows);

    let cards = state
        .tickets
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(|(i, ticket)| CardViewModel {
            ticket: ticket.clone(),
            is_selected: i == state.selected_index,
        })
        .collect();

    let shortcuts = match &state.modal {
        Modal::Form { .. } => form_shortcuts(),
        Modal::DeleteConfirm { .. } => delete_shortcuts(),
        Modal::Closed if total == 0 => empty_shortcuts(),
        Modal::Closed => manage_shortcuts(),
    };

    let form = state.form_modal_open().then(|| FormViewModel {
        heading: state.form.heading(),
        fields: FormField::ALL
            .iter()
            .map(|&field| FieldViewModel {
                field,
                label: field.label(),
                value: state.form.field_value(field).to_string(),
                error: state.form.error_for(field).map(ToString::to_string),
                is_focused: field == state.focused_field,
                is_select: !is_text_field(field),
            })
            .collect(),
    });

    let delete = match &state.modal {
        Modal::DeleteConfirm { ticket } => Some(DeleteViewModel {
            ticket_id: ticket.id.clone(),
            ticket_title: ticket.title.clone(),
        }),
        _ => None,
    };

    ManageViewModel {
        cards,
        scroll_offset,
        total,
        show_empty_state: total == 0,
        shortcuts,
        toast: state.toast.clone(),
        form,
        delete,
    }
}

/// First visible row, keeping the cursor near the middle of the window
pub fn scroll_offset_for(selected: usize, total: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 || total <= visible_rows {
        return 0;
    }
    selected
        .saturating_sub(visible_rows / 2)
        .min(total - visible_rows)
}
