//! Ticket form state
//!
//! Holds what the user has entered so far plus the errors from the last
//! submit attempt. The form never touches the ticket collection; a
//! successful submit hands back a draft for the caller to apply.

use crate::ticket::validate::{
    FieldError, FieldErrors, FormField, TicketFormData, TicketFormValidator, ValidationOutcome,
};
use crate::types::{Ticket, TicketDraft};

/// Whether the form creates a new ticket or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketForm {
    is_open: bool,
    initial: Option<Ticket>,
    data: TicketFormData,
    errors: FieldErrors,
}

impl TicketForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the form for a new open state or initial ticket.
    ///
    /// With a ticket the fields are pre-filled from it, otherwise they go back
    /// to their defaults. Errors are always cleared.
    pub fn sync(&mut self, is_open: bool, initial: Option<Ticket>) {
        self.data = initial
            .as_ref()
            .map(TicketFormData::from_ticket)
            .unwrap_or_default();
        self.initial = initial;
        self.is_open = is_open;
        self.errors.clear_all();
    }

    pub fn open_create(&mut self) {
        self.sync(true, None);
    }

    pub fn open_edit(&mut self, ticket: Ticket) {
        self.sync(true, Some(ticket));
    }

    pub fn close(&mut self) {
        self.sync(false, None);
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn initial(&self) -> Option<&Ticket> {
        self.initial.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        match &self.initial {
            Some(ticket) => FormMode::Edit {
                id: ticket.id.clone(),
            },
            None => FormMode::Create,
        }
    }

    /// Modal title
    pub fn heading(&self) -> String {
        match self.mode() {
            FormMode::Create => "Create New Ticket".to_string(),
            FormMode::Edit { id } => format!("Edit Ticket #{id}"),
        }
    }

    pub fn data(&self) -> &TicketFormData {
        &self.data
    }

    pub fn field_value(&self, field: FormField) -> &str {
        self.data.get(field)
    }

    /// Replace a field's text and drop that field's error
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.errors.clear(field);
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        let mut value = self.field_value(field).to_string();
        value.push(c);
        self.set_field(field, value);
    }

    pub fn pop_char(&mut self, field: FormField) {
        let mut value = self.field_value(field).to_string();
        value.pop();
        self.set_field(field, value);
    }

    pub fn error_for(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validate every field. Returns the draft on success; on failure the
    /// errors are kept on the form and nothing is returned.
    pub fn submit(&mut self) -> Option<TicketDraft> {
        match TicketFormValidator::validate(&self.data) {
            ValidationOutcome::Valid(draft) => {
                self.errors.clear_all();
                Some(draft)
            }
            ValidationOutcome::Invalid(errors) => {
                tracing::debug!("Ticket form rejected with {} error(s)", errors.len());
                self.errors = errors;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::seed::seed_tickets;
    use crate::types::{TicketPriority, TicketStatus};

    #[test]
    fn test_create_mode_uses_defaults() {
        let mut form = TicketForm::new();
        form.open_create();
        assert!(form.is_open());
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.heading(), "Create New Ticket");
        assert_eq!(form.field_value(FormField::Title), "");
        assert_eq!(form.field_value(FormField::Status), "open");
        assert_eq!(form.field_value(FormField::Priority), "low");
    }

    #[test]
    fn test_edit_mode_prefills_from_ticket() {
        let ticket = seed_tickets()[0].clone();
        let mut form = TicketForm::new();
        form.open_edit(ticket.clone());
        assert_eq!(form.heading(), "Edit Ticket #TKT-001");
        assert_eq!(form.field_value(FormField::Title), ticket.title);
        assert_eq!(form.field_value(FormField::Status), "in_progress");
        assert_eq!(form.field_value(FormField::Priority), "high");
    }

    #[test]
    fn test_failed_submit_keeps_errors_and_emits_nothing() {
        let mut form = TicketForm::new();
        form.open_create();
        assert_eq!(form.submit(), None);
        assert_eq!(
            form.error_for(FormField::Title).map(ToString::to_string),
            Some("Title is required.".to_string())
        );
    }

    #[test]
    fn test_editing_field_clears_only_its_error() {
        let mut form = TicketForm::new();
        form.open_create();
        form.set_field(FormField::Status, "");
        form.submit();
        assert!(form.error_for(FormField::Title).is_some());
        assert!(form.error_for(FormField::Status).is_some());

        form.push_char(FormField::Title, 'F');
        assert!(form.error_for(FormField::Title).is_none());
        assert!(form.error_for(FormField::Status).is_some());
    }

    #[test]
    fn test_sync_clears_errors() {
        let mut form = TicketForm::new();
        form.open_create();
        form.submit();
        assert!(!form.errors().is_empty());

        form.open_edit(seed_tickets()[1].clone());
        assert!(form.errors().is_empty());
        form.open_create();
        assert_eq!(form.field_value(FormField::Title), "");
    }

    #[test]
    fn test_successful_submit_returns_draft() {
        let mut form = TicketForm::new();
        form.open_create();
        for c in "Fix bug".chars() {
            form.push_char(FormField::Title, c);
        }
        form.set_field(FormField::Priority, "high");
        let draft = form.submit().unwrap();
        assert_eq!(draft.title, "Fix bug");
        assert_eq!(draft.status, TicketStatus::Open);
        assert_eq!(draft.priority, TicketPriority::High);
    }

    #[test]
    fn test_pop_char_on_empty_field() {
        let mut form = TicketForm::new();
        form.open_create();
        form.pop_char(FormField::Title);
        assert_eq!(form.field_value(FormField::Title), "");
    }

    #[test]
    fn test_close_resets_state() {
        let mut form = TicketForm::new();
        form.open_edit(seed_tickets()[2].clone());
        form.close();
        assert!(!form.is_open());
        assert_eq!(form.mode(), FormMode::Create);
    }
}
