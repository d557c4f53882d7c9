//! Ticket form validation
//!
//! Validation runs over the raw text of every field at once and produces
//! either a clean `TicketDraft` or one error per offending field.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{
    MAX_DESCRIPTION_LEN, Ticket, TicketDraft, TicketPriority, TicketStatus, VALID_STATUSES,
};

/// Fields of the ticket form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Status,
    Priority,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Status,
        FormField::Priority,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Status => "Status",
            FormField::Priority => "Priority",
        }
    }

    /// Next field in tab order (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Status,
            FormField::Status => FormField::Priority,
            FormField::Priority => FormField::Title,
        }
    }

    /// Previous field in tab order (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Priority,
            FormField::Description => FormField::Title,
            FormField::Status => FormField::Description,
            FormField::Priority => FormField::Status,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Title => write!(f, "title"),
            FormField::Description => write!(f, "description"),
            FormField::Status => write!(f, "status"),
            FormField::Priority => write!(f, "priority"),
        }
    }
}

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Empty or whitespace-only value
    RequiredField(FormField),
    /// Value outside the field's allowed set
    InvalidEnum {
        field: FormField,
        allowed: &'static [&'static str],
    },
    /// Value longer than `max` characters
    LengthExceeded {
        field: FormField,
        max: usize,
        actual: usize,
    },
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::RequiredField(field)
            | FieldError::InvalidEnum { field, .. }
            | FieldError::LengthExceeded { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::RequiredField(field) => write!(f, "{} is required.", field.label()),
            FieldError::InvalidEnum { field, allowed } => {
                write!(f, "{} must be {}.", field.label(), quoted_choices(allowed))
            }
            FieldError::LengthExceeded { field, max, .. } => {
                write!(f, "{} cannot exceed {} characters.", field.label(), max)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// `"a", "b", or "c"`
fn quoted_choices(allowed: &[&str]) -> String {
    let quoted: Vec<String> = allowed.iter().map(|v| format!("\"{v}\"")).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

/// At most one error per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Drop the error for one field, leaving the others alone
    pub fn clear(&mut self, field: FormField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// Result of validating the ticket form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(TicketDraft),
    Invalid(FieldErrors),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }
}

/// Raw text of every form field, exactly as entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketFormData {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
}

impl Default for TicketFormData {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TicketStatus::default().to_string(),
            priority: TicketPriority::default().to_string(),
        }
    }
}

impl TicketFormData {
    /// Pre-fill from an existing ticket
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone().unwrap_or_default(),
            status: ticket.status.to_string(),
            priority: ticket.priority.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Status => &self.status,
            FormField::Priority => &self.priority,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Status => self.status = value,
            FormField::Priority => self.priority = value,
        }
    }
}

/// Validator for ticket forms
pub struct TicketFormValidator;

impl TicketFormValidator {
    /// Check every field and build the draft if all pass
    pub fn validate(data: &TicketFormData) -> ValidationOutcome {
        let mut errors = FieldErrors::new();

        let title = data.title.trim();
        if title.is_empty() {
            errors.insert(FieldError::RequiredField(FormField::Title));
        }

        let status = if data.status.trim().is_empty() {
            errors.insert(FieldError::RequiredField(FormField::Status));
            None
        } else {
            match TicketStatus::from_wire(&data.status) {
                Some(status) => Some(status),
                None => {
                    errors.insert(FieldError::InvalidEnum {
                        field: FormField::Status,
                        allowed: VALID_STATUSES,
                    });
                    None
                }
            }
        };

        let description_len = data.description.chars().count();
        if description_len > MAX_DESCRIPTION_LEN {
            errors.insert(FieldError::LengthExceeded {
                field: FormField::Description,
                max: MAX_DESCRIPTION_LEN,
                actual: description_len,
            });
        }

        // Priority is never rejected; anything unrecognized means the default.
        let priority = data.priority.parse::<TicketPriority>().unwrap_or_else(|_| {
            if !data.priority.trim().is_empty() {
                tracing::debug!("Unrecognized priority '{}', using default", data.priority);
            }
            TicketPriority::default()
        });

        match status {
            Some(status) if errors.is_empty() => ValidationOutcome::Valid(TicketDraft {
                title: title.to_string(),
                description: if data.description.trim().is_empty() {
                    None
                } else {
                    Some(data.description.clone())
                },
                status,
                priority,
            }),
            _ => ValidationOutcome::Invalid(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str, status: &str, priority: &str) -> TicketFormData {
        TicketFormData {
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            priority: priority.to_string(),
        }
    }

    fn errors_of(outcome: ValidationOutcome) -> FieldErrors {
        match outcome {
            ValidationOutcome::Invalid(errors) => errors,
            ValidationOutcome::Valid(draft) => panic!("expected errors, got {draft:?}"),
        }
    }

    #[test]
    fn test_valid_form_produces_draft() {
        let outcome =
            TicketFormValidator::validate(&form("Fix bug", "", "open", "high"));
        assert_eq!(
            outcome,
            ValidationOutcome::Valid(
                TicketDraft::new("Fix bug").with_priority(TicketPriority::High)
            )
        );
    }

    #[test]
    fn test_empty_title_is_required() {
        for title in ["", "   ", "\t\n"] {
            let errors = errors_of(TicketFormValidator::validate(&form(title, "", "open", "low")));
            assert_eq!(
                errors.get(FormField::Title),
                Some(&FieldError::RequiredField(FormField::Title))
            );
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_status_required_and_enum() {
        let errors = errors_of(TicketFormValidator::validate(&form("t", "", "", "low")));
        assert_eq!(
            errors.get(FormField::Status).map(|e| e.to_string()).as_deref(),
            Some("Status is required.")
        );

        let errors = errors_of(TicketFormValidator::validate(&form("t", "", "done", "low")));
        assert_eq!(
            errors.get(FormField::Status).map(|e| e.to_string()).as_deref(),
            Some("Status must be \"open\", \"in_progress\", or \"closed\".")
        );
    }

    #[test]
    fn test_status_must_match_exactly() {
        for status in ["OPEN", " open ", "In_Progress", "closed\n"] {
            let errors = errors_of(TicketFormValidator::validate(&form("t", "", status, "low")));
            assert_eq!(
                errors.get(FormField::Status),
                Some(&FieldError::InvalidEnum {
                    field: FormField::Status,
                    allowed: VALID_STATUSES,
                }),
                "status {status:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_description_length_limit() {
        let at_limit = "a".repeat(MAX_DESCRIPTION_LEN);
        assert!(TicketFormValidator::validate(&form("t", &at_limit, "open", "low")).is_valid());

        let over = "a".repeat(MAX_DESCRIPTION_LEN + 1);
        let errors = errors_of(TicketFormValidator::validate(&form("t", &over, "open", "low")));
        assert_eq!(errors.len(), 1, "only the description should fail");
        assert_eq!(
            errors.get(FormField::Description),
            Some(&FieldError::LengthExceeded {
                field: FormField::Description,
                max: 500,
                actual: 501,
            })
        );
        assert_eq!(
            errors.get(FormField::Description).unwrap().to_string(),
            "Description cannot exceed 500 characters."
        );
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_DESCRIPTION_LEN);
        assert!(TicketFormValidator::validate(&form("t", &accented, "open", "low")).is_valid());
    }

    #[test]
    fn test_all_errors_reported_together() {
        let over = "x".repeat(600);
        let errors = errors_of(TicketFormValidator::validate(&form(" ", &over, "nope", "")));
        let fields: Vec<FormField> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![FormField::Title, FormField::Description, FormField::Status]
        );
    }

    #[test]
    fn test_priority_falls_back_to_default() {
        for priority in ["", "urgent"] {
            match TicketFormValidator::validate(&form("t", "", "open", priority)) {
                ValidationOutcome::Valid(draft) => assert_eq!(draft.priority, TicketPriority::Low),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_title_trimmed_and_blank_description_dropped() {
        match TicketFormValidator::validate(&form("  Fix bug  ", "   ", "closed", "medium")) {
            ValidationOutcome::Valid(draft) => {
                assert_eq!(draft.title, "Fix bug");
                assert_eq!(draft.description, None);
                assert_eq!(draft.status, TicketStatus::Closed);
                assert_eq!(draft.priority, TicketPriority::Medium);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_clear_only_touches_one_field() {
        let mut errors = errors_of(TicketFormValidator::validate(&form("", "", "", "")));
        assert_eq!(errors.len(), 2);
        errors.clear(FormField::Title);
        assert!(errors.get(FormField::Title).is_none());
        assert!(errors.get(FormField::Status).is_some());
    }

    #[test]
    fn test_form_data_from_ticket() {
        let ticket = Ticket::from_draft(
            "TKT-001",
            TicketDraft::new("Title").with_status(TicketStatus::InProgress),
        );
        let data = TicketFormData::from_ticket(&ticket);
        assert_eq!(data.status, "in_progress");
        assert_eq!(data.priority, "low");
        assert_eq!(data.description, "");
    }

    #[test]
    fn test_field_tab_order_wraps() {
        assert_eq!(FormField::Priority.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Priority);
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn test_quoted_choices() {
        assert_eq!(quoted_choices(&["a"]), "\"a\"");
        assert_eq!(quoted_choices(&["a", "b"]), "\"a\" or \"b\"");
    }
}
