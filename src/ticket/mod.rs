mod collection;
mod form;
mod id;
mod seed;
mod validate;

pub use collection::{StatusCounts, TicketCollection};
pub use form::{FormMode, TicketForm};
pub use id::{IdGenerator, SequentialIdGenerator, format_id, parse_id_number};
pub use seed::seed_tickets;
pub use validate::{
    FieldError, FieldErrors, FormField, TicketFormData, TicketFormValidator, ValidationOutcome,
};
