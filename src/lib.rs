pub mod auth;
pub mod commands;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod paths;
pub mod routes;
pub mod ticket;
pub mod tui;
pub mod types;

pub use auth::{FileStorage, LoginForm, MemoryStorage, Session, SessionStorage, SignupForm};
pub use config::Config;
pub use context::AppContext;
pub use error::{ResolvError, Result};
pub use routes::{Navigation, Route, navigate};
pub use ticket::{
    FieldError, FormField, TicketCollection, TicketForm, TicketFormData, TicketFormValidator,
    ValidationOutcome, seed_tickets,
};
pub use types::{Ticket, TicketDraft, TicketPriority, TicketStatus};
