use crate::types::{Ticket, TicketPriority, TicketStatus};

/// The example tickets every ticket screen starts with
pub fn seed_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "TKT-001".to_string(),
            title: "Website login form is broken".to_string(),
            description: Some(
                "Users are reporting they cannot log in. The submit button is disabled."
                    .to_string(),
            ),
            status: TicketStatus::InProgress,
            priority: TicketPriority::High,
        },
        Ticket {
            id: "TKT-002".to_string(),
            title: "Update homepage copy".to_string(),
            description: Some(
                "Marketing needs the new tagline added to the hero section.".to_string(),
            ),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
        },
        Ticket {
            id: "TKT-003".to_string(),
            title: "Server migration".to_string(),
            description: Some("Migrate all services from AWS to Azure.".to_string()),
            status: TicketStatus::Closed,
            priority: TicketPriority::Low,
        },
    ]
}
