use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ResolvError;

/// Maximum description length, counted in characters
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Prefix used for generated ticket ids unless configured otherwise
pub const DEFAULT_ID_PREFIX: &str = "TKT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    /// Human readable label for badges and selectors
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Closed => "Closed",
        }
    }

    /// Exact snake_case spelling only, unlike `FromStr` which forgives case and padding
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "open" => Some(TicketStatus::Open),
            "in_progress" => Some(TicketStatus::InProgress),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::InProgress => write!(f, "in_progress"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = ResolvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(ResolvError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["open", "in_progress", "closed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    #[default]
    Low,
    Medium,
    High,
}

impl TicketPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "low"),
            TicketPriority::Medium => write!(f, "medium"),
            TicketPriority::High => write!(f, "high"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = ResolvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            _ => Err(ResolvError::InvalidPriority(s.to_string())),
        }
    }
}

pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high"];

/// A ticket without its identifier.
///
/// This is what the ticket form emits and what the collection consumes on
/// create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub status: TicketStatus,

    #[serde(default)]
    pub priority: TicketPriority,
}

impl TicketDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub status: TicketStatus,

    #[serde(default)]
    pub priority: TicketPriority,
}

impl Ticket {
    /// Attach an identifier to a draft
    pub fn from_draft(id: impl Into<String>, draft: TicketDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
        }
    }

    /// Replace every mutable field, keeping the id
    pub fn apply(&mut self, draft: TicketDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.status = draft.status;
        self.priority = draft.priority;
    }

    /// The ticket minus its identifier
    pub fn to_draft(&self) -> TicketDraft {
        TicketDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
        }
    }
}
