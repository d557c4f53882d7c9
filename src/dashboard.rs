//! Dashboard summary data

use serde::Serialize;

use crate::routes::Route;
use crate::ticket::{StatusCounts, TicketCollection};

/// Accent used when rendering a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatTone {
    Blue,
    Green,
    Yellow,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    pub tone: StatTone,
}

impl StatCard {
    pub fn formatted_value(&self) -> String {
        format_count(self.value)
    }
}

/// The fixed headline statistics
pub const SUMMARY_STATS: [StatCard; 4] = [
    StatCard {
        title: "Total Tickets",
        value: 2350,
        tone: StatTone::Blue,
    },
    StatCard {
        title: "Open Tickets",
        value: 450,
        tone: StatTone::Green,
    },
    StatCard {
        title: "In Progress",
        value: 210,
        tone: StatTone::Yellow,
    },
    StatCard {
        title: "Closed",
        value: 1690,
        tone: StatTone::Gray,
    },
];

/// Everything the dashboard screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub stats: Vec<StatCard>,
    pub seed_counts: StatusCounts,
    #[serde(serialize_with = "serialize_route")]
    pub call_to_action: Route,
}

fn serialize_route<S: serde::Serializer>(route: &Route, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(route.path())
}

impl Dashboard {
    pub fn build(tickets: &TicketCollection) -> Self {
        Self {
            stats: SUMMARY_STATS.to_vec(),
            seed_counts: tickets.status_counts(),
            call_to_action: Route::ManageTickets,
        }
    }
}

/// Group digits in threes: 2350 -> "2,350"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
