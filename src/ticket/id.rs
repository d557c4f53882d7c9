//! Ticket identifier generation
//!
//! Identifiers look like `TKT-004`: a configurable prefix, a dash, and a
//! counter zero-padded to three digits. The counter only moves forward, so a
//! generator never hands out the same id twice.

/// Produces identifiers for new tickets.
///
/// The collection asks for ids one at a time and discards any that are
/// already taken, so implementations only need to be unlikely to repeat.
pub trait IdGenerator {
    /// Return the next candidate identifier
    fn next_id(&mut self) -> String;
}

/// Monotonic counter generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Start counting at 1
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: next.max(1),
        }
    }

    /// Start one past the highest numeric suffix found in `existing`
    ///
    /// Ids that don't carry this generator's prefix are ignored.
    pub fn seeded_past<'a>(
        prefix: impl Into<String>,
        existing: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let prefix = prefix.into();
        let highest = existing
            .into_iter()
            .filter_map(|id| parse_id_number(&prefix, id))
            .max()
            .unwrap_or(0);
        Self::starting_at(prefix, highest.saturating_add(1))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The number the next call to `next_id` will use
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format_id(&self.prefix, self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Format an id from prefix and number (`TKT`, 7 -> `TKT-007`)
pub fn format_id(prefix: &str, number: u64) -> String {
    format!("{prefix}-{number:03}")
}

/// Extract the numeric suffix from an id with the given prefix
pub fn parse_id_number(prefix: &str, id: &str) -> Option<u64> {
    let rest = id.strip_prefix(prefix)?.strip_prefix('-')?;
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}
