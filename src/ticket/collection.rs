//! In-memory ticket collection
//!
//! The collection is the only place tickets change. It keeps tickets in
//! display order (newest first) and guarantees that ids stay unique.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{ResolvError, Result};
use crate::ticket::id::{IdGenerator, SequentialIdGenerator};
use crate::ticket::seed::seed_tickets;
use crate::ticket::validate::{FieldError, FormField};
use crate::types::{MAX_DESCRIPTION_LEN, Ticket, TicketDraft, TicketStatus};

/// Ticket counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

/// Ordered, id-unique set of tickets
#[derive(Debug, Clone)]
pub struct TicketCollection<G = SequentialIdGenerator> {
    tickets: Vec<Ticket>,
    ids: G,
}

impl TicketCollection<SequentialIdGenerator> {
    /// Empty collection using the given id prefix
    pub fn new(prefix: &str) -> Self {
        Self::with_generator(Vec::new(), SequentialIdGenerator::new(prefix))
    }

    /// Collection holding the built-in example tickets
    pub fn seeded(prefix: &str) -> Self {
        Self::from_tickets(prefix, seed_tickets())
    }

    /// Collection over existing tickets, numbering new ones past the highest id
    pub fn from_tickets(prefix: &str, tickets: Vec<Ticket>) -> Self {
        let ids = SequentialIdGenerator::seeded_past(prefix, tickets.iter().map(|t| t.id.as_str()));
        Self::with_generator(tickets, ids)
    }
}

impl<G: IdGenerator> TicketCollection<G> {
    /// Build a collection with a custom id generator.
    ///
    /// Tickets whose id repeats an earlier one are dropped.
    pub fn with_generator(tickets: Vec<Ticket>, ids: G) -> Self {
        let mut seen = HashSet::new();
        let tickets = tickets
            .into_iter()
            .filter(|t| {
                let fresh = seen.insert(t.id.clone());
                if !fresh {
                    tracing::warn!("Dropping ticket with duplicate id '{}'", t.id);
                }
                fresh
            })
            .collect();
        Self { tickets, ids }
    }

    /// Assign a fresh id to `draft` and put the ticket at the head
    pub fn create(&mut self, draft: TicketDraft) -> Result<&Ticket> {
        check_draft(&draft)?;
        let id = self.fresh_id()?;
        tracing::info!("Created ticket {}", id);
        self.tickets.insert(0, Ticket::from_draft(id, draft));
        Ok(&self.tickets[0])
    }

    /// Replace every mutable field of the ticket with this id
    ///
    /// Leaves the collection untouched when the id is unknown or the
    /// draft is rejected.
    pub fn update(&mut self, id: &str, draft: TicketDraft) -> Result<&Ticket> {
        check_draft(&draft)?;
        let index = self
            .position(id)
            .ok_or_else(|| ResolvError::TicketNotFound(id.to_string()))?;
        self.tickets[index].apply(draft);
        tracing::info!("Updated ticket {}", id);
        Ok(&self.tickets[index])
    }

    /// Remove the ticket with this id, returning it if it existed
    pub fn delete(&mut self, id: &str) -> Option<Ticket> {
        let index = self.position(id)?;
        let removed = self.tickets.remove(index);
        tracing::info!("Deleted ticket {}", id);
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tickets.iter().position(|t| t.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    pub fn as_slice(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.tickets
            .iter()
            .fold(StatusCounts::default(), |mut counts, ticket| {
                counts.total += 1;
                match ticket.status {
                    TicketStatus::Open => counts.open += 1,
                    TicketStatus::InProgress => counts.in_progress += 1,
                    TicketStatus::Closed => counts.closed += 1,
                }
                counts
            })
    }

    /// Ask the generator for ids until one is unused.
    ///
    /// A collection of n tickets can reject at most n candidates, so n + 1
    /// attempts suffice for any generator that never repeats itself.
    fn fresh_id(&mut self) -> Result<String> {
        let attempts = self.tickets.len() + 1;
        let mut last = String::new();
        for _ in 0..attempts {
            let candidate = self.ids.next_id();
            if !self.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!("Skipping id {} already in use", candidate);
            last = candidate;
        }
        Err(ResolvError::IdGenerationFailed(last))
    }
}

/// Every stored ticket has a non-blank title and a description within the limit
fn check_draft(draft: &TicketDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(ResolvError::Validation(
            FieldError::RequiredField(FormField::Title).to_string(),
        ));
    }
    if let Some(description) = &draft.description {
        let actual = description.chars().count();
        if actual > MAX_DESCRIPTION_LEN {
            return Err(ResolvError::Validation(
                FieldError::LengthExceeded {
                    field: FormField::Description,
                    max: MAX_DESCRIPTION_LEN,
                    actual,
                }
                .to_string(),
            ));
        }
    }
    Ok(())
}

impl<'a, G> IntoIterator for &'a TicketCollection<G> {
    type Item = &'a Ticket;
    type IntoIter = std::slice::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketPriority;

    /// Replays a fixed list of ids, then repeats the last one forever
    struct ScriptedIds(Vec<&'static str>);

    impl IdGenerator for ScriptedIds {
        fn next_id(&mut self) -> String {
            if self.0.len() > 1 {
                self.0.remove(0).to_string()
            } else {
                self.0[0].to_string()
            }
        }
    }

    fn ids(collection: &TicketCollection<impl IdGenerator>) -> Vec<String> {
        collection.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_create_prepends_with_fresh_id() {
        let mut tickets = TicketCollection::seeded("TKT");
        let before = tickets.len();
        let created = tickets
            .create(
                TicketDraft::new("Fix bug")
                    .with_status(TicketStatus::Open)
                    .with_priority(TicketPriority::High),
            )
            .unwrap()
            .clone();

        assert_eq!(tickets.len(), before + 1);
        assert_eq!(created.id, "TKT-004");
        assert_eq!(tickets.as_slice()[0], created);
        assert_eq!(
            tickets.iter().filter(|t| t.id == created.id).count(),
            1,
            "new id must be distinct from every existing id"
        );
    }

    #[test]
    fn test_create_on_empty_collection() {
        let mut tickets = TicketCollection::new("SUP");
        tickets.create(TicketDraft::new("First")).unwrap();
        tickets.create(TicketDraft::new("Second")).unwrap();
        assert_eq!(ids(&tickets), vec!["SUP-002", "SUP-001"]);
    }

    #[test]
    fn test_create_skips_ids_already_taken() {
        let seed = seed_tickets();
        let mut tickets = TicketCollection::with_generator(
            seed,
            ScriptedIds(vec!["TKT-001", "TKT-002", "TKT-050"]),
        );
        let created = tickets.create(TicketDraft::new("x")).unwrap();
        assert_eq!(created.id, "TKT-050");
    }

    #[test]
    fn test_create_fails_when_generator_only_repeats() {
        let mut tickets =
            TicketCollection::with_generator(seed_tickets(), ScriptedIds(vec!["TKT-001"]));
        let result = tickets.create(TicketDraft::new("x"));
        let err = result.unwrap_err();
        assert!(matches!(err, ResolvError::IdGenerationFailed(ref last) if last == "TKT-001"));
        assert_eq!(err.to_string(), "no free ticket id after 'TKT-001'");
        assert_eq!(tickets.len(), 3);
    }

    #[test]
    fn test_update_replaces_fields_in_place() {
        let mut tickets = TicketCollection::seeded("TKT");
        let original = tickets.get("TKT-002").unwrap().clone();
        let draft = original.to_draft().with_status(TicketStatus::Closed);

        tickets.update("TKT-002", draft).unwrap();

        assert_eq!(tickets.len(), 3);
        assert_eq!(tickets.position("TKT-002"), Some(1));
        let updated = tickets.get("TKT-002").unwrap();
        assert_eq!(updated.status, TicketStatus::Closed);
        assert_eq!(updated.title, original.title);
        assert_eq!(tickets.get("TKT-001").unwrap(), &seed_tickets()[0]);
        assert_eq!(tickets.get("TKT-003").unwrap(), &seed_tickets()[2]);
    }

    #[test]
    fn test_update_clears_description_when_draft_has_none() {
        let mut tickets = TicketCollection::seeded("TKT");
        tickets
            .update("TKT-001", TicketDraft::new("Login fixed"))
            .unwrap();
        assert!(tickets.get("TKT-001").unwrap().description.is_none());
    }

    #[test]
    fn test_update_unknown_id_leaves_collection_unchanged() {
        let mut tickets = TicketCollection::seeded("TKT");
        let before = tickets.as_slice().to_vec();

        let result = tickets.update("TKT-999", TicketDraft::new("ghost"));

        assert!(matches!(result, Err(ResolvError::TicketNotFound(id)) if id == "TKT-999"));
        assert_eq!(tickets.as_slice(), before.as_slice());
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let mut tickets = TicketCollection::seeded("TKT");
        let before = tickets.as_slice().to_vec();

        let result = tickets.create(TicketDraft::new("   "));

        assert!(matches!(result, Err(ResolvError::Validation(msg)) if msg == "Title is required."));
        assert_eq!(tickets.as_slice(), before.as_slice());

        // The rejected draft did not consume an id
        let next = tickets.create(TicketDraft::new("Real")).unwrap();
        assert_eq!(next.id, "TKT-004");
    }

    #[test]
    fn test_create_and_update_reject_long_description() {
        let mut tickets = TicketCollection::seeded("TKT");
        let before = tickets.as_slice().to_vec();
        let long = "x".repeat(900);

        let created = tickets.create(TicketDraft::new("Title").with_description(long.clone()));
        assert!(matches!(
            created,
            Err(ResolvError::Validation(msg)) if msg == "Description cannot exceed 500 characters."
        ));

        let updated = tickets.update("TKT-001", TicketDraft::new("Title").with_description(long));
        assert!(matches!(updated, Err(ResolvError::Validation(_))));
        assert_eq!(tickets.as_slice(), before.as_slice());
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let mut tickets = TicketCollection::seeded("TKT");
        let result = tickets.update("TKT-002", TicketDraft::new(""));
        assert!(matches!(result, Err(ResolvError::Validation(_))));
        assert_eq!(tickets.get("TKT-002").unwrap(), &seed_tickets()[1]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut tickets = TicketCollection::seeded("TKT");
        let removed = tickets.delete("TKT-001");
        assert_eq!(removed.map(|t| t.id), Some("TKT-001".to_string()));
        let after_first = tickets.as_slice().to_vec();

        assert!(tickets.delete("TKT-001").is_none());
        assert_eq!(tickets.as_slice(), after_first.as_slice());
        assert_eq!(tickets.len(), 2);
    }

    #[test]
    fn test_deleted_id_is_not_reused() {
        let mut tickets = TicketCollection::seeded("TKT");
        let id = tickets.create(TicketDraft::new("temp")).unwrap().id.clone();
        tickets.delete(&id);
        let next = tickets.create(TicketDraft::new("next")).unwrap();
        assert_ne!(next.id, id);
    }

    #[test]
    fn test_duplicate_ids_dropped_on_construction() {
        let mut seed = seed_tickets();
        seed.push(seed[0].clone());
        let tickets = TicketCollection::from_tickets("TKT", seed);
        assert_eq!(tickets.len(), 3);
    }

    #[test]
    fn test_status_counts() {
        let tickets = TicketCollection::seeded("TKT");
        assert_eq!(
            tickets.status_counts(),
            StatusCounts {
                total: 3,
                open: 1,
                in_progress: 1,
                closed: 1,
            }
        );
    }
}
