//! In-flight mutation de-duplication.
//!
//! A mutation is identified by the entity it targets plus a hash of its
//! payload. While a ticket for that key is held, an identical submission is
//! refused; a different payload for the same entity is still allowed. The
//! holder must hand the ticket back with [`SubmitGuard::release`] once the
//! request settles, whatever its outcome.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Entity plus payload fingerprint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubmitKey {
    entity: String,
    payload: u64,
}

impl SubmitKey {
    /// Key for sending `payload` to `entity` (e.g. `"category:create"`, `"topic:7:restore"`).
    #[must_use]
    pub fn new(entity: impl Into<String>, payload: &impl Serialize) -> Self {
        let mut hasher = DefaultHasher::new();
        serde_json::to_vec(payload).unwrap_or_default().hash(&mut hasher);
        Self { entity: entity.into(), payload: hasher.finish() }
    }

    /// Key for a payload-less mutation such as a delete.
    #[must_use]
    pub fn bare(entity: impl Into<String>) -> Self {
        Self::new(entity, &())
    }
}

/// Proof that a submission was admitted.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a ticket must be released when the request settles"]
pub struct Ticket(SubmitKey);

impl Ticket {
    #[must_use]
    pub fn key(&self) -> &SubmitKey {
        &self.0
    }
}

/// Set of submissions currently in flight.
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    in_flight: HashSet<SubmitKey>,
}

impl SubmitGuard {
    /// Admit `key` unless an identical submission is still pending.
    pub fn try_acquire(&mut self, key: SubmitKey) -> Option<Ticket> {
        if self.in_flight.insert(key.clone()) {
            Some(Ticket(key))
        } else {
            None
        }
    }

    pub fn release(&mut self, ticket: Ticket) {
        self.in_flight.remove(&ticket.0);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}
