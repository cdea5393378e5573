// ABOUTME: In-memory store of PRDs saved during one session
// ABOUTME: Append-only list with id assignment and document statistics; nothing is persisted

use std::sync::Arc;

use prd_studio_core::{weeks_between, Clock, SystemClock};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::PRD;

/// Summary numbers shown alongside the saved documents list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total: usize,
    pub per_week: u64,
    pub avg_requirements: u64,
}

/// Saved PRDs for the life of the process.
///
/// Owned by whoever drives the UI and passed where needed. Saving appends a copy; there
/// is no update, delete or deduplication.
pub struct SessionStore {
    prds: Vec<PRD>,
    clock: Arc<dyn Clock>,
    last_id: Option<i64>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            prds: Vec::new(),
            clock,
            last_id: None,
        }
    }

    /// Append a copy of `prd` with a fresh id and return that copy.
    ///
    /// `created_at` is carried over unchanged.
    pub fn save(&mut self, prd: &PRD) -> PRD {
        let mut saved = prd.clone();
        saved.id = Some(self.next_id());

        info!(
            "Saved PRD '{}' as {}",
            saved.title,
            saved.id.as_deref().unwrap_or_default()
        );
        self.prds.push(saved.clone());
        saved
    }

    /// Millisecond timestamp id, bumped past the previous one if the clock stood still
    fn next_id(&mut self) -> String {
        let now = self.clock.now().timestamp_millis();
        let id = match self.last_id {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_id = Some(id);
        id.to_string()
    }

    /// Saved documents in save order
    pub fn list(&self) -> &[PRD] {
        &self.prds
    }

    pub fn get(&self, id: &str) -> Option<&PRD> {
        self.prds.iter().find(|p| p.id.as_deref() == Some(id))
    }

    pub fn len(&self) -> usize {
        self.prds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prds.is_empty()
    }

    /// Totals for the documents screen.
    ///
    /// Documents per week is measured from the first saved document's creation time to
    /// now, with at least one week in the denominator.
    pub fn stats(&self) -> SessionStats {
        let total = self.prds.len();
        let Some(first) = self.prds.first() else {
            return SessionStats {
                total: 0,
                per_week: 0,
                avg_requirements: 0,
            };
        };

        let weeks = weeks_between(&first.created_at, &self.clock.now()).max(1);
        let per_week = (total as f64 / weeks as f64).round() as u64;

        let requirement_lines: usize = self.prds.iter().map(|p| p.requirements.len()).sum();
        let avg_requirements = (requirement_lines as f64 / total.max(1) as f64).round() as u64;

        SessionStats {
            total,
            per_week,
            avg_requirements,
        }
    }
}
