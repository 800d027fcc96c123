//! Review board: the stored records support staff work through

use crate::error::Result;
use crate::types::EmailRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ReviewBoard {
    records: Vec<EmailRecord>,
}

impl ReviewBoard {
    #[must_use]
    pub const fn new(records: Vec<EmailRecord>) -> Self {
        Self { records }
    }

    /// Load a board saved with [`ReviewBoard::save`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write all records as a pretty-printed JSON array
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn push(&mut self, record: EmailRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&EmailRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Records for one team, or all records when `team` is `None`
    #[must_use]
    pub fn for_team(&self, team: Option<&str>) -> Vec<&EmailRecord> {
        self.records
            .iter()
            .filter(|r| team.is_none_or(|t| r.support_team() == t))
            .collect()
    }

    #[must_use]
    pub fn unanswered_count(&self, team: Option<&str>) -> usize {
        self.for_team(team)
            .into_iter()
            .filter(|r| !r.is_answered())
            .count()
    }

    /// Most urgent first; equal urgency keeps insertion order
    #[must_use]
    pub fn by_urgency(&self) -> Vec<&EmailRecord> {
        let mut sorted: Vec<&EmailRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.urgency().cmp(&a.urgency()));
        sorted
    }

    /// Returns `false` when no record has this id
    pub fn mark_answered(&mut self, id: Uuid) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.mark_answered();
                debug!(%id, "Marked record answered");
                true
            }
            None => false,
        }
    }
}

impl FromIterator<EmailRecord> for ReviewBoard {
    fn from_iter<I: IntoIterator<Item = EmailRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
