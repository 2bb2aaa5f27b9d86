//! Watch set tracker
//!
//! Holds the ids of the machines the user is waiting for and compares
//! them against each poll result. A tracked machine that is no longer in
//! use is removed from the set and reported as a [`FinishedEvent`]; the
//! set only ever shrinks. An id that never shows up in any response stays
//! in the set indefinitely and simply never completes.

use std::collections::BTreeSet;

use tracing::info;

use crate::{MachineKind, MachineRecord};

/// A tracked machine that has gone idle since the user started watching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedEvent {
    pub kind: MachineKind,
    pub id: String,
}

/// The machine ids still awaited, with set semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSet {
    ids: BTreeSet<String>,
}

impl WatchSet {
    /// Parse a comma-separated id list from the command line.
    ///
    /// Empty segments are skipped and duplicates collapse.
    pub fn from_arg(arg: &str) -> Self {
        let ids = arg
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect();
        Self { ids }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Compare one poll result against the tracked ids.
    ///
    /// Finished machines are removed from the set and returned in record
    /// order. Tracked machines still in use only produce a log line;
    /// untracked records are ignored entirely.
    pub fn observe(&mut self, records: &[MachineRecord]) -> Vec<FinishedEvent> {
        let mut finished = Vec::new();

        for machine in records {
            if !self.ids.contains(&machine.id) {
                continue;
            }

            if machine.in_use {
                info!(
                    "{} {} is still working. {}",
                    machine.kind, machine.id, machine.status_text
                );
                continue;
            }

            self.ids.remove(&machine.id);
            finished.push(FinishedEvent {
                kind: machine.kind,
                id: machine.id.clone(),
            });
        }

        finished
    }
}
