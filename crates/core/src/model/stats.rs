use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

//
// ─── STATS ENTRY ───────────────────────────────────────────────────────────────
//

/// How a learner responded to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsKind {
    Right,
    Wrong,
    Skip,
}

impl StatsKind {
    /// Grades a typed answer. Only an exact match counts as right.
    #[must_use]
    pub fn grade(input: &str, expected: &str) -> Self {
        if input == expected {
            Self::Right
        } else {
            Self::Wrong
        }
    }
}

/// Right/wrong/skip counters for one question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub right: u32,
    pub wrong: u32,
    pub skip: u32,
}

impl Stats {
    /// Number of times the question was seen.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.right
            .saturating_add(self.wrong)
            .saturating_add(self.skip)
    }

    /// Copy with exactly one counter raised by one.
    #[must_use]
    pub fn incremented(self, kind: StatsKind) -> Self {
        match kind {
            StatsKind::Right => Self {
                right: self.right.saturating_add(1),
                ..self
            },
            StatsKind::Wrong => Self {
                wrong: self.wrong.saturating_add(1),
                ..self
            },
            StatsKind::Skip => Self {
                skip: self.skip.saturating_add(1),
                ..self
            },
        }
    }
}

//
// ─── STATS STORE ───────────────────────────────────────────────────────────────
//

/// Aggregate counters across every question that has stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsTotals {
    pub questions: usize,
    pub right: u64,
    pub wrong: u64,
    pub skip: u64,
}

/// Stats keyed by question text. Missing keys mean "never seen".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsStore(BTreeMap<String, Stats>);

impl StatsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, question: &str) -> Option<&Stats> {
        self.0.get(question)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn totals(&self) -> StatsTotals {
        self.0.values().fold(
            StatsTotals {
                questions: self.0.len(),
                ..StatsTotals::default()
            },
            |acc, stats| StatsTotals {
                right: acc.right + u64::from(stats.right),
                wrong: acc.wrong + u64::from(stats.wrong),
                skip: acc.skip + u64::from(stats.skip),
                ..acc
            },
        )
    }

    /// Copy with one entry replaced or added.
    #[must_use]
    pub(crate) fn with_entry(&self, question: &str, stats: Stats) -> Self {
        let mut entries = self.0.clone();
        entries.insert(question.to_owned(), stats);
        Self(entries)
    }
}

impl FromIterator<(String, Stats)> for StatsStore {
    fn from_iter<I: IntoIterator<Item = (String, Stats)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
