use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifier of one instrument item (1..=28 for the CTQ-SF).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A validated response on the five-point scale, from "Never True" (1) to
/// "Very Often True" (5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Likert(u8);

impl Likert {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    /// Returns `None` for anything outside `[1, 5]`.
    pub fn new(raw: i64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            Some(Self(raw as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u32 {
        u32::from(self.0)
    }

    /// The mirrored response: 1 <-> 5, 2 <-> 4, 3 stays.
    pub fn reversed(self) -> Self {
        Self(6 - self.0)
    }

    /// True for "Very Often True".
    pub fn is_max(self) -> bool {
        i64::from(self.0) == Self::MAX
    }
}

impl TryFrom<i64> for Likert {
    type Error = CoreError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(CoreError::InvalidResponse(raw))
    }
}

impl From<Likert> for i64 {
    fn from(value: Likert) -> Self {
        i64::from(value.0)
    }
}

/// Raw responses keyed by question, as collected by the quiz runner.
///
/// Values are stored unvalidated. Range checking happens at scoring time so
/// that a corrupt entry degrades only the scale owning it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, i64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the response for a question, returning the
    /// previous raw value if there was one.
    pub fn record(&mut self, question: QuestionId, raw: i64) -> Option<i64> {
        self.0.insert(question, raw)
    }

    pub fn raw(&self, question: QuestionId) -> Option<i64> {
        self.0.get(&question).copied()
    }

    /// The validated response for a question; `None` when missing or out of range.
    pub fn response(&self, question: QuestionId) -> Option<Likert> {
        self.raw(question).and_then(Likert::new)
    }

    pub fn contains(&self, question: QuestionId) -> bool {
        self.0.contains_key(&question)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, i64)> + '_ {
        self.0.iter().map(|(q, raw)| (*q, *raw))
    }
}

impl FromIterator<(QuestionId, i64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AnswerSet {
    type Item = (QuestionId, i64);
    type IntoIter = btree_map::IntoIter<QuestionId, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
