//! Session history of answered questions.

use alloc::{string::String, vec::Vec};

/// One answered question. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QaRecord {
    question: String,
    answer: String,
}

impl QaRecord {
    /// Creates a record from a question and its answer.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// The question as the user asked it.
    #[must_use]
    pub const fn question(&self) -> &str {
        self.question.as_str()
    }

    /// The generated answer.
    #[must_use]
    pub const fn answer(&self) -> &str {
        self.answer.as_str()
    }
}

/// Append-only list of [`QaRecord`]s.
///
/// Entries are stored in the order they were asked; [`History::all`] yields them
/// most-recent-first for display. Nothing is ever removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<QaRecord>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a question/answer pair and returns the stored record.
    pub fn append(&mut self, question: impl Into<String>, answer: impl Into<String>) -> &QaRecord {
        self.records.push(QaRecord::new(question, answer));
        &self.records[self.records.len() - 1]
    }

    /// Records in reverse-chronological order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &QaRecord> + DoubleEndedIterator {
        self.records.iter().rev()
    }

    /// The most recently appended record.
    #[must_use]
    pub fn latest(&self) -> Option<&QaRecord> {
        self.records.last()
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no question has been answered yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, vec::Vec};

    #[test]
    fn starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.all().count(), 0);
        assert!(history.latest().is_none());
    }

    #[test]
    fn lists_most_recent_first() {
        let mut history = History::new();
        for i in 1..=3 {
            history.append(format!("q{i}"), format!("a{i}"));
        }

        let questions: Vec<_> = history.all().map(QaRecord::question).collect();
        assert_eq!(questions, ["q3", "q2", "q1"]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().map(QaRecord::answer), Some("a3"));
    }

    #[test]
    fn append_never_touches_earlier_entries() {
        let mut history = History::new();
        history.append("What is federalism?", "Division of power.");
        let before = history.clone();

        let stored = history.append("What is a constitution?", "The supreme law.");
        assert_eq!(stored.question(), "What is a constitution?");

        let oldest = history.all().next_back().unwrap();
        assert_eq!(oldest, before.latest().unwrap());
    }

    #[test]
    fn keeps_duplicate_questions() {
        let mut history = History::new();
        history.append("same", "first");
        history.append("same", "second");

        let answers: Vec<_> = history.all().map(QaRecord::answer).collect();
        assert_eq!(answers, ["second", "first"]);
    }
}
