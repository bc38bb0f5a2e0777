//! Bounded, ordered transcript of conversation turns.

use std::collections::VecDeque;

use gymchat_types::chat::Turn;
use gymchat_types::wire::HistoryEntry;

/// Ordered list of turns capped at a retention bound.
///
/// Insertion order is chronological order. Whenever the bound is exceeded the
/// oldest turns are evicted first.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    turns: VecDeque<Turn>,
    retention: usize,
}

impl Transcript {
    /// Create an empty transcript. A retention of zero is raised to one.
    pub fn new(retention: usize) -> Self {
        Self {
            turns: VecDeque::new(),
            retention: retention.max(1),
        }
    }

    /// Build a transcript from existing turns, keeping only the most recent.
    pub fn from_turns(turns: impl IntoIterator<Item = Turn>, retention: usize) -> Self {
        let mut transcript = Self::new(retention);
        transcript.extend(turns);
        transcript
    }

    pub fn retention(&self) -> usize {
        self.retention
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.back()
    }

    /// Append a turn, evicting from the front past the bound.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        self.evict();
    }

    pub fn extend(&mut self, turns: impl IntoIterator<Item = Turn>) {
        self.turns.extend(turns);
        self.evict();
    }

    /// Replace the whole transcript, e.g. with server-supplied history.
    pub fn replace(&mut self, turns: impl IntoIterator<Item = Turn>) {
        self.turns.clear();
        self.extend(turns);
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Role/content pairs to send to the backend. Local error notices are
    /// never transmitted.
    pub fn wire_history(&self) -> Vec<HistoryEntry> {
        self.turns
            .iter()
            .filter(|turn| !turn.is_error)
            .map(HistoryEntry::from)
            .collect()
    }

    /// Turns that belong in durable storage (everything but error notices).
    pub fn persistable(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(|turn| !turn.is_error)
    }

    pub fn to_vec(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }

    fn evict(&mut self) {
        while self.turns.len() > self.retention {
            self.turns.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymchat_types::chat::Role;

    #[test]
    fn test_push_evicts_oldest_first() {
        let mut transcript = Transcript::new(3);
        for i in 0..5 {
            transcript.push(Turn::user(format!("m{i}")));
        }
        let contents: Vec<_> = transcript.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["m2", "m3", "m4"]);
    }

    #[test]
    fn test_from_turns_keeps_most_recent() {
        let turns = (0..10).map(|i| Turn::assistant(i.to_string()));
        let transcript = Transcript::from_turns(turns, 4);
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript.iter().next().unwrap().content, "6");
        assert_eq!(transcript.last().unwrap().content, "9");
    }

    #[test]
    fn test_iter_walks_backwards_from_newest() {
        let turns = vec![Turn::user("q1"), Turn::assistant("a1"), Turn::user("q2")];
        let transcript = Transcript::from_turns(turns, 10);
        let newest_answer = transcript.iter().rev().find(|t| t.role == Role::Assistant);
        assert_eq!(newest_answer.unwrap().content, "a1");
    }

    #[test]
    fn test_zero_retention_is_raised_to_one() {
        let mut transcript = Transcript::new(0);
        transcript.push(Turn::user("a"));
        transcript.push(Turn::user("b"));
        assert_eq!(transcript.retention(), 1);
        assert_eq!(transcript.to_vec(), vec![Turn::user("b")]);
    }

    #[test]
    fn test_replace_truncates() {
        let mut transcript = Transcript::new(2);
        transcript.push(Turn::user("old"));
        transcript.replace(vec![Turn::user("a"), Turn::assistant("b"), Turn::user("c")]);
        assert_eq!(transcript.to_vec(), vec![Turn::assistant("b"), Turn::user("c")]);
    }

    #[test]
    fn test_wire_history_skips_error_notices() {
        let mut transcript = Transcript::new(10);
        transcript.push(Turn::user("hello"));
        transcript.push(Turn::error_notice("Error: Could not connect"));
        transcript.push(Turn::user("again").stamped());

        let history = transcript.wire_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[1].content, "again");
        assert_eq!(transcript.persistable().count(), 2);
    }
}
