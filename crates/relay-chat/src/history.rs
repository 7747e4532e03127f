// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process conversation history for one chatbot run.

use relay_core::{ConversationTurn, Direction};

/// Opening exchange that primes the persona.
pub const SEED_HUMAN: &str = "Hello, who are you?";
pub const SEED_AI: &str = "I am an AI created by OpenAI. How can I help you today?";

/// Ordered turns, oldest first. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// Up to the last `n` turns, oldest first. A shorter history is returned whole.
    pub fn last_n(&self, n: usize) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Texts of the turns sent in `direction`.
    pub fn texts(&self, direction: Direction) -> impl Iterator<Item = &str> {
        self.turns
            .iter()
            .filter(move |t| t.direction == direction)
            .map(|t| t.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(texts: &[&str]) -> ConversationHistory {
        let mut history = ConversationHistory::new();
        for (i, text) in texts.iter().enumerate() {
            let direction = if i % 2 == 0 { Direction::Inbound } else { Direction::Outbound };
            history.push(ConversationTurn::new(direction, *text));
        }
        history
    }

    #[test]
    fn last_n_on_short_history_returns_everything_in_order() {
        let h = history(&["a", "b", "c"]);
        let texts: Vec<_> = h.last_n(5).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn last_n_keeps_the_newest() {
        let h = history(&["1", "2", "3", "4", "5", "6", "7"]);
        let texts: Vec<_> = h.last_n(5).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["3", "4", "5", "6", "7"]);
        assert!(h.last_n(0).is_empty());
    }

    #[test]
    fn texts_filters_by_direction() {
        let h = history(&["q1", "a1", "q2"]);
        assert_eq!(h.texts(Direction::Inbound).collect::<Vec<_>>(), vec!["q1", "q2"]);
        assert_eq!(h.len(), 3);
    }
}
