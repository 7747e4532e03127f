// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion prompt assembly.

use std::fmt::Write;

use relay_core::{ConversationTurn, Direction};

/// Builds the completion prompt.
///
/// Layout: preamble and a blank line, an optional block of relevant earlier
/// human messages, the recent turns, then the new message and an `AI:` cue
/// with no trailing space.
pub fn build_prompt(
    preamble: &str,
    relevant: &[String],
    recent: &[ConversationTurn],
    message: &str,
) -> String {
    let mut prompt = String::new();
    prompt.push_str(preamble);
    prompt.push_str("\n\n");

    if !relevant.is_empty() {
        prompt.push_str("Relevant previous messages from Human:\n");
        for content in relevant {
            let _ = writeln!(prompt, "- {content}");
        }
        prompt.push('\n');
    }

    prompt.push_str("The conversation goes as follows:\n");
    for turn in recent {
        let speaker = match turn.direction {
            Direction::Inbound => "Human",
            Direction::Outbound => "AI",
        };
        let _ = writeln!(prompt, "{speaker}: {}", turn.text);
    }

    let _ = write!(prompt, "Human: {message}\nAI:");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREAMBLE: &str = "Be nice.";

    #[test]
    fn minimal_prompt() {
        assert_eq!(
            build_prompt(PREAMBLE, &[], &[], "hi"),
            "Be nice.\n\nThe conversation goes as follows:\nHuman: hi\nAI:"
        );
    }

    #[test]
    fn full_prompt_layout() {
        let recent = vec![
            ConversationTurn::new(Direction::Inbound, "Hello, who are you?"),
            ConversationTurn::new(Direction::Outbound, "An AI."),
        ];
        let relevant = vec!["I like pizza".to_string(), "I live in Oslo".to_string()];
        let prompt = build_prompt(PREAMBLE, &relevant, &recent, "What do I like?");
        assert_eq!(
            prompt,
            "Be nice.\n\n\
             Relevant previous messages from Human:\n\
             - I like pizza\n\
             - I live in Oslo\n\
             \n\
             The conversation goes as follows:\n\
             Human: Hello, who are you?\n\
             AI: An AI.\n\
             Human: What do I like?\n\
             AI:"
        );
        assert!(!prompt.ends_with(' '));
    }
}
