//! Turns completion blocks into fine-tuning records.

use serde::Serialize;

use crate::document::{Block, Document};
use crate::utils::trim_leading_newlines;

/// A user block and the assistant block answering it, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn<'a> {
    pub user: &'a Block,
    pub assistant: Option<&'a Block>,
}

/// Pair blocks two at a time. An odd block count leaves the last turn
/// without an assistant.
pub fn group_turns(document: &Document) -> Vec<Turn<'_>> {
    document
        .blocks()
        .chunks(2)
        .map(|pair| Turn { user: &pair[0], assistant: pair.get(1) })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationRecord {
    pub messages: Vec<String>,
}

/// One record per turn: `[system, user, assistant]`, or `[system, user]`
/// when the turn has no assistant.
pub fn shape(system_prompt: &str, turns: &[Turn]) -> Vec<ConversationRecord> {
    let clean = |text: &str| trim_leading_newlines(text).to_string();
    turns
        .iter()
        .map(|turn| {
            let mut messages = vec![clean(system_prompt), clean(&turn.user.content)];
            if let Some(assistant) = turn.assistant {
                messages.push(clean(&assistant.content));
            }
            ConversationRecord { messages }
        })
        .collect()
}

/// One compact JSON object per line, no trailing newline.
pub fn to_jsonl(records: &[ConversationRecord]) -> serde_json::Result<String> {
    let lines = records
        .iter()
        .map(serde_json::to_string)
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
