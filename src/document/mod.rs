//! Block documents.
//!
//! A document is a run of blocks shaped like
//!
//! ```text
//! ---
//! role: user
//! ---
//! free text content
//! ```
//!
//! The header between the two delimiter lines is YAML. The content runs up to
//! the next delimiter line, or to the end of the text for the last block.

pub mod header;

use serde_json::Value;

use crate::utils::{is_delimiter, line_spans};
pub use header::{parse_header, Header};

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub header: Header,
    /// Captured verbatim, unless the header carries a string `content` field.
    /// Captured text usually starts with the line break that follows the
    /// closing delimiter.
    pub content: String,
}

/// Blocks in order of appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn into_first(self) -> Option<Block> {
        self.blocks.into_iter().next()
    }

    /// Append `"\n" + appendix` to every user-side block (indices 0, 2, 4, ...).
    /// The line break is added even when `appendix` is empty.
    pub fn with_appendix(mut self, appendix: &str) -> Self {
        for block in self.blocks.iter_mut().step_by(2) {
            block.content.push('\n');
            block.content.push_str(appendix);
        }
        self
    }
}

/// Split `text` into blocks.
///
/// Text outside any block is ignored, as is an opening delimiter that is never
/// closed. Content of the last block has its trailing whitespace removed; all
/// other content is kept as is.
pub fn parse(text: &str) -> Document {
    let lines = line_spans(text);
    let next_delimiter =
        |from: usize| (from..lines.len()).find(|&i| is_delimiter(lines[i].slice(text)));

    let mut blocks = Vec::new();
    let mut open = next_delimiter(0);
    while let Some(i) = open {
        let Some(close) = next_delimiter(i + 1) else {
            break;
        };
        // No header line between the two: retry from the second delimiter.
        if close == i + 1 {
            open = Some(close);
            continue;
        }
        let header = &text[lines[i + 1].start..lines[close - 1].end];
        open = next_delimiter(close + 1);
        let content = match open {
            // Drop the single terminator in front of the next delimiter line.
            Some(next) => &text[lines[close].end..lines[next].start - 1],
            None => text[lines[close].end..].trim_end(),
        };
        let header = parse_header(header);
        // A string `content` field in the header wins over the captured text.
        let content = match header.get("content") {
            Some(Value::String(value)) => value.clone(),
            _ => content.to_string(),
        };
        blocks.push(Block { header, content });
    }
    Document { blocks }
}
