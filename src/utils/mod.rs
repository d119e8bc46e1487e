pub mod pattern;

use pattern::*;

/// Byte range of one line, terminator excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Split `text` into lines, treating every `\r` and every `\n` as one terminator.
/// `\r\n` therefore yields an empty line between the two characters.
/// The last line runs to the end of the text and may be empty.
pub fn line_spans(text: &str) -> Vec<LineSpan> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        if ch == '\r' || ch == '\n' {
            spans.push(LineSpan { start, end: i });
            start = i + 1;
        }
    }
    spans.push(LineSpan { start, end: text.len() });
    spans
}

/// A delimiter line holds nothing but three or more dashes.
pub fn is_delimiter(line: &str) -> bool {
    (of_pred(|c| c == '-'), EofPat)
        .check_pattern(line)
        .is_some_and(|(_, (dashes, ()))| dashes.len() >= 3)
}

/// Strip leading `\n` characters. Nothing else is touched.
pub fn trim_leading_newlines(text: &str) -> &str {
    of_pred(|c| c == '\n')
        .check_pattern(text)
        .map_or(text, |(rest, _)| rest)
}
