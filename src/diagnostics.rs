/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Grammar diagnostics with a source snippet and caret pointer.

use thiserror::Error;

/// Why the grammar rejected a constraint string.
///
/// Only [`crate::try_parse`] surfaces this; the total parse functions turn
/// it into a generic constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", location(.column, .snippet, .pointer))]
pub struct ParseError {
    /// Human-readable error message.
    pub message: String,
    /// 1-based column (`0` when unavailable).
    pub column: usize,
    /// Input text the error refers to.
    pub snippet: String,
    /// Caret pointer aligned to `snippet`.
    pub pointer: String,
}

impl ParseError {
    /// Creates an error with no location information.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            column: 0,
            snippet: String::new(),
            pointer: String::new(),
        }
    }

    /// Creates an error pointing at `column` of the first line of `source`.
    pub fn at_column(message: impl Into<String>, source: &str, column: usize) -> Self {
        let snippet = source.lines().next().unwrap_or("").to_string();
        // Clamp so input ending early still gets a visible caret.
        let line_len = snippet.chars().count();
        let pointer_column = column.saturating_sub(1).min(line_len);
        let pointer = format!("{}^", " ".repeat(pointer_column));
        Self {
            message: message.into(),
            column,
            snippet,
            pointer,
        }
    }
}

fn location(column: &usize, snippet: &str, pointer: &str) -> String {
    if *column == 0 {
        return String::new();
    }
    format!(" at column {column}\n  | {snippet}\n  | {pointer}")
}
