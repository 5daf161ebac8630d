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

//! `nom` parser for constraint expressions.
//!
//! Productions are tried in priority order:
//! - reserved keywords over the whole input (`all`, `none`, `any`, `empty`,
//!   `desc`)
//! - `min`/`max` bounds with an optional `chars` suffix
//! - `<limit> to <limit>` ranges whose ends share a unit family
//! - a single limit
//!
//! Each may carry a bracketed entry constraint (`16[2]`) and members may be
//! comma-separated. Limits support integers, hex, percent, temperature,
//! superscript powers, keyword literals, references, tags, strings, status
//! codes, identifiers, `+ - * /` arithmetic and logical chains.
//!
//! Anything else becomes [`Constraint::Generic`].

mod constraint;
mod limit;
mod utils;

use crate::ast::{Constraint, Limit, Measure};
use crate::diagnostics::ParseError;
use crate::types::DataType;
use nom::{
    IResult,
    combinator::all_consuming,
    error::{VerboseError, VerboseErrorKind},
    sequence::delimited,
};
use nom_locate::LocatedSpan;
use tracing::debug;

use self::constraint::constraint_set;
use self::utils::ws0;

/// Parser input span carrying offsets, column info and the current bracket
/// nesting depth.
pub(crate) type Span<'a> = LocatedSpan<&'a str, usize>;

type PResult<'a, O> = IResult<Span<'a>, O, VerboseError<Span<'a>>>;

/// Parses constraint text without data-type information.
///
/// Never fails: unrecognized text becomes [`Constraint::Generic`].
pub fn parse(text: &str) -> Constraint {
    parse_typed(text, None)
}

/// Parses constraint text for a field of `data_type`.
///
/// The data type decides what bare numbers and `min`/`max` bounds restrict:
/// list bounds count entries, `string`/`octstr` bounds and bare non-negative
/// numbers restrict the length, everything else the value.
pub fn parse_typed(text: &str, data_type: Option<&DataType>) -> Constraint {
    match try_parse(text, data_type) {
        Ok(constraint) => constraint,
        Err(err) => {
            debug!(text, error = %err, "constraint kept as generic text");
            Constraint::Generic(text.to_string())
        }
    }
}

/// Parses constraint text, reporting why the grammar rejected it.
pub fn try_parse(text: &str, data_type: Option<&DataType>) -> Result<Constraint, ParseError> {
    let trimmed = text.trim();
    if let Some(constraint) = reserved_keyword(trimmed) {
        return Ok(constraint);
    }

    let input = Span::new_extra(text, 0);
    // `all_consuming` ensures trailing garbage is treated as syntax error.
    let (_, constraint) = match all_consuming(delimited(ws0, constraint_set, ws0))(input) {
        Ok(v) => v,
        Err(err) => return Err(parse_error_to_diagnostic(err, text)),
    };
    Ok(apply_data_type(constraint, data_type, true))
}

fn reserved_keyword(text: &str) -> Option<Constraint> {
    match text.to_ascii_lowercase().as_str() {
        "all" | "none" | "any" | "empty" => Some(Constraint::All {
            value: text.to_string(),
        }),
        "desc" => Some(Constraint::Described),
        _ => None,
    }
}

/// Resolves length/count/value semantics against the field's data type.
///
/// `whole` marks a constraint that is the entire input (or an entire
/// bracketed entry), the only place a bare number means a maximum length.
fn apply_data_type(constraint: Constraint, data_type: Option<&DataType>, whole: bool) -> Constraint {
    let measure = match data_type {
        Some(dt) if dt.is_array => Measure::Count,
        Some(dt) if dt.is_string_like() => Measure::Length,
        _ => Measure::Value,
    };
    match constraint {
        Constraint::Exact(Limit::Int(value)) if whole && value >= 0 && measure == Measure::Length => {
            Constraint::Max {
                limit: Limit::Int(value),
                measure,
            }
        }
        Constraint::Min { limit, .. } => Constraint::Min { limit, measure },
        Constraint::Max { limit, .. } => Constraint::Max { limit, measure },
        Constraint::List { outer, entry } => Constraint::List {
            outer: Box::new(apply_data_type(*outer, data_type, false)),
            entry: Box::new(apply_data_type(
                *entry,
                data_type.and_then(DataType::entry_type),
                true,
            )),
        },
        Constraint::Set(members) => Constraint::Set(
            members
                .into_iter()
                .map(|member| apply_data_type(member, data_type, false))
                .collect(),
        ),
        other => other,
    }
}

/// Converts a `nom` verbose error to a positioned diagnostic.
fn parse_error_to_diagnostic(err: nom::Err<VerboseError<Span<'_>>>, source: &str) -> ParseError {
    match err {
        nom::Err::Incomplete(_) => ParseError::message_only("Incomplete input"),
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            // Use the deepest recorded parser error as the diagnostic anchor.
            if let Some((span, kind)) = e.errors.first() {
                let detail = match kind {
                    VerboseErrorKind::Context(ctx) => format!("Syntax error: expected {ctx}"),
                    VerboseErrorKind::Char(c) => format!("Syntax error: expected '{c}'"),
                    VerboseErrorKind::Nom(kind) => format!("Syntax error near {kind:?}"),
                };
                ParseError::at_column(detail, source, span.get_utf8_column())
            } else {
                ParseError::message_only("Syntax error")
            }
        }
    }
}
