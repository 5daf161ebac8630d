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

//! Constraint-level productions.

use crate::ast::{Constraint, Limit, Measure};
use nom::Parser;
use nom::{
    branch::alt,
    combinator::{map, opt, value, verify},
    error::context,
    multi::separated_list1,
    sequence::{delimited, preceded, tuple},
};

use super::limit::limit;
use super::utils::{keyword, nested, ws, ws_char};
use super::{PResult, Span};

#[derive(Debug, Clone, Copy)]
enum BoundKeyword {
    Min,
    Max,
}

/// Parses comma-separated alternatives; a single member stays unwrapped.
pub(super) fn constraint_set(input: Span<'_>) -> PResult<'_, Constraint> {
    map(
        separated_list1(ws_char(','), constraint),
        |mut members: Vec<Constraint>| {
            if members.len() == 1 {
                members.remove(0)
            } else {
                Constraint::Set(members)
            }
        },
    )
    .parse(input)
}

/// Parses one constraint with an optional `[entry]` suffix.
fn constraint(input: Span<'_>) -> PResult<'_, Constraint> {
    let (input, outer) = alt((bound_constraint, range_constraint, exact_constraint)).parse(input)?;
    let (input, entry) = opt(delimited(
        ws_char('['),
        nested(constraint_set),
        context("']'", ws_char(']')),
    ))
    .parse(input)?;
    let constraint = match entry {
        Some(entry) => Constraint::List {
            outer: Box::new(outer),
            entry: Box::new(entry),
        },
        None => outer,
    };
    Ok((input, constraint))
}

/// Parses `min <limit>` / `max <limit>` with an optional `chars` suffix.
///
/// The measure is refined from the data type once the whole input parsed.
fn bound_constraint(input: Span<'_>) -> PResult<'_, Constraint> {
    let (input, kind) = ws(alt((
        value(BoundKeyword::Min, keyword("min")),
        value(BoundKeyword::Max, keyword("max")),
    )))
    .parse(input)?;
    let (input, limit) = context("bound value", limit).parse(input)?;
    let (input, _) = opt(ws(keyword("chars"))).parse(input)?;
    let measure = Measure::Value;
    let constraint = match kind {
        BoundKeyword::Min => Constraint::Min { limit, measure },
        BoundKeyword::Max => Constraint::Max { limit, measure },
    };
    Ok((input, constraint))
}

/// Parses `<limit> to <limit>` where both ends share a unit family.
fn range_constraint(input: Span<'_>) -> PResult<'_, Constraint> {
    map(
        context(
            "range",
            verify(
                tuple((limit, preceded(ws(keyword("to")), limit))),
                |(from, to): &(Limit, Limit)| from.family() == to.family(),
            ),
        ),
        |(min, max)| Constraint::Range { min, max },
    )
    .parse(input)
}

fn exact_constraint(input: Span<'_>) -> PResult<'_, Constraint> {
    map(limit, Constraint::Exact).parse(input)
}
