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

//! Parser trivia and lexical helpers.

use nom::Parser;
use nom::{
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, digit1, multispace0, satisfy},
    combinator::{cut, fail, map, not, opt, recognize, value, verify},
    error::context,
    sequence::{pair, terminated, tuple},
};

use super::{PResult, Span};

/// Words that never parse as identifiers.
const RESERVED: &[&str] = &[
    "to",
    "min",
    "max",
    "and",
    "or",
    "not",
    "null",
    "empty",
    "true",
    "false",
    "chars",
    "unspecified",
];

/// Deepest bracket nesting (`(`, `{`, `[`) the grammar accepts.
pub(super) const MAX_NESTING: usize = 64;

/// Runs `parser` one bracket level deeper.
///
/// Past [`MAX_NESTING`] the whole parse fails, so deeply nested text ends up
/// as generic text instead of exhausting the stack.
pub(super) fn nested<'a, O, P>(mut parser: P) -> impl FnMut(Span<'a>) -> PResult<'a, O>
where
    P: FnMut(Span<'a>) -> PResult<'a, O>,
{
    move |mut input: Span<'a>| {
        let depth = input.extra;
        if depth >= MAX_NESTING {
            return cut(context("nesting depth", fail))(input);
        }
        input.extra = depth + 1;
        let (mut rest, output) = parser(input)?;
        rest.extra = depth;
        Ok((rest, output))
    }
}

/// Parses a simple double-quoted string literal.
///
/// There are no escapes: everything up to the next quote is the value.
pub(super) fn string_literal(input: Span<'_>) -> PResult<'_, String> {
    map(
        nom::sequence::delimited(
            char('"'),
            take_while(|c| c != '"' && c != '\n' && c != '\r'),
            context("closing quote", char('"')),
        ),
        |s: Span<'_>| s.fragment().to_string(),
    )
    .parse(input)
}

/// Parses identifiers (`[A-Za-z_][A-Za-z0-9_]*`) that are not reserved.
pub(super) fn identifier(input: Span<'_>) -> PResult<'_, String> {
    verify(raw_identifier, |name: &str| !is_reserved(name)).parse(input)
}

/// Parses an identifier-shaped word without the reserved-word check.
pub(super) fn raw_identifier(input: Span<'_>) -> PResult<'_, String> {
    map(
        recognize(pair(
            take_while1(is_ident_start),
            take_while(is_ident_continue),
        )),
        |s: Span<'_>| s.fragment().to_string(),
    )
    .parse(input)
}

fn is_reserved(name: &str) -> bool {
    RESERVED.iter().any(|word| word.eq_ignore_ascii_case(name))
}

/// Returns whether a char can start an identifier.
fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Returns whether a char can continue an identifier.
pub(super) fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Matches `word` case-insensitively as a whole word.
pub(super) fn keyword<'a>(word: &'static str) -> impl FnMut(Span<'a>) -> PResult<'a, Span<'a>> {
    move |input| terminated(tag_no_case(word), not(satisfy(is_ident_continue)))(input)
}

/// Recognizes `-?[0-9]+`.
pub(super) fn integer_text(input: Span<'_>) -> PResult<'_, Span<'_>> {
    recognize(pair(opt(char('-')), digit1)).parse(input)
}

/// Recognizes `-?[0-9]+(\.[0-9]+)?`.
pub(super) fn decimal_text(input: Span<'_>) -> PResult<'_, Span<'_>> {
    recognize(tuple((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
    )))
    .parse(input)
}

/// Skips zero-or-more whitespace.
pub(super) fn ws0(input: Span<'_>) -> PResult<'_, ()> {
    value((), multispace0).parse(input)
}

/// Wraps a parser with leading/trailing whitespace skipping.
pub(super) fn ws<'a, O, P>(mut parser: P) -> impl FnMut(Span<'a>) -> PResult<'a, O>
where
    P: FnMut(Span<'a>) -> PResult<'a, O>,
{
    move |input| nom::sequence::delimited(ws0, &mut parser, ws0)(input)
}

/// Parses a specific character token with surrounding whitespace.
pub(super) fn ws_char<'a>(c: char) -> impl FnMut(Span<'a>) -> PResult<'a, char> {
    ws(char(c))
}
