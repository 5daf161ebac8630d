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

//! Limit (bound value) parser.

use crate::ast::{Limit, LogicalOp, MathOp};
use crate::status::status_code;
use nom::Parser;
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_until},
    character::complete::{char, hex_digit1, satisfy},
    combinator::{map, map_res, not, opt, value, verify},
    error::context,
    sequence::{delimited, pair, preceded, terminated, tuple},
};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::utils::{
    decimal_text, identifier, integer_text, is_ident_continue, keyword, nested, raw_identifier,
    string_literal, ws, ws0, ws_char,
};
use super::{PResult, Span};

/// Top-level limit parser.
pub(super) fn limit(input: Span<'_>) -> PResult<'_, Limit> {
    parse_logical(input)
}

/// Parses an optionally negated logical chain.
///
/// Runs of the same operator collect into one n-ary node; a different
/// operator nests everything parsed so far as its left operand.
fn parse_logical(input: Span<'_>) -> PResult<'_, Limit> {
    let (input, negated) = opt(alt((ws(keyword("not")), ws(tag("!"))))).parse(input)?;
    let (mut input, mut left) = parse_add_sub(input)?;
    let mut current: Option<LogicalOp> = None;
    let mut right = Vec::new();
    loop {
        let (next, op) = opt(logical_op).parse(input)?;
        let Some(op) = op else {
            break;
        };
        let (next, operand) = parse_add_sub(next)?;
        if let Some(existing) = current.filter(|existing| *existing != op) {
            left = Limit::Logical {
                op: existing,
                left: Box::new(left),
                right: std::mem::take(&mut right),
                not: false,
            };
        }
        current = Some(op);
        right.push(operand);
        input = next;
    }

    let negated = negated.is_some();
    let limit = match current {
        Some(op) => Limit::Logical {
            op,
            left: Box::new(left),
            right,
            not: negated,
        },
        None if negated => Limit::Logical {
            op: LogicalOp::Or,
            left: Box::new(left),
            right,
            not: true,
        },
        None => left,
    };
    Ok((input, limit))
}

fn logical_op(input: Span<'_>) -> PResult<'_, LogicalOp> {
    alt((
        value(LogicalOp::Or, ws_char('|')),
        value(LogicalOp::And, ws_char('&')),
        value(LogicalOp::Xor, ws_char('^')),
        value(LogicalOp::WordOr, ws(keyword("or"))),
        value(LogicalOp::WordAnd, ws(keyword("and"))),
    ))
    .parse(input)
}

/// Parses left-associative `+`/`-`.
fn parse_add_sub(input: Span<'_>) -> PResult<'_, Limit> {
    let (mut input, mut left) = parse_mul_div(input)?;
    loop {
        let (next, op) = opt(alt((ws_char('+'), ws_char('-')))).parse(input)?;
        let Some(op_char) = op else {
            break;
        };

        // `a-b-c` becomes `(a-b)-c`.
        let (next, right) = parse_mul_div(next)?;
        let op = if op_char == '+' {
            MathOp::Add
        } else {
            MathOp::Sub
        };
        left = Limit::Math {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };
        input = next;
    }
    Ok((input, left))
}

/// Parses left-associative `*`/`/`.
fn parse_mul_div(input: Span<'_>) -> PResult<'_, Limit> {
    let (mut input, mut left) = parse_postfix(input)?;
    loop {
        let (next, op) = opt(alt((ws_char('*'), ws_char('/')))).parse(input)?;
        let Some(op_char) = op else {
            break;
        };

        let (next, right) = parse_postfix(next)?;
        let op = if op_char == '*' {
            MathOp::Mul
        } else {
            MathOp::Div
        };
        left = Limit::Math {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };
        input = next;
    }
    Ok((input, left))
}

/// Parses an atom with an optional `{codepoints}` suffix.
fn parse_postfix(input: Span<'_>) -> PResult<'_, Limit> {
    let (input, base) = parse_primary(input)?;
    let (input, codepoints) = opt(delimited(
        ws_char('{'),
        nested(limit),
        context("'}'", ws_char('}')),
    ))
    .parse(input)?;
    let limit = match codepoints {
        Some(codepoints) => Limit::Character {
            bytes: Box::new(base),
            codepoints: Box::new(codepoints),
        },
        None => base,
    };
    Ok((input, limit))
}

/// Parses limit atoms.
///
/// Unit-suffixed and exponent forms are tried before plain integers so
/// that `2.5°C`, `50%` and `2^62^` are not split after their first digits.
fn parse_primary(input: Span<'_>) -> PResult<'_, Limit> {
    alt((
        parse_parenthesized,
        parse_temperature,
        parse_percent,
        parse_exp,
        parse_hex,
        parse_int,
        parse_keyword_literal,
        parse_reference,
        parse_tag,
        parse_string,
        parse_name,
    ))
    .parse(input)
}

fn parse_parenthesized(input: Span<'_>) -> PResult<'_, Limit> {
    delimited(ws_char('('), nested(limit), context("')'", ws_char(')'))).parse(input)
}

fn parse_temperature(input: Span<'_>) -> PResult<'_, Limit> {
    ws(map_res(
        terminated(decimal_text, preceded(ws0, tag("°C"))),
        |s: Span<'_>| Decimal::from_str(s.fragment()).map(Limit::Temperature),
    ))
    .parse(input)
}

fn parse_percent(input: Span<'_>) -> PResult<'_, Limit> {
    ws(map_res(
        terminated(decimal_text, preceded(ws0, char('%'))),
        |s: Span<'_>| {
            Decimal::from_str(s.fragment()).map(|value| Limit::Percent {
                value,
                hundredths: s.fragment().contains('.'),
            })
        },
    ))
    .parse(input)
}

/// Parses superscript powers (`2^62^`, `-2^15^`).
fn parse_exp(input: Span<'_>) -> PResult<'_, Limit> {
    ws(map_res(
        tuple((integer_text, char('^'), integer_text, char('^'))),
        |(value, _, exponent, _): (Span<'_>, char, Span<'_>, char)| {
            Ok::<_, std::num::ParseIntError>(Limit::Exp {
                value: value.fragment().parse()?,
                exponent: exponent.fragment().parse()?,
            })
        },
    ))
    .parse(input)
}

fn parse_hex(input: Span<'_>) -> PResult<'_, Limit> {
    ws(map_res(
        preceded(tag_no_case("0x"), hex_digit1),
        |digits: Span<'_>| u64::from_str_radix(digits.fragment(), 16).map(Limit::Hex),
    ))
    .parse(input)
}

fn parse_int(input: Span<'_>) -> PResult<'_, Limit> {
    ws(map_res(integer_text, |s: Span<'_>| {
        s.fragment().parse::<i64>().map(Limit::Int)
    }))
    .parse(input)
}

fn parse_keyword_literal(input: Span<'_>) -> PResult<'_, Limit> {
    ws(alt((
        value(Limit::Null, keyword("null")),
        value(Limit::Empty, keyword("empty")),
        value(Limit::Boolean(true), keyword("true")),
        value(Limit::Boolean(false), keyword("false")),
        value(Limit::Unspecified, keyword("unspecified")),
        map(
            terminated(tag("MS"), not(satisfy(is_ident_continue))),
            |s: Span<'_>| Limit::Manufacturer(s.fragment().to_string()),
        ),
    )))
    .parse(input)
}

/// Parses `<<name>>` and `<<name, label>>` cross-references.
fn parse_reference(input: Span<'_>) -> PResult<'_, Limit> {
    ws(map(
        verify(
            delimited(tag("<<"), take_until(">>"), tag(">>")),
            |inner: &Span<'_>| !inner.fragment().trim().is_empty(),
        ),
        |inner: Span<'_>| {
            let text = inner.fragment();
            match text.split_once(',') {
                Some((name, label)) => Limit::Reference {
                    name: name.trim().to_string(),
                    label: Some(label.trim().to_string()).filter(|label| !label.is_empty()),
                },
                None => Limit::Reference {
                    name: text.trim().to_string(),
                    label: None,
                },
            }
        },
    ))
    .parse(input)
}

fn parse_tag(input: Span<'_>) -> PResult<'_, Limit> {
    ws(map(preceded(char('#'), raw_identifier), Limit::Tag)).parse(input)
}

fn parse_string(input: Span<'_>) -> PResult<'_, Limit> {
    ws(map(string_literal, Limit::String)).parse(input)
}

/// Parses identifiers, `Name.Field` paths and status code names.
fn parse_name(input: Span<'_>) -> PResult<'_, Limit> {
    ws(map(
        pair(identifier, opt(preceded(char('.'), raw_identifier))),
        |(id, field)| match field {
            None if status_code(&id).is_some() => Limit::StatusCode(id),
            field => Limit::Identifier { id, field },
        },
    ))
    .parse(input)
}
