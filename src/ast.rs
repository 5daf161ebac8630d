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

//! Constraint and limit trees.
//!
//! The parser builds these trees once; evaluation (`eval`) and rendering
//! (`format`) only read them. Both families are closed enums so every
//! consumer matches exhaustively.

use rust_decimal::Decimal;

/// Arithmetic operators inside math expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MathOp {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

impl MathOp {
    pub fn symbol(self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "*",
            MathOp::Div => "/",
        }
    }
}

/// Logical combinators used by tag-list style constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogicalOp {
    /// `|`
    Or,
    /// `&`
    And,
    /// `^`
    Xor,
    /// `or`
    WordOr,
    /// `and`
    WordAnd,
}

impl LogicalOp {
    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOp::Or => "|",
            LogicalOp::And => "&",
            LogicalOp::Xor => "^",
            LogicalOp::WordOr => "or",
            LogicalOp::WordAnd => "and",
        }
    }

    /// Union operators widen bounds; the others intersect them.
    pub fn is_union(self) -> bool {
        matches!(self, LogicalOp::Or | LogicalOp::Xor | LogicalOp::WordOr)
    }
}

/// What a `min`/`max` bound restricts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measure {
    /// The field's value.
    #[default]
    Value,
    /// Length of a string or octet string.
    Length,
    /// Number of list entries.
    Count,
}

/// Atomic bound values and references.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limit {
    /// Decimal integer literal.
    Int(i64),
    /// Hexadecimal literal (`0x1F`).
    Hex(u64),
    /// `true` / `false`.
    Boolean(bool),
    /// Quoted string literal.
    String(String),
    /// `empty`.
    Empty,
    /// `null`.
    Null,
    /// `unspecified`.
    Unspecified,
    /// Manufacturer-specific marker (`MS`), kept verbatim.
    Manufacturer(String),
    /// Percentage literal (`50%`, `12.5%`).
    Percent {
        /// Percent value as written.
        value: Decimal,
        /// Whether the literal was written with a fractional part.
        hundredths: bool,
    },
    /// Temperature literal in degrees Celsius (`-2.5°C`).
    Temperature(Decimal),
    /// Composite length limit (`64{32}`).
    Character {
        /// Maximum byte count.
        bytes: Box<Limit>,
        /// Maximum code point count.
        codepoints: Box<Limit>,
    },
    /// Power literal written in superscript form (`2^62^`).
    Exp { value: i64, exponent: i64 },
    /// Named field or entity, optionally with a sub-field (`Struct.Field`).
    Identifier { id: String, field: Option<String> },
    /// Document cross-reference (`<<ref_Foo>>`, `<<ref_Foo, Foo>>`).
    Reference { name: String, label: Option<String> },
    /// Semantic tag reference (`#Name`).
    Tag(String),
    /// Binary arithmetic.
    Math {
        /// Operator kind.
        op: MathOp,
        /// Left operand.
        left: Box<Limit>,
        /// Right operand.
        right: Box<Limit>,
    },
    /// N-ary logical combination `left op right[0] op right[1] ...`.
    Logical {
        /// Operator shared by every operand.
        op: LogicalOp,
        /// First operand.
        left: Box<Limit>,
        /// Remaining operands; empty for a bare negation.
        right: Vec<Limit>,
        /// Leading `not`.
        not: bool,
    },
    /// Named interaction status code (`CONSTRAINT_ERROR`).
    StatusCode(String),
}

/// Parsed constraint expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    /// `all`, `none`, `any` or `empty`, kept verbatim.
    All { value: String },
    /// `desc`: the constraint is given in prose.
    Described,
    /// Text the grammar does not recognize.
    Generic(String),
    /// A single allowed value.
    Exact(Limit),
    /// Lower bound only.
    Min { limit: Limit, measure: Measure },
    /// Upper bound only.
    Max { limit: Limit, measure: Measure },
    /// `min to max`.
    Range { min: Limit, max: Limit },
    /// List constraint: `outer` bounds the entry count, `entry` each entry.
    List {
        outer: Box<Constraint>,
        entry: Box<Constraint>,
    },
    /// Comma-separated alternatives.
    Set(Vec<Constraint>),
}

impl Constraint {
    /// Whether parsing fell back to opaque text.
    pub fn is_generic(&self) -> bool {
        matches!(self, Constraint::Generic(_))
    }

    /// Names an evaluation may resolve through a `Context`, in source order
    /// and without duplicates.
    ///
    /// Identifiers with a sub-field are reported as `Name.Field`.
    pub fn identifiers(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_identifiers(&mut names);
        names
    }

    fn collect_identifiers(&self, names: &mut Vec<String>) {
        match self {
            Constraint::All { .. } | Constraint::Described | Constraint::Generic(_) => {}
            Constraint::Exact(limit)
            | Constraint::Min { limit, .. }
            | Constraint::Max { limit, .. } => limit.collect_identifiers(names),
            Constraint::Range { min, max } => {
                min.collect_identifiers(names);
                max.collect_identifiers(names);
            }
            Constraint::List { outer, entry } => {
                outer.collect_identifiers(names);
                entry.collect_identifiers(names);
            }
            Constraint::Set(members) => {
                for member in members {
                    member.collect_identifiers(names);
                }
            }
        }
    }
}

/// Unit family of a limit; range ends must agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LimitFamily {
    Temperature,
    Percent,
    Numeric,
}

impl Limit {
    pub(crate) fn family(&self) -> LimitFamily {
        match self {
            Limit::Temperature(_) => LimitFamily::Temperature,
            Limit::Percent { .. } => LimitFamily::Percent,
            _ => LimitFamily::Numeric,
        }
    }

    fn collect_identifiers(&self, names: &mut Vec<String>) {
        match self {
            Limit::Identifier { id, field } => push_unique(
                names,
                match field {
                    Some(field) => format!("{id}.{field}"),
                    None => id.clone(),
                },
            ),
            Limit::Reference { name, .. } | Limit::Tag(name) => push_unique(names, name.clone()),
            Limit::Character { bytes, codepoints } => {
                bytes.collect_identifiers(names);
                codepoints.collect_identifiers(names);
            }
            Limit::Math { left, right, .. } => {
                left.collect_identifiers(names);
                right.collect_identifiers(names);
            }
            Limit::Logical { left, right, .. } => {
                left.collect_identifiers(names);
                for operand in right {
                    operand.collect_identifiers(names);
                }
            }
            Limit::Int(_)
            | Limit::Hex(_)
            | Limit::Boolean(_)
            | Limit::String(_)
            | Limit::Empty
            | Limit::Null
            | Limit::Unspecified
            | Limit::Manufacturer(_)
            | Limit::Percent { .. }
            | Limit::Temperature(_)
            | Limit::Exp { .. }
            | Limit::StatusCode(_) => {}
        }
    }
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.contains(&name) {
        names.push(name);
    }
}
