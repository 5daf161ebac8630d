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

//! Constraint expressions for data-model fields.
//!
//! Fields in an interaction-model document carry short constraint
//! strings such as `0 to 100`, `max 32`, `-2.5°C to 25°C`, `16[max 2]` or
//! `<<ref_Limit>> | 0x0F`. This crate provides:
//! - A typed `nom` grammar that turns the text into a [`Constraint`] tree,
//!   falling back to [`Constraint::Generic`] for anything unrecognised.
//! - Data-type aware min/max/default evaluation through a caller-supplied
//!   [`Context`], resolving identifiers and cross-references with cycle
//!   protection.
//! - Three renderings: AsciiDoc source (`ascii_doc_string`), canonical
//!   data model (`data_model_string`) and wire values
//!   ([`Extreme::zap_string`]).
//! - Positioned diagnostics ([`ParseError`]) for callers that want to know
//!   why a string fell back to generic text.
//!
//! # Pipeline
//!
//! 1. Parse text with [`parse_typed`] (or [`try_parse`]) for a [`DataType`].
//! 2. Evaluate bounds with [`Constraint::min`]/[`Constraint::max`]/
//!    [`Constraint::default`] against a [`Context`] such as [`FieldTable`].
//! 3. Render the tree or the evaluated [`Extreme`] values.
//!
//! # Example
//!
//! ```
//! use field_constraint::{BaseDataType, DataType, FieldTable, parse_typed};
//!
//! let dt = DataType::new(BaseDataType::Temperature);
//! let constraint = parse_typed("-2.5°C to 2.5°C", Some(&dt));
//! let ctx = FieldTable::new().with_data_type(dt.clone());
//!
//! assert_eq!(constraint.min(&ctx).zap_string(Some(&dt)), "0xFF06");
//! assert_eq!(constraint.max(&ctx).zap_string(Some(&dt)), "0x00FA");
//! assert_eq!(constraint.ascii_doc_string(Some(&dt)), "-2.5°C to 2.5°C");
//! ```
//!
//! All trees are immutable values; evaluation keeps its state in a per-call
//! scope, so shared trees can be evaluated from several threads at once.

mod ast;
mod diagnostics;
mod eval;
mod extreme;
mod format;
mod parser;
mod status;
mod types;

pub use ast::{Constraint, Limit, LogicalOp, MathOp, Measure};
pub use diagnostics::ParseError;
pub use eval::{Context, FieldTable};
pub use extreme::{Extreme, NumberFormat, max_extreme, min_extreme};
pub use parser::{parse, parse_typed, try_parse};
pub use status::status_code;
pub use types::{BaseDataType, DataType};

#[cfg(test)]
mod tests;
