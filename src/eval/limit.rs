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

//! Limit evaluation.

use super::math::{exponentiate, operate};
use super::{Bound, Evaluation};
use crate::ast::Limit;
use crate::extreme::{Extreme, NumberFormat, max_extreme, min_extreme};
use crate::status::status_code;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

impl Evaluation<'_> {
    pub(crate) fn limit(&mut self, limit: &Limit, bound: Bound) -> Extreme {
        match limit {
            Limit::Int(value) => Extreme::int(*value, NumberFormat::Int),
            Limit::Hex(value) => Extreme::uint(*value, NumberFormat::Hex),
            Limit::Boolean(value) => Extreme::int(i64::from(*value), NumberFormat::Int),
            Limit::String(_) | Limit::Unspecified | Limit::Manufacturer(_) => Extreme::Undefined,
            Limit::Empty => Extreme::Empty,
            Limit::Null => Extreme::Null,
            Limit::Percent { value, .. } => {
                let factor = self
                    .data_type()
                    .and_then(|dt| dt.percent_scale())
                    .unwrap_or(1);
                scaled(*value, factor, NumberFormat::Int)
            }
            Limit::Temperature(value) => {
                let factor = self
                    .data_type()
                    .and_then(|dt| dt.temperature_scale())
                    .unwrap_or(1);
                scaled(*value, factor, NumberFormat::Hex)
            }
            Limit::Character { bytes, .. } => self.limit(bytes, bound),
            Limit::Exp { value, exponent } => exponentiate(*value, *exponent),
            Limit::Identifier { id, field } => self.resolve(id, field.as_deref(), bound),
            Limit::Reference { name, .. } | Limit::Tag(name) => self.resolve(name, None, bound),
            Limit::Math { op, left, right } => {
                let left = self.limit(left, bound);
                let right = self.limit(right, bound);
                operate(*op, left, right)
            }
            Limit::Logical {
                op, left, right, ..
            } => {
                // `not` only changes the rendered text.
                if bound == Bound::Default {
                    return self.limit(left, Bound::Default);
                }
                let combine: fn(Extreme, Extreme) -> Extreme = match (op.is_union(), bound) {
                    (true, Bound::Min) | (false, Bound::Max) => min_extreme,
                    _ => max_extreme,
                };
                let mut result = self.limit(left, bound);
                for operand in right {
                    let value = self.limit(operand, bound);
                    result = combine(result, value);
                }
                result
            }
            Limit::StatusCode(name) => status_code(name)
                .map(|code| Extreme::uint(code, NumberFormat::Hex))
                .unwrap_or(Extreme::Undefined),
        }
    }
}

/// Truncates `value × factor` to an integer extreme.
fn scaled(value: Decimal, factor: i64, format: NumberFormat) -> Extreme {
    value
        .checked_mul(Decimal::from(factor))
        .and_then(|scaled| scaled.trunc().to_i64())
        .map(|raw| Extreme::int(raw, format))
        .unwrap_or(Extreme::Undefined)
}
