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

//! Limit rendering.

use super::Style;
use crate::ast::Limit;
use crate::eval::exponentiate;
use crate::extreme::{Extreme, hex_string};
use crate::types::DataType;
use rust_decimal::Decimal;

/// Renders one limit.
///
/// `top` is set for a limit sitting directly under a constraint; nested
/// math and logical nodes are always parenthesised.
pub(super) fn limit_string(
    limit: &Limit,
    data_type: Option<&DataType>,
    style: Style,
    top: bool,
) -> String {
    match limit {
        Limit::Int(value) => value.to_string(),
        Limit::Hex(value) => hex_string(*value, data_type.and_then(DataType::size)),
        Limit::Boolean(value) => value.to_string(),
        Limit::String(value) => format!("\"{value}\""),
        Limit::Empty => "empty".to_string(),
        Limit::Null => "null".to_string(),
        Limit::Unspecified => "unspecified".to_string(),
        Limit::Manufacturer(raw) => raw.clone(),
        Limit::Percent { value, hundredths } => match style {
            Style::AsciiDoc if *hundredths => {
                // At least two decimals, never fewer than written.
                let mut value = value.normalize();
                if value.scale() < 2 {
                    value.rescale(2);
                }
                format!("{value}%")
            }
            Style::AsciiDoc => format!("{}%", value.normalize()),
            Style::DataModel => {
                scaled_string(*value, data_type.and_then(DataType::percent_scale))
            }
        },
        Limit::Temperature(value) => match style {
            Style::AsciiDoc => format!("{}°C", value.normalize()),
            Style::DataModel => {
                scaled_string(*value, data_type.and_then(DataType::temperature_scale))
            }
        },
        Limit::Character { bytes, codepoints } => format!(
            "{}{{{}}}",
            limit_string(bytes, data_type, style, false),
            limit_string(codepoints, data_type, style, false)
        ),
        Limit::Exp { value, exponent } => match style {
            Style::AsciiDoc => format!("{value}^{exponent}^"),
            Style::DataModel => match exponentiate(*value, *exponent) {
                Extreme::Int64 { value, .. } => value.to_string(),
                _ => format!("{value}^{exponent}"),
            },
        },
        Limit::Identifier { id, field } => match field {
            Some(field) => format!("{id}.{field}"),
            None => id.clone(),
        },
        Limit::Reference { name, label } => match (style, label) {
            (Style::AsciiDoc, Some(label)) => format!("<<{name}, {label}>>"),
            (Style::AsciiDoc, None) => format!("<<{name}>>"),
            (Style::DataModel, Some(label)) => label.clone(),
            (Style::DataModel, None) => name.strip_prefix("ref_").unwrap_or(name).to_string(),
        },
        Limit::Tag(name) => match style {
            Style::AsciiDoc => format!("#{name}"),
            Style::DataModel => name.clone(),
        },
        Limit::Math { op, left, right } => {
            let body = format!(
                "{} {} {}",
                limit_string(left, data_type, style, false),
                op.symbol(),
                limit_string(right, data_type, style, false)
            );
            if top && style == Style::DataModel {
                body
            } else {
                format!("({body})")
            }
        }
        Limit::Logical {
            op,
            left,
            right,
            not,
        } => {
            let operands: Vec<String> = std::iter::once(left.as_ref())
                .chain(right.iter())
                .map(|operand| limit_string(operand, data_type, style, false))
                .collect();
            let body = operands.join(&format!(" {} ", op.symbol()));
            let body = if *not { format!("not {body}") } else { body };
            if top { body } else { format!("({body})") }
        }
        Limit::StatusCode(name) => name.clone(),
    }
}

/// Raw integer for a unit value, or the plain decimal without a unit scale.
fn scaled_string(value: Decimal, factor: Option<i64>) -> String {
    let Some(factor) = factor else {
        return value.normalize().to_string();
    };
    match value.checked_mul(Decimal::from(factor)) {
        Some(scaled) => scaled.trunc().normalize().to_string(),
        None => value.normalize().to_string(),
    }
}
