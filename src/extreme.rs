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

//! Evaluated bound values.
//!
//! An [`Extreme`] is what evaluating one side of a constraint produces: a
//! signed or unsigned number tagged with the format it should render in, a
//! `null`/`empty` sentinel, or `Undefined` when no bound is known.

use crate::types::DataType;
use std::cmp::Ordering;

/// Rendering hint carried by numeric extremes.
///
/// The format never takes part in numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberFormat {
    /// Decimal.
    #[default]
    Int,
    /// Zero-padded upper-case hexadecimal.
    Hex,
    /// Result of combining operands with different formats; renders decimal.
    Auto,
}

/// Result of evaluating a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extreme {
    /// No bound is known.
    #[default]
    Undefined,
    /// Signed value.
    Int64 { value: i64, format: NumberFormat },
    /// Unsigned value.
    UInt64 { value: u64, format: NumberFormat },
    /// The `null` sentinel of a nullable field.
    Null,
    /// The `empty` sentinel of a list or string.
    Empty,
}

impl Extreme {
    pub fn int(value: i64, format: NumberFormat) -> Self {
        Extreme::Int64 { value, format }
    }

    pub fn uint(value: u64, format: NumberFormat) -> Self {
        Extreme::UInt64 { value, format }
    }

    /// Whether any bound (numeric or sentinel) is known.
    pub fn defined(&self) -> bool {
        !matches!(self, Extreme::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Extreme::Null)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Extreme::Empty)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Extreme::Int64 { .. } | Extreme::UInt64 { .. })
    }

    /// Rendering format of numeric extremes.
    pub fn format(&self) -> Option<NumberFormat> {
        match self {
            Extreme::Int64 { format, .. } | Extreme::UInt64 { format, .. } => Some(*format),
            _ => None,
        }
    }

    /// Returns a copy re-tagged with `format`; sentinels are unchanged.
    pub fn with_format(self, format: NumberFormat) -> Self {
        match self {
            Extreme::Int64 { value, .. } => Extreme::Int64 { value, format },
            Extreme::UInt64 { value, .. } => Extreme::UInt64 { value, format },
            other => other,
        }
    }

    /// Numeric value as `i64` when it fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Extreme::Int64 { value, .. } => Some(value),
            Extreme::UInt64 { value, .. } => i64::try_from(value).ok(),
            _ => None,
        }
    }

    /// Numeric value as `u64` when it fits.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Extreme::Int64 { value, .. } => u64::try_from(value).ok(),
            Extreme::UInt64 { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Orders two numeric extremes across signed and unsigned storage.
    ///
    /// Returns `None` unless both sides are numeric.
    pub fn compare(&self, other: &Extreme) -> Option<Ordering> {
        match (*self, *other) {
            (Extreme::Int64 { value: a, .. }, Extreme::Int64 { value: b, .. }) => Some(a.cmp(&b)),
            (Extreme::UInt64 { value: a, .. }, Extreme::UInt64 { value: b, .. }) => {
                Some(a.cmp(&b))
            }
            (Extreme::Int64 { value: a, .. }, Extreme::UInt64 { value: b, .. }) => {
                Some(match u64::try_from(a) {
                    Ok(a) => a.cmp(&b),
                    Err(_) => Ordering::Less,
                })
            }
            (Extreme::UInt64 { value: a, .. }, Extreme::Int64 { value: b, .. }) => {
                Some(match u64::try_from(b) {
                    Ok(b) => a.cmp(&b),
                    Err(_) => Ordering::Greater,
                })
            }
            _ => None,
        }
    }

    /// Wire/ZAP rendering.
    ///
    /// Hex values are zero-padded to the data type's width, negative ones as
    /// two's complement of that width. `Undefined` and `Empty` render empty.
    pub fn zap_string(&self, data_type: Option<&DataType>) -> String {
        match self {
            Extreme::Empty => String::new(),
            other => other.render(data_type),
        }
    }

    /// Data-model rendering; like [`Extreme::zap_string`] but keeps `empty`.
    pub fn data_model_string(&self, data_type: Option<&DataType>) -> String {
        self.render(data_type)
    }

    fn render(&self, data_type: Option<&DataType>) -> String {
        let width = data_type.and_then(DataType::size);
        match *self {
            Extreme::Undefined => String::new(),
            Extreme::Null => "null".to_string(),
            Extreme::Empty => "empty".to_string(),
            Extreme::Int64 {
                value,
                format: NumberFormat::Hex,
            } => signed_hex_string(value, width),
            Extreme::UInt64 {
                value,
                format: NumberFormat::Hex,
            } => hex_string(value, width),
            Extreme::Int64 { value, .. } => value.to_string(),
            Extreme::UInt64 { value, .. } => value.to_string(),
        }
    }
}

/// Renders `value` as `0x`-prefixed upper-case hex.
///
/// With a byte width the digits are padded to two per byte; values wider
/// than that keep all their significant bytes. Without a width the shortest
/// even digit count is used.
pub(crate) fn hex_string(value: u64, width: Option<usize>) -> String {
    let significant = (64 - value.leading_zeros() as usize).div_ceil(8).max(1);
    let bytes = width.map_or(significant, |width| width.min(8).max(significant));
    format!("0x{:0digits$X}", value, digits = bytes * 2)
}

/// Renders a signed value as hex.
///
/// Negative values that fit the byte width render as two's complement of
/// that width; other negatives use the full 64-bit pattern.
pub(crate) fn signed_hex_string(value: i64, width: Option<usize>) -> String {
    if value >= 0 {
        return hex_string(value as u64, width);
    }
    match width {
        Some(bytes) if bytes > 0 && bytes < 8 && value >= -(1i64 << (bytes * 8 - 1)) => {
            let mask = (1u64 << (bytes * 8)) - 1;
            format!("0x{:0digits$X}", value as u64 & mask, digits = bytes * 2)
        }
        _ => format!("0x{:016X}", value as u64),
    }
}

/// Lower of two bounds, skipping undefined ones.
///
/// A numeric bound wins over a sentinel; two sentinels keep the first.
pub fn min_extreme(a: Extreme, b: Extreme) -> Extreme {
    pick(a, b, Ordering::Less)
}

/// Higher of two bounds, skipping undefined ones.
///
/// A numeric bound wins over a sentinel; two sentinels keep the first.
pub fn max_extreme(a: Extreme, b: Extreme) -> Extreme {
    pick(a, b, Ordering::Greater)
}

fn pick(a: Extreme, b: Extreme, wanted: Ordering) -> Extreme {
    if !a.defined() {
        return b;
    }
    if !b.defined() {
        return a;
    }
    match (a.is_numeric(), b.is_numeric()) {
        (true, true) => {
            if b.compare(&a) == Some(wanted) {
                b
            } else {
                a
            }
        }
        (false, true) => b,
        _ => a,
    }
}
