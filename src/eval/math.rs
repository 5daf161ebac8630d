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

//! Numeric combinators for math and exponent limits.

use crate::ast::MathOp;
use crate::extreme::{Extreme, NumberFormat};
use num_bigint::BigInt;

/// Applies `op` to two evaluated operands.
///
/// Signed pairs use signed arithmetic and unsigned pairs unsigned
/// arithmetic. Mixed pairs convert the unsigned side to `i64` when it fits,
/// else the signed side to `u64` when it is non-negative. Overflow, division
/// by zero, sentinels and unsafe conversions give `Undefined`.
pub(crate) fn operate(op: MathOp, left: Extreme, right: Extreme) -> Extreme {
    let format = match (left.format(), right.format()) {
        (Some(l), Some(r)) if l == r => l,
        _ => NumberFormat::Auto,
    };
    let result = match (left, right) {
        (Extreme::Int64 { value: l, .. }, Extreme::Int64 { value: r, .. }) => signed(op, l, r),
        (Extreme::UInt64 { value: l, .. }, Extreme::UInt64 { value: r, .. }) => {
            unsigned(op, l, r).or_else(|| {
                // `3 - 5` on unsigned literals still has a signed answer.
                let l = i64::try_from(l).ok()?;
                let r = i64::try_from(r).ok()?;
                signed(op, l, r)
            })
        }
        (Extreme::Int64 { value: l, .. }, Extreme::UInt64 { value: r, .. }) => {
            match i64::try_from(r) {
                Ok(r) => signed(op, l, r),
                Err(_) => u64::try_from(l).ok().and_then(|l| unsigned(op, l, r)),
            }
        }
        (Extreme::UInt64 { value: l, .. }, Extreme::Int64 { value: r, .. }) => {
            match i64::try_from(l) {
                Ok(l) => signed(op, l, r),
                Err(_) => u64::try_from(r).ok().and_then(|r| unsigned(op, l, r)),
            }
        }
        _ => None,
    };
    result
        .map(|value| value.with_format(format))
        .unwrap_or(Extreme::Undefined)
}

fn signed(op: MathOp, l: i64, r: i64) -> Option<Extreme> {
    let value = match op {
        MathOp::Add => l.checked_add(r),
        MathOp::Sub => l.checked_sub(r),
        MathOp::Mul => l.checked_mul(r),
        MathOp::Div => l.checked_div(r),
    }?;
    Some(Extreme::int(value, NumberFormat::Int))
}

fn unsigned(op: MathOp, l: u64, r: u64) -> Option<Extreme> {
    let value = match op {
        MathOp::Add => l.checked_add(r),
        MathOp::Sub => l.checked_sub(r),
        MathOp::Mul => l.checked_mul(r),
        MathOp::Div => l.checked_div(r),
    }?;
    Some(Extreme::uint(value, NumberFormat::Int))
}

/// Evaluates `value^exponent`.
///
/// The magnitude is computed with big integers and must fit `i64` before
/// the sign of `value` is reapplied; negative exponents are undefined.
pub(crate) fn exponentiate(value: i64, exponent: i64) -> Extreme {
    let Ok(exponent) = u32::try_from(exponent) else {
        return Extreme::Undefined;
    };
    let base = value.unsigned_abs();
    // Any base above one overflows `i64` long before this.
    if base > 1 && exponent >= 64 {
        return Extreme::Undefined;
    }
    let magnitude = BigInt::from(base).pow(exponent);
    match i64::try_from(magnitude) {
        Ok(magnitude) if value < 0 => Extreme::int(-magnitude, NumberFormat::Int),
        Ok(magnitude) => Extreme::int(magnitude, NumberFormat::Int),
        Err(_) => Extreme::Undefined,
    }
}
