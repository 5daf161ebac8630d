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

//! Bound evaluation over a caller-supplied [`Context`].
//!
//! Every public `min`/`max`/`default` call opens a fresh [`Evaluation`]
//! scope. The scope owns the chain of names currently being resolved, so
//! mutually referencing fields terminate without any state outliving the
//! call.

mod fields;
mod limit;
mod math;

pub use fields::FieldTable;
pub(crate) use math::exponentiate;

use crate::ast::{Constraint, Limit};
use crate::extreme::{Extreme, max_extreme, min_extreme};
use crate::types::DataType;
use tracing::trace;

/// Resolution capabilities supplied by the owner of the field being
/// evaluated.
///
/// `name`/`field` pairs identify another field (or a sub-field of a struct
/// field) the constraint refers to.
pub trait Context {
    /// Data type of the field being evaluated.
    fn data_type(&self) -> Option<&DataType>;

    /// Whether the field being evaluated is nullable.
    fn nullable(&self) -> bool {
        false
    }

    /// Constraint of a referenced field, evaluated in place of the name.
    fn reference_constraint(&self, _name: &str, _field: Option<&str>) -> Option<Constraint> {
        None
    }

    /// Default value of a referenced field.
    fn fallback(&self, _name: &str, _field: Option<&str>) -> Extreme {
        Extreme::Undefined
    }

    /// Known lower value of a referenced entity (an enum value, a constant).
    fn min_entity_value(&self, _name: &str, _field: Option<&str>) -> Extreme {
        Extreme::Undefined
    }

    /// Known upper value of a referenced entity.
    fn max_entity_value(&self, _name: &str, _field: Option<&str>) -> Extreme {
        Extreme::Undefined
    }
}

/// Which bound is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    Min,
    Max,
    Default,
}

/// One top-level evaluation.
pub(crate) struct Evaluation<'c> {
    ctx: &'c dyn Context,
    // Names being resolved, outermost first.
    path: Vec<String>,
}

impl<'c> Evaluation<'c> {
    pub(crate) fn new(ctx: &'c dyn Context) -> Self {
        Self {
            ctx,
            path: Vec::new(),
        }
    }

    fn data_type(&self) -> Option<&'c DataType> {
        self.ctx.data_type()
    }

    pub(crate) fn constraint(&mut self, constraint: &Constraint, bound: Bound) -> Extreme {
        match (constraint, bound) {
            (Constraint::All { .. } | Constraint::Described | Constraint::Generic(_), _) => {
                Extreme::Undefined
            }
            (Constraint::Exact(limit), bound) => self.limit(limit, bound),
            (Constraint::Min { limit, .. }, Bound::Min) => self.limit(limit, Bound::Min),
            (Constraint::Min { .. }, _) => Extreme::Undefined,
            (Constraint::Max { limit, .. }, Bound::Max) => self.limit(limit, Bound::Max),
            (Constraint::Max { .. }, _) => Extreme::Undefined,
            (Constraint::Range { min, .. }, Bound::Min) => self.limit(min, Bound::Min),
            (Constraint::Range { max, .. }, Bound::Max) => self.limit(max, Bound::Max),
            (Constraint::Range { .. }, Bound::Default) => Extreme::Undefined,
            // Entry constraints never bound the field itself.
            (Constraint::List { outer, .. }, bound) => self.constraint(outer, bound),
            (Constraint::Set(members), Bound::Min) => {
                let mut result = Extreme::Undefined;
                for member in members {
                    result = min_extreme(result, self.constraint(member, Bound::Min));
                }
                result
            }
            (Constraint::Set(members), Bound::Max) => {
                let mut result = Extreme::Undefined;
                for member in members {
                    result = max_extreme(result, self.constraint(member, Bound::Max));
                }
                result
            }
            (Constraint::Set(members), Bound::Default) => {
                for member in members {
                    let value = self.constraint(member, Bound::Default);
                    if value.defined() {
                        return value;
                    }
                }
                Extreme::Undefined
            }
        }
    }

    /// Resolves a named reference in the direction of `bound`.
    ///
    /// A name already on the resolution path yields `Undefined`, which cuts
    /// reference cycles after one level of cross-reference.
    fn resolve(&mut self, name: &str, field: Option<&str>, bound: Bound) -> Extreme {
        let key = match field {
            Some(field) => format!("{name}.{field}"),
            None => name.to_string(),
        };
        if self.path.contains(&key) {
            trace!(reference = %key, path = ?self.path, "reference cycle cut");
            return Extreme::Undefined;
        }

        let direct = match bound {
            Bound::Min => self.ctx.min_entity_value(name, field),
            Bound::Max => self.ctx.max_entity_value(name, field),
            Bound::Default => self.ctx.fallback(name, field),
        };
        if direct.defined() {
            return direct;
        }

        if let Some(constraint) = self.ctx.reference_constraint(name, field) {
            self.path.push(key);
            let value = self.constraint(&constraint, bound);
            self.path.pop();
            if value.defined() {
                return value;
            }
        }

        match bound {
            Bound::Default => Extreme::Undefined,
            Bound::Min | Bound::Max => {
                let value = self.ctx.fallback(name, field);
                if !value.defined() {
                    trace!(reference = %name, ?field, "reference unresolved");
                }
                value
            }
        }
    }
}

impl Constraint {
    /// Lowest allowed value (or length/count, see [`crate::Measure`]).
    pub fn min(&self, ctx: &dyn Context) -> Extreme {
        Evaluation::new(ctx).constraint(self, Bound::Min)
    }

    /// Highest allowed value (or length/count).
    pub fn max(&self, ctx: &dyn Context) -> Extreme {
        Evaluation::new(ctx).constraint(self, Bound::Max)
    }

    /// Value of a default-value constraint.
    pub fn default(&self, ctx: &dyn Context) -> Extreme {
        Evaluation::new(ctx).constraint(self, Bound::Default)
    }

    /// [`Constraint::min`], or the data type's lowest encodable value when
    /// the constraint leaves the lower side open.
    pub fn effective_min(&self, ctx: &dyn Context) -> Extreme {
        let value = self.min(ctx);
        if value.defined() {
            return value;
        }
        ctx.data_type()
            .map(|dt| dt.min_value(ctx.nullable()))
            .unwrap_or_default()
    }

    /// [`Constraint::max`], or the data type's highest encodable value when
    /// the constraint leaves the upper side open.
    pub fn effective_max(&self, ctx: &dyn Context) -> Extreme {
        let value = self.max(ctx);
        if value.defined() {
            return value;
        }
        ctx.data_type()
            .map(|dt| dt.max_value(ctx.nullable()))
            .unwrap_or_default()
    }
}

impl Limit {
    pub fn min(&self, ctx: &dyn Context) -> Extreme {
        Evaluation::new(ctx).limit(self, Bound::Min)
    }

    pub fn max(&self, ctx: &dyn Context) -> Extreme {
        Evaluation::new(ctx).limit(self, Bound::Max)
    }

    pub fn default(&self, ctx: &dyn Context) -> Extreme {
        Evaluation::new(ctx).limit(self, Bound::Default)
    }
}
