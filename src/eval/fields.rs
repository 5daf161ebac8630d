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

//! Map-backed [`Context`] for callers without an entity model of their own.

use super::Context;
use crate::ast::Constraint;
use crate::extreme::Extreme;
use crate::types::DataType;
use std::collections::HashMap;

/// Field and entity lookup tables keyed by `Name` or `Name.Field`.
#[derive(Debug, Clone, Default)]
pub struct FieldTable {
    data_type: Option<DataType>,
    nullable: bool,
    constraints: HashMap<String, Constraint>,
    minimums: HashMap<String, Extreme>,
    maximums: HashMap<String, Extreme>,
    defaults: HashMap<String, Extreme>,
}

impl FieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type of the field being evaluated.
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Registers the constraint of a field other constraints may reference.
    pub fn with_field(mut self, name: impl Into<String>, constraint: Constraint) -> Self {
        self.constraints.insert(name.into(), constraint);
        self
    }

    /// Registers a known value range for a named entity.
    pub fn with_entity_range(mut self, name: impl Into<String>, min: Extreme, max: Extreme) -> Self {
        let name = name.into();
        self.minimums.insert(name.clone(), min);
        self.maximums.insert(name, max);
        self
    }

    /// Registers a single known value for a named entity.
    pub fn with_entity_value(self, name: impl Into<String>, value: Extreme) -> Self {
        self.with_entity_range(name, value, value)
    }

    /// Registers the default value of a referenced field.
    pub fn with_default(mut self, name: impl Into<String>, value: Extreme) -> Self {
        self.defaults.insert(name.into(), value);
        self
    }

    fn lookup<'a, T>(map: &'a HashMap<String, T>, name: &str, field: Option<&str>) -> Option<&'a T> {
        match field {
            Some(field) => map.get(&format!("{name}.{field}")),
            None => map.get(name),
        }
    }
}

impl Context for FieldTable {
    fn data_type(&self) -> Option<&DataType> {
        self.data_type.as_ref()
    }

    fn nullable(&self) -> bool {
        self.nullable
    }

    fn reference_constraint(&self, name: &str, field: Option<&str>) -> Option<Constraint> {
        Self::lookup(&self.constraints, name, field).cloned()
    }

    fn fallback(&self, name: &str, field: Option<&str>) -> Extreme {
        Self::lookup(&self.defaults, name, field)
            .copied()
            .unwrap_or_default()
    }

    fn min_entity_value(&self, name: &str, field: Option<&str>) -> Extreme {
        Self::lookup(&self.minimums, name, field)
            .copied()
            .unwrap_or_default()
    }

    fn max_entity_value(&self, name: &str, field: Option<&str>) -> Extreme {
        Self::lookup(&self.maximums, name, field)
            .copied()
            .unwrap_or_default()
    }
}
