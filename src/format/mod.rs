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

//! Source (AsciiDoc) and data-model renderings.
//!
//! Both renderings walk the same tree; they differ only in how a few limit
//! kinds print (see [`Style`]). The wire form is rendered from evaluated
//! bounds instead, by [`crate::Extreme::zap_string`].

mod limit;

use crate::ast::{Constraint, Limit};
use crate::types::DataType;

use self::limit::limit_string;

/// Target rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Style {
    /// Text as authored in AsciiDoc source; re-parses to the same bounds.
    AsciiDoc,
    /// Canonical text for code generation: scaled raw integers, no units,
    /// no parentheses around a top-level math expression.
    DataModel,
}

impl Constraint {
    /// Renders the constraint as AsciiDoc source text.
    pub fn ascii_doc_string(&self, data_type: Option<&DataType>) -> String {
        constraint_string(self, data_type, Style::AsciiDoc)
    }

    /// Renders the canonical data-model form.
    pub fn data_model_string(&self, data_type: Option<&DataType>) -> String {
        constraint_string(self, data_type, Style::DataModel)
    }
}

impl Limit {
    pub fn ascii_doc_string(&self, data_type: Option<&DataType>) -> String {
        limit_string(self, data_type, Style::AsciiDoc, true)
    }

    pub fn data_model_string(&self, data_type: Option<&DataType>) -> String {
        limit_string(self, data_type, Style::DataModel, true)
    }
}

fn constraint_string(constraint: &Constraint, data_type: Option<&DataType>, style: Style) -> String {
    match constraint {
        Constraint::All { value } => value.clone(),
        Constraint::Described => "desc".to_string(),
        Constraint::Generic(raw) => raw.clone(),
        Constraint::Exact(limit) => limit_string(limit, data_type, style, true),
        Constraint::Min { limit, .. } => {
            format!("min {}", limit_string(limit, data_type, style, true))
        }
        Constraint::Max { limit, .. } => {
            format!("max {}", limit_string(limit, data_type, style, true))
        }
        Constraint::Range { min, max } => format!(
            "{} to {}",
            limit_string(min, data_type, style, true),
            limit_string(max, data_type, style, true)
        ),
        Constraint::List { outer, entry } => format!(
            "{}[{}]",
            constraint_string(outer, data_type, style),
            constraint_string(entry, data_type.and_then(DataType::entry_type), style)
        ),
        Constraint::Set(members) => members
            .iter()
            .map(|member| constraint_string(member, data_type, style))
            .collect::<Vec<_>>()
            .join(", "),
    }
}
