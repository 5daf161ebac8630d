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

//! Data-type descriptors supplied by the entity layer.
//!
//! Constraint evaluation and rendering only need a narrow view of a field's
//! type: its fixed byte width (hex padding), signedness, whether it is a
//! list, string or octet string (length vs. count vs. value semantics), and
//! which unit family it belongs to (percent and temperature scaling).

use crate::extreme::{Extreme, NumberFormat};

/// Base type tags of the data-model type tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseDataType {
    Bool,
    Map8,
    Map16,
    Map32,
    Map64,
    UInt8,
    UInt16,
    UInt24,
    UInt32,
    UInt40,
    UInt48,
    UInt56,
    UInt64,
    Int8,
    Int16,
    Int24,
    Int32,
    Int40,
    Int48,
    Int56,
    Int64,
    Single,
    Double,
    OctStr,
    String,
    List,
    Struct,
    Enum8,
    Enum16,
    Percent,
    Percent100ths,
    Temperature,
    TemperatureDifference,
    SignedTemperature,
    UnsignedTemperature,
    EpochUs,
    EpochS,
    PosixMs,
    SystimeUs,
    SystimeMs,
    ElapsedS,
    Power,
    Amperage,
    Voltage,
    Energy,
    FabricIdx,
    FabricId,
    NodeId,
    GroupId,
    EndpointNo,
    VendorId,
    DevtypeId,
    ClusterId,
    AttribId,
    FieldId,
    EventId,
    CommandId,
    ActionId,
    TransactionId,
    EventNo,
    DataVer,
    EntryIdx,
    Status,
    Priority,
    Tag,
    Namespace,
    /// Any named type the table does not know about (structs, enums, bitmaps
    /// declared by a cluster).
    Custom,
}

const NAMES: &[(&str, BaseDataType)] = &[
    ("bool", BaseDataType::Bool),
    ("boolean", BaseDataType::Bool),
    ("map8", BaseDataType::Map8),
    ("map16", BaseDataType::Map16),
    ("map32", BaseDataType::Map32),
    ("map64", BaseDataType::Map64),
    ("uint8", BaseDataType::UInt8),
    ("uint16", BaseDataType::UInt16),
    ("uint24", BaseDataType::UInt24),
    ("uint32", BaseDataType::UInt32),
    ("uint40", BaseDataType::UInt40),
    ("uint48", BaseDataType::UInt48),
    ("uint56", BaseDataType::UInt56),
    ("uint64", BaseDataType::UInt64),
    ("int8", BaseDataType::Int8),
    ("int16", BaseDataType::Int16),
    ("int24", BaseDataType::Int24),
    ("int32", BaseDataType::Int32),
    ("int40", BaseDataType::Int40),
    ("int48", BaseDataType::Int48),
    ("int56", BaseDataType::Int56),
    ("int64", BaseDataType::Int64),
    ("single", BaseDataType::Single),
    ("double", BaseDataType::Double),
    ("octstr", BaseDataType::OctStr),
    ("string", BaseDataType::String),
    ("list", BaseDataType::List),
    ("struct", BaseDataType::Struct),
    ("enum8", BaseDataType::Enum8),
    ("enum16", BaseDataType::Enum16),
    ("percent", BaseDataType::Percent),
    ("percent100ths", BaseDataType::Percent100ths),
    ("temperature", BaseDataType::Temperature),
    ("temperaturedifference", BaseDataType::TemperatureDifference),
    ("signedtemperature", BaseDataType::SignedTemperature),
    ("unsignedtemperature", BaseDataType::UnsignedTemperature),
    ("epoch-us", BaseDataType::EpochUs),
    ("epoch-s", BaseDataType::EpochS),
    ("posix-ms", BaseDataType::PosixMs),
    ("systime-us", BaseDataType::SystimeUs),
    ("systime-ms", BaseDataType::SystimeMs),
    ("elapsed-s", BaseDataType::ElapsedS),
    ("power-mw", BaseDataType::Power),
    ("amperage-ma", BaseDataType::Amperage),
    ("voltage-mv", BaseDataType::Voltage),
    ("energy-mwh", BaseDataType::Energy),
    ("fabric-idx", BaseDataType::FabricIdx),
    ("fabric-id", BaseDataType::FabricId),
    ("node-id", BaseDataType::NodeId),
    ("group-id", BaseDataType::GroupId),
    ("endpoint-no", BaseDataType::EndpointNo),
    ("vendor-id", BaseDataType::VendorId),
    ("devtype-id", BaseDataType::DevtypeId),
    ("cluster-id", BaseDataType::ClusterId),
    ("attrib-id", BaseDataType::AttribId),
    ("field-id", BaseDataType::FieldId),
    ("event-id", BaseDataType::EventId),
    ("command-id", BaseDataType::CommandId),
    ("action-id", BaseDataType::ActionId),
    ("trans-id", BaseDataType::TransactionId),
    ("event-no", BaseDataType::EventNo),
    ("data-ver", BaseDataType::DataVer),
    ("entry-idx", BaseDataType::EntryIdx),
    ("status", BaseDataType::Status),
    ("priority", BaseDataType::Priority),
    ("tag", BaseDataType::Tag),
    ("namespace", BaseDataType::Namespace),
];

impl BaseDataType {
    /// Looks up a data-model type name, ignoring ASCII case.
    ///
    /// Unknown names yield `None`; callers typically map those to
    /// [`BaseDataType::Custom`].
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, base)| *base)
    }

    /// Canonical spelling of this type.
    pub fn name(self) -> &'static str {
        match self {
            BaseDataType::TemperatureDifference => "TemperatureDifference",
            BaseDataType::SignedTemperature => "SignedTemperature",
            BaseDataType::UnsignedTemperature => "UnsignedTemperature",
            BaseDataType::Power => "power-mW",
            BaseDataType::Amperage => "amperage-mA",
            BaseDataType::Voltage => "voltage-mV",
            BaseDataType::Energy => "energy-mWh",
            BaseDataType::Custom => "custom",
            other => NAMES
                .iter()
                .find(|(_, base)| *base == other)
                .map(|(name, _)| *name)
                .unwrap_or("custom"),
        }
    }

    /// Fixed encoded width in bytes, `None` for variable-size types.
    pub fn size(self) -> Option<usize> {
        use BaseDataType::*;
        let size = match self {
            Bool | Map8 | UInt8 | Int8 | Enum8 | Percent | SignedTemperature
            | UnsignedTemperature | FabricIdx | ActionId | Status | Priority | Tag
            | Namespace => 1,
            Map16 | UInt16 | Int16 | Enum16 | Percent100ths | Temperature
            | TemperatureDifference | GroupId | EndpointNo | VendorId | EntryIdx => 2,
            UInt24 | Int24 => 3,
            Map32 | UInt32 | Int32 | Single | EpochS | ElapsedS | DevtypeId | ClusterId
            | AttribId | FieldId | EventId | CommandId | TransactionId | DataVer => 4,
            UInt40 | Int40 => 5,
            UInt48 | Int48 => 6,
            UInt56 | Int56 => 7,
            Map64 | UInt64 | Int64 | Double | EpochUs | PosixMs | SystimeUs | SystimeMs
            | Power | Amperage | Voltage | Energy | FabricId | NodeId | EventNo => 8,
            OctStr | String | List | Struct | Custom => return None,
        };
        Some(size)
    }

    /// Whether values of this type are two's-complement signed.
    pub fn is_signed(self) -> bool {
        use BaseDataType::*;
        matches!(
            self,
            Int8 | Int16
                | Int24
                | Int32
                | Int40
                | Int48
                | Int56
                | Int64
                | Single
                | Double
                | Temperature
                | TemperatureDifference
                | SignedTemperature
                | Power
                | Amperage
                | Voltage
                | Energy
        )
    }

    fn is_float(self) -> bool {
        matches!(self, BaseDataType::Single | BaseDataType::Double)
    }
}

/// Type descriptor passed to parsing, evaluation and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataType {
    /// Base type tag (`List` for arrays).
    pub base: BaseDataType,
    /// Type name as written in the source document.
    pub name: String,
    /// Whether the field holds a list of `entry` values.
    pub is_array: bool,
    /// Element type for arrays.
    pub entry: Option<Box<DataType>>,
}

impl DataType {
    pub fn new(base: BaseDataType) -> Self {
        Self::named(base, base.name())
    }

    /// Creates a descriptor keeping the document's own spelling.
    pub fn named(base: BaseDataType, name: impl Into<String>) -> Self {
        Self {
            base,
            name: name.into(),
            is_array: false,
            entry: None,
        }
    }

    /// Creates a list descriptor over `entry`.
    pub fn array_of(entry: DataType) -> Self {
        Self {
            base: BaseDataType::List,
            name: format!("list[{}]", entry.name),
            is_array: true,
            entry: Some(Box::new(entry)),
        }
    }

    /// Resolves a type name; unknown names become [`BaseDataType::Custom`].
    pub fn from_name(name: &str) -> Self {
        let base = BaseDataType::from_name(name).unwrap_or(BaseDataType::Custom);
        Self::named(base, name.trim())
    }

    /// Fixed byte width; arrays never have one.
    pub fn size(&self) -> Option<usize> {
        if self.is_array {
            None
        } else {
            self.base.size()
        }
    }

    pub fn is_signed(&self) -> bool {
        !self.is_array && self.base.is_signed()
    }

    /// Whether min/max bounds on this type restrict a length or count.
    pub fn has_length(&self) -> bool {
        self.is_array
            || matches!(
                self.base,
                BaseDataType::String | BaseDataType::OctStr | BaseDataType::List
            )
    }

    /// `string` or `octstr`, where bare numbers mean a maximum length.
    pub fn is_string_like(&self) -> bool {
        !self.is_array && matches!(self.base, BaseDataType::String | BaseDataType::OctStr)
    }

    /// Element type of an array, `None` otherwise.
    pub fn entry_type(&self) -> Option<&DataType> {
        self.entry.as_deref()
    }

    pub fn is_temperature(&self) -> bool {
        self.temperature_scale().is_some()
    }

    /// Raw units per degree Celsius.
    pub fn temperature_scale(&self) -> Option<i64> {
        if self.is_array {
            return None;
        }
        match self.base {
            BaseDataType::Temperature | BaseDataType::TemperatureDifference => Some(100),
            BaseDataType::SignedTemperature | BaseDataType::UnsignedTemperature => Some(10),
            _ => None,
        }
    }

    pub fn is_percent(&self) -> bool {
        self.percent_scale().is_some()
    }

    /// Raw units per percent.
    pub fn percent_scale(&self) -> Option<i64> {
        if self.is_array {
            return None;
        }
        match self.base {
            BaseDataType::Percent => Some(1),
            BaseDataType::Percent100ths => Some(100),
            _ => None,
        }
    }

    /// Lowest encodable value of the type.
    ///
    /// Nullable signed types reserve their minimum for the null sentinel.
    /// Returns [`Extreme::Undefined`] for non-integer types.
    pub fn min_value(&self, nullable: bool) -> Extreme {
        let Some(bits) = self.integer_bits() else {
            return Extreme::Undefined;
        };
        match self.base {
            BaseDataType::Bool | BaseDataType::Percent | BaseDataType::Percent100ths => {
                return Extreme::uint(0, NumberFormat::Int);
            }
            _ => {}
        }
        if self.base.is_signed() {
            let min = if bits == 64 {
                i64::MIN
            } else {
                -(1i64 << (bits - 1))
            };
            Extreme::int(if nullable { min + 1 } else { min }, NumberFormat::Int)
        } else {
            Extreme::uint(0, NumberFormat::Int)
        }
    }

    /// Highest encodable value of the type.
    ///
    /// Nullable unsigned types reserve their maximum for the null sentinel.
    /// Returns [`Extreme::Undefined`] for non-integer types.
    pub fn max_value(&self, nullable: bool) -> Extreme {
        let Some(bits) = self.integer_bits() else {
            return Extreme::Undefined;
        };
        match self.base {
            BaseDataType::Bool => return Extreme::uint(1, NumberFormat::Int),
            BaseDataType::Percent => return Extreme::uint(100, NumberFormat::Int),
            BaseDataType::Percent100ths => return Extreme::uint(10_000, NumberFormat::Int),
            _ => {}
        }
        if self.base.is_signed() {
            let max = if bits == 64 {
                i64::MAX
            } else {
                (1i64 << (bits - 1)) - 1
            };
            Extreme::int(max, NumberFormat::Int)
        } else {
            let max = if bits == 64 {
                u64::MAX
            } else {
                (1u64 << bits) - 1
            };
            Extreme::uint(if nullable { max - 1 } else { max }, NumberFormat::Int)
        }
    }

    fn integer_bits(&self) -> Option<u32> {
        if self.is_array || self.base.is_float() {
            return None;
        }
        self.size().map(|bytes| bytes as u32 * 8)
    }
}

impl From<BaseDataType> for DataType {
    fn from(base: BaseDataType) -> Self {
        DataType::new(base)
    }
}
