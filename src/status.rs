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

//! Interaction-model status codes recognized as constraint literals.

const STATUS_CODES: &[(&str, u64)] = &[
    ("SUCCESS", 0x00),
    ("FAILURE", 0x01),
    ("INVALID_SUBSCRIPTION", 0x7D),
    ("UNSUPPORTED_ACCESS", 0x7E),
    ("UNSUPPORTED_ENDPOINT", 0x7F),
    ("INVALID_ACTION", 0x80),
    ("UNSUPPORTED_COMMAND", 0x81),
    ("INVALID_COMMAND", 0x85),
    ("UNSUPPORTED_ATTRIBUTE", 0x86),
    ("CONSTRAINT_ERROR", 0x87),
    ("UNSUPPORTED_WRITE", 0x88),
    ("RESOURCE_EXHAUSTED", 0x89),
    ("NOT_FOUND", 0x8B),
    ("UNREPORTABLE_ATTRIBUTE", 0x8C),
    ("INVALID_DATA_TYPE", 0x8D),
    ("UNSUPPORTED_READ", 0x8F),
    ("DATA_VERSION_MISMATCH", 0x92),
    ("TIMEOUT", 0x94),
    ("UNSUPPORTED_NODE", 0x9B),
    ("BUSY", 0x9C),
    ("ACCESS_RESTRICTED", 0x9D),
    ("UNSUPPORTED_CLUSTER", 0xC3),
    ("NO_UPSTREAM_SUBSCRIPTION", 0xC5),
    ("NEEDS_TIMED_INTERACTION", 0xC6),
    ("UNSUPPORTED_EVENT", 0xC7),
    ("PATHS_EXHAUSTED", 0xC8),
    ("TIMED_REQUEST_MISMATCH", 0xC9),
    ("FAILSAFE_REQUIRED", 0xCA),
    ("INVALID_IN_STATE", 0xCB),
    ("NO_COMMAND_RESPONSE", 0xCC),
];

/// Numeric value of a status code name (exact, upper-case spelling).
pub fn status_code(name: &str) -> Option<u64> {
    STATUS_CODES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, code)| *code)
}
