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

//! Crate unit tests.

use super::*;
use rust_decimal::Decimal;

fn first_caret_column(pointer: &str) -> Option<usize> {
    pointer.chars().position(|ch| ch == '^').map(|idx| idx + 1)
}

fn int(value: i64) -> Extreme {
    Extreme::int(value, NumberFormat::Int)
}

fn typed(base: BaseDataType) -> (DataType, FieldTable) {
    let dt = DataType::new(base);
    let ctx = FieldTable::new().with_data_type(dt.clone());
    (dt, ctx)
}

fn bounds(constraint: &Constraint, ctx: &dyn Context) -> (Extreme, Extreme) {
    (constraint.min(ctx), constraint.max(ctx))
}

fn assert_generic(source: &str) {
    let constraint = parse(source);
    assert_eq!(
        constraint,
        Constraint::Generic(source.to_string()),
        "'{source}' should fall back to generic text"
    );
}

#[test]
fn temperature_range_evaluates_to_hex_tagged_raw_units() {
    let (dt, ctx) = typed(BaseDataType::Temperature);
    let constraint = parse_typed("-2.5°C to 2.5°C", Some(&dt));

    let (min, max) = bounds(&constraint, &ctx);
    assert_eq!(min, Extreme::int(-250, NumberFormat::Hex));
    assert_eq!(max, Extreme::int(250, NumberFormat::Hex));
    assert_eq!(min.zap_string(Some(&dt)), "0xFF06");
    assert_eq!(max.zap_string(Some(&dt)), "0x00FA");

    assert_eq!(constraint.ascii_doc_string(Some(&dt)), "-2.5°C to 2.5°C");
    assert_eq!(constraint.data_model_string(Some(&dt)), "-250 to 250");
}

#[test]
fn eight_bit_temperatures_scale_by_ten() {
    let (dt, ctx) = typed(BaseDataType::SignedTemperature);
    let constraint = parse_typed("-5°C to 5°C", Some(&dt));

    let (min, max) = bounds(&constraint, &ctx);
    assert_eq!(min.zap_string(Some(&dt)), "0xCE");
    assert_eq!(max.zap_string(Some(&dt)), "0x32");
    assert_eq!(constraint.data_model_string(Some(&dt)), "-50 to 50");
}

#[test]
fn temperature_without_unit_type_is_unscaled() {
    let constraint = parse("0°C to 30°C");
    let ctx = FieldTable::new();
    assert_eq!(constraint.max(&ctx), Extreme::int(30, NumberFormat::Hex));
    assert_eq!(constraint.data_model_string(None), "0 to 30");
}

#[test]
fn percent_hundredths_scale_and_keep_two_decimals() {
    let (dt, ctx) = typed(BaseDataType::Percent100ths);
    let constraint = parse_typed("0.5% to 99.99%", Some(&dt));

    assert_eq!(bounds(&constraint, &ctx), (int(50), int(9999)));
    assert_eq!(constraint.ascii_doc_string(Some(&dt)), "0.50% to 99.99%");
    assert_eq!(constraint.data_model_string(Some(&dt)), "50 to 9999");

    let Constraint::Range { min, .. } = &constraint else {
        panic!("expected range, got {constraint:?}");
    };
    assert_eq!(
        *min,
        Limit::Percent {
            value: Decimal::new(5, 1),
            hundredths: true,
        }
    );
}

#[test]
fn whole_percent_renders_without_fraction() {
    let (dt, ctx) = typed(BaseDataType::Percent);
    let constraint = parse_typed("0% to 100%", Some(&dt));
    assert_eq!(bounds(&constraint, &ctx), (int(0), int(100)));
    assert_eq!(constraint.ascii_doc_string(Some(&dt)), "0% to 100%");
    assert_eq!(constraint.data_model_string(Some(&dt)), "0 to 100");
}

#[test]
fn max_chars_on_string_is_a_length_bound() {
    let (dt, ctx) = typed(BaseDataType::String);
    let constraint = parse_typed("max 32 chars", Some(&dt));

    assert_eq!(
        constraint,
        Constraint::Max {
            limit: Limit::Int(32),
            measure: Measure::Length,
        }
    );
    assert_eq!(constraint.max(&ctx), int(32));
    assert_eq!(constraint.min(&ctx), Extreme::Undefined);
    assert_eq!(constraint.ascii_doc_string(Some(&dt)), "max 32");
}

#[test]
fn bare_number_on_string_types_means_max_length() {
    for base in [BaseDataType::String, BaseDataType::OctStr] {
        let dt = DataType::new(base);
        assert_eq!(
            parse_typed("32", Some(&dt)),
            Constraint::Max {
                limit: Limit::Int(32),
                measure: Measure::Length,
            }
        );
        assert_eq!(
            parse_typed("-1", Some(&dt)),
            Constraint::Exact(Limit::Int(-1))
        );
    }

    let dt = DataType::new(BaseDataType::UInt8);
    assert_eq!(
        parse_typed("32", Some(&dt)),
        Constraint::Exact(Limit::Int(32))
    );
}

#[test]
fn bound_measure_follows_data_type() {
    let list = DataType::array_of(DataType::new(BaseDataType::String));
    let string = DataType::new(BaseDataType::String);
    let number = DataType::new(BaseDataType::UInt16);

    let measure = |dt: &DataType| match parse_typed("min 1", Some(dt)) {
        Constraint::Min { measure, .. } => measure,
        other => panic!("expected min, got {other:?}"),
    };
    assert_eq!(measure(&list), Measure::Count);
    assert_eq!(measure(&string), Measure::Length);
    assert_eq!(measure(&number), Measure::Value);
}

#[test]
fn bracketed_entry_builds_list_governed_by_outer_count() {
    let dt = DataType::array_of(DataType::new(BaseDataType::UInt8));
    let ctx = FieldTable::new().with_data_type(dt.clone());
    let constraint = parse_typed("16[2]", Some(&dt));

    assert_eq!(
        constraint,
        Constraint::List {
            outer: Box::new(Constraint::Exact(Limit::Int(16))),
            entry: Box::new(Constraint::Exact(Limit::Int(2))),
        }
    );
    assert_eq!(bounds(&constraint, &ctx), (int(16), int(16)));
    assert_eq!(constraint.ascii_doc_string(Some(&dt)), "16[2]");
}

#[test]
fn nested_list_entry_uses_entry_type_semantics() {
    let dt = DataType::array_of(DataType::new(BaseDataType::String));
    let constraint = parse_typed("max 10[max 50]", Some(&dt));

    assert_eq!(
        constraint,
        Constraint::List {
            outer: Box::new(Constraint::Max {
                limit: Limit::Int(10),
                measure: Measure::Count,
            }),
            entry: Box::new(Constraint::Max {
                limit: Limit::Int(50),
                measure: Measure::Length,
            }),
        }
    );
    assert_eq!(constraint.ascii_doc_string(Some(&dt)), "max 10[max 50]");
}

#[test]
fn null_is_a_sentinel_distinct_from_undefined_and_zero() {
    let ctx = FieldTable::new();
    let constraint = parse("null");
    let (min, max) = bounds(&constraint, &ctx);

    assert!(min.is_null());
    assert!(max.is_null());
    assert!(min.defined());
    assert_ne!(min, Extreme::Undefined);
    assert_ne!(min, int(0));
    assert_eq!(min.zap_string(None), "null");
}

#[test]
fn unresolved_references_are_undefined_and_render_empty() {
    let (dt, ctx) = typed(BaseDataType::UInt16);
    let constraint = parse_typed(
        "InstalledOpenLimitLift to InstalledClosedLimitLift",
        Some(&dt),
    );

    let (min, max) = bounds(&constraint, &ctx);
    assert_eq!(min, Extreme::Undefined);
    assert_eq!(max, Extreme::Undefined);
    assert_eq!(min.zap_string(Some(&dt)), "");
    assert_eq!(max.zap_string(Some(&dt)), "");
    assert_eq!(
        constraint.identifiers(),
        vec![
            "InstalledOpenLimitLift".to_string(),
            "InstalledClosedLimitLift".to_string()
        ]
    );
}

#[test]
fn mutually_referencing_fields_resolve_through_one_level() {
    let min_text = "1 to MaxMeasuredValue - 1";
    let max_text = "MinMeasuredValue + 1 to 65534";
    let ctx = FieldTable::new()
        .with_data_type(DataType::new(BaseDataType::UInt16))
        .with_field("MinMeasuredValue", parse(min_text))
        .with_field("MaxMeasuredValue", parse(max_text));

    let min_field = parse(min_text);
    let max_field = parse(max_text);
    assert_eq!(bounds(&min_field, &ctx), (int(1), int(65533)));
    assert_eq!(bounds(&max_field, &ctx), (int(2), int(65534)));
}

#[test]
fn reference_cycles_terminate_as_undefined() {
    let ctx = FieldTable::new()
        .with_field("A", parse("B"))
        .with_field("B", parse("A"));

    let constraint = parse("A");
    assert_eq!(constraint.min(&ctx), Extreme::Undefined);
    assert_eq!(constraint.max(&ctx), Extreme::Undefined);
}

#[test]
fn resolution_path_is_scoped_to_each_branch_and_call() {
    let ctx = FieldTable::new().with_field("Step", parse("5"));
    let constraint = parse("Step + Step");

    assert_eq!(constraint.max(&ctx), int(10));
    // A second call starts from a fresh path.
    assert_eq!(constraint.max(&ctx), int(10));
}

#[test]
fn entity_values_take_precedence_over_referenced_constraints() {
    let ctx = FieldTable::new()
        .with_entity_value("Mode.Max", int(7))
        .with_field("Mode.Max", parse("100"));
    let constraint = parse("0 to Mode.Max");
    assert_eq!(constraint.max(&ctx), int(7));
    assert_eq!(constraint.identifiers(), vec!["Mode.Max".to_string()]);
}

#[test]
fn identifier_defaults_come_from_fallback() {
    let ctx = FieldTable::new().with_default("OnLevel", int(3));
    assert_eq!(parse("OnLevel").default(&ctx), int(3));
    // Fallback also stands in for unknown bounds.
    assert_eq!(parse("OnLevel").max(&ctx), int(3));
    assert_eq!(parse("0 to 5").default(&ctx), Extreme::Undefined);
    assert_eq!(parse("5").default(&ctx), int(5));
}

#[test]
fn references_and_tags_resolve_by_name() {
    let ctx = FieldTable::new()
        .with_entity_value("ref_MaxPower", int(1500))
        .with_entity_value("Kitchen", int(4));

    let reference = parse("0 to <<ref_MaxPower, Maximum power>>");
    assert_eq!(reference.max(&ctx), int(1500));
    assert_eq!(
        reference.ascii_doc_string(None),
        "0 to <<ref_MaxPower, Maximum power>>"
    );
    assert_eq!(reference.data_model_string(None), "0 to Maximum power");
    assert_eq!(
        parse("<<ref_MaxPower>>").data_model_string(None),
        "MaxPower"
    );

    let tag = parse("#Kitchen");
    assert_eq!(tag.max(&ctx), int(4));
    assert_eq!(tag.ascii_doc_string(None), "#Kitchen");
    assert_eq!(tag.data_model_string(None), "Kitchen");
}

#[test]
fn math_expressions_follow_operand_signedness() {
    let ctx = FieldTable::new();
    let max = |text: &str| parse(text).max(&ctx);

    assert_eq!(max("3 - 5"), int(-2));
    assert_eq!(max("7 / 2"), int(3));
    assert_eq!(max("2 + 3 * 4"), int(14));
    assert_eq!(max("(2 + 3) * 4"), int(20));
    assert_eq!(max("10 - 3 - 2"), int(5));
    assert_eq!(max("0x10 + 0x01"), Extreme::uint(0x11, NumberFormat::Hex));
    // Unsigned underflow falls back to signed space.
    assert_eq!(max("0x03 - 0x05"), Extreme::int(-2, NumberFormat::Hex));
    // Mixed formats combine to `Auto`.
    assert_eq!(max("0xFF - 1"), Extreme::int(254, NumberFormat::Auto));
    assert_eq!(max("1 / 0"), Extreme::Undefined);
    assert_eq!(max("9223372036854775807 + 1"), Extreme::Undefined);
    assert_eq!(max("null + 1"), Extreme::Undefined);
}

#[test]
fn math_renders_parenthesised_except_top_level_data_model() {
    let constraint = parse("MinMeasuredValue + 1 to 65534");
    assert_eq!(
        constraint.ascii_doc_string(None),
        "(MinMeasuredValue + 1) to 65534"
    );
    assert_eq!(
        constraint.data_model_string(None),
        "MinMeasuredValue + 1 to 65534"
    );

    let nested = parse("max (A + 1) * 2");
    assert_eq!(nested.ascii_doc_string(None), "max ((A + 1) * 2)");
    assert_eq!(nested.data_model_string(None), "max (A + 1) * 2");
}

#[test]
fn superscript_powers_use_big_integer_magnitude() {
    let ctx = FieldTable::new();
    let constraint = parse("-2^62^ to 2^62^");

    assert_eq!(
        bounds(&constraint, &ctx),
        (int(-(1i64 << 62)), int(1i64 << 62))
    );
    assert_eq!(constraint.ascii_doc_string(None), "-2^62^ to 2^62^");
    assert_eq!(
        constraint.data_model_string(None),
        "-4611686018427387904 to 4611686018427387904"
    );

    assert_eq!(parse("2^63^").max(&ctx), Extreme::Undefined);
    assert_eq!(parse("10^100^").max(&ctx), Extreme::Undefined);
    assert_eq!(parse("2^-1^").max(&ctx), Extreme::Undefined);
    assert_eq!(parse("1^1000^").max(&ctx), int(1));
    assert_eq!(parse("2^63^").data_model_string(None), "2^63");
}

#[test]
fn logical_union_and_intersection_bounds() {
    let ctx = FieldTable::new()
        .with_entity_range("Wide", int(0), int(100))
        .with_entity_range("Narrow", int(10), int(50));

    for union in ["Wide | Narrow", "Wide or Narrow", "Wide ^ Narrow"] {
        assert_eq!(bounds(&parse(union), &ctx), (int(0), int(100)), "{union}");
    }
    for intersection in ["Wide & Narrow", "Wide and Narrow"] {
        assert_eq!(
            bounds(&parse(intersection), &ctx),
            (int(10), int(50)),
            "{intersection}"
        );
    }
}

#[test]
fn logical_not_changes_rendering_only() {
    let ctx = FieldTable::new();
    let plain = parse("1 | 5 | 3");
    let negated = parse("not 1 | 5 | 3");

    assert_eq!(bounds(&plain, &ctx), (int(1), int(5)));
    assert_eq!(bounds(&negated, &ctx), bounds(&plain, &ctx));
    assert_eq!(negated.ascii_doc_string(None), "not 1 | 5 | 3");
    assert_eq!(parse("!7").ascii_doc_string(None), "not 7");
    assert_eq!(parse("!7").max(&ctx), int(7));
}

#[test]
fn changing_logical_operator_nests_the_chain() {
    let constraint = parse("A | B & C");
    let Constraint::Exact(Limit::Logical { op, left, right, .. }) = &constraint else {
        panic!("expected logical limit, got {constraint:?}");
    };
    assert_eq!(*op, LogicalOp::And);
    assert!(matches!(
        left.as_ref(),
        Limit::Logical {
            op: LogicalOp::Or,
            ..
        }
    ));
    assert_eq!(right.len(), 1);
    assert_eq!(constraint.ascii_doc_string(None), "(A | B) & C");
}

#[test]
fn sets_take_union_of_members() {
    let ctx = FieldTable::new();
    let constraint = parse("0, 5 to 10");

    assert!(matches!(&constraint, Constraint::Set(members) if members.len() == 2));
    assert_eq!(bounds(&constraint, &ctx), (int(0), int(10)));
    assert_eq!(constraint.default(&ctx), int(0));
    assert_eq!(constraint.ascii_doc_string(None), "0, 5 to 10");

    let with_unknown = parse("Unknown, 3 to 4");
    assert_eq!(bounds(&with_unknown, &ctx), (int(3), int(4)));
}

#[test]
fn hex_literals_pad_to_data_type_width() {
    let (dt, ctx) = typed(BaseDataType::UInt16);
    let constraint = parse_typed("0x0A to 0xFF", Some(&dt));

    assert_eq!(constraint.ascii_doc_string(Some(&dt)), "0x000A to 0x00FF");
    assert_eq!(constraint.ascii_doc_string(None), "0x0A to 0xFF");
    assert_eq!(constraint.max(&ctx).zap_string(Some(&dt)), "0x00FF");

    let wide = DataType::new(BaseDataType::UInt64);
    assert_eq!(
        constraint.max(&ctx).zap_string(Some(&wide)),
        "0x00000000000000FF"
    );
    assert_eq!(constraint.max(&ctx).zap_string(None), "0xFF");
    assert_eq!(constraint.max(&ctx).data_model_string(Some(&dt)), "0x00FF");
}

#[test]
fn hex_wider_than_data_type_keeps_all_digits() {
    let (dt, ctx) = typed(BaseDataType::UInt8);
    let constraint = parse_typed("0 to 0x1FF", Some(&dt));
    let rendered = constraint.ascii_doc_string(Some(&dt));
    assert_eq!(rendered, "0 to 0x01FF");

    let max = constraint.max(&ctx);
    assert_eq!(max, Extreme::uint(0x1FF, NumberFormat::Hex));
    assert_eq!(max.zap_string(Some(&dt)), "0x01FF");
    assert_eq!(parse_typed(&rendered, Some(&dt)).max(&ctx), max);

    let int8 = DataType::new(BaseDataType::Int8);
    assert_eq!(
        Extreme::int(300, NumberFormat::Hex).zap_string(Some(&int8)),
        "0x012C"
    );
    // Too negative for one byte: full two's-complement pattern.
    assert_eq!(
        Extreme::int(-300, NumberFormat::Hex).zap_string(Some(&int8)),
        "0xFFFFFFFFFFFFFED4"
    );
}

#[test]
fn fractional_percent_keeps_every_written_digit() {
    let (dt, ctx) = typed(BaseDataType::Percent100ths);
    let constraint = parse_typed("0.125% to 1.5%", Some(&dt));

    assert_eq!(constraint.ascii_doc_string(Some(&dt)), "0.125% to 1.50%");
    assert_eq!(bounds(&constraint, &ctx), (int(12), int(150)));
    assert_eq!(
        parse_typed("12.50%", Some(&dt)).ascii_doc_string(Some(&dt)),
        "12.50%"
    );
}

#[test]
fn deep_nesting_falls_back_to_generic() {
    let ctx = FieldTable::new();
    let at_limit = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    assert_eq!(parse(&at_limit).max(&ctx), int(1));
    assert_generic(&format!("{}1{}", "(".repeat(65), ")".repeat(65)));

    let cases = [
        ("unclosed parentheses", "(".repeat(10_000)),
        (
            "balanced parentheses",
            format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000)),
        ),
        ("character counts", format!("max 1{}", "{1".repeat(10_000))),
        (
            "list entries",
            format!("{}2{}", "16[".repeat(10_000), "]".repeat(10_000)),
        ),
    ];
    for (case_name, source) in &cases {
        assert!(parse(source).is_generic(), "{case_name}: expected generic");
        let err = try_parse(source, None).expect_err("parse should fail");
        assert!(err.column > 0, "{case_name}: expected non-zero column");
    }
}

#[test]
fn equality_is_structural() {
    let ctx = FieldTable::new();
    let hex = parse("0x0A");
    let decimal = parse("10");

    assert_ne!(hex, decimal);
    assert_eq!(
        hex.max(&ctx).compare(&decimal.max(&ctx)),
        Some(std::cmp::Ordering::Equal)
    );
    assert_eq!(parse("0 to 10"), parse("0   to   10"));
}

#[test]
fn clones_are_independent() {
    let original = parse("0 to 10");
    let mut specialised = original.clone();
    if let Constraint::Range { max, .. } = &mut specialised {
        *max = Limit::Int(20);
    }

    let ctx = FieldTable::new();
    assert_eq!(original.max(&ctx), int(10));
    assert_eq!(specialised.max(&ctx), int(20));
    assert_ne!(original, specialised);
}

#[test]
fn reserved_words_cover_the_whole_input() {
    assert_eq!(
        parse("all"),
        Constraint::All {
            value: "all".to_string()
        }
    );
    assert_eq!(
        parse(" ANY "),
        Constraint::All {
            value: "ANY".to_string()
        }
    );
    assert_eq!(
        parse("empty"),
        Constraint::All {
            value: "empty".to_string()
        }
    );
    assert_eq!(parse("desc"), Constraint::Described);
    assert_eq!(parse("desc").ascii_doc_string(None), "desc");
    assert_eq!(parse("none").ascii_doc_string(None), "none");
    assert_eq!(parse("all").max(&FieldTable::new()), Extreme::Undefined);
}

#[test]
fn keyword_literals_parse_inside_expressions() {
    let ctx = FieldTable::new();
    assert_eq!(parse("0 to empty").max(&ctx), Extreme::Empty);
    assert_eq!(parse("true").max(&ctx), int(1));
    assert_eq!(parse("false").default(&ctx), int(0));
    assert_eq!(
        parse("unspecified"),
        Constraint::Exact(Limit::Unspecified)
    );
    assert_eq!(
        parse("MS"),
        Constraint::Exact(Limit::Manufacturer("MS".to_string()))
    );
    assert_eq!(parse("\"on\"").ascii_doc_string(None), "\"on\"");
    assert_eq!(parse("0 to empty").max(&ctx).zap_string(None), "");
    assert_eq!(parse("0 to empty").max(&ctx).data_model_string(None), "empty");
}

#[test]
fn status_code_names_evaluate_to_their_codes() {
    let ctx = FieldTable::new();
    let constraint = parse("CONSTRAINT_ERROR");
    assert_eq!(
        constraint,
        Constraint::Exact(Limit::StatusCode("CONSTRAINT_ERROR".to_string()))
    );
    assert_eq!(constraint.max(&ctx), Extreme::uint(0x87, NumberFormat::Hex));
    assert_eq!(status_code("SUCCESS"), Some(0));
    assert_eq!(status_code("success"), None);
    // Field access keeps status-like names as identifiers.
    assert!(matches!(
        parse("FAILURE.Code"),
        Constraint::Exact(Limit::Identifier { .. })
    ));
}

#[test]
fn character_limits_bound_by_bytes() {
    let (dt, ctx) = typed(BaseDataType::String);
    let constraint = parse_typed("max 32{8}", Some(&dt));
    assert_eq!(constraint.max(&ctx), int(32));
    assert_eq!(constraint.ascii_doc_string(Some(&dt)), "max 32{8}");
}

#[test]
fn unrecognised_text_falls_back_to_generic() {
    for source in [
        "",
        "   ",
        "garbage!",
        "see below",
        "1.5",
        "99999999999999999999",
        "0xFFFFFFFFFFFFFFFFFF",
        "0°C to 100%",
        "min",
        "to 5",
        "1 to",
        "(1 + 2",
        "<<>>",
        "max 5 chars chars",
    ] {
        assert_generic(source);
    }
    assert!(parse("garbage!").is_generic());
    assert_eq!(parse("garbage!").ascii_doc_string(None), "garbage!");
    assert_eq!(parse("garbage!").max(&FieldTable::new()), Extreme::Undefined);
}

#[test]
fn try_parse_reports_column_and_caret() {
    let source = "1 to";
    let err = try_parse(source, None).expect_err("parse should fail");

    assert!(err.column > 0);
    assert!(err.message.contains("Syntax error"));
    assert_eq!(err.snippet, source);
    assert_eq!(first_caret_column(&err.pointer), Some(err.column));
    assert!(err.to_string().contains("at column"));

    assert_eq!(
        try_parse("0 to 10", None),
        Ok(Constraint::Range {
            min: Limit::Int(0),
            max: Limit::Int(10),
        })
    );
}

#[test]
fn parse_error_without_location_is_bare_message() {
    let err = ParseError::message_only("Incomplete input");
    assert_eq!(err.to_string(), "Incomplete input");
}

#[test]
fn data_type_ranges_reserve_null_sentinels() {
    let int16 = DataType::new(BaseDataType::Int16);
    assert_eq!(int16.min_value(false), int(-32768));
    assert_eq!(int16.min_value(true), int(-32767));
    assert_eq!(int16.max_value(true), int(32767));

    let uint8 = DataType::new(BaseDataType::UInt8);
    assert_eq!(uint8.max_value(false), Extreme::uint(255, NumberFormat::Int));
    assert_eq!(uint8.max_value(true), Extreme::uint(254, NumberFormat::Int));

    let int64 = DataType::new(BaseDataType::Int64);
    assert_eq!(int64.min_value(false), int(i64::MIN));

    assert_eq!(
        DataType::new(BaseDataType::String).max_value(false),
        Extreme::Undefined
    );
    assert_eq!(
        DataType::new(BaseDataType::Percent100ths).max_value(false),
        Extreme::uint(10_000, NumberFormat::Int)
    );
}

#[test]
fn data_type_names_resolve_case_insensitively() {
    let dt = DataType::from_name("Temperature");
    assert_eq!(dt.base, BaseDataType::Temperature);
    assert_eq!(dt.size(), Some(2));
    assert!(dt.is_signed());
    assert!(dt.is_temperature());

    assert_eq!(DataType::from_name("WindowCoveringType").base, BaseDataType::Custom);
    assert_eq!(BaseDataType::from_name("UINT24"), Some(BaseDataType::UInt24));

    let list = DataType::array_of(DataType::new(BaseDataType::UInt8));
    assert_eq!(list.size(), None);
    assert!(list.has_length());
    assert_eq!(list.entry_type().map(|dt| dt.base), Some(BaseDataType::UInt8));
}

#[test]
fn effective_bounds_fill_open_sides_from_data_type() {
    let dt = DataType::new(BaseDataType::UInt8);
    let ctx = FieldTable::new().with_data_type(dt.clone());
    let constraint = parse_typed("max 100", Some(&dt));

    assert_eq!(constraint.min(&ctx), Extreme::Undefined);
    assert_eq!(constraint.effective_min(&ctx), Extreme::uint(0, NumberFormat::Int));
    assert_eq!(constraint.effective_max(&ctx), int(100));

    let nullable = FieldTable::new().with_data_type(dt).with_nullable(true);
    assert_eq!(
        parse("min 1").effective_max(&nullable),
        Extreme::uint(254, NumberFormat::Int)
    );
}

#[test]
fn extreme_ordering_spans_signed_and_unsigned() {
    let big = Extreme::uint(u64::MAX, NumberFormat::Int);
    let negative = int(-1);

    assert_eq!(min_extreme(big, negative), negative);
    assert_eq!(max_extreme(big, negative), big);
    assert_eq!(min_extreme(Extreme::Undefined, negative), negative);
    assert_eq!(max_extreme(Extreme::Null, int(3)), int(3));
    assert_eq!(max_extreme(Extreme::Null, Extreme::Empty), Extreme::Null);
    assert_eq!(negative.as_u64(), None);
    assert_eq!(big.as_i64(), None);
}

#[test]
fn negative_hex_masks_to_data_type_width() {
    let int8 = DataType::new(BaseDataType::Int8);
    assert_eq!(
        Extreme::int(-1, NumberFormat::Hex).zap_string(Some(&int8)),
        "0xFF"
    );
    assert_eq!(
        Extreme::int(-1, NumberFormat::Hex).zap_string(None),
        "0xFFFFFFFFFFFFFFFF"
    );
    assert_eq!(Extreme::int(-5, NumberFormat::Auto).zap_string(Some(&int8)), "-5");
}

#[test]
fn source_form_reparses_to_the_same_bounds() {
    let (dt, ctx) = typed(BaseDataType::Int16);
    let ctx = ctx
        .with_entity_range("Low", int(-10), int(-5))
        .with_entity_range("High", int(5), int(10));

    for source in [
        "-100 to 100",
        "0x0A to 0x7F",
        "Low + 1 to High * 2",
        "Low | High",
        "not Low & High",
        "0, 5 to 10",
        "-2^14^ to 2^14^",
        "min (Low - 1) / 2",
        "null",
    ] {
        let first = parse_typed(source, Some(&dt));
        assert!(!first.is_generic(), "'{source}' should parse");
        let rendered = first.ascii_doc_string(Some(&dt));
        let second = parse_typed(&rendered, Some(&dt));
        assert_eq!(bounds(&first, &ctx), bounds(&second, &ctx), "{source} -> {rendered}");
        assert_eq!(first.default(&ctx), second.default(&ctx), "{source} -> {rendered}");
    }
}

#[test]
fn shared_constraints_evaluate_across_threads() {
    let constraint = std::sync::Arc::new(parse("MinLevel + 1 to MaxLevel"));
    let handles: Vec<_> = (0..4i64)
        .map(|offset| {
            let constraint = std::sync::Arc::clone(&constraint);
            std::thread::spawn(move || {
                let ctx = FieldTable::new()
                    .with_field("MinLevel", parse(&offset.to_string()))
                    .with_field("MaxLevel", parse("MinLevel + 10"));
                bounds(&constraint, &ctx)
            })
        })
        .collect();

    for (offset, handle) in handles.into_iter().enumerate() {
        let offset = offset as i64;
        let (min, max) = handle.join().expect("evaluation thread panicked");
        assert_eq!(min, int(offset + 1));
        assert_eq!(max, int(offset + 10));
    }
}
