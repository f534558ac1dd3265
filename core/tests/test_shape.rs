// Shape model and schema text:
//
// * parse / display round-trip in canonical form
// * unknown kinds are UnsupportedShape, structural errors are InvalidSchema
// * typed records report the same shape their schema text describes
// * JSON form of shapes is stable

#[cfg(test)]
mod tests {
    use obi_core::prelude::*;

    #[derive(Debug, Default, PartialEq)]
    struct Inner {
        a: i8,
        b: i8,
    }
    impl_obi_record!(Inner { a: i8, b: i8 });

    #[derive(Debug, Default, PartialEq)]
    struct ExampleData {
        symbol: String,
        px: u64,
        inner: Inner,
        arr: Vec<i16>,
    }
    impl_obi_record!(ExampleData { symbol: String, px: u64, inner: Inner, arr: Vec<i16> });

    const EXAMPLE_SCHEMA: &str = "{symbol:string,px:u64,inner:{a:i8,b:i8},arr:[i16]}";

// # ✅ 1. Parsing

    #[test]
    fn parse_leaves() {
        assert_eq!(Shape::parse("u8").unwrap(), Shape::Int(IntKind::U8));
        assert_eq!(Shape::parse("i64").unwrap(), Shape::Int(IntKind::I64));
        assert_eq!(Shape::parse("string").unwrap(), Shape::Text);
        assert_eq!(Shape::parse("bytes").unwrap(), Shape::Bytes);
    }

    #[test]
    fn parse_nested_record() {
        let shape = Shape::parse(EXAMPLE_SCHEMA).unwrap();
        let expected = Shape::record(vec![
            Field::new("symbol", Shape::Text),
            Field::new("px", Shape::Int(IntKind::U64)),
            Field::new(
                "inner",
                Shape::record(vec![
                    Field::new("a", Shape::Int(IntKind::I8)),
                    Field::new("b", Shape::Int(IntKind::I8)),
                ]),
            ),
            Field::new("arr", Shape::sequence(Shape::Int(IntKind::I16))),
        ]);
        assert_eq!(shape, expected);
    }

    #[test]
    fn parse_ignores_whitespace() {
        let spaced = " { symbol : string ,\n px : u64 , inner : { a : i8 , b : i8 } , arr : [ i16 ] } ";
        assert_eq!(Shape::parse(spaced).unwrap(), Shape::parse(EXAMPLE_SCHEMA).unwrap());
    }

    #[test]
    fn display_is_canonical_and_roundtrips() {
        let shape: Shape = EXAMPLE_SCHEMA.parse().unwrap();
        assert_eq!(shape.to_string(), EXAMPLE_SCHEMA);

        for text in ["u16", "[[bytes]]", "{}", "{x:[{y:string}]}", "[{}]"] {
            assert_eq!(Shape::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn typed_record_shape_matches_schema_text() {
        assert_eq!(ExampleData::shape(), Shape::parse(EXAMPLE_SCHEMA).unwrap());
        assert_eq!(<Vec<String>>::shape().to_string(), "[string]");
        assert_eq!(<bytes::Bytes as ObiSchema>::shape(), Shape::Bytes);
        assert_eq!(<Vec<u8>>::shape().to_string(), "[u8]");
    }

// # ❌ 2. Parse failures

    #[test]
    fn unknown_widths_are_unsupported() {
        for text in ["u24", "i128", "u0", "u"] {
            assert!(
                matches!(Shape::parse(text), Err(CodecError::UnsupportedShape(_))),
                "{} should be unsupported",
                text
            );
        }
    }

    #[test]
    fn unknown_words_are_unsupported() {
        assert!(matches!(Shape::parse("f32"), Err(CodecError::UnsupportedShape(_))));
        assert!(matches!(Shape::parse("{ok:bool}"), Err(CodecError::UnsupportedShape(_))));
    }

    #[test]
    fn int_widths_must_be_spelled_exactly() {
        for text in ["u08", "i0016", "u032", "i064", "{a:u08}"] {
            assert!(
                matches!(Shape::parse(text), Err(CodecError::UnsupportedShape(_))),
                "{} should be unsupported",
                text
            );
        }
    }

    #[test]
    fn structural_errors_report_offset() {
        match Shape::parse("{a:u8 b:u8}") {
            Err(CodecError::InvalidSchema { pos, .. }) => assert_eq!(pos, 6),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(Shape::parse("[u8"), Err(CodecError::InvalidSchema { .. })));
        assert!(matches!(Shape::parse("{a:u8,}"), Err(CodecError::InvalidSchema { .. })));
        assert!(matches!(Shape::parse(""), Err(CodecError::InvalidSchema { .. })));
        assert!(matches!(Shape::parse("u8 u8"), Err(CodecError::InvalidSchema { .. })));
        assert!(matches!(Shape::parse("{:u8}"), Err(CodecError::InvalidSchema { .. })));
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        match Shape::parse("{a:u8,a:u16}") {
            Err(CodecError::InvalidSchema { pos, reason }) => {
                assert_eq!(pos, 6);
                assert!(reason.contains("duplicate"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn deep_nesting_is_bounded() {
        let deep = format!("{}u8{}", "[".repeat(100), "]".repeat(100));
        assert!(matches!(
            Shape::parse(&deep),
            Err(CodecError::DepthExceeded { max: 64, .. })
        ));
        assert_eq!(Shape::parse_with_depth(&deep, 100).unwrap().depth(), 100);
    }

// # ✅ 3. Shape metrics

    #[test]
    fn depth_and_sizes() {
        let shape = Shape::parse(EXAMPLE_SCHEMA).unwrap();
        assert_eq!(shape.depth(), 2);
        assert_eq!(shape.fixed_size(), None);
        assert_eq!(shape.min_size(), 4 + 8 + 2 + 4);

        let fixed = Shape::parse("{a:u8,b:{c:i64,d:u16}}").unwrap();
        assert_eq!(fixed.fixed_size(), Some(11));
        assert_eq!(Shape::parse("{}").unwrap().fixed_size(), Some(0));
    }

    #[test]
    fn int_width_from_bits() {
        assert_eq!(IntWidth::from_bits(32).unwrap(), IntWidth::W32);
        assert_eq!(IntWidth::W64.size(), 8);
        assert!(matches!(IntWidth::from_bits(12), Err(CodecError::UnsupportedShape(_))));
        assert!(matches!(IntWidth::from_bits(1 << 12), Err(CodecError::UnsupportedShape(_))));
    }

// # ✅ 4. Script schemas and JSON form

    #[test]
    fn script_schema_roundtrip() {
        let text = "{symbol:string,multiplier:u64}/{px:u64}";
        let schema = ScriptSchema::parse(text).unwrap();
        assert_eq!(schema.input.depth(), 1);
        assert_eq!(schema.output, Shape::record(vec![Field::new("px", Shape::Int(IntKind::U64))]));
        assert_eq!(schema.to_string(), text);
    }

    #[test]
    fn script_schema_errors() {
        assert!(matches!(ScriptSchema::parse("{a:u8}"), Err(CodecError::InvalidSchema { .. })));
        assert!(matches!(ScriptSchema::parse("u8/u8/u8"), Err(CodecError::InvalidSchema { pos: 5, .. })));
        match ScriptSchema::parse("u8/[u8") {
            Err(CodecError::InvalidSchema { pos, .. }) => assert_eq!(pos, 6),
            other => panic!("unexpected result: {:?}", other),
        }
        match ScriptSchema::parse("{a:u8,a:u8}/u8") {
            Err(CodecError::InvalidSchema { pos, .. }) => assert_eq!(pos, 6),
            other => panic!("unexpected result: {:?}", other),
        }
        match ScriptSchema::parse("u8/{a:u8,a:u8}") {
            Err(CodecError::InvalidSchema { pos, .. }) => assert_eq!(pos, 9),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn script_schema_unsupported_offsets_are_absolute() {
        match ScriptSchema::parse("u8/u24") {
            Err(CodecError::UnsupportedShape(msg)) => assert!(msg.ends_with("at offset 3"), "{}", msg),
            other => panic!("unexpected result: {:?}", other),
        }
        match ScriptSchema::parse("u8/{a:u8,b:f32}") {
            Err(CodecError::UnsupportedShape(msg)) => assert!(msg.ends_with("at offset 11"), "{}", msg),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn shape_json_form() {
        let shape = Shape::parse("{id:u32,tags:[string]}").unwrap();
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "record",
                "fields": [
                    { "name": "id", "shape": { "kind": "int", "width": 32, "signed": false } },
                    { "name": "tags", "shape": { "kind": "sequence", "element": { "kind": "text" } } }
                ]
            })
        );
        let back: Shape = serde_json::from_value(json).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn shape_json_rejects_bad_width() {
        let bad = serde_json::json!({ "kind": "int", "width": 24, "signed": true });
        assert!(serde_json::from_value::<Shape>(bad).is_err());
    }
}
