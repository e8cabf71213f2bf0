//! Fixture tests pinning the compact text grammar: bareness rules, container
//! attachment, guard behavior, decoder tolerance, and the format quirks.

use serde_cton::{cton, decode, encode, encode_with_options, CtonOptions, Error, Number, Value};

#[test]
fn test_bare_string_stays_bare() {
    let text = encode(&cton!({"a": "hello"})).unwrap();
    assert_eq!(text, "{a hello}");
}

#[test]
fn test_space_forces_quoting() {
    let text = encode(&cton!({"a": "hello world"})).unwrap();
    assert_eq!(text, "{a \"hello world\"}");
}

#[test]
fn test_container_attaches_to_key_without_space() {
    let text = encode(&cton!({"a": [1, 2]})).unwrap();
    assert_eq!(text, "{a[1 2]}");

    let text = encode(&cton!({"a": {"b": 1}})).unwrap();
    assert_eq!(text, "{a{b 1}}");
}

#[test]
fn test_empty_containers() {
    let text = encode(&cton!({"a": {}, "b": []})).unwrap();
    assert_eq!(text, "{a{} b[]}");
}

#[test]
fn test_unicode_strings_encode_bare() {
    let text = encode(&cton!({"greeting": "Bonjour"})).unwrap();
    assert_eq!(text, "{greeting Bonjour}");

    let text = encode(&cton!({"greeting": "caf\u{e9} cr\u{e8}me"})).unwrap();
    assert_eq!(text, "{greeting \"caf\u{e9} cr\u{e8}me\"}");

    let text = encode(&cton!({"cjk": "\u{4e16}\u{754c}"})).unwrap();
    assert_eq!(text, "{cjk \u{4e16}\u{754c}}");
}

#[test]
fn test_control_characters_force_quoting() {
    let text = encode(&cton!({"a": "line1\nline2"})).unwrap();
    assert_eq!(text, "{a \"line1\\nline2\"}");
}

#[test]
fn test_special_numbers_roundtrip_by_spelling() {
    let value = cton!({
        "nan": (f64::NAN),
        "inf": (f64::INFINITY),
        "ninf": (f64::NEG_INFINITY)
    });
    let text = encode(&value).unwrap();
    assert_eq!(text, "{nan NaN inf Infinity ninf -Infinity}");

    let back = decode(&text);
    let obj = back.as_object().unwrap();
    assert_eq!(obj.get("nan"), Some(&Value::Number(Number::NaN)));
    assert_eq!(obj.get("inf"), Some(&Value::Number(Number::Infinity)));
    assert_eq!(
        obj.get("ninf"),
        Some(&Value::Number(Number::NegativeInfinity))
    );
}

#[test]
fn test_whole_number_floats_roundtrip() {
    // `2.0` has no distinct spelling: it encodes as `2`, decodes as an
    // integer, and numeric equality on `Number` keeps the round-trip
    // invariant holding.
    let value = cton!([2.0]);
    let text = encode(&value).unwrap();
    assert_eq!(text, "[2]");
    let back = decode(&text);
    assert_eq!(back, value);
    assert_eq!(
        back.as_array().unwrap()[0],
        Value::Number(Number::Integer(2))
    );

    let value = cton!({"price": 10.0, "qty": 3.5});
    let text = encode(&value).unwrap();
    assert_eq!(text, "{price 10 qty 3.5}");
    assert_eq!(decode(&text), value);
}

#[test]
fn test_numeric_string_collision_resolves_by_parse() {
    // A string "1" encodes bare and decodes as the number 1: atom
    // classification is purely a successful numeric parse of the token text.
    let text = encode(&cton!({"1": "2"})).unwrap();
    assert_eq!(text, "{1 2}");

    let back = decode(&text);
    let obj = back.as_object().unwrap();
    assert_eq!(obj.get("1"), Some(&Value::Number(Number::Integer(2))));
}

#[test]
fn test_key_order_is_preserved() {
    let value = cton!({"z": 1, "a": 2, "m": 3});
    let text = encode(&value).unwrap();
    assert_eq!(text, "{z 1 a 2 m 3}");
    assert_eq!(decode(&text), value);
}

#[test]
fn test_roundtrip_of_mixed_tree() {
    let value = cton!({
        "id": 42,
        "name": "widget-7",
        "price": 9.5,
        "tags": ["new", "sale"],
        "dims": {"w": 3, "h": 4},
        "note": "needs assembly",
        "extra": null,
        "live": true
    });
    let text = encode(&value).unwrap();
    assert_eq!(
        text,
        "{id 42 name widget-7 price 9.5 tags[new sale] dims{w 3 h 4} \
         note \"needs assembly\" extra null live true}"
    );
    assert_eq!(decode(&text), value);
}

#[test]
fn test_depth_guard_exact_boundary() {
    // Five nested containers.
    let value = cton!([[[[[1]]]]]);

    let at_limit = CtonOptions::new().with_max_depth(5);
    assert!(encode_with_options(&value, &at_limit).is_ok());

    let below_limit = CtonOptions::new().with_max_depth(4);
    assert!(matches!(
        encode_with_options(&value, &below_limit),
        Err(Error::MaxDepthExceeded { max_depth: 4 })
    ));
}

#[test]
fn test_default_depth_limit_is_100() {
    let mut value = Value::Array(vec![Value::Number(Number::Integer(1))]);
    for _ in 0..99 {
        value = Value::Array(vec![value]);
    }
    // 100 nested arrays: exactly at the default limit.
    assert!(encode(&value).is_ok());

    let value = Value::Array(vec![value]);
    assert!(matches!(
        encode(&value),
        Err(Error::MaxDepthExceeded { max_depth: 100 })
    ));
}

#[test]
fn test_top_level_scalars_rejected() {
    for value in [
        Value::Null,
        Value::Bool(true),
        Value::from(3),
        Value::from("text"),
    ] {
        assert!(matches!(encode(&value), Err(Error::InvalidTopLevel(_))));
    }
}

#[test]
fn test_json_document_strings_embed_verbatim() {
    // The committed quirk fixture: interior quotes stay raw.
    let value = cton!({"payload": "{\"key\": \"value\"}"});
    let text = encode(&value).unwrap();
    assert_eq!(text, r#"{payload "{"key": "value"}"}"#);

    let value = cton!({"list": "[1, 2, 3]"});
    let text = encode(&value).unwrap();
    assert_eq!(text, r#"{list "[1, 2, 3]"}"#);
}

#[test]
fn test_quirky_embeds_do_not_panic_the_decoder() {
    // Round-tripping verbatim-embedded JSON is not promised; decoding it
    // must still produce some tree rather than fail.
    let text = r#"{payload "{"key": "value"}"}"#;
    let value = decode(text);
    assert!(value.is_object());
}

#[test]
fn test_non_json_quoted_strings_roundtrip() {
    let value = cton!({"a": "two words", "b": "tab\tseparated", "c": ""});
    let text = encode(&value).unwrap();
    assert_eq!(text, "{a \"two words\" b \"tab\\tseparated\" c \"\"}");
    assert_eq!(decode(&text), value);
}

#[test]
fn test_quoted_keys_decode_raw() {
    // Keys failing the narrow bare-key class are quoted on encode, and the
    // decoder keeps the raw token text, quotes included.
    let text = encode(&cton!({"snake_case": 1})).unwrap();
    assert_eq!(text, "{\"snake_case\" 1}");

    let back = decode(&text);
    let obj = back.as_object().unwrap();
    assert!(obj.contains_key("\"snake_case\""));
}

#[test]
fn test_truncated_input_degrades_to_partial_tree() {
    assert_eq!(decode("{a 1 b 2"), cton!({"a": 1, "b": 2}));
    assert_eq!(decode("[1 [2 3"), cton!([1, [2, 3]]));
    assert_eq!(decode("{a{b"), cton!({"a": {"b": null}}));
    assert_eq!(decode("{outer{inner 1} trailing"), {
        cton!({"outer": {"inner": 1}, "trailing": null})
    });
}

#[test]
fn test_unterminated_quote_degrades_to_partial_tree() {
    let value = decode("{a \"never ends");
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("a").and_then(Value::as_str), Some("never ends"));
}

#[test]
fn test_stray_closers_and_garbage_never_fail() {
    for input in ["}", "]", "}}]]", "{]}", "[}", "{{{{", "\"", "{\"", "a b c"] {
        // Totality: any input produces some value.
        let _ = decode(input);
    }
}

#[test]
fn test_whitespace_variants_separate_tokens() {
    assert_eq!(decode("{a\t1\nb  2}"), cton!({"a": 1, "b": 2}));
}

#[test]
fn test_empty_input_decodes_to_null() {
    assert_eq!(decode(""), Value::Null);
}
