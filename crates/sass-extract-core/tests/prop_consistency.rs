/// Property-based tests for the serializer and structurer.
///
/// Uses `proptest` to generate random value trees and checks the invariants
/// that must hold for every input:
///
/// - opaque colors serialize to a keyword or `#rrggbb`, never `rgba(...)`
/// - translucent colors serialize to exactly `rgba(r,g,b,a)`
/// - a list serialized as a list member is its top-level text in parentheses
/// - a map serializes identically whatever the `in_list` flag
/// - the structured color `hex` matches `format_hex` on the same channels
/// - structured map keys equal the serialized map keys
use proptest::prelude::*;
use sass_extract_core::color::{channel, round_alpha};
use sass_extract_core::{
    format_hex, serialize, structure, ColorNames, CssColorNames, Separator, StructuredValue, Value,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_channel() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0u8..=255u8).prop_map(f64::from),
        (0.0f64..=255.0f64),
    ]
}

fn arb_color() -> impl Strategy<Value = Value> {
    (arb_channel(), arb_channel(), arb_channel(), 0.0f64..=1.0f64)
        .prop_map(|(r, g, b, a)| Value::color(r, g, b, a))
}

fn arb_opaque_color() -> impl Strategy<Value = Value> {
    (arb_channel(), arb_channel(), arb_channel(), 0.9951f64..=1.0f64)
        .prop_map(|(r, g, b, a)| Value::color(r, g, b, a))
}

fn arb_translucent_color() -> impl Strategy<Value = Value> {
    (arb_channel(), arb_channel(), arb_channel(), 0.0f64..0.99f64)
        .prop_map(|(r, g, b, a)| Value::color(r, g, b, a))
}

fn arb_unit() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("px".to_string()),
        Just("em".to_string()),
        Just("%".to_string()),
        Just("ms".to_string()),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::String),
        any::<bool>().prop_map(Value::Boolean),
        (-10_000i32..10_000i32, arb_unit()).prop_map(|(n, u)| Value::number(f64::from(n), u)),
        ((-1000i32..1000i32), 1u32..4u32, arb_unit()).prop_map(|(m, d, u)| {
            Value::number(f64::from(m) / 10f64.powi(d as i32), u)
        }),
        arb_color(),
        Just(Value::Null),
    ]
}

fn arb_separator() -> impl Strategy<Value = Separator> {
    prop_oneof![Just(Separator::Comma), Just(Separator::Space)]
}

/// Value trees up to a few levels deep, mixing lists and maps.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            (prop::collection::vec(inner.clone(), 0..6), arb_separator())
                .prop_map(|(items, sep)| Value::list(items, sep)),
            prop::collection::vec((inner.clone(), inner), 0..5).prop_map(Value::map),
        ]
    })
}

fn arb_list() -> impl Strategy<Value = Value> {
    (prop::collection::vec(arb_value(), 0..6), arb_separator())
        .prop_map(|(items, sep)| Value::list(items, sep))
}

fn arb_map() -> impl Strategy<Value = Value> {
    prop::collection::vec((arb_value(), arb_value()), 0..5).prop_map(Value::map)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn opaque_colors_render_as_keyword_or_hex(color in arb_opaque_color()) {
        let text = serialize(&color, false).unwrap();
        prop_assert!(!text.starts_with("rgba("), "got {}", text);
        let is_hex = text.len() == 7
            && text.starts_with('#')
            && text[1..].chars().all(|c| c.is_ascii_hexdigit());
        let is_keyword = !text.is_empty() && text.chars().all(|c| c.is_ascii_lowercase());
        prop_assert!(is_hex || is_keyword, "got {}", text);
    }

    #[test]
    fn opaque_keyword_matches_table(color in arb_opaque_color()) {
        let Value::Color(c) = &color else { unreachable!() };
        let hex = format_hex(c.r(), c.g(), c.b());
        let expected = CssColorNames.keyword_for(&hex).map(str::to_string).unwrap_or(hex);
        prop_assert_eq!(serialize(&color, false).unwrap(), expected);
    }

    #[test]
    fn translucent_colors_render_as_rgba(color in arb_translucent_color()) {
        let Value::Color(c) = &color else { unreachable!() };
        let expected = format!(
            "rgba({},{},{},{})",
            channel(c.r()),
            channel(c.g()),
            channel(c.b()),
            round_alpha(c.a())
        );
        prop_assert_eq!(serialize(&color, false).unwrap(), expected);
    }

    #[test]
    fn nested_list_is_parenthesized_top_level(list in arb_list()) {
        let top = serialize(&list, false).unwrap();
        let nested = serialize(&list, true).unwrap();
        prop_assert_eq!(nested, format!("({})", top));
    }

    #[test]
    fn map_ignores_in_list_flag(map in arb_map()) {
        let top = serialize(&map, false).unwrap();
        let nested = serialize(&map, true).unwrap();
        prop_assert!(top.starts_with('(') && top.ends_with(')'), "got {}", top);
        prop_assert_eq!(top, nested);
    }

    #[test]
    fn structured_hex_matches_format_hex(color in arb_color()) {
        let Value::Color(c) = &color else { unreachable!() };
        let StructuredValue::Color(node) = structure(&color).unwrap() else {
            panic!("expected color node");
        };
        prop_assert_eq!(
            node.hex.clone(),
            format_hex(f64::from(node.r), f64::from(node.g), f64::from(node.b))
        );
        prop_assert_eq!(node.hex, format_hex(c.r(), c.g(), c.b()));
        prop_assert_eq!(node.a, c.a());
    }

    #[test]
    fn structured_map_keys_are_serialized_keys(map in arb_map()) {
        let Value::Map(entries) = &map else { unreachable!() };
        let StructuredValue::Map(node) = structure(&map).unwrap() else {
            panic!("expected map node");
        };
        let mut expected: Vec<String> = Vec::new();
        for (key, _) in entries.iter() {
            let key = serialize(key, false).unwrap();
            if !expected.contains(&key) {
                expected.push(key);
            }
        }
        prop_assert_eq!(node.keys().map(str::to_string).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn both_transforms_accept_every_closed_value(value in arb_value()) {
        prop_assert!(serialize(&value, false).is_ok());
        prop_assert!(serialize(&value, true).is_ok());
        let node = structure(&value).unwrap();
        prop_assert_eq!(node.type_name(), value.type_name());
    }
}
