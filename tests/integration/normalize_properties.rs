use proptest::prelude::*;
use serde_json::{Map, Value};
use wine_colours::profile::{keys, normalize, Dimension};

const KEYS: &[&str] = &[
    keys::WINE_TYPE,
    keys::GRAPES,
    keys::TASTING_NOTES,
    keys::SWEETNESS,
    keys::BASE_COLOR_HEX,
    keys::COLOR_NAME,
    keys::BUBBLES,
    keys::SPARKLING,
    keys::RESIDUAL_SUGAR,
    keys::SUMMARY,
    "oak",
    "acidity",
    "body",
    "tannin",
    "maturity",
    "depth",
    "minerality",
    "color_intensity",
    "fruit_intensity",
    "non_fruit_intensity",
    "effervescence",
    "vintage",
];

const WORDS: &[&str] = &[
    "red", "white", "rosé", "sekt", "auto", "dry", "off-dry", "halbtrocken", "sweet", "eiswein",
    "cherry", "vanilla", "slate", "honey", "pepper", "nebbiolo", "riesling", "#7A1F2B", "0xF6F2AF",
    "#12", "garnet", "amber",
];

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-500.0f64..500.0).prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        prop::sample::select(WORDS).prop_map(Value::from),
        "[a-zA-Z# ]{0,10}".prop_map(Value::from),
    ]
}

fn field() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => leaf(),
        1 => prop::collection::vec(leaf(), 0..4).prop_map(Value::Array),
    ]
}

fn raw_map() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(prop::sample::select(KEYS), field(), 0..12).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    })
}

fn explicit_color() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        "#[0-9A-F]{6}".prop_map(String::from),
        "[0-9a-z]{0,8}".prop_map(String::from),
    ])
}

proptest! {
    #[test]
    fn scalars_stay_in_unit_range(raw in raw_map(), color in explicit_color()) {
        let profile = normalize(&raw, color.as_deref());
        for dimension in Dimension::ALL {
            let value = profile.get(dimension);
            prop_assert!((0.0..=1.0).contains(&value), "{} = {}", dimension.key(), value);
        }
        prop_assert!((0.0..=1.0).contains(&profile.sweetness));
        prop_assert!(profile.residual_sugar >= 0.0);
    }

    #[test]
    fn normalizing_twice_changes_nothing(raw in raw_map(), color in explicit_color()) {
        let profile = normalize(&raw, color.as_deref());
        let again = normalize(&profile.to_raw(), None);
        prop_assert_eq!(&again, &profile);
        prop_assert_eq!(again.fingerprint(), profile.fingerprint());
    }
}
