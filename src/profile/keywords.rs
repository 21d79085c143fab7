//! Keyword heuristics over tasting notes and grape varieties.
//!
//! Matching is a case-insensitive substring test; callers pass lists that are
//! already lower-cased. The first rule that matches a dimension wins.

use super::Dimension;

/// Where a keyword rule looks for its needles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    NotesAndGrapes,
    GrapesOnly,
}

struct KeywordRule {
    dimension: Dimension,
    scope: Scope,
    needles: &'static [&'static str],
    value: f64,
}

const OAK_WORDS: &[&str] = &["vanilla", "toast", "oak", "barrique", "barrel", "eiche", "holz"];

const HIGH_TANNIN_GRAPES: &[&str] = &["nebbiolo", "sangiovese", "cabernet", "syrah"];

const MATURITY_WORDS: &[&str] = &["honey", "nut", "oxid"];

const MINERAL_WORDS: &[&str] = &["mineral", "slate", "stone", "flint", "chalk", "schiefer"];

const FRUIT_WORDS: &[&str] = &[
    "apple",
    "pear",
    "peach",
    "apricot",
    "nectarine",
    "citrus",
    "lemon",
    "lime",
    "grapefruit",
    "pineapple",
    "mango",
    "passion fruit",
    "lychee",
    "melon",
    "cherry",
    "raspberry",
    "strawberry",
    "currant",
    "cassis",
    "blackberry",
    "blueberry",
    "plum",
    "fig",
    "berry",
    "fruit",
];

const NON_FRUIT_WORDS: &[&str] = &[
    "spice", "herb", "pepper", "smoke", "earth", "leather", "tea", "graphite",
];

const RULES: &[KeywordRule] = &[
    KeywordRule {
        dimension: Dimension::Oak,
        scope: Scope::NotesAndGrapes,
        needles: OAK_WORDS,
        value: 0.60,
    },
    KeywordRule {
        dimension: Dimension::Tannin,
        scope: Scope::GrapesOnly,
        needles: HIGH_TANNIN_GRAPES,
        value: 0.65,
    },
    KeywordRule {
        dimension: Dimension::Maturity,
        scope: Scope::NotesAndGrapes,
        needles: MATURITY_WORDS,
        value: 0.50,
    },
    KeywordRule {
        dimension: Dimension::Minerality,
        scope: Scope::NotesAndGrapes,
        needles: MINERAL_WORDS,
        value: 0.45,
    },
    KeywordRule {
        dimension: Dimension::FruitIntensity,
        scope: Scope::NotesAndGrapes,
        needles: FRUIT_WORDS,
        value: 0.60,
    },
    KeywordRule {
        dimension: Dimension::NonFruitIntensity,
        scope: Scope::NotesAndGrapes,
        needles: NON_FRUIT_WORDS,
        value: 0.45,
    },
];

/// Returns the heuristic value for `dimension` if any rule fires.
pub fn keyword_value(dimension: Dimension, notes: &[String], grapes: &[String]) -> Option<f64> {
    RULES
        .iter()
        .filter(|rule| rule.dimension == dimension)
        .find(|rule| {
            let hit = |texts: &[String]| {
                texts
                    .iter()
                    .any(|text| rule.needles.iter().any(|needle| text.contains(needle)))
            };
            match rule.scope {
                Scope::NotesAndGrapes => hit(notes) || hit(grapes),
                Scope::GrapesOnly => hit(grapes),
            }
        })
        .map(|rule| rule.value)
}
