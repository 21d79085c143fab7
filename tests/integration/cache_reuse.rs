use serde_json::json;
use wine_colours::profile::Dimension;
use wine_colours::render::{DiagramCache, GaugeOptions, RenderOptions};

use super::support::fixtures::normalize_json;

#[test]
fn repeated_analysis_result_is_served_from_cache() {
    let mut cache = DiagramCache::new();
    let options = RenderOptions {
        size: 96,
        seed: 1,
        gauge: Some(GaugeOptions::for_size(96)),
    };
    let input = json!({"wine_type": "rose", "tasting_notes": ["strawberry"]});

    let first = cache.get_or_render(&normalize_json(input.clone()), &options).clone();
    let again = cache.get_or_render(&normalize_json(input), &options).clone();
    assert_eq!(first, again);
    assert_eq!(cache.render_count(), 1);
    assert_eq!(first.dimensions(), (120, 96));
}

#[test]
fn new_profile_replaces_cached_image() {
    let mut cache = DiagramCache::new();
    let options = RenderOptions {
        size: 96,
        ..RenderOptions::default()
    };
    let rose = normalize_json(json!({"wine_type": "rose"}));
    let before = cache.get_or_render(&rose, &options).clone();
    let deeper = rose.with(Dimension::Depth, 1.0);
    let after = cache.get_or_render(&deeper, &options).clone();
    assert_ne!(before, after);
    assert_eq!(cache.render_count(), 2);
    assert_eq!(cache.image(), Some(&after));
}
