mod cache_reuse;
mod normalize_properties;
mod render_properties;
mod scenarios;
pub mod support;
