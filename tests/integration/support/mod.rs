pub mod fixtures;
pub mod pixels;
