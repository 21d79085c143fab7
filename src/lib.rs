pub mod analysis;
pub mod config;
pub mod profile;
pub mod render;

// Re-export commonly used types for convenience.
pub use analysis::AnalysisResponse;
pub use config::AppConfig;
pub use profile::{normalize, SensoryProfile, WineType};
pub use render::{render, DiagramCache, RenderOptions};
