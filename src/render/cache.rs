use image::RgbaImage;
use tracing::debug;

use super::RenderOptions;
use crate::profile::SensoryProfile;

struct CachedDiagram {
    profile: SensoryProfile,
    options: RenderOptions,
    image: RgbaImage,
}

/// Holds the last rendered diagram for a caller that re-renders on profile
/// updates. The image is reused only when the profile and the options both
/// compare equal; anything else is a full re-render.
#[derive(Default)]
pub struct DiagramCache {
    entry: Option<CachedDiagram>,
    renders: u64,
}

impl DiagramCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_render(&mut self, profile: &SensoryProfile, options: &RenderOptions) -> &RgbaImage {
        if !self.is_current(profile, options) {
            self.entry = None;
        }
        let renders = &mut self.renders;
        let entry = self.entry.get_or_insert_with(|| {
            *renders += 1;
            debug!(size = options.size, seed = options.seed, "profile changed; re-rendering diagram");
            CachedDiagram {
                profile: profile.clone(),
                options: options.clone(),
                image: options.render(profile),
            }
        });
        &entry.image
    }

    pub fn is_current(&self, profile: &SensoryProfile, options: &RenderOptions) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|entry| entry.profile == *profile && entry.options == *options)
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.entry.as_ref().map(|entry| &entry.image)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of full renders performed so far.
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}
