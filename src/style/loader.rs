use std::path::PathBuf;

use anyhow::Context;
use image::DynamicImage;

/// Resolves an image source string into a decoded image.
///
/// Called from the blocking pool, so implementations are free to do file or network IO.
pub trait ImageLoader: Send + Sync {
    fn load(&self, source: &str) -> anyhow::Result<DynamicImage>;
}

/// Loads sources as paths relative to an asset root, the way a static file server would
/// resolve `/profiles/profile1.jpeg`.
#[derive(Clone, Debug)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, source: &str) -> PathBuf {
        self.root.join(source.trim_start_matches('/'))
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, source: &str) -> anyhow::Result<DynamicImage> {
        let path = self.resolve(source);
        let bytes =
            std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
        image::load_from_memory(&bytes)
            .with_context(|| format!("failed to decode {}", path.display()))
    }
}
