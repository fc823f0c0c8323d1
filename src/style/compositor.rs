use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use image::{imageops::FilterType, DynamicImage, Rgba, RgbaImage};
use log::{debug, warn};

use super::{ImageLoader, RenderedStyle, StyleCache, StyleKey};

const DEFAULT_BORDER_WIDTH: u32 = 3;
const DEFAULT_BORDER_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Renders circular bordered avatars used as profile marker icons.
///
/// Every successful render is stored in the shared [`StyleCache`]; failures resolve to
/// [`RenderedStyle::empty`] and are only logged.
#[derive(Clone)]
pub struct AvatarCompositor {
    cache: StyleCache,
    loader: Arc<dyn ImageLoader>,

    border_width: u32,
    border_color: Rgba<u8>,
    load_timeout: Duration,

    renders: Arc<AtomicUsize>,
}

impl AvatarCompositor {
    pub fn new(cache: StyleCache, loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            cache,
            loader,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: DEFAULT_BORDER_COLOR,
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            renders: Arc::default(),
        }
    }

    pub fn with_border(mut self, width: u32, color: Rgba<u8>) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    /// Upper bound for loading, decoding and compositing one avatar.
    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    pub fn cache(&self) -> &StyleCache {
        &self.cache
    }

    /// Number of compositing jobs started so far. Cache hits are not counted.
    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }

    /// Returns the avatar style for `source` with radius `size`.
    ///
    /// Never fails and always completes within the load timeout.
    pub async fn render_avatar(&self, source: &str, size: u32) -> RenderedStyle {
        if let Some(style) = self.cache.get(source, size) {
            return style;
        }
        if size == 0 {
            warn!("refusing to render avatar {source} with zero size");
            return RenderedStyle::empty();
        }

        self.renders.fetch_add(1, Ordering::Relaxed);
        debug!("rendering avatar {source} at {size}px");

        let loader = Arc::clone(&self.loader);
        let owned_source = source.to_string();
        let (border_width, border_color) = (self.border_width, self.border_color);
        let job = tokio::task::spawn_blocking(move || -> anyhow::Result<RgbaImage> {
            let img = loader.load(&owned_source)?;
            Ok(composite_avatar(&img, size, border_width, border_color))
        });

        match tokio::time::timeout(self.load_timeout, job).await {
            Ok(Ok(Ok(image))) => {
                let style = RenderedStyle::new(StyleKey::new(source, size), image);
                self.cache.put(source, size, style.clone());
                style
            }
            Ok(Ok(Err(err))) => {
                warn!("failed to render avatar {source}: {err:#}");
                RenderedStyle::empty()
            }
            Ok(Err(err)) => {
                warn!("avatar job for {source} did not finish: {err}");
                RenderedStyle::empty()
            }
            Err(_) => {
                warn!(
                    "avatar {source} was not ready after {:?}, using empty style",
                    self.load_timeout
                );
                RenderedStyle::empty()
            }
        }
    }
}

/// Draws `src` clipped to a circle of radius `size` on top of a `border` wide ring.
///
/// The result is a square of side `2 * (size + border)`; pixels outside the ring are
/// transparent.
pub fn composite_avatar(
    src: &DynamicImage,
    size: u32,
    border: u32,
    border_color: Rgba<u8>,
) -> RgbaImage {
    let outer = size + border;
    let side = 2 * outer;
    let scaled = src
        .resize_exact(2 * size, 2 * size, FilterType::Triangle)
        .to_rgba8();

    let center = outer as f32;
    let (inner_r, outer_r) = (size as f32, outer as f32);

    let mut out = RgbaImage::new(side, side);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist <= inner_r {
            *px = *scaled.get_pixel(x - border, y - border);
        } else if dist <= outer_r {
            *px = border_color;
        }
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    struct SolidLoader;

    impl ImageLoader for SolidLoader {
        fn load(&self, source: &str) -> anyhow::Result<DynamicImage> {
            if source.ends_with("missing.png") {
                anyhow::bail!("no such image: {source}");
            }
            Ok(DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, RED)))
        }
    }

    fn compositor() -> AvatarCompositor {
        AvatarCompositor::new(StyleCache::new(), Arc::new(SolidLoader))
    }

    #[test]
    fn test_composite_geometry() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, RED));
        let out = composite_avatar(&src, 20, 3, WHITE);

        assert_eq!(out.dimensions(), (46, 46));
        // center is the clipped image
        assert_eq!(out.get_pixel(23, 23), &RED);
        // ring between radius 20 and 23
        assert_eq!(out.get_pixel(1, 23), &WHITE);
        // corners are outside the ring
        assert_eq!(out.get_pixel(0, 0), &CLEAR);
        assert_eq!(out.get_pixel(45, 45), &CLEAR);
    }

    #[test]
    fn test_composite_without_border() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, RED));
        let out = composite_avatar(&src, 5, 0, WHITE);
        assert_eq!(out.dimensions(), (10, 10));
        assert_eq!(out.get_pixel(5, 5), &RED);
        assert_eq!(out.get_pixel(0, 0), &CLEAR);
    }

    #[tokio::test]
    async fn test_render_caches_success() {
        let c = compositor();
        let first = c.render_avatar("/profiles/profile1.jpeg", 20).await;
        assert!(!first.is_empty());
        assert_eq!(first.side(), 46);
        assert_eq!(c.render_count(), 1);

        let second = c.render_avatar("/profiles/profile1.jpeg", 20).await;
        assert!(second.ptr_eq(&first));
        assert_eq!(c.render_count(), 1);
        assert_eq!(c.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_render_failure_is_empty_and_not_cached() {
        let c = compositor();
        let style = c.render_avatar("/profiles/missing.png", 20).await;
        assert!(style.is_empty());
        assert!(c.cache().is_empty());

        // a failed source is retried on the next request
        let _ = c.render_avatar("/profiles/missing.png", 20).await;
        assert_eq!(c.render_count(), 2);
    }

    #[tokio::test]
    async fn test_render_zero_size() {
        let c = compositor();
        assert!(c.render_avatar("/profiles/profile1.jpeg", 0).await.is_empty());
        assert_eq!(c.render_count(), 0);
    }
}
