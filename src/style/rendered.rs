use std::sync::Arc;

use egui::Vec2;
use image::RgbaImage;

use super::StyleKey;

/// Immutable marker bitmap produced by the [`super::AvatarCompositor`].
///
/// Cloning is cheap, the pixel buffer is shared. The empty style carries no image and
/// is what failed renders resolve to.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedStyle {
    key: Option<StyleKey>,
    image: Option<Arc<RgbaImage>>,
    anchor: Vec2,
}

impl RenderedStyle {
    pub fn new(key: StyleKey, image: RgbaImage) -> Self {
        Self {
            key: Some(key),
            image: Some(Arc::new(image)),
            anchor: Vec2::new(0.5, 0.5),
        }
    }

    pub fn empty() -> Self {
        Self {
            key: None,
            image: None,
            anchor: Vec2::new(0.5, 0.5),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }

    pub fn key(&self) -> Option<&StyleKey> {
        self.key.as_ref()
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_deref()
    }

    /// Fractional anchor inside the image which is placed on the feature position.
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Side of the square bitmap in pixels, zero for the empty style.
    pub fn side(&self) -> u32 {
        self.image.as_ref().map_or(0, |img| img.width())
    }

    /// True when both styles share the same pixel buffer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.image, &other.image) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
