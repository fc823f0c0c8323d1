use crate::settings::SettingsLayout;

/// Height the floorplan is rendered at for the given viewport width.
///
/// `image_aspect` is height divided by width of the floorplan image. Narrow viewports
/// ignore the computed height and use the fixed fallback.
pub fn viewport_height(width: f32, image_aspect: f32, settings: &SettingsLayout) -> f32 {
    if width < settings.narrow_width {
        return settings.fallback_height;
    }
    width * image_aspect
}

/// Remembers the last viewport width and recomputes the height only when it changes.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: Option<f32>,
    height: f32,
}

impl Viewport {
    /// Returns the height for `width`, recomputing it synchronously on resize.
    pub fn on_resize(&mut self, width: f32, image_aspect: f32, settings: &SettingsLayout) -> f32 {
        if self.width != Some(width) {
            self.width = Some(width);
            self.height = viewport_height(width, image_aspect, settings);
            log::debug!("viewport resized to {width}x{}", self.height);
        }
        self.height
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wide_viewport_follows_aspect() {
        let s = SettingsLayout::default();
        assert_eq!(viewport_height(1000., 0.6, &s), 600.);
    }

    #[test]
    fn test_narrow_viewport_uses_fallback() {
        let s = SettingsLayout::default()
            .with_narrow_width(768.)
            .with_fallback_height(500.);
        assert_eq!(viewport_height(767., 0.6, &s), 500.);
        assert_eq!(viewport_height(320., 3.0, &s), 500.);
        assert_eq!(viewport_height(768., 0.5, &s), 384.);
    }

    #[test]
    fn test_viewport_recomputes_on_resize() {
        let s = SettingsLayout::default();
        let mut v = Viewport::default();
        assert_eq!(v.on_resize(1000., 0.5, &s), 500.);
        assert_eq!(v.on_resize(1200., 0.5, &s), 600.);
        assert_eq!(v.on_resize(400., 0.5, &s), s.fallback_height);
        assert_eq!(v.height(), s.fallback_height);
    }
}
