use std::time::Duration;

use image::Rgba;

use crate::elements::{ColorsDesk, StyleSlot};

/// Marker appearance.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Avatar radius in pixels when idle
    pub avatar_size: u32,
    /// Avatar radius while hovered
    pub avatar_hover_size: u32,
    /// Avatar radius right after a click
    pub avatar_click_size: u32,
    /// Width of the ring drawn around avatars
    pub border_width: u32,
    pub border_color: Rgba<u8>,
    pub desk_colors: ColorsDesk,
    /// Stroke width of desk zones
    pub desk_stroke_width: f32,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            avatar_size: 20,
            avatar_hover_size: 25,
            avatar_click_size: 30,
            border_width: 3,
            border_color: Rgba([255, 255, 255, 255]),
            desk_colors: ColorsDesk::default(),
            desk_stroke_width: 1.5,
        }
    }
}

impl SettingsStyle {
    pub fn avatar_size_for(&self, slot: StyleSlot) -> u32 {
        match slot {
            StyleSlot::Default => self.avatar_size,
            StyleSlot::Hover => self.avatar_hover_size,
            StyleSlot::Click => self.avatar_click_size,
        }
    }

    pub fn with_avatar_sizes(mut self, default: u32, hover: u32, click: u32) -> Self {
        self.avatar_size = default;
        self.avatar_hover_size = hover;
        self.avatar_click_size = click;
        self
    }

    pub fn with_border(mut self, width: u32, color: Rgba<u8>) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    pub fn with_desk_colors(mut self, colors: ColorsDesk) -> Self {
        self.desk_colors = colors;
        self
    }
}

/// Interaction timing.
#[derive(Debug, Clone)]
pub struct SettingsInteraction {
    /// How long a clicked profile stays enlarged
    pub press_duration: Duration,
    /// Upper bound for loading and compositing one avatar
    pub image_load_timeout: Duration,
}

impl Default for SettingsInteraction {
    fn default() -> Self {
        Self {
            press_duration: Duration::from_millis(200),
            image_load_timeout: Duration::from_secs(5),
        }
    }
}

impl SettingsInteraction {
    pub fn with_press_duration(mut self, duration: Duration) -> Self {
        self.press_duration = duration;
        self
    }

    pub fn with_image_load_timeout(mut self, timeout: Duration) -> Self {
        self.image_load_timeout = timeout;
        self
    }
}

/// Viewport sizing.
#[derive(Debug, Clone)]
pub struct SettingsLayout {
    /// Below this width the floorplan height is pinned to `fallback_height`
    pub narrow_width: f32,
    pub fallback_height: f32,
}

impl Default for SettingsLayout {
    fn default() -> Self {
        Self {
            narrow_width: 768.,
            fallback_height: 500.,
        }
    }
}

impl SettingsLayout {
    pub fn with_narrow_width(mut self, width: f32) -> Self {
        self.narrow_width = width;
        self
    }

    pub fn with_fallback_height(mut self, height: f32) -> Self {
        self.fallback_height = height;
        self
    }
}
