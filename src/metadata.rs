use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Floorplan to screen transform of one view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    /// Current zoom factor
    pub zoom: f32,
    /// Current pan offset
    pub pan: Vec2,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            zoom: 1.,
            pan: Vec2::default(),
        }
    }
}

impl Metadata {
    /// Scales and centers a floorplan of `image_size` inside `rect` without distortion.
    pub fn fit(image_size: Vec2, rect: Rect) -> Self {
        if image_size.x <= 0. || image_size.y <= 0. {
            return Self {
                zoom: 1.,
                pan: rect.min.to_vec2(),
            };
        }

        // choose the minimum of the two zoom factors to avoid distortion
        let zoom = (rect.width() / image_size.x).min(rect.height() / image_size.y);
        let pan = rect.center().to_vec2() - image_size / 2. * zoom;

        Self { zoom, pan }
    }

    pub fn canvas_to_screen_pos(&self, pos: Pos2) -> Pos2 {
        (pos.to_vec2() * self.zoom + self.pan).to_pos2()
    }

    pub fn canvas_to_screen_size(&self, size: f32) -> f32 {
        size * self.zoom
    }

    pub fn screen_to_canvas_pos(&self, pos: Pos2) -> Pos2 {
        ((pos.to_vec2() - self.pan) / self.zoom).to_pos2()
    }

    /// Screen rect covered by a floorplan of `image_size`.
    pub fn canvas_rect(&self, image_size: Vec2) -> Rect {
        Rect::from_min_max(
            self.canvas_to_screen_pos(Pos2::ZERO),
            self.canvas_to_screen_pos(image_size.to_pos2()),
        )
    }
}
