use std::time::Duration;

use egui::{Color32, CursorIcon, Pos2, Rect, Response, Sense, TextureHandle, Ui, Vec2, Widget};
use instant::Instant;

use crate::{
    controller::InteractionController,
    draw::FloorplanSurface,
    metadata::Metadata,
    settings::SettingsLayout,
    surface::CursorShape,
};

/// Widget for visualizing and interacting with a floorplan and its markers.
///
/// The view is stateless: marker styles live in the [`FloorplanSurface`], interaction
/// state in the [`InteractionController`]. Each frame it lays the floorplan out to the
/// available width, forwards pointer input to the controller, polls it for finished
/// renders and timed reverts, and draws the features on top of the floorplan texture.
pub struct FloorplanView<'a> {
    surface: &'a mut FloorplanSurface,
    controller: &'a mut InteractionController,
    floorplan: Option<&'a TextureHandle>,
    image_size: Vec2,

    settings_layout: SettingsLayout,
}

impl Widget for &mut FloorplanView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let width = ui.available_width();
        let aspect = self.image_aspect();
        let height = self
            .surface
            .viewport_mut()
            .on_resize(width, aspect, &self.settings_layout);

        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::click());

        let meta = Metadata::fit(self.image_size, response.rect);
        if let Some(texture) = self.floorplan {
            painter.image(
                texture.id(),
                meta.canvas_rect(self.image_size),
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1., 1.)),
                Color32::WHITE,
            );
        }
        self.surface.set_metadata(meta);

        let now = Instant::now();
        self.handle_pointer(&response, now);
        self.controller.poll(&mut *self.surface, now);

        self.surface.draw(ui.ctx(), &painter);

        if response.hovered() && self.surface.cursor() == CursorShape::Pointer {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        self.schedule_repaint(ui, now);

        response
    }
}

impl<'a> FloorplanView<'a> {
    /// Creates a new `FloorplanView` widget with default layout settings.
    ///
    /// `image_size` is the pixel size of the floorplan image, the coordinate space marker
    /// positions are given in.
    pub fn new(
        surface: &'a mut FloorplanSurface,
        controller: &'a mut InteractionController,
        image_size: Vec2,
    ) -> Self {
        Self {
            surface,
            controller,
            floorplan: None,
            image_size,

            settings_layout: SettingsLayout::default(),
        }
    }

    /// Floorplan texture drawn underneath the markers.
    pub fn with_floorplan(mut self, texture: &'a TextureHandle) -> Self {
        self.floorplan = Some(texture);
        self
    }

    /// Modifies default layout settings.
    pub fn with_layout(mut self, settings_layout: &SettingsLayout) -> Self {
        self.settings_layout = settings_layout.clone();
        self
    }

    fn image_aspect(&self) -> f32 {
        if self.image_size.x <= 0. {
            return 0.;
        }
        self.image_size.y / self.image_size.x
    }

    fn handle_pointer(&mut self, response: &Response, now: Instant) {
        match response.hover_pos() {
            Some(pos) => self.controller.pointer_moved(&mut *self.surface, pos),
            None => self.controller.pointer_left(&mut *self.surface),
        }

        if !response.clicked() {
            return;
        }
        if let Some(pos) = response.interact_pointer_pos() {
            self.controller.clicked(&mut *self.surface, pos, now);
        }
    }

    fn schedule_repaint(&self, ui: &Ui, now: Instant) {
        if self.controller.in_flight() > 0 {
            ui.ctx().request_repaint();
            return;
        }

        if let Some(due) = self.controller.next_deadline() {
            let after = if due > now {
                due - now
            } else {
                Duration::ZERO
            };
            ui.ctx().request_repaint_after(after);
        }
    }
}
