use egui::Pos2;

use crate::elements::{FeatureStyle, MarkerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    /// Shown while a marker is under the pointer
    Pointer,
}

/// The pannable canvas markers are drawn on.
///
/// The interaction layer only talks to the surface through this trait: it asks which
/// feature is on top at a screen pixel and pushes styles and cursor changes back.
pub trait MapSurface {
    /// Topmost feature at `pixel` (screen space), if any.
    fn feature_at_pixel(&self, pixel: Pos2) -> Option<MarkerId>;

    fn set_feature_style(&mut self, id: MarkerId, style: FeatureStyle);

    fn set_cursor(&mut self, cursor: CursorShape);

    /// Screen pixel to floorplan coordinates.
    fn pixel_to_map(&self, pixel: Pos2) -> Pos2;

    /// Floorplan coordinates to screen pixel.
    fn map_to_pixel(&self, pos: Pos2) -> Pos2;
}
