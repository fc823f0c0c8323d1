use egui::{epaint::CircleShape, Color32, Pos2, Rect, Shape, TextureId, Vec2};

use crate::{elements::FeatureStyle, metadata::Metadata};

/// Builds the shape for one feature at canvas position `pos`.
///
/// Icons keep their pixel size regardless of zoom, circles scale with the floorplan.
/// `texture` is required for icons; without it nothing is drawn.
pub fn feature_shape(
    style: &FeatureStyle,
    pos: Pos2,
    meta: &Metadata,
    texture: Option<TextureId>,
) -> Option<Shape> {
    let center = meta.canvas_to_screen_pos(pos);
    match style {
        FeatureStyle::Icon(rendered) => {
            let texture = texture?;
            let side = rendered.side() as f32;
            if side == 0. {
                return None;
            }
            let size = Vec2::splat(side);
            let min = center - size * rendered.anchor();
            Some(Shape::image(
                texture,
                Rect::from_min_size(min, size),
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1., 1.)),
                Color32::WHITE,
            ))
        }
        FeatureStyle::Circle {
            radius,
            fill,
            stroke,
        } => Some(
            CircleShape {
                center,
                radius: meta.canvas_to_screen_size(*radius),
                fill: *fill,
                stroke: *stroke,
            }
            .into(),
        ),
    }
}

/// Screen-space hit radius of a feature drawn with `style`.
pub(crate) fn hit_radius(style: &FeatureStyle, meta: &Metadata) -> f32 {
    match style {
        FeatureStyle::Icon(rendered) => rendered.side() as f32 / 2.,
        FeatureStyle::Circle { radius, .. } => meta.canvas_to_screen_size(*radius),
    }
}

pub(crate) fn is_inside_circle(center: Pos2, radius: f32, pos: Pos2) -> bool {
    let dir = pos - center;
    dir.length() <= radius
}
