use std::collections::HashMap;

use egui::{ColorImage, Context, Painter, Pos2, TextureHandle, TextureOptions};
use log::trace;

use crate::{
    elements::{FeatureStyle, MarkerId},
    layout::Viewport,
    metadata::Metadata,
    registry::FeatureRegistry,
    style::StyleKey,
    surface::{CursorShape, MapSurface},
};

use super::shapes::{feature_shape, hit_radius, is_inside_circle};

struct SurfaceFeature {
    position: Pos2,
    style: Option<FeatureStyle>,
}

/// egui backed [`MapSurface`].
///
/// Holds one feature per registered marker in registry order; later features are drawn
/// on top and win hit tests. Avatar bitmaps are uploaded as textures the first time they
/// are drawn and kept for the lifetime of the surface.
pub struct FloorplanSurface {
    features: Vec<SurfaceFeature>,
    meta: Metadata,
    cursor: CursorShape,
    viewport: Viewport,
    textures: HashMap<StyleKey, TextureHandle>,
}

impl FloorplanSurface {
    pub fn new(registry: &FeatureRegistry) -> Self {
        Self {
            features: registry
                .iter()
                .map(|(_, m)| SurfaceFeature {
                    position: m.position(),
                    style: None,
                })
                .collect(),
            meta: Metadata::default(),
            cursor: CursorShape::default(),
            viewport: Viewport::default(),
            textures: HashMap::new(),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.meta
    }

    pub fn set_metadata(&mut self, meta: Metadata) {
        self.meta = meta;
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn style(&self, id: MarkerId) -> Option<&FeatureStyle> {
        self.features.get(id).and_then(|f| f.style.as_ref())
    }

    pub fn draw(&mut self, ctx: &Context, painter: &Painter) {
        let Self {
            features,
            meta,
            textures,
            ..
        } = self;

        for feature in features.iter() {
            let Some(style) = &feature.style else {
                continue;
            };
            let texture = match style {
                FeatureStyle::Icon(rendered) => match (rendered.key(), rendered.image()) {
                    (Some(key), Some(image)) => {
                        let handle = textures.entry(key.clone()).or_insert_with(|| {
                            trace!("uploading texture for {} at {}px", key.source, key.size);
                            let size = [image.width() as usize, image.height() as usize];
                            ctx.load_texture(
                                format!("{}@{}", key.source, key.size),
                                ColorImage::from_rgba_unmultiplied(size, image.as_raw()),
                                TextureOptions::LINEAR,
                            )
                        });
                        Some(handle.id())
                    }
                    _ => None,
                },
                FeatureStyle::Circle { .. } => None,
            };

            if let Some(shape) = feature_shape(style, feature.position, meta, texture) {
                painter.add(shape);
            }
        }
    }
}

impl MapSurface for FloorplanSurface {
    fn feature_at_pixel(&self, pixel: Pos2) -> Option<MarkerId> {
        self.features
            .iter()
            .enumerate()
            .rev()
            .find(|(_, f)| {
                // an empty icon is not drawn and cannot be hit
                f.style.as_ref().filter(|s| !s.is_empty()).is_some_and(|style| {
                    let center = self.meta.canvas_to_screen_pos(f.position);
                    is_inside_circle(center, hit_radius(style, &self.meta), pixel)
                })
            })
            .map(|(id, _)| id)
    }

    fn set_feature_style(&mut self, id: MarkerId, style: FeatureStyle) {
        if let Some(feature) = self.features.get_mut(id) {
            feature.style = Some(style);
        }
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = cursor;
    }

    fn pixel_to_map(&self, pixel: Pos2) -> Pos2 {
        self.meta.screen_to_canvas_pos(pixel)
    }

    fn map_to_pixel(&self, pos: Pos2) -> Pos2 {
        self.meta.canvas_to_screen_pos(pos)
    }
}
