use egui::{Color32, Stroke};

use crate::style::RenderedStyle;

/// Logical visual state a marker style is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    Default,
    Hover,
    /// Enlarged press feedback. Only profile markers use it.
    Click,
}

/// Appearance of a single feature on the map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureStyle {
    /// Bitmap icon anchored at the feature position
    Icon(RenderedStyle),
    /// Filled circle in floorplan coordinates
    Circle {
        radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
}

impl FeatureStyle {
    pub fn is_empty(&self) -> bool {
        match self {
            FeatureStyle::Icon(style) => style.is_empty(),
            FeatureStyle::Circle { .. } => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ColorsDesk {
    pub main: Color32,
    pub hover: Color32,
    pub stroke: Color32,
}

impl Default for ColorsDesk {
    fn default() -> Self {
        Self {
            main: Color32::from_rgba_unmultiplied(30, 144, 255, 64), // Dodger Blue
            hover: Color32::from_rgba_unmultiplied(30, 144, 255, 160),
            stroke: Color32::from_rgb(0, 90, 170), // Dark Cerulean
        }
    }
}

impl ColorsDesk {
    pub fn fill(&self, slot: StyleSlot) -> Color32 {
        match slot {
            StyleSlot::Default => self.main,
            StyleSlot::Hover | StyleSlot::Click => self.hover,
        }
    }
}
