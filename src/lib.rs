mod config;
mod controller;
mod draw;
mod elements;
mod floorplan_view;
mod layout;
mod metadata;
mod presenter;
mod registry;
mod settings;
mod style;
mod surface;

pub mod events;

pub use self::config::{DeskEntry, FloorplanConfig, ProfileEntry};
pub use self::controller::{InteractionController, InteractionState, ScheduledRevert};
pub use self::draw::{feature_shape, FloorplanSurface};
pub use self::elements::{
    ColorsDesk, DeskMarker, FeatureStyle, Marker, MarkerId, MarkerKind, ProfileMarker, StyleSlot,
};
pub use self::floorplan_view::FloorplanView;
pub use self::layout::{viewport_height, Viewport};
pub use self::metadata::Metadata;
pub use self::presenter::SelectionModal;
pub use self::registry::FeatureRegistry;
pub use self::settings::{SettingsInteraction, SettingsLayout, SettingsStyle};
pub use self::style::{
    composite_avatar, AvatarCompositor, FsImageLoader, ImageLoader, RenderedStyle, StyleCache,
    StyleKey,
};
pub use self::surface::{CursorShape, MapSurface};
