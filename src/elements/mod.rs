mod marker;
mod marker_style;

pub use self::marker::{DeskMarker, Marker, MarkerId, MarkerKind, ProfileMarker};
pub use self::marker_style::{ColorsDesk, FeatureStyle, StyleSlot};
