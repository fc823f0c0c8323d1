use egui::Pos2;
use serde::{Deserialize, Serialize};

/// Index of a marker inside the [`crate::FeatureRegistry`]. Stable for the whole session.
pub type MarkerId = usize;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Profile,
    Desk,
}

/// Circular avatar pin placed at a fixed floorplan position.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMarker {
    /// Position in floorplan image pixels
    pub position: Pos2,
    /// Image source the avatar is rendered from, e.g. `/profiles/profile1.jpeg`
    pub source: String,
}

/// Circular desk zone.
#[derive(Debug, Clone, PartialEq)]
pub struct DeskMarker {
    /// Position in floorplan image pixels
    pub position: Pos2,
    /// Zone radius in floorplan image pixels
    pub radius: f32,
    /// Expected to be unique, see [`crate::FeatureRegistry::duplicate_identities`]
    pub identity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    Profile(ProfileMarker),
    Desk(DeskMarker),
}

impl Marker {
    pub fn kind(&self) -> MarkerKind {
        match self {
            Marker::Profile(_) => MarkerKind::Profile,
            Marker::Desk(_) => MarkerKind::Desk,
        }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            Marker::Profile(p) => p.position,
            Marker::Desk(d) => d.position,
        }
    }

    pub fn as_profile(&self) -> Option<&ProfileMarker> {
        match self {
            Marker::Profile(p) => Some(p),
            Marker::Desk(_) => None,
        }
    }

    pub fn as_desk(&self) -> Option<&DeskMarker> {
        match self {
            Marker::Desk(d) => Some(d),
            Marker::Profile(_) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_marker_accessors() {
        let profile = Marker::Profile(ProfileMarker {
            position: Pos2::new(176., 325.),
            source: "/profiles/profile1.jpeg".to_string(),
        });
        assert_eq!(profile.kind(), MarkerKind::Profile);
        assert_eq!(profile.position(), Pos2::new(176., 325.));
        assert!(profile.as_desk().is_none());

        let desk = Marker::Desk(DeskMarker {
            position: Pos2::new(333., 506.),
            radius: 20.,
            identity: "desk-3".to_string(),
        });
        assert_eq!(desk.kind(), MarkerKind::Desk);
        assert_eq!(desk.as_desk().unwrap().identity, "desk-3");
        assert!(desk.as_profile().is_none());
    }
}
