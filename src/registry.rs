use std::collections::HashMap;

use egui::Pos2;
use log::{info, warn};

use crate::{
    config::FloorplanConfig,
    elements::{DeskMarker, Marker, MarkerId, ProfileMarker},
};

/// Ordered, read-only set of markers placed on the floorplan.
///
/// Profiles come first, then desks, each in configuration order. The order doubles as
/// the drawing order, so later markers are on top.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    markers: Vec<Marker>,
    desk_identities: HashMap<String, MarkerId>,
    duplicates: Vec<String>,
}

impl FeatureRegistry {
    pub fn load_static(config: &FloorplanConfig) -> Self {
        let profiles = config.profiles.iter().map(|p| {
            Marker::Profile(ProfileMarker {
                position: Pos2::new(p.position[0], p.position[1]),
                source: p.image.clone(),
            })
        });
        let desks = config.desks.iter().map(|d| {
            Marker::Desk(DeskMarker {
                position: Pos2::new(d.position[0], d.position[1]),
                radius: d.radius,
                identity: d.id.clone(),
            })
        });

        let registry = Self::from_markers(profiles.chain(desks).collect());
        info!(
            "loaded {} markers ({} profiles, {} desks)",
            registry.len(),
            config.profiles.len(),
            config.desks.len()
        );
        registry
    }

    pub fn from_markers(markers: Vec<Marker>) -> Self {
        let mut desk_identities = HashMap::new();
        let mut duplicates = Vec::new();

        for (id, marker) in markers.iter().enumerate() {
            let Some(desk) = marker.as_desk() else {
                continue;
            };
            // last registered wins
            if let Some(prev) = desk_identities.insert(desk.identity.clone(), id) {
                warn!(
                    "desk identity '{}' is used by markers {prev} and {id}, lookups resolve to {id}",
                    desk.identity
                );
                if !duplicates.contains(&desk.identity) {
                    duplicates.push(desk.identity.clone());
                }
            }
        }

        Self {
            markers,
            desk_identities,
            duplicates,
        }
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &Marker)> {
        self.markers.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn desk_by_identity(&self, identity: &str) -> Option<MarkerId> {
        self.desk_identities.get(identity).copied()
    }

    /// Desk identities registered more than once.
    pub fn duplicate_identities(&self) -> &[String] {
        &self.duplicates
    }
}
