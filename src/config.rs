use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileEntry {
    pub position: [f32; 2],
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeskEntry {
    pub position: [f32; 2],
    pub radius: f32,
    pub id: String,
}

/// Static description of one floorplan: the background image and every marker on it.
///
/// Loaded once at startup and never changed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorplanConfig {
    /// Image source of the floorplan itself
    pub floorplan: String,
    #[serde(default)]
    pub profiles: Vec<ProfileEntry>,
    #[serde(default)]
    pub desks: Vec<DeskEntry>,
}

impl Default for FloorplanConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FloorplanConfig {
    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read floorplan config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid floorplan config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The office floor shipped with the viewer.
    ///
    /// `desk-6` appears twice on purpose: it is the data set the viewer was built around
    /// and the registry reports it as a duplicate identity.
    pub fn builtin() -> Self {
        let profile = |x: f32, y: f32, image: &str| ProfileEntry {
            position: [x, y],
            image: image.to_string(),
        };
        let desk = |x: f32, y: f32, id: &str| DeskEntry {
            position: [x, y],
            radius: 20.,
            id: id.to_string(),
        };

        Self {
            floorplan: "/floorplan.png".to_string(),
            profiles: vec![
                profile(176., 325., "/profiles/profile1.jpeg"),
                profile(412., 188., "/profiles/profile2.jpeg"),
                profile(590., 402., "/profiles/profile3.jpeg"),
            ],
            desks: vec![
                desk(120., 506., "desk-1"),
                desk(226., 506., "desk-2"),
                desk(333., 506., "desk-3"),
                desk(440., 506., "desk-4"),
                desk(547., 506., "desk-5"),
                desk(654., 506., "desk-6"),
                desk(654., 612., "desk-6"),
                desk(761., 612., "desk-7"),
            ],
        }
    }
}
