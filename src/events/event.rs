use serde::{Deserialize, Serialize};

use crate::elements::{MarkerId, MarkerKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadProfileClick {
    pub id: MarkerId,
    pub position: [f32; 2],
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadDeskClick {
    pub id: MarkerId,
    pub position: [f32; 2],
    pub identity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadHoverEnter {
    pub id: MarkerId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadHoverLeave {
    pub id: MarkerId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    ProfileClick(PayloadProfileClick),
    DeskClick(PayloadDeskClick),
    HoverEnter(PayloadHoverEnter),
    HoverLeave(PayloadHoverLeave),
}

impl Event {
    /// Kind of the clicked marker, `None` for hover notifications.
    pub fn selection_kind(&self) -> Option<MarkerKind> {
        match self {
            Event::ProfileClick(_) => Some(MarkerKind::Profile),
            Event::DeskClick(_) => Some(MarkerKind::Desk),
            Event::HoverEnter(_) | Event::HoverLeave(_) => None,
        }
    }

    pub fn is_selection(&self) -> bool {
        self.selection_kind().is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contract_profile_click() {
        let event = Event::ProfileClick(PayloadProfileClick {
            id: 0,
            position: [176.0, 325.0],
            source: "/profiles/profile1.jpeg".to_string(),
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"ProfileClick":{"id":0,"position":[176.0,325.0],"source":"/profiles/profile1.jpeg"}}"#
        );

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.selection_kind(), Some(MarkerKind::Profile));
    }

    #[test]
    fn test_contract_desk_click() {
        let event = Event::DeskClick(PayloadDeskClick {
            id: 5,
            position: [333.0, 506.0],
            identity: "desk-3".to_string(),
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"DeskClick":{"id":5,"position":[333.0,506.0],"identity":"desk-3"}}"#
        );
        assert_eq!(event.selection_kind(), Some(MarkerKind::Desk));
    }

    #[test]
    fn test_hover_is_not_selection() {
        assert!(!Event::HoverEnter(PayloadHoverEnter { id: 1 }).is_selection());
        assert!(!Event::HoverLeave(PayloadHoverLeave { id: 1 }).is_selection());
    }
}
