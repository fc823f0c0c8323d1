use crossbeam::channel::Receiver;
use egui::{Align2, Context, Grid, Window};
use log::debug;

use crate::events::Event;

/// Modal window showing details of the last selected marker.
///
/// Hover events are ignored; only clicks open the modal. A new selection replaces the
/// current one.
#[derive(Debug, Clone, Default)]
pub struct SelectionModal {
    current: Option<Event>,
    open: bool,
}

impl SelectionModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `event` if it is a selection. Returns whether the modal took it.
    pub fn present(&mut self, event: Event) -> bool {
        if !event.is_selection() {
            return false;
        }
        debug!("presenting selection {event:?}");
        self.current = Some(event);
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> Option<&Event> {
        self.current.as_ref()
    }

    /// Presents every pending event from `events`; the last selection wins.
    pub fn drain(&mut self, events: &Receiver<Event>) -> usize {
        events.try_iter().filter(|e| self.present(e.clone())).count()
    }

    pub fn show(&mut self, ctx: &Context) {
        let Some(event) = self.current.as_ref().filter(|_| self.open) else {
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        Window::new(title(event))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0., 0.])
            .show(ctx, |ui| {
                Grid::new("selection_details")
                    .num_columns(2)
                    .show(ui, |ui| match event {
                        Event::ProfileClick(p) => {
                            ui.label("Image");
                            ui.label(&p.source);
                            ui.end_row();
                            ui.label("Position");
                            ui.label(format!("{:.0}, {:.0}", p.position[0], p.position[1]));
                            ui.end_row();
                        }
                        Event::DeskClick(p) => {
                            ui.label("Desk");
                            ui.label(&p.identity);
                            ui.end_row();
                            ui.label("Position");
                            ui.label(format!("{:.0}, {:.0}", p.position[0], p.position[1]));
                            ui.end_row();
                        }
                        Event::HoverEnter(_) | Event::HoverLeave(_) => {}
                    });
                ui.separator();
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if !open || close_clicked {
            self.close();
        }
    }
}

fn title(event: &Event) -> &'static str {
    match event {
        Event::ProfileClick(_) => "Profile",
        Event::DeskClick(_) => "Desk",
        Event::HoverEnter(_) | Event::HoverLeave(_) => "Marker",
    }
}

#[cfg(test)]
mod test {
    use crossbeam::channel::unbounded;

    use crate::events::{PayloadDeskClick, PayloadHoverEnter, PayloadProfileClick};

    use super::*;

    fn desk(identity: &str) -> Event {
        Event::DeskClick(PayloadDeskClick {
            id: 5,
            position: [333., 506.],
            identity: identity.to_string(),
        })
    }

    #[test]
    fn test_present_and_close() {
        let mut modal = SelectionModal::new();
        assert!(!modal.is_open());

        assert!(modal.present(desk("desk-3")));
        assert!(modal.is_open());
        assert_eq!(modal.current(), Some(&desk("desk-3")));

        modal.close();
        assert!(!modal.is_open());
        assert!(modal.current().is_none());
    }

    #[test]
    fn test_hover_events_are_ignored() {
        let mut modal = SelectionModal::new();
        assert!(!modal.present(Event::HoverEnter(PayloadHoverEnter { id: 0 })));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_drain_keeps_last_selection() {
        let (tx, rx) = unbounded();
        tx.send(Event::HoverEnter(PayloadHoverEnter { id: 0 })).unwrap();
        tx.send(Event::ProfileClick(PayloadProfileClick {
            id: 0,
            position: [176., 325.],
            source: "/profiles/profile1.jpeg".to_string(),
        }))
        .unwrap();
        tx.send(desk("desk-1")).unwrap();

        let mut modal = SelectionModal::new();
        assert_eq!(modal.drain(&rx), 2);
        assert_eq!(modal.current(), Some(&desk("desk-1")));
        assert!(rx.is_empty());
    }
}
