use super::Event;

/// Receiver of interaction events.
///
/// Implemented for `crossbeam::channel::Sender<Event>` and for closures `Fn(Event)`.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        // a dropped receiver means nobody presents selections anymore
        let _ = crossbeam::channel::Sender::send(self, event);
    }
}

impl<F: Fn(Event)> EventSink for F {
    fn send(&self, event: Event) {
        self(event);
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use crate::events::PayloadHoverEnter;

    use super::*;

    #[test]
    fn test_channel_sink() {
        let (tx, rx) = crossbeam::channel::unbounded();
        EventSink::send(&tx, Event::HoverEnter(PayloadHoverEnter { id: 3 }));
        assert_eq!(
            rx.try_recv().unwrap(),
            Event::HoverEnter(PayloadHoverEnter { id: 3 })
        );

        drop(rx);
        // must not panic
        EventSink::send(&tx, Event::HoverEnter(PayloadHoverEnter { id: 4 }));
    }

    #[test]
    fn test_closure_sink() {
        let got = RefCell::new(Vec::new());
        let sink = |e: Event| got.borrow_mut().push(e);
        sink.send(Event::HoverEnter(PayloadHoverEnter { id: 1 }));
        assert_eq!(got.borrow().len(), 1);
    }
}
