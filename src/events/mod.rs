mod event;
mod sink;

pub use event::{
    Event, PayloadDeskClick, PayloadHoverEnter, PayloadHoverLeave, PayloadProfileClick,
};

pub use sink::EventSink;
