use crossbeam::channel::{unbounded, Receiver, Sender};
use egui::Stroke;
use instant::Instant;
use log::{debug, trace};
use tokio::runtime::Handle;

use crate::{
    elements::{DeskMarker, FeatureStyle, Marker, MarkerId, StyleSlot},
    events::{
        Event, EventSink, PayloadDeskClick, PayloadHoverEnter, PayloadHoverLeave,
        PayloadProfileClick,
    },
    registry::FeatureRegistry,
    settings::{SettingsInteraction, SettingsStyle},
    style::{AvatarCompositor, RenderedStyle},
    surface::{CursorShape, MapSurface},
};

/// Which marker the pointer is interacting with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering(MarkerId),
    /// Clicked profile showing the enlarged style until the press duration runs out
    Pressed(MarkerId),
}

impl InteractionState {
    pub fn current(&self) -> Option<MarkerId> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Hovering(id) | InteractionState::Pressed(id) => Some(*id),
        }
    }
}

/// Pending revert of a pressed profile back to its default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledRevert {
    pub id: MarkerId,
    pub due: Instant,
}

/// Result of an asynchronous avatar render. Applied only if `generation` still matches
/// the marker's current generation.
struct StyleReady {
    id: MarkerId,
    slot: StyleSlot,
    generation: u64,
    /// Teardown count at request time; results from before a teardown are not in flight anymore
    epoch: u64,
    style: RenderedStyle,
}

/// Drives marker styles from pointer input and reports selections.
///
/// The controller is fed screen-space pointer events, resolves them to markers through
/// [`MapSurface::feature_at_pixel`] and pushes styles back to the surface. Avatar
/// styles missing from the cache are rendered on the tokio runtime; call
/// [`InteractionController::poll`] once per frame to apply finished renders and fire
/// the click revert.
///
/// Every style request bumps the marker's generation, so a render that finishes after
/// the marker moved on to another state is dropped instead of overwriting it.
pub struct InteractionController {
    registry: FeatureRegistry,
    compositor: AvatarCompositor,
    runtime: Handle,

    settings_style: SettingsStyle,
    settings_interaction: SettingsInteraction,

    events_sink: Option<Box<dyn EventSink>>,

    state: InteractionState,
    generations: Vec<u64>,
    revert: Option<ScheduledRevert>,

    epoch: u64,
    in_flight: usize,
    ready_tx: Sender<StyleReady>,
    ready_rx: Receiver<StyleReady>,
}

impl InteractionController {
    pub fn new(registry: FeatureRegistry, compositor: AvatarCompositor, runtime: Handle) -> Self {
        let (ready_tx, ready_rx) = unbounded();
        let settings_style = SettingsStyle::default();
        let settings_interaction = SettingsInteraction::default();
        let compositor = compositor
            .with_border(settings_style.border_width, settings_style.border_color)
            .with_load_timeout(settings_interaction.image_load_timeout);

        Self {
            generations: vec![0; registry.len()],
            registry,
            compositor,
            runtime,

            settings_style,
            settings_interaction,

            events_sink: None,

            state: InteractionState::default(),
            revert: None,

            epoch: 0,
            in_flight: 0,
            ready_tx,
            ready_rx,
        }
    }

    /// Modifies default marker styles. Also reconfigures the avatar border.
    pub fn with_styles(mut self, settings_style: &SettingsStyle) -> Self {
        self.settings_style = settings_style.clone();
        self.compositor = self
            .compositor
            .with_border(settings_style.border_width, settings_style.border_color);
        self
    }

    /// Modifies default interaction timing.
    pub fn with_interactions(mut self, settings_interaction: &SettingsInteraction) -> Self {
        self.settings_interaction = settings_interaction.clone();
        self.compositor = self
            .compositor
            .with_load_timeout(settings_interaction.image_load_timeout);
        self
    }

    /// Supply a sink that will receive selection and hover events.
    pub fn with_event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.events_sink = Some(sink);
        self
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    pub fn compositor(&self) -> &AvatarCompositor {
        &self.compositor
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn pending_revert(&self) -> Option<ScheduledRevert> {
        self.revert
    }

    /// Number of avatar renders requested but not yet collected by [`Self::poll`].
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Applies the default style to every registered marker.
    pub fn install(&mut self, surface: &mut dyn MapSurface) {
        for id in 0..self.registry.len() {
            self.apply_style(surface, id, StyleSlot::Default);
        }
    }

    pub fn pointer_moved(&mut self, surface: &mut dyn MapSurface, pixel: egui::Pos2) {
        let hit = surface.feature_at_pixel(pixel);
        self.set_hovered(surface, hit);
    }

    /// The pointer left the surface.
    pub fn pointer_left(&mut self, surface: &mut dyn MapSurface) {
        self.set_hovered(surface, None);
    }

    pub fn clicked(&mut self, surface: &mut dyn MapSurface, pixel: egui::Pos2, now: Instant) {
        let Some(id) = surface.feature_at_pixel(pixel) else {
            trace!("click on empty floorplan at {pixel:?}");
            return;
        };
        let Some(marker) = self.registry.get(id).cloned() else {
            return;
        };

        if self.state.current() != Some(id) {
            self.set_hovered(surface, Some(id));
        }

        match marker {
            Marker::Profile(profile) => {
                debug!("profile {id} clicked: {}", profile.source);
                self.publish_event(Event::ProfileClick(PayloadProfileClick {
                    id,
                    position: [profile.position.x, profile.position.y],
                    source: profile.source,
                }));

                if let Some(prev) = self.revert.take() {
                    if prev.id != id {
                        self.apply_style(surface, prev.id, StyleSlot::Default);
                    }
                }
                self.apply_style(surface, id, StyleSlot::Click);
                self.state = InteractionState::Pressed(id);
                self.revert = Some(ScheduledRevert {
                    id,
                    due: now + self.settings_interaction.press_duration,
                });
            }
            Marker::Desk(desk) => {
                debug!("desk {id} clicked: {}", desk.identity);
                self.publish_event(Event::DeskClick(PayloadDeskClick {
                    id,
                    position: [desk.position.x, desk.position.y],
                    identity: desk.identity,
                }));
            }
        }
    }

    /// Applies finished avatar renders and fires the click revert when it is due.
    pub fn poll(&mut self, surface: &mut dyn MapSurface, now: Instant) {
        while let Ok(ready) = self.ready_rx.try_recv() {
            if ready.epoch != self.epoch {
                trace!("dropping style for marker {} requested before teardown", ready.id);
                continue;
            }
            self.in_flight = self.in_flight.saturating_sub(1);
            if self.generations.get(ready.id) != Some(&ready.generation) {
                trace!("dropping stale style for marker {}", ready.id);
                continue;
            }
            // a missing hover or click avatar keeps the marker drawn and hittable
            if ready.style.is_empty() && ready.slot != StyleSlot::Default {
                debug!(
                    "no {:?} avatar for marker {}, keeping its current style",
                    ready.slot, ready.id
                );
                continue;
            }
            surface.set_feature_style(ready.id, FeatureStyle::Icon(ready.style));
        }

        let Some(revert) = self.revert else {
            return;
        };
        if now < revert.due {
            return;
        }

        self.revert = None;
        // reverts to default even if the pointer is still over the marker
        self.apply_style(surface, revert.id, StyleSlot::Default);
        if self.state == InteractionState::Pressed(revert.id) {
            self.state = InteractionState::Hovering(revert.id);
        }
    }

    /// Earliest instant at which [`Self::poll`] has timed work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.revert.map(|r| r.due)
    }

    /// Cancels the pending revert and invalidates every in-flight render.
    ///
    /// The controller stays usable; renders requested afterwards are counted from zero.
    pub fn teardown(&mut self) {
        self.epoch += 1;
        self.revert = None;
        self.generations.iter_mut().for_each(|g| *g += 1);
        while self.ready_rx.try_recv().is_ok() {}
        self.in_flight = 0;
        self.state = InteractionState::Idle;
    }

    fn set_hovered(&mut self, surface: &mut dyn MapSurface, hit: Option<MarkerId>) {
        let hit = hit.filter(|id| self.registry.get(*id).is_some());
        let current = self.state.current();
        if hit == current {
            return;
        }

        if let Some(prev) = current {
            self.apply_style(surface, prev, StyleSlot::Default);
            self.publish_event(Event::HoverLeave(PayloadHoverLeave { id: prev }));
        }

        match hit {
            Some(id) => {
                self.apply_style(surface, id, StyleSlot::Hover);
                self.state = InteractionState::Hovering(id);
                surface.set_cursor(CursorShape::Pointer);
                self.publish_event(Event::HoverEnter(PayloadHoverEnter { id }));
            }
            None => {
                self.state = InteractionState::Idle;
                surface.set_cursor(CursorShape::Default);
            }
        }
    }

    fn apply_style(&mut self, surface: &mut dyn MapSurface, id: MarkerId, slot: StyleSlot) {
        let Some(marker) = self.registry.get(id).cloned() else {
            return;
        };
        let generation = self.bump_generation(id);

        match marker {
            Marker::Desk(desk) => surface.set_feature_style(id, self.desk_style(&desk, slot)),
            Marker::Profile(profile) => {
                let size = self.settings_style.avatar_size_for(slot);
                if let Some(style) = self.compositor.cache().get(&profile.source, size) {
                    surface.set_feature_style(id, FeatureStyle::Icon(style));
                    return;
                }

                self.in_flight += 1;
                let compositor = self.compositor.clone();
                let ready_tx = self.ready_tx.clone();
                let epoch = self.epoch;
                self.runtime.spawn(async move {
                    let style = compositor.render_avatar(&profile.source, size).await;
                    // the controller may be gone already
                    let _ = ready_tx.send(StyleReady {
                        id,
                        slot,
                        generation,
                        epoch,
                        style,
                    });
                });
            }
        }
    }

    fn desk_style(&self, desk: &DeskMarker, slot: StyleSlot) -> FeatureStyle {
        let colors = &self.settings_style.desk_colors;
        FeatureStyle::Circle {
            radius: desk.radius,
            fill: colors.fill(slot),
            stroke: Stroke::new(self.settings_style.desk_stroke_width, colors.stroke),
        }
    }

    fn bump_generation(&mut self, id: MarkerId) -> u64 {
        let generation = &mut self.generations[id];
        *generation += 1;
        *generation
    }

    fn publish_event(&self, event: Event) {
        if let Some(sink) = &self.events_sink {
            sink.send(event);
        }
    }
}
