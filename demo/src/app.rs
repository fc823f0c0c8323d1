use std::sync::Arc;

use anyhow::Context as _;
use crossbeam::channel::{unbounded, Receiver};
use egui::{ColorImage, Context, TextureHandle, TextureOptions, Ui, Vec2};
use egui_floorplan::{
    events::Event, AvatarCompositor, FeatureRegistry, FloorplanConfig, FloorplanSurface,
    FloorplanView, ImageLoader, InteractionController, SelectionModal, SettingsLayout, StyleCache,
};
use log::{info, warn};
use tokio::runtime::Handle;

const HEADING: &str = "Office floorplan";
const DESCRIPTION: &str = "Hover a marker to highlight it, click it to see who sits there.";

// big enough for the built-in marker coordinates when the floorplan image is missing
const FALLBACK_FLOORPLAN_SIZE: Vec2 = Vec2::new(800., 700.);

pub struct App {
    controller: InteractionController,
    surface: FloorplanSurface,

    floorplan: Option<TextureHandle>,
    image_size: Vec2,
    settings_layout: SettingsLayout,

    events: Receiver<Event>,
    modal: SelectionModal,
}

impl App {
    pub fn new(
        ctx: &Context,
        config: &FloorplanConfig,
        loader: Arc<dyn ImageLoader>,
        runtime: Handle,
    ) -> Self {
        let floorplan = match load_floorplan(ctx, loader.as_ref(), &config.floorplan) {
            Ok(texture) => Some(texture),
            Err(err) => {
                warn!("drawing markers without a floorplan: {err:#}");
                None
            }
        };
        let image_size = floorplan
            .as_ref()
            .map_or(FALLBACK_FLOORPLAN_SIZE, |t| t.size_vec2());

        let registry = FeatureRegistry::load_static(config);
        let mut surface = FloorplanSurface::new(&registry);
        let (events_tx, events) = unbounded();
        let mut controller = InteractionController::new(
            registry,
            AvatarCompositor::new(StyleCache::new(), loader),
            runtime,
        )
        .with_event_sink(Box::new(events_tx));
        controller.install(&mut surface);

        Self {
            controller,
            surface,

            floorplan,
            image_size,
            settings_layout: SettingsLayout::default(),

            events,
            modal: SelectionModal::new(),
        }
    }

    pub fn update(&mut self, ctx: &Context, ui: &mut Ui) {
        ui.heading(HEADING);
        ui.label(DESCRIPTION);
        ui.separator();

        let mut view = FloorplanView::new(&mut self.surface, &mut self.controller, self.image_size)
            .with_layout(&self.settings_layout);
        if let Some(texture) = &self.floorplan {
            view = view.with_floorplan(texture);
        }
        ui.add(&mut view);

        if self.modal.drain(&self.events) > 0 {
            info!("selection: {:?}", self.modal.current());
        }
        self.modal.show(ctx);
    }
}

fn load_floorplan(
    ctx: &Context,
    loader: &dyn ImageLoader,
    source: &str,
) -> anyhow::Result<TextureHandle> {
    let image = loader
        .load(source)
        .with_context(|| format!("failed to load floorplan {source}"))?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    info!("loaded floorplan {source} ({}x{})", size[0], size[1]);

    Ok(ctx.load_texture(
        "floorplan",
        ColorImage::from_rgba_unmultiplied(size, image.as_raw()),
        TextureOptions::LINEAR,
    ))
}
