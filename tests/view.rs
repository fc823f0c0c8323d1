use std::{sync::Arc, time::Duration};

use crossbeam::channel::unbounded;
use egui::{
    CentralPanel, Context, CursorIcon, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Rect,
    Vec2, ViewportId,
};
use egui_floorplan::{
    events::Event, AvatarCompositor, FeatureRegistry, FloorplanConfig, FloorplanSurface,
    FloorplanView, ImageLoader, InteractionController, InteractionState, MapSurface, StyleCache,
};
use image::{DynamicImage, Rgba, RgbaImage};

const IMAGE_SIZE: Vec2 = Vec2::new(800., 700.);

struct SolidLoader;

impl ImageLoader for SolidLoader {
    fn load(&self, _: &str) -> anyhow::Result<DynamicImage> {
        Ok(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            16,
            16,
            Rgba([120, 120, 120, 255]),
        )))
    }
}

fn input(events: Vec<egui::Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1024., 900.))),
        events,
        ..Default::default()
    }
}

fn frame(
    ctx: &Context,
    surface: &mut FloorplanSurface,
    controller: &mut InteractionController,
    events: Vec<egui::Event>,
) -> FullOutput {
    ctx.run(input(events), |ctx| {
        CentralPanel::default().show(ctx, |ui| {
            ui.add(&mut FloorplanView::new(surface, controller, IMAGE_SIZE));
        });
    })
}

fn button(pos: Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_forwards_hover_and_click() {
    let registry = FeatureRegistry::load_static(&FloorplanConfig::builtin());
    let mut surface = FloorplanSurface::new(&registry);
    let (tx, rx) = unbounded();
    let mut controller = InteractionController::new(
        registry,
        AvatarCompositor::new(StyleCache::new(), Arc::new(SolidLoader)),
        tokio::runtime::Handle::current(),
    )
    .with_event_sink(Box::new(tx));
    controller.install(&mut surface);

    let ctx = Context::default();

    // lays the floorplan out and applies the default avatars once they are rendered
    for _ in 0..400 {
        frame(&ctx, &mut surface, &mut controller, vec![]);
        if controller.in_flight() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(controller.in_flight(), 0);

    let pixel = surface.map_to_pixel(Pos2::new(176., 325.));
    assert_eq!(surface.feature_at_pixel(pixel), Some(0));

    let output = frame(
        &ctx,
        &mut surface,
        &mut controller,
        vec![egui::Event::PointerMoved(pixel)],
    );
    assert_eq!(controller.state(), InteractionState::Hovering(0));
    assert_eq!(output.platform_output.cursor_icon, CursorIcon::PointingHand);

    // let the hover avatar land before pressing
    for _ in 0..400 {
        frame(&ctx, &mut surface, &mut controller, vec![]);
        if controller.in_flight() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(controller.state(), InteractionState::Hovering(0));

    frame(&ctx, &mut surface, &mut controller, vec![button(pixel, true)]);
    let output = frame(&ctx, &mut surface, &mut controller, vec![button(pixel, false)]);

    assert_eq!(controller.state(), InteractionState::Pressed(0));
    assert!(controller.pending_revert().is_some());
    assert_eq!(output.platform_output.cursor_icon, CursorIcon::PointingHand);
    // the click avatar is still rendering, so the next frame is wanted right away
    assert_eq!(controller.in_flight(), 1);
    assert_eq!(
        output
            .viewport_output
            .get(&ViewportId::ROOT)
            .map(|v| v.repaint_delay),
        Some(Duration::ZERO)
    );

    let selections: Vec<Event> = rx.try_iter().filter(Event::is_selection).collect();
    let [Event::ProfileClick(payload)] = selections.as_slice() else {
        panic!("expected a single profile click, got {selections:?}");
    };
    assert_eq!(payload.source, "/profiles/profile1.jpeg");
    assert_eq!(payload.position, [176., 325.]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_resets_cursor_off_markers() {
    let registry = FeatureRegistry::load_static(&FloorplanConfig::builtin());
    let mut surface = FloorplanSurface::new(&registry);
    let mut controller = InteractionController::new(
        registry,
        AvatarCompositor::new(StyleCache::new(), Arc::new(SolidLoader)),
        tokio::runtime::Handle::current(),
    );
    controller.install(&mut surface);

    let ctx = Context::default();
    frame(&ctx, &mut surface, &mut controller, vec![]);

    let desk = surface.map_to_pixel(Pos2::new(333., 506.));
    let output = frame(
        &ctx,
        &mut surface,
        &mut controller,
        vec![egui::Event::PointerMoved(desk)],
    );
    assert_eq!(controller.state(), InteractionState::Hovering(5));
    assert_eq!(output.platform_output.cursor_icon, CursorIcon::PointingHand);

    let empty = surface.map_to_pixel(Pos2::new(5., 5.));
    let output = frame(
        &ctx,
        &mut surface,
        &mut controller,
        vec![egui::Event::PointerMoved(empty)],
    );
    assert_eq!(controller.state(), InteractionState::Idle);
    assert_eq!(output.platform_output.cursor_icon, CursorIcon::Default);

    frame(&ctx, &mut surface, &mut controller, vec![egui::Event::PointerGone]);
    assert_eq!(controller.state(), InteractionState::Idle);
}
