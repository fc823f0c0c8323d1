use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use eframe::{run_native, App, CreationContext, Frame, NativeOptions};
use egui::{CentralPanel, Context};
use egui_floorplan::{FloorplanConfig, FsImageLoader};
use log::info;

mod app;

const APP_NAME: &str = "Floorplan";

#[derive(Parser)]
#[command(about = "Interactive floorplan with desk and profile markers")]
struct Args {
    /// JSON file with the floorplan, profiles and desks; the built-in office is used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory image sources are resolved against
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

pub struct FloorplanApp {
    app: app::App,
}

impl FloorplanApp {
    fn new(cc: &CreationContext<'_>, config: &FloorplanConfig, assets: PathBuf) -> Self {
        Self {
            app: app::App::new(
                &cc.egui_ctx,
                config,
                Arc::new(FsImageLoader::new(assets)),
                tokio::runtime::Handle::current(),
            ),
        }
    }
}

impl App for FloorplanApp {
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| self.app.update(ctx, ui));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => FloorplanConfig::load(path)?,
        None => {
            info!("no config given, using the built-in floorplan");
            FloorplanConfig::builtin()
        }
    };

    run_native(
        APP_NAME,
        NativeOptions::default(),
        Box::new(move |cc| Ok(Box::new(FloorplanApp::new(cc, &config, args.assets)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("failed to run the floorplan window")
}
