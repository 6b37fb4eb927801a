use std::error::Error;

use eframe::{egui, NativeOptions};
use egui::ViewportBuilder;
use log::info;

use crate::config::ServerAddress;
use crate::core::feed::feed;
use crate::core::receiver::spawn_receiver;
use crate::overlay::OverlayApp;
use crate::utils::Viewport;

mod config;
mod core;
mod entities;
mod overlay;
mod types;
mod utils;

const WINDOW_TITLE: &str = "Future Battlegrounds Viewer";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let address = ServerAddress::from_process();
    info!("Connecting to {}", address);

    let (publisher, snapshots) = feed();
    let receiver = spawn_receiver(address, publisher);

    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([Viewport::WIDTH as f32, Viewport::HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_| Box::new(OverlayApp::new(snapshots))),
    )?;

    // The window is gone; stop the receiver if it is still streaming and
    // surface its failure, if any, as the exit status.
    if !receiver.is_finished() {
        info!("Stopping receiver");
    }
    receiver.shutdown().await?;
    info!("Viewer closed");
    Ok(())
}
