//! Application entry point for the Christmas tree configurator.
//!
//! This binary sets up logging and eframe/egui, and delegates all UI
//! state and drawing to [`Configurator`].

mod configurator;
mod surface;

use configurator::{Configurator, TITLE};
use log::info;

/// Starts the native eframe application.
///
/// Logging goes through `env_logger`; set `RUST_LOG=debug` to trace store
/// mutations and re-renders.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([420.0, 720.0]),
        ..Default::default()
    };

    info!("starting {TITLE}");

    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| Ok(Box::new(Configurator::new(&cc.egui_ctx)))),
    )
}
