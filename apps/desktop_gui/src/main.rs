use std::{fs::File, sync::Arc};

use clap::Parser;
use eframe::egui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod ui;

use config::Settings;
use ui::theme::{self, Palette};
use ui::ReverserApp;

#[derive(Debug, Parser)]
#[command(
    name = "string-reverser",
    about = "Reverse a line of text in a small desktop window"
)]
struct Cli {
    /// Diagnostic log destination, truncated on startup.
    #[arg(long)]
    log_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `desktop_gui=info`.
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    let mut settings = config::load_settings();
    if let Some(log_file) = cli.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_filter) = cli.log_filter {
        settings.log_filter = log_filter;
    }

    init_logging(&settings);

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(config::WINDOW_TITLE)
        .with_inner_size([settings.window_width, settings.window_height])
        .with_resizable(false);
    if let Some(icon) = load_window_icon(&settings.icon_file) {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(|cc| {
            theme::apply(&cc.egui_ctx, Palette::nord());
            Ok(Box::new(ReverserApp::new()))
        }),
    )
}

/// Two sinks: an ANSI stream to stderr and a plain-text file truncated per
/// run. A file that cannot be created degrades to stderr-only; logging never
/// fails the app.
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    match File::create(&settings.log_file) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
                .init();
        }
        Err(err) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            tracing::warn!(
                "log file '{}' unavailable, continuing on stderr only: {err}",
                settings.log_file
            );
        }
    }
}

/// Decodes the window icon; any failure means no icon, never an error.
fn load_window_icon(path: &str) -> Option<egui::IconData> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("window icon '{path}' unavailable: {err}");
            return None;
        }
    };

    let decoded = match image::load_from_memory(&bytes) {
        Ok(decoded) => decoded.to_rgba8(),
        Err(err) => {
            tracing::warn!("window icon '{path}' failed to decode: {err}");
            return None;
        }
    };

    let (width, height) = decoded.dimensions();
    Some(egui::IconData {
        rgba: decoded.into_raw(),
        width,
        height,
    })
}
