//! Native radar scope window
//!
//! Opens a fixed-size eframe window sized to the configured surface.
//! Override the defaults with RADARSCOPE_SIZE ("WxH") and
//! RADARSCOPE_TARGETS (JSON array of [x, y] pairs).

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    use radarscope::app::ScopeApp;
    use radarscope::config::ScopeConfig;
    use tracing::info;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,radarscope=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = ScopeConfig::from_env();
    info!(
        width = config.surface_width,
        height = config.surface_height,
        targets = config.targets.len(),
        "starting radar scope"
    );

    // Room for the header bar above the surface
    const HEADER_ALLOWANCE: f32 = 32.0;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("radarscope")
            .with_inner_size([
                config.surface_width,
                config.surface_height + HEADER_ALLOWANCE,
            ])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "radarscope",
        options,
        Box::new(move |cc| Ok(Box::new(ScopeApp::new(cc, config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
