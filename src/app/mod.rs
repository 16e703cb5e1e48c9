//! Scope application shell
//!
//! Runs on both native and WASM platforms. The egui frame callback is the
//! driver loop: each update advances the sweep renderer by exactly one
//! frame and repaints, so frame pacing belongs to the host and the render
//! logic stays callable in isolation.

mod header;

use eframe::egui;
use tracing::info;

use crate::config::ScopeConfig;
use crate::sweep::SweepRenderer;
use crate::theme::{colors, scope_visuals};

/// Radar scope app: owns the renderer and the last emitted display list.
pub struct ScopeApp {
    renderer: SweepRenderer,
    /// Display list of the most recent frame, repainted while paused
    shapes: Vec<egui::Shape>,
    /// Surface dimensions, fixed at startup
    surface: egui::Vec2,
    /// Paused: stop driving the renderer, keep showing the last frame
    pub(crate) paused: bool,
    pub(crate) fps_counter: header::FpsCounter,
}

impl ScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ScopeConfig) -> Self {
        cc.egui_ctx.set_visuals(scope_visuals());

        let renderer = SweepRenderer::new(
            config.surface_width,
            config.surface_height,
            config.targets,
        );
        info!(
            width = config.surface_width,
            height = config.surface_height,
            targets = renderer.targets().len(),
            radius = renderer.geometry().radius,
            "scope initialized"
        );

        Self {
            renderer,
            shapes: Vec::new(),
            surface: egui::vec2(config.surface_width, config.surface_height),
            paused: false,
            fps_counter: header::FpsCounter::new(),
        }
    }

    pub(crate) fn angle_degrees(&self) -> u16 {
        self.renderer.angle_degrees()
    }

    pub(crate) fn visible_targets(&self) -> usize {
        self.renderer.visible_target_count()
    }

    pub(crate) fn total_targets(&self) -> usize {
        self.renderer.targets().len()
    }
}

/// Top-left corner of the surface, centered inside the panel rect
fn surface_origin(panel: egui::Rect, surface: egui::Vec2) -> egui::Pos2 {
    egui::Rect::from_center_size(panel.center(), surface).min
}

impl eframe::App for ScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The host paces the loop; keep it spinning
        ctx.request_repaint();

        if !self.paused {
            self.shapes = self.renderer.render_frame();
        }

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(4.0))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let origin = surface_origin(response.rect, self.surface);

                for shape in &self.shapes {
                    let mut shape = shape.clone();
                    shape.translate(origin.to_vec2());
                    painter.add(shape);
                }
            });
    }
}
