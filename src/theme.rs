//! Radar phosphor theme: black background, cyan glow

use egui::Color32;

/// Scope palette
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);           // #000000 - pure black
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(8, 14, 14);        // #080E0E - subtle elevation

    // === Scene ===
    pub const PHOSPHOR: Color32 = Color32::from_rgb(0, 255, 255);         // aqua - wedge and blips
    pub const RING_LINE: Color32 = Color32::from_rgb(0, 255, 255);        // concentric rings
    pub const RING_EDGE: Color32 = Color32::from_rgb(0, 255, 230);        // outer boundary

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(180, 255, 250);   // phosphor-tinted white
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(90, 170, 165);  // dim readouts
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(45, 85, 82);        // muted/disabled

    // === Lines & Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(20, 45, 43);            // subtle borders
}

/// egui Visuals for the scope chrome
pub fn scope_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.inactive.bg_fill = BG_PRIMARY;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.weak_bg_fill = BG_PRIMARY;

    visuals.widgets.hovered.bg_fill = BG_ELEVATED;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.hovered.weak_bg_fill = BG_ELEVATED;

    visuals.widgets.active.bg_fill = BG_ELEVATED;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.active.weak_bg_fill = BG_ELEVATED;

    visuals.selection.bg_fill = Color32::from_rgb(0, 60, 58);
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.hyperlink_color = TEXT_PRIMARY;

    // Flat chrome; the scene provides its own glow
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
