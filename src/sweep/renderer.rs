//! CPU renderer for the radar sweep scene
//!
//! Emits one frame's display list as egui shapes: background clear,
//! glowing concentric rings, the rotating gradient wedge, and target
//! blips. Glow halos are layered strokes/fills with falling alpha; the
//! wedge gradient is a triangle-fan mesh fading from an opaque center
//! vertex to transparent arc vertices.

use egui::{Color32, CornerRadius, Mesh, Pos2, Rect, Shape, Stroke, Vec2};

use crate::theme::colors;

use super::data::{
    rings, wedge_arc, SweepGeometry, SweepState, Target, BLIP_RADIUS, WEDGE_HALF_ANGLE,
};

/// Fan resolution of the wedge mesh
const WEDGE_SEGMENTS: usize = 8;

/// Halo layers per glowing stroke or blip: (extra spread factor, alpha factor),
/// widest and faintest first so the core pass stays crisp on top.
const HALO_LAYERS: [(f32, f32); 2] = [(1.0, 0.15), (0.5, 0.3)];

/// Blur radius of the wedge halo, in surface units
const WEDGE_GLOW: f32 = 20.0;

/// Blur radius of the blip halo, in surface units
const BLIP_GLOW: f32 = 15.0;

/// Peak opacity of the wedge gradient at the center vertex
const WEDGE_ALPHA: f32 = 0.5;

/// Renders the radar scene and owns all of its state: the fixed target
/// list, the surface-derived geometry, and the advancing sweep angle.
pub struct SweepRenderer {
    surface: Vec2,
    geometry: SweepGeometry,
    state: SweepState,
    targets: Vec<Target>,
}

impl SweepRenderer {
    /// Build a renderer for a surface of the given dimensions.
    /// Geometry is derived once here and never changes.
    pub fn new(surface_width: f32, surface_height: f32, targets: Vec<Target>) -> Self {
        Self {
            surface: Vec2::new(surface_width, surface_height),
            geometry: SweepGeometry::new(surface_width, surface_height),
            state: SweepState::new(),
            targets,
        }
    }

    /// Current sweep direction in degrees, [0, 360)
    pub fn angle_degrees(&self) -> u16 {
        self.state.angle_degrees()
    }

    pub fn geometry(&self) -> &SweepGeometry {
        &self.geometry
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Targets currently inside the visible radius
    pub fn visible_target_count(&self) -> usize {
        self.geometry.visible(&self.targets).count()
    }

    /// Produce one frame and advance the sweep.
    ///
    /// The display list is emitted in fixed order: background clear,
    /// rings, sweep wedge, target blips. Coordinates are surface-local;
    /// the caller translates into its own clip space.
    pub fn render_frame(&mut self) -> Vec<Shape> {
        let mut shapes = Vec::new();

        shapes.push(Shape::rect_filled(
            Rect::from_min_size(Pos2::ZERO, self.surface),
            CornerRadius::ZERO,
            colors::BG_PRIMARY,
        ));

        self.paint_rings(&mut shapes);
        self.paint_wedge(&mut shapes);
        self.paint_targets(&mut shapes);

        self.state.advance();
        shapes
    }

    /// Background layer: outer boundary plus four concentric rings,
    /// each as a core stroke under a two-layer glow halo.
    fn paint_rings(&self, shapes: &mut Vec<Shape>) {
        for (i, spec) in rings(&self.geometry).iter().enumerate() {
            let base = if i == 0 { colors::RING_EDGE } else { colors::RING_LINE };
            for (spread, fade) in HALO_LAYERS {
                shapes.push(Shape::circle_stroke(
                    self.geometry.center,
                    spec.radius,
                    Stroke::new(
                        spec.stroke_width + spec.glow * spread,
                        with_alpha(base, spec.alpha * fade),
                    ),
                ));
            }
            shapes.push(Shape::circle_stroke(
                self.geometry.center,
                spec.radius,
                Stroke::new(spec.stroke_width, with_alpha(base, spec.alpha)),
            ));
        }
    }

    /// Sweep layer: a faint wide halo wedge under the core gradient wedge.
    /// A fresh wedge is drawn every frame; nothing accumulates.
    fn paint_wedge(&self, shapes: &mut Vec<Shape>) {
        let angle = self.state.radians();
        shapes.push(Shape::mesh(self.wedge_mesh(angle, 2.5, WEDGE_ALPHA * 0.25)));
        shapes.push(Shape::mesh(self.wedge_mesh(angle, 1.0, WEDGE_ALPHA)));
    }

    /// Triangle fan from the center to the ring edge over the wedge arc.
    /// Vertex colors give the radial fade: opaque at the center, fully
    /// transparent on the arc.
    fn wedge_mesh(&self, angle_rad: f32, widen: f32, alpha: f32) -> Mesh {
        let (start, end) = wedge_arc(angle_rad);
        let mid = (start + end) / 2.0;
        let half = WEDGE_HALF_ANGLE * widen;

        let mut mesh = Mesh::default();
        mesh.colored_vertex(self.geometry.center, with_alpha(colors::PHOSPHOR, alpha));
        for i in 0..=WEDGE_SEGMENTS {
            let a = mid - half + 2.0 * half * (i as f32 / WEDGE_SEGMENTS as f32);
            mesh.colored_vertex(self.geometry.edge_point(a), Color32::TRANSPARENT);
        }
        for i in 0..WEDGE_SEGMENTS as u32 {
            mesh.add_triangle(0, i + 1, i + 2);
        }
        mesh
    }

    /// Target layer: a glowing filled dot per visible target.
    /// Out-of-radius targets are skipped, not reported.
    fn paint_targets(&self, shapes: &mut Vec<Shape>) {
        for target in self.geometry.visible(&self.targets) {
            for (spread, fade) in HALO_LAYERS {
                shapes.push(Shape::circle_filled(
                    target.pos(),
                    BLIP_RADIUS + BLIP_GLOW * spread,
                    with_alpha(colors::PHOSPHOR, fade * 0.5),
                ));
            }
            shapes.push(Shape::circle_filled(
                target.pos(),
                BLIP_RADIUS,
                colors::PHOSPHOR,
            ));
        }
    }
}

/// Base color with the given opacity in [0, 1]
fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (alpha * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::data::RING_COUNT;

    fn default_targets() -> Vec<Target> {
        vec![
            Target::new(150.0, 100.0),
            Target::new(300.0, 200.0),
            Target::new(400.0, 350.0),
            Target::new(250.0, 400.0),
            Target::new(100.0, 300.0),
        ]
    }

    fn renderer() -> SweepRenderer {
        SweepRenderer::new(500.0, 500.0, default_targets())
    }

    /// Ring strokes: circles centered on the surface midpoint with no fill
    fn ring_circles(shapes: &[Shape], center: Pos2) -> Vec<(f32, f32)> {
        shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Circle(c) if c.center == center && c.fill == Color32::TRANSPARENT => {
                    Some((c.radius, c.stroke.width))
                }
                _ => None,
            })
            .collect()
    }

    /// Blip fills: circles with a fill and no stroke
    fn blip_circles(shapes: &[Shape]) -> Vec<(Pos2, f32)> {
        shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Circle(c) if c.fill != Color32::TRANSPARENT => Some((c.center, c.radius)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn angle_counts_frames_mod_360() {
        let mut r = renderer();
        assert_eq!(r.angle_degrees(), 0);
        for n in 1..=400u32 {
            r.render_frame();
            assert_eq!(r.angle_degrees() as u32, n % 360);
        }
    }

    #[test]
    fn full_revolution_returns_to_zero() {
        let mut r = renderer();
        for _ in 0..360 {
            r.render_frame();
        }
        assert_eq!(r.angle_degrees(), 0);
    }

    #[test]
    fn clear_comes_first_and_covers_surface() {
        let mut r = renderer();
        let shapes = r.render_frame();
        match &shapes[0] {
            Shape::Rect(rect) => {
                assert_eq!(rect.rect, Rect::from_min_size(Pos2::ZERO, Vec2::new(500.0, 500.0)));
                assert_eq!(rect.fill, colors::BG_PRIMARY);
            }
            other => panic!("expected clear rect first, got {other:?}"),
        }
    }

    #[test]
    fn five_rings_with_halos() {
        let mut r = renderer();
        let center = r.geometry().center;
        let shapes = r.render_frame();

        // core stroke plus two halo layers per ring
        let circles = ring_circles(&shapes, center);
        assert_eq!(circles.len(), RING_COUNT * (HALO_LAYERS.len() + 1));

        // each expected radius appears (the innermost three are distinct;
        // the i=4 ring coincides with the outer boundary)
        for expected in [60.0, 120.0, 180.0, 240.0] {
            assert!(
                circles.iter().any(|&(radius, _)| (radius - expected).abs() < 1e-3),
                "missing ring at radius {expected}"
            );
        }
    }

    #[test]
    fn wedge_is_two_meshes_with_constant_width() {
        let mut r = renderer();
        let center = r.geometry().center;
        let radius = r.geometry().radius;

        for _ in 0..3 {
            let shapes = r.render_frame();
            let meshes: Vec<&Mesh> = shapes
                .iter()
                .filter_map(|s| match s {
                    Shape::Mesh(m) => Some(&**m),
                    _ => None,
                })
                .collect();
            assert_eq!(meshes.len(), 2);

            for mesh in &meshes {
                // Fan root sits at the center, arc vertices on the ring edge
                assert_eq!(mesh.vertices[0].pos, center);
                for v in &mesh.vertices[1..] {
                    assert!(((v.pos - center).length() - radius).abs() < 1e-2);
                }
            }

            // The core wedge (drawn last) spans exactly the fixed arc width
            let core = meshes.last().unwrap();
            let first = core.vertices[1].pos - center;
            let last = core.vertices.last().unwrap().pos - center;
            let span = (last.y.atan2(last.x) - first.y.atan2(first.x)).abs();
            assert!((span - 2.0 * WEDGE_HALF_ANGLE).abs() < 1e-4);
        }
    }

    #[test]
    fn blips_fixed_across_frames() {
        let mut r = renderer();
        let first = blip_circles(&r.render_frame());
        let second = blip_circles(&r.render_frame());
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_radius_target_not_drawn() {
        let mut targets = default_targets();
        targets.push(Target::new(250.0, 600.0));
        let mut r = SweepRenderer::new(500.0, 500.0, targets);
        assert_eq!(r.visible_target_count(), 5);

        let shapes = r.render_frame();
        let blips = blip_circles(&shapes);
        // core dot plus two halo layers per visible target, none at the
        // filtered position
        assert_eq!(blips.len(), 5 * (HALO_LAYERS.len() + 1));
        assert!(blips.iter().all(|&(pos, _)| pos != Pos2::new(250.0, 600.0)));
    }

    #[test]
    fn empty_target_list_renders() {
        let mut r = SweepRenderer::new(500.0, 500.0, Vec::new());
        let shapes = r.render_frame();
        assert!(blip_circles(&shapes).is_empty());
        assert_eq!(r.angle_degrees(), 1);
    }
}
