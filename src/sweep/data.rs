//! Data model for the radar sweep scene
//!
//! - Target: fixed point of interest in surface coordinates
//! - SweepGeometry: center/radius derived once from surface dimensions
//! - SweepState: the rotating sweep angle counter
//! - RingSpec: radius/width/alpha of one background ring

use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Gap between the outer ring and the surface edge, in surface units.
pub const EDGE_MARGIN: f32 = 10.0;

/// Number of background rings: the outer boundary plus four concentric.
pub const RING_COUNT: usize = 5;

/// Half-angle of the sweep wedge in radians (full width 0.06 rad ≈ 3.4°).
pub const WEDGE_HALF_ANGLE: f32 = 0.03;

/// Radius of a target blip, in surface units.
pub const BLIP_RADIUS: f32 = 6.0;

// ============================================================================
// Target - fixed point of interest
// ============================================================================

/// A fixed target position in surface coordinates.
/// The target list is created at startup and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub x: f32,
    pub y: f32,
}

impl Target {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Position as an egui point
    #[inline]
    pub fn pos(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }
}

impl From<[f32; 2]> for Target {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// SweepGeometry - surface-derived constants
// ============================================================================

/// Center point and radius, computed once from the surface dimensions.
/// Invariant for the process lifetime.
#[derive(Clone, Copy, Debug)]
pub struct SweepGeometry {
    /// Surface midpoint
    pub center: Pos2,
    /// Outer ring radius: min(center.x, center.y) minus the edge margin
    pub radius: f32,
}

impl SweepGeometry {
    /// Derive geometry from surface dimensions.
    /// A surface smaller than the margin collapses to a zero radius.
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        let center = Pos2::new(surface_width / 2.0, surface_height / 2.0);
        let radius = (center.x.min(center.y) - EDGE_MARGIN).max(0.0);
        Self { center, radius }
    }

    /// Whether a target falls inside the visible radius.
    /// Boundary targets (distance == radius) are visible.
    #[inline]
    pub fn contains(&self, target: &Target) -> bool {
        (target.pos() - self.center).length() <= self.radius
    }

    /// Point on the outer ring in the given direction (radians)
    #[inline]
    pub fn edge_point(&self, angle_rad: f32) -> Pos2 {
        self.center + Vec2::new(angle_rad.cos(), angle_rad.sin()) * self.radius
    }

    /// Targets inside the visible radius, in list order
    pub fn visible<'a>(&'a self, targets: &'a [Target]) -> impl Iterator<Item = &'a Target> {
        targets.iter().filter(|t| self.contains(t))
    }
}

// ============================================================================
// SweepState - rotating angle counter
// ============================================================================

/// The sweep direction as an integer degree counter in [0, 360).
/// Advances by one degree per frame and wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepState {
    angle_degrees: u16,
}

impl SweepState {
    pub fn new() -> Self {
        Self { angle_degrees: 0 }
    }

    /// Current angle in degrees, always in [0, 360)
    #[inline]
    pub fn angle_degrees(&self) -> u16 {
        self.angle_degrees
    }

    /// Current angle in radians
    #[inline]
    pub fn radians(&self) -> f32 {
        (self.angle_degrees as f32).to_radians()
    }

    /// Advance one degree, wrapping at 360
    pub fn advance(&mut self) {
        self.angle_degrees = (self.angle_degrees + 1) % 360;
    }
}

/// Arc swept by the wedge at the given direction: (start, end) radians.
/// The width is constant regardless of direction.
#[inline]
pub fn wedge_arc(angle_rad: f32) -> (f32, f32) {
    (angle_rad - WEDGE_HALF_ANGLE, angle_rad + WEDGE_HALF_ANGLE)
}

// ============================================================================
// RingSpec - background ring layout
// ============================================================================

/// Stroke parameters for one background ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub radius: f32,
    pub stroke_width: f32,
    /// Stroke opacity in [0, 1]
    pub alpha: f32,
    /// Blur radius of the glow halo, in surface units
    pub glow: f32,
}

/// The five background rings, outer boundary first.
/// The inner rings sit at radius·i/4 with opacity 0.1 + 0.05·i.
pub fn rings(geometry: &SweepGeometry) -> [RingSpec; RING_COUNT] {
    let mut specs = [RingSpec {
        radius: geometry.radius,
        stroke_width: 2.0,
        alpha: 0.3,
        glow: 8.0,
    }; RING_COUNT];

    for i in 1..=4 {
        specs[i] = RingSpec {
            radius: geometry.radius * i as f32 / 4.0,
            stroke_width: 1.0,
            alpha: 0.1 + 0.05 * i as f32,
            glow: 6.0,
        };
    }
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_from_surface() {
        let geo = SweepGeometry::new(500.0, 500.0);
        assert_eq!(geo.center, Pos2::new(250.0, 250.0));
        assert_eq!(geo.radius, 240.0);

        // Non-square surface: radius follows the short axis
        let geo = SweepGeometry::new(800.0, 500.0);
        assert_eq!(geo.center, Pos2::new(400.0, 250.0));
        assert_eq!(geo.radius, 240.0);
    }

    #[test]
    fn degenerate_surface_clamps_radius() {
        let geo = SweepGeometry::new(10.0, 10.0);
        assert_eq!(geo.radius, 0.0);
    }

    #[test]
    fn target_visibility() {
        let geo = SweepGeometry::new(500.0, 500.0);

        // Distance ≈ 180.3 from (250, 250): inside
        assert!(geo.contains(&Target::new(150.0, 100.0)));
        // Distance 350: outside
        assert!(!geo.contains(&Target::new(250.0, 600.0)));
        // Boundary counts as visible
        assert!(geo.contains(&Target::new(250.0 + geo.radius, 250.0)));
        assert!(!geo.contains(&Target::new(250.0 + geo.radius + 0.5, 250.0)));
    }

    #[test]
    fn visible_preserves_list_order() {
        let geo = SweepGeometry::new(500.0, 500.0);
        let targets = vec![
            Target::new(150.0, 100.0),
            Target::new(250.0, 600.0),
            Target::new(300.0, 200.0),
        ];
        let visible: Vec<_> = geo.visible(&targets).collect();
        assert_eq!(visible.len(), 2);
        assert_eq!(*visible[0], targets[0]);
        assert_eq!(*visible[1], targets[2]);
    }

    #[test]
    fn angle_advances_and_wraps() {
        let mut state = SweepState::new();
        for n in 1..=720u32 {
            state.advance();
            assert_eq!(state.angle_degrees() as u32, n % 360);
        }
    }

    #[test]
    fn wraparound_after_full_revolution() {
        let mut state = SweepState::new();
        for _ in 0..360 {
            state.advance();
        }
        assert_eq!(state.angle_degrees(), 0);
    }

    #[test]
    fn wedge_width_constant() {
        for deg in [0u16, 45, 90, 180, 270, 359] {
            let (start, end) = wedge_arc((deg as f32).to_radians());
            assert!((end - start - 2.0 * WEDGE_HALF_ANGLE).abs() < 1e-6);
        }
    }

    #[test]
    fn ring_layout() {
        let geo = SweepGeometry::new(500.0, 500.0);
        let specs = rings(&geo);
        assert_eq!(specs.len(), RING_COUNT);

        // Outer boundary
        assert_eq!(specs[0].radius, 240.0);
        assert_eq!(specs[0].stroke_width, 2.0);
        assert!((specs[0].alpha - 0.3).abs() < 1e-6);

        // Concentric rings at radius·i/4 with graded opacity
        for i in 1..=4usize {
            assert_eq!(specs[i].radius, 240.0 * i as f32 / 4.0);
            assert_eq!(specs[i].stroke_width, 1.0);
            assert!((specs[i].alpha - (0.1 + 0.05 * i as f32)).abs() < 1e-6);
        }
    }

    #[test]
    fn ring_count_independent_of_surface() {
        for (w, h) in [(100.0, 100.0), (500.0, 500.0), (1920.0, 1080.0)] {
            assert_eq!(rings(&SweepGeometry::new(w, h)).len(), RING_COUNT);
        }
    }

    #[test]
    fn edge_point_lies_on_radius() {
        let geo = SweepGeometry::new(500.0, 500.0);
        for deg in (0..360).step_by(30) {
            let p = geo.edge_point((deg as f32).to_radians());
            assert!(((p - geo.center).length() - geo.radius).abs() < 1e-3);
        }
    }
}
