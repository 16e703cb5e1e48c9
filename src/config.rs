//! Startup configuration: surface dimensions and the fixed target list
//!
//! Resolved once before the renderer is constructed. On native the
//! environment may override the defaults (RADARSCOPE_SIZE, RADARSCOPE_TARGETS);
//! on the web the canvas element sizes the surface and a window global may
//! supply targets. Malformed overrides are logged and ignored.

use tracing::warn;

use crate::sweep::Target;

/// Surface dimensions when the host provides none
pub const DEFAULT_SURFACE: (f32, f32) = (500.0, 500.0);

/// Built-in target list, in surface coordinates of the default surface
pub const DEFAULT_TARGETS: [[f32; 2]; 5] = [
    [150.0, 100.0],
    [300.0, 200.0],
    [400.0, 350.0],
    [250.0, 400.0],
    [100.0, 300.0],
];

/// Everything the app needs to construct the renderer.
#[derive(Clone, Debug)]
pub struct ScopeConfig {
    pub surface_width: f32,
    pub surface_height: f32,
    pub targets: Vec<Target>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE.0,
            surface_height: DEFAULT_SURFACE.1,
            targets: DEFAULT_TARGETS.iter().copied().map(Target::from).collect(),
        }
    }
}

impl ScopeConfig {
    /// Resolve configuration from the environment.
    /// `RADARSCOPE_SIZE` takes `"WxH"`, `RADARSCOPE_TARGETS` a JSON array
    /// of `[x, y]` pairs.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("RADARSCOPE_SIZE") {
            match parse_size(&raw) {
                Some((w, h)) => {
                    config.surface_width = w;
                    config.surface_height = h;
                }
                None => warn!(value = %raw, "ignoring malformed RADARSCOPE_SIZE"),
            }
        }

        if let Ok(raw) = std::env::var("RADARSCOPE_TARGETS") {
            config = config.with_targets_json(&raw);
        }

        config
    }

    /// Replace the target list from a JSON array of `[x, y]` pairs,
    /// keeping the current list if the JSON does not parse.
    pub fn with_targets_json(mut self, json: &str) -> Self {
        match parse_targets(json) {
            Ok(targets) => self.targets = targets,
            Err(error) => warn!(%error, "ignoring malformed target list"),
        }
        self
    }
}

/// Parse a JSON array of `[x, y]` pairs into targets
pub fn parse_targets(json: &str) -> Result<Vec<Target>, serde_json::Error> {
    let pairs: Vec<[f32; 2]> = serde_json::from_str(json)?;
    Ok(pairs.into_iter().map(Target::from).collect())
}

/// Parse `"WxH"` into surface dimensions
#[cfg(not(target_arch = "wasm32"))]
fn parse_size(raw: &str) -> Option<(f32, f32)> {
    let (w, h) = raw.split_once(['x', 'X'])?;
    let w: f32 = w.trim().parse().ok()?;
    let h: f32 = h.trim().parse().ok()?;
    if w > 0.0 && h > 0.0 {
        Some((w, h))
    } else {
        None
    }
}
