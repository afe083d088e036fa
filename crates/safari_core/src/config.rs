//! Configuration
//!
//! [`SafariConfig`] is built once at startup (from [`Default`] or JSON) and
//! handed by reference to every component constructor. Nothing in the safari
//! crates reads configuration from ambient global state.
//!
//! Every section is `#[serde(default)]`, so a JSON document only needs the
//! values it overrides:
//!
//! ```rust,ignore
//! let config = SafariConfig::from_json(r#"{ "game": { "time_limit": 120.0 } }"#)?;
//! assert_eq!(config.game.categories.len(), 6);
//! ```

use std::path::Path;

use glam::Vec2;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{Result, SafariError};

/// Top-level configuration for one game instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SafariConfig {
    pub game: GameConfig,
    pub motion: WiggleConfig,
    pub wind: WindConfig,
    pub boundary: BoundaryConfig,
    pub hud: HudConfig,
    /// Seed for per-actor phase offsets. `None` draws a fresh seed per app.
    pub seed: Option<u64>,
}

impl SafariConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        self.wind.validate()?;
        self.boundary.validate()?;
        Ok(())
    }
}

// ============================================================================
// Game
// ============================================================================

/// Session rules: the countdown and the fixed set of discoverable categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown length in seconds.
    pub time_limit: f32,
    /// Category names. The number of entries is the total to discover.
    pub categories: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit: 300.0,
            categories: ["flamingo", "jaguarete", "nandu", "jurumi", "tagua", "tatu"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn total_categories(&self) -> usize {
        self.categories.len()
    }

    /// Interns the configured category names, preserving order.
    #[must_use]
    pub fn category_set(&self) -> Vec<Category> {
        self.categories.iter().map(|name| Category::new(name)).collect()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(SafariError::InvalidConfig(format!(
                "time_limit must be a positive number of seconds, got {}",
                self.time_limit
            )));
        }
        if self.categories.is_empty() {
            return Err(SafariError::InvalidConfig(
                "at least one category is required".to_string(),
            ));
        }

        let mut seen = FxHashSet::default();
        for name in &self.categories {
            if name.is_empty() {
                return Err(SafariError::InvalidConfig(
                    "category names must not be empty".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(SafariError::InvalidConfig(format!(
                    "duplicate category `{name}`"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Motion
// ============================================================================

/// One axis of oscillation: `amplitude` in world units (degrees for yaw),
/// `frequency` in radians per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    pub amplitude: f32,
    pub frequency: f32,
}

impl Oscillator {
    #[must_use]
    pub const fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }
}

/// Per-axis wiggle shared by every animal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiggleConfig {
    pub position_x: Oscillator,
    pub position_y: Oscillator,
    pub position_z: Oscillator,
    pub yaw: Oscillator,
}

impl Default for WiggleConfig {
    fn default() -> Self {
        Self {
            position_x: Oscillator::new(0.3, 2.1),
            position_y: Oscillator::new(0.2, 1.8),
            position_z: Oscillator::new(0.25, 2.3),
            yaw: Oscillator::new(5.0, 1.7),
        }
    }
}

/// Per-actor orbit parameters. Angles are in degrees, `speed` in radians per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    pub speed: f32,
    pub radius: f32,
    pub yaw_offset: f32,
    pub model_rotation: f32,
    pub path_rotation: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            speed: -0.2,
            radius: 2.0,
            yaw_offset: 0.0,
            model_rotation: -90.0,
            path_rotation: 0.0,
        }
    }
}

impl MotionParams {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("speed", self.speed),
            ("radius", self.radius),
            ("yaw_offset", self.yaw_offset),
            ("model_rotation", self.model_rotation),
            ("path_rotation", self.path_rotation),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SafariError::InvalidMotionParam { field, value });
            }
        }
        if self.radius < 0.0 {
            return Err(SafariError::InvalidMotionParam {
                field: "radius",
                value: self.radius,
            });
        }
        Ok(())
    }
}

/// Ambient wind applied to static scenery sub-parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    pub strength_x: f32,
    pub strength_y: f32,
    pub strength_z: f32,
    pub frequency: f32,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            strength_x: 0.01,
            strength_y: 0.01,
            strength_z: 0.01,
            frequency: 0.6,
        }
    }
}

impl WindConfig {
    /// Wind for a tree canopy: vertical sway is half the horizontal one.
    #[must_use]
    pub fn canopy(strength: f32) -> Self {
        Self {
            strength_x: strength,
            strength_y: strength * 0.5,
            strength_z: strength,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let values = [self.strength_x, self.strength_y, self.strength_z, self.frequency];
        if values.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(SafariError::InvalidConfig(format!("wind values must be finite: {self:?}")))
        }
    }
}

/// Horizontal circle the player rig is kept inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    pub radius: f32,
    pub center_x: f32,
    pub center_z: f32,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            radius: 45.0,
            center_x: 0.0,
            center_z: 0.0,
        }
    }
}

impl BoundaryConfig {
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_z)
    }

    pub fn validate(&self) -> Result<()> {
        if self.radius.is_finite() && self.radius > 0.0 {
            Ok(())
        } else {
            Err(SafariError::InvalidConfig(format!(
                "boundary radius must be positive, got {}",
                self.radius
            )))
        }
    }
}

/// Timer color thresholds, in seconds remaining.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub warning_below: f32,
    pub critical_below: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            warning_below: 120.0,
            critical_below: 60.0,
        }
    }
}

// ============================================================================
// Scene Manifest
// ============================================================================

/// What a billboard does when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillboardAction {
    /// Starts the safari session.
    Safari,
    /// The flight game; not available yet.
    Vuelo,
    /// Informational billboard.
    #[default]
    None,
}

/// A discoverable, animated animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalSpec {
    pub category: String,
    #[serde(default)]
    pub motion: MotionParams,
}

impl AnimalSpec {
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            motion: MotionParams::default(),
        }
    }

    #[must_use]
    pub fn with_motion(mut self, motion: MotionParams) -> Self {
        self.motion = motion;
        self
    }
}

/// Static scenery swaying in the wind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenerySpec {
    pub name: String,
    /// Overrides the global wind section when present.
    #[serde(default)]
    pub wind: Option<WindConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillboardSpec {
    pub name: String,
    #[serde(default)]
    pub action: BillboardAction,
    #[serde(default)]
    pub interactive: bool,
}

/// Entities to populate a scene with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneManifest {
    pub animals: Vec<AnimalSpec>,
    pub scenery: Vec<ScenerySpec>,
    pub billboards: Vec<BillboardSpec>,
}

impl SceneManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
