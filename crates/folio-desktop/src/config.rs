//! Desktop configuration
//!
//! Every field has a default, so a JSON override only needs the keys it
//! changes: `{"defaultSize": {"width": 800, "height": 500}}`.

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::math::{Size, Vec2};

/// Largest accepted `initialZ`; leaves room for `u32::MAX / 2` raises
pub const MAX_INITIAL_Z: u32 = u32::MAX / 2;

/// Rectangle of allowed window offsets, relative to the work-area centre
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OffsetRange {
    pub min: Vec2,
    pub max: Vec2,
}

impl OffsetRange {
    /// Create a range symmetric around the origin
    #[inline]
    pub const fn symmetric(half_width: f32, half_height: f32) -> Self {
        Self {
            min: Vec2::new(-half_width, -half_height),
            max: Vec2::new(half_width, half_height),
        }
    }

    /// Map unit samples `tx, ty` in `[0, 1)` into the range
    #[inline]
    pub fn sample(&self, tx: f32, ty: f32) -> Vec2 {
        Vec2::new(
            self.min.x + (self.max.x - self.min.x) * tx,
            self.min.y + (self.max.y - self.min.y) * ty,
        )
    }

    /// Clamp an offset into the range
    ///
    /// An inverted axis is treated as if its ends were swapped.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        let (lo, hi) = self.bounds();
        p.clamp(lo, hi)
    }

    /// Check if an offset lies inside the range (edges included)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let (lo, hi) = self.bounds();
        p.x >= lo.x && p.x <= hi.x && p.y >= lo.y && p.y <= hi.y
    }

    /// Per-axis lower and upper corners
    fn bounds(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            Vec2::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        )
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        let finite = [self.min.x, self.min.y, self.max.x, self.max.y]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::InvalidValue {
                field,
                reason: "bounds must be finite".to_string(),
            });
        }
        if self.min.x > self.max.x || self.min.y > self.max.y {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!(
                    "min ({}, {}) exceeds max ({}, {})",
                    self.min.x, self.min.y, self.max.x, self.max.y
                ),
            });
        }
        Ok(())
    }
}

/// Tunables for window creation and dragging
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Size given to newly opened windows
    pub default_size: Size,
    /// Range new windows are randomly offset within
    pub spawn_range: OffsetRange,
    /// Range a drag may move a window within
    pub drag_range: OffsetRange,
    /// Starting value of the z-order counter; the first window gets this + 1
    pub initial_z: u32,
    /// Height of the menu bar, excluded from the work area
    pub menu_bar_height: f32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            default_size: Size::new(600.0, 400.0),
            spawn_range: OffsetRange::symmetric(50.0, 50.0),
            drag_range: OffsetRange::symmetric(500.0, 300.0),
            initial_z: 1,
            menu_bar_height: 24.0,
        }
    }
}

impl DesktopConfig {
    /// Parse a JSON override on top of the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_size.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "defaultSize",
                reason: format!(
                    "{}x{} is not a positive size",
                    self.default_size.width, self.default_size.height
                ),
            });
        }
        if self.menu_bar_height.is_nan() || self.menu_bar_height < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "menuBarHeight",
                reason: format!("{} is not a valid height", self.menu_bar_height),
            });
        }
        if self.initial_z > MAX_INITIAL_Z {
            return Err(ConfigError::InvalidValue {
                field: "initialZ",
                reason: format!("{} exceeds {}", self.initial_z, MAX_INITIAL_Z),
            });
        }
        self.spawn_range.validate("spawnRange")?;
        self.drag_range.validate("dragRange")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DesktopConfig::default();
        assert_eq!(config.default_size, Size::new(600.0, 400.0));
        assert_eq!(config.initial_z, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = DesktopConfig::from_json(r#"{"initialZ": 10, "menuBarHeight": 30}"#).unwrap();
        assert_eq!(config.initial_z, 10);
        assert!((config.menu_bar_height - 30.0).abs() < 0.001);
        assert_eq!(config.default_size, Size::new(600.0, 400.0));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = DesktopConfig::from_json(
            r#"{"dragRange": {"min": {"x": 10, "y": 0}, "max": {"x": -10, "y": 0}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "dragRange", .. }));
    }

    #[test]
    fn test_rejects_initial_z_near_overflow() {
        let err = DesktopConfig::from_json(r#"{"initialZ": 4294967295}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "initialZ", .. }));

        let config = DesktopConfig { initial_z: MAX_INITIAL_Z, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_finite_range() {
        let config = DesktopConfig {
            spawn_range: OffsetRange::symmetric(f32::INFINITY, 50.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "spawnRange", .. })
        ));
    }

    #[test]
    fn test_inverted_range_clamps_without_panic() {
        let range = OffsetRange::symmetric(-10.0, -10.0);
        assert_eq!(range.clamp(Vec2::new(30.0, -30.0)), Vec2::new(10.0, -10.0));
        assert!(range.contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_rejects_empty_size() {
        let err = DesktopConfig::from_json(r#"{"defaultSize": {"width": 0, "height": 400}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "defaultSize", .. }));
    }

    #[test]
    fn test_offset_range_sample_and_clamp() {
        let range = OffsetRange::symmetric(50.0, 50.0);
        assert_eq!(range.sample(0.0, 0.0), Vec2::new(-50.0, -50.0));
        assert_eq!(range.sample(0.5, 0.75), Vec2::new(0.0, 25.0));
        assert_eq!(range.clamp(Vec2::new(80.0, -90.0)), Vec2::new(50.0, -50.0));
        assert!(range.contains(Vec2::new(50.0, 50.0)));
        assert!(!range.contains(Vec2::new(50.1, 0.0)));
    }
}
