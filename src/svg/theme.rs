//! Ring configuration - geometry plus colors and opacities.
//!
//! A `RingConfig` is built once (defaults, or a JSON file layered over the
//! defaults) and passed by reference into every render call.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::RingGeometry;

lazy_static! {
    static ref RE_HEX_COLOR: Regex = Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap();
}

/// Stroke, fill and font settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingStyle {
    /// Stroke width for wedges and arrows
    #[serde(rename = "strokeWidth")]
    pub stroke_width: f64,
    /// Wedge outline and fill color
    #[serde(rename = "strokeColor")]
    pub stroke_color: String,
    /// Pointer arrows and arrowheads
    #[serde(rename = "arrowColor")]
    pub arrow_color: String,
    /// Fill opacity of occupied slots
    #[serde(rename = "liveOpacity")]
    pub live_opacity: f64,
    /// Fill opacity of free slots
    #[serde(rename = "deadOpacity")]
    pub dead_opacity: f64,
    #[serde(rename = "fontFamily")]
    pub font_family: String,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            stroke_width: 3.0,
            stroke_color: "#A17FFF".to_string(),
            arrow_color: "#0000FF".to_string(),
            live_opacity: 0.4,
            dead_opacity: 0.1,
            font_family: "consolas".to_string(),
        }
    }
}

/// Everything a render call needs besides the diagram itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub geometry: RingGeometry,
    pub style: RingStyle,
}

impl RingConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: RingConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid ring config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let g = &self.geometry;
        let s = &self.style;

        if g.segment_count == 0 {
            return Err("segmentCount must be at least 1".to_string());
        }
        if g.inner_radius.is_nan() || g.inner_radius <= 0.0 {
            return Err(format!("innerRadius must be positive, got {}", g.inner_radius));
        }
        if g.inner_radius >= g.outer_radius {
            return Err(format!(
                "innerRadius ({}) must be smaller than outerRadius ({})",
                g.inner_radius, g.outer_radius
            ));
        }
        if !g.center.x.is_finite() || !g.center.y.is_finite() {
            return Err("center must be finite".to_string());
        }
        if s.stroke_width.is_nan() || s.stroke_width < 0.0 {
            return Err(format!("strokeWidth must not be negative, got {}", s.stroke_width));
        }
        for (name, value) in [("liveOpacity", s.live_opacity), ("deadOpacity", s.dead_opacity)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within [0, 1], got {}", name, value));
            }
        }
        for (name, value) in [("strokeColor", &s.stroke_color), ("arrowColor", &s.arrow_color)] {
            if !RE_HEX_COLOR.is_match(value) {
                return Err(format!("{} must be a #RGB or #RRGGBB color, got {:?}", name, value));
            }
        }
        if s.font_family.trim().is_empty() {
            return Err("fontFamily must not be empty".to_string());
        }
        Ok(())
    }

    /// Canvas size: the ring center sits in the middle.
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.geometry.center.x * 2.0, self.geometry.center.y * 2.0)
    }
}
