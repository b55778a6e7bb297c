//! Shadow, stroke, border and corner-radius styling.

use crate::models::color::CodableColor;
use serde::{Deserialize, Serialize};

/// Drop (or inner) shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowConfig {
    /// Shadow color
    pub color: CodableColor,
    /// Blur radius in points
    pub radius: f64,
    /// Horizontal offset in points
    pub offset_x: f64,
    /// Vertical offset in points
    pub offset_y: f64,
    /// Opacity (0.0-1.0)
    pub opacity: f64,
    /// Draw inside the shape instead of behind it (shapes only)
    #[serde(default)]
    pub is_inner: bool,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            color: CodableColor::BLACK,
            radius: 4.0,
            offset_x: 0.0,
            offset_y: 2.0,
            opacity: 0.3,
            is_inner: false,
        }
    }
}

/// Dash pattern for strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashStyle {
    /// Continuous line
    #[default]
    Solid,
    /// Long dashes
    Dashed,
    /// Dots
    Dotted,
}

/// Outline drawn along a shape's path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeConfig {
    /// Stroke color
    pub color: CodableColor,
    /// Line width in points
    pub width: f64,
    /// Dash pattern
    pub dash_style: DashStyle,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: CodableColor::BLACK,
            width: 2.0,
            dash_style: DashStyle::Solid,
        }
    }
}

/// Plain border around a layer or outline around text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderConfig {
    /// Border color
    pub color: CodableColor,
    /// Width in points
    pub width: f64,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            color: CodableColor::WHITE,
            width: 1.0,
        }
    }
}

/// Per-corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    /// Top-leading radius
    pub top_leading: f64,
    /// Top-trailing radius
    pub top_trailing: f64,
    /// Bottom-leading radius
    pub bottom_leading: f64,
    /// Bottom-trailing radius
    pub bottom_trailing: f64,
}

/// Corner rounding, either one value for all corners or one per corner.
///
/// The accessors project a uniform value onto every corner, so callers never
/// branch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum CornerRadiusConfig {
    /// Same radius on every corner
    Uniform(f64),
    /// Independent radius per corner
    Individual(CornerRadii),
}

impl CornerRadiusConfig {
    /// Every tag this union accepts in a document.
    pub const TAGS: &'static [&'static str] = &["uniform", "individual"];

    /// Tag written for this variant.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::Individual(_) => "individual",
        }
    }

    /// Resolves to four explicit radii.
    #[must_use]
    pub const fn radii(&self) -> CornerRadii {
        match *self {
            Self::Uniform(r) => CornerRadii {
                top_leading: r,
                top_trailing: r,
                bottom_leading: r,
                bottom_trailing: r,
            },
            Self::Individual(radii) => radii,
        }
    }

    /// Top-leading radius.
    #[must_use]
    pub const fn top_leading(&self) -> f64 {
        self.radii().top_leading
    }

    /// Top-trailing radius.
    #[must_use]
    pub const fn top_trailing(&self) -> f64 {
        self.radii().top_trailing
    }

    /// Bottom-leading radius.
    #[must_use]
    pub const fn bottom_leading(&self) -> f64 {
        self.radii().bottom_leading
    }

    /// Bottom-trailing radius.
    #[must_use]
    pub const fn bottom_trailing(&self) -> f64 {
        self.radii().bottom_trailing
    }

    /// True when all four corners share one radius, whatever the variant.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let r = self.radii();
        r.top_leading == r.top_trailing
            && r.top_leading == r.bottom_leading
            && r.top_leading == r.bottom_trailing
    }
}

impl Default for CornerRadiusConfig {
    /// Uniform 12 points.
    fn default() -> Self {
        Self::Uniform(12.0)
    }
}

/// Compositing mode handed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendMode {
    /// Source over
    #[default]
    Normal,
    /// Multiply
    Multiply,
    /// Screen
    Screen,
    /// Overlay
    Overlay,
    /// Darken
    Darken,
    /// Lighten
    Lighten,
    /// Color dodge
    ColorDodge,
    /// Color burn
    ColorBurn,
    /// Soft light
    SoftLight,
    /// Hard light
    HardLight,
    /// Difference
    Difference,
    /// Exclusion
    Exclusion,
}

/// Layer-level effects applied after the element is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStyle {
    /// Optional drop shadow
    pub shadow: Option<ShadowConfig>,
    /// Gaussian blur radius in points (0 = none)
    pub blur_radius: f64,
    /// Optional border
    pub border: Option<BorderConfig>,
}

impl LayerStyle {
    /// Clamps the shadow and border colors. Returns the names of the fields fixed.
    pub(crate) fn normalize_colors(&mut self) -> Vec<&'static str> {
        let mut fixed = Vec::new();
        if let Some(shadow) = &mut self.shadow {
            if shadow.color.normalize_in_place() {
                fixed.push("shadow color");
            }
        }
        if let Some(border) = &mut self.border {
            if border.color.normalize_in_place() {
                fixed.push("border color");
            }
        }
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_projects_to_all_corners() {
        let uniform = CornerRadiusConfig::Uniform(8.0);
        let individual = CornerRadiusConfig::Individual(CornerRadii {
            top_leading: 8.0,
            top_trailing: 8.0,
            bottom_leading: 8.0,
            bottom_trailing: 8.0,
        });

        assert_eq!(uniform.top_leading(), 8.0);
        assert_eq!(uniform.top_trailing(), 8.0);
        assert_eq!(uniform.bottom_leading(), 8.0);
        assert_eq!(uniform.bottom_trailing(), 8.0);
        assert_eq!(uniform.radii(), individual.radii());
        assert!(uniform.is_uniform());
        assert!(individual.is_uniform());
    }

    #[test]
    fn test_individual_corners() {
        let config = CornerRadiusConfig::Individual(CornerRadii {
            top_leading: 1.0,
            top_trailing: 2.0,
            bottom_leading: 3.0,
            bottom_trailing: 4.0,
        });
        assert_eq!(config.top_trailing(), 2.0);
        assert_eq!(config.bottom_leading(), 3.0);
        assert!(!config.is_uniform());
    }

    #[test]
    fn test_default_corner_radius() {
        assert_eq!(CornerRadiusConfig::default(), CornerRadiusConfig::Uniform(12.0));
    }

    #[test]
    fn test_corner_radius_tagged_encoding() {
        let json = serde_json::to_value(CornerRadiusConfig::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "uniform", "payload": 12.0 }));

        let json = serde_json::json!({
            "type": "individual",
            "payload": { "topLeading": 1.0, "topTrailing": 2.0, "bottomLeading": 3.0, "bottomTrailing": 4.0 }
        });
        let config: CornerRadiusConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.tag(), "individual");
        assert_eq!(config.bottom_trailing(), 4.0);
    }

    #[test]
    fn test_shadow_inner_flag_defaults_false() {
        let json = serde_json::json!({
            "color": { "red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 },
            "radius": 3.0, "offsetX": 0.0, "offsetY": 1.0, "opacity": 0.5
        });
        let shadow: ShadowConfig = serde_json::from_value(json).unwrap();
        assert!(!shadow.is_inner);
    }

    #[test]
    fn test_blend_mode_names() {
        assert_eq!(
            serde_json::to_value(BlendMode::ColorDodge).unwrap(),
            serde_json::json!("colorDodge")
        );
    }
}
