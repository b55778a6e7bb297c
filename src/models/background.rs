//! Project backgrounds.

use crate::models::color::{clamp_unit, CodableColor};
use crate::models::fill::{GradientFill, ImageContentMode};
use serde::{Deserialize, Serialize};

/// Flat color background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidBackground {
    /// Fill color
    pub color: CodableColor,
    /// Opacity (0.0-1.0)
    pub opacity: f64,
}

impl SolidBackground {
    /// Creates an opaque solid background.
    #[must_use]
    pub fn new(color: CodableColor) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }
}

/// Photo background referencing an external image asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBackground {
    /// Opaque asset handle, resolved by the host
    pub image_id: String,
    /// Fitting mode
    pub content_mode: ImageContentMode,
    /// Gaussian blur radius in points
    pub blur: f64,
    /// Optional color laid over the photo
    pub overlay_color: Option<CodableColor>,
    /// Overlay opacity (0.0-1.0)
    pub overlay_opacity: f64,
    /// Brightness adjustment (-1.0 darkens, 1.0 brightens)
    pub brightness: f64,
    /// Saturation multiplier (0.0 = grayscale, 1.0 = unchanged)
    pub saturation: f64,
}

impl ImageBackground {
    /// Creates an unadjusted image background.
    pub fn new(image_id: impl Into<String>) -> Self {
        Self {
            image_id: image_id.into(),
            content_mode: ImageContentMode::Fill,
            blur: 0.0,
            overlay_color: None,
            overlay_opacity: 0.0,
            brightness: 0.0,
            saturation: 1.0,
        }
    }

    /// Adds a darkening/tinting overlay.
    #[must_use]
    pub fn with_overlay(mut self, color: CodableColor, opacity: f64) -> Self {
        self.overlay_color = Some(color);
        self.overlay_opacity = clamp_unit(opacity);
        self
    }
}

/// Named glass looks offered by the background picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GlassPreset {
    /// Milky white frost
    #[default]
    Frosted,
    /// Nearly transparent pane
    Clear,
    /// Blue-tinted pane
    Tinted,
    /// Smoked glass
    Dark,
    /// Saturated purple pane
    Vibrant,
}

impl GlassPreset {
    /// Every preset in picker order.
    pub const ALL: [Self; 5] = [
        Self::Frosted,
        Self::Clear,
        Self::Tinted,
        Self::Dark,
        Self::Vibrant,
    ];
}

/// Frosted-glass background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassBackground {
    /// Preset these parameters started from
    pub preset: GlassPreset,
    /// Blur radius in points
    pub blur_radius: f64,
    /// Tint color
    pub tint_color: CodableColor,
    /// Tint opacity (0.0-1.0)
    pub tint_opacity: f64,
    /// Noise grain opacity (0.0-1.0)
    pub noise_opacity: f64,
    /// Edge highlight opacity (0.0-1.0)
    pub border_opacity: f64,
    /// Edge highlight width in points
    pub border_width: f64,
}

impl GlassBackground {
    /// Canonical parameters for `preset`.
    #[must_use]
    pub fn from_preset(preset: GlassPreset) -> Self {
        let (blur_radius, tint_color, tint_opacity, noise_opacity, border_opacity) = match preset {
            GlassPreset::Frosted => (20.0, CodableColor::WHITE, 0.25, 0.05, 0.3),
            GlassPreset::Clear => (8.0, CodableColor::WHITE, 0.05, 0.0, 0.2),
            GlassPreset::Tinted => (16.0, CodableColor::BLUE, 0.2, 0.03, 0.25),
            GlassPreset::Dark => (24.0, CodableColor::BLACK, 0.45, 0.05, 0.15),
            GlassPreset::Vibrant => (18.0, CodableColor::from_rgb8(0xAF, 0x52, 0xDE), 0.3, 0.04, 0.3),
        };

        Self {
            preset,
            blur_radius,
            tint_color,
            tint_opacity,
            noise_opacity,
            border_opacity,
            border_width: 1.0,
        }
    }
}

impl Default for GlassBackground {
    fn default() -> Self {
        Self::from_preset(GlassPreset::default())
    }
}

/// Paint behind every layer of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ProjectBackground {
    /// Flat color
    Solid(SolidBackground),
    /// Gradient
    Gradient(GradientFill),
    /// Photo
    Image(ImageBackground),
    /// Frosted glass
    Glassmorphism(GlassBackground),
}

impl ProjectBackground {
    /// Every tag this union accepts in a document.
    pub const TAGS: &'static [&'static str] = &["solid", "gradient", "image", "glassmorphism"];

    /// Tag written for this variant.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Solid(_) => "solid",
            Self::Gradient(_) => "gradient",
            Self::Image(_) => "image",
            Self::Glassmorphism(_) => "glassmorphism",
        }
    }

    /// Opaque solid background of `color`.
    #[must_use]
    pub fn solid(color: CodableColor) -> Self {
        Self::Solid(SolidBackground::new(color))
    }

    /// Glass background with the canonical parameters of `preset`.
    #[must_use]
    pub fn glass(preset: GlassPreset) -> Self {
        Self::Glassmorphism(GlassBackground::from_preset(preset))
    }
}

impl Default for ProjectBackground {
    /// Opaque white.
    fn default() -> Self {
        Self::solid(CodableColor::WHITE)
    }
}
