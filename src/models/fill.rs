//! Gradient and shape fill types.

use crate::models::color::{clamp_unit, CodableColor};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single color stop of a gradient.
///
/// `location` is always inside `0.0..=1.0`; constructors and setters clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    /// Stable identifier used by the editor to track a stop while dragging
    pub id: Uuid,
    /// Stop color
    pub color: CodableColor,
    /// Position along the gradient axis (0.0-1.0)
    pub location: f64,
}

impl GradientStop {
    /// Creates a stop with a fresh id, clamping `location` into `0.0..=1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use widget_studio::models::{CodableColor, GradientStop};
    ///
    /// assert_eq!(GradientStop::new(CodableColor::WHITE, -0.3).location, 0.0);
    /// assert_eq!(GradientStop::new(CodableColor::WHITE, 1.7).location, 1.0);
    /// ```
    #[must_use]
    pub fn new(color: CodableColor, location: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            location: clamp_unit(location),
        }
    }

    /// Moves the stop, clamping into `0.0..=1.0`.
    pub fn set_location(&mut self, location: f64) {
        self.location = clamp_unit(location);
    }
}

/// Geometry of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientKind {
    /// Straight line between `start_point` and `end_point`
    #[default]
    Linear,
    /// Circles growing out of `start_point`
    Radial,
    /// Sweep around `start_point`, rotated by `angle`
    Angular,
}

/// Named anchor on the 3x3 compass grid of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitPointAnchor {
    /// (0, 0)
    TopLeading,
    /// (0.5, 0)
    Top,
    /// (1, 0)
    TopTrailing,
    /// (0, 0.5)
    Leading,
    /// (0.5, 0.5)
    Center,
    /// (1, 0.5)
    Trailing,
    /// (0, 1)
    BottomLeading,
    /// (0.5, 1)
    Bottom,
    /// (1, 1)
    BottomTrailing,
}

impl UnitPointAnchor {
    /// Unit-square coordinates `(x, y)` with the origin at the top-leading corner.
    #[must_use]
    pub const fn unit_point(self) -> (f64, f64) {
        match self {
            Self::TopLeading => (0.0, 0.0),
            Self::Top => (0.5, 0.0),
            Self::TopTrailing => (1.0, 0.0),
            Self::Leading => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::Trailing => (1.0, 0.5),
            Self::BottomLeading => (0.0, 1.0),
            Self::Bottom => (0.5, 1.0),
            Self::BottomTrailing => (1.0, 1.0),
        }
    }
}

/// A gradient paint.
///
/// Stops keep their insertion order so the editor can list them the way the
/// user added them. Every read meant for painting ([`GradientFill::sorted_stops`],
/// [`GradientFill::colors`], [`GradientFill::gradient_stops`]) is ordered by
/// ascending location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientFill {
    /// Stops in insertion order
    pub stops: Vec<GradientStop>,
    /// Gradient geometry
    pub kind: GradientKind,
    /// Start anchor
    pub start_point: UnitPointAnchor,
    /// End anchor
    pub end_point: UnitPointAnchor,
    /// Rotation in degrees (angular gradients only)
    pub angle: f64,
}

impl GradientFill {
    /// Creates a top-leading to bottom-trailing gradient from explicit stops.
    #[must_use]
    pub fn new(stops: Vec<GradientStop>, kind: GradientKind) -> Self {
        Self {
            stops,
            kind,
            start_point: UnitPointAnchor::TopLeading,
            end_point: UnitPointAnchor::BottomTrailing,
            angle: 0.0,
        }
    }

    /// Creates a linear gradient with `colors` spread evenly from 0 to 1.
    ///
    /// A single color produces one stop at 0.0.
    #[must_use]
    pub fn evenly_spaced(colors: &[CodableColor]) -> Self {
        let last = colors.len().saturating_sub(1).max(1);
        #[allow(clippy::cast_precision_loss)]
        let stops = colors
            .iter()
            .enumerate()
            .map(|(idx, color)| GradientStop::new(*color, idx as f64 / last as f64))
            .collect();
        Self::new(stops, GradientKind::Linear)
    }

    /// Sets the anchor points.
    #[must_use]
    pub fn with_points(mut self, start: UnitPointAnchor, end: UnitPointAnchor) -> Self {
        self.start_point = start;
        self.end_point = end;
        self
    }

    /// Sets the angle (degrees).
    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Stops ordered by ascending location; ties keep insertion order.
    #[must_use]
    pub fn sorted_stops(&self) -> Vec<&GradientStop> {
        let mut sorted: Vec<&GradientStop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| a.location.total_cmp(&b.location));
        sorted
    }

    /// Stop colors in paint order.
    #[must_use]
    pub fn colors(&self) -> Vec<CodableColor> {
        self.sorted_stops().into_iter().map(|s| s.color).collect()
    }

    /// `(color, location)` pairs in paint order, as handed to the renderer.
    #[must_use]
    pub fn gradient_stops(&self) -> Vec<(CodableColor, f64)> {
        self.sorted_stops()
            .into_iter()
            .map(|s| (s.color, s.location))
            .collect()
    }

    /// Appends a stop and returns its id.
    pub fn add_stop(&mut self, color: CodableColor, location: f64) -> Uuid {
        let stop = GradientStop::new(color, location);
        let id = stop.id;
        self.stops.push(stop);
        id
    }

    /// Removes the stop with `id`. Returns false if no stop matched.
    pub fn remove_stop(&mut self, id: Uuid) -> bool {
        let before = self.stops.len();
        self.stops.retain(|s| s.id != id);
        self.stops.len() != before
    }

    /// Moves the stop with `id` (clamped). Returns false if no stop matched.
    pub fn set_stop_location(&mut self, id: Uuid, location: f64) -> bool {
        match self.stops.iter_mut().find(|s| s.id == id) {
            Some(stop) => {
                stop.set_location(location);
                true
            }
            None => false,
        }
    }

    /// Clamps every stop location and color; returns how many stops changed.
    pub(crate) fn clamp_stops(&mut self) -> usize {
        let mut changed = 0;
        for stop in &mut self.stops {
            let location = clamp_unit(stop.location);
            let color = stop.color.normalized();
            if location != stop.location || color != stop.color {
                stop.location = location;
                stop.color = color;
                changed += 1;
            }
        }
        changed
    }
}

impl Default for GradientFill {
    /// Blue to purple, top-leading to bottom-trailing.
    fn default() -> Self {
        Self::evenly_spaced(&[
            CodableColor::BLUE,
            CodableColor::from_rgb8(0xAF, 0x52, 0xDE),
        ])
    }
}

/// Paint applied to the interior of a shape layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ShapeFill {
    /// Transparent interior
    None,
    /// Flat color
    Solid(CodableColor),
    /// Gradient paint
    Gradient(GradientFill),
}

impl ShapeFill {
    /// Every tag this union accepts in a document.
    pub const TAGS: &'static [&'static str] = &["none", "solid", "gradient"];

    /// Tag written for this variant.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid(_) => "solid",
            Self::Gradient(_) => "gradient",
        }
    }
}

impl Default for ShapeFill {
    /// Opaque blue.
    fn default() -> Self {
        Self::Solid(CodableColor::BLUE)
    }
}

/// How an image asset is fitted into its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageContentMode {
    /// Scale to cover the bounds, cropping overflow
    #[default]
    Fill,
    /// Scale to fit inside the bounds, letterboxing
    Fit,
    /// Stretch to the bounds, ignoring aspect ratio
    Stretch,
}
