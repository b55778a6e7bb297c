//! Layer and frame data structures.

use crate::models::color::clamp_unit;
use crate::models::element::LayerElement;
use crate::models::project::WidgetSize;
use crate::models::style::{BlendMode, LayerStyle};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound of every frame percentage.
pub const MAX_PERCENT: f64 = 100.0;

/// Position and size of a layer as percentages of the widget's bounds.
///
/// `x`/`y` locate the layer's center; `width`/`height` are its extent. Keeping
/// everything relative lets one project render at any widget pixel size.
///
/// # Validation
///
/// - `x`, `y`, `width`, `height` must be within `0.0..=100.0`
/// - `rotation` is free (degrees, clockwise)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerFrame {
    /// Center x (0-100 % of widget width)
    pub x: f64,
    /// Center y (0-100 % of widget height)
    pub y: f64,
    /// Width (0-100 % of widget width)
    pub width: f64,
    /// Height (0-100 % of widget height)
    pub height: f64,
    /// Rotation in degrees
    pub rotation: f64,
}

/// Frame projected onto a concrete pixel size (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
    /// Rotation in degrees around the rect's center
    pub rotation: f64,
}

impl LayerFrame {
    /// Creates a frame, clamping each percentage into `0.0..=100.0`.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
            width: clamp_percent(width),
            height: clamp_percent(height),
            rotation: 0.0,
        }
    }

    /// Frame of the given size centered in the widget.
    #[must_use]
    pub fn centered(width: f64, height: f64) -> Self {
        Self::new(50.0, 50.0, width, height)
    }

    /// Sets the rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy moved by `(dx, dy)` percent, clamped to the widget.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: clamp_percent(self.x + dx),
            y: clamp_percent(self.y + dy),
            ..self
        }
    }

    /// True when every percentage is inside `0.0..=100.0`.
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| (0.0..=MAX_PERCENT).contains(v))
    }

    /// Clamps every percentage into range. Returns true if anything changed.
    pub fn clamp_to_bounds(&mut self) -> bool {
        let clamped = Self {
            x: clamp_percent(self.x),
            y: clamp_percent(self.y),
            width: clamp_percent(self.width),
            height: clamp_percent(self.height),
            rotation: if self.rotation.is_finite() { self.rotation } else { 0.0 },
        };
        let changed = clamped != *self;
        *self = clamped;
        changed
    }

    /// Projects the frame onto the reference pixel size of `size`.
    #[must_use]
    pub fn to_pixel_rect(&self, size: WidgetSize) -> PixelRect {
        let (widget_width, widget_height) = size.point_size();
        let width = widget_width * self.width / MAX_PERCENT;
        let height = widget_height * self.height / MAX_PERCENT;
        PixelRect {
            x: widget_width * self.x / MAX_PERCENT - width / 2.0,
            y: widget_height * self.y / MAX_PERCENT - height / 2.0,
            width,
            height,
            rotation: self.rotation,
        }
    }
}

impl Default for LayerFrame {
    /// Centered, 80% wide and 20% tall.
    fn default() -> Self {
        Self::centered(80.0, 20.0)
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_PERCENT)
    }
}

/// One visual element of a widget project.
///
/// The `id` never changes for the life of the layer and is independent of the
/// layer's position. `z_index` is owned by the project's layer-order
/// operations; editing any other field leaves paint order untouched.
///
/// `is_locked` is an editor hint (no geometry edits) and is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetLayer {
    /// Stable identifier
    id: Uuid,
    /// User-facing name
    pub name: String,
    /// Content
    pub element: LayerElement,
    /// Geometry
    pub frame: LayerFrame,
    /// Layer-level effects
    pub style: LayerStyle,
    /// Paint order key (higher paints later)
    z_index: i32,
    /// Drawn when true
    pub is_visible: bool,
    /// Editor geometry lock
    pub is_locked: bool,
    /// Opacity (0.0-1.0)
    pub opacity: f64,
    /// Compositing mode
    pub blend_mode: BlendMode,
}

impl WidgetLayer {
    /// Creates a visible, unlocked, opaque layer named after its content.
    ///
    /// The z-index is assigned when the layer is added to a project.
    #[must_use]
    pub fn new(element: LayerElement) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: element.default_name(),
            element,
            frame: LayerFrame::default(),
            style: LayerStyle::default(),
            z_index: 0,
            is_visible: true,
            is_locked: false,
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
        }
    }

    /// Creates a layer with a caller-chosen id (fixtures, imports).
    #[must_use]
    pub fn with_id(id: Uuid, element: LayerElement) -> Self {
        Self {
            id,
            ..Self::new(element)
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Paint order key.
    #[must_use]
    pub const fn z_index(&self) -> i32 {
        self.z_index
    }

    pub(crate) fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    /// Copy of this layer with a fresh id.
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the frame.
    #[must_use]
    pub fn with_frame(mut self, frame: LayerFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Sets the layer style.
    #[must_use]
    pub fn with_style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets opacity, clamped into `0.0..=1.0`.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = clamp_unit(opacity);
        self
    }

    /// Sets the blend mode.
    #[must_use]
    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    /// Toggles visibility.
    pub fn toggle_visibility(&mut self) {
        self.is_visible = !self.is_visible;
    }

    /// Toggles the geometry lock.
    pub fn toggle_lock(&mut self) {
        self.is_locked = !self.is_locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::{IconElement, TextElement};

    #[test]
    fn test_layer_new_defaults() {
        let layer = WidgetLayer::new(LayerElement::Text(TextElement::new("Hello")));
        assert_eq!(layer.name, "Hello");
        assert_eq!(layer.z_index(), 0);
        assert!(layer.is_visible);
        assert!(!layer.is_locked);
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(layer.blend_mode, BlendMode::Normal);
    }

    #[test]
    fn test_layer_ids_unique() {
        let a = WidgetLayer::new(LayerElement::Icon(IconElement::new("star")));
        let b = WidgetLayer::new(LayerElement::Icon(IconElement::new("star")));
        assert_ne!(a.id(), b.id());
        assert_ne!(a.id(), a.duplicate().id());
    }

    #[test]
    fn test_layer_builder() {
        let layer = WidgetLayer::new(LayerElement::Icon(IconElement::new("star")))
            .with_name("Star")
            .with_opacity(1.8)
            .with_frame(LayerFrame::centered(10.0, 10.0));
        assert_eq!(layer.name, "Star");
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(layer.frame.width, 10.0);
    }

    #[test]
    fn test_frame_new_clamps() {
        let frame = LayerFrame::new(-5.0, 120.0, 50.0, 200.0);
        assert_eq!(frame, LayerFrame::new(0.0, 100.0, 50.0, 100.0));
        assert!(frame.is_within_bounds());
    }

    #[test]
    fn test_frame_clamp_to_bounds() {
        let mut frame = LayerFrame {
            x: 150.0,
            y: 50.0,
            width: -3.0,
            height: 20.0,
            rotation: 45.0,
        };
        assert!(!frame.is_within_bounds());
        assert!(frame.clamp_to_bounds());
        assert_eq!(frame.x, 100.0);
        assert_eq!(frame.width, 0.0);
        assert_eq!(frame.rotation, 45.0);
        assert!(!frame.clamp_to_bounds());
    }

    #[test]
    fn test_frame_offset_clamped() {
        let frame = LayerFrame::new(98.0, 10.0, 10.0, 10.0).offset(5.0, 5.0);
        assert_eq!(frame.x, 100.0);
        assert_eq!(frame.y, 15.0);
    }

    #[test]
    fn test_to_pixel_rect() {
        let frame = LayerFrame::centered(50.0, 50.0);
        let rect = frame.to_pixel_rect(WidgetSize::Small);
        let (w, h) = WidgetSize::Small.point_size();
        assert_eq!(rect.width, w / 2.0);
        assert_eq!(rect.height, h / 2.0);
        assert_eq!(rect.x, w / 4.0);
        assert_eq!(rect.y, h / 4.0);
    }

    #[test]
    fn test_layer_json_field_names() {
        let layer = WidgetLayer::new(LayerElement::Text(TextElement::new("Hi")));
        let json = serde_json::to_value(&layer).unwrap();
        assert!(json.get("zIndex").is_some());
        assert!(json.get("isVisible").is_some());
        assert!(json.get("blendMode").is_some());
        assert_eq!(json["element"]["type"], "text");
    }
}
