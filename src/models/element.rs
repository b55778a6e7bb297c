//! Layer content: text, icon, shape, image and data-binding elements.

use crate::models::color::CodableColor;
use crate::models::data_type::{FormatStyle, WidgetDataType};
use crate::models::fill::{GradientFill, ImageContentMode, ShapeFill};
use crate::models::style::{BorderConfig, CornerRadiusConfig, ShadowConfig, StrokeConfig};
use serde::{Deserialize, Serialize};

/// Maximum number of characters of a text layer used for its default name.
pub const DEFAULT_NAME_CHARS: usize = 20;

/// Font weight, shared by text and icon elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    /// 100
    UltraLight,
    /// 200
    Thin,
    /// 300
    Light,
    /// 400
    #[default]
    Regular,
    /// 500
    Medium,
    /// 600
    Semibold,
    /// 700
    Bold,
    /// 800
    Heavy,
    /// 900
    Black,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlignment {
    /// Leading edge
    Leading,
    /// Centered
    #[default]
    Center,
    /// Trailing edge
    Trailing,
}

/// Paint used for glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum TextFill {
    /// Flat color
    Solid(CodableColor),
    /// Gradient clipped to the glyphs
    Gradient(GradientFill),
}

impl TextFill {
    /// Every tag this union accepts in a document.
    pub const TAGS: &'static [&'static str] = &["solid", "gradient"];

    /// Tag written for this variant.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Solid(_) => "solid",
            Self::Gradient(_) => "gradient",
        }
    }
}

impl Default for TextFill {
    fn default() -> Self {
        Self::Solid(CodableColor::BLACK)
    }
}

/// Literal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    /// Text to draw
    pub text: String,
    /// Font reference, resolved by the renderer ("system" = platform font)
    pub font_id: String,
    /// Point size
    pub font_size: f64,
    /// Weight
    pub font_weight: FontWeight,
    /// Glyph paint
    pub fill: TextFill,
    /// Alignment inside the frame
    pub alignment: TextAlignment,
    /// Extra space between characters in points
    pub letter_spacing: f64,
    /// Extra space between lines in points
    pub line_spacing: f64,
    /// Maximum lines (0 = unlimited)
    pub max_lines: u32,
    /// Optional glyph shadow
    pub shadow: Option<ShadowConfig>,
    /// Optional glyph outline
    pub outline: Option<BorderConfig>,
}

impl TextElement {
    /// Creates a text element with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_id: "system".to_string(),
            font_size: 17.0,
            font_weight: FontWeight::Regular,
            fill: TextFill::default(),
            alignment: TextAlignment::Center,
            letter_spacing: 0.0,
            line_spacing: 0.0,
            max_lines: 0,
            shadow: None,
            outline: None,
        }
    }

    /// Sets font and size.
    pub fn with_font(mut self, font_id: impl Into<String>, font_size: f64) -> Self {
        self.font_id = font_id.into();
        self.font_size = font_size;
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Sets a solid glyph color.
    #[must_use]
    pub fn with_color(mut self, color: CodableColor) -> Self {
        self.fill = TextFill::Solid(color);
        self
    }

    /// Sets the alignment.
    #[must_use]
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Default for TextElement {
    fn default() -> Self {
        Self::new("Text")
    }
}

/// How multi-layer symbols are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconRenderingMode {
    /// Single color
    #[default]
    Monochrome,
    /// One color at decreasing opacities
    Hierarchical,
    /// Up to three explicit colors
    Palette,
    /// Symbol's built-in colors
    Multicolor,
}

/// Symbolic glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconElement {
    /// Symbol name (e.g. "heart.fill")
    pub symbol_name: String,
    /// Coloring mode
    pub rendering_mode: IconRenderingMode,
    /// Main color
    pub primary_color: CodableColor,
    /// Second palette color
    pub secondary_color: Option<CodableColor>,
    /// Third palette color
    pub tertiary_color: Option<CodableColor>,
    /// Point size
    pub size: f64,
    /// Stroke weight
    pub weight: FontWeight,
    /// Optional shadow
    pub shadow: Option<ShadowConfig>,
}

impl IconElement {
    /// Creates a monochrome black icon.
    pub fn new(symbol_name: impl Into<String>) -> Self {
        Self {
            symbol_name: symbol_name.into(),
            rendering_mode: IconRenderingMode::Monochrome,
            primary_color: CodableColor::BLACK,
            secondary_color: None,
            tertiary_color: None,
            size: 32.0,
            weight: FontWeight::Regular,
            shadow: None,
        }
    }

    /// Colors actually used by the current rendering mode (at most three).
    #[must_use]
    pub fn active_colors(&self) -> Vec<CodableColor> {
        match self.rendering_mode {
            IconRenderingMode::Monochrome | IconRenderingMode::Hierarchical => {
                vec![self.primary_color]
            }
            IconRenderingMode::Palette => std::iter::once(self.primary_color)
                .chain(self.secondary_color)
                .chain(self.tertiary_color)
                .collect(),
            IconRenderingMode::Multicolor => Vec::new(),
        }
    }
}

/// Primitive shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    /// Sharp-cornered rectangle
    #[default]
    Rectangle,
    /// Circle inscribed in the frame
    Circle,
    /// Ellipse filling the frame
    Ellipse,
    /// Rectangle honoring the corner-radius config
    RoundedRectangle,
    /// Fully rounded ends
    Capsule,
    /// Horizontal line
    Line,
    /// Upward triangle
    Triangle,
    /// Five-pointed star
    Star,
}

impl ShapeKind {
    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Ellipse => "Ellipse",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Capsule => "Capsule",
            Self::Line => "Line",
            Self::Triangle => "Triangle",
            Self::Star => "Star",
        }
    }
}

/// Filled and/or stroked primitive shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeElement {
    /// Outline kind
    pub kind: ShapeKind,
    /// Interior paint
    pub fill: ShapeFill,
    /// Optional outline
    pub stroke: Option<StrokeConfig>,
    /// Corner rounding (rounded rectangles)
    pub corner_radius: CornerRadiusConfig,
    /// Optional shadow (may be an inner shadow)
    pub shadow: Option<ShadowConfig>,
}

impl ShapeElement {
    /// Creates a shape with the default fill and corner radius.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            fill: ShapeFill::default(),
            stroke: None,
            corner_radius: CornerRadiusConfig::default(),
            shadow: None,
        }
    }

    /// Replaces the fill.
    #[must_use]
    pub fn with_fill(mut self, fill: ShapeFill) -> Self {
        self.fill = fill;
        self
    }

    /// Adds a stroke.
    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeConfig) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Image asset placed as a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    /// Opaque asset handle
    pub image_id: String,
    /// Fitting mode
    pub content_mode: ImageContentMode,
    /// Corner radius in points
    pub corner_radius: f64,
    /// Opacity (0.0-1.0)
    pub opacity: f64,
    /// Blur radius in points
    pub blur: f64,
    /// Draw desaturated
    pub grayscale: bool,
    /// Optional tint
    pub tint_color: Option<CodableColor>,
}

impl ImageElement {
    /// Creates an unadjusted image element.
    pub fn new(image_id: impl Into<String>) -> Self {
        Self {
            image_id: image_id.into(),
            content_mode: ImageContentMode::Fill,
            corner_radius: 0.0,
            opacity: 1.0,
            blur: 0.0,
            grayscale: false,
            tint_color: None,
        }
    }
}

/// Placeholder whose text is resolved from live data at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBindingConfig {
    /// Value to display
    pub data_type: WidgetDataType,
    /// Styling for the resolved text; its `text` is ignored
    pub text_style: TextElement,
    /// Prepended to a resolved value
    pub prefix: String,
    /// Appended to a resolved value
    pub suffix: String,
    /// Shown verbatim when no value is available
    pub empty_text: String,
    /// Formatting requested from the formatter
    pub format_style: FormatStyle,
}

impl DataBindingConfig {
    /// Creates a binding with default styling and an em-dash fallback.
    #[must_use]
    pub fn new(data_type: WidgetDataType) -> Self {
        Self {
            data_type,
            text_style: TextElement::new(data_type.sample_value()),
            prefix: String::new(),
            suffix: String::new(),
            empty_text: "\u{2014}".to_string(),
            format_style: FormatStyle::Default,
        }
    }

    /// Sets prefix and suffix.
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Sets the empty-value fallback.
    pub fn with_empty_text(mut self, empty_text: impl Into<String>) -> Self {
        self.empty_text = empty_text.into();
        self
    }

    /// Sets the format style.
    #[must_use]
    pub fn with_format(mut self, format_style: FormatStyle) -> Self {
        self.format_style = format_style;
        self
    }

    /// Sets the text styling.
    #[must_use]
    pub fn with_text_style(mut self, text_style: TextElement) -> Self {
        self.text_style = text_style;
        self
    }
}

/// Content of a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum LayerElement {
    /// Literal text
    Text(TextElement),
    /// Symbolic glyph
    Icon(IconElement),
    /// Primitive shape
    Shape(ShapeElement),
    /// Image asset
    Image(ImageElement),
    /// Live-data placeholder
    DataBinding(DataBindingConfig),
}

impl LayerElement {
    /// Every tag this union accepts in a document.
    pub const TAGS: &'static [&'static str] = &["text", "icon", "shape", "image", "dataBinding"];

    /// Tag written for this variant.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Icon(_) => "icon",
            Self::Shape(_) => "shape",
            Self::Image(_) => "image",
            Self::DataBinding(_) => "dataBinding",
        }
    }

    /// Name a new layer gets from its content.
    ///
    /// # Examples
    ///
    /// ```
    /// use widget_studio::models::{IconElement, LayerElement, TextElement};
    ///
    /// let text = LayerElement::Text(TextElement::new("The Lord is my shepherd; I shall not want"));
    /// assert_eq!(text.default_name(), "The Lord is my sheph");
    ///
    /// let icon = LayerElement::Icon(IconElement::new("heart.fill"));
    /// assert_eq!(icon.default_name(), "Icon: heart.fill");
    /// ```
    #[must_use]
    pub fn default_name(&self) -> String {
        match self {
            Self::Text(text) => {
                let name: String = text.text.chars().take(DEFAULT_NAME_CHARS).collect();
                if name.trim().is_empty() {
                    "Text".to_string()
                } else {
                    name
                }
            }
            Self::Icon(icon) => format!("Icon: {}", icon.symbol_name),
            Self::Shape(shape) => format!("Shape: {}", shape.kind.display_name()),
            Self::Image(_) => "Image".to_string(),
            Self::DataBinding(binding) => binding.data_type.display_name().to_string(),
        }
    }

    /// Binding config if this is a data-binding element.
    #[must_use]
    pub const fn as_binding(&self) -> Option<&DataBindingConfig> {
        match self {
            Self::DataBinding(binding) => Some(binding),
            _ => None,
        }
    }

    /// Clamps stop locations and colors in every gradient the element owns.
    /// Returns the number of stops changed.
    pub(crate) fn clamp_gradients(&mut self) -> usize {
        let text_fill = match self {
            Self::Text(text) => Some(&mut text.fill),
            Self::DataBinding(binding) => Some(&mut binding.text_style.fill),
            _ => None,
        };
        if let Some(TextFill::Gradient(gradient)) = text_fill {
            return gradient.clamp_stops();
        }
        if let Self::Shape(ShapeElement {
            fill: ShapeFill::Gradient(gradient),
            ..
        }) = self
        {
            return gradient.clamp_stops();
        }
        0
    }

    /// Clamps every color the element owns outside its gradients.
    /// Returns the names of the fields fixed.
    pub(crate) fn normalize_colors(&mut self) -> Vec<&'static str> {
        let mut fixed = Vec::new();
        match self {
            Self::Text(text) => text.normalize_colors(&mut fixed),
            Self::DataBinding(binding) => binding.text_style.normalize_colors(&mut fixed),
            Self::Icon(icon) => {
                normalize_color(&mut icon.primary_color, "primary color", &mut fixed);
                if let Some(color) = &mut icon.secondary_color {
                    normalize_color(color, "secondary color", &mut fixed);
                }
                if let Some(color) = &mut icon.tertiary_color {
                    normalize_color(color, "tertiary color", &mut fixed);
                }
                if let Some(shadow) = &mut icon.shadow {
                    normalize_color(&mut shadow.color, "shadow color", &mut fixed);
                }
            }
            Self::Shape(shape) => {
                if let ShapeFill::Solid(color) = &mut shape.fill {
                    normalize_color(color, "fill color", &mut fixed);
                }
                if let Some(stroke) = &mut shape.stroke {
                    normalize_color(&mut stroke.color, "stroke color", &mut fixed);
                }
                if let Some(shadow) = &mut shape.shadow {
                    normalize_color(&mut shadow.color, "shadow color", &mut fixed);
                }
            }
            Self::Image(image) => {
                if let Some(color) = &mut image.tint_color {
                    normalize_color(color, "tint color", &mut fixed);
                }
            }
        }
        fixed
    }
}

impl TextElement {
    fn normalize_colors(&mut self, fixed: &mut Vec<&'static str>) {
        if let TextFill::Solid(color) = &mut self.fill {
            normalize_color(color, "fill color", fixed);
        }
        if let Some(shadow) = &mut self.shadow {
            normalize_color(&mut shadow.color, "shadow color", fixed);
        }
        if let Some(outline) = &mut self.outline {
            normalize_color(&mut outline.color, "outline color", fixed);
        }
    }
}

fn normalize_color(color: &mut CodableColor, name: &'static str, fixed: &mut Vec<&'static str>) {
    if color.normalize_in_place() {
        fixed.push(name);
    }
}
