//! Data models for widget projects, layers, and their styling.
//!
//! This module contains the document tree that the codec persists and the
//! binding resolver reads. Models are independent of rendering and storage.

pub mod background;
pub mod color;
pub mod data_type;
pub mod element;
pub mod fill;
pub mod layer;
pub mod layer_order;
pub mod project;
pub mod style;

// Re-export all model types
pub use background::{GlassBackground, GlassPreset, ImageBackground, ProjectBackground, SolidBackground};
pub use color::{CodableColor, NamedColor};
pub use data_type::{DataCategory, FormatStyle, WidgetDataType};
pub use element::{
    DataBindingConfig, FontWeight, IconElement, IconRenderingMode, ImageElement, LayerElement,
    ShapeElement, ShapeKind, TextAlignment, TextElement, TextFill,
};
pub use fill::{GradientFill, GradientKind, GradientStop, ImageContentMode, ShapeFill, UnitPointAnchor};
pub use layer::{LayerFrame, PixelRect, WidgetLayer};
pub use layer_order::{MoveOutcome, PaintOrder};
pub use project::{WidgetKind, WidgetProject, WidgetSize};
pub use style::{
    BlendMode, BorderConfig, CornerRadii, CornerRadiusConfig, DashStyle, LayerStyle, ShadowConfig,
    StrokeConfig,
};
