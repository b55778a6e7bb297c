//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use chrono::{TimeZone, Utc};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use uuid::Uuid;
use widget_studio::codec;
use widget_studio::models::{
    BlendMode, BorderConfig, CodableColor, CornerRadii, CornerRadiusConfig, DashStyle,
    DataBindingConfig, FontWeight, FormatStyle, GlassBackground, GlassPreset, GradientFill,
    GradientKind, GradientStop, IconElement, IconRenderingMode, ImageBackground, ImageContentMode,
    ImageElement, LayerElement, LayerFrame, LayerStyle, ProjectBackground, ShadowConfig, ShapeElement,
    ShapeFill, ShapeKind, StrokeConfig, TextAlignment, TextElement, TextFill, UnitPointAnchor,
    WidgetDataType, WidgetKind, WidgetLayer, WidgetProject, WidgetSize,
};

pub const PROJECT_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001);
pub const BACKDROP_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_00a1);
pub const TITLE_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_00a2);
pub const STREAK_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_00a3);

/// Creates a medium home-screen project with three layers.
///
/// Sequence and paint order are both: Backdrop (shape), Title (text),
/// Streak (reading-streak binding with a " days" suffix).
pub fn test_project_basic() -> WidgetProject {
    // Use deterministic timestamps
    let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let modified = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();

    let mut project = WidgetProject::with_id(
        PROJECT_ID,
        "Test Widget",
        WidgetKind::HomeScreen,
        WidgetSize::Medium,
    );

    project.add_layer(
        WidgetLayer::with_id(
            BACKDROP_ID,
            LayerElement::Shape(ShapeElement::new(ShapeKind::RoundedRectangle)),
        )
        .with_name("Backdrop")
        .with_frame(LayerFrame::centered(100.0, 100.0)),
    );
    project.add_layer(
        WidgetLayer::with_id(TITLE_ID, LayerElement::Text(TextElement::new("Keep reading")))
            .with_name("Title")
            .with_frame(LayerFrame::new(50.0, 25.0, 80.0, 20.0)),
    );
    project.add_layer(
        WidgetLayer::with_id(
            STREAK_ID,
            LayerElement::DataBinding(
                DataBindingConfig::new(WidgetDataType::ReadingStreak)
                    .with_affixes("", " days")
                    .with_empty_text("No streak yet")
                    .with_format(FormatStyle::Default),
            ),
        )
        .with_name("Streak")
        .with_frame(LayerFrame::new(50.0, 70.0, 80.0, 30.0)),
    );

    project.created_at = created;
    project.modified_at = modified;
    project
}

/// Creates a large home-screen project using every element kind and every
/// nested fill, corner-radius, stroke and shadow variant. All values are in
/// range, so decoding it needs no repair.
pub fn test_project_full() -> WidgetProject {
    let ember = CodableColor::from_rgb8(0xFF, 0x6B, 0x35);
    let dusk = CodableColor::rgb(0.2, 0.1, 0.4).with_alpha(0.8);
    let shadow = ShadowConfig {
        color: dusk,
        radius: 6.0,
        offset_x: 1.5,
        offset_y: 3.0,
        opacity: 0.45,
        is_inner: false,
    };
    let radial = GradientFill::new(
        vec![
            GradientStop::new(ember, 0.0),
            GradientStop::new(dusk, 0.35),
            GradientStop::new(CodableColor::WHITE, 1.0),
        ],
        GradientKind::Radial,
    )
    .with_points(UnitPointAnchor::Center, UnitPointAnchor::BottomTrailing);
    let angular = GradientFill::evenly_spaced(&[ember, CodableColor::BLUE])
        .with_angle(45.0);
    let angular = GradientFill {
        kind: GradientKind::Angular,
        ..angular
    };

    let mut project = WidgetProject::with_id(
        PROJECT_ID,
        "Every Variant",
        WidgetKind::HomeScreen,
        WidgetSize::Large,
    );

    let mut title = TextElement::new("Be still, and know")
        .with_font("serif", 22.0)
        .with_weight(FontWeight::Semibold)
        .with_alignment(TextAlignment::Leading);
    title.fill = TextFill::Gradient(angular.clone());
    title.letter_spacing = 0.5;
    title.line_spacing = 2.0;
    title.max_lines = 2;
    title.shadow = Some(shadow);
    title.outline = Some(BorderConfig {
        color: CodableColor::WHITE,
        width: 0.5,
    });

    let mut icon = IconElement::new("flame.fill");
    icon.rendering_mode = IconRenderingMode::Palette;
    icon.primary_color = ember;
    icon.secondary_color = Some(dusk);
    icon.tertiary_color = Some(CodableColor::WHITE);
    icon.size = 28.0;
    icon.weight = FontWeight::Bold;
    icon.shadow = Some(shadow);

    let mut card = ShapeElement::new(ShapeKind::RoundedRectangle)
        .with_fill(ShapeFill::Gradient(radial))
        .with_stroke(StrokeConfig {
            color: dusk,
            width: 1.5,
            dash_style: DashStyle::Dashed,
        });
    card.corner_radius = CornerRadiusConfig::Individual(CornerRadii {
        top_leading: 24.0,
        top_trailing: 8.0,
        bottom_leading: 8.0,
        bottom_trailing: 24.0,
    });
    card.shadow = Some(ShadowConfig {
        is_inner: true,
        ..shadow
    });

    let mut outline = ShapeElement::new(ShapeKind::Capsule).with_fill(ShapeFill::None);
    outline.stroke = Some(StrokeConfig {
        color: ember,
        width: 2.0,
        dash_style: DashStyle::Dotted,
    });
    outline.corner_radius = CornerRadiusConfig::Uniform(6.0);

    let mut photo = ImageElement::new("photo-sunrise");
    photo.content_mode = ImageContentMode::Fit;
    photo.corner_radius = 12.0;
    photo.opacity = 0.9;
    photo.blur = 2.0;
    photo.grayscale = true;
    photo.tint_color = Some(dusk);

    let streak_style = TextElement::new("12").with_color(ember);
    let streak = DataBindingConfig::new(WidgetDataType::PrayerStreak)
        .with_affixes("Day ", "")
        .with_empty_text("")
        .with_format(FormatStyle::Short)
        .with_text_style(streak_style);

    project.add_layer(
        WidgetLayer::with_id(BACKDROP_ID, LayerElement::Shape(card))
            .with_name("Card")
            .with_frame(LayerFrame::centered(96.0, 96.0))
            .with_style(LayerStyle {
                shadow: Some(shadow),
                blur_radius: 3.0,
                border: Some(BorderConfig::default()),
            }),
    );
    project.add_layer(
        WidgetLayer::new(LayerElement::Image(photo))
            .with_name("Photo")
            .with_frame(LayerFrame::new(25.0, 30.0, 40.0, 40.0).with_rotation(-8.0))
            .with_opacity(0.75)
            .with_blend_mode(BlendMode::Multiply),
    );
    project.add_layer(
        WidgetLayer::new(LayerElement::Shape(outline))
            .with_name("Ring")
            .with_frame(LayerFrame::new(75.0, 30.0, 20.0, 20.0)),
    );
    project.add_layer(
        WidgetLayer::with_id(TITLE_ID, LayerElement::Text(title))
            .with_name("Title")
            .with_frame(LayerFrame::new(50.0, 70.0, 90.0, 15.0)),
    );
    project.add_layer(
        WidgetLayer::new(LayerElement::Icon(icon))
            .with_name("Flame")
            .with_frame(LayerFrame::new(10.0, 90.0, 10.0, 10.0)),
    );
    let mut streak_layer = WidgetLayer::with_id(STREAK_ID, LayerElement::DataBinding(streak))
        .with_name("Streak")
        .with_frame(LayerFrame::new(30.0, 90.0, 30.0, 10.0));
    streak_layer.is_locked = true;
    streak_layer.is_visible = false;
    project.add_layer(streak_layer);

    project.template_id = Some("sunrise-hope".to_string());
    project.is_favorite = true;
    project.created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    project.modified_at = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
    project
}

/// One background of every kind, with non-default parameters.
pub fn test_backgrounds() -> Vec<ProjectBackground> {
    let mut glass = GlassBackground::from_preset(GlassPreset::Tinted);
    glass.blur_radius = 18.0;
    glass.border_width = 0.75;

    let mut image = ImageBackground::new("bg-mountains").with_overlay(CodableColor::BLACK, 0.35);
    image.content_mode = ImageContentMode::Stretch;
    image.blur = 4.0;
    image.brightness = -0.1;
    image.saturation = 1.2;

    vec![
        ProjectBackground::solid(CodableColor::from_rgb8(0x1C, 0x1C, 0x1E)),
        ProjectBackground::Gradient(
            GradientFill::evenly_spaced(&[CodableColor::BLUE, CodableColor::WHITE])
                .with_points(UnitPointAnchor::Top, UnitPointAnchor::Bottom),
        ),
        ProjectBackground::Image(image),
        ProjectBackground::Glassmorphism(glass),
        ProjectBackground::glass(GlassPreset::Vibrant),
    ]
}

/// Encoded form of [`test_project_basic`] as a JSON value, for tests that
/// corrupt individual nodes.
pub fn test_project_value() -> Value {
    serde_json::to_value(test_project_basic()).unwrap()
}

/// Writes `content` to `name` in a fresh temp directory.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (path, temp_dir)
}

/// Writes an encoded project to a temp file.
pub fn create_temp_project_file(project: &WidgetProject) -> (PathBuf, TempDir) {
    create_temp_file("project.json", &codec::encode(project).unwrap())
}

/// Writes a raw JSON document to a temp file.
pub fn create_temp_value_file(value: &Value) -> (PathBuf, TempDir) {
    create_temp_file("project.json", &value.to_string())
}
