//! Built-in gradient presets and verse-card templates.
//!
//! Both catalogs are embedded in the binary as JSON and parsed once into a
//! process-wide read-only [`PresetCatalog`]. There is no mutation API; callers
//! only look entries up or filter them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::models::{
    CodableColor, DataBindingConfig, FontWeight, GlassPreset, GradientFill, GradientKind, LayerElement,
    LayerFrame, ProjectBackground, TextAlignment, TextElement, UnitPointAnchor, WidgetDataType,
    WidgetKind, WidgetLayer, WidgetProject, WidgetSize,
};

/// Grouping of gradient presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientCategory {
    /// Warm morning tones
    Sunrise,
    /// Blues and teals
    Ocean,
    /// Greens and earth
    Nature,
    /// Saturated, high-contrast
    Vibrant,
    /// Low-light
    Dark,
    /// Soft, light tones
    Pastel,
}

impl GradientCategory {
    /// Every category in display order.
    pub const ALL: [Self; 6] = [
        Self::Sunrise,
        Self::Ocean,
        Self::Nature,
        Self::Vibrant,
        Self::Dark,
        Self::Pastel,
    ];

    /// Identifier as written in catalogs and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Ocean => "ocean",
            Self::Nature => "nature",
            Self::Vibrant => "vibrant",
            Self::Dark => "dark",
            Self::Pastel => "pastel",
        }
    }

    /// Parses an identifier (case-insensitive).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for GradientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Theme of a verse-card template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerseCardCategory {
    /// Everyday encouragement
    Daily,
    /// Rest and comfort
    Peace,
    /// Looking forward
    Hope,
    /// Worship
    Praise,
    /// Courage and perseverance
    Strength,
    /// Proverbs and teaching
    Wisdom,
    /// Love and belonging
    Love,
}

impl VerseCardCategory {
    /// Every category in display order.
    pub const ALL: [Self; 7] = [
        Self::Daily,
        Self::Peace,
        Self::Hope,
        Self::Praise,
        Self::Strength,
        Self::Wisdom,
        Self::Love,
    ];

    /// Identifier as written in catalogs and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Peace => "peace",
            Self::Hope => "hope",
            Self::Praise => "praise",
            Self::Strength => "strength",
            Self::Wisdom => "wisdom",
            Self::Love => "love",
        }
    }

    /// Parses an identifier (case-insensitive).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for VerseCardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Named gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientPreset {
    /// Stable identifier (e.g. "golden-hour")
    pub id: String,
    /// Display name
    pub name: String,
    /// Grouping
    pub category: GradientCategory,
    /// Ready-to-use fill
    pub fill: GradientFill,
}

/// Styling of a verse card, applied when a template is instantiated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseCardConfig {
    /// Card background
    pub background: ProjectBackground,
    /// Style of the verse text
    pub verse_style: TextElement,
    /// Style of the reference line
    pub reference_style: TextElement,
    /// Whether a reference line is added
    pub show_reference: bool,
}

/// Ready-made verse card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseCardTemplate {
    /// Stable identifier (e.g. "morning-mercies")
    pub id: String,
    /// Display name
    pub name: String,
    /// Theme
    pub category: VerseCardCategory,
    /// Card styling
    pub config: VerseCardConfig,
    /// Optional preview asset id
    pub preview_image: Option<String>,
    /// Requires a subscription
    pub is_premium: bool,
}

impl VerseCardTemplate {
    /// Builds a new project from this template.
    ///
    /// The project gets the template's background, a verse-of-the-day binding
    /// and, when enabled, a verse-reference binding below it. Kind and size
    /// are not checked against each other here; see [`WidgetProject::validate`].
    #[must_use]
    pub fn instantiate(&self, kind: WidgetKind, size: WidgetSize) -> WidgetProject {
        let mut project = WidgetProject::new(self.name.clone(), kind, size)
            .with_background(self.config.background.clone());
        project.template_id = Some(self.id.clone());

        let verse = DataBindingConfig::new(WidgetDataType::VerseOfTheDay)
            .with_text_style(self.config.verse_style.clone())
            .with_empty_text("");
        let verse_frame = if self.config.show_reference {
            LayerFrame::new(50.0, 42.0, 88.0, 64.0)
        } else {
            LayerFrame::centered(88.0, 80.0)
        };
        project.add_layer(WidgetLayer::new(LayerElement::DataBinding(verse)).with_frame(verse_frame));

        if self.config.show_reference {
            let reference = DataBindingConfig::new(WidgetDataType::VerseReference)
                .with_text_style(self.config.reference_style.clone())
                .with_empty_text("");
            project.add_layer(
                WidgetLayer::new(LayerElement::DataBinding(reference))
                    .with_frame(LayerFrame::new(50.0, 86.0, 80.0, 12.0)),
            );
        }

        project
    }
}

/// Read-only catalog of presets.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    gradients: Vec<GradientPreset>,
    templates: Vec<VerseCardTemplate>,
}

static CATALOG: OnceLock<Result<PresetCatalog, String>> = OnceLock::new();

/// The process-wide catalog, parsed on first access.
///
/// # Examples
///
/// ```
/// use widget_studio::presets::{self, GradientCategory};
///
/// let catalog = presets::catalog()?;
/// assert!(catalog.gradient("golden-hour").is_some());
/// assert!(catalog.gradients_in(GradientCategory::Ocean).count() > 0);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn catalog() -> Result<&'static PresetCatalog> {
    CATALOG
        .get_or_init(|| PresetCatalog::load_embedded().map_err(|e| format!("{e:#}")))
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Embedded preset catalog is invalid: {e}"))
}

impl PresetCatalog {
    /// Parses the catalogs embedded in the binary.
    pub fn load_embedded() -> Result<Self> {
        Self::from_json(
            include_str!("gradients.json"),
            include_str!("verse_cards.json"),
        )
    }

    /// Parses gradient and template catalogs.
    pub fn from_json(gradients_json: &str, templates_json: &str) -> Result<Self> {
        let gradient_file: GradientFile =
            serde_json::from_str(gradients_json).context("Failed to parse gradient catalog")?;
        let template_file: TemplateFile =
            serde_json::from_str(templates_json).context("Failed to parse verse-card catalog")?;

        let mut gradients = Vec::with_capacity(gradient_file.gradients.len());
        for entry in gradient_file.gradients {
            let id = entry.id.clone();
            gradients.push(entry.build().with_context(|| format!("Invalid gradient preset '{id}'"))?);
        }

        let by_id: HashMap<&str, &GradientPreset> =
            gradients.iter().map(|g| (g.id.as_str(), g)).collect();
        if by_id.len() != gradients.len() {
            anyhow::bail!("Gradient catalog contains duplicate ids");
        }

        let mut templates = Vec::with_capacity(template_file.templates.len());
        for entry in template_file.templates {
            let id = entry.id.clone();
            templates.push(
                entry
                    .build(&by_id)
                    .with_context(|| format!("Invalid verse-card template '{id}'"))?,
            );
        }

        Ok(Self { gradients, templates })
    }

    /// Every gradient preset in catalog order.
    #[must_use]
    pub fn gradients(&self) -> &[GradientPreset] {
        &self.gradients
    }

    /// Every verse-card template in catalog order.
    #[must_use]
    pub fn templates(&self) -> &[VerseCardTemplate] {
        &self.templates
    }

    /// Gradient preset by id.
    #[must_use]
    pub fn gradient(&self, id: &str) -> Option<&GradientPreset> {
        self.gradients.iter().find(|g| g.id == id)
    }

    /// Gradient presets of one category.
    pub fn gradients_in(&self, category: GradientCategory) -> impl Iterator<Item = &GradientPreset> {
        self.gradients.iter().filter(move |g| g.category == category)
    }

    /// Template by id.
    #[must_use]
    pub fn template(&self, id: &str) -> Option<&VerseCardTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Templates of one category.
    pub fn templates_in(&self, category: VerseCardCategory) -> impl Iterator<Item = &VerseCardTemplate> {
        self.templates.iter().filter(move |t| t.category == category)
    }

    /// Templates available without a subscription.
    pub fn free_templates(&self) -> impl Iterator<Item = &VerseCardTemplate> {
        self.templates.iter().filter(|t| !t.is_premium)
    }
}

#[derive(Debug, Deserialize)]
struct GradientFile {
    gradients: Vec<GradientEntry>,
}

#[derive(Debug, Deserialize)]
struct GradientEntry {
    id: String,
    name: String,
    category: GradientCategory,
    colors: Vec<String>,
    kind: GradientKind,
    start: UnitPointAnchor,
    end: UnitPointAnchor,
    #[serde(default)]
    angle: f64,
}

impl GradientEntry {
    fn build(self) -> Result<GradientPreset> {
        if self.colors.len() < 2 {
            anyhow::bail!("A gradient needs at least two colors, found {}", self.colors.len());
        }
        let colors = self
            .colors
            .iter()
            .map(|hex| CodableColor::from_hex(hex))
            .collect::<Result<Vec<_>>>()?;

        let mut fill = GradientFill::evenly_spaced(&colors)
            .with_points(self.start, self.end)
            .with_angle(self.angle);
        fill.kind = self.kind;

        Ok(GradientPreset {
            id: self.id,
            name: self.name,
            category: self.category,
            fill,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    templates: Vec<TemplateEntry>,
}

/// Background reference in the template catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum BackgroundEntry {
    Color(String),
    Gradient(String),
    Glass(GlassPreset),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateEntry {
    id: String,
    name: String,
    category: VerseCardCategory,
    #[serde(default)]
    premium: bool,
    #[serde(default)]
    preview_image: Option<String>,
    background: BackgroundEntry,
    font_id: String,
    verse_size: f64,
    reference_size: f64,
    weight: FontWeight,
    text_color: String,
    alignment: TextAlignment,
    #[serde(default = "default_true")]
    show_reference: bool,
}

const fn default_true() -> bool {
    true
}

impl TemplateEntry {
    fn build(self, gradients: &HashMap<&str, &GradientPreset>) -> Result<VerseCardTemplate> {
        let background = match &self.background {
            BackgroundEntry::Color(hex) => ProjectBackground::solid(CodableColor::from_hex(hex)?),
            BackgroundEntry::Gradient(id) => {
                let preset = gradients
                    .get(id.as_str())
                    .with_context(|| format!("Unknown gradient '{id}'"))?;
                ProjectBackground::Gradient(preset.fill.clone())
            }
            BackgroundEntry::Glass(preset) => ProjectBackground::glass(*preset),
        };

        let color = CodableColor::from_hex(&self.text_color)?;
        let verse_style = TextElement::new("")
            .with_font(self.font_id.clone(), self.verse_size)
            .with_weight(self.weight)
            .with_color(color)
            .with_alignment(self.alignment);
        let reference_style = TextElement::new("")
            .with_font(self.font_id, self.reference_size)
            .with_weight(FontWeight::Semibold)
            .with_color(color.with_alpha(0.8))
            .with_alignment(self.alignment);

        Ok(VerseCardTemplate {
            id: self.id,
            name: self.name,
            category: self.category,
            config: VerseCardConfig {
                background,
                verse_style,
                reference_style,
                show_reference: self.show_reference,
            },
            preview_image: self.preview_image,
            is_premium: self.premium,
        })
    }
}
