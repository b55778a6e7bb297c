//! Widget project (root document) and target widget geometry.

use crate::models::background::ProjectBackground;
use crate::models::element::DataBindingConfig;
use crate::models::layer::WidgetLayer;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where the widget is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    /// Home screen / desktop widget
    #[default]
    HomeScreen,
    /// Lock screen accessory
    LockScreen,
}

/// Size class of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetSize {
    /// 2x2 grid cell
    #[default]
    Small,
    /// 4x2 grid cell
    Medium,
    /// 4x4 grid cell
    Large,
    /// 8x4 grid cell (tablets)
    ExtraLarge,
    /// Round lock-screen accessory
    AccessoryCircular,
    /// Rectangular lock-screen accessory
    AccessoryRectangular,
    /// Single line above the clock
    AccessoryInline,
}

impl WidgetSize {
    /// Every size class.
    pub const ALL: [Self; 7] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
        Self::AccessoryCircular,
        Self::AccessoryRectangular,
        Self::AccessoryInline,
    ];

    /// Reference size in points `(width, height)`.
    #[must_use]
    pub const fn point_size(self) -> (f64, f64) {
        match self {
            Self::Small => (170.0, 170.0),
            Self::Medium => (364.0, 170.0),
            Self::Large => (364.0, 382.0),
            Self::ExtraLarge => (768.0, 382.0),
            Self::AccessoryCircular => (76.0, 76.0),
            Self::AccessoryRectangular => (172.0, 76.0),
            Self::AccessoryInline => (257.0, 26.0),
        }
    }

    /// Whether a widget of `kind` can have this size.
    #[must_use]
    pub const fn is_supported_by(self, kind: WidgetKind) -> bool {
        match kind {
            WidgetKind::HomeScreen => {
                matches!(self, Self::Small | Self::Medium | Self::Large | Self::ExtraLarge)
            }
            WidgetKind::LockScreen => matches!(
                self,
                Self::AccessoryCircular | Self::AccessoryRectangular | Self::AccessoryInline
            ),
        }
    }
}

/// A widget design: an ordered stack of layers over a background.
///
/// The layer sequence is back-to-front. Each layer also carries a z-index;
/// right after [`WidgetProject::move_layer`] the z-indices equal the
/// positions `0..n`. Adding and removing layers do not renumber, so between
/// moves the z-indices may have gaps and [`WidgetProject::sorted_layers`] is
/// the authoritative paint order.
///
/// # Validation
///
/// - Layer ids must be unique within the project
/// - `widget_size` must be supported by `widget_kind`
/// - `created_at` must be <= `modified_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetProject {
    /// Stable identifier
    id: Uuid,
    /// Display name
    pub name: String,
    /// Target placement
    pub widget_kind: WidgetKind,
    /// Target size class
    pub widget_size: WidgetSize,
    /// Layers, back-to-front
    layers: Vec<WidgetLayer>,
    /// Paint behind every layer
    pub background: ProjectBackground,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
    /// Pinned in the project list
    #[serde(default)]
    pub is_favorite: bool,
    /// Template this project was instantiated from
    #[serde(default)]
    pub template_id: Option<String>,
}

impl WidgetProject {
    /// Creates an empty project with the default background.
    pub fn new(name: impl Into<String>, widget_kind: WidgetKind, widget_size: WidgetSize) -> Self {
        Self::with_id(Uuid::new_v4(), name, widget_kind, widget_size)
    }

    /// Creates an empty project with a caller-chosen id.
    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        widget_kind: WidgetKind,
        widget_size: WidgetSize,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            widget_kind,
            widget_size,
            layers: Vec::new(),
            background: ProjectBackground::default(),
            created_at: now,
            modified_at: now,
            is_favorite: false,
            template_id: None,
        }
    }

    /// Copies `template` into a new project with a fresh id and timestamps.
    ///
    /// Layers are copied as-is, including their ids and z-indices.
    #[must_use]
    pub fn instantiate(template: &Self) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            modified_at: now,
            is_favorite: false,
            template_id: Some(template.id.to_string()),
            ..template.clone()
        }
    }

    /// Sets the background.
    #[must_use]
    pub fn with_background(mut self, background: ProjectBackground) -> Self {
        self.background = background;
        self
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Layers in sequence order (back-to-front as stored).
    #[must_use]
    pub fn layers(&self) -> &[WidgetLayer] {
        &self.layers
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when the project has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Gets a layer by id.
    #[must_use]
    pub fn layer(&self, id: Uuid) -> Option<&WidgetLayer> {
        self.layers.iter().find(|l| l.id() == id)
    }

    /// Gets a mutable layer by id for content and style edits.
    ///
    /// The layer's position and z-index cannot be changed through this handle.
    /// The project is only touched when the layer exists.
    pub fn layer_mut(&mut self, id: Uuid) -> Option<&mut WidgetLayer> {
        let position = self.position_of(id)?;
        self.touch();
        self.layers.get_mut(position)
    }

    /// Sequence position of the layer with `id`.
    #[must_use]
    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.layers.iter().position(|l| l.id() == id)
    }

    /// Every data-binding layer as `(layer id, binding)`, in sequence order.
    pub fn data_bindings(&self) -> impl Iterator<Item = (Uuid, &DataBindingConfig)> + '_ {
        self.layers
            .iter()
            .filter_map(|l| l.element.as_binding().map(|b| (l.id(), b)))
    }

    /// Updates the modification timestamp to now.
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Validates the project structure.
    ///
    /// Checks:
    /// - Layer ids are unique
    /// - The size class is supported by the widget kind
    /// - Timestamps are ordered
    pub fn validate(&self) -> Result<()> {
        let mut ids = std::collections::HashSet::new();
        for layer in &self.layers {
            if !ids.insert(layer.id()) {
                anyhow::bail!("Duplicate layer id {} in project '{}'", layer.id(), self.name);
            }
        }

        if !self.widget_size.is_supported_by(self.widget_kind) {
            anyhow::bail!(
                "Widget size {:?} is not available for {:?} widgets",
                self.widget_size,
                self.widget_kind
            );
        }

        if self.created_at > self.modified_at {
            anyhow::bail!(
                "Project '{}' was modified ({}) before it was created ({})",
                self.name,
                self.modified_at.to_rfc3339(),
                self.created_at.to_rfc3339()
            );
        }

        Ok(())
    }

    pub(crate) fn layers_mut(&mut self) -> &mut Vec<WidgetLayer> {
        &mut self.layers
    }

    pub(crate) fn replace_layers(&mut self, layers: Vec<WidgetLayer>) {
        self.layers = layers;
    }
}
