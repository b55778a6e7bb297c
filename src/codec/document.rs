//! Encoding and tolerant decoding of a single project document.

use crate::codec::error::{DecodeError, DecodeIssue, IssueAction, LoadError, NodePath, Repair};
use crate::codec::repair::{check_unique_ids, repair_project};
use crate::models::{
    CornerRadiusConfig, LayerElement, ProjectBackground, ShapeFill, TextFill, WidgetLayer, WidgetProject,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Outcome of a successful load.
///
/// `issues` lists nodes that were dropped or defaulted; `repairs` lists values
/// that were clamped or renumbered. Both are empty for a clean document.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Decoded (and repaired) project
    pub project: WidgetProject,
    /// Nodes that failed to decode
    pub issues: Vec<DecodeIssue>,
    /// Values corrected after decoding
    pub repairs: Vec<Repair>,
}

impl LoadReport {
    /// True when nothing was dropped or repaired.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.repairs.is_empty()
    }
}

/// Encodes a project as a single-line JSON document.
pub fn encode(project: &WidgetProject) -> Result<String, serde_json::Error> {
    serde_json::to_string(project)
}

/// Encodes a project as indented JSON for humans.
pub fn encode_pretty(project: &WidgetProject) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(project)
}

/// Decodes a project document.
///
/// A layer that fails to decode is dropped; a background that fails is
/// replaced by the default. Only an unreadable root or duplicate layer ids
/// fail the whole load.
///
/// # Examples
///
/// ```
/// use widget_studio::codec;
/// use widget_studio::models::{LayerElement, TextElement, WidgetKind, WidgetLayer, WidgetProject, WidgetSize};
///
/// let mut project = WidgetProject::new("Demo", WidgetKind::HomeScreen, WidgetSize::Small);
/// project.add_layer(WidgetLayer::new(LayerElement::Text(TextElement::new("Hello"))));
///
/// let json = codec::encode(&project).unwrap();
/// let report = codec::decode(&json).unwrap();
/// assert!(report.is_clean());
/// assert_eq!(report.project, project);
/// ```
pub fn decode(input: &str) -> Result<LoadReport, LoadError> {
    let value: Value = serde_json::from_str(input).map_err(|e| DecodeError::Syntax {
        message: e.to_string(),
    })?;
    decode_value(value)
}

/// Decodes a project from an already parsed JSON value.
pub fn decode_value(value: Value) -> Result<LoadReport, LoadError> {
    let root_path = NodePath::root();
    let Value::Object(mut root) = value else {
        return Err(DecodeError::malformed(root_path, "document root must be an object").into());
    };

    let raw_layers = match root.remove("layers") {
        Some(Value::Array(layers)) => layers,
        Some(_) => {
            return Err(DecodeError::malformed(root_path.field("layers"), "expected an array").into());
        }
        None => return Err(DecodeError::malformed(root_path, "missing field `layers`").into()),
    };
    let raw_background = root.remove("background");

    let mut project = decode_root(root)?;
    let mut issues = Vec::new();

    let layers_path = root_path.field("layers");
    let mut layers = Vec::with_capacity(raw_layers.len());
    for (i, raw) in raw_layers.into_iter().enumerate() {
        let path = layers_path.index(i);
        match decode_layer(raw, &path) {
            Ok(layer) => layers.push(layer),
            Err(error) => {
                warn!("Dropping layer at {}: {}", path, error);
                issues.push(DecodeIssue {
                    path,
                    error,
                    action: IssueAction::Dropped,
                });
            }
        }
    }
    project.replace_layers(layers);

    let background_path = root_path.field("background");
    match decode_background(raw_background, &background_path) {
        Ok(background) => project.background = background,
        Err(error) => {
            warn!("Replacing background with default: {}", error);
            issues.push(DecodeIssue {
                path: background_path,
                error,
                action: IssueAction::ReplacedWithDefault,
            });
        }
    }

    let repairs = repair_project(&mut project);
    check_unique_ids(&project)?;

    debug!(
        project = %project.id(),
        layers = project.len(),
        issues = issues.len(),
        repairs = repairs.len(),
        "Decoded project '{}'",
        project.name
    );

    Ok(LoadReport {
        project,
        issues,
        repairs,
    })
}

/// Decodes root scalars with empty layers and the default background.
fn decode_root(mut root: Map<String, Value>) -> Result<WidgetProject, DecodeError> {
    let background = serde_json::to_value(ProjectBackground::default())
        .map_err(|e| DecodeError::malformed(NodePath::root(), e))?;
    root.insert("layers".to_string(), Value::Array(Vec::new()));
    root.insert("background".to_string(), background);
    serde_json::from_value(Value::Object(root)).map_err(|e| DecodeError::malformed(NodePath::root(), e))
}

fn decode_layer(raw: Value, path: &NodePath) -> Result<WidgetLayer, DecodeError> {
    let element = raw
        .get("element")
        .ok_or_else(|| DecodeError::malformed(path.clone(), "missing field `element`"))?;
    let element_path = path.field("element");
    let tag = check_tag(element, LayerElement::TAGS, &element_path)?;
    check_nested_tags(element, tag, &element_path.field("payload"))?;
    serde_json::from_value(raw).map_err(|e| DecodeError::malformed(path.clone(), e))
}

/// Field path inside a payload and the tags accepted there.
type NestedUnion = (&'static [&'static str], &'static [&'static str]);

const TEXT_UNIONS: &[NestedUnion] = &[(&["fill"], TextFill::TAGS)];
const SHAPE_UNIONS: &[NestedUnion] = &[(&["fill"], ShapeFill::TAGS), (&["cornerRadius"], CornerRadiusConfig::TAGS)];
const BINDING_UNIONS: &[NestedUnion] = &[(&["textStyle", "fill"], TextFill::TAGS)];

/// Checks the tagged unions inside an element payload, so an unknown nested
/// tag is reported at its own path instead of as a generic layer failure.
fn check_nested_tags(element: &Value, tag: &str, payload_path: &NodePath) -> Result<(), DecodeError> {
    let nested = match tag {
        "text" => TEXT_UNIONS,
        "shape" => SHAPE_UNIONS,
        "dataBinding" => BINDING_UNIONS,
        _ => return Ok(()),
    };
    let Some(payload) = element.get("payload") else {
        return Ok(());
    };

    for &(fields, expected) in nested {
        let mut node = Some(payload);
        let mut path = payload_path.clone();
        for field in fields {
            node = node.and_then(|n| n.get(*field));
            path = path.field(field);
        }
        // Missing nodes are left to serde.
        if let Some(node) = node {
            check_tag(node, expected, &path)?;
        }
    }
    Ok(())
}

fn decode_background(raw: Option<Value>, path: &NodePath) -> Result<ProjectBackground, DecodeError> {
    let raw = raw.ok_or_else(|| DecodeError::malformed(path.clone(), "missing background"))?;
    check_tag(&raw, ProjectBackground::TAGS, path)?;
    serde_json::from_value(raw).map_err(|e| DecodeError::malformed(path.clone(), e))
}

/// Checks the `type` discriminant of a tagged node against the known tags.
fn check_tag<'a>(
    node: &'a Value,
    expected: &'static [&'static str],
    path: &NodePath,
) -> Result<&'a str, DecodeError> {
    let tag = node
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| DecodeError::malformed(path.clone(), "missing `type` tag"))?;
    if expected.contains(&tag) {
        Ok(tag)
    } else {
        Err(DecodeError::UnknownTag {
            path: path.clone(),
            tag: tag.to_string(),
            expected,
        })
    }
}
