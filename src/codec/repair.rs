//! Post-decode repair of values that have a safe canonical correction.

use crate::codec::error::{NodePath, Repair, ValidationError};
use crate::models::color::clamp_unit;
use crate::models::{ProjectBackground, WidgetLayer, WidgetProject};
use std::collections::HashSet;
use tracing::warn;

/// Clamps out-of-range values and renumbers invalid z-indices in place.
///
/// Frame percentages go into `0..=100`; opacities, every color channel (element,
/// style and background) and gradient stop locations into `0..=1`. Duplicate or negative z-indices are
/// renumbered in their stable paint order. Gaps are left alone.
pub(crate) fn repair_project(project: &mut WidgetProject) -> Vec<Repair> {
    let mut repairs = Vec::new();
    let layers_path = NodePath::root().field("layers");

    for (i, layer) in project.layers_mut().iter_mut().enumerate() {
        repair_layer(layer, &layers_path.index(i), &mut repairs);
    }

    repair_background(&mut project.background, &NodePath::root().field("background"), &mut repairs);

    if renumber_invalid_z_indices(project.layers_mut()) {
        repairs.push(Repair {
            path: layers_path,
            description: "Duplicate or negative z-indices renumbered in paint order".to_string(),
        });
    }

    for repair in &repairs {
        warn!("Repaired {}", repair);
    }
    repairs
}

/// Fails on the first layer id that appears twice.
pub(crate) fn check_unique_ids(project: &WidgetProject) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for (i, layer) in project.layers().iter().enumerate() {
        if !seen.insert(layer.id()) {
            return Err(ValidationError::DuplicateLayerId {
                id: layer.id(),
                path: NodePath::root().field("layers").index(i),
            });
        }
    }
    Ok(())
}

fn repair_layer(layer: &mut WidgetLayer, path: &NodePath, repairs: &mut Vec<Repair>) {
    if layer.frame.clamp_to_bounds() {
        repairs.push(Repair {
            path: path.field("frame"),
            description: "Frame clamped into 0-100%".to_string(),
        });
    }

    if let Some(opacity) = clamped(layer.opacity) {
        repairs.push(Repair {
            path: path.field("opacity"),
            description: format!("Opacity {} clamped to {opacity}", layer.opacity),
        });
        layer.opacity = opacity;
    }

    let stops = layer.element.clamp_gradients();
    if stops > 0 {
        repairs.push(Repair {
            path: path.field("element"),
            description: format!("{stops} gradient stop(s) clamped into 0-1"),
        });
    }

    let colors = layer.element.normalize_colors();
    if !colors.is_empty() {
        repairs.push(Repair {
            path: path.field("element"),
            description: format!("Clamped {}", colors.join(", ")),
        });
    }

    let colors = layer.style.normalize_colors();
    if !colors.is_empty() {
        repairs.push(Repair {
            path: path.field("style"),
            description: format!("Clamped {}", colors.join(", ")),
        });
    }
}

fn repair_background(background: &mut ProjectBackground, path: &NodePath, repairs: &mut Vec<Repair>) {
    let mut fixed = Vec::new();
    match background {
        ProjectBackground::Solid(solid) => {
            if !solid.color.is_normalized() {
                solid.color = solid.color.normalized();
                fixed.push("color");
            }
            if let Some(opacity) = clamped(solid.opacity) {
                solid.opacity = opacity;
                fixed.push("opacity");
            }
        }
        ProjectBackground::Gradient(gradient) => {
            if gradient.clamp_stops() > 0 {
                fixed.push("gradient stops");
            }
        }
        ProjectBackground::Image(image) => {
            if let Some(color) = image.overlay_color.filter(|c| !c.is_normalized()) {
                image.overlay_color = Some(color.normalized());
                fixed.push("overlay color");
            }
            if let Some(opacity) = clamped(image.overlay_opacity) {
                image.overlay_opacity = opacity;
                fixed.push("overlay opacity");
            }
        }
        ProjectBackground::Glassmorphism(glass) => {
            if !glass.tint_color.is_normalized() {
                glass.tint_color = glass.tint_color.normalized();
                fixed.push("tint color");
            }
            for (name, value) in [
                ("tint opacity", &mut glass.tint_opacity),
                ("noise opacity", &mut glass.noise_opacity),
                ("border opacity", &mut glass.border_opacity),
            ] {
                if let Some(v) = clamped(*value) {
                    *value = v;
                    fixed.push(name);
                }
            }
        }
    }

    if !fixed.is_empty() {
        repairs.push(Repair {
            path: path.clone(),
            description: format!("Clamped {}", fixed.join(", ")),
        });
    }
}

/// `Some(clamped)` when `value` is outside `0..=1`.
fn clamped(value: f64) -> Option<f64> {
    let fixed = clamp_unit(value);
    (fixed != value || value.is_nan()).then_some(fixed)
}

/// Renumbers all z-indices when any is negative or repeated.
///
/// Layers keep their sequence position; only the keys change, following the
/// order `sorted_layers` would have produced.
fn renumber_invalid_z_indices(layers: &mut [WidgetLayer]) -> bool {
    let mut seen = HashSet::new();
    let valid = layers
        .iter()
        .all(|l| l.z_index() >= 0 && seen.insert(l.z_index()));
    if valid {
        return false;
    }

    let mut order: Vec<usize> = (0..layers.len()).collect();
    order.sort_by_key(|&i| layers[i].z_index());
    for (z_index, i) in (0_i32..).zip(order) {
        layers[i].set_z_index(z_index);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BorderConfig, CodableColor, GradientFill, GradientStop, LayerElement, LayerFrame, LayerStyle,
        ShapeElement, ShapeFill, ShapeKind, TextElement, TextFill, WidgetKind, WidgetSize,
    };

    fn project_with(layers: Vec<WidgetLayer>) -> WidgetProject {
        let mut project = WidgetProject::new("Repair", WidgetKind::HomeScreen, WidgetSize::Small);
        project.replace_layers(layers);
        project
    }

    fn text(z_index: i32) -> WidgetLayer {
        let mut layer = WidgetLayer::new(LayerElement::Text(TextElement::new("x")));
        layer.set_z_index(z_index);
        layer
    }

    #[test]
    fn test_valid_project_needs_no_repair() {
        let mut project = project_with(vec![text(0), text(2)]);
        assert!(repair_project(&mut project).is_empty());
    }

    #[test]
    fn test_gaps_are_not_repaired() {
        let mut project = project_with(vec![text(0), text(5), text(9)]);
        assert!(repair_project(&mut project).is_empty());
        let z: Vec<i32> = project.layers().iter().map(WidgetLayer::z_index).collect();
        assert_eq!(z, vec![0, 5, 9]);
    }

    #[test]
    fn test_duplicate_z_indices_renumbered_stably() {
        let mut project = project_with(vec![text(3), text(1), text(3), text(-2)]);
        let repairs = repair_project(&mut project);
        assert_eq!(repairs.len(), 1);
        assert_eq!(repairs[0].path.to_string(), "layers");

        let z: Vec<i32> = project.layers().iter().map(WidgetLayer::z_index).collect();
        assert_eq!(z, vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_frame_and_opacity_clamped() {
        let mut layer = text(0);
        layer.frame = LayerFrame {
            x: 120.0,
            ..LayerFrame::default()
        };
        layer.opacity = 1.5;
        let mut project = project_with(vec![layer]);

        let repairs = repair_project(&mut project);
        let paths: Vec<String> = repairs.iter().map(|r| r.path.to_string()).collect();
        assert_eq!(paths, vec!["layers[0].frame", "layers[0].opacity"]);
        assert_eq!(project.layers()[0].frame.x, 100.0);
        assert_eq!(project.layers()[0].opacity, 1.0);
    }

    #[test]
    fn test_gradient_stops_clamped() {
        let mut gradient = GradientFill::default();
        gradient.stops.push(GradientStop {
            location: 1.7,
            ..GradientStop::new(CodableColor::WHITE, 0.5)
        });
        let shape = ShapeElement::new(ShapeKind::Circle).with_fill(ShapeFill::Gradient(gradient.clone()));
        let mut project = project_with(vec![WidgetLayer::new(LayerElement::Shape(shape))])
            .with_background(ProjectBackground::Gradient(gradient));

        let repairs = repair_project(&mut project);
        assert_eq!(repairs.len(), 2);
        assert_eq!(repairs[0].path.to_string(), "layers[0].element");
        assert_eq!(repairs[1].path.to_string(), "background");

        let ProjectBackground::Gradient(fixed) = &project.background else {
            panic!("background variant changed");
        };
        assert_eq!(fixed.stops[2].location, 1.0);
    }

    #[test]
    fn test_solid_background_color_normalized() {
        let mut project = project_with(Vec::new()).with_background(ProjectBackground::Solid(
            crate::models::SolidBackground {
                color: CodableColor {
                    red: 2.0,
                    green: 0.5,
                    blue: -1.0,
                    alpha: 1.0,
                },
                opacity: 1.0,
            },
        ));
        let repairs = repair_project(&mut project);
        assert_eq!(repairs.len(), 1);
        assert_eq!(repairs[0].description, "Clamped color");
    }

    #[test]
    fn test_element_and_style_colors_normalized() {
        let bad = CodableColor {
            red: 2.0,
            green: 0.5,
            blue: -1.0,
            alpha: 1.0,
        };
        let mut title = TextElement::new("Title");
        title.fill = TextFill::Solid(bad);
        let mut layer = WidgetLayer::new(LayerElement::Text(title)).with_style(LayerStyle {
            border: Some(BorderConfig {
                color: bad,
                width: 1.0,
            }),
            ..LayerStyle::default()
        });
        layer.set_z_index(0);
        let mut project = project_with(vec![layer]);

        let repairs = repair_project(&mut project);
        let paths: Vec<String> = repairs.iter().map(|r| r.path.to_string()).collect();
        assert_eq!(paths, vec!["layers[0].element", "layers[0].style"]);
        assert_eq!(repairs[0].description, "Clamped fill color");
        assert_eq!(repairs[1].description, "Clamped border color");

        let fixed = CodableColor::new(1.0, 0.5, 0.0, 1.0);
        let LayerElement::Text(text) = &project.layers()[0].element else {
            panic!("element variant changed");
        };
        assert_eq!(text.fill, TextFill::Solid(fixed));
        assert_eq!(project.layers()[0].style.border.map(|b| b.color), Some(fixed));
        assert!(repair_project(&mut project).is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let layer = text(0);
        let project = project_with(vec![layer.clone(), layer.clone()]);
        let err = check_unique_ids(&project).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateLayerId {
                id: layer.id(),
                path: NodePath::root().field("layers").index(1),
            }
        );
    }
}
