//! Integration tests for decoding damaged and hand-edited project documents.

use serde_json::json;
use widget_studio::codec::{self, DecodeError, IssueAction, LoadError, ValidationError};
use widget_studio::models::{CodableColor, LayerElement, ProjectBackground, TextFill};

mod fixtures;

use fixtures::*;

#[test]
fn test_round_trip_preserves_project() {
    let project = test_project_basic();
    let encoded = codec::encode(&project).unwrap();
    assert!(!encoded.contains('\n'));

    let report = codec::decode(&encoded).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.project, project);
}

#[test]
fn test_round_trip_every_variant() {
    let full = test_project_full();
    let tags: Vec<&str> = full.layers().iter().map(|l| l.element.tag()).collect();
    assert_eq!(tags, vec!["shape", "image", "shape", "text", "icon", "dataBinding"]);

    for background in test_backgrounds() {
        let project = full.clone().with_background(background);
        let report = codec::decode(&codec::encode(&project).unwrap()).unwrap();
        assert!(
            report.is_clean(),
            "{} background: issues {:?}, repairs {:?}",
            project.background.tag(),
            report.issues,
            report.repairs
        );
        assert_eq!(report.project, project);
    }
}

#[test]
fn test_round_trip_preserves_z_index_gaps() {
    let mut project = test_project_basic();
    project.remove_layer(TITLE_ID);

    let report = codec::decode(&codec::encode(&project).unwrap()).unwrap();
    assert!(report.repairs.is_empty(), "gaps are not repaired");
    let z: Vec<i32> = report.project.layers().iter().map(|l| l.z_index()).collect();
    assert_eq!(z, vec![0, 2]);
}

#[test]
fn test_unknown_element_tag_drops_only_that_layer() {
    let mut value = test_project_value();
    value["layers"][1]["element"]["type"] = json!("hologram");

    let report = codec::decode(&value.to_string()).unwrap();
    assert_eq!(report.project.len(), 2);
    assert!(report.project.layer(TITLE_ID).is_none());
    assert!(report.project.layer(BACKDROP_ID).is_some());
    assert!(report.project.layer(STREAK_ID).is_some());

    assert_eq!(report.issues.len(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.path.to_string(), "layers[1]");
    assert_eq!(issue.action, IssueAction::Dropped);
    match &issue.error {
        DecodeError::UnknownTag { path, tag, expected } => {
            assert_eq!(path.to_string(), "layers[1].element");
            assert_eq!(tag, "hologram");
            assert!(expected.contains(&"dataBinding"));
        }
        other => panic!("expected UnknownTag, got {other:?}"),
    }
}

#[test]
fn test_malformed_payload_drops_layer() {
    let mut value = test_project_value();
    value["layers"][0]["element"]["payload"] = json!({ "kind": 42 });

    let report = codec::decode(&value.to_string()).unwrap();
    assert_eq!(report.project.len(), 2);
    assert!(matches!(report.issues[0].error, DecodeError::Malformed { .. }));
}

#[test]
fn test_unknown_background_falls_back_to_default() {
    let mut value = test_project_value();
    value["background"] = json!({ "type": "aurora", "payload": {} });

    let report = codec::decode(&value.to_string()).unwrap();
    assert_eq!(report.project.background, ProjectBackground::default());
    assert_eq!(report.project.len(), 3);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].action, IssueAction::ReplacedWithDefault);
    assert_eq!(report.issues[0].path.to_string(), "background");
}

#[test]
fn test_out_of_range_values_are_repaired() {
    let mut value = test_project_value();
    value["layers"][0]["opacity"] = json!(1.7);
    value["layers"][2]["frame"]["x"] = json!(-20.0);

    let report = codec::decode(&value.to_string()).unwrap();
    assert!(report.issues.is_empty());

    let paths: Vec<String> = report.repairs.iter().map(|r| r.path.to_string()).collect();
    assert!(paths.contains(&"layers[0].opacity".to_string()));
    assert!(paths.contains(&"layers[2].frame".to_string()));

    assert_eq!(report.project.layer(BACKDROP_ID).unwrap().opacity, 1.0);
    assert_eq!(report.project.layer(STREAK_ID).unwrap().frame.x, 0.0);
}

#[test]
fn test_out_of_range_element_colors_are_repaired() {
    let bad = json!({ "red": 2.0, "green": 0.5, "blue": -1.0, "alpha": 1.0 });
    let mut value = test_project_value();
    value["layers"][1]["element"]["payload"]["fill"] = json!({ "type": "solid", "payload": bad });
    value["layers"][0]["element"]["payload"]["stroke"] =
        json!({ "color": bad, "width": 2.0, "dashStyle": "solid" });

    let report = codec::decode(&value.to_string()).unwrap();
    assert!(report.issues.is_empty());
    let repaired: Vec<(String, String)> = report
        .repairs
        .iter()
        .map(|r| (r.path.to_string(), r.description.clone()))
        .collect();
    assert_eq!(
        repaired,
        vec![
            ("layers[0].element".to_string(), "Clamped stroke color".to_string()),
            ("layers[1].element".to_string(), "Clamped fill color".to_string()),
        ]
    );

    let fixed = CodableColor::new(1.0, 0.5, 0.0, 1.0);
    let Some(LayerElement::Text(title)) = report.project.layer(TITLE_ID).map(|l| &l.element) else {
        panic!("title layer lost");
    };
    assert_eq!(title.fill, TextFill::Solid(fixed));
    let Some(LayerElement::Shape(backdrop)) = report.project.layer(BACKDROP_ID).map(|l| &l.element) else {
        panic!("backdrop layer lost");
    };
    assert_eq!(backdrop.stroke.map(|s| s.color), Some(fixed));

    // A second pass finds nothing left to fix
    let again = codec::decode(&codec::encode(&report.project).unwrap()).unwrap();
    assert!(again.is_clean());
}

#[test]
fn test_duplicate_z_indices_are_renumbered_in_paint_order() {
    let mut value = test_project_value();
    value["layers"][0]["zIndex"] = json!(4);
    value["layers"][1]["zIndex"] = json!(4);
    value["layers"][2]["zIndex"] = json!(1);

    let report = codec::decode(&value.to_string()).unwrap();
    assert!(report.repairs.iter().any(|r| r.path.to_string() == "layers"));

    let project = &report.project;
    assert_eq!(project.sorted_layers().ids(), vec![STREAK_ID, BACKDROP_ID, TITLE_ID]);
    let mut z: Vec<i32> = project.layers().iter().map(|l| l.z_index()).collect();
    z.sort_unstable();
    z.dedup();
    assert_eq!(z.len(), 3);
}

#[test]
fn test_duplicate_layer_id_is_rejected() {
    let mut value = test_project_value();
    let first_id = value["layers"][0]["id"].clone();
    value["layers"][2]["id"] = first_id;

    match codec::decode(&value.to_string()) {
        Err(LoadError::Validation(ValidationError::DuplicateLayerId { id, path })) => {
            assert_eq!(id, BACKDROP_ID);
            assert_eq!(path.to_string(), "layers[2]");
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn test_root_failures() {
    assert!(matches!(
        codec::decode("{ not json"),
        Err(LoadError::Decode(DecodeError::Syntax { .. }))
    ));
    assert!(matches!(
        codec::decode("[1, 2, 3]"),
        Err(LoadError::Decode(DecodeError::Malformed { .. }))
    ));

    let mut value = test_project_value();
    value.as_object_mut().unwrap().remove("layers");
    assert!(codec::decode(&value.to_string()).is_err());

    let mut value = test_project_value();
    value["widgetSize"] = json!("gigantic");
    assert!(codec::decode(&value.to_string()).is_err());
}

#[test]
fn test_binding_layer_survives_round_trip() {
    let report = codec::decode(&codec::encode(&test_project_basic()).unwrap()).unwrap();
    let layer = report.project.layer(STREAK_ID).unwrap();
    match &layer.element {
        LayerElement::DataBinding(binding) => {
            assert_eq!(binding.suffix, " days");
            assert_eq!(binding.empty_text, "No streak yet");
        }
        other => panic!("expected data binding, got {other:?}"),
    }
}
