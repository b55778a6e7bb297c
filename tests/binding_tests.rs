//! Integration tests for resolving data bindings across a project.

use chrono::{TimeZone, Utc};
use widget_studio::codec;
use widget_studio::models::{LayerElement, WidgetDataType};
use widget_studio::services::{
    BindingResolver, DefaultFormatter, RawValue, SampleProvider, StaticProvider,
};

mod fixtures;

use fixtures::*;

#[test]
fn test_resolve_project_with_value() {
    let project = test_project_basic();
    let provider = StaticProvider::new().with(WidgetDataType::ReadingStreak, RawValue::Integer(1234));
    let resolved = BindingResolver::new(provider).resolve_project(&project);

    assert_eq!(resolved.bindings().len(), 1);
    assert_eq!(resolved.text_for(STREAK_ID), Some("1,234 days"));
    assert_eq!(resolved.text_for(TITLE_ID), None);
}

#[test]
fn test_resolve_project_without_value_uses_empty_text() {
    let project = test_project_basic();
    let resolved = BindingResolver::new(StaticProvider::new()).resolve_project(&project);
    assert_eq!(resolved.text_for(STREAK_ID), Some("No streak yet"));
}

#[test]
fn test_separator_from_settings() {
    let project = test_project_basic();
    let provider = StaticProvider::new().with(WidgetDataType::ReadingStreak, RawValue::Integer(1234567));
    let resolved = BindingResolver::new(provider)
        .with_formatter(DefaultFormatter::with_separator('.'))
        .resolve_project(&project);
    assert_eq!(resolved.text_for(STREAK_ID), Some("1.234.567 days"));
}

#[test]
fn test_values_from_json_table() {
    let provider = StaticProvider::from_json(
        r#"{
            "readingStreak": 7,
            "currentMood": "Grateful",
            "readingTimeToday": {"type": "duration", "payload": 3900},
            "verseOfTheDay": null
        }"#,
    )
    .unwrap();
    assert_eq!(provider.len(), 3);

    let project = test_project_basic();
    let resolved = BindingResolver::new(provider).resolve_project(&project);
    assert_eq!(resolved.text_for(STREAK_ID), Some("7 days"));
}

#[test]
fn test_closure_provider() {
    let date = Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap();
    let provider = move |data_type: WidgetDataType| -> Option<RawValue> {
        match data_type {
            WidgetDataType::ReadingStreak => Some(RawValue::Integer(3)),
            WidgetDataType::CurrentDate => Some(RawValue::Date(date)),
            _ => None,
        }
    };
    let project = test_project_basic();
    let resolved = BindingResolver::new(provider).resolve_project(&project);
    assert_eq!(resolved.text_for(STREAK_ID), Some("3 days"));
}

#[test]
fn test_sample_provider_previews_every_binding() {
    let project = test_project_basic();
    let resolved = BindingResolver::new(SampleProvider).resolve_project(&project);
    let expected = format!("{} days", WidgetDataType::ReadingStreak.sample_value());
    assert_eq!(resolved.text_for(STREAK_ID), Some(expected.as_str()));
}

#[test]
fn test_materialized_project_is_a_valid_document() {
    let project = test_project_basic();
    let provider = StaticProvider::new().with(WidgetDataType::ReadingStreak, RawValue::Integer(12));
    let materialized = BindingResolver::new(provider).resolve_project(&project).materialize();

    assert_eq!(materialized.data_bindings().count(), 0);
    let layer = materialized.layer(STREAK_ID).unwrap();
    assert_eq!(layer.z_index(), project.layer(STREAK_ID).unwrap().z_index());
    match &layer.element {
        LayerElement::Text(text) => assert_eq!(text.text, "12 days"),
        other => panic!("expected text, got {other:?}"),
    }

    let report = codec::decode(&codec::encode(&materialized).unwrap()).unwrap();
    assert!(report.is_clean());
    // The source project is untouched
    assert_eq!(project.data_bindings().count(), 1);
}
