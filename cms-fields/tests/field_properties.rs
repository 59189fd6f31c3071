//! Properties that hold for every field kind.

use cms_fields::{bag_from_value, DataBag, Field, FieldKind, FieldSet, OutputFormat};
use rstest::rstest;
use serde_json::{json, Value};

fn build(kind: FieldKind, input: Value) -> Field {
    Field::build(kind, &bag_from_value(input))
}

fn awkward_inputs() -> Vec<Value> {
    vec![
        json!({}),
        json!(null),
        json!({"name": "", "label": ""}),
        json!({"name": null, "label": null}),
        json!({"name": 42, "label": false}),
        json!({"label": "!!!"}),
        json!({"label": "   "}),
        json!({"label": ["not", "a", "string"]}),
        json!({"locked": "", "required": []}),
    ]
}

#[test]
fn name_is_never_empty() {
    for kind in FieldKind::ALL {
        for input in awkward_inputs() {
            let field = build(kind, input.clone());
            assert!(!field.name().is_empty(), "{kind} with {input}");
        }
    }
}

#[test]
fn flags_are_strict_booleans() {
    for kind in FieldKind::ALL {
        for input in awkward_inputs() {
            let value = serde_json::to_value(build(kind, input)).unwrap();
            assert!(value["locked"].is_boolean());
            assert!(value["required"].is_boolean());
        }
    }
}

#[rstest]
#[case(FieldKind::Generic, json!({"name": "explicit", "label": "Some label"}), "explicit")]
#[case(FieldKind::Generic, json!({"label": "Some label"}), "some_label")]
#[case(FieldKind::Generic, json!({}), "field")]
#[case(FieldKind::Boolean, json!({"name": "explicit", "label": "Show header"}), "explicit")]
#[case(FieldKind::Boolean, json!({"label": "Show header"}), "show_header")]
#[case(FieldKind::Boolean, json!({"label": "%%%"}), "boolean_field")]
#[case(FieldKind::Logo, json!({"name": "explicit", "label": "Footer logo"}), "explicit")]
#[case(FieldKind::Logo, json!({"label": "Footer logo"}), "footer_logo")]
#[case(FieldKind::Logo, json!({"label": "%%%"}), "logo_field")]
#[case(FieldKind::Video, json!({"name": "explicit", "label": "Hero video"}), "explicit")]
#[case(FieldKind::Video, json!({"label": "Hero video"}), "videoplayer_field")]
#[case(FieldKind::Video, json!({}), "videoplayer_field")]
fn name_precedence(#[case] kind: FieldKind, #[case] input: Value, #[case] expected: &str) {
    assert_eq!(build(kind, input).name(), expected);
}

#[test]
fn boolean_without_input() {
    let value = serde_json::to_value(build(FieldKind::Boolean, json!({}))).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "boolean",
            "label": "Boolean field",
            "name": "boolean_field",
            "locked": false,
            "required": false,
            "display_width": null,
        })
    );
}

#[test]
fn logo_default_is_replaced_wholesale() {
    let value = serde_json::to_value(build(FieldKind::Logo, json!({}))).unwrap();
    assert_eq!(
        value["default"],
        json!({"override_inherited_src": false, "src": null, "alt": null})
    );

    let value =
        serde_json::to_value(build(FieldKind::Logo, json!({"default": {"alt": "Acme"}}))).unwrap();
    assert_eq!(value["default"], json!({"alt": "Acme"}));
}

#[test]
fn video_label_and_type() {
    let value =
        serde_json::to_value(build(FieldKind::Video, json!({"name": "my_video", "type": "video"})))
            .unwrap();
    assert_eq!(value["label"], json!("My Video"));
    assert_eq!(value["type"], json!("blog"));
}

#[test]
fn construction_is_idempotent() {
    let input = bag_from_value(json!({
        "label": "Feature toggle",
        "help_text": "Turns the feature on",
        "visibility": {"controlling_field": "mode", "controlling_value_regex": "on"},
        "display_width": "half_width",
        "default": true,
        "foo": "bar",
    }));
    for kind in FieldKind::ALL {
        assert_eq!(Field::build(kind, &input), Field::build(kind, &input));
    }
}

#[test]
fn unknown_keys_pass_through() {
    for kind in FieldKind::ALL {
        let value = serde_json::to_value(build(kind, json!({"foo": "bar"}))).unwrap();
        assert_eq!(value["foo"], json!("bar"), "{kind}");
    }
}

#[test]
fn input_is_not_modified() {
    let input = bag_from_value(json!({"label": "Untouched", "locked": "yes"}));
    let before = input.clone();
    let _ = Field::build(FieldKind::Boolean, &input);
    assert_eq!(input, before);
}

#[test_log::test]
fn renders_document_from_yaml_input() {
    let bags = [
        (FieldKind::Boolean, "label: Show logo\ndisplay: toggle\n"),
        (FieldKind::Logo, "label: Site logo\nrequired: true\n"),
        (FieldKind::Video, "name: intro_video\n"),
    ];
    let set: FieldSet = bags
        .iter()
        .map(|(kind, yaml)| Field::build(*kind, &cms_fields::parse_yaml(yaml).unwrap()))
        .collect();

    let out = set.render(OutputFormat::Json).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["name"], json!("show_logo"));
    assert_eq!(value[0]["display"], json!("toggle"));
    assert_eq!(value[1]["required"], json!(true));
    assert_eq!(value[2]["label"], json!("Intro Video"));
}

#[test_log::test]
fn empty_bag_builds_every_kind() {
    let data = DataBag::new();
    let names: Vec<String> = FieldKind::ALL
        .into_iter()
        .map(|kind| Field::build(kind, &data).name().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["field", "boolean_field", "logo_field", "videoplayer_field"]
    );
}
