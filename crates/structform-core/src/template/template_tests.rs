#![allow(non_snake_case)]

use super::*;
use crate::FieldValue;
use test_case::test_case;

fn descriptor(name: &str, value: FieldValue) -> FieldDescriptor {
    FieldDescriptor::new(name, "text", value)
}

#[test_case(FieldValue::from("Kajetan Ka"), r#"<input type="text" name="name" value="Kajetan Ka">"#)]
#[test_case(FieldValue::from(""), r#"<input type="text" name="name">"#)]
#[test_case(FieldValue::Int(123), r#"<input type="text" name="name" value="123">"#)]
#[test_case(FieldValue::Int(0), r#"<input type="text" name="name">"#)]
#[test_case(FieldValue::Bool(false), r#"<input type="text" name="name">"#)]
#[test_case(FieldValue::Bool(true), r#"<input type="text" name="name" value="true">"#)]
#[test_case(FieldValue::Char('\0'), r#"<input type="text" name="name">"#)]
#[test_case(FieldValue::Char('x'), r#"<input type="text" name="name" value="x">"#)]
#[test_case(FieldValue::Float(0.0), r#"<input type="text" name="name">"#)]
#[test_case(FieldValue::Float(-0.0), r#"<input type="text" name="name">"#)]
#[test_case(FieldValue::Float(f64::NAN), r#"<input type="text" name="name" value="NaN">"#)]
#[test_case(FieldValue::Float(1e-310), r#"<input type="text" name="name" value="1e-310">"#)]
#[test_case(FieldValue::Float(2.5), r#"<input type="text" name="name" value="2.5">"#)]
fn HandlebarsTemplate___input___emits_value_only_when_non_empty(value: FieldValue, expected: &str) {
    let template = HandlebarsTemplate::input().unwrap();

    let markup = template.execute(&descriptor("name", value)).unwrap();

    assert_eq!(markup, expected);
}

#[test_case(FieldValue::Char('\0'))]
#[test_case(FieldValue::Float(f64::NAN))]
#[test_case(FieldValue::Float(f64::NEG_INFINITY))]
#[test_case(FieldValue::Float(1e-310))]
#[test_case(FieldValue::Float(-0.0))]
#[test_case(FieldValue::UInt(0))]
fn HandlebarsTemplate___input___value_attribute_follows_is_empty(value: FieldValue) {
    let template = HandlebarsTemplate::input().unwrap();
    let non_empty = !value.is_empty();

    let markup = template.execute(&descriptor("c", value)).unwrap();

    assert_eq!(markup.contains("value="), non_empty);
    assert!(!markup.contains('\0'));
}

#[test]
fn HandlebarsTemplate___input___escapes_values() {
    let template = HandlebarsTemplate::input().unwrap();

    let markup = template
        .execute(&descriptor("bio", FieldValue::from(r#"<b>"hi"</b>"#)))
        .unwrap();

    assert!(!markup.contains("<b>"));
    assert!(markup.contains("&lt;b&gt;"));
}

#[test]
fn HandlebarsTemplate___custom_source___sees_label_and_placeholder() {
    let template =
        HandlebarsTemplate::new(r#"<label>{{Label}}</label><input placeholder="{{Placeholder}}">"#)
            .unwrap();
    let field = FieldDescriptor::new("street", "text", FieldValue::from("")).nested_under("address", ".");

    let markup = template.execute(&field).unwrap();

    assert_eq!(markup, r#"<label>street</label><input placeholder="street">"#);
}

#[test]
fn HandlebarsTemplate___invalid_source___fails_to_compile() {
    assert!(HandlebarsTemplate::new("{{#if Value}}{{/each}}").is_err());
}

#[test]
fn HandlebarsTemplate___strict_unknown_attribute___fails_execution() {
    let template = HandlebarsTemplate::strict("{{Missing}}").unwrap();

    let result = template.execute(&descriptor("name", FieldValue::from("x")));

    assert!(result.is_err());
}

#[test]
fn HandlebarsTemplate___lenient_unknown_attribute___renders_empty() {
    let template = HandlebarsTemplate::new("[{{Missing}}]").unwrap();

    let markup = template.execute(&descriptor("name", FieldValue::from("x"))).unwrap();

    assert_eq!(markup, "[]");
}

#[test]
fn HandlebarsTemplate___from_config___uses_configured_source() {
    let config = FormConfig::default().with_template("{{Name}}={{Value}};");
    let template = HandlebarsTemplate::from_config(&config).unwrap();

    let markup = template.execute(&descriptor("age", FieldValue::UInt(3))).unwrap();

    assert_eq!(markup, "age=3;");
}

#[test]
fn HandlebarsTemplate___from_default_config___uses_input_template() {
    let template = HandlebarsTemplate::from_config(&FormConfig::default()).unwrap();

    let markup = template.execute(&descriptor("q", FieldValue::from(""))).unwrap();

    assert_eq!(markup, r#"<input type="text" name="q">"#);
}

fn execute_via<T: Template>(template: T, field: &FieldDescriptor) -> String {
    template.execute(field).unwrap()
}

#[test]
fn Template___boxed_and_borrowed___delegate() {
    let template = HandlebarsTemplate::new("{{Name}}").unwrap();
    let boxed: Box<dyn Template> = Box::new(HandlebarsTemplate::new("{{Name}}").unwrap());
    let field = descriptor("x", FieldValue::from(""));

    assert_eq!(execute_via(&template, &field), "x");
    assert_eq!(execute_via(boxed, &field), "x");
}
