use std::fs;

use classdef_cli::commands::{build_class_report, build_layout, ClassSpec};
use classdef_core::model::EncodedValue;
use tempfile::tempdir;

const WIDGET: &str = r#"
type: Lcom/example/Widget;
access: [public]
superclass: Ljava/lang/Object;
interfaces: [Ljava/lang/Runnable;, Ljava/io/Closeable;]
source_file: Widget.java
fields:
  - { name: B, type: I, access: [private] }
  - { name: A, type: I, access: [private] }
  - { name: C, type: J, access: [public, static, final] }
methods:
  - { name: m1, access: [public, static] }
  - { name: m2, access: [public] }
  - { name: m3, params: [I], return: Z, access: [private] }
  - { name: "<init>", access: [public, constructor] }
static_values:
  - { kind: long, value: 42 }
"#;

#[test]
fn class_report_is_canonical() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("widget.yaml");
    fs::write(&path, WIDGET).unwrap();

    let report = build_class_report(&path).unwrap();
    assert_eq!(report.type_name, "Lcom/example/Widget;");
    assert_eq!(report.access_flags, 0x1);
    assert_eq!(report.interfaces, vec!["Ljava/lang/Runnable;", "Ljava/io/Closeable;"]);
    assert_eq!(report.static_fields, vec!["Lcom/example/Widget;->C:J"]);
    assert_eq!(
        report.instance_fields,
        vec!["Lcom/example/Widget;->A:I", "Lcom/example/Widget;->B:I"]
    );
    assert_eq!(
        report.direct_methods,
        vec![
            "Lcom/example/Widget;-><init>()V",
            "Lcom/example/Widget;->m1()V",
            "Lcom/example/Widget;->m3(I)Z",
        ]
    );
    assert_eq!(report.virtual_methods, vec!["Lcom/example/Widget;->m2()V"]);
    assert_eq!(report.static_values, Some(1));
    assert_eq!(report.class_def_index, None);
    assert_eq!(report.annotation_directory_offset, None);
}

#[test]
fn class_report_rejects_unknown_access_keyword() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("bad.yaml");
    fs::write(&path, "type: La;\nfields:\n  - { name: x, type: I, access: [sealed] }\n").unwrap();

    let err = build_class_report(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid access flags on field La;.x"), "unexpected: {err}");
}

#[test]
fn spec_without_members_builds_empty_entry() {
    let spec: ClassSpec = serde_yaml::from_str("type: Lempty;").unwrap();
    let entry = spec.to_entry().unwrap();
    assert!(entry.all_fields().is_empty());
    assert!(entry.all_methods().is_empty());
    assert!(entry.static_initializers().is_none());
    assert_eq!(entry.superclass(), None);
}

#[test]
fn static_values_line_up_with_sorted_static_fields() {
    let spec: ClassSpec = serde_yaml::from_str(
        r#"
type: Lapp/Config;
fields:
  - { name: timeout, type: I, access: [static] }
  - { name: retries, type: I, access: [static] }
static_values:
  - { kind: int, value: 3 }
  - { kind: int, value: 30 }
"#,
    )
    .unwrap();
    let entry = spec.to_entry().unwrap();

    let names: Vec<&str> = entry.static_fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["retries", "timeout"]);
    let values = entry.static_initializers().unwrap().values();
    assert_eq!(values, &[EncodedValue::Int(3), EncodedValue::Int(30)]);
}

const HIERARCHY: &str = r#"
classes:
  - type: Lapp/Main;
    superclass: Lapp/Base;
    annotations: [Ljava/lang/Deprecated;]
  - type: Lapp/Base;
    superclass: Ljava/lang/Object;
    interfaces: [Lapp/Api;]
  - type: Lapp/Api;
    access: [public, interface, abstract]
    methods:
      - name: call
        access: [public, abstract]
        annotations: [Lapp/Remote;]
"#;

#[test]
fn layout_orders_supertypes_first_and_places_directories() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("classes.yaml");
    fs::write(&path, HIERARCHY).unwrap();

    let rows = build_layout(&path, 0x70).unwrap();
    let order: Vec<&str> = rows.iter().map(|r| r.type_name.as_str()).collect();
    assert_eq!(order, vec!["Lapp/Api;", "Lapp/Base;", "Lapp/Main;"]);
    assert_eq!(rows.iter().map(|r| r.class_def_index).collect::<Vec<_>>(), vec![0, 1, 2]);

    // Api: 16-byte header + one annotated method record; Base has no annotations.
    assert_eq!(rows[0].annotation_directory_offset, Some(0x70));
    assert_eq!(rows[1].annotation_directory_offset, None);
    assert_eq!(rows[2].annotation_directory_offset, Some(0x88));
}

#[test]
fn layout_rejects_duplicate_classes() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("dup.yaml");
    fs::write(&path, "classes:\n  - type: La;\n  - type: La;\n").unwrap();

    let err = build_layout(&path, 0x70).unwrap_err();
    assert!(err.to_string().contains("Failed to add class La;"), "unexpected: {err}");
    assert!(format!("{err:#}").contains("already been interned"));
}
