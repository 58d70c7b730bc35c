use std::path::Path;

use anyhow::Result;
use classdef_core::class::ClassEntry;
use serde::Serialize;

use crate::commands::{load_document, ClassSpec};

/// Serializable snapshot of a canonical class entry.
#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    #[serde(rename = "type")]
    pub type_name: String,
    pub access_flags: u32,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub source_file: Option<String>,
    pub annotations: Vec<String>,
    pub static_fields: Vec<String>,
    pub instance_fields: Vec<String>,
    pub direct_methods: Vec<String>,
    pub virtual_methods: Vec<String>,
    pub static_values: Option<usize>,
    pub class_def_index: Option<u32>,
    pub annotation_directory_offset: Option<u32>,
}

impl From<&ClassEntry> for ClassReport {
    fn from(entry: &ClassEntry) -> Self {
        Self {
            type_name: entry.type_name().to_string(),
            access_flags: entry.access_flags().bits(),
            superclass: entry.superclass().map(str::to_string),
            interfaces: entry.interface_type_names().into_iter().map(str::to_string).collect(),
            source_file: entry.source_file().map(str::to_string),
            annotations: entry.annotations().iter().map(|a| a.to_string()).collect(),
            static_fields: entry.static_fields().iter().map(|f| f.to_string()).collect(),
            instance_fields: entry.instance_fields().iter().map(|f| f.to_string()).collect(),
            direct_methods: entry.direct_methods().iter().map(|m| m.to_string()).collect(),
            virtual_methods: entry.virtual_methods().iter().map(|m| m.to_string()).collect(),
            static_values: entry.static_initializers().map(|v| v.len()),
            class_def_index: entry.class_def_index().get(),
            annotation_directory_offset: entry.annotation_directory_offset().get(),
        }
    }
}

/// Load one class description and canonicalize it.
pub fn build_class_report(input: &Path) -> Result<ClassReport> {
    let spec: ClassSpec = load_document(input)?;
    let entry = spec.to_entry()?;
    Ok(ClassReport::from(&entry))
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        println!("{label}: (none)");
        return;
    }
    println!("{label}:");
    for item in items {
        println!("  - {item}");
    }
}

/// Print the canonical shape of a single class.
pub fn show_class_command(input: &str, json: bool) -> Result<()> {
    let report = build_class_report(Path::new(input))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Class: {}", report.type_name);
    println!("Access flags: 0x{:x}", report.access_flags);
    println!("Superclass: {}", report.superclass.as_deref().unwrap_or("(none)"));
    println!("Source file: {}", report.source_file.as_deref().unwrap_or("(none)"));
    print_list("Interfaces", &report.interfaces);
    print_list("Annotations", &report.annotations);
    print_list("Static fields", &report.static_fields);
    print_list("Instance fields", &report.instance_fields);
    print_list("Direct methods", &report.direct_methods);
    print_list("Virtual methods", &report.virtual_methods);
    if let Some(count) = report.static_values {
        println!("Static values: {count}");
    }

    Ok(())
}
