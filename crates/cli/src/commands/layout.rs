use std::path::Path;

use anyhow::{Context, Result};
use classdef_core::pool::{annotation_directory_size, ClassPool};
use log::info;
use serde::Serialize;

use crate::commands::{load_document, ClassFileSpec};

/// One row of the class definition table after layout.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LayoutRow {
    pub class_def_index: u32,
    #[serde(rename = "type")]
    pub type_name: String,
    pub superclass: Option<String>,
    pub annotation_directory_offset: Option<u32>,
}

/// Load a file of class descriptions, pool them, and run both addressing passes.
pub fn build_layout(input: &Path, annotation_base: u32) -> Result<Vec<LayoutRow>> {
    let spec: ClassFileSpec = load_document(input)?;

    let mut pool = ClassPool::new();
    for class in &spec.classes {
        pool.intern(class.to_entry()?)
            .with_context(|| format!("Failed to add class {}", class.type_name))?;
    }
    pool.assign_class_def_indices().context("Failed to assign class definition indices")?;
    let end = pool
        .assign_annotation_directory_offsets(annotation_base, annotation_directory_size)
        .context("Failed to assign annotation directory offsets")?;
    info!("laid out {} classes; annotation directories end at 0x{:x}", pool.len(), end);

    let rows = pool
        .classes_by_index()?
        .into_iter()
        .map(|entry| LayoutRow {
            class_def_index: entry.class_def_index().expect_resolved(),
            type_name: entry.type_name().to_string(),
            superclass: entry.superclass().map(str::to_string),
            annotation_directory_offset: entry.annotation_directory_offset().get(),
        })
        .collect();
    Ok(rows)
}

/// Print the class definition table for a file of classes.
pub fn layout_command(input: &str, annotation_base: u32, json: bool) -> Result<()> {
    let rows = build_layout(Path::new(input), annotation_base)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("Classes: (none)");
        return Ok(());
    }

    println!("Classes:");
    for row in rows {
        let offset = row
            .annotation_directory_offset
            .map(|o| format!("0x{o:x}"))
            .unwrap_or_else(|| "-".to_string());
        println!("  [{}] {} (annotations: {})", row.class_def_index, row.type_name, offset);
    }

    Ok(())
}
