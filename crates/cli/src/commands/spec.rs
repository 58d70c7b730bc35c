use anyhow::{Context, Result};
use classdef_core::class::ClassEntry;
use classdef_core::model::{
    AccessFlags, AnnotationSetRef, ArrayValueRef, EncodedValue, FieldEntry, MethodEntry,
    MethodProto, StringRef, TypeRef,
};
use log::warn;
use serde::{Deserialize, Serialize};

fn default_return_type() -> String {
    "V".to_string()
}

/// One class as described in a YAML/JSON input file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassSpec {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub access: Vec<String>,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub source_file: Option<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub methods: Vec<MethodSpec>,
    /// Initial values for the static fields in canonical (sorted) order, not in the
    /// order `fields` lists them.
    #[serde(default)]
    pub static_values: Option<Vec<EncodedValue>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub access: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MethodSpec {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(rename = "return", default = "default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub access: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// A set of classes destined for one output file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassFileSpec {
    pub classes: Vec<ClassSpec>,
}

fn annotation_set(names: &[String]) -> AnnotationSetRef {
    AnnotationSetRef::new(names.iter().map(TypeRef::new).collect())
}

impl ClassSpec {
    /// Build the canonical entry. Fields are bucketed by their `static` keyword and
    /// every member is defined by this class.
    pub fn to_entry(&self) -> Result<ClassEntry> {
        let access = AccessFlags::from_keywords(&self.access)
            .with_context(|| format!("Invalid access flags on class {}", self.type_name))?;

        let mut static_fields = Vec::new();
        let mut instance_fields = Vec::new();
        for field in &self.fields {
            let flags = AccessFlags::from_keywords(&field.access).with_context(|| {
                format!("Invalid access flags on field {}.{}", self.type_name, field.name)
            })?;
            let entry = FieldEntry::new(
                self.type_name.as_str(),
                &field.name,
                field.field_type.as_str(),
                flags,
            )
            .with_annotations(annotation_set(&field.annotations));
            if entry.is_static() {
                static_fields.push(entry);
            } else {
                instance_fields.push(entry);
            }
        }

        let methods = self
            .methods
            .iter()
            .map(|method| {
                let flags = AccessFlags::from_keywords(&method.access).with_context(|| {
                    format!("Invalid access flags on method {}.{}", self.type_name, method.name)
                })?;
                let proto = MethodProto::new(
                    method.params.iter().map(TypeRef::new).collect(),
                    method.return_type.as_str(),
                );
                Ok(MethodEntry::new(self.type_name.as_str(), &method.name, proto, flags)
                    .with_annotations(annotation_set(&method.annotations)))
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(values) = &self.static_values {
            if values.len() > static_fields.len() {
                warn!(
                    "{} lists {} static values for {} static fields",
                    self.type_name,
                    values.len(),
                    static_fields.len()
                );
            }
            if !values.is_empty() && static_fields.windows(2).any(|pair| pair[0] > pair[1]) {
                warn!(
                    "{} declares static fields out of canonical order; static values follow the \
                     sorted order",
                    self.type_name
                );
            }
        }

        Ok(ClassEntry::builder(self.type_name.as_str(), access)
            .superclass(self.superclass.as_deref().map(TypeRef::new))
            .interfaces(self.interfaces.iter().map(TypeRef::new).collect())
            .source_file(self.source_file.as_deref().map(StringRef::new))
            .annotations(annotation_set(&self.annotations))
            .static_fields(static_fields)
            .instance_fields(instance_fields)
            .methods(methods)
            .static_initializers(self.static_values.clone().map(ArrayValueRef::new))
            .build())
    }
}
