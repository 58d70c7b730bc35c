use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Interned reference to a type descriptor (e.g. `Lcom/example/Foo;`, `I`, `[J`).
///
/// Handles are produced by an external type pool. They clone cheaply and compare
/// by descriptor text, which is the order the container uses for its type table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(Arc<str>);

impl TypeRef {
    pub fn new(descriptor: impl AsRef<str>) -> Self {
        Self(Arc::from(descriptor.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TypeRef {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Interned reference to a string constant (source file names, member names).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringRef(Arc<str>);

impl StringRef {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(Arc::from(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StringRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StringRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Method prototype: parameter types plus return type.
///
/// Ordered by return type first, then parameter list, matching the proto table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodProto {
    pub parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
}

impl MethodProto {
    pub fn new(parameters: Vec<TypeRef>, return_type: impl Into<TypeRef>) -> Self {
        Self { parameters, return_type: return_type.into() }
    }
}

impl Ord for MethodProto {
    fn cmp(&self, other: &Self) -> Ordering {
        self.return_type
            .cmp(&other.return_type)
            .then_with(|| self.parameters.cmp(&other.parameters))
    }
}

impl PartialOrd for MethodProto {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MethodProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for param in &self.parameters {
            f.write_str(param.as_str())?;
        }
        write!(f, "){}", self.return_type)
    }
}

/// Reference to an annotation set, kept as the annotation types it carries.
///
/// Always present on a class; an empty set means "no annotations".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationSetRef(Vec<TypeRef>);

impl AnnotationSetRef {
    pub fn new(annotations: Vec<TypeRef>) -> Self {
        Self(annotations)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeRef> {
        self.0.iter()
    }
}

/// Scalar constant stored inside an encoded array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EncodedValue {
    Null,
    Boolean(bool),
    Int(i32),
    Long(i64),
    String(StringRef),
    Type(TypeRef),
}

/// Reference to an encoded-array constant, e.g. the static initializer values of a
/// class, positionally aligned with its sorted static fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayValueRef(Vec<EncodedValue>);

impl ArrayValueRef {
    pub fn new(values: Vec<EncodedValue>) -> Self {
        Self(values)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[EncodedValue] {
        &self.0
    }
}
