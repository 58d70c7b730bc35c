use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::access::AccessFlags;
use super::refs::{AnnotationSetRef, MethodProto, TypeRef};

/// Name of instance constructors.
pub const INSTANCE_CONSTRUCTOR_NAME: &str = "<init>";
/// Name of the static class initializer.
pub const STATIC_CONSTRUCTOR_NAME: &str = "<clinit>";

/// Field descriptor as supplied by the field builder.
///
/// Identity is `(defining_class, name, field_type)`; access flags do not take part
/// in equality, hashing or ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEntry {
    pub defining_class: TypeRef,
    pub name: String,
    pub field_type: TypeRef,
    pub access_flags: AccessFlags,
    #[serde(default)]
    pub annotations: AnnotationSetRef,
}

impl FieldEntry {
    pub fn new(
        defining_class: impl Into<TypeRef>,
        name: impl Into<String>,
        field_type: impl Into<TypeRef>,
        access_flags: AccessFlags,
    ) -> Self {
        Self {
            defining_class: defining_class.into(),
            name: name.into(),
            field_type: field_type.into(),
            access_flags,
            annotations: AnnotationSetRef::empty(),
        }
    }

    pub fn with_annotations(mut self, annotations: AnnotationSetRef) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn is_static(&self) -> bool {
        self.access_flags.contains(AccessFlags::STATIC)
    }

    fn identity(&self) -> (&TypeRef, &str, &TypeRef) {
        (&self.defining_class, &self.name, &self.field_type)
    }
}

impl PartialEq for FieldEntry {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for FieldEntry {}

impl Hash for FieldEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl Ord for FieldEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl PartialOrd for FieldEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}:{}", self.defining_class, self.name, self.field_type)
    }
}

/// Method descriptor as supplied by the method builder.
///
/// Identity is `(defining_class, name, proto)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodEntry {
    pub defining_class: TypeRef,
    pub name: String,
    pub proto: MethodProto,
    pub access_flags: AccessFlags,
    #[serde(default)]
    pub annotations: AnnotationSetRef,
}

impl MethodEntry {
    pub fn new(
        defining_class: impl Into<TypeRef>,
        name: impl Into<String>,
        proto: MethodProto,
        access_flags: AccessFlags,
    ) -> Self {
        Self {
            defining_class: defining_class.into(),
            name: name.into(),
            proto,
            access_flags,
            annotations: AnnotationSetRef::empty(),
        }
    }

    pub fn with_annotations(mut self, annotations: AnnotationSetRef) -> Self {
        self.annotations = annotations;
        self
    }

    /// Constructors are flagged explicitly, but `<init>`/`<clinit>` count even when
    /// the flag was left off by the producer.
    pub fn is_constructor(&self) -> bool {
        self.access_flags.contains(AccessFlags::CONSTRUCTOR)
            || self.name == INSTANCE_CONSTRUCTOR_NAME
            || self.name == STATIC_CONSTRUCTOR_NAME
    }

    pub fn is_static(&self) -> bool {
        self.access_flags.contains(AccessFlags::STATIC)
    }

    pub fn is_private(&self) -> bool {
        self.access_flags.contains(AccessFlags::PRIVATE)
    }

    /// Statically dispatched: static, private, or a constructor.
    pub fn is_direct(&self) -> bool {
        self.access_flags.intersects(AccessFlags::STATIC | AccessFlags::PRIVATE)
            || self.is_constructor()
    }

    pub fn is_virtual(&self) -> bool {
        !self.is_direct()
    }

    fn identity(&self) -> (&TypeRef, &str, &MethodProto) {
        (&self.defining_class, &self.name, &self.proto)
    }
}

impl PartialEq for MethodEntry {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for MethodEntry {}

impl Hash for MethodEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl Ord for MethodEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl PartialOrd for MethodEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MethodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}{}", self.defining_class, self.name, self.proto)
    }
}

/// Predicate deciding whether a method belongs in the direct-method table.
pub type MethodClassifier = fn(&MethodEntry) -> bool;

/// Well-known direct-method predicate.
pub fn method_is_direct(method: &MethodEntry) -> bool {
    method.is_direct()
}

/// Well-known virtual-method predicate.
pub fn method_is_virtual(method: &MethodEntry) -> bool {
    method.is_virtual()
}
