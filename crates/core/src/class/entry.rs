use std::cmp::Ordering;
use std::fmt;

use log::debug;

use super::set::SortedSet;
use super::slot::{AddressSlot, SlotError, SlotKind};
use crate::model::{
    method_is_direct, AccessFlags, AnnotationSetRef, ArrayValueRef, FieldEntry,
    MethodClassifier, MethodEntry, StringRef, TypeRef,
};

/// Inputs for one class definition, collected before canonicalization.
///
/// Optional member collections default to empty. Nothing is sorted or partitioned
/// until [`ClassEntryBuilder::build`].
#[derive(Debug, Clone)]
pub struct ClassEntryBuilder {
    type_ref: TypeRef,
    access_flags: AccessFlags,
    superclass: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    source_file: Option<StringRef>,
    annotations: AnnotationSetRef,
    static_fields: Vec<FieldEntry>,
    instance_fields: Vec<FieldEntry>,
    methods: Vec<MethodEntry>,
    static_initializers: Option<ArrayValueRef>,
}

impl ClassEntryBuilder {
    pub fn new(type_ref: impl Into<TypeRef>, access_flags: AccessFlags) -> Self {
        Self {
            type_ref: type_ref.into(),
            access_flags,
            superclass: None,
            interfaces: Vec::new(),
            source_file: None,
            annotations: AnnotationSetRef::empty(),
            static_fields: Vec::new(),
            instance_fields: Vec::new(),
            methods: Vec::new(),
            static_initializers: None,
        }
    }

    pub fn superclass(mut self, superclass: Option<TypeRef>) -> Self {
        self.superclass = superclass;
        self
    }

    pub fn interfaces(mut self, interfaces: Vec<TypeRef>) -> Self {
        self.interfaces = interfaces;
        self
    }

    pub fn source_file(mut self, source_file: Option<StringRef>) -> Self {
        self.source_file = source_file;
        self
    }

    pub fn annotations(mut self, annotations: AnnotationSetRef) -> Self {
        self.annotations = annotations;
        self
    }

    /// Fields already bucketed as static by the caller. Not re-partitioned.
    pub fn static_fields(mut self, fields: impl IntoIterator<Item = FieldEntry>) -> Self {
        self.static_fields = fields.into_iter().collect();
        self
    }

    /// Fields already bucketed as instance fields by the caller. Not re-partitioned.
    pub fn instance_fields(mut self, fields: impl IntoIterator<Item = FieldEntry>) -> Self {
        self.instance_fields = fields.into_iter().collect();
        self
    }

    /// Unordered methods; split into direct/virtual at build time.
    pub fn methods(mut self, methods: impl IntoIterator<Item = MethodEntry>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    pub fn static_initializers(mut self, values: Option<ArrayValueRef>) -> Self {
        self.static_initializers = values;
        self
    }

    /// Canonicalize using the well-known direct-method predicate.
    pub fn build(self) -> ClassEntry {
        const DEFAULT_CLASSIFIER: MethodClassifier = method_is_direct;
        self.build_with(DEFAULT_CLASSIFIER)
    }

    /// Canonicalize using a caller-supplied direct-method predicate.
    ///
    /// Every method the predicate rejects is treated as virtual.
    pub fn build_with<F>(self, is_direct: F) -> ClassEntry
    where
        F: Fn(&MethodEntry) -> bool,
    {
        let (direct, virtual_): (Vec<MethodEntry>, Vec<MethodEntry>) =
            self.methods.into_iter().partition(|m| is_direct(m));

        let entry = ClassEntry {
            type_ref: self.type_ref,
            access_flags: self.access_flags,
            superclass: self.superclass,
            interfaces: self.interfaces,
            source_file: self.source_file,
            annotations: self.annotations,
            static_fields: self.static_fields.into_iter().collect(),
            instance_fields: self.instance_fields.into_iter().collect(),
            direct_methods: direct.into_iter().collect(),
            virtual_methods: virtual_.into_iter().collect(),
            static_initializers: self.static_initializers,
            class_def_index: AddressSlot::new(SlotKind::ClassDefIndex),
            annotation_directory_offset: AddressSlot::new(SlotKind::AnnotationDirectoryOffset),
        };

        debug!(
            "canonicalized {}: {} static / {} instance fields, {} direct / {} virtual methods",
            entry.type_ref,
            entry.static_fields.len(),
            entry.instance_fields.len(),
            entry.direct_methods.len(),
            entry.virtual_methods.len()
        );

        entry
    }
}

/// One class definition in canonical form.
///
/// Member sets are sorted and frozen at construction. The only mutable state left
/// is the pair of assign-once addressing slots written by the layout pass.
///
/// Equality and ordering follow the class type descriptor alone, so entries can be
/// sorted and looked up the same way type references are.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    type_ref: TypeRef,
    access_flags: AccessFlags,
    superclass: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    source_file: Option<StringRef>,
    annotations: AnnotationSetRef,
    static_fields: SortedSet<FieldEntry>,
    instance_fields: SortedSet<FieldEntry>,
    direct_methods: SortedSet<MethodEntry>,
    virtual_methods: SortedSet<MethodEntry>,
    static_initializers: Option<ArrayValueRef>,
    class_def_index: AddressSlot,
    annotation_directory_offset: AddressSlot,
}

impl ClassEntry {
    pub fn builder(type_ref: impl Into<TypeRef>, access_flags: AccessFlags) -> ClassEntryBuilder {
        ClassEntryBuilder::new(type_ref, access_flags)
    }

    pub fn type_name(&self) -> &str {
        self.type_ref.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn access_flags(&self) -> AccessFlags {
        self.access_flags
    }

    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_ref().map(TypeRef::as_str)
    }

    pub fn superclass_ref(&self) -> Option<&TypeRef> {
        self.superclass.as_ref()
    }

    pub fn source_file(&self) -> Option<&str> {
        self.source_file.as_ref().map(StringRef::as_str)
    }

    pub fn annotations(&self) -> &AnnotationSetRef {
        &self.annotations
    }

    pub fn interfaces(&self) -> &[TypeRef] {
        &self.interfaces
    }

    /// Interface descriptors in declaration order, duplicates included.
    pub fn interface_type_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(TypeRef::as_str).collect()
    }

    pub fn static_fields(&self) -> &SortedSet<FieldEntry> {
        &self.static_fields
    }

    pub fn instance_fields(&self) -> &SortedSet<FieldEntry> {
        &self.instance_fields
    }

    pub fn direct_methods(&self) -> &SortedSet<MethodEntry> {
        &self.direct_methods
    }

    pub fn virtual_methods(&self) -> &SortedSet<MethodEntry> {
        &self.virtual_methods
    }

    /// Static and instance fields merged into one sorted set.
    pub fn all_fields(&self) -> SortedSet<FieldEntry> {
        self.static_fields.merged(&self.instance_fields)
    }

    /// Direct and virtual methods merged into one sorted set.
    pub fn all_methods(&self) -> SortedSet<MethodEntry> {
        self.direct_methods.merged(&self.virtual_methods)
    }

    pub fn static_initializers(&self) -> Option<&ArrayValueRef> {
        self.static_initializers.as_ref()
    }

    /// Whether the class needs an annotation directory: class, field or method
    /// annotations are present.
    pub fn has_annotation_directory_content(&self) -> bool {
        !self.annotations.is_empty()
            || self.all_fields_iter().any(|f| !f.annotations.is_empty())
            || self.all_methods_iter().any(|m| !m.annotations.is_empty())
    }

    pub fn class_def_index(&self) -> &AddressSlot {
        &self.class_def_index
    }

    pub fn annotation_directory_offset(&self) -> &AddressSlot {
        &self.annotation_directory_offset
    }

    pub fn set_class_def_index(&mut self, index: u32) -> Result<(), SlotError> {
        self.class_def_index.assign(index)
    }

    pub fn set_annotation_directory_offset(&mut self, offset: u32) -> Result<(), SlotError> {
        self.annotation_directory_offset.assign(offset)
    }

    fn all_fields_iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.static_fields.iter().chain(self.instance_fields.iter())
    }

    fn all_methods_iter(&self) -> impl Iterator<Item = &MethodEntry> {
        self.direct_methods.iter().chain(self.virtual_methods.iter())
    }
}

impl PartialEq for ClassEntry {
    fn eq(&self, other: &Self) -> bool {
        self.type_ref == other.type_ref
    }
}

impl Eq for ClassEntry {}

impl Ord for ClassEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_ref.cmp(&other.type_ref)
    }
}

impl PartialOrd for ClassEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ClassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_ref.as_str())
    }
}
