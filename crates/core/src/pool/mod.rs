//! Registry of class entries for one output file.
//!
//! The pool owns every [`ClassEntry`] of a file, rejects duplicate class types, and
//! drives the two assign-once addressing passes:
//! - class definition indices, with pooled supertypes ordered before subtypes
//! - annotation directory offsets, for classes that carry annotations
//!
//! Byte layout of the sections themselves is left to the writer.

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use thiserror::Error;

use crate::class::{ClassEntry, SlotError, SlotKind, NO_OFFSET};
use crate::model::TypeRef;

/// Alignment of annotation directory items in the data section.
pub const ANNOTATION_DIRECTORY_ALIGNMENT: u32 = 4;

/// Error type for class pool operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("Class {0} has already been interned")]
    DuplicateClass(String),

    /// A pooled class is (transitively) its own supertype.
    #[error("Class hierarchy cycle detected at {0}")]
    HierarchyCycle(String),

    #[error("Class {0} has no class definition index yet")]
    IndexUnassigned(String),

    #[error("Too many classes for a 32-bit class definition index")]
    TooManyClasses,

    #[error("Annotation directory offset overflowed after {0}")]
    OffsetOverflow(String),

    #[error(transparent)]
    Slot(#[from] SlotError),
}

/// Convenience result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Size in bytes of the annotation directory item for `entry`: a fixed header plus
/// one 8-byte record per annotated field and per annotated method.
///
/// Saturates at `u32::MAX`, which the offset pass then reports as an overflow.
pub fn annotation_directory_size(entry: &ClassEntry) -> u32 {
    let annotated_fields = entry.all_fields().iter().filter(|f| !f.annotations.is_empty()).count();
    let annotated_methods =
        entry.all_methods().iter().filter(|m| !m.annotations.is_empty()).count();
    annotated_fields
        .checked_add(annotated_methods)
        .and_then(|records| u32::try_from(records).ok())
        .and_then(|records| records.checked_mul(8))
        .and_then(|bytes| bytes.checked_add(16))
        .unwrap_or(u32::MAX)
}

/// All class entries of a file, keyed by type descriptor.
#[derive(Debug, Default)]
pub struct ClassPool {
    classes: BTreeMap<TypeRef, ClassEntry>,
}

impl ClassPool {
    pub fn new() -> Self {
        Self { classes: BTreeMap::new() }
    }

    /// Add a class; a second class with the same type is rejected.
    pub fn intern(&mut self, entry: ClassEntry) -> PoolResult<&ClassEntry> {
        let key = entry.type_ref().clone();
        if self.classes.contains_key(&key) {
            return Err(PoolError::DuplicateClass(key.to_string()));
        }
        trace!("interned class {}", key);
        Ok(self.classes.entry(key).or_insert(entry))
    }

    pub fn get(&self, type_name: &str) -> Option<&ClassEntry> {
        self.classes.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Classes ordered by type descriptor.
    pub fn sorted_classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.values()
    }

    /// Classes ordered by their assigned class definition index.
    pub fn classes_by_index(&self) -> PoolResult<Vec<&ClassEntry>> {
        let mut indexed = self
            .classes
            .values()
            .map(|c| match c.class_def_index().get() {
                Some(index) => Ok((index, c)),
                None => Err(PoolError::IndexUnassigned(c.type_name().to_string())),
            })
            .collect::<PoolResult<Vec<_>>>()?;
        indexed.sort_by_key(|(index, _)| *index);
        Ok(indexed.into_iter().map(|(_, c)| c).collect())
    }

    /// Assign class definition indices.
    ///
    /// Classes are visited in type order; before a class is numbered, its pooled
    /// superclass and then its pooled interfaces are numbered (depth-first).
    /// Supertypes that are not in the pool are skipped. Returns the types in index
    /// order.
    pub fn assign_class_def_indices(&mut self) -> PoolResult<Vec<TypeRef>> {
        let mut state: HashMap<TypeRef, Visit> = HashMap::with_capacity(self.classes.len());
        let mut order: Vec<TypeRef> = Vec::with_capacity(self.classes.len());
        for type_ref in self.classes.keys() {
            self.visit(type_ref, &mut state, &mut order)?;
        }

        let mut indices = Vec::with_capacity(order.len());
        for (position, type_ref) in order.iter().enumerate() {
            let index = u32::try_from(position).map_err(|_| PoolError::TooManyClasses)?;
            if let Some(current) = self.classes.get(type_ref).and_then(|c| c.class_def_index().get())
            {
                return Err(SlotError::AlreadyAssigned {
                    slot: SlotKind::ClassDefIndex,
                    current,
                    attempted: index,
                }
                .into());
            }
            indices.push(index);
        }

        for (type_ref, index) in order.iter().zip(indices) {
            if let Some(entry) = self.classes.get_mut(type_ref) {
                entry.set_class_def_index(index)?;
                trace!("class {} -> class_def_index {}", type_ref, index);
            }
        }

        debug!("assigned {} class definition indices", order.len());
        Ok(order)
    }

    fn visit(
        &self,
        type_ref: &TypeRef,
        state: &mut HashMap<TypeRef, Visit>,
        order: &mut Vec<TypeRef>,
    ) -> PoolResult<()> {
        match state.get(type_ref) {
            Some(Visit::Done) => return Ok(()),
            Some(Visit::InProgress) => {
                return Err(PoolError::HierarchyCycle(type_ref.to_string()));
            }
            None => {}
        }
        let Some(entry) = self.classes.get(type_ref) else {
            return Ok(());
        };

        state.insert(type_ref.clone(), Visit::InProgress);
        if let Some(superclass) = entry.superclass_ref() {
            self.visit(superclass, state, order)?;
        }
        for interface in entry.interfaces() {
            self.visit(interface, state, order)?;
        }
        state.insert(type_ref.clone(), Visit::Done);
        order.push(type_ref.clone());
        Ok(())
    }

    /// Assign annotation directory offsets, in class definition index order, to the
    /// classes that need a directory. Each offset is aligned to
    /// [`ANNOTATION_DIRECTORY_ALIGNMENT`]; `size_of` gives the item size.
    ///
    /// Offsets are planned in full before any slot is written, so a failed pass
    /// leaves every slot unresolved. `start` must leave the first directory at a
    /// non-zero offset. Returns the first offset past the last directory.
    pub fn assign_annotation_directory_offsets<F>(
        &mut self,
        start: u32,
        size_of: F,
    ) -> PoolResult<u32>
    where
        F: Fn(&ClassEntry) -> u32,
    {
        let order: Vec<TypeRef> =
            self.classes_by_index()?.into_iter().map(|c| c.type_ref().clone()).collect();

        let mut offset = start;
        let mut plan: Vec<(TypeRef, u32)> = Vec::new();
        for type_ref in &order {
            let Some(entry) = self.classes.get(type_ref) else {
                continue;
            };
            if !entry.has_annotation_directory_content() {
                continue;
            }
            let aligned = align_up(offset, ANNOTATION_DIRECTORY_ALIGNMENT)
                .ok_or_else(|| PoolError::OffsetOverflow(type_ref.to_string()))?;
            if let Some(current) = entry.annotation_directory_offset().get() {
                return Err(SlotError::AlreadyAssigned {
                    slot: SlotKind::AnnotationDirectoryOffset,
                    current,
                    attempted: aligned,
                }
                .into());
            }
            if aligned == NO_OFFSET {
                return Err(SlotError::SentinelValue {
                    slot: SlotKind::AnnotationDirectoryOffset,
                    value: aligned,
                }
                .into());
            }
            offset = aligned
                .checked_add(size_of(entry))
                .ok_or_else(|| PoolError::OffsetOverflow(type_ref.to_string()))?;
            plan.push((type_ref.clone(), aligned));
        }

        // Nothing is written until every offset is known to fit.
        for (type_ref, aligned) in &plan {
            if let Some(entry) = self.classes.get_mut(type_ref) {
                entry.set_annotation_directory_offset(*aligned)?;
                trace!("class {} -> annotation_directory_offset 0x{:x}", type_ref, aligned);
            }
        }

        debug!("assigned {} annotation directory offsets, next free 0x{:x}", plan.len(), offset);
        Ok(offset)
    }
}

fn align_up(value: u32, alignment: u32) -> Option<u32> {
    let mask = alignment - 1;
    value.checked_add(mask).map(|v| v & !mask)
}
