//! Core data model for class definitions.
//!
//! This module contains:
//! - Interned reference handles handed out by the type/string/annotation/array pools
//! - Access flag encoding
//! - Field and method descriptors with their identity ordering
//! - The well-known direct/virtual method classification

pub mod access;
pub mod member;
pub mod refs;

pub use access::{AccessFlags, AccessFlagsError};
pub use member::{
    method_is_direct, method_is_virtual, FieldEntry, MethodClassifier, MethodEntry,
    INSTANCE_CONSTRUCTOR_NAME, STATIC_CONSTRUCTOR_NAME,
};
pub use refs::{AnnotationSetRef, ArrayValueRef, EncodedValue, MethodProto, StringRef, TypeRef};
