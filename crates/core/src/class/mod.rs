//! Canonical class definitions.
//!
//! A [`ClassEntry`] is built once from resolved references and an unordered pile of
//! members. Construction partitions methods into direct/virtual, sorts every member
//! bucket, and freezes the result. Two [`AddressSlot`]s stay open for the layout
//! pass to fill in exactly once.

mod entry;
mod set;
mod slot;

pub use entry::{ClassEntry, ClassEntryBuilder};
pub use set::SortedSet;
pub use slot::{AddressSlot, Slot, SlotError, SlotKind, NO_INDEX, NO_OFFSET};
