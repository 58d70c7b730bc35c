use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel emitted for an index that has not been assigned.
pub const NO_INDEX: i64 = -1;

/// Sentinel emitted for an offset that has not been assigned.
pub const NO_OFFSET: u32 = 0;

/// Which addressing field of a class entry a slot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    ClassDefIndex,
    AnnotationDirectoryOffset,
}

impl SlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::ClassDefIndex => "class_def_index",
            SlotKind::AnnotationDirectoryOffset => "annotation_directory_offset",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution state of a deferred address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    #[default]
    Unresolved,
    Resolved(u32),
}

/// Layout-writer protocol violations on an [`AddressSlot`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("{slot} already assigned to {current}; refusing to reassign to {attempted}")]
    AlreadyAssigned { slot: SlotKind, current: u32, attempted: u32 },

    /// The value collides with the "unassigned" sentinel for this slot.
    #[error("{slot} cannot be assigned the sentinel value {value}")]
    SentinelValue { slot: SlotKind, value: u32 },
}

/// Assign-once numeric address filled in by the layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSlot {
    kind: SlotKind,
    state: Slot,
}

impl AddressSlot {
    pub fn new(kind: SlotKind) -> Self {
        Self { kind, state: Slot::Unresolved }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn state(&self) -> Slot {
        self.state
    }

    pub fn get(&self) -> Option<u32> {
        match self.state {
            Slot::Unresolved => None,
            Slot::Resolved(value) => Some(value),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, Slot::Resolved(_))
    }

    /// Transition `Unresolved -> Resolved(value)`. Any other transition is an error.
    pub fn assign(&mut self, value: u32) -> Result<(), SlotError> {
        if self.kind == SlotKind::AnnotationDirectoryOffset && value == NO_OFFSET {
            return Err(SlotError::SentinelValue { slot: self.kind, value });
        }
        match self.state {
            Slot::Resolved(current) => {
                Err(SlotError::AlreadyAssigned { slot: self.kind, current, attempted: value })
            }
            Slot::Unresolved => {
                self.state = Slot::Resolved(value);
                Ok(())
            }
        }
    }

    /// Read a value the caller knows has been assigned.
    ///
    /// # Panics
    ///
    /// Panics if the layout pass has not assigned this slot yet.
    pub fn expect_resolved(&self) -> u32 {
        match self.state {
            Slot::Resolved(value) => value,
            Slot::Unresolved => panic!("{} read before the layout pass assigned it", self.kind),
        }
    }

    /// Sentinel-encoded form: the value, or `NO_INDEX` / `NO_OFFSET` when unresolved.
    pub fn raw(&self) -> i64 {
        match (self.state, self.kind) {
            (Slot::Resolved(value), _) => i64::from(value),
            (Slot::Unresolved, SlotKind::ClassDefIndex) => NO_INDEX,
            (Slot::Unresolved, SlotKind::AnnotationDirectoryOffset) => i64::from(NO_OFFSET),
        }
    }
}
