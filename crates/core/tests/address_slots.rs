use classdef_core::class::{
    AddressSlot, ClassEntry, Slot, SlotError, SlotKind, NO_INDEX, NO_OFFSET,
};
use classdef_core::model::AccessFlags;

fn entry() -> ClassEntry {
    ClassEntry::builder("Lcom/example/Slots;", AccessFlags::PUBLIC).build()
}

#[test]
fn slots_start_unresolved_with_sentinels() {
    let entry = entry();
    assert_eq!(entry.class_def_index().state(), Slot::Unresolved);
    assert_eq!(entry.class_def_index().get(), None);
    assert_eq!(entry.class_def_index().raw(), NO_INDEX);
    assert_eq!(entry.annotation_directory_offset().get(), None);
    assert_eq!(entry.annotation_directory_offset().raw(), i64::from(NO_OFFSET));
}

#[test]
fn assignment_is_visible_and_independent() {
    let mut entry = entry();
    entry.set_class_def_index(3).unwrap();

    assert_eq!(entry.class_def_index().get(), Some(3));
    assert_eq!(entry.class_def_index().expect_resolved(), 3);
    assert!(!entry.annotation_directory_offset().is_resolved());

    entry.set_annotation_directory_offset(0x70).unwrap();
    assert_eq!(entry.annotation_directory_offset().get(), Some(0x70));
    assert_eq!(entry.class_def_index().get(), Some(3));
}

#[test]
fn second_assignment_is_rejected_and_keeps_first_value() {
    let mut entry = entry();
    entry.set_class_def_index(1).unwrap();
    let err = entry.set_class_def_index(2).unwrap_err();
    assert_eq!(
        err,
        SlotError::AlreadyAssigned { slot: SlotKind::ClassDefIndex, current: 1, attempted: 2 }
    );
    assert_eq!(entry.class_def_index().get(), Some(1));

    entry.set_annotation_directory_offset(0x40).unwrap();
    let err = entry.set_annotation_directory_offset(0x40).unwrap_err();
    assert!(err.to_string().contains("annotation_directory_offset already assigned"));
}

#[test]
#[should_panic(expected = "read before the layout pass assigned it")]
fn reading_unassigned_offset_is_a_defect() {
    entry().annotation_directory_offset().expect_resolved();
}

#[test]
fn slots_know_which_field_they_address() {
    let entry = entry();
    assert_eq!(entry.class_def_index().kind(), SlotKind::ClassDefIndex);
    assert_eq!(entry.annotation_directory_offset().kind(), SlotKind::AnnotationDirectoryOffset);
}

#[test]
fn zero_is_a_valid_index_but_not_a_valid_offset() {
    let mut index = AddressSlot::new(SlotKind::ClassDefIndex);
    assert!(index.assign(0).is_ok());
    assert_eq!(index.raw(), 0);

    let mut offset = AddressSlot::new(SlotKind::AnnotationDirectoryOffset);
    assert_eq!(
        offset.assign(0),
        Err(SlotError::SentinelValue { slot: SlotKind::AnnotationDirectoryOffset, value: 0 })
    );
    assert!(!offset.is_resolved());
}

#[test]
#[should_panic(expected = "class_def_index read before the layout pass assigned it")]
fn reading_unassigned_index_is_a_defect() {
    AddressSlot::new(SlotKind::ClassDefIndex).expect_resolved();
}
