use onboard_core::editor::TableEditor;
use onboard_core::errors::EditError;
use onboard_core::registry::{Field, Record, RecordStore};

fn store_of(names: &[&str]) -> RecordStore {
    let mut store = RecordStore::new();
    for name in names {
        let mut record = Record::default();
        record.set(Field::FirstName, *name);
        record.set(Field::LastName, "Lee");
        record.set(Field::BankName, "Acme Bank");
        record.set(Field::IfscCode, "ACME0001");
        store.append(record);
    }
    store
}

#[test]
fn begin_edit_succeeds_exactly_within_bounds() {
    let store = store_of(&["Ana", "Bo", "Cyd"]);
    let mut editor = TableEditor::new();

    for index in 0..store.len() {
        assert!(editor.begin_edit(&store, index).is_ok());
    }
    for index in [store.len(), store.len() + 5] {
        assert_eq!(
            editor.begin_edit(&store, index),
            Err(EditError::OutOfRange(index))
        );
    }
}

#[test]
fn commit_applies_scratch_and_touches_nothing_else() {
    let mut store = store_of(&["Ana", "Bo", "Cyd"]);
    let untouched: Vec<Record> = store.all().to_vec();
    let mut editor = TableEditor::new();

    editor.begin_edit(&store, 1).unwrap();
    editor.update_field(Field::BankName, "Acme Trust").unwrap();
    editor.update_field(Field::IfscCode, "ACMT0002").unwrap();
    editor.commit(&mut store).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.all()[0], untouched[0]);
    assert_eq!(store.all()[2], untouched[2]);
    assert_eq!(store.all()[1].bank_name, "Acme Trust");
    assert_eq!(store.all()[1].ifsc_code, "ACMT0002");
    assert_eq!(store.all()[1].first_name, "Bo");
}

#[test]
fn cancel_restores_the_pre_edit_state() {
    let mut store = store_of(&["Ana"]);
    let before = store.all()[0].clone();
    let mut editor = TableEditor::new();

    editor.begin_edit(&store, 0).unwrap();
    editor.update_field(Field::FirstName, "Anya").unwrap();
    editor.update_field(Field::LastName, "Li").unwrap();
    editor.cancel();

    assert_eq!(store.all()[0], before);
    assert_eq!(editor.commit(&mut store), Err(EditError::NoActiveEdit));
}

#[test]
fn dirty_is_false_right_after_begin_edit() {
    let store = store_of(&["Ana"]);
    let mut editor = TableEditor::new();
    editor.begin_edit(&store, 0).unwrap();
    for field in Field::ALL {
        assert!(!editor.is_field_dirty(field));
    }
}

#[test]
fn switching_rows_drops_the_previous_scratch_silently() {
    let mut store = store_of(&["Ana", "Bo"]);
    let mut editor = TableEditor::new();

    editor.begin_edit(&store, 0).unwrap();
    editor.update_field(Field::BankName, "Other Bank").unwrap();

    editor.begin_edit(&store, 1).unwrap();
    editor.update_field(Field::BankName, "Second Bank").unwrap();
    editor.commit(&mut store).unwrap();

    assert_eq!(store.all()[0].bank_name, "Acme Bank");
    assert_eq!(store.all()[1].bank_name, "Second Bank");
}

#[test]
fn empty_store_rejects_every_begin_edit() {
    let store = RecordStore::new();
    let mut editor = TableEditor::new();
    assert_eq!(editor.begin_edit(&store, 0), Err(EditError::OutOfRange(0)));
    assert!(!editor.is_editing());
    assert!(!editor.is_field_dirty(Field::FirstName));
}
