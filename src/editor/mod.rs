//! Inline table editing of finalized records.
//!
//! At most one record is in edit mode at a time. Starting an edit copies
//! the target record into a scratch buffer; field updates touch only the
//! scratch until `commit` writes it back to the registry in one step.
//! Beginning an edit on another row while one is active silently discards
//! the previous scratch without committing it, matching the observed
//! single-active-editor behavior of the table surface.

use crate::errors::EditError;
use crate::registry::{Field, Record, RecordStore};

#[derive(Debug, Clone)]
struct EditSession {
    index: usize,
    original: Record,
    scratch: Record,
}

/// Copy-edit-commit cycle over one registry slot at a time.
#[derive(Debug, Default)]
pub struct TableEditor {
    session: Option<EditSession>,
}

impl TableEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts editing the record at `index`, copying it verbatim into the
    /// scratch buffer. Any previously active, uncommitted edit is dropped.
    pub fn begin_edit(&mut self, store: &RecordStore, index: usize) -> Result<(), EditError> {
        let record = store.get(index).ok_or(EditError::OutOfRange(index))?;
        self.session = Some(EditSession {
            index,
            original: record.clone(),
            scratch: record.clone(),
        });
        Ok(())
    }

    /// Updates one scratch field. The registry is untouched.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), EditError> {
        let session = self.session.as_mut().ok_or(EditError::NoActiveEdit)?;
        session.scratch.set(field, value);
        Ok(())
    }

    /// Writes the scratch back over the originating slot and ends the
    /// session. Returns the index that was replaced.
    pub fn commit(&mut self, store: &mut RecordStore) -> Result<usize, EditError> {
        let session = self.session.take().ok_or(EditError::NoActiveEdit)?;
        store.replace(session.index, session.scratch)?;
        Ok(session.index)
    }

    /// Discards the scratch without touching the registry. Safe to call
    /// when nothing is active.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// True while a record is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.index)
    }

    /// Current scratch value for `field`, if an edit is active.
    pub fn scratch_value(&self, field: Field) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.scratch.get(field))
    }

    /// True iff the scratch value for `field` differs from the value the
    /// record held when the edit began. False when no edit is active.
    pub fn is_field_dirty(&self, field: Field) -> bool {
        self.session
            .as_ref()
            .map(|session| session.scratch.get(field) != session.original.get(field))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> RecordStore {
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
    fn begin_edit_requires_valid_index() {
        let store = store_with(&["Ana", "Bo"]);
        let mut editor = TableEditor::new();
        assert_eq!(editor.begin_edit(&store, 2), Err(EditError::OutOfRange(2)));
        assert!(editor.begin_edit(&store, 1).is_ok());
        assert_eq!(editor.active_index(), Some(1));
    }

    #[test]
    fn begin_edit_on_empty_store_always_fails() {
        let store = RecordStore::new();
        let mut editor = TableEditor::new();
        assert_eq!(editor.begin_edit(&store, 0), Err(EditError::OutOfRange(0)));
        assert!(!editor.is_editing());
    }

    #[test]
    fn update_without_active_edit_is_rejected() {
        let mut editor = TableEditor::new();
        assert_eq!(
            editor.update_field(Field::BankName, "Acme Trust"),
            Err(EditError::NoActiveEdit)
        );
        let mut store = store_with(&["Ana"]);
        assert_eq!(editor.commit(&mut store), Err(EditError::NoActiveEdit));
    }

    #[test]
    fn commit_replaces_only_the_edited_slot() {
        let mut store = store_with(&["Ana", "Bo"]);
        let mut editor = TableEditor::new();
        editor.begin_edit(&store, 0).unwrap();
        editor.update_field(Field::BankName, "Acme Trust").unwrap();

        let index = editor.commit(&mut store).unwrap();
        assert_eq!(index, 0);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].bank_name, "Acme Trust");
        assert_eq!(store.all()[1].bank_name, "Acme Bank");
        assert!(!editor.is_editing());
    }

    #[test]
    fn cancel_leaves_store_untouched() {
        let mut store = store_with(&["Ana"]);
        let before = store.all()[0].clone();
        let mut editor = TableEditor::new();
        editor.begin_edit(&store, 0).unwrap();
        editor.update_field(Field::FirstName, "Anya").unwrap();

        editor.cancel();
        assert_eq!(store.all()[0], before);
        assert!(!editor.is_editing());

        // No-op safe when nothing is active.
        editor.cancel();
    }

    #[test]
    fn dirty_tracks_scratch_against_original() {
        let store = store_with(&["Ana"]);
        let mut editor = TableEditor::new();
        assert!(!editor.is_field_dirty(Field::BankName));

        editor.begin_edit(&store, 0).unwrap();
        for field in Field::ALL {
            assert!(!editor.is_field_dirty(field));
        }

        editor.update_field(Field::BankName, "Acme Trust").unwrap();
        assert!(editor.is_field_dirty(Field::BankName));
        assert!(!editor.is_field_dirty(Field::FirstName));

        // Restoring the original value clears the flag.
        editor.update_field(Field::BankName, "Acme Bank").unwrap();
        assert!(!editor.is_field_dirty(Field::BankName));
    }

    #[test]
    fn begin_edit_on_another_row_discards_uncommitted_scratch() {
        let mut store = store_with(&["Ana", "Bo"]);
        let mut editor = TableEditor::new();
        editor.begin_edit(&store, 0).unwrap();
        editor.update_field(Field::FirstName, "Anya").unwrap();

        editor.begin_edit(&store, 1).unwrap();
        assert_eq!(editor.active_index(), Some(1));
        assert!(!editor.is_field_dirty(Field::FirstName));

        editor.commit(&mut store).unwrap();
        // The abandoned edit never reached the store.
        assert_eq!(store.all()[0].first_name, "Ana");
        assert_eq!(store.all()[1].first_name, "Bo");
    }
}
