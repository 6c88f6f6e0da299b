use crate::errors::EditError;

use super::Record;

/// Ordered collection of finalized records.
///
/// Insertion order is display order and the positional identity used for
/// editing. The store only grows via `append`; `replace` swaps a slot
/// atomically and never changes the length.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its index.
    pub fn append(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Overwrites the record at `index` in one step.
    pub fn replace(&mut self, index: usize, record: Record) -> Result<(), EditError> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or(EditError::OutOfRange(index))?;
        *slot = record;
        Ok(())
    }

    /// Read-only view of every record in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Field;

    fn sample(name: &str) -> Record {
        let mut record = Record::default();
        record.set(Field::FirstName, name);
        record.set(Field::LastName, "Lee");
        record.set(Field::BankName, "Acme Bank");
        record.set(Field::IfscCode, "ACME0001");
        record
    }

    #[test]
    fn append_returns_sequential_indices() {
        let mut store = RecordStore::new();
        assert_eq!(store.append(sample("Ana")), 0);
        assert_eq!(store.append(sample("Bo")), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_swaps_slot_without_changing_length() {
        let mut store = RecordStore::new();
        store.append(sample("Ana"));
        store.append(sample("Bo"));

        store.replace(0, sample("Cyd")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].first_name, "Cyd");
        assert_eq!(store.all()[1].first_name, "Bo");
    }

    #[test]
    fn replace_rejects_invalid_index() {
        let mut store = RecordStore::new();
        assert_eq!(
            store.replace(0, sample("Ana")),
            Err(EditError::OutOfRange(0))
        );

        store.append(sample("Ana"));
        assert_eq!(
            store.replace(1, sample("Bo")),
            Err(EditError::OutOfRange(1))
        );
        assert_eq!(store.len(), 1);
    }
}
