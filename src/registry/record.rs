use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The four fields every finalized record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    BankName,
    IfscCode,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::BankName,
        Field::IfscCode,
    ];

    /// Stable key used by the CLI and serialized forms.
    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "first-name",
            Field::LastName => "last-name",
            Field::BankName => "bank-name",
            Field::IfscCode => "ifsc-code",
        }
    }

    /// Human-facing label used in prompts and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::BankName => "Bank Name",
            Field::IfscCode => "IFSC Code",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One finalized user's personal and bank data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub bank_name: String,
    pub ifsc_code: String,
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::BankName => &self.bank_name,
            Field::IfscCode => &self.ifsc_code,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::BankName => &mut self.bank_name,
            Field::IfscCode => &mut self.ifsc_code,
        };
        *slot = value.into();
    }
}

/// In-progress, possibly incomplete record accumulated by the wizard.
///
/// Values survive back-navigation; later merges overwrite earlier values
/// for the same field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<Field, String>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Fields not yet present in the draft, in declaration order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| !self.values.contains_key(field))
            .collect()
    }

    /// Builds a complete record, or reports which fields are still missing.
    pub fn to_record(&self) -> Result<Record, Vec<Field>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }
        let mut record = Record::default();
        for (field, value) in &self.values {
            record.set(*field, value.clone());
        }
        Ok(record)
    }
}
