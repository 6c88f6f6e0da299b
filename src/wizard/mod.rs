//! Guided multi-step collection of one user's details.
//!
//! The wizard owns an in-progress draft and walks a fixed sequence of
//! steps, validating each step's required fields before advancing. Values
//! survive back-navigation, so earlier steps can be revisited and edited
//! without losing data. A successful confirmation appends the completed
//! record to the registry and resets the session for the next user.

use std::collections::BTreeMap;

use crate::errors::{ValidationError, WizardError};
use crate::registry::{Draft, Field, Record, RecordStore};

/// Steps of the collection flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    PersonalDetails,
    BankDetails,
    Preview,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::PersonalDetails, Step::BankDetails, Step::Preview];

    pub fn index(&self) -> usize {
        match self {
            Step::PersonalDetails => 0,
            Step::BankDetails => 1,
            Step::Preview => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalDetails => "Personal Details",
            Step::BankDetails => "Bank Details",
            Step::Preview => "Preview & Submit",
        }
    }

    /// Fields collected and validated by this step.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::PersonalDetails => &[Field::FirstName, Field::LastName],
            Step::BankDetails => &[Field::BankName, Field::IfscCode],
            Step::Preview => &[],
        }
    }

    fn next(&self) -> Option<Step> {
        match self {
            Step::PersonalDetails => Some(Step::BankDetails),
            Step::BankDetails => Some(Step::Preview),
            Step::Preview => None,
        }
    }

    fn prev(&self) -> Option<Step> {
        match self {
            Step::PersonalDetails => None,
            Step::BankDetails => Some(Step::PersonalDetails),
            Step::Preview => Some(Step::BankDetails),
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::PersonalDetails
    }
}

/// State of one in-progress collection flow.
#[derive(Debug, Default)]
pub struct WizardController {
    step: Step,
    draft: Draft,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Value previously entered for `field`, used to pre-fill revisited steps.
    pub fn draft_value(&self, field: Field) -> Option<&str> {
        self.draft.get(field)
    }

    /// Validates the current step's required fields and, on success, merges
    /// the input into the draft and moves to the next step.
    ///
    /// On failure the wizard reports every missing field and stays put.
    /// Values are trimmed before the required check; whitespace-only input
    /// counts as missing.
    pub fn advance(
        &mut self,
        input: BTreeMap<Field, String>,
    ) -> Result<Step, Vec<ValidationError>> {
        let errors: Vec<ValidationError> = self
            .step
            .fields()
            .iter()
            .filter(|field| {
                input
                    .get(field)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(true)
            })
            .map(|field| ValidationError::required(*field))
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }

        for (field, value) in input {
            self.draft.insert(field, value.trim().to_string());
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Steps back one, clamped at the first step. Never touches the draft.
    pub fn retreat(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Finalizes the draft from the preview step: appends a copy of the
    /// completed record to `store`, resets the session, and returns the
    /// record that was appended.
    pub fn confirm(&mut self, store: &mut RecordStore) -> Result<Record, WizardError> {
        if self.step != Step::Preview {
            return Err(WizardError::NotAtPreview);
        }
        let record = self.draft.to_record().map_err(|missing| {
            WizardError::Incomplete(missing.into_iter().map(ValidationError::required).collect())
        })?;
        store.append(record.clone());
        self.draft.clear();
        self.step = Step::PersonalDetails;
        Ok(record)
    }
}
