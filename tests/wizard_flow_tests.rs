use std::collections::BTreeMap;

use onboard_core::errors::WizardError;
use onboard_core::registry::{Field, RecordStore};
use onboard_core::wizard::{Step, WizardController};

fn input(pairs: &[(Field, &str)]) -> BTreeMap<Field, String> {
    pairs
        .iter()
        .map(|(field, value)| (*field, value.to_string()))
        .collect()
}

#[test]
fn example_scenario_from_empty_store_to_committed_edit() {
    let mut store = RecordStore::new();
    let mut wizard = WizardController::new();
    let mut editor = onboard_core::editor::TableEditor::new();

    wizard
        .advance(input(&[(Field::FirstName, "Ana"), (Field::LastName, "Lee")]))
        .unwrap();
    wizard
        .advance(input(&[
            (Field::BankName, "Acme Bank"),
            (Field::IfscCode, "ACME0001"),
        ]))
        .unwrap();
    wizard.confirm(&mut store).unwrap();
    assert_eq!(store.len(), 1);

    editor.begin_edit(&store, 0).unwrap();
    editor.update_field(Field::BankName, "Acme Trust").unwrap();
    assert!(editor.is_field_dirty(Field::BankName));
    assert!(!editor.is_field_dirty(Field::FirstName));

    editor.commit(&mut store).unwrap();
    assert_eq!(store.all()[0].bank_name, "Acme Trust");
    assert_eq!(store.len(), 1);
}

#[test]
fn back_navigation_preserves_every_field_for_reentry() {
    let mut wizard = WizardController::new();
    wizard
        .advance(input(&[(Field::FirstName, "Ana"), (Field::LastName, "Lee")]))
        .unwrap();
    wizard
        .advance(input(&[
            (Field::BankName, "Acme Bank"),
            (Field::IfscCode, "ACME0001"),
        ]))
        .unwrap();

    wizard.retreat();
    wizard.retreat();
    assert_eq!(wizard.current_step(), Step::PersonalDetails);

    // Re-advance with edited values; untouched fields keep their old values.
    wizard
        .advance(input(&[(Field::FirstName, "Anya"), (Field::LastName, "Lee")]))
        .unwrap();
    assert_eq!(wizard.draft_value(Field::FirstName), Some("Anya"));
    assert_eq!(wizard.draft_value(Field::BankName), Some("Acme Bank"));
    assert_eq!(wizard.draft_value(Field::IfscCode), Some("ACME0001"));
}

#[test]
fn failed_advance_never_moves_or_mutates() {
    let mut wizard = WizardController::new();
    let errors = wizard
        .advance(input(&[(Field::FirstName, "Ana"), (Field::LastName, "")]))
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::LastName);
    assert_eq!(wizard.current_step(), Step::PersonalDetails);
    assert!(wizard.draft().is_empty());
}

#[test]
fn consecutive_submissions_append_in_order() {
    let mut store = RecordStore::new();
    let mut wizard = WizardController::new();

    for name in ["Ana", "Bo"] {
        wizard
            .advance(input(&[(Field::FirstName, name), (Field::LastName, "Lee")]))
            .unwrap();
        wizard
            .advance(input(&[
                (Field::BankName, "Acme Bank"),
                (Field::IfscCode, "ACME0001"),
            ]))
            .unwrap();
        wizard.confirm(&mut store).unwrap();
        assert_eq!(wizard.current_step(), Step::PersonalDetails);
    }

    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].first_name, "Ana");
    assert_eq!(store.all()[1].first_name, "Bo");
}

#[test]
fn confirm_is_rejected_before_the_preview_step() {
    let mut store = RecordStore::new();
    let mut wizard = WizardController::new();
    wizard
        .advance(input(&[(Field::FirstName, "Ana"), (Field::LastName, "Lee")]))
        .unwrap();
    assert_eq!(wizard.confirm(&mut store), Err(WizardError::NotAtPreview));
    assert!(store.is_empty());
    assert_eq!(wizard.current_step(), Step::BankDetails);
}

#[test]
fn accepted_records_have_no_empty_fields() {
    let mut store = RecordStore::new();
    let mut wizard = WizardController::new();
    wizard
        .advance(input(&[(Field::FirstName, " Ana "), (Field::LastName, "Lee")]))
        .unwrap();
    wizard
        .advance(input(&[
            (Field::BankName, "Acme Bank"),
            (Field::IfscCode, "ACME0001"),
        ]))
        .unwrap();
    wizard.confirm(&mut store).unwrap();

    for record in store.all() {
        for field in Field::ALL {
            assert!(!record.get(field).is_empty());
        }
    }
}
