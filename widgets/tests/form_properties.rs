use proptest::prelude::*;
use widgets::form::{Field, FieldId, Form, Required};

fn required_form(values: &[String]) -> (Form, Vec<FieldId>) {
    let mut form = Form::new();
    let mut ids = Vec::new();
    for (i, value) in values.iter().enumerate() {
        let id = FieldId::new(format!("field{i}"));
        let label = format!("Field {i}");
        form.register(Field::new(id.clone(), label.clone()), Required::new(label))
            .expect("ids are unique");
        form.set_value(&id, value.clone()).expect("just registered");
        ids.push(id);
    }
    (form, ids)
}

proptest! {
    #[test]
    fn verify_is_false_iff_some_field_is_empty(
        values in prop::collection::vec(".{0,12}", 1..8)
    ) {
        let (mut form, _) = required_form(&values);

        let any_empty = values.iter().any(|v| v.is_empty());
        prop_assert_eq!(form.verify(), !any_empty);
    }

    #[test]
    fn error_slots_mirror_per_field_outcome(
        values in prop::collection::vec(".{0,12}", 1..8)
    ) {
        let (mut form, ids) = required_form(&values);
        form.verify();

        for (id, value) in ids.iter().zip(values.iter()) {
            let message = form.error_message(id).expect("registered");
            prop_assert_eq!(message.is_some(), value.is_empty());
        }
    }

    #[test]
    fn verify_is_idempotent_for_unchanged_values(
        values in prop::collection::vec(".{0,12}", 1..8)
    ) {
        let (mut form, ids) = required_form(&values);

        let first = form.verify();
        let first_errors: Vec<_> = ids
            .iter()
            .map(|id| form.error_message(id).unwrap().map(str::to_string))
            .collect();

        let second = form.verify();
        let second_errors: Vec<_> = ids
            .iter()
            .map(|id| form.error_message(id).unwrap().map(str::to_string))
            .collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_errors, second_errors);
    }

    #[test]
    fn reset_then_verify_fails_for_any_nonempty_form(
        values in prop::collection::vec(".{1,12}", 1..8)
    ) {
        let (mut form, _) = required_form(&values);
        prop_assert!(form.verify());

        form.reset();
        prop_assert!(!form.verify());
    }
}
