//! Field registration and whole-form verification.
//!
//! A [`Form`] owns an ordered set of fields, each paired with one rule.
//! The owning view writes field values as the user types and calls
//! [`Form::verify`] from its submit handler; the boolean answers "may we
//! proceed" and the per-field error slots are current by the time it
//! returns.

mod field;
mod rules;

pub use field::{Field, FieldId, ValidationState};
pub use rules::{BoxedRule, Length, NumericRange, Pattern, Required, RuleViolation};

use crate::validate::Validator;
use thiserror::Error;

/// Misconfiguration detected while wiring a form up.
///
/// These are programming errors in the registering view, reported at call
/// time; nothing here can occur during [`Form::verify`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field `{0}` is already registered")]
    DuplicateField(FieldId),

    #[error("unknown field `{0}`")]
    UnknownField(FieldId),
}

struct Entry {
    field: Field,
    rule: BoxedRule,
}

/// Form field validator.
///
/// Fields are verified in registration order. All state is owned by the
/// containing view and everything runs synchronously on the caller's
/// thread.
#[derive(Default)]
pub struct Form {
    entries: Vec<Entry>,
    ready: bool,
    on_ready_change: Option<Box<dyn FnMut(bool)>>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field together with its rule.
    ///
    /// Registering an identifier twice is rejected; use
    /// [`Form::replace_rule`] to swap the rule of an existing field.
    pub fn register<R>(&mut self, field: Field, rule: R) -> Result<(), FormError>
    where
        R: Validator<str, Error = RuleViolation> + Send + 'static,
    {
        if self.entry(field.id()).is_some() {
            return Err(FormError::DuplicateField(field.id().clone()));
        }

        self.entries.push(Entry {
            field,
            rule: Box::new(rule),
        });
        self.update_readiness();
        Ok(())
    }

    /// Replace the rule of an already registered field.
    pub fn replace_rule<R>(&mut self, id: &FieldId, rule: R) -> Result<(), FormError>
    where
        R: Validator<str, Error = RuleViolation> + Send + 'static,
    {
        let entry = self
            .entry_mut(id)
            .ok_or_else(|| FormError::UnknownField(id.clone()))?;
        entry.rule = Box::new(rule);
        Ok(())
    }

    /// Overwrite a field's current text.
    pub fn set_value(&mut self, id: &FieldId, value: impl Into<String>) -> Result<(), FormError> {
        let entry = self
            .entry_mut(id)
            .ok_or_else(|| FormError::UnknownField(id.clone()))?;
        entry.field.set_value(value.into());
        self.update_readiness();
        Ok(())
    }

    pub fn value(&self, id: &FieldId) -> Result<&str, FormError> {
        self.entry(id)
            .map(|e| e.field.value())
            .ok_or_else(|| FormError::UnknownField(id.clone()))
    }

    pub fn error_message(&self, id: &FieldId) -> Result<Option<&str>, FormError> {
        self.entry(id)
            .map(|e| e.field.error_message())
            .ok_or_else(|| FormError::UnknownField(id.clone()))
    }

    /// Fields in registration order, for rendering.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.entries.iter().map(|e| &e.field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every field against its rule, in registration order.
    ///
    /// Returns true iff all fields pass. Every field is evaluated, never
    /// short-circuited, and every error slot is set or cleared before
    /// this returns, so the caller may branch on the result and redraw
    /// immediately. Re-running with unchanged values yields the same
    /// outcome.
    pub fn verify(&mut self) -> bool {
        let mut failed = 0usize;
        for entry in &mut self.entries {
            let result = entry.rule.validate(entry.field.value());
            if result.is_err() {
                failed += 1;
            }
            entry.field.set_state(ValidationState::from_result(result));
        }

        if failed > 0 {
            log::debug!("form verification failed for {failed}/{} fields", self.len());
        }
        failed == 0
    }

    /// Clear every field's value and error state.
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.field.clear();
        }
        self.update_readiness();
    }

    /// Whether every field currently has a value.
    ///
    /// This is the cheap pre-check a shell uses to enable its submit
    /// control while the user is still typing; [`Form::verify`] remains
    /// the authoritative answer.
    pub fn is_ready(&self) -> bool {
        self.entries.iter().all(|e| !e.field.value().is_empty())
    }

    /// Register a callback invoked whenever readiness flips.
    ///
    /// The callback fires on edges only, with the new readiness value.
    pub fn on_ready_change(&mut self, callback: impl FnMut(bool) + 'static) {
        self.ready = self.is_ready();
        self.on_ready_change = Some(Box::new(callback));
    }

    fn update_readiness(&mut self) {
        let ready = self.is_ready();
        if ready != self.ready {
            self.ready = ready;
            if let Some(callback) = self.on_ready_change.as_mut() {
                callback(ready);
            }
        }
    }

    fn entry(&self, id: &FieldId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.field.id() == id)
    }

    fn entry_mut(&mut self, id: &FieldId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.field.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn login_form() -> Form {
        let mut form = Form::new();
        assert_ok!(form.register(Field::new("username", "Username"), Required::new("Username")));
        assert_ok!(form.register(Field::new("password", "Password"), Required::new("Password")));
        form
    }

    #[test]
    fn verify_fails_on_empty_field_and_sets_error() {
        let mut form = Form::new();
        assert_ok!(form.register(Field::new("username", "Username"), Required::new("Username")));

        assert!(!form.verify());
        assert_eq!(
            form.error_message(&"username".into()).unwrap(),
            Some("Username cannot be empty")
        );
    }

    #[test]
    fn verify_passes_on_filled_field_and_clears_error() {
        let mut form = Form::new();
        assert_ok!(form.register(Field::new("username", "Username"), Required::new("Username")));

        assert!(!form.verify());

        assert_ok!(form.set_value(&"username".into(), "abc"));
        assert!(form.verify());
        assert_eq!(form.error_message(&"username".into()).unwrap(), None);
    }

    #[test]
    fn only_the_failing_field_carries_an_error() {
        let mut form = login_form();
        assert_ok!(form.set_value(&"username".into(), "dawid"));

        assert!(!form.verify());
        assert_eq!(form.error_message(&"username".into()).unwrap(), None);
        assert_eq!(
            form.error_message(&"password".into()).unwrap(),
            Some("Password cannot be empty")
        );
    }

    #[test]
    fn verify_is_idempotent_for_unchanged_values() {
        let mut form = login_form();
        assert_ok!(form.set_value(&"username".into(), "dawid"));

        let first = form.verify();
        let first_errors: Vec<_> = form
            .fields()
            .map(|f| f.error_message().map(str::to_string))
            .collect();

        let second = form.verify();
        let second_errors: Vec<_> = form
            .fields()
            .map(|f| f.error_message().map(str::to_string))
            .collect();

        assert_eq!(first, second);
        assert_eq!(first_errors, second_errors);
    }

    #[test]
    fn verify_evaluates_all_fields() {
        // Both fields empty: no short-circuit after the first failure
        let mut form = login_form();

        assert!(!form.verify());
        assert!(form.fields().all(|f| f.error_message().is_some()));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut form = login_form();

        let err = form
            .register(Field::new("username", "Username"), Required::new("Username"))
            .unwrap_err();
        assert_eq!(err, FormError::DuplicateField("username".into()));
        // The original registration is untouched
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut form = login_form();

        assert_err!(form.set_value(&"missing".into(), "x"));
        assert_err!(form.value(&"missing".into()));
        assert_eq!(
            form.error_message(&"missing".into()).unwrap_err(),
            FormError::UnknownField("missing".into())
        );
    }

    #[test]
    fn replace_rule_swaps_the_rule_in_place() {
        let mut form = login_form();
        assert_ok!(form.set_value(&"username".into(), "dawid"));
        assert_ok!(form.set_value(&"password".into(), "short"));
        assert!(form.verify());

        assert_ok!(form.replace_rule(&"password".into(), Length::new("Password").with_min(8)));
        assert!(!form.verify());
        assert_eq!(
            form.error_message(&"password".into()).unwrap(),
            Some("Password is too short (5 characters, minimum 8)")
        );

        assert_err!(form.replace_rule(&"missing".into(), Required::new("Missing")));
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = login_form();
        assert_ok!(form.set_value(&"username".into(), "dawid"));
        assert!(!form.verify());

        form.reset();
        assert!(form.fields().all(|f| f.value().is_empty()));
        assert!(form.fields().all(|f| f.error_message().is_none()));
    }

    #[test]
    fn readiness_callback_fires_on_edges_only() {
        let mut form = login_form();
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = Rc::clone(&seen);
        form.on_ready_change(move |ready| sink.borrow_mut().push(ready));

        assert_ok!(form.set_value(&"username".into(), "a"));
        // Still not ready: password is empty
        assert_ok!(form.set_value(&"username".into(), "ab"));
        assert_ok!(form.set_value(&"password".into(), "pw"));
        assert_ok!(form.set_value(&"password".into(), "pw2"));
        form.reset();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
