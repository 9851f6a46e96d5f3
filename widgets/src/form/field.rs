use std::fmt;

/// Identifier a field is registered and looked up under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Outcome of the last check of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationState {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationState {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }

    pub fn from_result<E: fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(e) => Self::invalid(e.to_string()),
        }
    }
}

/// One labeled single-line text input under validation.
///
/// The error slot is written exclusively by [`Form::verify`] and
/// [`Form::reset`]: it holds a message iff the last check of this field
/// failed.
///
/// [`Form::verify`]: crate::form::Form::verify
/// [`Form::reset`]: crate::form::Form::reset
#[derive(Debug, Clone)]
pub struct Field {
    id: FieldId,
    label: String,
    value: String,
    state: ValidationState,
}

impl Field {
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: String::new(),
            state: ValidationState::valid(),
        }
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message.as_deref()
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn set_state(&mut self, state: ValidationState) {
        self.state = state;
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.state = ValidationState::valid();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_is_empty_and_unflagged() {
        let field = Field::new("username", "Username");

        assert_eq!(field.value(), "");
        assert!(field.is_valid());
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn validation_state_from_result() {
        let ok = ValidationState::from_result(Ok::<(), String>(()));
        assert!(ok.is_valid);
        assert_eq!(ok.error_message, None);

        let err = ValidationState::from_result(Err::<(), String>("bad".to_string()));
        assert!(!err.is_valid);
        assert_eq!(err.error_message, Some("bad".to_string()));
    }

    #[test]
    fn error_message_present_iff_invalid() {
        let mut field = Field::new("code", "Code");

        field.set_state(ValidationState::invalid("Code cannot be empty"));
        assert!(!field.is_valid());
        assert_eq!(field.error_message(), Some("Code cannot be empty"));

        field.set_state(ValidationState::valid());
        assert!(field.is_valid());
        assert_eq!(field.error_message(), None);
    }
}
