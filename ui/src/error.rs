use crate::components::common::{Msg, PopupActivityMsg};
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the vitrine shell.
///
/// Each variant classifies one area of the UI so the reporting layer can
/// pick an appropriate popup and log line. Validation failures of the demo
/// form are ordinary user feedback, not programming errors, but they travel
/// the same popup path.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// UI component lifecycle and rendering errors.
    Component(String),

    /// Application state management issues.
    State(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// Form verification reported failure to the user.
    Validation(String),

    /// Inter-component communication failures.
    Channel(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation Failed: {msg}"),
            AppError::Channel(msg) => write!(f, "Channel Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Error severity levels for appropriate UI response
#[derive(Debug, Clone)]
pub enum ErrorSeverity {
    /// Warning severity - log only
    Warning,
    /// High severity - show error popup and log
    Error,
}

/// Central error reporting system.
///
/// Logs every reported error and forwards popup-worthy ones to the main
/// loop through the model's message channel.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    /// Report an error with component/operation context and raise a popup.
    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        self.report(error, component, operation, ErrorSeverity::Error);
    }

    /// Report a warning; logged but no popup is raised.
    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        self.report(error, component, operation, ErrorSeverity::Warning);
    }

    fn report(&self, error: AppError, component: &str, operation: &str, severity: ErrorSeverity) {
        match severity {
            ErrorSeverity::Warning => {
                log::warn!("[{component}:{operation}] {error}");
            }
            ErrorSeverity::Error => {
                log::error!("[{component}:{operation}] {error}");
                let popup_msg = Msg::Popup(PopupActivityMsg::ShowError(error));
                if let Err(e) = self.tx.send(popup_msg) {
                    log::error!("Failed to send error popup message: {e}");
                }
            }
        }
    }

    // ========== Helper Methods for Common Error Patterns ==========

    /// Report component mounting/unmounting errors
    pub fn report_mount_error(&self, component: &str, operation: &str, error: impl Display) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    /// Report message sending errors (mpsc channel errors)
    pub fn report_send_error(&self, context: &str, error: impl Display) {
        let app_error = AppError::Channel(format!("Failed to send {context}: {error}"));
        self.report_simple(app_error, "MessageChannel", "send_message");
    }

    /// Report activation/focus errors for UI components
    pub fn report_activation_error(&self, component: &str, error: impl Display) {
        let app_error = AppError::Component(format!("Failed to activate {component}: {error}"));
        self.report_simple(app_error, component, "activate");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn error_reporting_raises_a_popup_message() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);
        let error = AppError::Config("missing section".to_string());

        reporter.report_simple(error.clone(), "TestComponent", "test_operation");

        let msg = rx.recv().expect("should receive popup message");
        assert_eq!(msg, Msg::Popup(PopupActivityMsg::ShowError(error)));
    }

    #[test]
    fn warnings_do_not_raise_popups() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_warning(
            AppError::Component("flaky redraw".to_string()),
            "TestComponent",
            "redraw",
        );

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn display_prefixes_the_error_class() {
        let error = AppError::Validation("Username cannot be empty".to_string());

        assert_eq!(
            error.to_string(),
            "Validation Failed: Username cannot be empty"
        );
    }
}
