//! Integration of the form demo with the message flow: keyboard events in,
//! submit outcome out, failure surfaced through the error reporting channel.

use std::sync::mpsc;

use claims::assert_ok;
use tuirealm::Component;
use tuirealm::event::{Event, Key, KeyEvent};
use vitrine::components::common::{FormActivityMsg, Msg, PopupActivityMsg};
use vitrine::components::form_screen::FormScreen;
use vitrine::error::{AppError, ErrorReporter};

fn press(screen: &mut FormScreen, key: Key) -> Option<Msg> {
    screen.on(Event::Keyboard(KeyEvent::from(key)))
}

fn type_text(screen: &mut FormScreen, text: &str) {
    for c in text.chars() {
        press(screen, Key::Char(c));
    }
}

#[test]
fn completed_form_submits_as_passed() {
    let mut screen = assert_ok!(FormScreen::new());

    type_text(&mut screen, "dawid");
    press(&mut screen, Key::Tab);
    type_text(&mut screen, "correct horse battery");
    press(&mut screen, Key::Tab);
    type_text(&mut screen, "4711");

    let msg = press(&mut screen, Key::Enter);
    assert_eq!(
        msg,
        Some(Msg::Form(FormActivityMsg::Submitted { passed: true }))
    );
}

#[test]
fn half_filled_form_submits_as_failed_and_stays_usable() {
    let mut screen = assert_ok!(FormScreen::new());
    type_text(&mut screen, "dawid");

    let msg = press(&mut screen, Key::Enter);
    assert_eq!(
        msg,
        Some(Msg::Form(FormActivityMsg::Submitted { passed: false }))
    );

    // Completing the remaining fields turns the next submit around
    press(&mut screen, Key::Tab);
    type_text(&mut screen, "correct horse battery");
    press(&mut screen, Key::Tab);
    type_text(&mut screen, "4711");

    let msg = press(&mut screen, Key::Enter);
    assert_eq!(
        msg,
        Some(Msg::Form(FormActivityMsg::Submitted { passed: true }))
    );
}

#[test]
fn verification_failure_reaches_the_popup_channel() {
    let (tx, rx) = mpsc::channel();
    let reporter = ErrorReporter::new(tx);

    // What the update layer does when a submit comes back failed
    reporter.report_simple(
        AppError::Validation("Fix the highlighted fields and try again.".to_string()),
        "FormDemo",
        "verify",
    );

    let msg = rx.recv().expect("popup message should arrive");
    match msg {
        Msg::Popup(PopupActivityMsg::ShowError(AppError::Validation(text))) => {
            assert!(text.contains("highlighted fields"));
        }
        other => panic!("Expected validation error popup, got {other:?}"),
    }
}
