use std::cell::Cell;
use std::rc::Rc;

use tuirealm::command::CmdResult;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue};

use super::common::{FormActivityMsg, Msg, NavigationMsg};
use crate::config;
use crate::error::{AppError, AppResult};
use crate::theme::ThemeManager;
use widgets::form::{Field, FieldId, Form, Length, Pattern, Required};

const USERNAME: &str = "username";
const PASSWORD: &str = "password";
const VERIFY_CODE: &str = "verify_code";

/// The login form demo.
///
/// Three fields, one rule each; Enter asks the form to verify everything
/// and reports the overall outcome, while the per-field error slots drive
/// the highlighting on the next draw.
pub struct FormScreen {
    form: Form,
    field_ids: Vec<FieldId>,
    focused: usize,
    // Written by the form's readiness callback, read when rendering
    ready: Rc<Cell<bool>>,
}

impl FormScreen {
    pub fn new() -> AppResult<Self> {
        let config = config::get_config_or_panic();
        let mut form = Form::new();

        form.register(Field::new(USERNAME, "Username"), Required::new("Username"))
            .map_err(|e| AppError::State(e.to_string()))?;

        form.register(
            Field::new(PASSWORD, "Password"),
            Length::new("Password")
                .with_min(config.demo().password_min_length())
                .with_max(64),
        )
        .map_err(|e| AppError::State(e.to_string()))?;

        // A typo in the pattern surfaces here, before the screen mounts
        let code_rule = Pattern::new("Verify code", r"^\d{4}$", "four digits")
            .map_err(|e| AppError::State(format!("Invalid verify code pattern: {e}")))?;
        form.register(Field::new(VERIFY_CODE, "Verify code"), code_rule)
            .map_err(|e| AppError::State(e.to_string()))?;

        let ready = Rc::new(Cell::new(form.is_ready()));
        let observer = Rc::clone(&ready);
        form.on_ready_change(move |is_ready| observer.set(is_ready));

        let field_ids = form.fields().map(|f| f.id().clone()).collect();
        Ok(Self {
            form,
            field_ids,
            focused: 0,
            ready,
        })
    }

    fn edit(&mut self, apply: impl FnOnce(&mut String)) -> Option<Msg> {
        let id = self.field_ids[self.focused].clone();
        let mut value = match self.form.value(&id) {
            Ok(value) => value.to_string(),
            Err(e) => {
                log::error!("Form lookup failed: {e}");
                return None;
            }
        };
        apply(&mut value);
        if let Err(e) = self.form.set_value(&id, value) {
            log::error!("Form update failed: {e}");
        }
        Some(Msg::ForceRedraw)
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.field_ids.len();
    }

    fn focus_previous(&mut self) {
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.field_ids.len() - 1);
    }
}

impl MockComponent for FormScreen {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let mut constraints: Vec<Constraint> =
            self.field_ids.iter().map(|_| Constraint::Length(4)).collect();
        constraints.push(Constraint::Length(2));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(area);

        for (i, field) in self.form.fields().enumerate() {
            let field_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Length(1)].as_ref())
                .split(chunks[i]);

            let border_color = if !field.is_valid() {
                ThemeManager::status_error()
            } else if i == self.focused {
                ThemeManager::primary_accent()
            } else {
                ThemeManager::text_muted()
            };

            let display_value = if field.id().as_str() == PASSWORD {
                "\u{2022}".repeat(field.value().chars().count())
            } else {
                field.value().to_string()
            };

            let input = Paragraph::new(display_value)
                .style(Style::default().fg(ThemeManager::text_primary()))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(border_color))
                        .title(format!(" {} ", field.label())),
                );
            frame.render_widget(input, field_chunks[0]);

            if let Some(message) = field.error_message() {
                let error_line = Paragraph::new(Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(ThemeManager::status_error()),
                )));
                frame.render_widget(error_line, field_chunks[1]);
            }
        }

        // Submit hint mirrors readiness: dimmed until every field has input
        let submit_style = if self.ready.get() {
            Style::default()
                .fg(ThemeManager::status_success())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ThemeManager::text_muted())
        };
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", submit_style),
            Span::raw(" Verify all fields"),
        ]));
        frame.render_widget(hint, chunks[self.field_ids.len()]);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::Usize(usize::from(self.ready.get())))
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for FormScreen {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => {
                let passed = self.form.verify();
                Some(Msg::Form(FormActivityMsg::Submitted { passed }))
            }

            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                Some(Msg::Navigation(NavigationMsg::BackToMenu))
            }

            Event::Keyboard(KeyEvent {
                code: Key::Tab | Key::Down,
                ..
            }) => {
                self.focus_next();
                Some(Msg::ForceRedraw)
            }

            Event::Keyboard(KeyEvent {
                code: Key::BackTab | Key::Up,
                ..
            }) => {
                self.focus_previous();
                Some(Msg::ForceRedraw)
            }

            Event::Keyboard(KeyEvent {
                code: Key::Backspace,
                ..
            }) => self.edit(|value| {
                value.pop();
            }),

            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers,
            }) if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                self.edit(|value| value.push(c))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;

    fn type_text(screen: &mut FormScreen, text: &str) {
        for c in text.chars() {
            screen.on(Event::Keyboard(KeyEvent::from(Key::Char(c))));
        }
    }

    fn filled_screen() -> FormScreen {
        let mut screen = FormScreen::new().unwrap();
        type_text(&mut screen, "dawid");
        screen.on(Event::Keyboard(KeyEvent::from(Key::Tab)));
        type_text(&mut screen, "hunter2hunter2");
        screen.on(Event::Keyboard(KeyEvent::from(Key::Tab)));
        type_text(&mut screen, "1234");
        screen
    }

    #[test]
    fn submitting_a_complete_form_passes() {
        let mut screen = filled_screen();

        let msg = screen.on(Event::Keyboard(KeyEvent::from(Key::Enter)));
        assert_eq!(msg, Some(Msg::Form(FormActivityMsg::Submitted { passed: true })));
    }

    #[test]
    fn submitting_an_empty_form_fails() {
        let mut screen = assert_ok!(FormScreen::new());

        let msg = screen.on(Event::Keyboard(KeyEvent::from(Key::Enter)));
        assert_eq!(
            msg,
            Some(Msg::Form(FormActivityMsg::Submitted { passed: false }))
        );
    }

    #[test]
    fn bad_verify_code_fails_with_a_field_message() {
        let mut screen = filled_screen();
        // Replace the code with a wrong one
        screen.on(Event::Keyboard(KeyEvent::from(Key::Backspace)));

        let msg = screen.on(Event::Keyboard(KeyEvent::from(Key::Enter)));
        assert_eq!(
            msg,
            Some(Msg::Form(FormActivityMsg::Submitted { passed: false }))
        );
        assert_eq!(
            screen.form.error_message(&VERIFY_CODE.into()).unwrap(),
            Some("Verify code must be four digits")
        );
        // The other fields stay clean
        assert_eq!(screen.form.error_message(&USERNAME.into()).unwrap(), None);
    }

    #[test]
    fn readiness_flag_tracks_typed_input() {
        let empty = FormScreen::new().unwrap();
        assert!(!empty.ready.get());

        let filled = filled_screen();
        assert!(filled.ready.get());
    }

    #[test]
    fn escape_returns_to_the_menu() {
        let mut screen = FormScreen::new().unwrap();

        let msg = screen.on(Event::Keyboard(KeyEvent::from(Key::Esc)));
        assert_eq!(msg, Some(Msg::Navigation(NavigationMsg::BackToMenu)));
    }
}
