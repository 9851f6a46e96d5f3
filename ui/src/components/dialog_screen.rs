use tuirealm::command::CmdResult;
use tuirealm::event::{Key, KeyEvent};
use tuirealm::ratatui::layout::{Alignment, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent, State};

use super::common::{Msg, NavigationMsg, PopupActivityMsg};
use crate::theme::ThemeManager;

/// Dialog demo: opens a confirmation popup and reports the choice.
#[derive(Default)]
pub struct DialogScreen;

impl DialogScreen {
    pub fn new() -> Self {
        Self
    }
}

impl MockComponent for DialogScreen {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ThemeManager::primary_accent()))
            .title(" Dialog ")
            .title_alignment(Alignment::Center);

        let lines = vec![
            Line::from(""),
            Line::from("A modal dialog asks before anything irreversible happens."),
            Line::from("Confirming runs the action; declining drops it."),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[Enter]",
                    Style::default()
                        .fg(ThemeManager::shortcut_key())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Open dialog"),
            ]),
        ];

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for DialogScreen {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                Some(Msg::Navigation(NavigationMsg::BackToMenu))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => Some(Msg::Popup(PopupActivityMsg::ShowConfirmation {
                title: "Delete everything?".to_string(),
                message: "This is only a demo, nothing will actually be deleted.".to_string(),
                on_confirm: Box::new(Msg::Popup(PopupActivityMsg::ShowSuccess(
                    "Action confirmed.".to_string(),
                ))),
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_requests_a_confirmation_popup() {
        let mut screen = DialogScreen::new();

        let msg = screen.on(Event::Keyboard(KeyEvent::from(Key::Enter)));
        assert!(matches!(
            msg,
            Some(Msg::Popup(PopupActivityMsg::ShowConfirmation { .. }))
        ));
    }
}
