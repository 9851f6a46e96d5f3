use std::cell::RefCell;
use std::rc::Rc;

use tuirealm::command::CmdResult;
use tuirealm::event::{Key, KeyEvent};
use tuirealm::ratatui::layout::{Alignment, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue};

use super::common::{Msg, NavigationMsg};
use crate::theme::ThemeManager;
use widgets::switch_button::Switch;

/// Switch demo: a toggle whose change listener narrates what happened.
pub struct SwitchScreen {
    switch: Switch,
    // Written by the switch's change listener, read when rendering
    last_change: Rc<RefCell<Option<bool>>>,
}

impl SwitchScreen {
    pub fn new() -> Self {
        let mut switch = Switch::new(false);
        let last_change: Rc<RefCell<Option<bool>>> = Rc::default();
        let observer = Rc::clone(&last_change);
        switch.on_change(move |checked| *observer.borrow_mut() = Some(checked));

        Self {
            switch,
            last_change,
        }
    }
}

impl Default for SwitchScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MockComponent for SwitchScreen {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ThemeManager::primary_accent()))
            .title(" Switch button ")
            .title_alignment(Alignment::Center);

        let switch_span = if self.switch.is_checked() {
            Span::styled(
                "[    ON ]",
                Style::default()
                    .fg(ThemeManager::status_success())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                "[ OFF    ]",
                Style::default()
                    .fg(ThemeManager::text_muted())
                    .add_modifier(Modifier::BOLD),
            )
        };

        let listener_line = match *self.last_change.borrow() {
            Some(true) => "Listener: switched on",
            Some(false) => "Listener: switched off",
            None => "Listener: not fired yet",
        };

        let lines = vec![
            Line::from(""),
            Line::from(switch_span),
            Line::from(""),
            Line::from(listener_line),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[Space]",
                    Style::default()
                        .fg(ThemeManager::shortcut_key())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Toggle"),
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
        State::One(StateValue::Usize(usize::from(self.switch.is_checked())))
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for SwitchScreen {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                Some(Msg::Navigation(NavigationMsg::BackToMenu))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(' ') | Key::Enter,
                ..
            }) => {
                self.switch.toggle();
                Some(Msg::ForceRedraw)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_notifies_the_listener() {
        let mut screen = SwitchScreen::new();
        assert_eq!(*screen.last_change.borrow(), None);

        screen.on(Event::Keyboard(KeyEvent::from(Key::Char(' '))));
        assert_eq!(*screen.last_change.borrow(), Some(true));

        screen.on(Event::Keyboard(KeyEvent::from(Key::Char(' '))));
        assert_eq!(*screen.last_change.borrow(), Some(false));
    }
}
