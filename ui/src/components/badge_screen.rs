use tuirealm::command::CmdResult;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::{Alignment, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue};

use super::common::{Msg, NavigationMsg};
use crate::config;
use crate::theme::ThemeManager;
use widgets::badge::Badge;

/// Badge demo: a counter pinned to an inbox glyph.
pub struct BadgeScreen {
    badge: Badge,
}

impl BadgeScreen {
    pub fn new() -> Self {
        let config = config::get_config_or_panic();
        Self {
            badge: Badge::new().with_maximum(config.demo().badge_maximum()),
        }
    }
}

impl Default for BadgeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MockComponent for BadgeScreen {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ThemeManager::primary_accent()))
            .title(" Badge ")
            .title_alignment(Alignment::Center);

        let badge_span = if !self.badge.is_visible() {
            Span::styled("(hidden)", Style::default().fg(ThemeManager::text_muted()))
        } else if self.badge.is_dot() {
            Span::styled(
                " \u{25cf} ",
                Style::default()
                    .fg(ThemeManager::status_error())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!(" {} ", self.badge.label()),
                Style::default()
                    .fg(ThemeManager::text_primary())
                    .bg(ThemeManager::status_error())
                    .add_modifier(Modifier::BOLD),
            )
        };

        let keys = config::get_config_or_panic().keys();
        let lines = vec![
            Line::from(""),
            Line::from(vec![Span::raw("Inbox  "), badge_span]),
            Line::from(""),
            Line::from(format!("Unread count: {}", self.badge.number())),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("[{}]", keys.increment()),
                    Style::default().fg(ThemeManager::shortcut_key()),
                ),
                Span::raw(" More  "),
                Span::styled(
                    format!("[{}]", keys.decrement()),
                    Style::default().fg(ThemeManager::shortcut_key()),
                ),
                Span::raw(" Fewer  "),
                Span::styled(
                    format!("[{}]", keys.dot()),
                    Style::default().fg(ThemeManager::shortcut_key()),
                ),
                Span::raw(" Dot mode  "),
                Span::styled(
                    format!("[{}]", keys.reset()),
                    Style::default().fg(ThemeManager::shortcut_key()),
                ),
                Span::raw(" Clear"),
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
        State::One(StateValue::String(self.badge.label()))
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for BadgeScreen {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let keys = config::get_config_or_panic().keys();
        match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                Some(Msg::Navigation(NavigationMsg::BackToMenu))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) => {
                if c == keys.increment() {
                    self.badge.increment();
                } else if c == keys.decrement() {
                    self.badge.decrement();
                } else if c == keys.dot() {
                    self.badge.set_dot(!self.badge.is_dot());
                } else if c == keys.reset() {
                    self.badge.set_number(0);
                } else {
                    return None;
                }
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
    fn increments_until_the_label_caps() {
        let mut screen = BadgeScreen::new();
        for _ in 0..100 {
            screen.on(Event::Keyboard(KeyEvent::from(Key::Char('+'))));
        }

        assert_eq!(screen.state(), State::One(StateValue::String("99+".into())));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut screen = BadgeScreen::new();

        assert_eq!(
            screen.on(Event::Keyboard(KeyEvent::from(Key::Char('x')))),
            None
        );
    }
}
